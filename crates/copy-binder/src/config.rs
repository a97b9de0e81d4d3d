//! Binder settings. Every field has a default, so an empty TOML table (or
//! no table at all) gives the stock behaviour.

use serde::Deserialize;
use std::time::Duration;

/// Selector that marks copy controls.
pub const DEFAULT_SELECTOR: &str = ".copy-btn";
/// Selector for the code element inside the control's preceding sibling.
pub const DEFAULT_CODE_SELECTOR: &str = "code";
/// How long a feedback label stays up before reverting.
pub const DEFAULT_RESET_AFTER_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    pub selector: String,
    pub code_selector: String,
    pub reset_after_ms: u64,
    pub labels: Labels,
}

/// Label text for each [`CopyLabel`](crate::CopyLabel) state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub idle: String,
    pub copied: String,
    pub failed: String,
}

impl BinderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            code_selector: DEFAULT_CODE_SELECTOR.to_string(),
            reset_after_ms: DEFAULT_RESET_AFTER_MS,
            labels: Labels::default(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            idle: "Copy".to_string(),
            copied: "Copied!".to_string(),
            failed: "Failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = BinderConfig::from_toml_str("").unwrap();
        assert_eq!(config, BinderConfig::default());
        assert_eq!(config.reset_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn partial_labels_keep_other_defaults() {
        let config = BinderConfig::from_toml_str(
            r#"
            reset_after_ms = 2000

            [labels]
            copied = "Done"
            "#,
        )
        .unwrap();

        assert_eq!(config.selector, ".copy-btn");
        assert_eq!(config.code_selector, "code");
        assert_eq!(config.reset_delay(), Duration::from_secs(2));
        assert_eq!(config.labels.idle, "Copy");
        assert_eq!(config.labels.copied, "Done");
        assert_eq!(config.labels.failed, "Failed");
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(BinderConfig::from_toml_str("reset_after_ms = \"soon\"").is_err());
    }
}
