//! Site content and copy-button settings, read from `content/site.toml`.
//!
//! The file is embedded at compile time so the server and the wasm bundle
//! see the same content. On the server `DOCS_CONFIG` may point at another
//! file with the same shape.

use anyhow::{Context, Result};
use copy_binder::BinderConfig;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static EMBEDDED: &str = include_str!("../content/site.toml");

/// Global site config, loaded on first use.
pub static CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| match SiteConfig::from_env() {
    Ok(config) => config,
    Err(e) => {
        tracing::error!("Falling back to embedded site config: {:#}", e);
        SiteConfig::embedded()
    }
});

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub base_url: String,
    #[serde(default)]
    pub copy: BinderConfig,
    #[serde(default)]
    pub sections: Vec<DocSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub code: String,
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse site config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// `$DOCS_CONFIG` if set, otherwise the embedded file.
    pub fn from_env() -> Result<Self> {
        match std::env::var("DOCS_CONFIG") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Self::from_toml_str(EMBEDDED),
        }
    }

    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED).expect("embedded content/site.toml is valid")
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            anyhow::ensure!(!section.id.is_empty(), "Section '{}' has an empty id", section.title);
            anyhow::ensure!(seen.insert(section.id.as_str()), "Duplicate section id '{}'", section.id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::embedded();
        assert_eq!(config.name, "nmap_scanner");
        assert_eq!(config.copy, BinderConfig::default());
        assert!(!config.sections.is_empty());
        assert!(
            config
                .sections
                .iter()
                .flat_map(|s| &s.snippets)
                .all(|snippet| !snippet.code.trim().is_empty())
        );
    }

    #[test]
    fn copy_table_is_optional() {
        let config = SiteConfig::from_toml_str(
            r#"
            name = "x"
            tagline = "y"
            base_url = "http://localhost"
            "#,
        )
        .unwrap();
        assert_eq!(config.copy, BinderConfig::default());
        assert!(config.sections.is_empty());
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let err = SiteConfig::from_toml_str(
            r#"
            name = "x"
            tagline = "y"
            base_url = "http://localhost"

            [[sections]]
            id = "usage"
            title = "Usage"

            [[sections]]
            id = "usage"
            title = "Usage again"
            "#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate section id 'usage'"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = SiteConfig::load(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/site.toml"));
    }
}
