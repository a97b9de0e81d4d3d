use crate::config::Labels;

/// The three states a copy control's label moves through.
///
/// `Copied` and `Failed` are feedback states; entering either one always
/// schedules a return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyLabel {
    Idle,
    Copied,
    Failed,
}

impl CopyLabel {
    /// Text shown on the control for this state.
    pub fn text(self, labels: &Labels) -> &str {
        match self {
            Self::Idle => &labels.idle,
            Self::Copied => &labels.copied,
            Self::Failed => &labels.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_texts() {
        let labels = Labels::default();
        assert_eq!(CopyLabel::Idle.text(&labels), "Copy");
        assert_eq!(CopyLabel::Copied.text(&labels), "Copied!");
        assert_eq!(CopyLabel::Failed.text(&labels), "Failed");
    }

    #[test]
    fn custom_texts() {
        let labels = Labels {
            idle: "Kopieren".into(),
            copied: "Kopiert".into(),
            failed: "Fehler".into(),
        };
        assert_eq!(CopyLabel::Copied.text(&labels), "Kopiert");
        assert_eq!(CopyLabel::Failed.text(&labels), "Fehler");
    }
}
