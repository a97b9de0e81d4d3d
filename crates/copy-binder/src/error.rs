use thiserror::Error;

/// Why a clipboard write did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard API on this platform (old browser, insecure context, no window).
    #[error("clipboard API is not available")]
    Unavailable,

    /// The platform refused the write, usually a permission denial.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Failures while attaching handlers to copy controls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("invalid copy control selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("failed to attach click handler: {0}")]
    Listener(String),

    /// Binding stopped partway; the first `bound` controls keep their handlers.
    #[error("bound {bound} copy controls before failing: {source}")]
    Incomplete {
        bound: usize,
        #[source]
        source: Box<BindError>,
    },
}
