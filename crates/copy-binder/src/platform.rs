//! Seams between the binder and the page it runs on.
//!
//! Everything here is single-threaded: handlers and futures are not `Send`,
//! matching a browser event loop.

use std::future::Future;
use std::time::Duration;

use crate::error::{BindError, ClipboardError};

/// Callback run each time a control is activated (clicked).
pub type ActivationHandler = Box<dyn FnMut()>;

/// A container that copy controls are looked up in.
pub trait CopyRoot {
    type Control: CopyControl;

    /// All controls below this root matching `selector`, in document order.
    /// Snapshot at call time; controls added later are not returned.
    fn copy_controls(&self, selector: &str) -> Result<Vec<Self::Control>, BindError>;
}

/// A button that copies the code next to it.
pub trait CopyControl: Clone + 'static {
    /// Text of the first element matching `code_selector` inside the
    /// control's nearest preceding sibling. `None` when there is no sibling
    /// or no such element.
    fn code_text(&self, code_selector: &str) -> Option<String>;

    fn set_label(&self, text: &str);

    fn on_activate(&self, handler: ActivationHandler) -> Result<(), BindError>;
}

/// Write-only access to the system clipboard.
pub trait Clipboard: 'static {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// One-shot delays for label resets.
pub trait Timer: 'static {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
