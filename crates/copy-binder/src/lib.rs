//! Copy-to-clipboard buttons for code blocks.
//!
//! [`ClipboardButtonBinder`] finds every copy control below a root container
//! and attaches a click handler to it. Clicking copies the text of the code
//! element in the control's preceding sibling, flashes "Copied!" or "Failed",
//! and puts the label back to "Copy" after a fixed delay.
//!
//! The DOM, the clipboard and the timer are reached through the traits in
//! [`platform`], so the binder runs natively in tests. The `web` feature
//! provides the browser implementations in [`web`].

mod binder;
pub mod config;
mod error;
mod label;
pub mod platform;

#[cfg(feature = "web")]
pub mod web;

pub use binder::{Activation, ClipboardButtonBinder};
pub use config::{BinderConfig, Labels};
pub use error::{BindError, ClipboardError};
pub use label::CopyLabel;
pub use platform::{ActivationHandler, Clipboard, CopyControl, CopyRoot, Timer};
