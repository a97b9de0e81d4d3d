use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};

use crate::config::BinderConfig;
use crate::error::{BindError, ClipboardError};
use crate::label::CopyLabel;
use crate::platform::{Clipboard, CopyControl, CopyRoot, Timer};

/// What a single activation did, reported once the label is back to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// No code element next to the control; nothing was touched.
    Skipped,
    Copied,
    Failed(ClipboardError),
}

/// Attaches copy behaviour to every copy control below a root.
///
/// Cloning is cheap; clones share the clipboard, timer and config.
pub struct ClipboardButtonBinder<C, T, S> {
    shared: Rc<Shared<C, T>>,
    spawner: S,
}

struct Shared<C, T> {
    config: BinderConfig,
    clipboard: C,
    timer: T,
}

impl<C, T, S> ClipboardButtonBinder<C, T, S>
where
    C: Clipboard,
    T: Timer,
    S: LocalSpawn + Clone + 'static,
{
    pub fn new(config: BinderConfig, clipboard: C, timer: T, spawner: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                clipboard,
                timer,
            }),
            spawner,
        }
    }

    pub fn config(&self) -> &BinderConfig {
        &self.shared.config
    }

    /// Attach one click handler to each control currently under `root`.
    ///
    /// Call once per page. Returns the number of controls bound. If a
    /// handler cannot be attached, the controls before it stay bound and the
    /// error is [`BindError::Incomplete`] carrying that count.
    pub fn bind<R: CopyRoot>(&self, root: &R) -> Result<usize, BindError> {
        let controls = root.copy_controls(&self.shared.config.selector)?;

        for (bound, control) in controls.iter().enumerate() {
            let shared = Rc::clone(&self.shared);
            let spawner = self.spawner.clone();
            let target = control.clone();

            control.on_activate(Box::new(move || {
                let shared = Rc::clone(&shared);
                let target = target.clone();
                let task = async move {
                    shared.activate(&target).await;
                };
                if let Err(err) = spawner.spawn_local(task) {
                    tracing::error!(error = %err, "failed to spawn copy task");
                }
            }))
            .map_err(|err| BindError::Incomplete {
                bound,
                source: Box::new(err),
            })?;
        }

        tracing::debug!(
            count = controls.len(),
            selector = %self.shared.config.selector,
            "bound copy controls"
        );
        Ok(controls.len())
    }

    /// Run one activation of `control` to completion, including the label reset.
    pub async fn activate<B: CopyControl>(&self, control: &B) -> Activation {
        self.shared.activate(control).await
    }
}

impl<C, T, S: Clone> Clone for ClipboardButtonBinder<C, T, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            spawner: self.spawner.clone(),
        }
    }
}

impl<C: Clipboard, T: Timer> Shared<C, T> {
    async fn activate<B: CopyControl>(&self, control: &B) -> Activation {
        let Some(text) = control.code_text(&self.config.code_selector) else {
            tracing::debug!("copy control has no code element, ignoring");
            return Activation::Skipped;
        };

        let (label, activation) = match self.clipboard.write_text(&text).await {
            Ok(()) => (CopyLabel::Copied, Activation::Copied),
            Err(err) => {
                tracing::warn!(error = %err, "failed to copy");
                (CopyLabel::Failed, Activation::Failed(err))
            }
        };

        control.set_label(label.text(&self.config.labels));
        self.timer.sleep(self.config.reset_delay()).await;
        control.set_label(CopyLabel::Idle.text(&self.config.labels));

        activation
    }
}
