pub mod about;
pub mod showcase;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    About,
    Showcase,
}

/// At most one overlay is open at a time; opening another replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Modal> {
        self.active
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.active == Some(modal)
    }

    pub fn open(&mut self, modal: Modal) {
        if let Some(previous) = self.active.replace(modal) {
            if previous != modal {
                debug!(?previous, ?modal, "modal replaced");
            }
        } else {
            debug!(?modal, "modal opened");
        }
    }

    /// Called by the backdrop and the close control alike.
    pub fn request_close(&mut self) -> Option<Modal> {
        let closed = self.active.take();
        if let Some(modal) = closed {
            debug!(?modal, "modal closed");
        }
        closed
    }
}
