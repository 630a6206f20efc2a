#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Open/closed state of the page-level modal, plus the title it shows.
///
/// Owned by the parent view as `RwSignal<ModalState>`. The only transitions
/// are an external [`ModalState::open`] and the dismiss path
/// ([`ModalState::dismiss`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
    title: String,
}

impl ModalState {
    /// Show the modal with `title` in its header.
    pub fn open(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.is_open = true;
    }

    /// Close the modal. The title is kept so a closing animation or a
    /// re-open can still read it. Closing a closed modal is a no-op.
    pub fn dismiss(&mut self) {
        self.is_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
