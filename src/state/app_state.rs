//! Application state definitions

use super::forms::ContactForm;
use super::modal::{ModalState, PageScroll};
use super::popup::{Popup, PopupContent};
use crate::submission::SubmissionFlow;

/// Main application state
pub struct AppState {
    // Landing page
    pub page: PageScroll,

    // Contact modal
    pub modal: ModalState,
    pub form: ContactForm,
    pub flow: SubmissionFlow,

    // Overlay on top of everything
    pub popup: Option<Popup>,

    // Status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: &str, submit_label: &str) -> Self {
        Self {
            page: PageScroll::default(),
            modal: ModalState::default(),
            form: ContactForm::new(submit_label),
            flow: SubmissionFlow::new(source),
            popup: None,
            status_message: None,
        }
    }

    pub fn open_modal(&mut self) {
        self.modal.open(&mut self.page);
    }

    pub fn close_modal(&mut self) {
        self.modal.close(&mut self.page);
    }

    /// Show an overlay, replacing any overlay still on screen
    pub fn show_popup(&mut self, content: PopupContent) {
        self.popup = Some(Popup::new(content));
    }

    /// Advance the overlay animation and drop it once removed
    pub fn update_popup(&mut self) {
        if let Some(popup) = self.popup.as_mut() {
            popup.update();
            if popup.is_removed() {
                self.popup = None;
            }
        }
    }

    /// Overlay that still listens for dismiss keys
    pub fn open_popup_mut(&mut self) -> Option<&mut Popup> {
        self.popup.as_mut().filter(|p| p.accepts_keys())
    }

    /// True while something on screen is moving and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.flow.is_submitting() || self.popup.as_ref().is_some_and(|p| p.is_animating())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            crate::contact::DEFAULT_SOURCE,
            super::forms::DEFAULT_SUBMIT_LABEL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DismissReason, PopupPhase};

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(!state.modal.visible);
        assert!(!state.page.locked);
        assert!(state.popup.is_none());
        assert!(!state.is_animating());
    }

    #[test]
    fn test_open_and_close_modal_toggle_scroll_lock() {
        let mut state = AppState::default();
        state.open_modal();
        assert!(state.modal.visible && state.page.locked);
        state.close_modal();
        assert!(!state.modal.visible && !state.page.locked);
    }

    #[test]
    fn test_show_popup_replaces_existing() {
        let mut state = AppState::default();
        state.show_popup(PopupContent::error("Server error"));
        state.show_popup(PopupContent::success());
        assert_eq!(
            state.popup.as_ref().map(|p| p.content.clone()),
            Some(PopupContent::success())
        );
    }

    #[test]
    fn test_closing_popup_no_longer_takes_keys() {
        let mut state = AppState::default();
        state.show_popup(PopupContent::success());
        assert!(state.open_popup_mut().is_some());
        if let Some(popup) = state.popup.as_mut() {
            popup.dismiss(DismissReason::Escape);
        }
        assert!(state.open_popup_mut().is_none());
        assert_eq!(
            state.popup.as_ref().map(|p| p.phase),
            Some(PopupPhase::Closing)
        );
        assert!(state.is_animating());
    }

    #[test]
    fn test_update_popup_keeps_open_popup() {
        let mut state = AppState::default();
        state.show_popup(PopupContent::success());
        state.update_popup();
        assert!(state.popup.is_some());
    }
}
