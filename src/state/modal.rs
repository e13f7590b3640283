//! Contact modal visibility and the landing page scroll it suspends

/// Visibility of the contact modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
}

impl ModalState {
    /// Show the modal and lock page scrolling
    pub fn open(&mut self, page: &mut PageScroll) {
        self.visible = true;
        page.locked = true;
        tracing::debug!("contact modal opened");
    }

    /// Hide the modal and unlock page scrolling
    pub fn close(&mut self, page: &mut PageScroll) {
        self.visible = false;
        page.locked = false;
        tracing::debug!("contact modal closed");
    }
}

/// Scroll position of the landing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageScroll {
    pub offset: u16,
    pub locked: bool,
}

impl PageScroll {
    /// Scroll by `delta` rows, clamped to `[0, max_offset]`. No-op while locked.
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        if self.locked {
            return;
        }
        let next = (self.offset as i32 + delta).clamp(0, max_offset as i32);
        self.offset = next as u16;
    }
}
