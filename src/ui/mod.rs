//! UI module for rendering the TUI

pub mod components;
mod forms;
pub mod landing;
pub mod layout;
mod popup;

use crate::app::App;
use layout::{LandingLayout, ModalLayout, PopupLayout};
use ratatui::Frame;

/// Main draw function: page, then modal, then overlay on top
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let landing_layout = LandingLayout::new(area);
    landing::draw(frame, &landing_layout, app);

    if app.state.modal.visible {
        forms::draw_contact_modal(frame, &ModalLayout::new(area), &app.state.form);
    }

    layout::draw_status_bar(frame, landing_layout.status_bar, app);

    if let Some(popup) = &app.state.popup {
        popup::draw(frame, &PopupLayout::new(area), popup);
    }
}
