//! Confirmation/error overlay rendering

use super::components::{render_overlay, OverlayConfig};
use super::layout::PopupLayout;
use crate::state::{Popup, PopupKind};
use ratatui::Frame;

/// Draw the overlay for `popup`
pub fn draw(frame: &mut Frame, layout: &PopupLayout, popup: &Popup) {
    let (icon, accent) = match popup.content.kind {
        PopupKind::Success => ("✓", (80, 200, 120)),
        PopupKind::Error => ("✗", (230, 80, 80)),
    };

    render_overlay(
        frame,
        layout,
        OverlayConfig {
            icon,
            title: &popup.content.title,
            accent,
            message: &popup.content.message,
            opacity: popup.opacity,
            ..Default::default()
        },
    );
}
