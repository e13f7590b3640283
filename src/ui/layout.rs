//! Screen geometry (landing page, modal, popup) and the status bar
//!
//! Geometry is computed by pure functions so that drawing and mouse hit
//! testing agree on where every control is.

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the "Let's talk" button on the landing page
const TALK_BUTTON_WIDTH: u16 = 16;
const MODAL_MAX_WIDTH: u16 = 64;
/// Rows of the multiline message box, borders included
const MESSAGE_HEIGHT: u16 = 7;
const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 12;
const OK_BUTTON_WIDTH: u16 = 10;

/// Center a `width` x `height` rect inside `area`, shrinking to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Regions of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingLayout {
    pub header: Rect,
    pub talk_button: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

/// What a click on the landing page landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingHit {
    TalkButton,
    Page,
}

impl LandingLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BUTTON_HEIGHT), // Header
                Constraint::Min(0),                // Page body
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        let header = rows[0];
        let talk_width = TALK_BUTTON_WIDTH.min(header.width);
        let talk_button = Rect {
            x: header.x + header.width - talk_width,
            y: header.y,
            width: talk_width,
            height: header.height,
        };

        Self {
            header,
            talk_button,
            body: rows[1],
            status_bar: rows[2],
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> LandingHit {
        if contains(self.talk_button, column, row) {
            LandingHit::TalkButton
        } else {
            LandingHit::Page
        }
    }
}

/// Regions of the contact modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub modal: Rect,
    pub close_button: Rect,
    pub fields: [Rect; 3],
    pub errors: [Rect; 3],
    pub submit: Rect,
    pub help: Rect,
}

/// What a click inside the modal layer landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Close,
    Field(FieldName),
    Submit,
    /// Inside the dialog but on none of its controls
    Content,
    /// Outside the dialog
    Backdrop,
}

impl ModalLayout {
    /// Height of the dialog including its border
    pub const HEIGHT: u16 = 2 + (3 + 1) * 2 + MESSAGE_HEIGHT + 1 + BUTTON_HEIGHT + 1;

    pub fn new(area: Rect) -> Self {
        let width = MODAL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let modal = centered_rect(area, width, Self::HEIGHT);

        let inner = Rect {
            x: modal.x + 1,
            y: modal.y + 1,
            width: modal.width.saturating_sub(2),
            height: modal.height.saturating_sub(2),
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // Name
                Constraint::Length(1),              // Name error
                Constraint::Length(3),              // Email
                Constraint::Length(1),              // Email error
                Constraint::Length(MESSAGE_HEIGHT), // Message
                Constraint::Length(1),              // Message error
                Constraint::Length(BUTTON_HEIGHT),  // Submit
                Constraint::Length(1),              // Help
            ])
            .split(inner);

        let submit_width = 20.min(inner.width);
        let submit = Rect {
            x: inner.x + (inner.width - submit_width) / 2,
            width: submit_width,
            ..rows[6]
        };

        let close_button = Rect {
            x: (modal.x + modal.width).saturating_sub(4),
            y: modal.y,
            width: 3.min(modal.width),
            height: 1,
        };

        Self {
            modal,
            close_button,
            fields: [rows[0], rows[2], rows[4]],
            errors: [rows[1], rows[3], rows[5]],
            submit,
            help: rows[7],
        }
    }

    pub fn field(&self, field: FieldName) -> Rect {
        self.fields[field.index()]
    }

    pub fn error(&self, field: FieldName) -> Rect {
        self.errors[field.index()]
    }

    pub fn hit(&self, column: u16, row: u16) -> ModalHit {
        if !contains(self.modal, column, row) {
            return ModalHit::Backdrop;
        }
        if contains(self.close_button, column, row) {
            return ModalHit::Close;
        }
        if contains(self.submit, column, row) {
            return ModalHit::Submit;
        }
        FieldName::ALL
            .into_iter()
            .find(|f| contains(self.field(*f), column, row))
            .map(ModalHit::Field)
            .unwrap_or(ModalHit::Content)
    }
}

/// Regions of the confirmation/error overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub backdrop: Rect,
    pub content: Rect,
    pub ok_button: Rect,
}

/// What a click on the overlay landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupHit {
    OkButton,
    Content,
    Backdrop,
}

impl PopupLayout {
    pub fn new(area: Rect) -> Self {
        let content = centered_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
        let ok_width = OK_BUTTON_WIDTH.min(content.width);
        let ok_button = Rect {
            x: content.x + (content.width - ok_width) / 2,
            y: (content.y + content.height).saturating_sub(BUTTON_HEIGHT + 1),
            width: ok_width,
            height: BUTTON_HEIGHT.min(content.height),
        };
        Self {
            backdrop: area,
            content,
            ok_button,
        }
    }

    /// Body text area between the title and the button
    pub fn body(&self) -> Rect {
        let top = self.content.y + 1;
        Rect {
            x: self.content.x + 2,
            y: top,
            width: self.content.width.saturating_sub(4),
            height: self.ok_button.y.saturating_sub(top),
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> PopupHit {
        if contains(self.ok_button, column, row) {
            PopupHit::OkButton
        } else if contains(self.content, column, row) {
            PopupHit::Content
        } else {
            PopupHit::Backdrop
        }
    }
}

/// Keyboard hints for whatever layer is on top
fn get_hints(app: &App) -> String {
    if app.state.popup.is_some() {
        "Enter/Esc:close".to_string()
    } else if app.state.modal.visible {
        format!(
            "Tab:next  {}:send  {}:reset  {}:check  {}/click outside:close",
            crate::platform::SUBMIT_SHORTCUT,
            crate::platform::RESET_SHORTCUT,
            crate::platform::CHECK_SHORTCUT,
            crate::platform::CLOSE_SHORTCUT
        )
    } else {
        "t/Enter:let's talk  j/k:scroll  q:quit".to_string()
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let (dot, color) = if app.state.flow.is_submitting() {
        (" ● ", Color::Yellow)
    } else {
        (" ● ", Color::Green)
    };
    spans.push(Span::styled(dot, Style::default().fg(color)));
    spans.push(Span::styled(get_hints(app), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if let Some(last) = app.state.flow.last_attempt() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "last send {:?} at {}",
                last.outcome,
                last.finished_at.format("%H:%M:%S")
            ),
            Style::default().fg(Color::Blue),
        ));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: (area.x + area.width).saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
