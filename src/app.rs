//! Application state and core logic

use crate::config::ContactConfig;
use crate::contact::{ApiReply, ContactApi, ContactClient, SubmitError};
use crate::state::{AppState, DismissReason, FieldName, Form, FormFocus};
use crate::submission::{reset_form, validate_form, validate_view, NotSent};
use crate::ui::landing;
use crate::ui::layout::{
    LandingHit, LandingLayout, ModalHit, ModalLayout, PopupHit, PopupLayout,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Result of a request, delivered back to the UI loop
#[derive(Debug)]
pub struct SubmitOutcome {
    pub attempt: Uuid,
    pub result: Result<ApiReply, SubmitError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact endpoint
    api: Arc<dyn ContactApi>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let client = ContactClient::new(config.endpoint())?;
        tracing::info!(endpoint = client.endpoint(), "contact endpoint configured");
        Ok(Self::with_api(
            Arc::new(client),
            config.source(),
            config.submit_label(),
        ))
    }

    pub fn with_api(api: Arc<dyn ContactApi>, source: &str, submit_label: &str) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(source, submit_label),
            api,
            quit: false,
            terminal_size: None,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Screen area used for layout and hit testing
    fn area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// True while the screen should redraw at animation speed
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Apply finished requests and advance the overlay animation
    pub fn tick(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.complete_submission(outcome);
        }
        self.state.update_popup();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.popup.is_some() {
            self.handle_popup_key(key);
        } else if self.state.modal.visible {
            self.handle_modal_key(key);
        } else {
            self.handle_landing_key(key);
        }
        Ok(())
    }

    /// Overlay keys. Once closing, the overlay ignores input but still covers the screen.
    fn handle_popup_key(&mut self, key: KeyEvent) {
        if let Some(popup) = self.state.open_popup_mut() {
            match key.code {
                KeyCode::Esc => popup.dismiss(DismissReason::Escape),
                KeyCode::Enter | KeyCode::Char(' ') => popup.dismiss(DismissReason::CloseButton),
                _ => {}
            }
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        let max = self.page_max_scroll();
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('t') | KeyCode::Enter => self.state.open_modal(),
            KeyCode::Down | KeyCode::Char('j') => self.state.page.scroll_by(1, max),
            KeyCode::Up | KeyCode::Char('k') => self.state.page.scroll_by(-1, max),
            KeyCode::PageDown | KeyCode::Char('d') => self.state.page.scroll_by(10, max),
            KeyCode::PageUp | KeyCode::Char('u') => self.state.page.scroll_by(-10, max),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let form_modifier = key.modifiers.contains(crate::platform::FORM_MODIFIER);
        let on_submit = self.state.form.is_submit_focused();
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere in the modal)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('w') if form_modifier => self.state.close_modal(),
            KeyCode::Char('r') if form_modifier => {
                reset_form(&mut self.state.form);
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Char('k') if form_modifier => self.check_form(),
            KeyCode::Enter => {
                let in_message = self.state.form.focus == FormFocus::Field(FieldName::Message);
                if in_message {
                    if let Some(field) = self.state.form.active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.submit();
                }
            }
            // Unbound chords are not text; Shift still types
            KeyCode::Char(c) if !on_submit && !chorded => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_submit => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let area = self.area();
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.popup.is_some() {
                    self.handle_popup_click(PopupLayout::new(area).hit(column, row));
                } else if self.state.modal.visible {
                    self.handle_modal_click(ModalLayout::new(area).hit(column, row));
                } else if LandingLayout::new(area).hit(column, row) == LandingHit::TalkButton {
                    self.state.open_modal();
                }
            }
            MouseEventKind::ScrollDown => {
                let max = self.page_max_scroll();
                self.state.page.scroll_by(3, max);
            }
            MouseEventKind::ScrollUp => {
                let max = self.page_max_scroll();
                self.state.page.scroll_by(-3, max);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_popup_click(&mut self, hit: PopupHit) {
        if let Some(popup) = self.state.open_popup_mut() {
            match hit {
                PopupHit::OkButton => popup.dismiss(DismissReason::CloseButton),
                PopupHit::Backdrop => popup.dismiss(DismissReason::Backdrop),
                PopupHit::Content => {}
            }
        }
    }

    fn handle_modal_click(&mut self, hit: ModalHit) {
        match hit {
            ModalHit::Backdrop | ModalHit::Close => self.state.close_modal(),
            ModalHit::Field(name) => self.state.form.focus(FormFocus::Field(name)),
            ModalHit::Submit => {
                self.state.form.focus(FormFocus::Submit);
                self.submit();
            }
            ModalHit::Content => {}
        }
    }

    fn page_max_scroll(&self) -> u16 {
        landing::max_scroll(LandingLayout::new(self.area()).body.height)
    }

    /// Validate and render all errors without sending
    fn check_form(&mut self) {
        let message = if validate_form(&mut self.state.form) {
            "Form looks good".to_string()
        } else {
            let count = validate_view(&self.state.form).failed_fields().len();
            format!("{count} field(s) need attention")
        };
        self.state.status_message = Some(message);
    }

    /// Validate and, when valid, dispatch the request on a background task
    fn submit(&mut self) {
        match self.state.flow.begin(&mut self.state.form) {
            Ok(dispatch) => {
                self.state.status_message = Some("Sending...".to_string());
                let api = Arc::clone(&self.api);
                let tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let result = api.submit(&dispatch.payload).await;
                    let outcome = SubmitOutcome {
                        attempt: dispatch.attempt.id,
                        result,
                    };
                    if tx.send(outcome).is_err() {
                        tracing::warn!("app closed before the contact request finished");
                    }
                });
            }
            Err(NotSent::Invalid(report)) => {
                let count = report.failed_fields().len();
                self.state.status_message = Some(format!("{count} field(s) need attention"));
            }
            Err(NotSent::Busy) => {}
        }
    }

    /// Continuation of a request: runs on the UI loop
    fn complete_submission(&mut self, outcome: SubmitOutcome) {
        tracing::debug!(attempt = %outcome.attempt, "contact request finished");
        let succeeded = outcome.result.is_ok();
        let popup = self.state.flow.finish(&mut self.state.form, outcome.result);
        self.state.show_popup(popup);
        self.state.status_message = Some(if succeeded {
            "Message sent".to_string()
        } else {
            "Message not sent".to_string()
        });
    }
}
