//! Confirmation/error overlay state and its enter/exit animation

use std::time::{Duration, Instant};

/// Which flavour of overlay is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
}

/// What the overlay displays. Built by the caller, rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub kind: PopupKind,
    pub title: String,
    pub message: String,
}

impl PopupContent {
    pub fn success() -> Self {
        Self {
            kind: PopupKind::Success,
            title: "Success!".to_string(),
            message: "Your message successfully sent".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: PopupKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// How the user dismissed the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Backdrop,
    Escape,
}

/// Lifecycle of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    /// Shown and accepting dismiss input
    Open,
    /// Playing the exit animation; input no longer reaches it
    Closing,
    /// Animation finished, ready to be dropped
    Removed,
}

/// A live overlay
#[derive(Debug, Clone)]
pub struct Popup {
    pub content: PopupContent,
    pub phase: PopupPhase,
    /// 0.0 (invisible) to 1.0 (fully shown)
    pub opacity: f32,
    opened_at: Instant,
    closing_since: Option<Instant>,
}

impl Popup {
    /// Length of the fade in and of the fade out
    pub const FADE_DURATION: Duration = Duration::from_millis(300);

    pub fn new(content: PopupContent) -> Self {
        Self::opened_at(content, Instant::now())
    }

    pub fn opened_at(content: PopupContent, now: Instant) -> Self {
        Self {
            content,
            phase: PopupPhase::Open,
            opacity: 0.0,
            opened_at: now,
            closing_since: None,
        }
    }

    /// Dismiss keys (Enter, Esc) are only listened to while open
    pub fn accepts_keys(&self) -> bool {
        self.phase == PopupPhase::Open
    }

    pub fn dismiss(&mut self, reason: DismissReason) {
        self.dismiss_at(reason, Instant::now());
    }

    /// Start the exit animation. Ignored unless open.
    pub fn dismiss_at(&mut self, reason: DismissReason, now: Instant) {
        if self.phase != PopupPhase::Open {
            return;
        }
        tracing::debug!(?reason, kind = ?self.content.kind, "popup dismissed");
        self.phase = PopupPhase::Closing;
        self.closing_since = Some(now);
    }

    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advance the fade animation
    pub fn update_at(&mut self, now: Instant) {
        match self.phase {
            PopupPhase::Open => {
                let progress = fade_progress(self.opened_at, now);
                self.opacity = simple_easing::cubic_out(progress);
            }
            PopupPhase::Closing => {
                let since = self.closing_since.unwrap_or(now);
                let progress = fade_progress(since, now);
                if progress >= 1.0 {
                    self.phase = PopupPhase::Removed;
                    self.opacity = 0.0;
                } else {
                    self.opacity = 1.0 - simple_easing::cubic_in(progress);
                }
            }
            PopupPhase::Removed => {}
        }
    }

    pub fn is_removed(&self) -> bool {
        self.phase == PopupPhase::Removed
    }

    /// True while a fade is still running and the screen should redraw fast
    pub fn is_animating(&self) -> bool {
        match self.phase {
            PopupPhase::Open => self.opacity < 1.0,
            PopupPhase::Closing => true,
            PopupPhase::Removed => false,
        }
    }
}

fn fade_progress(start: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / Popup::FADE_DURATION.as_secs_f32()).min(1.0)
}
