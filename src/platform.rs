//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Reset form shortcut display
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "^R";

/// Check form (validate without sending) shortcut display
#[cfg(target_os = "macos")]
pub const CHECK_SHORTCUT: &str = "Cmd+K";

#[cfg(not(target_os = "macos"))]
pub const CHECK_SHORTCUT: &str = "^K";

/// Close modal shortcut display
#[cfg(target_os = "macos")]
pub const CLOSE_SHORTCUT: &str = "Cmd+W";

#[cfg(not(target_os = "macos"))]
pub const CLOSE_SHORTCUT: &str = "^W";
