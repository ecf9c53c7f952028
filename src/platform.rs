//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the resend shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const RESEND_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const RESEND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Resend shortcut display
#[cfg(target_os = "macos")]
pub const RESEND_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESEND_SHORTCUT: &str = "Ctrl+R";
