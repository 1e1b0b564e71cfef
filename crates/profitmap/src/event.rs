//! Key events shared by the terminal and browser front ends.
//!
//! crossterm and ratzilla each have their own key event; both are converted
//! into [`AppKeyEvent`] before reaching components.

#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(feature = "web")]
pub use ratzilla::event::KeyCode;

/// A key press with its modifier state
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::new(code)
        }
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    /// Neither Ctrl nor Alt is held.
    ///
    /// Shift does not count: uppercase letters arrive with Shift set, and the
    /// coarse slider and crosshair keys are uppercase.
    pub fn no_modifiers(&self) -> bool {
        !(self.ctrl || self.alt)
    }

    /// Shift+Tab; crossterm reports it as its own key code
    #[cfg(feature = "native")]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::BackTab)
    }

    /// Shift+Tab; the browser reports Tab with Shift held
    #[cfg(feature = "web")]
    pub fn is_back_tab(&self) -> bool {
        self.shift && matches!(self.code, KeyCode::Tab)
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;

        let held = |modifier: KeyModifiers| event.modifiers.contains(modifier);
        Self {
            code: event.code,
            ctrl: held(KeyModifiers::CONTROL),
            alt: held(KeyModifiers::ALT),
            shift: held(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(feature = "web")]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn test_shift_is_not_a_modifier() {
        let key: AppKeyEvent = KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT).into();
        assert!(key.shift);
        assert!(key.no_modifiers());

        let key: AppKeyEvent = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL).into();
        assert!(key.ctrl());
        assert!(!key.no_modifiers());
    }

    #[test]
    fn test_back_tab() {
        assert!(AppKeyEvent::new(KeyCode::BackTab).is_back_tab());
        assert!(!AppKeyEvent::new(KeyCode::Tab).is_back_tab());
    }
}
