//! Interaction-mode detection for focus rings.
//!
//! A coarse heuristic: the most recent interaction was either keyboard
//! navigation (paint focus rings) or pointer input (don't). It tracks the
//! *mode* of interaction only, not which element holds focus.

use crate::events::{Key, KeyPressEvent, MousePressEvent};

/// Tracks whether focus indication should currently be visible.
///
/// One instance per window; hosts feed it every keydown and mousedown and
/// read [`is_focus_visible`](Self::is_focus_visible) when painting. The
/// flag starts false, a Tab press sets it, a mouse press clears it, and
/// nothing else mutates it.
#[derive(Debug, Default)]
pub struct FocusVisibleDetector {
    focus_visible: bool,
}

impl FocusVisibleDetector {
    /// Create a detector in pointer mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether focus indication should be painted.
    pub fn is_focus_visible(&self) -> bool {
        self.focus_visible
    }

    /// Observe a key press. Only Tab flips the mode.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) {
        if event.key == Key::Tab && !self.focus_visible {
            tracing::trace!(target: "tabstop::focus", "keyboard navigation resumed");
            self.focus_visible = true;
        }
    }

    /// Observe a mouse press.
    pub fn handle_mouse_press(&mut self, _event: &MousePressEvent) {
        self.focus_visible = false;
    }
}
