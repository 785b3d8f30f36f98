//! Focus trapping for modal-like containers.
//!
//! A [`FocusTrap`] constrains Tab/Shift+Tab cycling to the focusable set
//! of one container. It only intervenes at the boundary: Tab on the last
//! element wraps to the first, Shift+Tab on the first wraps to the last,
//! and every other Tab press is left for the host's natural focus
//! advance. Multiple traps may coexist, each scoped to its own container.
//!
//! The trap performs no focus restoration on deactivation; compose it
//! with [`FocusRestorer`](crate::restore::FocusRestorer) for that.

use crate::events::{FocusReason, Key, KeyPressEvent};
use crate::focusable::focusable_elements;
use crate::node::{NodeAccess, NodeId};

/// Constrains Tab-key focus cycling to a container.
///
/// Two states: inactive (the default) and active. While active the host
/// must route `keydown` events through
/// [`handle_key_press`](Self::handle_key_press) before performing its
/// native focus advance; the trap accepts the event *before* refocusing
/// so the native advance is suppressed within the same dispatch.
#[derive(Debug)]
pub struct FocusTrap {
    container: NodeId,
    active: bool,
}

impl FocusTrap {
    /// Create an inactive trap scoped to `container`.
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            active: false,
        }
    }

    /// The container this trap is scoped to.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Whether the trap is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the trap.
    ///
    /// Moves focus to the first focusable element of the container, if
    /// there is one. An empty container activates without moving focus;
    /// the trap simply has nothing to cycle through yet.
    pub fn activate<S: NodeAccess + ?Sized>(&mut self, tree: &mut S) {
        if self.active {
            return;
        }
        self.active = true;

        let focusables = focusable_elements(tree, self.container);
        tracing::trace!(
            target: "tabstop::focus",
            container = ?self.container,
            count = focusables.len(),
            "focus trap activated"
        );
        if let Some(&first) = focusables.first() {
            tree.focus_node(first, FocusReason::Other);
        }
    }

    /// Deactivate the trap. Focus is left where it is.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Intercept a key press while active.
    ///
    /// Only Tab is of interest. The focusable set is recomputed on every
    /// press, never cached, because content may have rendered in or out
    /// since activation.
    pub fn handle_key_press<S: NodeAccess + ?Sized>(
        &mut self,
        tree: &mut S,
        event: &mut KeyPressEvent,
    ) {
        if !self.active || event.key != Key::Tab {
            return;
        }

        let focusables = focusable_elements(tree, self.container);
        let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
            return;
        };

        let active = tree.active_node();
        if event.modifiers.shift {
            if active == Some(first) {
                event.base.accept();
                tree.focus_node(last, FocusReason::Backtab);
            }
        } else if active == Some(last) {
            event.base.accept();
            tree.focus_node(first, FocusReason::Tab);
        }
    }
}
