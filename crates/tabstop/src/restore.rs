//! Focus restoration across transient UI.
//!
//! When a modal or menu opens it steals focus; when it goes away, focus
//! should land back on whatever had it before. [`FocusRestorer`] holds a
//! single-slot snapshot of the focused node for exactly that round trip.

use crate::events::FocusReason;
use crate::node::{NodeAccess, NodeId};

/// Single-slot snapshot of the focused node.
///
/// Restoring consumes the slot, so a second restore after the slot is
/// cleared does nothing. Call [`teardown`](Self::teardown) from the
/// owning component's unmount path as a safety net for flows that never
/// reached an explicit restore.
#[derive(Debug, Default)]
pub struct FocusRestorer {
    saved: Option<NodeId>,
}

impl FocusRestorer {
    /// Create a restorer with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the currently focused node, overwriting any prior
    /// unrestored snapshot. Saving while nothing is focused clears the
    /// slot.
    pub fn save_focus<S: NodeAccess + ?Sized>(&mut self, tree: &S) {
        self.saved = tree.active_node();
    }

    /// Focus the snapshotted node and clear the slot.
    ///
    /// An empty slot is a no-op, as is a snapshot whose node has since
    /// left the tree.
    pub fn restore_focus<S: NodeAccess + ?Sized>(&mut self, tree: &mut S) {
        if let Some(id) = self.saved.take() {
            tracing::trace!(target: "tabstop::focus", ?id, "restoring focus");
            tree.focus_node(id, FocusReason::Other);
        }
    }

    /// Restore on unmount. Equivalent to
    /// [`restore_focus`](Self::restore_focus); named separately so call
    /// sites read as lifecycle cleanup.
    pub fn teardown<S: NodeAccess + ?Sized>(&mut self, tree: &mut S) {
        self.restore_focus(tree);
    }

    /// Whether a snapshot is currently held.
    pub fn has_snapshot(&self) -> bool {
        self.saved.is_some()
    }
}
