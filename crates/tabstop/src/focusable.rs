//! Focusable element queries.
//!
//! Focus order is always re-derived from the live tree at the moment it is
//! needed rather than maintained as a registration list, so content that
//! renders in or out between key presses can never leave a stale index
//! behind. The scan is linear in the container size, which is bounded in
//! practice.

use crate::node::{Node, NodeAccess, NodeId, NodeKind};

/// Check whether a single node is currently focusable.
///
/// A node qualifies when it is an anchor with a hyperlink target, a
/// non-disabled control (button, input, textarea, select), or carries an
/// explicit non-negative tab index.
pub fn is_focusable(node: &Node) -> bool {
    let intrinsic = match node.kind {
        NodeKind::Anchor { has_href } => has_href,
        NodeKind::Button | NodeKind::Input | NodeKind::TextArea | NodeKind::Select => {
            !node.disabled
        }
        NodeKind::Container => false,
    };
    intrinsic || node.tab_index.is_some_and(|t| t >= 0)
}

/// Collect the focusable elements inside `container`, in document order.
///
/// The container itself is never included. Hidden subtrees are skipped
/// entirely. The result reflects the tree as it is right now; callers
/// must not cache it across tree mutations.
pub fn focusable_elements<S: NodeAccess + ?Sized>(tree: &S, container: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    if tree
        .get_node(container)
        .is_some_and(|node| node.visible)
    {
        for &child in tree.children(container) {
            collect(tree, child, &mut out);
        }
    }
    out
}

/// Depth-first pre-order collection, matching document order.
fn collect<S: NodeAccess + ?Sized>(tree: &S, id: NodeId, out: &mut Vec<NodeId>) {
    let Some(node) = tree.get_node(id) else {
        return;
    };

    // Hidden subtrees contribute nothing.
    if !node.visible {
        return;
    }

    if is_focusable(node) {
        out.push(id);
    }

    for &child in tree.children(id) {
        collect(tree, child, out);
    }
}
