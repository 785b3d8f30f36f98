//! Host tree abstraction.
//!
//! The focus controllers in this crate operate on whatever element tree
//! the host maintains: a widget tree, a DOM bridge, a scene graph. The
//! [`NodeAccess`] trait is the seam: it exposes node lookup, ordered
//! children, the currently focused node (the `activeElement` analog) and
//! an imperative focus move. Controllers never cache what they read
//! through it; the live tree is the source of truth for focus order.
//!
//! [`NodeTree`] is a reference implementation backed by a slotmap, used by
//! the tests and by hosts that don't already have a tree of their own.

use slotmap::{SecondaryMap, SlotMap, new_key_type};

use crate::events::FocusReason;

new_key_type! {
    /// Unique identifier for a node in the host tree.
    pub struct NodeId;
}

/// What kind of element a node is, as far as focusability is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// An anchor; focusable only when it carries a hyperlink target.
    Anchor {
        /// Whether the anchor has a hyperlink target.
        has_href: bool,
    },
    /// A button control.
    Button,
    /// A single-line text control.
    Input,
    /// A multi-line text control.
    TextArea,
    /// A selection control.
    Select,
    /// A generic container with no intrinsic focus behavior.
    #[default]
    Container,
}

/// A node in the host tree.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// The element kind.
    pub kind: NodeKind,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Explicit tab index, if the host set one. `Some(-1)` makes a node
    /// programmatically focusable but removes it from sequential focus.
    pub tab_index: Option<i32>,
    /// Whether the node (and its subtree) is visible.
    pub visible: bool,
}

impl Node {
    /// Create a visible, enabled node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            disabled: false,
            tab_index: None,
            visible: true,
        }
    }

    /// Create a generic container node.
    pub fn container() -> Self {
        Self::new(NodeKind::Container)
    }

    /// Create a button node.
    pub fn button() -> Self {
        Self::new(NodeKind::Button)
    }

    /// Create a single-line input node.
    pub fn input() -> Self {
        Self::new(NodeKind::Input)
    }

    /// Create an anchor node with a hyperlink target.
    pub fn link() -> Self {
        Self::new(NodeKind::Anchor { has_href: true })
    }

    /// Set the disabled state.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set an explicit tab index.
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Set the visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Trait for accessing the host's element tree.
///
/// Implement this for your tree storage to drive the focus controllers.
/// Children must be returned in document order (the order they are laid
/// out and painted), since focus order is derived from it.
pub trait NodeAccess {
    /// Get a node by id. Returns `None` for stale ids.
    fn get_node(&self, id: NodeId) -> Option<&Node>;

    /// The ordered children of a node.
    fn children(&self, id: NodeId) -> &[NodeId];

    /// The currently focused node, if any.
    fn active_node(&self) -> Option<NodeId>;

    /// Move focus to a node.
    ///
    /// Returns `false` (and leaves focus unchanged) when the node does not
    /// exist; refs populate asynchronously relative to controller setup,
    /// so a stale id is expected and must not panic.
    fn focus_node(&mut self, id: NodeId, reason: FocusReason) -> bool;
}

/// Reference [`NodeAccess`] implementation backed by a slotmap.
#[derive(Debug, Default)]
pub struct NodeTree {
    nodes: SlotMap<NodeId, Node>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    active: Option<NodeId>,
}

impl NodeTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root node (no parent).
    pub fn insert_root(&mut self, node: Node) -> NodeId {
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree.
    pub fn insert_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        assert!(
            self.nodes.contains_key(parent),
            "parent node is not in the tree"
        );
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        self.children[parent].push(id);
        id
    }

    /// Remove a node and its subtree. Clears focus if it was inside.
    pub fn remove(&mut self, id: NodeId) {
        let descendants = self.children.get(id).cloned().unwrap_or_default();
        for child in descendants {
            self.remove(child);
        }
        self.nodes.remove(id);
        self.children.remove(id);
        for siblings in self.children.values_mut() {
            siblings.retain(|&c| c != id);
        }
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Mutable access to a node.
    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Clear focus without focusing anything else.
    pub fn clear_focus(&mut self) {
        self.active = None;
    }
}

impl NodeAccess for NodeTree {
    fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    fn active_node(&self) -> Option<NodeId> {
        self.active
    }

    fn focus_node(&mut self, id: NodeId, reason: FocusReason) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        tracing::trace!(target: "tabstop::focus", ?id, ?reason, "focus moved");
        self.active = Some(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut tree = NodeTree::new();
        let root = tree.insert_root(Node::container());
        let child = tree.insert_child(root, Node::button());

        assert!(tree.get_node(root).is_some());
        assert_eq!(tree.children(root), &[child]);
        assert!(tree.children(child).is_empty());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut tree = NodeTree::new();
        let root = tree.insert_root(Node::container());
        let a = tree.insert_child(root, Node::button());
        let b = tree.insert_child(root, Node::button());
        let c = tree.insert_child(root, Node::button());
        assert_eq!(tree.children(root), &[a, b, c]);
    }

    #[test]
    fn test_focus_tracks_active_node() {
        let mut tree = NodeTree::new();
        let root = tree.insert_root(Node::container());
        let button = tree.insert_child(root, Node::button());

        assert_eq!(tree.active_node(), None);
        assert!(tree.focus_node(button, FocusReason::Other));
        assert_eq!(tree.active_node(), Some(button));
    }

    #[test]
    fn test_focus_stale_id_is_noop() {
        let mut tree = NodeTree::new();
        let root = tree.insert_root(Node::container());
        let button = tree.insert_child(root, Node::button());
        tree.remove(button);

        assert!(!tree.focus_node(button, FocusReason::Other));
        assert_eq!(tree.active_node(), None);
    }

    #[test]
    fn test_remove_subtree_clears_focus() {
        let mut tree = NodeTree::new();
        let root = tree.insert_root(Node::container());
        let group = tree.insert_child(root, Node::container());
        let inner = tree.insert_child(group, Node::input());
        tree.focus_node(inner, FocusReason::Other);

        tree.remove(group);
        assert!(tree.get_node(inner).is_none());
        assert_eq!(tree.active_node(), None);
        assert!(tree.children(root).is_empty());
    }
}
