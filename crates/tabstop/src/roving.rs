//! Roving tabindex for composite widgets.
//!
//! A toolbar, tab list or menu is one Tab stop from the outside: exactly
//! one item carries `tab_index = 0` while the rest sit at `-1`, and arrow
//! keys move the active item within the set. [`RovingTabIndex`] owns the
//! active index and the per-item node refs; the host reads
//! [`item_tab_index`](RovingTabIndex::item_tab_index) when rendering each
//! item and routes key presses through the controller.

use crate::events::{FocusReason, Key, KeyPressEvent};
use crate::node::{NodeAccess, NodeId};

/// Which arrow-key axis a roving set navigates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// ArrowLeft/ArrowRight move the active index.
    Horizontal,
    /// ArrowUp/ArrowDown move the active index.
    #[default]
    Vertical,
}

/// Single-tab-stop navigation state for a set of sibling items.
#[derive(Debug)]
pub struct RovingTabIndex {
    orientation: Orientation,
    wrap: bool,
    active_index: usize,
    /// Backing node per item slot. Refs populate as items mount, so a
    /// slot may still be empty when navigation reaches it.
    items: Vec<Option<NodeId>>,
}

impl RovingTabIndex {
    /// Create a controller over `item_count` items, vertical and
    /// non-wrapping by default, with item 0 active.
    pub fn new(item_count: usize) -> Self {
        Self {
            orientation: Orientation::default(),
            wrap: false,
            active_index: 0,
            items: vec![None; item_count],
        }
    }

    /// Set the navigation axis.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable wrap-around at the ends of the set.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Number of items in the set.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The currently active item index.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Resize the set. The active index is clamped into the new range so
    /// the single-tab-stop invariant survives items being removed.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.items.resize(item_count, None);
        if item_count > 0 {
            self.active_index = self.active_index.min(item_count - 1);
        } else {
            self.active_index = 0;
        }
    }

    /// Record the backing node for an item slot as it mounts.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_item_node(&mut self, index: usize, id: NodeId) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = Some(id);
        }
    }

    /// The tab index the host should render for item `index`: `0` for the
    /// active item, `-1` for every other.
    pub fn item_tab_index(&self, index: usize) -> i32 {
        if index == self.active_index { 0 } else { -1 }
    }

    /// Adopt focus that arrived outside arrow navigation, typically from
    /// a pointer press on an item. Keyboard navigation resumes from here.
    pub fn notify_item_focused(&mut self, index: usize) {
        if index < self.items.len() {
            self.active_index = index;
        }
    }

    /// Handle a key press on the roving set.
    ///
    /// Arrow keys along the configured axis move the active index by one,
    /// Home and End jump to the ends, and everything else passes through
    /// unaccepted. Moving the index focuses the backing node in the same
    /// call so visual focus and `active_index` never disagree; an item
    /// whose ref has not mounted yet still becomes the tab stop.
    pub fn handle_key_press<S: NodeAccess + ?Sized>(
        &mut self,
        tree: &mut S,
        event: &mut KeyPressEvent,
    ) {
        let count = self.items.len();
        if count == 0 {
            return;
        }

        let step = |index: usize, delta: i64, wrap: bool| -> usize {
            let count = count as i64;
            let raw = index as i64 + delta;
            let next = if wrap {
                raw.rem_euclid(count)
            } else {
                raw.clamp(0, count - 1)
            };
            next as usize
        };

        let next = match (self.orientation, event.key) {
            (Orientation::Vertical, Key::ArrowDown)
            | (Orientation::Horizontal, Key::ArrowRight) => {
                step(self.active_index, 1, self.wrap)
            }
            (Orientation::Vertical, Key::ArrowUp)
            | (Orientation::Horizontal, Key::ArrowLeft) => {
                step(self.active_index, -1, self.wrap)
            }
            (_, Key::Home) => 0,
            (_, Key::End) => count - 1,
            _ => return,
        };

        event.base.accept();
        self.active_index = next;
        if let Some(id) = self.items[next] {
            tree.focus_node(id, FocusReason::Other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::KeyboardModifiers;
    use crate::node::{Node, NodeTree};

    fn key_event(key: Key) -> KeyPressEvent {
        KeyPressEvent::key_only(key, KeyboardModifiers::NONE)
    }

    fn mounted_set(tree: &mut NodeTree, count: usize) -> (RovingTabIndex, Vec<NodeId>) {
        let root = tree.insert_root(Node::container());
        let mut roving = RovingTabIndex::new(count);
        let mut ids = Vec::new();
        for i in 0..count {
            let id = tree.insert_child(root, Node::button().with_tab_index(-1));
            roving.set_item_node(i, id);
            ids.push(id);
        }
        (roving, ids)
    }

    #[test]
    fn test_exactly_one_tab_stop() {
        let roving = RovingTabIndex::new(4);
        let zeros = (0..4).filter(|&i| roving.item_tab_index(i) == 0).count();
        assert_eq!(zeros, 1);
        assert_eq!(roving.item_tab_index(0), 0);
        assert_eq!(roving.item_tab_index(3), -1);
    }

    #[test]
    fn test_vertical_arrows_move_and_focus() {
        let mut tree = NodeTree::new();
        let (mut roving, ids) = mounted_set(&mut tree, 3);

        let mut event = key_event(Key::ArrowDown);
        roving.handle_key_press(&mut tree, &mut event);
        assert!(event.base.is_accepted());
        assert_eq!(roving.active_index(), 1);
        assert_eq!(tree.active_node(), Some(ids[1]));
        assert_eq!(roving.item_tab_index(1), 0);
        assert_eq!(roving.item_tab_index(0), -1);

        let mut event = key_event(Key::ArrowUp);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 0);
        assert_eq!(tree.active_node(), Some(ids[0]));
    }

    #[test]
    fn test_horizontal_orientation_uses_left_right() {
        let mut tree = NodeTree::new();
        let (roving, _) = mounted_set(&mut tree, 3);
        let mut roving = roving.with_orientation(Orientation::Horizontal);

        let mut event = key_event(Key::ArrowRight);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 1);

        // The cross-axis arrow is unrelated here.
        let mut event = key_event(Key::ArrowDown);
        roving.handle_key_press(&mut tree, &mut event);
        assert!(!event.base.is_accepted());
        assert_eq!(roving.active_index(), 1);
    }

    #[test]
    fn test_home_and_end() {
        let mut tree = NodeTree::new();
        let (mut roving, ids) = mounted_set(&mut tree, 5);

        let mut event = key_event(Key::End);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 4);
        assert_eq!(tree.active_node(), Some(ids[4]));

        let mut event = key_event(Key::Home);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 0);
        assert_eq!(tree.active_node(), Some(ids[0]));
    }

    #[test]
    fn test_clamp_without_wrap() {
        let mut tree = NodeTree::new();
        let (mut roving, _) = mounted_set(&mut tree, 3);

        let mut event = key_event(Key::ArrowUp);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 0);

        roving.notify_item_focused(2);
        let mut event = key_event(Key::ArrowDown);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 2);
    }

    #[test]
    fn test_wrap_is_modulo() {
        let mut tree = NodeTree::new();
        let (roving, ids) = mounted_set(&mut tree, 3);
        let mut roving = roving.with_wrap(true);

        let mut event = key_event(Key::ArrowUp);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 2);
        assert_eq!(tree.active_node(), Some(ids[2]));

        let mut event = key_event(Key::ArrowDown);
        roving.handle_key_press(&mut tree, &mut event);
        assert_eq!(roving.active_index(), 0);
    }

    #[test]
    fn test_unrelated_keys_pass_through() {
        let mut tree = NodeTree::new();
        let (mut roving, _) = mounted_set(&mut tree, 3);

        let mut event = key_event(Key::Enter);
        roving.handle_key_press(&mut tree, &mut event);
        assert!(!event.base.is_accepted());
        assert_eq!(roving.active_index(), 0);
    }

    #[test]
    fn test_pointer_focus_adopted() {
        let mut roving = RovingTabIndex::new(4);
        roving.notify_item_focused(2);
        assert_eq!(roving.active_index(), 2);
        assert_eq!(roving.item_tab_index(2), 0);

        // Out of range is ignored.
        roving.notify_item_focused(9);
        assert_eq!(roving.active_index(), 2);
    }

    #[test]
    fn test_missing_ref_still_moves_index() {
        let mut tree = NodeTree::new();
        let mut roving = RovingTabIndex::new(3); // no refs mounted yet

        let mut event = key_event(Key::ArrowDown);
        roving.handle_key_press(&mut tree, &mut event);
        assert!(event.base.is_accepted());
        assert_eq!(roving.active_index(), 1);
        assert_eq!(tree.active_node(), None);
    }

    #[test]
    fn test_empty_set_has_no_navigation() {
        let mut tree = NodeTree::new();
        let mut roving = RovingTabIndex::new(0);

        let mut event = key_event(Key::ArrowDown);
        roving.handle_key_press(&mut tree, &mut event);
        assert!(!event.base.is_accepted());
        assert_eq!(roving.active_index(), 0);
    }

    #[test]
    fn test_shrinking_set_clamps_active_index() {
        let mut roving = RovingTabIndex::new(5);
        roving.notify_item_focused(4);
        roving.set_item_count(2);
        assert_eq!(roving.active_index(), 1);

        roving.set_item_count(0);
        assert_eq!(roving.active_index(), 0);
    }
}
