//! Cross-module scenarios exercising the controllers together.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    FocusReason, FocusRestorer, FocusTrap, FocusVisibleDetector, Key, KeyCombo, KeyPressEvent,
    KeyboardModifiers, MouseButton, MousePressEvent, Node, NodeAccess, NodeTree, Shortcut,
    ShortcutRegistry,
};

#[test]
fn test_shortcut_lifecycle_end_to_end() {
    let registry = ShortcutRegistry::new();
    let saves = Arc::new(AtomicUsize::new(0));

    let guard = {
        let saves = Arc::clone(&saves);
        registry.register(Shortcut::new(
            "save",
            KeyCombo::ctrl("s"),
            "Save the document",
            move |_| {
                saves.fetch_add(1, Ordering::SeqCst);
            },
        ))
    };

    let mut event = KeyPressEvent::new(Key::S, KeyboardModifiers::CTRL, "s", false);
    registry.handle_key_press(&mut event);
    assert_eq!(saves.load(Ordering::SeqCst), 1);
    assert!(event.base.is_accepted());

    guard.unregister().unwrap();

    let mut event = KeyPressEvent::new(Key::S, KeyboardModifiers::CTRL, "s", false);
    registry.handle_key_press(&mut event);
    assert_eq!(saves.load(Ordering::SeqCst), 1);
    assert!(!event.base.is_accepted());
}

#[test]
fn test_modal_open_cycle_close_restores_focus() {
    let mut tree = NodeTree::new();
    let root = tree.insert_root(Node::container());
    let trigger = tree.insert_child(root, Node::button());
    let dialog = tree.insert_child(root, Node::container());
    let confirm = tree.insert_child(dialog, Node::button());
    let cancel = tree.insert_child(dialog, Node::button());

    // The trigger opens the modal.
    tree.focus_node(trigger, FocusReason::Mouse);

    let mut restorer = FocusRestorer::new();
    restorer.save_focus(&tree);
    let mut trap = FocusTrap::new(dialog);
    trap.activate(&mut tree);
    assert_eq!(tree.active_node(), Some(confirm));

    // Tab cycles within the dialog only.
    tree.focus_node(cancel, FocusReason::Tab);
    let mut event = KeyPressEvent::key_only(Key::Tab, KeyboardModifiers::NONE);
    trap.handle_key_press(&mut tree, &mut event);
    assert!(event.base.is_accepted());
    assert_eq!(tree.active_node(), Some(confirm));

    // Closing the modal hands focus back to the trigger.
    trap.deactivate();
    restorer.teardown(&mut tree);
    assert_eq!(tree.active_node(), Some(trigger));
}

#[test]
fn test_help_overlay_round_trip() {
    let registry = ShortcutRegistry::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let _guard = {
        let hits = Arc::clone(&hits);
        registry.register(
            Shortcut::new("save", KeyCombo::ctrl("s"), "Save", move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
            .with_category("File"),
        )
    };

    let mut event = KeyPressEvent::new(Key::Slash, KeyboardModifiers::SHIFT, "?", false);
    registry.handle_key_press(&mut event);
    assert!(registry.is_help_visible());

    let sections = registry.help_sections(crate::Platform::Other);
    assert_eq!(sections[0].title, "File");
    assert_eq!(sections[0].entries[0].combos, vec!["Ctrl+s"]);

    // Shortcuts still dispatch while help is open.
    let mut event = KeyPressEvent::new(Key::S, KeyboardModifiers::CTRL, "s", false);
    registry.handle_key_press(&mut event);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let mut event = KeyPressEvent::key_only(Key::Escape, KeyboardModifiers::NONE);
    registry.handle_key_press(&mut event);
    assert!(!registry.is_help_visible());
}

#[test]
fn test_focus_visible_follows_interaction_mode() {
    let mut detector = FocusVisibleDetector::new();
    let registry = ShortcutRegistry::new();

    // The embedder feeds the same keydown to both listeners.
    let mut event = KeyPressEvent::key_only(Key::Tab, KeyboardModifiers::NONE);
    detector.handle_key_press(&event);
    registry.handle_key_press(&mut event);
    assert!(detector.is_focus_visible());
    assert!(!event.base.is_accepted());

    detector.handle_mouse_press(&MousePressEvent::new(MouseButton::Left));
    assert!(!detector.is_focus_visible());
}
