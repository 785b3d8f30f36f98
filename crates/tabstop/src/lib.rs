//! Tabstop - keyboard shortcut dispatch and managed-focus primitives.
//!
//! This crate provides the keyboard input and focus management subsystem
//! of a retained-mode UI, host-agnostic: the embedder translates its raw
//! input into the typed events in [`events`] and exposes its element tree
//! through the [`NodeAccess`] trait, and the controllers here take care
//! of the invariants.
//!
//! - [`ShortcutRegistry`]: process-wide shortcut table, keydown dispatch
//!   and the `Shift+?` help overlay
//! - [`FocusTrap`]: Tab/Shift+Tab cycling confined to one container
//! - [`RovingTabIndex`]: single-tab-stop arrow navigation for composite
//!   widgets
//! - [`FocusRestorer`]: snapshot and restore focus across transient UI
//! - [`FocusVisibleDetector`]: keyboard-vs-pointer interaction mode
//!
//! # Example
//!
//! ```
//! use tabstop::{Key, KeyboardModifiers, KeyCombo, KeyPressEvent, Shortcut, ShortcutRegistry};
//!
//! let registry = ShortcutRegistry::new();
//! let _save = registry.register(Shortcut::new(
//!     "save",
//!     KeyCombo::ctrl("s"),
//!     "Save the document",
//!     |_event| { /* save */ },
//! ));
//!
//! let mut event = KeyPressEvent::new(Key::S, KeyboardModifiers::CTRL, "s", false);
//! registry.handle_key_press(&mut event);
//! assert!(event.base.is_accepted());
//! ```

pub mod combo;
pub mod events;
pub mod focusable;
pub mod node;
pub mod registry;
pub mod restore;
pub mod roving;
pub mod trap;
pub mod visible;

pub use combo::{ComboParseError, KeyCombo, Platform};
pub use events::{
    EventBase, FocusReason, Key, KeyPressEvent, KeyboardModifiers, MouseButton, MousePressEvent,
};
pub use focusable::{focusable_elements, is_focusable};
pub use node::{Node, NodeAccess, NodeId, NodeKind, NodeTree};
pub use registry::{
    HelpEntry, HelpSection, Shortcut, ShortcutError, ShortcutGuard, ShortcutRegistry,
};
pub use restore::FocusRestorer;
pub use roving::{Orientation, RovingTabIndex};
pub use trap::FocusTrap;
pub use visible::FocusVisibleDetector;

#[cfg(test)]
mod tests;
