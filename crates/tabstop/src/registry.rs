//! Shortcut registry, keydown dispatcher and help overlay state.
//!
//! One [`ShortcutRegistry`] per page owns the shortcut table and the
//! single keydown listener feeding it. Components register shortcuts on
//! mount and hold the returned [`ShortcutGuard`]; dropping the guard
//! removes exactly that registration. The registry also owns the
//! visibility of the shortcut help overlay: the reserved `Shift+?` combo
//! opens it ahead of any user shortcut, and `Escape` closes it.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use thiserror::Error;

use crate::combo::{KeyCombo, Platform};
use crate::events::KeyPressEvent;

/// Errors from shortcut registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    /// The guard outlived every handle to its registry. This is a wiring
    /// mistake in the embedder, not a runtime timing issue.
    #[error("shortcut registry has shut down")]
    RegistryShutDown,
}

type Handler = Arc<dyn Fn(&KeyPressEvent) + Send + Sync>;

/// A registered keyboard shortcut.
///
/// Identity is the `id`: registering a second shortcut with the same id
/// replaces the first. A shortcut may be matched by several equivalent
/// combos.
#[derive(Clone)]
pub struct Shortcut {
    id: String,
    combos: Vec<KeyCombo>,
    description: String,
    category: Option<String>,
    enabled: bool,
    handler: Handler,
}

impl Shortcut {
    /// Create an enabled shortcut with a single combo.
    pub fn new(
        id: impl Into<String>,
        combo: KeyCombo,
        description: impl Into<String>,
        handler: impl Fn(&KeyPressEvent) + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            combos: vec![combo],
            description: description.into(),
            category: None,
            enabled: true,
            handler: Arc::new(handler),
        }
    }

    /// Add an alternate combo that matches this shortcut.
    pub fn with_combo(mut self, combo: KeyCombo) -> Self {
        self.combos.push(combo);
        self
    }

    /// Set the help overlay category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the enabled state. Disabled shortcuts stay registered and
    /// visible in help but never fire.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The shortcut's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The combos that match this shortcut.
    pub fn combos(&self) -> &[KeyCombo] {
        &self.combos
    }

    /// Human-readable description shown in help.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The help category, if one was set.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the shortcut currently fires.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortcut")
            .field("id", &self.id)
            .field("combos", &self.combos)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// One row of the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// The shortcut's combos, formatted for display.
    pub combos: Vec<String>,
    /// The shortcut's description.
    pub description: String,
    /// Whether the shortcut currently fires.
    pub enabled: bool,
}

/// One category group of the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    /// The category title.
    pub title: String,
    /// The shortcuts in this category, in table order.
    pub entries: Vec<HelpEntry>,
}

struct Registration {
    serial: u64,
    shortcut: Shortcut,
}

#[derive(Default)]
struct RegistryState {
    entries: Vec<Registration>,
    help_visible: bool,
}

struct RegistryInner {
    state: RwLock<RegistryState>,
    next_serial: AtomicU64,
}

impl RegistryInner {
    fn remove_serial(&self, id: &str, serial: u64) -> bool {
        let mut state = self.state.write();
        let before = state.entries.len();
        state
            .entries
            .retain(|entry| !(entry.shortcut.id == id && entry.serial == serial));
        state.entries.len() != before
    }
}

/// Process-wide shortcut table and keydown dispatcher.
///
/// Cheaply cloneable handle; all clones share one table. The embedder
/// routes every keydown through
/// [`handle_key_press`](Self::handle_key_press) and suppresses the
/// default action for accepted events.
#[derive(Clone)]
pub struct ShortcutRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutRegistry {
    /// Create an empty registry with the help overlay hidden.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                state: RwLock::new(RegistryState::default()),
                next_serial: AtomicU64::new(1),
            }),
        }
    }

    /// The reserved combo that always opens the help overlay.
    pub fn help_combo() -> KeyCombo {
        KeyCombo::shift("?")
    }

    /// Register a shortcut, replacing any previous registration with the
    /// same id. Replacement keeps the original table position, so the
    /// shortcut's dispatch priority is stable across re-registration.
    ///
    /// The returned guard removes exactly this registration when dropped
    /// or explicitly unregistered. A stale guard whose registration was
    /// since replaced removes nothing.
    #[must_use = "dropping the guard unregisters the shortcut"]
    pub fn register(&self, shortcut: Shortcut) -> ShortcutGuard {
        let serial = self.inner.next_serial.fetch_add(1, Ordering::Relaxed);
        let id = shortcut.id.clone();
        tracing::debug!(target: "tabstop::shortcut", %id, "shortcut registered");

        let mut state = self.inner.state.write();
        match state
            .entries
            .iter_mut()
            .find(|entry| entry.shortcut.id == id)
        {
            Some(entry) => {
                entry.serial = serial;
                entry.shortcut = shortcut;
            }
            None => state.entries.push(Registration { serial, shortcut }),
        }
        drop(state);

        ShortcutGuard {
            registry: Arc::downgrade(&self.inner),
            id,
            serial,
            released: false,
        }
    }

    /// Remove a shortcut by id. Removing an unknown id is a no-op.
    /// Returns whether a registration was removed.
    pub fn unregister(&self, id: &str) -> bool {
        let mut state = self.inner.state.write();
        let before = state.entries.len();
        state.entries.retain(|entry| entry.shortcut.id != id);
        state.entries.len() != before
    }

    /// Enable or disable a registered shortcut in place. Returns whether
    /// the id was found.
    pub fn set_enabled(&self, id: &str, enabled: bool) -> bool {
        let mut state = self.inner.state.write();
        match state
            .entries
            .iter_mut()
            .find(|entry| entry.shortcut.id == id)
        {
            Some(entry) => {
                entry.shortcut.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Whether a shortcut with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.inner
            .state
            .read()
            .entries
            .iter()
            .any(|entry| entry.shortcut.id == id)
    }

    /// Number of registered shortcuts.
    pub fn len(&self) -> usize {
        self.inner.state.read().entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Show the help overlay.
    pub fn show_help(&self) {
        self.inner.state.write().help_visible = true;
    }

    /// Hide the help overlay.
    pub fn hide_help(&self) {
        self.inner.state.write().help_visible = false;
    }

    /// Whether the help overlay is visible.
    pub fn is_help_visible(&self) -> bool {
        self.inner.state.read().help_visible
    }

    /// The help overlay content: shortcuts grouped by category, combos
    /// rendered for the given platform.
    ///
    /// Shortcuts without a category group under `"General"`. Sections
    /// appear in order of each category's first appearance in the table,
    /// entries in table order. Disabled shortcuts are included.
    pub fn help_sections(&self, platform: Platform) -> Vec<HelpSection> {
        let state = self.inner.state.read();
        let mut sections: Vec<HelpSection> = Vec::new();

        for entry in &state.entries {
            let title = entry.shortcut.category.as_deref().unwrap_or("General");
            let help = HelpEntry {
                combos: entry
                    .shortcut
                    .combos
                    .iter()
                    .map(|combo| combo.format(platform))
                    .collect(),
                description: entry.shortcut.description.clone(),
                enabled: entry.shortcut.enabled,
            };
            match sections.iter_mut().find(|section| section.title == title) {
                Some(section) => section.entries.push(help),
                None => sections.push(HelpSection {
                    title: title.to_string(),
                    entries: vec![help],
                }),
            }
        }
        sections
    }

    /// Dispatch a keydown through the shortcut table.
    ///
    /// The reserved help combo is checked before the table, so it always
    /// opens help even when a user shortcut binds the same combo. While
    /// the overlay is open, a bare `Escape` closes it. Otherwise the
    /// first enabled shortcut whose combo set contains the canonical
    /// combo fires; at most one handler runs per keydown and the event
    /// is accepted before it does.
    ///
    /// A panicking handler is contained and logged; dispatch of later
    /// key presses is unaffected.
    pub fn handle_key_press(&self, event: &mut KeyPressEvent) {
        let Some(combo) = KeyCombo::encode(event) else {
            return;
        };

        if combo == Self::help_combo() {
            event.base.accept();
            self.show_help();
            return;
        }
        if combo == KeyCombo::key_only("Escape") && self.is_help_visible() {
            event.base.accept();
            self.hide_help();
            return;
        }

        // Clone the handler out so it runs without the table locked and a
        // re-registering handler cannot deadlock.
        let matched = {
            let state = self.inner.state.read();
            state
                .entries
                .iter()
                .find(|entry| entry.shortcut.enabled && entry.shortcut.combos.contains(&combo))
                .map(|entry| (entry.shortcut.id.clone(), Arc::clone(&entry.shortcut.handler)))
        };
        let Some((id, handler)) = matched else {
            return;
        };

        event.base.accept();
        tracing::debug!(target: "tabstop::shortcut", %id, combo = %combo, "dispatching shortcut");
        if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
            tracing::error!(target: "tabstop::shortcut", %id, "shortcut handler panicked");
        }
    }
}

/// Capability to remove one specific shortcut registration.
///
/// Dropping the guard removes the registration it was issued for; if the
/// same id has since been re-registered, the newer registration is left
/// alone.
#[must_use = "dropping the guard unregisters the shortcut"]
#[derive(Debug)]
pub struct ShortcutGuard {
    registry: Weak<RegistryInner>,
    id: String,
    serial: u64,
    released: bool,
}

impl ShortcutGuard {
    /// The id this guard was issued for.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Explicitly remove the registration.
    ///
    /// Fails with [`ShortcutError::RegistryShutDown`] when every handle
    /// to the registry is already gone.
    pub fn unregister(mut self) -> Result<(), ShortcutError> {
        self.released = true;
        let inner = self
            .registry
            .upgrade()
            .ok_or(ShortcutError::RegistryShutDown)?;
        inner.remove_serial(&self.id, self.serial);
        Ok(())
    }

    /// Detach the guard: the registration stays until removed through
    /// the registry directly.
    pub fn forget(mut self) {
        self.released = true;
    }
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Some(inner) = self.registry.upgrade() {
            inner.remove_serial(&self.id, self.serial);
        }
    }
}

impl std::fmt::Debug for RegistryInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryInner")
            .field("len", &self.state.read().entries.len())
            .finish_non_exhaustive()
    }
}
