//! Canonical key-combo encoding and display formatting.
//!
//! A [`KeyCombo`] is the canonical form of a single key chord: the held
//! modifiers plus one key token. Canonicalization fixes the modifier order
//! (Ctrl, Alt, Shift) so that the physical press order never changes the
//! encoded string, and unifies Ctrl and Cmd under a single `Ctrl` token so
//! a shortcut registered once matches on every platform.
//!
//! Two combos are equal iff their canonical strings are equal; the key
//! token is case-sensitive.
//!
//! ```ignore
//! use tabstop::{Key, KeyboardModifiers, KeyCombo, KeyPressEvent, Platform};
//!
//! let event = KeyPressEvent::new(Key::K, KeyboardModifiers::CTRL, "k", false);
//! let combo = KeyCombo::encode(&event).unwrap();
//! assert_eq!(combo.to_string(), "Ctrl+k");
//! assert_eq!(combo.format(Platform::Mac), "\u{2318}+k");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::events::KeyPressEvent;

/// The platform a combo is being displayed on.
///
/// Display formatting is the only platform-sensitive part of the codec;
/// canonical combo strings are identical everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// macOS: modifiers render as symbols (`⌘`, `⌥`, `⇧`).
    Mac,
    /// Everything else: modifiers render as English names.
    #[default]
    Other,
}

impl Platform {
    /// Detect the platform this build targets.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// A canonical key chord: held modifiers plus one key token.
///
/// The key token is the literal identifier produced by the key event: a
/// lowercase letter, a digit or punctuation character, or a named key such
/// as `"Enter"` or `"ArrowUp"`. A combo may consist of a single printable
/// character with no modifiers at all (`"?"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Ctrl (or Cmd; the two are unified at encode time).
    pub ctrl: bool,
    /// Alt/Option.
    pub alt: bool,
    /// Shift.
    pub shift: bool,
    /// The key token.
    pub key: String,
}

impl KeyCombo {
    /// Create a combo with no modifiers.
    pub fn key_only(key: impl Into<String>) -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
            key: key.into(),
        }
    }

    /// Create a Ctrl+key combo.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::key_only(key)
        }
    }

    /// Create an Alt+key combo.
    pub fn alt(key: impl Into<String>) -> Self {
        Self {
            alt: true,
            ..Self::key_only(key)
        }
    }

    /// Create a Shift+key combo.
    pub fn shift(key: impl Into<String>) -> Self {
        Self {
            shift: true,
            ..Self::key_only(key)
        }
    }

    /// Create a Ctrl+Shift+key combo.
    pub fn ctrl_shift(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::key_only(key)
        }
    }

    /// Encode a key press event into its canonical combo.
    ///
    /// Modifiers are read in the fixed order Ctrl (unified with Meta/Cmd),
    /// Alt, Shift, so the physical order the modifiers were pressed in
    /// never affects the result. The key token is chosen as follows:
    ///
    /// - letter keys use their lowercase token regardless of Shift,
    /// - named keys (`Enter`, `ArrowUp`, `F1`, `Space`, …) use their name,
    /// - any other key prefers the event's layout-resolved text when it is
    ///   a single printable character, so Shift+Slash encodes as `Shift+?`.
    ///
    /// Returns `None` for modifier-only presses and keys with no usable
    /// token.
    pub fn encode(event: &KeyPressEvent) -> Option<Self> {
        if event.key.is_modifier() {
            return None;
        }

        let token = match event.key.token() {
            // Letters and multi-character named keys have a fixed token.
            Some(tok) if event.key.is_letter() || tok.chars().count() > 1 => tok.to_string(),
            fixed => {
                let printable = event
                    .text
                    .chars()
                    .next()
                    .filter(|c| !c.is_control() && event.text.chars().count() == 1);
                match (printable, fixed) {
                    (Some(c), _) => c.to_string(),
                    (None, Some(tok)) => tok.to_string(),
                    (None, None) => return None,
                }
            }
        };

        Some(Self {
            ctrl: event.modifiers.control || event.modifiers.meta,
            alt: event.modifiers.alt,
            shift: event.modifiers.shift,
            key: token,
        })
    }

    /// Format this combo for display on the given platform.
    ///
    /// On [`Platform::Mac`] the modifier tokens become symbols (`Ctrl`→`⌘`,
    /// `Alt`→`⌥`, `Shift`→`⇧`) and `Enter`/`Escape` become `↵`/`Esc`;
    /// elsewhere the canonical tokens are shown as-is. Pure function, no
    /// side effects.
    pub fn format(&self, platform: Platform) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);

        if self.ctrl {
            parts.push(match platform {
                Platform::Mac => "\u{2318}",
                Platform::Other => "Ctrl",
            });
        }
        if self.alt {
            parts.push(match platform {
                Platform::Mac => "\u{2325}",
                Platform::Other => "Alt",
            });
        }
        if self.shift {
            parts.push(match platform {
                Platform::Mac => "\u{21e7}",
                Platform::Other => "Shift",
            });
        }

        let key = match (platform, self.key.as_str()) {
            (Platform::Mac, "Enter") => "\u{21b5}",
            (Platform::Mac, "Escape") => "Esc",
            (_, key) => key,
        };
        parts.push(key);

        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    /// The canonical combo string: modifiers in the fixed order `Ctrl`,
    /// `Alt`, `Shift`, then the key token, joined with `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Error type for parsing combo strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComboParseError {
    /// The string is empty.
    #[error("empty combo string")]
    Empty,
    /// No key was specified (only modifiers).
    #[error("no key specified (only modifiers)")]
    NoKey,
}

impl FromStr for KeyCombo {
    type Err = ComboParseError;

    /// Parse a combo from a string like `"Ctrl+Shift+z"`.
    ///
    /// Modifier names are case-insensitive and accept common aliases
    /// (`control`, `cmd`, `meta`, `option`). The key token is kept
    /// case-sensitive except that a lone ASCII uppercase letter is
    /// lowercased and known named keys are canonicalized, so `"Ctrl+S"`
    /// and `"ctrl+s"` parse to the same combo.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ComboParseError::Empty);
        }

        let mut combo = Self::key_only("");
        let mut has_key = false;

        for part in s.split('+') {
            let part = part.trim();
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "command" | "meta" | "super" => combo.ctrl = true,
                "alt" | "option" => combo.alt = true,
                "shift" => combo.shift = true,
                _ if part.is_empty() => {}
                _ => {
                    combo.key = canonicalize_token(part);
                    has_key = true;
                }
            }
        }

        if !has_key {
            return Err(ComboParseError::NoKey);
        }
        Ok(combo)
    }
}

/// Canonicalize a parsed key token.
///
/// Single ASCII letters are lowercased; known named keys get their
/// canonical capitalization; anything else is kept verbatim.
fn canonicalize_token(token: &str) -> String {
    if token.len() == 1 {
        return token.to_ascii_lowercase();
    }

    const NAMED: &[&str] = &[
        "Enter",
        "Escape",
        "Tab",
        "Space",
        "Backspace",
        "Delete",
        "Insert",
        "Home",
        "End",
        "PageUp",
        "PageDown",
        "ArrowUp",
        "ArrowDown",
        "ArrowLeft",
        "ArrowRight",
        "F1",
        "F2",
        "F3",
        "F4",
        "F5",
        "F6",
        "F7",
        "F8",
        "F9",
        "F10",
        "F11",
        "F12",
    ];

    for name in NAMED {
        if token.eq_ignore_ascii_case(name) {
            return (*name).to_string();
        }
    }
    token.to_string()
}
