//! Keyboard shortcut plumbing: key model, chord parsing and scoped
//! shortcut routing.

pub mod key;
pub mod parse;
pub mod router;

pub use key::{Key, KeyCode, Modifiers};
pub use parse::{KeyParseError, parse_chord};
pub use router::{ShortcutDef, ShortcutGuard, ShortcutRouter, ShortcutSet};
