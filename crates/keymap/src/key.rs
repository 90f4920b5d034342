//! Key representation.
//!
//! A unified key shape covering regular characters, named keys and
//! modifier combinations, independent of any input backend.

use std::fmt;
use std::str::FromStr;

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
	};

	pub fn ctrl(self) -> Self {
		Self { ctrl: true, ..self }
	}

	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	pub fn shift(self) -> Self {
		Self {
			shift: true,
			..self
		}
	}

	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// A physical key, without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Esc,
	Space,
	Tab,
	Backspace,
	Delete,
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
	F(u8),
}

impl FromStr for KeyCode {
	type Err = ();

	/// Named-key lookup. Single characters are not handled here.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"enter" | "return" => Self::Enter,
			"esc" | "escape" => Self::Esc,
			"space" => Self::Space,
			"tab" => Self::Tab,
			"backspace" => Self::Backspace,
			"del" | "delete" => Self::Delete,
			"up" => Self::Up,
			"down" => Self::Down,
			"left" => Self::Left,
			"right" => Self::Right,
			"home" => Self::Home,
			"end" => Self::End,
			"pgup" | "pageup" => Self::PageUp,
			"pgdown" | "pagedown" => Self::PageDown,
			_ => return Err(()),
		})
	}
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Char(c) => write!(f, "{c}"),
			Self::Enter => write!(f, "enter"),
			Self::Esc => write!(f, "esc"),
			Self::Space => write!(f, "space"),
			Self::Tab => write!(f, "tab"),
			Self::Backspace => write!(f, "backspace"),
			Self::Delete => write!(f, "del"),
			Self::Up => write!(f, "up"),
			Self::Down => write!(f, "down"),
			Self::Left => write!(f, "left"),
			Self::Right => write!(f, "right"),
			Self::Home => write!(f, "home"),
			Self::End => write!(f, "end"),
			Self::PageUp => write!(f, "pgup"),
			Self::PageDown => write!(f, "pgdown"),
			Self::F(n) => write!(f, "f{n}"),
		}
	}
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Character key with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// Key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Character key with Ctrl held.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Digit value of an unmodified digit key.
	pub fn as_digit(&self) -> Option<u32> {
		if self.modifiers.is_empty()
			&& let KeyCode::Char(c) = self.code
		{
			return c.to_digit(10);
		}
		None
	}

	pub fn is_char(&self, c: char) -> bool {
		matches!(self.code, KeyCode::Char(ch) if ch == c)
	}

	/// Folds Shift into uppercase letters so `shift-e` and `E` compare equal.
	pub fn normalize(self) -> Self {
		if self.modifiers.shift
			&& let KeyCode::Char(c) = self.code
			&& c.is_ascii_alphabetic()
		{
			return Self {
				code: KeyCode::Char(c.to_ascii_uppercase()),
				modifiers: Modifiers {
					shift: false,
					..self.modifiers
				},
			};
		}
		self
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.ctrl {
			write!(f, "ctrl-")?;
		}
		if self.modifiers.alt {
			write!(f, "alt-")?;
		}
		if self.modifiers.shift {
			write!(f, "shift-")?;
		}
		write!(f, "{}", self.code)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn digits() {
		assert_eq!(Key::char('4').as_digit(), Some(4));
		assert_eq!(Key::ctrl('4').as_digit(), None);
		assert_eq!(Key::char('e').as_digit(), None);
	}

	#[test]
	fn normalize_folds_shifted_letters() {
		let shifted = Key {
			code: KeyCode::Char('e'),
			modifiers: Modifiers::SHIFT,
		};
		assert_eq!(shifted.normalize(), Key::char('E'));
		let shifted_comma = Key {
			code: KeyCode::Char(','),
			modifiers: Modifiers::SHIFT,
		};
		assert_eq!(shifted_comma.normalize(), shifted_comma);
	}

	#[test]
	fn display_round_trips_through_parse() {
		let key = Key {
			code: KeyCode::Enter,
			modifiers: Modifiers::CTRL.shift(),
		};
		assert_eq!(key.to_string(), "ctrl-shift-enter");
	}
}
