//! Chord parsing.
//!
//! Parses plain-text chords such as `"ctrl-e"`, `","` or `"shift-enter"`
//! into [`Key`] values.
//!
//! ```text
//! chord     = modifiers* key
//! modifiers = ("ctrl" | "alt" | "shift") "-"
//! key       = fn-key | named-key | char
//! fn-key    = "f" digit digit?
//! named-key = "enter" | "esc" | "del" | ...
//! char      = ascii-char
//! ```

use thiserror::Error;

use crate::key::{Key, KeyCode, Modifiers};

const SEP: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid chord {chord:?}: {message} (offset {position})")]
pub struct KeyParseError {
	pub chord: String,
	pub message: String,
	pub position: usize,
}

struct Parser<'a> {
	input: &'a str,
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	fn peek_at(&self, n: usize) -> Option<char> {
		self.input.chars().nth(n)
	}

	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	fn is_end(&self) -> bool {
		self.input.is_empty()
	}

	fn take_while<F>(&mut self, predicate: F) -> String
	where
		F: Fn(char) -> bool,
	{
		let mut result = String::new();
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			result.push(ch);
			self.next();
		}
		result
	}

	/// Runs `f`, restoring the parser state when it yields nothing.
	fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
		let snapshot = (self.input, self.position);
		let parsed = f(self);
		if parsed.is_none() {
			self.input = snapshot.0;
			self.position = snapshot.1;
		}
		parsed
	}

	fn error(&self, message: impl Into<String>) -> (String, usize) {
		(message.into(), self.position)
	}
}

/// Parses a single chord into a [`Key`].
///
/// # Errors
///
/// Returns a [`KeyParseError`] naming the offending chord when the input
/// does not match the grammar.
pub fn parse_chord(input: &str) -> Result<Key, KeyParseError> {
	let mut parser = Parser::new(input);
	let (message, position) = match chord(&mut parser) {
		Ok(key) if parser.is_end() => return Ok(key),
		Ok(_) => parser.error("expected end of input"),
		Err(err) => err,
	};
	Err(KeyParseError {
		chord: input.to_owned(),
		message,
		position,
	})
}

fn chord(parser: &mut Parser) -> Result<Key, (String, usize)> {
	let mut modifiers = Modifiers::NONE;
	for _ in 0..3 {
		match modifier(parser) {
			Some(m) => modifiers = m(modifiers),
			None => break,
		}
	}
	let code = key(parser)?;
	Ok(Key { code, modifiers })
}

/// A modifier name followed by `-`. Restores state on a non-match, so
/// `"del"` is never half-eaten as a modifier.
fn modifier(parser: &mut Parser) -> Option<fn(Modifiers) -> Modifiers> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		let apply: fn(Modifiers) -> Modifiers = match name.as_str() {
			"ctrl" => Modifiers::ctrl,
			"alt" => Modifiers::alt,
			"shift" => Modifiers::shift,
			_ => return None,
		};
		(p.peek() == Some(SEP)).then(|| {
			p.next();
			apply
		})
	})
}

fn key(parser: &mut Parser) -> Result<KeyCode, (String, usize)> {
	if let Some(code) = fn_key(parser)? {
		return Ok(code);
	}
	if let Some(code) = named_key(parser) {
		return Ok(code);
	}
	match parser.next() {
		Some(ch) if ch.is_ascii() && parser.is_end() => Ok(KeyCode::Char(ch)),
		Some(ch) if ch.is_ascii() => Err(parser.error("unexpected trailing input after key")),
		Some(_) => Err(parser.error("non-ascii key")),
		None => Err(parser.error("expected a key")),
	}
}

/// `"f1"` through `"f35"`. Only activates on `f` + digit, so `"f"` alone
/// stays a character key.
fn fn_key(parser: &mut Parser) -> Result<Option<KeyCode>, (String, usize)> {
	if parser.peek() != Some('f') || !matches!(parser.peek_at(1), Some(ch) if ch.is_ascii_digit()) {
		return Ok(None);
	}
	parser.next();
	let digits = parser.take_while(|ch| ch.is_ascii_digit());
	match digits.parse::<u8>() {
		Ok(n) if (1..=35).contains(&n) => Ok(Some(KeyCode::F(n))),
		_ => Err(parser.error("function key number must be 1-35")),
	}
}

fn named_key(parser: &mut Parser) -> Option<KeyCode> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		if name.len() < 2 {
			return None;
		}
		name.parse::<KeyCode>().ok()
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(c: char) -> Key {
		Key::char(c)
	}

	#[test]
	fn single_characters() {
		assert_eq!(parse_chord("e").unwrap(), key('e'));
		assert_eq!(parse_chord(",").unwrap(), key(','));
		assert_eq!(parse_chord("0").unwrap(), key('0'));
		assert_eq!(parse_chord("f").unwrap(), key('f'));
	}

	#[test]
	fn modified() {
		assert_eq!(parse_chord("ctrl-e").unwrap(), Key::ctrl('e'));
		assert_eq!(
			parse_chord("ctrl-shift-enter").unwrap(),
			Key {
				code: KeyCode::Enter,
				modifiers: Modifiers::CTRL.shift(),
			}
		);
	}

	#[test]
	fn named_and_function_keys() {
		assert_eq!(parse_chord("del").unwrap(), Key::new(KeyCode::Delete));
		assert_eq!(parse_chord("pgup").unwrap(), Key::new(KeyCode::PageUp));
		assert_eq!(parse_chord("f5").unwrap(), Key::new(KeyCode::F(5)));
		assert_eq!(parse_chord("f35").unwrap(), Key::new(KeyCode::F(35)));
	}

	#[test]
	fn separator_is_a_key_when_last() {
		assert_eq!(parse_chord("-").unwrap(), key('-'));
		assert_eq!(parse_chord("ctrl--").unwrap(), Key::ctrl('-'));
	}

	#[test]
	fn rejects_garbage() {
		let err = parse_chord("f99").unwrap_err();
		assert_eq!(err.chord, "f99");
		assert!(parse_chord("").is_err());
		assert!(parse_chord("ee").is_err());
		assert!(parse_chord("ctrl-").is_err());
	}
}
