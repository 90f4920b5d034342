//! Declarative shortcut tables and scoped dispatch.
//!
//! Pages declare their bindings as a static `{keys, action}` table,
//! compile it once into a [`ShortcutSet`], and subscribe the set on a
//! shared [`ShortcutRouter`]. The returned [`ShortcutGuard`] removes the
//! layer again when dropped, so bindings live exactly as long as the page
//! that owns them.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::key::Key;
use crate::parse::{KeyParseError, parse_chord};

/// One row of a declarative shortcut table.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutDef<A> {
	pub keys: &'static str,
	pub action: A,
}

/// A compiled shortcut table. Later rows win on duplicate chords.
#[derive(Debug, Clone, Default)]
pub struct ShortcutSet<A> {
	bindings: FxHashMap<Key, A>,
}

impl<A: Clone> ShortcutSet<A> {
	/// Compiles a table, reporting the first chord that fails to parse.
	pub fn compile(defs: &[ShortcutDef<A>]) -> Result<Self, KeyParseError> {
		let mut bindings = FxHashMap::default();
		for def in defs {
			bindings.insert(parse_chord(def.keys)?.normalize(), def.action.clone());
		}
		Ok(Self { bindings })
	}

	pub fn get(&self, key: Key) -> Option<&A> {
		self.bindings.get(&key.normalize())
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

struct Layer<A> {
	token: u64,
	enabled: bool,
	set: ShortcutSet<A>,
}

struct RouterInner<A> {
	layers: Vec<Layer<A>>,
	next_token: u64,
}

/// Stack of scoped shortcut layers.
///
/// Dispatch walks layers most recently subscribed first, so an overlay
/// shadows the page beneath it for the chords it binds.
pub struct ShortcutRouter<A> {
	inner: Arc<Mutex<RouterInner<A>>>,
}

impl<A> Default for ShortcutRouter<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A> ShortcutRouter<A> {
	pub fn new() -> Self {
		Self {
			inner: Arc::new(Mutex::new(RouterInner {
				layers: Vec::new(),
				next_token: 0,
			})),
		}
	}

	/// Registers a layer; dropping the guard removes it.
	pub fn subscribe(&self, set: ShortcutSet<A>) -> ShortcutGuard<A> {
		let mut inner = self.inner.lock();
		let token = inner.next_token;
		inner.next_token += 1;
		inner.layers.push(Layer {
			token,
			enabled: true,
			set,
		});
		debug!(token, "shortcut layer subscribed");
		ShortcutGuard {
			router: Arc::downgrade(&self.inner),
			token,
		}
	}

	pub fn layer_count(&self) -> usize {
		self.inner.lock().layers.len()
	}
}

impl<A: Clone> ShortcutRouter<A> {
	/// Resolves a key against the enabled layers, topmost first.
	pub fn dispatch(&self, key: Key) -> Option<A> {
		let inner = self.inner.lock();
		inner
			.layers
			.iter()
			.rev()
			.filter(|layer| layer.enabled)
			.find_map(|layer| layer.set.get(key).cloned())
	}
}

/// Keeps one subscribed layer alive; removes it on drop.
#[must_use = "dropping the guard immediately removes the shortcut layer"]
pub struct ShortcutGuard<A> {
	router: Weak<Mutex<RouterInner<A>>>,
	token: u64,
}

impl<A> ShortcutGuard<A> {
	/// Mutes or unmutes the layer without removing it, e.g. while a text
	/// input has focus.
	pub fn set_enabled(&self, enabled: bool) {
		if let Some(inner) = self.router.upgrade()
			&& let Some(layer) = inner.lock().layers.iter_mut().find(|l| l.token == self.token)
		{
			layer.enabled = enabled;
		}
	}
}

impl<A> Drop for ShortcutGuard<A> {
	fn drop(&mut self) {
		if let Some(inner) = self.router.upgrade() {
			inner.lock().layers.retain(|l| l.token != self.token);
			debug!(token = self.token, "shortcut layer dropped");
		}
	}
}
