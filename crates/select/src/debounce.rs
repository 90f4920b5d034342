//! Keystroke debouncing with an explicit clock.
//!
//! All methods take `now` so tests can drive time synthetically; real
//! shells feed `Instant::now()` or use [`crate::RemoteSelect::sleep_until_due`].

use std::time::{Duration, Instant};

/// Quiet period required after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
	delay: Duration,
	last_input: Option<Instant>,
}

impl Debouncer {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			last_input: None,
		}
	}

	/// Records a keystroke, restarting the quiet period.
	pub fn note(&mut self, now: Instant) {
		self.last_input = Some(now);
	}

	pub fn cancel(&mut self) {
		self.last_input = None;
	}

	pub fn is_pending(&self) -> bool {
		self.last_input.is_some()
	}

	/// When the pending quiet period ends, if one is running.
	pub fn deadline(&self) -> Option<Instant> {
		self.last_input.map(|at| at + self.delay)
	}

	/// True once the quiet period has elapsed; consumes the pending state.
	pub fn poll(&mut self, now: Instant) -> bool {
		match self.last_input {
			Some(at) if now.saturating_duration_since(at) >= self.delay => {
				self.last_input = None;
				true
			}
			_ => false,
		}
	}
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(SEARCH_DEBOUNCE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn burst_fires_once_after_the_last_keystroke() {
		let mut debounce = Debouncer::default();
		let t0 = Instant::now();

		for i in 0..5 {
			debounce.note(t0 + Duration::from_millis(i * 80));
		}
		let last = t0 + Duration::from_millis(4 * 80);

		assert!(!debounce.poll(last + Duration::from_millis(499)));
		assert!(debounce.poll(last + Duration::from_millis(500)));
		// consumed; nothing further fires
		assert!(!debounce.poll(last + Duration::from_millis(900)));
	}

	#[test]
	fn lone_keystroke_fires_after_the_delay() {
		let mut debounce = Debouncer::default();
		let t0 = Instant::now();
		debounce.note(t0);
		assert!(debounce.poll(t0 + Duration::from_millis(600)));
	}

	#[test]
	fn cancel_clears_the_pending_period() {
		let mut debounce = Debouncer::default();
		let t0 = Instant::now();
		debounce.note(t0);
		debounce.cancel();
		assert!(!debounce.is_pending());
		assert!(!debounce.poll(t0 + Duration::from_secs(5)));
	}
}
