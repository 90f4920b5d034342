//! Toast queue.
//!
//! Models collect user-facing outcome messages here; the host drains the
//! queue each frame and renders however it likes.

use std::collections::VecDeque;

use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
	/// Informational message (default).
	#[default]
	Info,
	Success,
	Warn,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub level: Level,
	pub message: String,
}

/// Ordered queue of not-yet-displayed toasts.
#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: VecDeque<Toast>,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, level: Level, message: impl Into<String>) {
		let message = message.into();
		if level == Level::Error {
			warn!(%message, "toast");
		}
		self.pending.push_back(Toast { level, message });
	}

	pub fn success(&mut self, message: impl Into<String>) {
		self.push(Level::Success, message);
	}

	pub fn error(&mut self, message: impl Into<String>) {
		self.push(Level::Error, message);
	}

	/// Removes and returns every queued toast, oldest first.
	pub fn take_pending(&mut self) -> Vec<Toast> {
		self.pending.drain(..).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}
