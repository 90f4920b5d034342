//! Debounced remote search around a select model.
//!
//! The host feeds keystrokes to [`RemoteSelect::input`], polls for due
//! [`SearchRequest`]s, runs them against whatever transport it has, and
//! hands results back to [`RemoteSelect::apply`]. Responses for anything
//! but the most recently issued request are dropped.

use std::time::Instant;

use mediathek_core::EntityRef;
use tracing::debug;

use crate::debounce::Debouncer;
use crate::model::SelectModel;

/// A search the host should run now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub generation: u64,
	pub query: String,
}

pub struct RemoteSelect {
	pub model: SelectModel,
	debounce: Debouncer,
	pending_query: Option<String>,
	generation: u64,
}

impl RemoteSelect {
	pub fn new(model: SelectModel) -> Self {
		Self {
			model,
			debounce: Debouncer::default(),
			pending_query: None,
			generation: 0,
		}
	}

	/// Records the current input text. Empty text clears the results and
	/// pends nothing: no results, no fetch, and a response still in flight
	/// is invalidated so it cannot repopulate the cleared menu.
	pub fn input(&mut self, text: &str, now: Instant) {
		if text.is_empty() {
			self.generation += 1;
			self.pending_query = None;
			self.debounce.cancel();
			self.model.set_candidates(Vec::new());
			self.model.set_searching(false);
			return;
		}
		self.pending_query = Some(text.to_owned());
		self.debounce.note(now);
	}

	/// Yields the search to run once the quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
		if !self.debounce.poll(now) {
			return None;
		}
		let query = self.pending_query.take()?;
		self.generation += 1;
		self.model.set_searching(true);
		debug!(generation = self.generation, %query, "issuing search");
		Some(SearchRequest {
			generation: self.generation,
			query,
		})
	}

	/// Applies results for `generation`; stale generations are ignored.
	pub fn apply(&mut self, generation: u64, results: Vec<EntityRef>) {
		if generation != self.generation {
			debug!(
				generation,
				current = self.generation,
				"dropping stale search results"
			);
			return;
		}
		self.model.set_searching(false);
		self.model.set_candidates(results);
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.debounce.deadline()
	}

	/// Parks until the pending quiet period ends. Returns immediately when
	/// nothing is pending.
	pub async fn sleep_until_due(&self) {
		if let Some(deadline) = self.debounce.deadline() {
			tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::debounce::SEARCH_DEBOUNCE;
	use crate::model::SelectMode;

	fn remote() -> RemoteSelect {
		RemoteSelect::new(SelectModel::new(SelectMode::Multi))
	}

	#[test]
	fn burst_issues_exactly_one_request() {
		let mut select = remote();
		let t0 = Instant::now();
		select.input("o", t0);
		select.input("op", t0 + Duration::from_millis(100));
		select.input("ope", t0 + Duration::from_millis(200));

		assert_eq!(select.poll(t0 + Duration::from_millis(400)), None);
		let due = t0 + Duration::from_millis(200) + SEARCH_DEBOUNCE;
		let request = select.poll(due).unwrap();
		assert_eq!(request.query, "ope");
		assert!(select.model.is_searching());
		assert_eq!(select.poll(due + Duration::from_millis(50)), None);
	}

	#[test]
	fn stale_results_are_dropped() {
		let mut select = remote();
		let t0 = Instant::now();

		select.input("first", t0);
		let first = select.poll(t0 + SEARCH_DEBOUNCE).unwrap();

		select.input("second", t0 + SEARCH_DEBOUNCE);
		let second = select.poll(t0 + SEARCH_DEBOUNCE + SEARCH_DEBOUNCE).unwrap();
		assert!(second.generation > first.generation);

		select.apply(first.generation, vec![EntityRef::new("1", "old hit")]);
		assert!(select.model.candidates().is_empty());
		assert!(select.model.is_searching());

		select.apply(second.generation, vec![EntityRef::new("2", "new hit")]);
		assert_eq!(select.model.candidates().len(), 1);
		assert!(!select.model.is_searching());
	}

	#[test]
	fn empty_input_clears_without_fetching() {
		let mut select = remote();
		let t0 = Instant::now();

		select.input("abc", t0);
		let request = select.poll(t0 + SEARCH_DEBOUNCE).unwrap();
		select.apply(request.generation, vec![EntityRef::new("1", "hit")]);

		select.input("", t0 + SEARCH_DEBOUNCE);
		assert!(select.model.candidates().is_empty());
		assert_eq!(select.poll(t0 + SEARCH_DEBOUNCE + SEARCH_DEBOUNCE), None);
	}

	#[test]
	fn clearing_invalidates_in_flight_searches() {
		let mut select = remote();
		let t0 = Instant::now();
		let due = t0 + SEARCH_DEBOUNCE;

		select.input("night", t0);
		let request = select.poll(due).unwrap();

		// cleared while the search is out; the late response must not land
		select.input("", due);
		select.apply(request.generation, vec![EntityRef::new("1", "late hit")]);
		assert!(select.model.candidates().is_empty());
		assert!(!select.model.is_searching());

		// retyping issues a fresh generation that still applies
		select.input("mo", due);
		let request = select.poll(due + SEARCH_DEBOUNCE).unwrap();
		assert_eq!(request.query, "mo");
		select.apply(request.generation, vec![EntityRef::new("2", "moonrise")]);
		assert_eq!(select.model.candidates().len(), 1);
	}
}
