use std::sync::mpsc::Sender;
use std::time::Duration;

use super::commands::SearchResult;
use super::hit::Snapshot;
use super::throttle::Throttle;

/// Receives the snapshots produced while a search runs.
///
/// Both methods return `false` when the receiving side has gone away, which
/// stops the run.
pub trait SearchNotifier {
	/// A new hit was appended; `hits` is everything found so far, unsorted.
	fn partial(&mut self, hits: &Snapshot) -> bool;

	/// Every document has been evaluated; `hits` is ranked.
	fn complete(&mut self, hits: &Snapshot) -> bool;
}

impl<N: SearchNotifier + ?Sized> SearchNotifier for &mut N {
	fn partial(&mut self, hits: &Snapshot) -> bool {
		(**self).partial(hits)
	}

	fn complete(&mut self, hits: &Snapshot) -> bool {
		(**self).complete(hits)
	}
}

/// Caps how often partial snapshots reach the inner notifier.
///
/// The final snapshot always goes through.
pub struct ThrottledNotifier<N> {
	inner: N,
	gate: Throttle,
}

impl<N> ThrottledNotifier<N> {
	pub fn new(inner: N, interval: Duration) -> Self {
		Self {
			inner,
			gate: Throttle::new(interval),
		}
	}

	pub fn into_inner(self) -> N {
		self.inner
	}
}

impl<N: SearchNotifier> SearchNotifier for ThrottledNotifier<N> {
	fn partial(&mut self, hits: &Snapshot) -> bool {
		if self.gate.try_fire() {
			self.inner.partial(hits)
		} else {
			true
		}
	}

	fn complete(&mut self, hits: &Snapshot) -> bool {
		self.inner.complete(hits)
	}
}

/// Handle used by the worker to stream snapshots back to the UI thread.
pub struct SearchStream<'a> {
	tx: &'a Sender<SearchResult>,
	id: u64,
}

impl<'a> SearchStream<'a> {
	#[must_use]
	pub fn new(tx: &'a Sender<SearchResult>, id: u64) -> Self {
		Self { tx, id }
	}

	pub fn send(&self, hits: Snapshot, complete: bool) -> bool {
		self.tx
			.send(SearchResult {
				id: self.id,
				hits,
				complete,
			})
			.is_ok()
	}
}

impl SearchNotifier for SearchStream<'_> {
	fn partial(&mut self, hits: &Snapshot) -> bool {
		self.send(hits.clone(), false)
	}

	fn complete(&mut self, hits: &Snapshot) -> bool {
		self.send(hits.clone(), true)
	}
}
