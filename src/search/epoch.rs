use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Shared query generation counter.
///
/// Every new query advances the epoch; a run whose id no longer equals the
/// current value has been superseded and stops producing updates.
#[derive(Debug, Clone, Default)]
pub struct Epoch(Arc<AtomicU64>);

impl Epoch {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new generation and return its id.
	pub fn advance(&self) -> u64 {
		self.0.fetch_add(1, AtomicOrdering::AcqRel) + 1
	}

	#[must_use]
	pub fn current(&self) -> u64 {
		self.0.load(AtomicOrdering::Acquire)
	}

	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		self.current() == id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn advancing_invalidates_earlier_ids() {
		let epoch = Epoch::new();
		let first = epoch.advance();
		assert!(epoch.is_current(first));

		let shared = epoch.clone();
		let second = shared.advance();
		assert!(!epoch.is_current(first));
		assert!(epoch.is_current(second));
	}
}
