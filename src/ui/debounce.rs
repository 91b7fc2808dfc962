use std::time::{Duration, Instant};

/// Collapses a burst of values into the last one, released after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	/// Record a value, restarting the quiet period.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now));
	}

	/// Release the pending value once `delay` has passed since the last push.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((_, at)) if now.saturating_duration_since(*at) >= self.delay => {
				self.pending.take().map(|(value, _)| value)
			}
			_ => None,
		}
	}

	/// Drop the pending value without releasing it.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|(value, _)| value)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bursts_collapse_to_the_last_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(300));
		debouncer.push("h", start);
		debouncer.push("he", start + Duration::from_millis(100));
		debouncer.push("hel", start + Duration::from_millis(200));

		assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
		assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("hel"));
		assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
	}

	#[test]
	fn cancel_discards_the_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::ZERO);
		debouncer.push(1, start);
		assert_eq!(debouncer.cancel(), Some(1));
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.poll(start), None);
	}
}
