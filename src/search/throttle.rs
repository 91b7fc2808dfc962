use std::time::{Duration, Instant};

/// Leading-edge rate limiter.
///
/// The first call in a span of `interval` passes; the rest of that span is
/// dropped. Nothing is queued for later delivery.
#[derive(Debug, Clone)]
pub struct Throttle {
	interval: Duration,
	last_fired: Option<Instant>,
}

impl Throttle {
	#[must_use]
	pub fn new(interval: Duration) -> Self {
		Self {
			interval,
			last_fired: None,
		}
	}

	pub fn try_fire(&mut self) -> bool {
		self.try_fire_at(Instant::now())
	}

	/// Same as [`try_fire`](Self::try_fire) with an explicit clock reading.
	pub fn try_fire_at(&mut self, now: Instant) -> bool {
		match self.last_fired {
			Some(last) if now.saturating_duration_since(last) < self.interval => false,
			_ => {
				self.last_fired = Some(now);
				true
			}
		}
	}

	/// Forget the current span so the next call passes.
	pub fn reset(&mut self) {
		self.last_fired = None;
	}
}

/// A callback wrapped in a [`Throttle`].
pub struct Throttled<F> {
	f: F,
	gate: Throttle,
}

impl<F> Throttled<F> {
	pub fn new(f: F, interval: Duration) -> Self {
		Self {
			f,
			gate: Throttle::new(interval),
		}
	}

	/// Invoke the callback if the current span allows it and return its result.
	pub fn call<A, R>(&mut self, arg: A) -> Option<R>
	where
		F: FnMut(A) -> R,
	{
		self.call_at(Instant::now(), arg)
	}

	pub fn call_at<A, R>(&mut self, now: Instant, arg: A) -> Option<R>
	where
		F: FnMut(A) -> R,
	{
		if self.gate.try_fire_at(now) {
			Some((self.f)(arg))
		} else {
			None
		}
	}

	pub fn into_inner(self) -> F {
		self.f
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_first_call_in_a_span_is_delivered() {
		let mut seen = Vec::new();
		let start = Instant::now();
		{
			let mut throttled = Throttled::new(|value: u32| seen.push(value), Duration::from_millis(100));
			for (step, value) in (1..=5).enumerate() {
				throttled.call_at(start + Duration::from_millis(step as u64 * 10), value);
			}
		}
		assert_eq!(seen, vec![1]);
	}

	#[test]
	fn calls_pass_again_once_the_span_elapses() {
		let start = Instant::now();
		let mut throttled = Throttled::new(|value: u32| value * 2, Duration::from_millis(50));
		assert_eq!(throttled.call_at(start, 1), Some(2));
		assert_eq!(throttled.call_at(start + Duration::from_millis(49), 2), None);
		assert_eq!(throttled.call_at(start + Duration::from_millis(50), 3), Some(6));
		assert_eq!(throttled.call_at(start + Duration::from_millis(60), 4), None);
	}

	#[test]
	fn zero_interval_never_drops() {
		let now = Instant::now();
		let mut gate = Throttle::new(Duration::ZERO);
		assert!(gate.try_fire_at(now));
		assert!(gate.try_fire_at(now));
	}

	#[test]
	fn reset_opens_a_new_span() {
		let now = Instant::now();
		let mut gate = Throttle::new(Duration::from_secs(60));
		assert!(gate.try_fire_at(now));
		assert!(!gate.try_fire_at(now));
		gate.reset();
		assert!(gate.try_fire_at(now));
	}
}
