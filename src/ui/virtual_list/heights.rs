use std::collections::VecDeque;

/// Item heights for the resident window, falling back to an estimate until an
/// item has been measured.
#[derive(Debug, Clone)]
pub(super) struct HeightCache {
	estimate: u32,
	measured: VecDeque<Option<u32>>,
}

impl HeightCache {
	pub(super) fn new(estimate: u32) -> Self {
		Self {
			estimate,
			measured: VecDeque::new(),
		}
	}

	pub(super) fn height(&self, slot: usize) -> u32 {
		self.measured
			.get(slot)
			.copied()
			.flatten()
			.unwrap_or(self.estimate)
	}

	/// Record a rendered height. Returns whether the cached value changed.
	pub(super) fn measure(&mut self, slot: usize, height: u32) -> bool {
		match self.measured.get_mut(slot) {
			Some(entry) if *entry != Some(height) => {
				*entry = Some(height);
				true
			}
			_ => false,
		}
	}

	pub(super) fn invalidate(&mut self, slot: usize) {
		if let Some(entry) = self.measured.get_mut(slot) {
			*entry = None;
		}
	}

	pub(super) fn clear(&mut self) {
		self.measured.iter_mut().for_each(|entry| *entry = None);
	}

	/// Sum of the heights of every slot before `slot`.
	pub(super) fn offset_of(&self, slot: usize) -> u32 {
		(0..slot.min(self.measured.len()))
			.map(|index| self.height(index))
			.fold(0, u32::saturating_add)
	}

	pub(super) fn total(&self) -> u32 {
		self.offset_of(self.measured.len())
	}

	pub(super) fn push_back(&mut self, count: usize) {
		self.measured.extend(std::iter::repeat_n(None, count));
	}

	pub(super) fn push_front(&mut self, count: usize) {
		for _ in 0..count {
			self.measured.push_front(None);
		}
	}

	/// Drop `count` leading slots and return the height they occupied.
	pub(super) fn drop_front(&mut self, count: usize) -> u32 {
		let removed = self.offset_of(count);
		self.measured.drain(..count.min(self.measured.len()));
		removed
	}

	pub(super) fn drop_back(&mut self, count: usize) {
		let keep = self.measured.len().saturating_sub(count);
		self.measured.truncate(keep);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offsets_mix_measured_and_estimated_heights() {
		let mut heights = HeightCache::new(10);
		heights.push_back(4);
		assert!(heights.measure(1, 30));
		assert!(!heights.measure(1, 30));

		assert_eq!(heights.offset_of(0), 0);
		assert_eq!(heights.offset_of(2), 40);
		assert_eq!(heights.total(), 60);

		heights.invalidate(1);
		assert_eq!(heights.offset_of(2), 20);
	}

	#[test]
	fn dropping_leading_slots_reports_their_height() {
		let mut heights = HeightCache::new(10);
		heights.push_back(3);
		heights.measure(0, 25);
		assert_eq!(heights.drop_front(2), 35);
		assert_eq!(heights.total(), 10);
	}
}
