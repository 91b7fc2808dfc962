use std::collections::VecDeque;

/// Contiguous run of resident pages starting at `first_page`.
#[derive(Debug, Clone)]
pub(super) struct PageWindow<T> {
	first_page: usize,
	pages: VecDeque<Vec<T>>,
	len: usize,
}

impl<T> PageWindow<T> {
	pub(super) fn new(first_page: usize) -> Self {
		Self {
			first_page,
			pages: VecDeque::new(),
			len: 0,
		}
	}

	pub(super) fn first_page(&self) -> usize {
		self.first_page
	}

	pub(super) fn page_count(&self) -> usize {
		self.pages.len()
	}

	pub(super) fn len(&self) -> usize {
		self.len
	}

	/// Page that would extend the window forward.
	pub(super) fn next_page(&self) -> usize {
		self.first_page + self.pages.len()
	}

	/// Page that would extend the window backward, if any.
	pub(super) fn previous_page(&self) -> Option<usize> {
		self.first_page.checked_sub(1)
	}

	pub(super) fn get(&self, slot: usize) -> Option<&T> {
		let mut remaining = slot;
		for page in &self.pages {
			if remaining < page.len() {
				return page.get(remaining);
			}
			remaining -= page.len();
		}
		None
	}

	pub(super) fn iter(&self) -> impl Iterator<Item = &T> {
		self.pages.iter().flatten()
	}

	pub(super) fn push_back(&mut self, items: Vec<T>) {
		self.len += items.len();
		self.pages.push_back(items);
	}

	pub(super) fn push_front(&mut self, items: Vec<T>) {
		self.len += items.len();
		self.pages.push_front(items);
		self.first_page = self.first_page.saturating_sub(1);
	}

	/// Remove the oldest page, returning how many items it held.
	pub(super) fn evict_front(&mut self) -> usize {
		let Some(page) = self.pages.pop_front() else {
			return 0;
		};
		self.first_page += 1;
		self.len -= page.len();
		page.len()
	}

	/// Remove the newest page, returning how many items it held.
	pub(super) fn evict_back(&mut self) -> usize {
		let removed = self.pages.pop_back().map_or(0, |page| page.len());
		self.len -= removed;
		removed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slots_follow_page_order() {
		let mut window = PageWindow::new(2);
		window.push_back(vec![20, 21]);
		window.push_back(vec![30]);
		window.push_front(vec![10, 11]);

		assert_eq!(window.first_page(), 1);
		assert_eq!(window.next_page(), 4);
		assert_eq!(window.len(), 5);
		assert_eq!(window.get(2), Some(&20));
		assert_eq!(window.get(4), Some(&30));
		assert_eq!(window.get(5), None);
	}

	#[test]
	fn eviction_moves_the_window_start() {
		let mut window = PageWindow::new(0);
		window.push_back(vec!['a', 'b']);
		window.push_back(vec!['c']);

		assert_eq!(window.evict_front(), 2);
		assert_eq!(window.first_page(), 1);
		assert_eq!(window.evict_back(), 1);
		assert_eq!(window.len(), 0);
		assert_eq!(window.iter().count(), 0);
	}
}
