//! Windowed view over a paginated source with variable item heights.
//!
//! Only a bounded run of pages is resident at a time. Scrolling near either
//! end of the tracked range requests the neighbouring page; completing the
//! request appends or prepends it and evicts pages from the opposite end once
//! the window grows past [`VirtualListConfig::max_pages`].

mod heights;
mod window;

use heights::HeightCache;
use tracing::warn;
use window::PageWindow;

/// Paging and measurement settings for a [`VirtualList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualListConfig {
	pub page_size: usize,
	/// Resident pages kept before the far end is evicted.
	pub max_pages: usize,
	/// Scroll fraction at or below which the previous page is requested.
	pub low_watermark: f64,
	/// Scroll fraction at or above which the next page is requested.
	pub high_watermark: f64,
	/// Height assumed for items that have not been measured.
	pub estimated_item_height: u32,
}

impl Default for VirtualListConfig {
	fn default() -> Self {
		Self {
			page_size: 20,
			max_pages: 5,
			low_watermark: 0.2,
			high_watermark: 0.7,
			estimated_item_height: 48,
		}
	}
}

impl VirtualListConfig {
	/// Most items the window can hold.
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.page_size.saturating_mul(self.max_pages.max(1))
	}
}

/// Supplies pages of items by page number.
pub trait PageSource<T> {
	type Error;

	fn fetch_page(&mut self, page: usize) -> Result<Vec<T>, Self::Error>;
}

impl<T, E, F> PageSource<T> for F
where
	F: FnMut(usize) -> Result<Vec<T>, E>,
{
	type Error = E;

	fn fetch_page(&mut self, page: usize) -> Result<Vec<T>, E> {
		self(page)
	}
}

/// Page the list wants loaded next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
	Previous(usize),
	Next(usize),
}

impl PageRequest {
	#[must_use]
	pub fn page(self) -> usize {
		match self {
			Self::Previous(page) | Self::Next(page) => page,
		}
	}
}

/// What a completed page load did to the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageChange {
	pub added: usize,
	pub evicted: usize,
	/// Amount the content above the viewport grew (positive) or shrank
	/// (negative). Add it to the scroll position to keep the view steady.
	pub offset_shift: i64,
}

/// An item inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a, T> {
	pub slot: usize,
	pub offset: u32,
	pub height: u32,
	pub item: &'a T,
}

#[derive(Debug, Clone)]
pub struct VirtualList<T> {
	config: VirtualListConfig,
	window: PageWindow<T>,
	heights: HeightCache,
	pending: Option<PageRequest>,
	end_reached: bool,
}

impl<T> VirtualList<T> {
	/// Create a list whose window starts at page 0 with `sources`.
	///
	/// Items past the window capacity are dropped.
	pub fn new(config: VirtualListConfig, sources: Vec<T>) -> Self {
		let mut list = Self {
			config,
			window: PageWindow::new(0),
			heights: HeightCache::new(config.estimated_item_height),
			pending: None,
			end_reached: false,
		};

		let page_size = config.page_size.max(1);
		let mut sources = sources.into_iter().take(config.capacity()).peekable();
		while sources.peek().is_some() {
			let page: Vec<T> = sources.by_ref().take(page_size).collect();
			list.heights.push_back(page.len());
			list.window.push_back(page);
		}
		list
	}

	#[must_use]
	pub fn config(&self) -> &VirtualListConfig {
		&self.config
	}

	/// Number of resident items.
	#[must_use]
	pub fn len(&self) -> usize {
		self.window.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.window.len() == 0
	}

	#[must_use]
	pub fn first_page(&self) -> usize {
		self.window.first_page()
	}

	#[must_use]
	pub fn get(&self, slot: usize) -> Option<&T> {
		self.window.get(slot)
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.window.iter()
	}

	/// Position of `slot` in the full source.
	#[must_use]
	pub fn absolute_index(&self, slot: usize) -> usize {
		self.window.first_page() * self.config.page_size + slot
	}

	/// Whether a page request is outstanding.
	#[must_use]
	pub fn is_locked(&self) -> bool {
		self.pending.is_some()
	}

	#[must_use]
	pub fn pending(&self) -> Option<PageRequest> {
		self.pending
	}

	/// Whether the source returned an empty page past the window.
	#[must_use]
	pub fn is_end_reached(&self) -> bool {
		self.end_reached
	}

	/// Decide whether the scroll position calls for another page.
	///
	/// `top` is the scroll offset and `range` the scrollable extent. A returned
	/// request holds the lock until [`complete`](Self::complete) is called.
	pub fn on_scroll(&mut self, top: u32, range: u32) -> Option<PageRequest> {
		if self.pending.is_some() || range == 0 {
			return None;
		}

		let ratio = f64::from(top) / f64::from(range);
		let request = if ratio <= self.config.low_watermark {
			self.window.previous_page().map(PageRequest::Previous)
		} else if ratio >= self.config.high_watermark && !self.end_reached {
			Some(PageRequest::Next(self.window.next_page()))
		} else {
			None
		};

		self.pending = request;
		request
	}

	/// Apply the outcome of the outstanding page request and release the lock.
	///
	/// On error the window is left as it was. Completions for any other request
	/// are ignored and keep the lock held. Pages longer than
	/// [`VirtualListConfig::page_size`] are cut down to it.
	pub fn complete<E>(
		&mut self,
		request: PageRequest,
		result: Result<Vec<T>, E>,
	) -> Result<PageChange, E> {
		if self.pending != Some(request) {
			return Ok(PageChange::default());
		}
		self.pending = None;

		let mut items = result?;
		let page_size = self.config.page_size.max(1);
		if items.len() > page_size {
			warn!(
				page = request.page(),
				returned = items.len(),
				page_size,
				"page source returned an oversized page"
			);
			items.truncate(page_size);
		}

		let change = match request {
			PageRequest::Next(page) if page == self.window.next_page() => self.append(items),
			PageRequest::Previous(page) if Some(page) == self.window.previous_page() => {
				self.prepend(items)
			}
			_ => PageChange::default(),
		};
		Ok(change)
	}

	/// Check the scroll position and, if a page is due, fetch and apply it.
	pub fn scroll<S>(
		&mut self,
		top: u32,
		range: u32,
		source: &mut S,
	) -> Result<Option<PageChange>, S::Error>
	where
		S: PageSource<T> + ?Sized,
	{
		let Some(request) = self.on_scroll(top, range) else {
			return Ok(None);
		};
		let result = source.fetch_page(request.page());
		self.complete(request, result).map(Some)
	}

	/// Record the rendered height of a slot. Returns whether layout moved.
	pub fn measure(&mut self, slot: usize, height: u32) -> bool {
		self.heights.measure(slot, height)
	}

	/// Forget every measurement, e.g. after the viewport width changed.
	pub fn on_resize(&mut self) {
		self.heights.clear();
	}

	/// Forget one slot's measurement after its content changed size.
	pub fn height_changed(&mut self, slot: usize) {
		self.heights.invalidate(slot);
	}

	#[must_use]
	pub fn offset_of(&self, slot: usize) -> u32 {
		self.heights.offset_of(slot)
	}

	#[must_use]
	pub fn total_height(&self) -> u32 {
		self.heights.total()
	}

	/// Items overlapping the viewport `[top, top + height)`.
	#[must_use]
	pub fn visible(&self, top: u32, height: u32) -> Vec<VisibleItem<'_, T>> {
		let bottom = top.saturating_add(height);
		let mut visible = Vec::new();
		let mut offset = 0u32;
		for (slot, item) in self.window.iter().enumerate() {
			if offset >= bottom {
				break;
			}
			let item_height = self.heights.height(slot);
			let end = offset.saturating_add(item_height);
			if end > top {
				visible.push(VisibleItem {
					slot,
					offset,
					height: item_height,
					item,
				});
			}
			offset = end;
		}
		visible
	}

	fn append(&mut self, items: Vec<T>) -> PageChange {
		if items.is_empty() {
			self.end_reached = true;
			return PageChange::default();
		}

		let added = items.len();
		self.heights.push_back(added);
		self.window.push_back(items);

		let mut change = PageChange {
			added,
			..PageChange::default()
		};
		while self.window.page_count() > self.config.max_pages.max(1) {
			let removed = self.window.evict_front();
			let removed_height = self.heights.drop_front(removed);
			change.evicted += removed;
			change.offset_shift -= i64::from(removed_height);
		}
		change
	}

	fn prepend(&mut self, items: Vec<T>) -> PageChange {
		if items.is_empty() {
			return PageChange::default();
		}

		let added = items.len();
		self.heights.push_front(added);
		self.window.push_front(items);

		let mut change = PageChange {
			added,
			offset_shift: i64::from(self.heights.offset_of(added)),
			..PageChange::default()
		};
		while self.window.page_count() > self.config.max_pages.max(1) {
			let removed = self.window.evict_back();
			self.heights.drop_back(removed);
			change.evicted += removed;
			self.end_reached = false;
		}
		change
	}
}
