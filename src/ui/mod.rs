//! Headless search UI state for embedding in any presentation layer.
//!
//! [`SearchController`] owns input pacing, the lazily built engine and its
//! worker, visibility and focus, and exposes a [`SearchStatus`] for rendering.
//! [`VirtualList`] keeps a bounded, paginated window of whatever results the
//! caller chooses to show.

mod controller;
mod debounce;
mod session;
mod status;
pub mod virtual_list;

pub use controller::{
	Availability, ControllerConfig, ControllerEvent, ControllerKey, DEFAULT_DEBOUNCE, Focus,
	PointerTarget, SearchController, UnavailableError,
};
pub use debounce::Debouncer;
pub use status::{SearchPhase, SearchStatus};
pub use virtual_list::{
	PageChange, PageRequest, PageSource, VirtualList, VirtualListConfig, VisibleItem,
};
