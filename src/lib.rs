//! Incremental full-text search over a blog's post and memo index.
//!
//! [`documents`] loads the pre-built JSON index, [`search`] runs multi-field
//! word-boundary queries as cancellable streams of snapshots, and [`ui`]
//! provides the headless controller and virtualized list a front end drives.

pub mod app_dirs;
pub mod documents;
pub mod logging;
pub mod search;
pub mod ui;

pub use documents::{Document, DocumentStore, IndexError, IndexLoader, IndexSource};
pub use search::{MatchOptions, SearchEngine, SearchHit, SearchRun, SearchUpdate, StopWordPolicy};
pub use ui::{SearchController, SearchStatus, VirtualList};
