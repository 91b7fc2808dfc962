//! Incremental multi-field search over the document store.
//!
//! A [`SearchEngine`] produces a [`SearchRun`] per query: a lazy sequence of
//! snapshots that ends with the ranked result set, or ends early once a newer
//! query advances the shared [`Epoch`]. The [`worker`] module moves runs onto a
//! background thread and streams throttled snapshots back over a channel.

mod commands;
mod engine;
mod epoch;
mod excerpt;
mod hit;
mod matcher;
mod notifier;
mod query;
mod throttle;
pub mod worker;

use std::time::Duration;

pub use commands::{SearchCommand, SearchResult};
pub use engine::{RunOutcome, SearchEngine, SearchRun, SearchUpdate};
pub use epoch::Epoch;
pub use hit::{SearchHit, Snapshot, TermMatch, rank};
pub use matcher::{MatchOptions, StopWordPolicy};
pub use notifier::{SearchNotifier, SearchStream, ThrottledNotifier};
pub use query::Query;
pub use throttle::{Throttle, Throttled};

/// Fields checked when nothing else is configured, in priority order.
pub const DEFAULT_FIELDS: &[&str] = &["title", "content", "description", "keywords", "tags"];

/// Minimum spacing between partial snapshots delivered to the UI.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

/// Terms treated as noise.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
	"a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "is", "it", "of", "on",
	"or", "that", "the", "this", "to", "was", "with",
];
