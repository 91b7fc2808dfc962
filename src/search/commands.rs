use super::hit::Snapshot;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Run a search for the provided terms.
	Query {
		/// Epoch id the UI issued this query under.
		id: u64,
		terms: Vec<String>,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Snapshot emitted back to the UI layer.
#[derive(Debug, Clone)]
pub struct SearchResult {
	/// Identifier matching the [`SearchCommand::Query`] that produced the result.
	pub id: u64,
	pub hits: Snapshot,
	/// Whether this is the final, ranked result set.
	pub complete: bool,
}
