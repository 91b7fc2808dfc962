use std::mem;
use std::sync::Arc;

use tracing::debug;

use super::epoch::Epoch;
use super::hit::{SearchHit, Snapshot, rank};
use super::matcher::{MatchOptions, PreparedTerm, match_document, prepare_terms};
use super::notifier::SearchNotifier;
use super::query::Query;
use crate::documents::DocumentStore;

/// Multi-field search over a read-only [`DocumentStore`].
///
/// Cloning is cheap and clones share the epoch, so a new search started from
/// any clone supersedes runs started from the others.
#[derive(Debug, Clone)]
pub struct SearchEngine {
	store: DocumentStore,
	fields: Arc<[String]>,
	options: Arc<MatchOptions>,
	epoch: Epoch,
}

impl SearchEngine {
	/// Create an engine that checks `fields` in the given order.
	pub fn new<I, S>(store: DocumentStore, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::with_options(store, fields, MatchOptions::default())
	}

	pub fn with_options<I, S>(store: DocumentStore, fields: I, options: MatchOptions) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			store,
			fields: fields.into_iter().map(Into::into).collect(),
			options: Arc::new(options),
			epoch: Epoch::new(),
		}
	}

	/// Counter used to supersede runs; shared with every clone of the engine.
	#[must_use]
	pub fn epoch(&self) -> &Epoch {
		&self.epoch
	}

	/// Start a new search, superseding any run still in progress.
	pub fn search<S: AsRef<str>>(&self, terms: &[S]) -> SearchRun<'_> {
		let id = self.epoch.advance();
		self.run_query(id, terms)
	}

	/// Run a search to completion, reporting snapshots to `notifier`.
	pub fn search_with<S, N>(&self, terms: &[S], notifier: &mut N) -> RunOutcome
	where
		S: AsRef<str>,
		N: SearchNotifier + ?Sized,
	{
		self.search(terms).drive(notifier)
	}

	/// Build a run for an id that was already issued from the epoch.
	pub(crate) fn run_query<S: AsRef<str>>(&self, id: u64, terms: &[S]) -> SearchRun<'_> {
		let query = Query::from_terms(terms);
		let terms = prepare_terms(&query, &self.options);
		debug!(id, terms = ?query.terms(), "starting search");
		SearchRun {
			engine: self,
			id,
			terms,
			cursor: 0,
			evaluated: 0,
			hits: Vec::new(),
			state: RunState::Scanning,
		}
	}
}

/// One step of a search run.
#[derive(Debug, Clone)]
pub enum SearchUpdate {
	/// A hit was found; the snapshot holds every hit so far in discovery order.
	Partial(Snapshot),
	/// The scan finished; the snapshot is ranked.
	Complete(Snapshot),
}

impl SearchUpdate {
	#[must_use]
	pub fn hits(&self) -> &Snapshot {
		match self {
			Self::Partial(hits) | Self::Complete(hits) => hits,
		}
	}

	#[must_use]
	pub fn is_complete(&self) -> bool {
		matches!(self, Self::Complete(_))
	}
}

/// How a driven run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
	Completed { hits: usize },
	/// A newer search advanced the epoch first.
	Cancelled,
	/// The notifier's receiver went away.
	Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
	Scanning,
	Finished,
	Cancelled,
}

/// Lazy, finite sequence of snapshots for a single query.
///
/// The run owns its accumulator. It ends without a [`SearchUpdate::Complete`]
/// when the engine's epoch moves past its id.
pub struct SearchRun<'a> {
	engine: &'a SearchEngine,
	id: u64,
	terms: Vec<PreparedTerm>,
	cursor: usize,
	evaluated: usize,
	hits: Vec<Arc<SearchHit>>,
	state: RunState,
}

impl SearchRun<'_> {
	/// Number of documents checked so far.
	#[must_use]
	pub fn evaluated(&self) -> usize {
		self.evaluated
	}

	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.state == RunState::Cancelled
	}

	/// Feed every update into `notifier` until the run completes or stops.
	pub fn drive<N: SearchNotifier + ?Sized>(mut self, notifier: &mut N) -> RunOutcome {
		while let Some(update) = self.next() {
			match update {
				SearchUpdate::Partial(hits) => {
					if !notifier.partial(&hits) {
						return RunOutcome::Disconnected;
					}
				}
				SearchUpdate::Complete(hits) => {
					if !notifier.complete(&hits) {
						return RunOutcome::Disconnected;
					}
					return RunOutcome::Completed { hits: hits.len() };
				}
			}
		}
		RunOutcome::Cancelled
	}

	fn finish(&mut self) -> SearchUpdate {
		self.state = RunState::Finished;
		let mut hits = mem::take(&mut self.hits);
		rank(&mut hits);
		debug!(
			id = self.id,
			hits = hits.len(),
			evaluated = self.evaluated,
			"search complete"
		);
		SearchUpdate::Complete(hits.into())
	}
}

impl Iterator for SearchRun<'_> {
	type Item = SearchUpdate;

	fn next(&mut self) -> Option<Self::Item> {
		if self.state != RunState::Scanning {
			return None;
		}

		let engine = self.engine;
		let documents = engine.store.documents();
		loop {
			if !engine.epoch.is_current(self.id) {
				self.state = RunState::Cancelled;
				debug!(id = self.id, evaluated = self.evaluated, "search superseded");
				return None;
			}

			if self.terms.is_empty() || self.cursor >= documents.len() {
				return Some(self.finish());
			}

			let doc = &documents[self.cursor];
			self.cursor += 1;
			self.evaluated += 1;
			if let Some(hit) = match_document(
				doc,
				&engine.fields,
				&self.terms,
				engine.options.stop_word_policy,
			) {
				self.hits.push(Arc::new(hit));
				return Some(SearchUpdate::Partial(self.hits.as_slice().into()));
			}
		}
	}
}
