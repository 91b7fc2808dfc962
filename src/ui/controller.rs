use std::mem;
use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use super::debounce::Debouncer;
use super::session::SearchSession;
use super::status::{SearchPhase, SearchStatus};
use crate::documents::{IndexError, IndexLoader};
use crate::search::{
	DEFAULT_FIELDS, DEFAULT_THROTTLE, MatchOptions, Query, SearchEngine, SearchHit, Snapshot,
};

/// Quiet period before typed input turns into a search.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Settings the controller needs to build its engine and pace its input.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
	pub fields: Vec<String>,
	pub options: MatchOptions,
	pub debounce: Duration,
	pub throttle: Duration,
	/// Load the index as soon as the input gains focus instead of on the first search.
	pub init_on_focus: bool,
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self {
			fields: DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect(),
			options: MatchOptions::default(),
			debounce: DEFAULT_DEBOUNCE,
			throttle: DEFAULT_THROTTLE,
			init_on_focus: false,
		}
	}
}

/// Why the controller has no working engine.
#[derive(Debug, Error)]
pub enum UnavailableError {
	#[error(transparent)]
	Index(#[from] IndexError),

	/// The background search thread exited.
	#[error("search worker stopped")]
	WorkerStopped,
}

/// Whether the engine behind the controller exists yet.
#[derive(Debug, Default)]
pub enum Availability {
	/// Nothing has been loaded.
	#[default]
	Uninitialized,
	Ready,
	/// Loading failed or the worker died; the next search trigger tries again.
	Unavailable(UnavailableError),
}

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
	/// The search panel itself.
	Panel,
	/// The icon that opens the panel.
	Trigger,
	Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKey {
	Enter,
	Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Trigger,
	Input,
}

/// Signals for the parent component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
	OpenChanged(bool),
	StatusChanged(SearchStatus),
	/// Loading the index failed or the worker stopped, with the given message.
	Unavailable(String),
}

/// Headless search box: input pacing, engine lifecycle, phases and visibility.
pub struct SearchController<L> {
	loader: L,
	config: ControllerConfig,
	session: Option<SearchSession>,
	availability: Availability,
	phase: SearchPhase,
	text: String,
	search_text: String,
	debouncer: Debouncer<String>,
	open: bool,
	focus: Focus,
	listing: Snapshot,
	results: Snapshot,
	events: Vec<ControllerEvent>,
}

impl<L: IndexLoader> SearchController<L> {
	pub fn new(loader: L, config: ControllerConfig) -> Self {
		let debouncer = Debouncer::new(config.debounce);
		let empty: Snapshot = Vec::new().into();
		Self {
			loader,
			config,
			session: None,
			availability: Availability::Uninitialized,
			phase: SearchPhase::Ready,
			text: String::new(),
			search_text: String::new(),
			debouncer,
			open: false,
			focus: Focus::Trigger,
			listing: empty.clone(),
			results: empty,
			events: Vec::new(),
		}
	}

	/// Entries shown while no search is active.
	///
	/// Without a listing, every document in the store becomes the listing once
	/// the index is loaded.
	#[must_use]
	pub fn with_listing(mut self, listing: Vec<SearchHit>) -> Self {
		self.listing = listing.into_iter().map(Arc::new).collect();
		if self.phase == SearchPhase::Ready {
			self.results = self.listing.clone();
		}
		self
	}

	#[must_use]
	pub fn status(&self) -> SearchStatus {
		SearchStatus {
			phase: self.phase,
			search_text: self.search_text.clone(),
		}
	}

	#[must_use]
	pub fn phase(&self) -> SearchPhase {
		self.phase
	}

	/// Current contents of the input box.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Results to render: the listing, a partial snapshot, or the final set.
	#[must_use]
	pub fn results(&self) -> &Snapshot {
		&self.results
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn availability(&self) -> &Availability {
		&self.availability
	}

	/// Drain the signals raised since the last call.
	pub fn take_events(&mut self) -> Vec<ControllerEvent> {
		mem::take(&mut self.events)
	}

	pub fn open(&mut self) {
		if !self.open {
			self.open = true;
			self.events.push(ControllerEvent::OpenChanged(true));
		}
		self.focus_input();
	}

	/// Hide the panel. Query text and results are kept.
	pub fn close(&mut self) {
		if self.open {
			self.open = false;
			self.events.push(ControllerEvent::OpenChanged(false));
		}
		self.focus = Focus::Trigger;
	}

	pub fn toggle(&mut self) {
		if self.open {
			self.close();
		} else {
			self.open();
		}
	}

	pub fn focus_input(&mut self) {
		self.focus = Focus::Input;
		if self.config.init_on_focus {
			self.ensure_session();
		}
	}

	pub fn pointer_down(&mut self, target: PointerTarget) {
		if target == PointerTarget::Outside {
			self.close();
		}
	}

	pub fn key(&mut self, key: ControllerKey) {
		match key {
			ControllerKey::Enter => {
				self.submit();
			}
			ControllerKey::Escape => self.close(),
		}
	}

	/// Record a keystroke's worth of input; the search fires from [`tick`](Self::tick).
	pub fn input(&mut self, text: impl Into<String>, now: Instant) {
		let text = text.into();
		self.text.clone_from(&text);
		self.debouncer.push(text, now);
	}

	/// Fire a debounced search that has gone quiet and apply worker results.
	pub fn tick(&mut self, now: Instant) {
		if let Some(text) = self.debouncer.poll(now) {
			self.search(&text);
		}
		self.poll();
	}

	/// Search for the current input immediately.
	pub fn submit(&mut self) -> bool {
		self.debouncer.cancel();
		let text = self.text.clone();
		self.search(&text)
	}

	/// Start a search for `text`, superseding any search in flight.
	///
	/// Blank input resets instead. Returns whether a query was issued.
	pub fn search(&mut self, text: &str) -> bool {
		let query = Query::parse(text);
		if query.is_empty() {
			self.reset();
			return false;
		}
		if !self.ensure_session() {
			return false;
		}

		let Some(session) = self.session.as_mut() else {
			return false;
		};
		let Some(id) = session.issue_search(query.into_terms()) else {
			self.worker_lost();
			return false;
		};
		debug!(id, text = text.trim(), "issued search");
		self.search_text = text.trim().to_string();
		self.results = Vec::new().into();
		self.set_phase(SearchPhase::Searching, true);
		true
	}

	/// Drop the query and restore the listing.
	pub fn reset(&mut self) {
		self.debouncer.cancel();
		if let Some(session) = self.session.as_mut() {
			session.cancel();
		}
		self.text.clear();
		let text_changed = !self.search_text.is_empty();
		self.search_text.clear();
		self.results = self.listing.clone();
		self.set_phase(SearchPhase::Ready, text_changed);
	}

	/// Try to load the index again after a failure.
	pub fn retry(&mut self) -> bool {
		self.ensure_session()
	}

	/// Apply whatever the worker has produced. Returns whether results changed.
	pub fn poll(&mut self) -> bool {
		let Some(session) = self.session.as_mut() else {
			return false;
		};

		let mut changed = false;
		let mut completed = false;
		let mut disconnected = false;
		loop {
			match session.try_recv() {
				Ok(result) => {
					if !session.matches_latest(result.id) {
						continue;
					}
					session.record_result_completion(result.complete);
					self.results = result.hits;
					changed = true;
					if result.complete {
						completed = true;
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					disconnected = true;
					break;
				}
			}
		}

		if disconnected {
			self.worker_lost();
			return changed;
		}
		if completed && self.phase == SearchPhase::Searching {
			self.set_phase(SearchPhase::Done, false);
		}
		changed
	}

	/// Poll until the current search finishes or `timeout` passes.
	///
	/// Returns `false` on timeout.
	pub fn settle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		loop {
			self.poll();
			if self.phase != SearchPhase::Searching {
				return true;
			}
			if Instant::now() >= deadline {
				return false;
			}
			thread::sleep(Duration::from_millis(1));
		}
	}

	/// Whether a query has been issued and its final results are outstanding.
	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.session
			.as_ref()
			.is_some_and(SearchSession::is_in_flight)
	}

	fn ensure_session(&mut self) -> bool {
		if self.session.is_some() {
			return true;
		}

		match self.loader.load() {
			Ok(store) => {
				if self.listing.is_empty() {
					self.listing = store
						.iter()
						.map(|doc| Arc::new(SearchHit::listing(doc)))
						.collect();
					if self.phase == SearchPhase::Ready {
						self.results = self.listing.clone();
					}
				}
				let engine = SearchEngine::with_options(
					store,
					self.config.fields.iter().cloned(),
					self.config.options.clone(),
				);
				self.session = Some(SearchSession::start(engine, self.config.throttle));
				self.availability = Availability::Ready;
				true
			}
			Err(err) => {
				warn!(error = %err, "search index unavailable");
				self.events.push(ControllerEvent::Unavailable(err.to_string()));
				self.availability = Availability::Unavailable(err.into());
				false
			}
		}
	}

	/// Drop a session whose worker has exited so the next trigger starts a new one.
	fn worker_lost(&mut self) {
		warn!("search worker disconnected");
		self.session = None;
		let err = UnavailableError::WorkerStopped;
		self.events.push(ControllerEvent::Unavailable(err.to_string()));
		self.availability = Availability::Unavailable(err);
		if self.phase == SearchPhase::Searching {
			self.results = self.listing.clone();
			self.set_phase(SearchPhase::Ready, false);
		}
	}

	fn set_phase(&mut self, phase: SearchPhase, text_changed: bool) {
		if self.phase != phase || text_changed {
			self.phase = phase;
			self.events.push(ControllerEvent::StatusChanged(self.status()));
		}
	}
}
