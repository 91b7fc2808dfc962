use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use crate::search::{Epoch, SearchCommand, SearchEngine, SearchResult, worker};

/// UI-side handle on the background search worker.
pub(crate) struct SearchSession {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	epoch: Epoch,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchSession {
	pub(crate) fn start(engine: SearchEngine, throttle: Duration) -> Self {
		let (tx, rx, epoch) = worker::spawn(engine, throttle);
		Self {
			tx,
			rx,
			epoch,
			current_query_id: None,
			in_flight: false,
		}
	}

	/// Send a new query to the worker. Returns `None` once the worker is gone.
	pub(crate) fn issue_search(&mut self, terms: Vec<String>) -> Option<u64> {
		let id = self.epoch.advance();
		self.current_query_id = Some(id);
		self.in_flight = true;
		if self.tx.send(SearchCommand::Query { id, terms }).is_err() {
			self.current_query_id = None;
			self.in_flight = false;
			return None;
		}
		Some(id)
	}

	/// Supersede whatever is running without starting anything new.
	pub(crate) fn cancel(&mut self) {
		self.epoch.advance();
		self.current_query_id = None;
		self.in_flight = false;
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_result_completion(&mut self, complete: bool) {
		if complete {
			self.in_flight = false;
		}
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

impl Drop for SearchSession {
	fn drop(&mut self) {
		self.epoch.advance();
		self.shutdown();
	}
}
