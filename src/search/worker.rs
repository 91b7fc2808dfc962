use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tracing::debug;

use super::commands::{SearchCommand, SearchResult};
use super::engine::{RunOutcome, SearchEngine};
use super::epoch::Epoch;
use super::notifier::{SearchStream, ThrottledNotifier};

/// Launches the background search worker thread and returns communication channels.
///
/// Queries must carry an id obtained from the returned [`Epoch`]; advancing it
/// stops whatever run the worker is in the middle of.
pub fn spawn(
	engine: SearchEngine,
	throttle: Duration,
) -> (Sender<SearchCommand>, Receiver<SearchResult>, Epoch) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let epoch = engine.epoch().clone();

	thread::spawn(move || worker_loop(&engine, throttle, command_rx, result_tx));

	(command_tx, result_rx, epoch)
}

fn worker_loop(
	engine: &SearchEngine,
	throttle: Duration,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(engine, throttle, &result_tx, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	engine: &SearchEngine,
	throttle: Duration,
	result_tx: &Sender<SearchResult>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, terms } => {
			let stream = SearchStream::new(result_tx, id);
			let mut notifier = ThrottledNotifier::new(stream, throttle);
			let outcome = engine.run_query(id, terms.as_slice()).drive(&mut notifier);
			outcome != RunOutcome::Disconnected
		}
		SearchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::time::Instant;

	use super::*;
	use crate::documents::{Document, DocumentStore};

	fn engine() -> SearchEngine {
		let store = DocumentStore::new(vec![
			Document::new("a", "T", "hello world"),
			Document::new("b", "T", "hello there"),
		])
		.unwrap();
		SearchEngine::new(store, ["content"])
	}

	fn recv_final(rx: &Receiver<SearchResult>) -> SearchResult {
		let deadline = Instant::now() + Duration::from_secs(5);
		loop {
			let remaining = deadline.saturating_duration_since(Instant::now());
			let result = rx.recv_timeout(remaining).expect("worker responds");
			if result.complete {
				return result;
			}
		}
	}

	#[test]
	fn query_results_are_streamed_back_with_their_id() {
		let (tx, rx, epoch) = spawn(engine(), Duration::ZERO);
		let id = epoch.advance();
		tx.send(SearchCommand::Query {
			id,
			terms: vec!["hello".into()],
		})
		.unwrap();

		let result = recv_final(&rx);
		assert_eq!(result.id, id);
		assert_eq!(result.hits.len(), 2);
		tx.send(SearchCommand::Shutdown).unwrap();
	}

	#[test]
	fn stale_queries_produce_nothing() {
		let (tx, rx, epoch) = spawn(engine(), Duration::ZERO);
		let stale = epoch.advance();
		let fresh = epoch.advance();
		tx.send(SearchCommand::Query {
			id: stale,
			terms: vec!["hello".into()],
		})
		.unwrap();
		tx.send(SearchCommand::Query {
			id: fresh,
			terms: vec!["world".into()],
		})
		.unwrap();

		let result = recv_final(&rx);
		assert_eq!(result.id, fresh);
		assert_eq!(result.hits.len(), 1);
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let (tx, rx, _epoch) = spawn(engine(), Duration::ZERO);
		tx.send(SearchCommand::Shutdown).unwrap();
		assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
	}
}
