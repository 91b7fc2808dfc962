use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use postfind::documents::{IndexLoader, SourceLoader};
use postfind::search::{SearchEngine, SearchHit, SearchUpdate, Snapshot};
use postfind::ui::{ControllerEvent, SearchController, SearchPhase};
use tracing::debug;

use crate::cli::{OutputFormat, print_json, print_plain};
use crate::settings::ResolvedConfig;

/// Longest an interactive query may run before the prompt comes back.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Command typed at the interactive prompt to leave.
const QUIT: &str = ":q";

/// Runs searches described by the resolved configuration.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	format: OutputFormat,
}

impl SearchWorkflow {
	pub(crate) fn new(config: ResolvedConfig, format: OutputFormat) -> Self {
		Self { config, format }
	}

	/// Search once for `terms` and print the final results.
	pub(crate) fn run_once(&self, terms: &[String]) -> Result<()> {
		let store = self
			.loader()?
			.load()
			.with_context(|| format!("failed to load index from {}", self.config.source))?;
		let engine = SearchEngine::with_options(
			store,
			self.config.fields.iter().cloned(),
			self.config.options.clone(),
		);

		let mut hits: Option<Snapshot> = None;
		for update in engine.search(terms) {
			match update {
				SearchUpdate::Partial(partial) => debug!(found = partial.len(), "partial results"),
				SearchUpdate::Complete(complete) => hits = Some(complete),
			}
		}
		let Some(hits) = hits else {
			bail!("search ended without a final result");
		};

		self.print(&terms.join(" "), &hits)
	}

	/// Read queries from `input` line by line, driving a controller.
	///
	/// A blank line restores the listing and `:q` quits.
	pub(crate) fn run_interactive<R: BufRead>(&self, input: R) -> Result<()> {
		let mut controller =
			SearchController::new(self.loader()?, self.config.controller_config());
		controller.open();

		prompt()?;
		for line in input.lines() {
			let line = line.context("failed to read query from stdin")?;
			if line.trim() == QUIT {
				break;
			}

			controller.input(line.as_str(), Instant::now());
			if controller.submit() && !controller.settle(SETTLE_TIMEOUT) {
				eprintln!("search timed out");
			}

			for event in controller.take_events() {
				if let ControllerEvent::Unavailable(reason) = event {
					eprintln!("search unavailable: {reason}");
				}
			}

			if controller.phase() != SearchPhase::Ready || line.trim().is_empty() {
				let status = controller.status();
				self.print(&status.search_text, controller.results())?;
			}
			prompt()?;
		}

		controller.close();
		Ok(())
	}

	fn loader(&self) -> Result<SourceLoader> {
		self.config
			.loader()
			.with_context(|| format!("failed to prepare index source {}", self.config.source))
	}

	fn print(&self, query: &str, hits: &[Arc<SearchHit>]) -> Result<()> {
		match self.format {
			OutputFormat::Plain => print_plain(hits),
			OutputFormat::Json => print_json(query, hits),
		}
	}
}

fn prompt() -> Result<()> {
	let mut stderr = io::stderr();
	write!(stderr, "> ")?;
	stderr.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::io::{Cursor, Write};

	use postfind::documents::IndexSource;
	use postfind::search::MatchOptions;
	use tempfile::NamedTempFile;

	use super::*;

	fn index_file() -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		write!(
			file,
			r#"[{{"id":"a","title":"T","content":"hello world"}},{{"id":"b","title":"T","content":"hello there"}}]"#
		)
		.unwrap();
		file
	}

	fn workflow(source: IndexSource) -> SearchWorkflow {
		let config = ResolvedConfig {
			source,
			fields: vec!["content".into()],
			timeout: Duration::from_secs(1),
			options: MatchOptions::default(),
			throttle: Duration::ZERO,
			debounce: Duration::ZERO,
		};
		SearchWorkflow::new(config, OutputFormat::Json)
	}

	#[test]
	fn one_shot_search_runs_against_the_index() {
		let file = index_file();
		let workflow = workflow(IndexSource::Path(file.path().to_path_buf()));
		workflow
			.run_once(&["hello".to_string(), "world".to_string()])
			.unwrap();
	}

	#[test]
	fn one_shot_search_reports_a_missing_index() {
		let workflow = workflow(IndexSource::parse("/definitely/not/here.json"));
		let err = workflow.run_once(&["hello".to_string()]).unwrap_err();
		assert!(format!("{err:#}").contains("failed to load index"));
	}

	#[test]
	fn interactive_session_stops_at_quit() {
		let file = index_file();
		let workflow = workflow(IndexSource::Path(file.path().to_path_buf()));
		let input = Cursor::new("hello\n\n:q\nworld\n");
		workflow.run_interactive(input).unwrap();
	}

	#[test]
	fn interactive_session_survives_an_unavailable_index() {
		let workflow = workflow(IndexSource::parse("/definitely/not/here.json"));
		let input = Cursor::new("hello\nhello\n");
		workflow.run_interactive(input).unwrap();
	}
}
