use postfind::search::StopWordPolicy;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[search]`: matching knobs and result pacing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) stop_words: Option<Vec<String>>,
	pub(super) stop_word_policy: Option<StopWordPolicy>,
	pub(super) throttle_ms: Option<u64>,
	pub(super) debounce_ms: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(words) = &cli.stop_words {
			self.stop_words = Some(words.clone());
		}
		if let Some(policy) = cli.stop_word_policy {
			self.stop_word_policy = Some(policy.into());
		}
		if let Some(value) = cli.throttle_ms {
			self.throttle_ms = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
	}
}
