use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use postfind::app_dirs;
use postfind::documents::{DEFAULT_FETCH_TIMEOUT, IndexSource};
use postfind::search::{DEFAULT_FIELDS, DEFAULT_THROTTLE, MatchOptions};
use postfind::ui::DEFAULT_DEBOUNCE;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::sanitize_fields;

mod index;
mod search;

use index::IndexSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	index: IndexSection,
	search: SearchSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.index.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			fields: detect_source(
				cli.fields.is_some(),
				self.index.fields.is_some(),
				"POSTFIND__INDEX__FIELDS",
				"--field",
				"index.fields",
			),
			timeout: detect_source(
				cli.timeout_ms.is_some(),
				self.index.timeout_ms.is_some(),
				"POSTFIND__INDEX__TIMEOUT_MS",
				"--timeout-ms",
				"index.timeout_ms",
			),
			throttle: detect_source(
				cli.throttle_ms.is_some(),
				self.search.throttle_ms.is_some(),
				"POSTFIND__SEARCH__THROTTLE_MS",
				"--throttle-ms",
				"search.throttle_ms",
			),
			debounce: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"POSTFIND__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
		};

		let source = match self.index.source {
			Some(value) => IndexSource::parse(&value),
			None => IndexSource::Path(app_dirs::default_index_path()?),
		};
		let fields = match self.index.fields {
			Some(fields) => sanitize_fields(fields),
			None => DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect(),
		};

		let mut options = MatchOptions::default();
		if let Some(words) = self.search.stop_words {
			options = options.with_stop_words(words);
		}
		if let Some(policy) = self.search.stop_word_policy {
			options = options.with_policy(policy);
		}

		let config = ResolvedConfig {
			source,
			fields,
			timeout: self
				.index
				.timeout_ms
				.map_or(DEFAULT_FETCH_TIMEOUT, Duration::from_millis),
			options,
			throttle: self
				.search
				.throttle_ms
				.map_or(DEFAULT_THROTTLE, Duration::from_millis),
			debounce: self
				.search
				.debounce_ms
				.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
