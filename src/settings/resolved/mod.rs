use std::time::Duration;

use postfind::documents::{IndexError, IndexSource, SourceLoader};
use postfind::search::MatchOptions;
use postfind::ui::ControllerConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub source: IndexSource,
	pub fields: Vec<String>,
	pub timeout: Duration,
	pub options: MatchOptions,
	pub throttle: Duration,
	pub debounce: Duration,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Loader for the configured index source.
	pub fn loader(&self) -> Result<SourceLoader, IndexError> {
		self.source.loader(self.timeout)
	}

	pub fn controller_config(&self) -> ControllerConfig {
		ControllerConfig {
			fields: self.fields.clone(),
			options: self.options.clone(),
			debounce: self.debounce,
			throttle: self.throttle,
			init_on_focus: false,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
