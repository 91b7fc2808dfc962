use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest throttle or debounce interval accepted.
const MAX_INTERVAL: Duration = Duration::from_secs(10);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.fields.is_empty() {
		return Err(ConfigError::invalid(
			"index.fields",
			"[]",
			sources.source_for_fields(),
			"at least one field is required",
		));
	}

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"index.timeout_ms",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.throttle > MAX_INTERVAL {
		return Err(ConfigError::invalid(
			"search.throttle_ms",
			config.throttle.as_millis().to_string(),
			sources.source_for_throttle(),
			"must be at most 10000",
		));
	}

	if config.debounce > MAX_INTERVAL {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			"must be at most 10000",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use postfind::documents::IndexSource;
	use postfind::search::MatchOptions;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			source: IndexSource::parse("index.json"),
			fields: vec!["title".into()],
			timeout: Duration::from_secs(10),
			options: MatchOptions::default(),
			throttle: Duration::from_millis(100),
			debounce: Duration::from_millis(300),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_empty_fields() {
		let config = ResolvedConfig {
			fields: Vec::new(),
			..config()
		};
		let sources = ConfigSources {
			fields: Some(SettingSource::CliFlag("--field")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "index.fields");
		assert!(err.to_string().contains("CLI flag `--field`"));
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Duration::ZERO,
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "index.timeout_ms");
		assert!(err.to_string().contains("value: 0"));
	}

	#[test]
	fn validation_rejects_long_throttle() {
		let config = ResolvedConfig {
			throttle: Duration::from_secs(11),
			..config()
		};
		let sources = ConfigSources {
			throttle: Some(SettingSource::Environment("POSTFIND__SEARCH__THROTTLE_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.throttle_ms");
		let message = err.to_string();
		assert!(message.contains("value: 11000"));
		assert!(message.contains("environment variable"));
	}
}
