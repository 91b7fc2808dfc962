use clap::Parser;
use postfind::search::StopWordPolicy;

use super::{RawConfig, detect_source};
use crate::cli::CliArgs;
use crate::settings::resolved::SettingSource;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"postfind",
		"--index",
		"public/search.json",
		"--field",
		"content",
		"--stop-word",
		"foo,bar",
		"--stop-word-policy",
		"skip-term",
		"--throttle-ms",
		"5",
		"--debounce-ms",
		"50",
		"--timeout-ms",
		"250",
	]);

	let mut config = RawConfig::default();
	config.index.source = Some("elsewhere.json".into());
	config.search.throttle_ms = Some(500);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.index.source.as_deref(), Some("public/search.json"));
	assert_eq!(config.index.fields, Some(vec!["content".to_string()]));
	assert_eq!(config.index.timeout_ms, Some(250));
	assert_eq!(
		config.search.stop_words,
		Some(vec!["foo".to_string(), "bar".to_string()])
	);
	assert_eq!(config.search.stop_word_policy, Some(StopWordPolicy::SkipTerm));
	assert_eq!(config.search.throttle_ms, Some(5));
	assert_eq!(config.search.debounce_ms, Some(50));
}

#[test]
fn unset_values_keep_config_file_contents() {
	let cli = CliArgs::parse_from(["postfind"]);
	let mut config = RawConfig::default();
	config.search.debounce_ms = Some(120);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.search.debounce_ms, Some(120));
	assert_eq!(config.index.source, None);
}

#[test]
fn cli_flag_is_reported_as_the_origin() {
	let env_var = "POSTFIND__SEARCH__THROTTLE_MS";
	assert!(matches!(
		detect_source(true, true, env_var, "--throttle-ms", "search.throttle_ms"),
		Some(SettingSource::CliFlag("--throttle-ms"))
	));
	assert!(detect_source(false, false, env_var, "--throttle-ms", "search.throttle_ms").is_none());
}

#[test]
fn defaults_fill_unset_sections() {
	let cli = CliArgs::parse_from(["postfind", "--index", "index.json"]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);

	let config = raw.resolve(&cli).unwrap();
	assert_eq!(
		config.fields,
		vec!["title", "content", "description", "keywords", "tags"]
	);
	assert_eq!(config.options, postfind::search::MatchOptions::default());
	assert_eq!(config.throttle, postfind::search::DEFAULT_THROTTLE);
}
