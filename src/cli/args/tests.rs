use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::StopWordPolicyArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["postfind"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.terms.is_empty());
	assert!(parsed.fields.is_none());
}

#[test]
fn repeated_fields_keep_their_order() {
	let parsed = CliArgs::parse_from([
		"postfind",
		"-f",
		"content",
		"--field",
		"title",
		"--stop-word-policy",
		"skip-term",
		"hello",
		"world",
	]);
	assert_eq!(
		parsed.fields,
		Some(vec!["content".to_string(), "title".to_string()])
	);
	assert_eq!(parsed.stop_word_policy, Some(StopWordPolicyArg::SkipTerm));
	assert_eq!(parsed.terms, vec!["hello", "world"]);
}

#[test]
fn long_version_lists_config_and_index_locations() {
	let banner = super::styles::long_version();
	assert!(banner.starts_with(concat!("postfind ", env!("CARGO_PKG_VERSION"))));
	assert!(banner.contains("config directory:"));
	assert!(banner.contains("default index:"));
}
