use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, StopWordPolicyArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `postfind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "postfind",
	version,
	long_version = long_version(),
	about = "Incremental full-text search over a blog's post index",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "TERMS",
		help = "Query terms; omit to read queries from stdin"
	)]
	pub(crate) terms: Vec<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "POSTFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'i',
		long = "index",
		value_name = "PATH|URL",
		help = "Index file or URL to search (default: index.json in the data directory)"
	)]
	pub(crate) index: Option<String>,
	#[arg(
		short = 'f',
		long = "field",
		value_name = "FIELD",
		action = ArgAction::Append,
		help = "Field to search, in priority order; repeatable (default: title,content,description,keywords,tags)"
	)]
	pub(crate) fields: Option<Vec<String>>,
	#[arg(
		long = "stop-word",
		value_name = "WORD",
		value_delimiter = ',',
		help = "Replace the stop word list (default: built-in English list)"
	)]
	pub(crate) stop_words: Option<Vec<String>>,
	#[arg(
		long = "stop-word-policy",
		value_enum,
		help = "What a stop word in the query does to a field (default: reject-field)"
	)]
	pub(crate) stop_word_policy: Option<StopWordPolicyArg>,
	#[arg(
		long = "throttle-ms",
		value_name = "MS",
		help = "Minimum spacing between partial result updates (default: 100)"
	)]
	pub(crate) throttle_ms: Option<u64>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before typed input is searched (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Timeout for fetching an index over HTTP (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long = "interactive",
		help = "Read queries from stdin even when terms are given (default: disabled)"
	)]
	pub(crate) interactive: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		help = "Log debug output to stderr unless POSTFIND_LOG is set (default: disabled)"
	)]
	pub(crate) verbose: bool,
}
