use clap::ValueEnum;
use postfind::search::StopWordPolicy;

/// Stop word handling selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum StopWordPolicyArg {
	RejectField,
	SkipTerm,
}

impl From<StopWordPolicyArg> for StopWordPolicy {
	fn from(value: StopWordPolicyArg) -> Self {
		match value {
			StopWordPolicyArg::RejectField => StopWordPolicy::RejectField,
			StopWordPolicyArg::SkipTerm => StopWordPolicy::SkipTerm,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
