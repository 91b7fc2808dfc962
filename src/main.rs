mod cli;
mod settings;
mod workflow;

use std::io;

use anyhow::Result;
use cli::parse_cli;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	postfind::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::new(resolved, cli.output);
	if cli.interactive || cli.terms.is_empty() {
		workflow.run_interactive(io::stdin().lock())
	} else {
		workflow.run_once(&cli.terms)
	}
}
