use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use postfind::app_dirs;

fn describe(path: Result<PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Version banner listing where postfind looks for its config and index.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("postfind {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe(app_dirs::get_config_dir()));
	let _ = writeln!(details, "data directory:   {}", describe(app_dirs::get_data_dir()));
	let _ = writeln!(details, "default index:    {}", describe(app_dirs::default_index_path()));

	Box::leak(details.into_boxed_str())
}

/// Help colours: section headers in blue, flags in magenta, value names dimmed.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::White.on_default().effects(Effects::DIMMED))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
