use serde::Deserialize;

use crate::cli::CliArgs;

/// `[index]`: where documents come from and which fields are searched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IndexSection {
	pub(super) source: Option<String>,
	pub(super) fields: Option<Vec<String>>,
	pub(super) timeout_ms: Option<u64>,
}

impl IndexSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(source) = cli.index.clone() {
			self.source = Some(source);
		}
		if let Some(fields) = &cli.fields {
			self.fields = Some(fields.clone());
		}
		if let Some(value) = cli.timeout_ms {
			self.timeout_ms = Some(value);
		}
	}
}
