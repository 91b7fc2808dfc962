use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) fields: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) throttle: Option<SettingSource>,
	pub(crate) debounce: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_fields(&self) -> SettingSource {
		self.fields
			.clone()
			.unwrap_or(SettingSource::ConfigKey("index.fields"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("index.timeout_ms"))
	}

	pub(crate) fn source_for_throttle(&self) -> SettingSource {
		self.throttle
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.throttle_ms"))
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}
}
