//! Resolve the configuration and data directories for `postfind`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "postfind";

pub const CONFIG_DIR_ENV: &str = "POSTFIND_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "POSTFIND_DATA_DIR";

/// File name of the generated index inside the data directory.
pub const INDEX_FILE_NAME: &str = "index.json";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for postfind"))
}

/// An empty override counts as unset.
fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = non_empty(env::var_os(CONFIG_DIR_ENV)) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory the build step writes the search index into.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = non_empty(env::var_os(DATA_DIR_ENV)) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Index location used when none is configured.
pub fn default_index_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(INDEX_FILE_NAME))
}
