//! Configuration loading and resolution for the `postfind` binary.
//!
//! `load` layers config files, environment variables and CLI flags and
//! returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
