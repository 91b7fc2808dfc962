//! Documents supplied by the site build and the loaders that fetch them.

mod document;
mod error;
mod loader;
mod store;

pub use document::{Document, TITLE_FIELD};
pub use error::IndexError;
pub use loader::{
	DEFAULT_FETCH_TIMEOUT, FileIndex, HttpIndex, IndexLoader, IndexSource, SourceLoader,
};
pub use store::DocumentStore;
