use std::path::PathBuf;

use thiserror::Error;

/// Reasons the document index could not be turned into a [`DocumentStore`](super::DocumentStore).
#[derive(Debug, Error)]
pub enum IndexError {
	/// The index file could not be read.
	#[error("failed to read index {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The index body is not a JSON array of documents.
	#[error("index is not a valid document list: {0}")]
	Parse(#[from] serde_json::Error),

	/// The HTTP request for the index failed before a response arrived.
	#[error("failed to fetch index from {url}: {source}")]
	Http {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	/// The server answered with a non-success status.
	#[error("index request to {url} returned status {status}")]
	Status { url: String, status: u16 },

	/// Two records share the same identifier.
	#[error("document id '{id}' appears more than once in the index")]
	DuplicateId { id: String },
}
