use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use super::{DocumentStore, IndexError};

/// Default timeout applied to HTTP index requests.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can produce the document store on demand.
///
/// The controller calls this lazily, on the first search, and again after a
/// failure when the user retries.
pub trait IndexLoader {
	fn load(&self) -> Result<DocumentStore, IndexError>;
}

impl<F> IndexLoader for F
where
	F: Fn() -> Result<DocumentStore, IndexError>,
{
	fn load(&self) -> Result<DocumentStore, IndexError> {
		self()
	}
}

/// Index generated at build time and stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileIndex {
	path: PathBuf,
}

impl FileIndex {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl IndexLoader for FileIndex {
	fn load(&self) -> Result<DocumentStore, IndexError> {
		let file = File::open(&self.path).map_err(|source| IndexError::Io {
			path: self.path.clone(),
			source,
		})?;
		let store = DocumentStore::from_reader(BufReader::new(file))?;
		info!(path = %self.path.display(), documents = store.len(), "loaded search index");
		Ok(store)
	}
}

/// Index served over HTTP from the site's static path.
#[derive(Clone)]
pub struct HttpIndex {
	url: String,
	http: Client,
}

impl fmt::Debug for HttpIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpIndex")
			.field("url", &self.url)
			.finish_non_exhaustive()
	}
}

impl HttpIndex {
	pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, IndexError> {
		let url = url.into();
		let http = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|source| IndexError::Http {
				url: url.clone(),
				source,
			})?;
		Ok(Self { url, http })
	}
}

impl IndexLoader for HttpIndex {
	fn load(&self) -> Result<DocumentStore, IndexError> {
		let http_err = |source| IndexError::Http {
			url: self.url.clone(),
			source,
		};
		let response = self.http.get(&self.url).send().map_err(http_err)?;
		let status = response.status();
		if !status.is_success() {
			return Err(IndexError::Status {
				url: self.url.clone(),
				status: status.as_u16(),
			});
		}
		let body = response.text().map_err(http_err)?;
		let store = DocumentStore::from_json(&body)?;
		info!(url = %self.url, documents = store.len(), "fetched search index");
		Ok(store)
	}
}

/// Where the index lives, as written in configuration or on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
	Path(PathBuf),
	Url(String),
}

impl IndexSource {
	/// Interpret `http://` and `https://` values as URLs and anything else as a path.
	pub fn parse(value: &str) -> Self {
		let trimmed = value.trim();
		let lower = trimmed.to_ascii_lowercase();
		if lower.starts_with("http://") || lower.starts_with("https://") {
			Self::Url(trimmed.to_string())
		} else {
			Self::Path(PathBuf::from(trimmed))
		}
	}

	/// Build the loader for this source.
	pub fn loader(&self, timeout: Duration) -> Result<SourceLoader, IndexError> {
		Ok(match self {
			Self::Path(path) => SourceLoader::File(FileIndex::new(path.clone())),
			Self::Url(url) => SourceLoader::Http(HttpIndex::new(url.clone(), timeout)?),
		})
	}
}

impl fmt::Display for IndexSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Path(path) => write!(f, "{}", path.display()),
			Self::Url(url) => f.write_str(url),
		}
	}
}

/// Loader selected from an [`IndexSource`].
#[derive(Debug, Clone)]
pub enum SourceLoader {
	File(FileIndex),
	Http(HttpIndex),
}

impl IndexLoader for SourceLoader {
	fn load(&self) -> Result<DocumentStore, IndexError> {
		match self {
			Self::File(loader) => loader.load(),
			Self::Http(loader) => loader.load(),
		}
	}
}
