use std::collections::HashSet;
use std::io::Read;
use std::ops::Deref;
use std::sync::Arc;

use super::{Document, IndexError};

/// Read-only, cheaply clonable collection of indexed documents.
///
/// Store order is significant: it is the order documents are evaluated in and
/// the tie-break order for equally ranked results.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
	documents: Arc<[Document]>,
}

impl DocumentStore {
	/// Build a store, rejecting duplicate identifiers.
	pub fn new(documents: Vec<Document>) -> Result<Self, IndexError> {
		let mut seen = HashSet::with_capacity(documents.len());
		for doc in &documents {
			if !seen.insert(doc.id.as_str()) {
				return Err(IndexError::DuplicateId { id: doc.id.clone() });
			}
		}
		Ok(Self {
			documents: documents.into(),
		})
	}

	/// Parse a JSON array of documents.
	pub fn from_json(json: &str) -> Result<Self, IndexError> {
		let documents: Vec<Document> = serde_json::from_str(json)?;
		Self::new(documents)
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self, IndexError> {
		let documents: Vec<Document> = serde_json::from_reader(reader)?;
		Self::new(documents)
	}

	#[must_use]
	pub fn documents(&self) -> &[Document] {
		&self.documents
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&Document> {
		self.documents.iter().find(|doc| doc.id == id)
	}
}

impl Deref for DocumentStore {
	type Target = [Document];

	fn deref(&self) -> &Self::Target {
		&self.documents
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_index_records_with_optional_fields() {
		let store = DocumentStore::from_json(
			r#"[
				{"id":"a","title":"First","content":"hello","tags":["x","y"],"date":"2024-01-01"},
				{"id":"b","title":"Second","content":"there","description":"d"}
			]"#,
		)
		.unwrap();

		assert_eq!(store.len(), 2);
		assert_eq!(store[0].tags, vec!["x", "y"]);
		assert_eq!(store.get("b").and_then(|doc| doc.description.as_deref()), Some("d"));
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = DocumentStore::new(vec![
			Document::new("a", "T", "one"),
			Document::new("a", "T", "two"),
		])
		.unwrap_err();
		assert!(matches!(err, IndexError::DuplicateId { id } if id == "a"));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = DocumentStore::from_json(r#"{"id":"a"}"#).unwrap_err();
		assert!(matches!(err, IndexError::Parse(_)));
	}
}
