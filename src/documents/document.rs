use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the field whose matches are reported without an excerpt.
pub const TITLE_FIELD: &str = "title";

/// One searchable post or memo as it appears in the generated index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
	pub id: String,
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub keywords: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	/// Any other keys carried by the index record.
	#[serde(flatten)]
	pub extra: BTreeMap<String, Value>,
}

impl Document {
	/// Create a document with only the required fields populated.
	#[must_use]
	pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			content: content.into(),
			description: None,
			keywords: None,
			tags: Vec::new(),
			date: None,
			extra: BTreeMap::new(),
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
		self.keywords = Some(keywords.into());
		self
	}

	#[must_use]
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	/// Return the plain text stored under `name`.
	///
	/// Tags are flattened into one space separated string. Extra keys are only
	/// searchable when they hold a JSON string; anything else reads as absent.
	pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
		match name {
			"id" => Some(Cow::Borrowed(self.id.as_str())),
			TITLE_FIELD => Some(Cow::Borrowed(self.title.as_str())),
			"content" => Some(Cow::Borrowed(self.content.as_str())),
			"description" => self.description.as_deref().map(Cow::Borrowed),
			"keywords" => self.keywords.as_deref().map(Cow::Borrowed),
			"date" => self.date.as_deref().map(Cow::Borrowed),
			"tags" => {
				if self.tags.is_empty() {
					None
				} else {
					Some(Cow::Owned(self.tags.join(" ")))
				}
			}
			other => match self.extra.get(other) {
				Some(Value::String(text)) => Some(Cow::Borrowed(text.as_str())),
				_ => None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tags_are_flattened_for_matching() {
		let doc = Document::new("a", "T", "body").with_tags(["rust", "search"]);
		assert_eq!(doc.field("tags").as_deref(), Some("rust search"));
	}

	#[test]
	fn missing_optional_fields_read_as_absent() {
		let doc = Document::new("a", "T", "body");
		assert!(doc.field("description").is_none());
		assert!(doc.field("tags").is_none());
		assert!(doc.field("nonexistent").is_none());
	}

	#[test]
	fn extra_string_keys_are_searchable_and_others_are_not() {
		let doc: Document = serde_json::from_str(
			r#"{"id":"m1","title":"memo","content":"x","mood":"calm","likes":3}"#,
		)
		.unwrap();
		assert_eq!(doc.field("mood").as_deref(), Some("calm"));
		assert!(doc.field("likes").is_none());
	}
}
