use std::borrow::Borrow;
use std::sync::Arc;

use serde::Serialize;

use crate::documents::Document;

/// Immutable view of the results known at one point of a search.
///
/// Hits are shared between snapshots, so publishing a longer snapshot only
/// bumps reference counts.
pub type Snapshot = Arc<[Arc<SearchHit>]>;

/// One query term located inside the winning field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
	/// Lower-cased term text.
	pub word: String,
	/// Character offset of the term's first occurrence in the field.
	pub index: usize,
	/// Preview around the occurrence; absent for title matches.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub excerpt: Option<String>,
}

/// A document that satisfied every query term in one of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
	#[serde(rename = "ref")]
	pub reference: String,
	pub title: String,
	/// Field the matches were found in; `None` for plain listing entries.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub field: Option<String>,
	pub matches: Vec<TermMatch>,
}

impl SearchHit {
	/// Entry shown when no search is active.
	#[must_use]
	pub fn listing(doc: &Document) -> Self {
		Self {
			reference: doc.id.clone(),
			title: doc.title.clone(),
			field: None,
			matches: Vec::new(),
		}
	}
}

/// Order hits by descending match count.
///
/// The sort is stable, so equally ranked hits keep the order they were found in.
pub fn rank<H: Borrow<SearchHit>>(hits: &mut [H]) {
	hits.sort_by(|a, b| b.borrow().matches.len().cmp(&a.borrow().matches.len()));
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hit(reference: &str, count: usize) -> SearchHit {
		SearchHit {
			reference: reference.into(),
			title: reference.into(),
			field: Some("content".into()),
			matches: (0..count)
				.map(|index| TermMatch {
					word: format!("w{index}"),
					index,
					excerpt: None,
				})
				.collect(),
		}
	}

	#[test]
	fn more_matches_rank_first() {
		let mut hits = vec![hit("three", 3), hit("one", 1), hit("two", 2)];
		rank(&mut hits);
		let order: Vec<_> = hits.iter().map(|hit| hit.matches.len()).collect();
		assert_eq!(order, vec![3, 2, 1]);
	}

	#[test]
	fn ties_keep_discovery_order() {
		let mut hits = vec![hit("a", 1), hit("b", 2), hit("c", 1), hit("d", 2)];
		rank(&mut hits);
		let order: Vec<_> = hits.iter().map(|hit| hit.reference.as_str()).collect();
		assert_eq!(order, vec!["b", "d", "a", "c"]);
	}

	#[test]
	fn serializes_reference_as_ref_and_skips_missing_excerpts() {
		let value = serde_json::to_value(hit("a", 1)).unwrap();
		assert_eq!(value["ref"], "a");
		assert!(value["matches"][0].get("excerpt").is_none());
	}
}
