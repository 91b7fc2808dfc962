use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::excerpt::excerpt;
use super::hit::{SearchHit, TermMatch};
use super::{DEFAULT_STOP_WORDS, Query};
use crate::documents::{Document, TITLE_FIELD};

/// What happens when a query term is a stop word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopWordPolicy {
	/// The field being checked fails outright. This is the historical behavior
	/// of the site's search box and remains the default.
	#[default]
	RejectField,
	/// The term is ignored; the field still has to match another term.
	SkipTerm,
}

impl StopWordPolicy {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::RejectField => "reject-field",
			Self::SkipTerm => "skip-term",
		}
	}
}

/// Term-level matching knobs shared by every run of an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
	pub stop_words: HashSet<String>,
	pub stop_word_policy: StopWordPolicy,
}

impl Default for MatchOptions {
	fn default() -> Self {
		Self {
			stop_words: DEFAULT_STOP_WORDS.iter().map(|word| word.to_string()).collect(),
			stop_word_policy: StopWordPolicy::default(),
		}
	}
}

impl MatchOptions {
	/// Replace the stop word list. Words are lower-cased.
	#[must_use]
	pub fn with_stop_words<I, S>(mut self, words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.stop_words = words
			.into_iter()
			.map(|word| word.as_ref().trim().to_lowercase())
			.filter(|word| !word.is_empty())
			.collect();
		self
	}

	#[must_use]
	pub fn with_policy(mut self, policy: StopWordPolicy) -> Self {
		self.stop_word_policy = policy;
		self
	}
}

enum Pattern {
	/// ASCII-letter terms only match whole words.
	Word(Regex),
	/// Everything else falls back to containment; there is no tokenizer for
	/// scripts without spaces.
	Substring,
}

/// A query term lower-cased and compiled once per run.
pub(crate) struct PreparedTerm {
	word: String,
	pattern: Pattern,
	stop: bool,
}

impl PreparedTerm {
	fn new(term: &str, options: &MatchOptions) -> Self {
		let word = term.to_lowercase();
		let stop = options.stop_words.contains(&word);
		let pattern = if is_ascii_word(&word) {
			Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(&word)))
				.map(Pattern::Word)
				.unwrap_or(Pattern::Substring)
		} else {
			Pattern::Substring
		};
		Self {
			word,
			pattern,
			stop,
		}
	}

	/// Byte offset of the first occurrence in already lower-cased text.
	fn find(&self, haystack: &str) -> Option<usize> {
		match &self.pattern {
			Pattern::Word(regex) => regex.find(haystack).map(|found| found.start()),
			Pattern::Substring => haystack.find(self.word.as_str()),
		}
	}
}

fn is_ascii_word(word: &str) -> bool {
	!word.is_empty() && word.bytes().all(|byte| byte.is_ascii_alphabetic())
}

pub(crate) fn prepare_terms(query: &Query, options: &MatchOptions) -> Vec<PreparedTerm> {
	query
		.terms()
		.iter()
		.map(|term| PreparedTerm::new(term, options))
		.collect()
}

/// Try each field in order; the first one containing every term wins.
pub(crate) fn match_document(
	doc: &Document,
	fields: &[String],
	terms: &[PreparedTerm],
	policy: StopWordPolicy,
) -> Option<SearchHit> {
	for field in fields {
		let Some(text) = doc.field(field) else {
			continue;
		};
		let lowered = text.to_lowercase();
		if let Some(matches) = match_field(&text, &lowered, field, terms, policy) {
			return Some(SearchHit {
				reference: doc.id.clone(),
				title: doc.title.clone(),
				field: Some(field.clone()),
				matches,
			});
		}
	}
	None
}

fn match_field(
	original: &str,
	lowered: &str,
	field: &str,
	terms: &[PreparedTerm],
	policy: StopWordPolicy,
) -> Option<Vec<TermMatch>> {
	let mut matches = Vec::with_capacity(terms.len());
	for term in terms {
		if term.stop {
			match policy {
				StopWordPolicy::RejectField => return None,
				StopWordPolicy::SkipTerm => continue,
			}
		}

		let offset = term.find(lowered)?;
		let index = lowered[..offset].chars().count();
		let excerpt = (field != TITLE_FIELD).then(|| excerpt(original, lowered, index));
		matches.push(TermMatch {
			word: term.word.clone(),
			index,
			excerpt,
		});
	}

	(!matches.is_empty()).then_some(matches)
}
