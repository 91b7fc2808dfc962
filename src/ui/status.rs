use serde::Serialize;

/// Where the search box is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
	/// Idle; the listing is shown.
	#[default]
	Ready,
	/// A query was issued and its final results have not arrived.
	Searching,
	/// Final results are shown.
	Done,
}

/// Status value handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatus {
	#[serde(rename = "isSearch")]
	pub phase: SearchPhase,
	#[serde(rename = "searchText")]
	pub search_text: String,
}
