use std::collections::HashSet;

/// Trim field names and drop blanks and repeats, keeping the first occurrence.
pub(super) fn sanitize_fields(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let field = value.trim();
		if field.is_empty() {
			continue;
		}
		if seen.insert(field.to_string()) {
			cleaned.push(field.to_string());
		}
	}
	cleaned
}
