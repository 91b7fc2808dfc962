/// Ordered list of non-blank search terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	terms: Vec<String>,
}

impl Query {
	/// Split raw user input on whitespace.
	#[must_use]
	pub fn parse(input: &str) -> Self {
		Self {
			terms: input.split_whitespace().map(str::to_string).collect(),
		}
	}

	/// Build a query from pre-split terms, trimming each and dropping blanks.
	pub fn from_terms<I, S>(terms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			terms: terms
				.into_iter()
				.map(|term| term.as_ref().trim().to_string())
				.filter(|term| !term.is_empty())
				.collect(),
		}
	}

	#[must_use]
	pub fn terms(&self) -> &[String] {
		&self.terms
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	#[must_use]
	pub fn into_terms(self) -> Vec<String> {
		self.terms
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn input_is_split_on_any_whitespace() {
		let query = Query::parse("  hello\tworld \n rust ");
		assert_eq!(query.terms(), ["hello", "world", "rust"]);
	}

	#[test]
	fn blank_terms_are_dropped() {
		let query = Query::from_terms(["", "  ", " foo "]);
		assert_eq!(query.terms(), ["foo"]);
		assert!(Query::parse("   ").is_empty());
	}
}
