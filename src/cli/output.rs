use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use postfind::search::SearchHit;
use serde_json::json;

/// Write one line per hit, followed by an indented line per excerpt.
pub(crate) fn write_plain<W: Write>(out: &mut W, hits: &[Arc<SearchHit>]) -> io::Result<()> {
	if hits.is_empty() {
		writeln!(out, "No results")?;
		return Ok(());
	}

	for hit in hits {
		writeln!(out, "{}\t{}", hit.reference, hit.title)?;
		for term in &hit.matches {
			if let Some(excerpt) = &term.excerpt {
				writeln!(out, "  {}: {}", term.word, excerpt)?;
			}
		}
	}
	Ok(())
}

/// Format the hits for a query as a JSON document.
pub(crate) fn format_hits_json(query: &str, hits: &[Arc<SearchHit>]) -> Result<String> {
	let payload = json!({
		"query": query,
		"count": hits.len(),
		"results": hits,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_plain(hits: &[Arc<SearchHit>]) -> Result<()> {
	let stdout = io::stdout();
	write_plain(&mut stdout.lock(), hits)?;
	Ok(())
}

pub(crate) fn print_json(query: &str, hits: &[Arc<SearchHit>]) -> Result<()> {
	println!("{}", format_hits_json(query, hits)?);
	Ok(())
}
