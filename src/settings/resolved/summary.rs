use std::io::{self, Write};

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let stdout = io::stdout();
	let _ = write_summary(&mut stdout.lock(), config);
}

fn write_summary<W: Write>(out: &mut W, config: &ResolvedConfig) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	writeln!(out, "  Index: {}", config.source)?;
	writeln!(out, "  Fields: {}", config.fields.join(", "))?;
	writeln!(out, "  Fetch timeout: {} ms", config.timeout.as_millis())?;

	let mut stop_words: Vec<_> = config.options.stop_words.iter().map(String::as_str).collect();
	stop_words.sort_unstable();
	if stop_words.is_empty() {
		writeln!(out, "  Stop words: (none)")?;
	} else {
		writeln!(out, "  Stop words: {}", stop_words.join(", "))?;
	}
	writeln!(
		out,
		"  Stop word policy: {}",
		config.options.stop_word_policy.as_str()
	)?;
	writeln!(out, "  Throttle: {} ms", config.throttle.as_millis())?;
	writeln!(out, "  Debounce: {} ms", config.debounce.as_millis())?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use postfind::documents::IndexSource;
	use postfind::search::MatchOptions;

	use super::*;

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			source: IndexSource::parse("https://blog.example/search.json"),
			fields: vec!["title".into(), "content".into()],
			timeout: Duration::from_secs(3),
			options: MatchOptions::default().with_stop_words(["of", "a"]),
			throttle: Duration::from_millis(100),
			debounce: Duration::from_millis(300),
		};

		let mut out = Vec::new();
		write_summary(&mut out, &config).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert!(text.contains("Index: https://blog.example/search.json"));
		assert!(text.contains("Fields: title, content"));
		assert!(text.contains("Stop words: a, of"));
		assert!(text.contains("Stop word policy: reject-field"));
		assert!(text.contains("Debounce: 300 ms"));
	}
}
