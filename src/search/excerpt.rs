/// Characters kept before a match.
pub(crate) const EXCERPT_LEAD: usize = 10;
/// Characters kept from the match onwards.
pub(crate) const EXCERPT_TAIL: usize = 40;

/// Cut the preview window around the character offset `index`.
///
/// Offsets are computed against `lowered`; the original text is used when
/// lower-casing kept the character count, so previews keep their casing.
pub(crate) fn excerpt(original: &str, lowered: &str, index: usize) -> String {
	let source = if original.chars().count() == lowered.chars().count() {
		original
	} else {
		lowered
	};

	let start = index.saturating_sub(EXCERPT_LEAD);
	let end = index + EXCERPT_TAIL;
	source
		.chars()
		.skip(start)
		.take(end - start)
		.map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch })
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn window_spans_ten_before_and_forty_after() {
		let text: String = ('a'..='z').cycle().take(100).collect();
		let preview = excerpt(&text, &text, 50);
		assert_eq!(preview.chars().count(), EXCERPT_LEAD + EXCERPT_TAIL);
		assert_eq!(preview, text.chars().skip(40).take(50).collect::<String>());
	}

	#[test]
	fn window_is_clamped_at_both_ends() {
		let preview = excerpt("short text", "short text", 2);
		assert_eq!(preview, "short text");
	}

	#[test]
	fn newlines_are_flattened() {
		let preview = excerpt("line one\nline two\r\n", "line one\nline two\r\n", 0);
		assert_eq!(preview, "line one line two  ");
	}

	#[test]
	fn original_casing_is_preserved() {
		let preview = excerpt("Hello World", "hello world", 6);
		assert_eq!(preview, "Hello World");
	}

	#[test]
	fn multibyte_text_is_windowed_by_character() {
		let text = "搜索引擎很有趣";
		assert_eq!(excerpt(text, text, 2), text);
	}
}
