//! Text cleaning for FAQ content pulled from rich documents.
//!
//! Word-processor exports decorate questions with emoji and stray
//! whitespace. Cleaning strips pictographic codepoints and trims the result;
//! it never touches letters, digits, or punctuation.

/// Codepoint ranges removed by [`clean_text`].
///
/// Emoticons, pictographs, transport symbols, flags, miscellaneous symbols,
/// and dingbats.
const SYMBOL_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'),
    ('\u{1F300}', '\u{1F5FF}'),
    ('\u{1F680}', '\u{1F6FF}'),
    ('\u{1F1E0}', '\u{1F1FF}'),
    ('\u{2600}', '\u{26FF}'),
    ('\u{2700}', '\u{27BF}'),
];

/// Returns true for codepoints in the stripped symbol ranges.
fn is_symbol(c: char) -> bool {
    SYMBOL_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Removes emoji and pictographic symbols and trims surrounding whitespace.
pub fn clean_text(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| !is_symbol(c)).collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoji() {
        assert_eq!(clean_text("🎉 What are your hours?"), "What are your hours?");
        assert_eq!(clean_text("Is parking free? 🚗"), "Is parking free?");
    }

    #[test]
    fn strips_dingbats_and_misc_symbols() {
        assert_eq!(clean_text("✅ Done"), "Done");
        assert_eq!(clean_text("☀ Weather policy"), "Weather policy");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(clean_text("  spaced out  "), "spaced out");
    }

    #[test]
    fn leaves_plain_text_alone() {
        let text = "How do I reset my password?";
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn emoji_only_input_becomes_empty() {
        assert_eq!(clean_text("🎉🚀"), "");
    }
}
