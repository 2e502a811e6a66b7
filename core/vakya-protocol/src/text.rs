use alloc::string::String;
use alloc::vec::Vec;

/// Marks stripped (once) from the end of a word before lookup.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Lowercases `surface` and strips at most one trailing punctuation mark.
///
/// This is the only lookup-key normalization in the system; "Scool." and
/// "scool" share a key, "scool!!" does not.
pub fn normalize_word(surface: &str) -> String {
    let mut word = surface.to_lowercase();
    if word.ends_with(TRAILING_PUNCTUATION) {
        word.pop();
    }
    word
}

/// Too short to be meaningfully misspelled ("a", "I").
pub fn is_trivially_short(normalized: &str) -> bool {
    normalized.chars().count() <= 1
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_mark() {
        assert_eq!(normalize_word("School."), "school");
        assert_eq!(normalize_word("scool!!"), "scool!");
        assert_eq!(normalize_word("word"), "word");
        assert_eq!(normalize_word("I"), "i");
    }

    #[test]
    fn short_words_count_chars_not_bytes() {
        assert!(is_trivially_short("a"));
        assert!(is_trivially_short(""));
        assert!(is_trivially_short("é"));
        assert!(!is_trivially_short("an"));
    }

    #[test]
    fn label_whitespace_is_collapsed() {
        assert_eq!(
            collapse_whitespace("3rd Person Singular (he/she/it)  (V5)"),
            "3rd Person Singular (he/she/it) (V5)"
        );
        assert_eq!(collapse_whitespace("  Past \t Tense "), "Past Tense");
    }
}
