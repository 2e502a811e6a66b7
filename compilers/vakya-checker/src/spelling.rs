use vakya_lexicon::WordIndex;
use vakya_protocol::{is_trivially_short, normalize_word};

/// Flags tokens that are in neither the dictionary nor the verb table.
#[derive(Debug, Clone, Copy)]
pub struct SpellChecker<'a> {
    words: &'a WordIndex,
}

impl<'a> SpellChecker<'a> {
    pub fn new(words: &'a WordIndex) -> Self {
        Self { words }
    }

    /// Unknown tokens as written, in sentence order, one entry per occurrence.
    pub fn check<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| token.as_ref())
            .filter(|surface| {
                let key = normalize_word(surface);
                !is_trivially_short(&key) && !self.words.exists(&key)
            })
            .map(str::to_string)
            .collect()
    }
}
