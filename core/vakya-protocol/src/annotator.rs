use alloc::string::String;
use alloc::vec::Vec;

/// Result of a subject or verb extraction: a found flag plus ordered surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub found: bool,
    pub items: Vec<String>,
}

impl Extraction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(items: Vec<String>) -> Self {
        Self {
            found: !items.is_empty(),
            items,
        }
    }

    /// First item, but only when the extraction reports it found something.
    pub fn first(&self) -> Option<&str> {
        if !self.found {
            return None;
        }
        self.items.first().map(String::as_str)
    }
}

/// Linguistic capability the checker consumes.
///
/// Implementations split a sentence into terms and extract its subject and
/// finite verb phrases. `infinitives` must be aligned with `verbs`: the n-th
/// base form belongs to the n-th verb. Callers only read the first element
/// of each sequence.
pub trait LinguisticAnnotator {
    fn terms(&self, sentence: &str) -> Vec<String>;

    fn subjects(&self, sentence: &str) -> Extraction;

    fn verbs(&self, sentence: &str) -> Extraction;

    fn infinitives(&self, sentence: &str) -> Vec<String>;
}

impl<T: LinguisticAnnotator + ?Sized> LinguisticAnnotator for &T {
    fn terms(&self, sentence: &str) -> Vec<String> {
        (**self).terms(sentence)
    }

    fn subjects(&self, sentence: &str) -> Extraction {
        (**self).subjects(sentence)
    }

    fn verbs(&self, sentence: &str) -> Extraction {
        (**self).verbs(sentence)
    }

    fn infinitives(&self, sentence: &str) -> Vec<String> {
        (**self).infinitives(sentence)
    }
}
