use std::collections::HashMap;

use vakya_protocol::{collapse_whitespace, VerbRecord, WordRecord};

/// Pass-through linguistic attributes of a dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    attributes: Vec<(String, String)>,
}

impl Descriptor {
    pub fn new(attributes: Vec<(String, String)>) -> Self {
        Self { attributes }
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, value)| value.as_str())
    }
}

/// Conjugation table of one base verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbEntry {
    forms: Vec<(String, String)>,
}

impl VerbEntry {
    /// Labels are stored whitespace-collapsed so "(he/she/it)  (V5)" and
    /// "(he/she/it) (V5)" name the same inflection.
    pub fn new<I>(forms: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            forms: forms
                .into_iter()
                .map(|(label, form)| (collapse_whitespace(&label), form))
                .collect(),
        }
    }

    /// Surface form stored under `label`, if the table has one.
    pub fn form(&self, label: &str) -> Option<&str> {
        let label = collapse_whitespace(label);
        self.forms
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, form)| form.as_str())
    }

    pub fn forms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forms.iter().map(|(l, f)| (l.as_str(), f.as_str()))
    }
}

/// Base verb -> conjugation table.
#[derive(Debug, Clone, Default)]
pub struct VerbIndex {
    entries: HashMap<String, VerbEntry>,
}

impl VerbIndex {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = VerbRecord>,
    {
        let entries = records
            .into_iter()
            .map(|r| (r.base.to_lowercase(), VerbEntry::new(r.forms)))
            .collect();
        Self { entries }
    }

    pub fn contains(&self, base: &str) -> bool {
        self.entries.contains_key(base)
    }

    pub fn get(&self, base: &str) -> Option<&VerbEntry> {
        self.entries.get(base)
    }

    /// Conjugated form of `base` under `label`. `None` when either is unknown.
    pub fn inflect(&self, base: &str, label: &str) -> Option<&str> {
        self.get(base)?.form(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VerbEntry)> {
        self.entries.iter().map(|(base, entry)| (base.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn to_records(&self) -> Vec<VerbRecord> {
        let mut records: Vec<VerbRecord> = self
            .entries
            .iter()
            .map(|(base, entry)| VerbRecord {
                base: base.clone(),
                forms: entry.forms.clone(),
            })
            .collect();
        records.sort_by(|a, b| a.base.cmp(&b.base));
        records
    }
}

/// Known-word index: the union of dictionary headwords and base verbs.
///
/// Lookups take an already normalized word (see [`vakya_protocol::normalize_word`]).
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    dictionary: HashMap<String, Descriptor>,
    verbs: VerbIndex,
}

impl WordIndex {
    pub fn new(dictionary: HashMap<String, Descriptor>, verbs: VerbIndex) -> Self {
        Self { dictionary, verbs }
    }

    pub fn from_records<W, V>(words: W, verbs: V) -> Self
    where
        W: IntoIterator<Item = WordRecord>,
        V: IntoIterator<Item = VerbRecord>,
    {
        let dictionary = words
            .into_iter()
            .map(|r| (r.word.to_lowercase(), Descriptor::new(r.attributes)))
            .collect();
        Self::new(dictionary, VerbIndex::from_records(verbs))
    }

    pub fn exists(&self, word: &str) -> bool {
        self.dictionary.contains_key(word) || self.verbs.contains(word)
    }

    /// Dictionary attributes of `word`; base verbs carry none.
    pub fn descriptor(&self, word: &str) -> Option<&Descriptor> {
        self.dictionary.get(word)
    }

    pub fn verbs(&self) -> &VerbIndex {
        &self.verbs
    }

    /// Number of dictionary headwords (base verbs not included).
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    pub(crate) fn to_records(&self) -> Vec<WordRecord> {
        let mut records: Vec<WordRecord> = self
            .dictionary
            .iter()
            .map(|(word, descriptor)| WordRecord {
                word: word.clone(),
                attributes: descriptor.attributes.clone(),
            })
            .collect();
        records.sort_by(|a, b| a.word.cmp(&b.word));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vakya_protocol::THIRD_PERSON_SINGULAR_LABEL;

    fn walk() -> VerbRecord {
        VerbRecord {
            base: "walk".to_string(),
            forms: vec![
                ("3rd Person Singular (he/she/it)  (V5)".to_string(), "walks".to_string()),
                ("Past Tense (V2)".to_string(), "walked".to_string()),
            ],
        }
    }

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::from_records(
            words.iter().map(|w| WordRecord {
                word: w.to_string(),
                attributes: vec![],
            }),
            vec![walk()],
        )
    }

    #[test]
    fn test_union_of_sources() {
        let idx = index(&["school", "to"]);

        assert!(idx.exists("school"));
        assert!(idx.exists("walk"));
        assert!(!idx.exists("walks"));
        assert!(!idx.exists("scool"));
    }

    #[test]
    fn test_double_spaced_label_resolves() {
        let verbs = VerbIndex::from_records(vec![walk()]);

        assert_eq!(verbs.inflect("walk", THIRD_PERSON_SINGULAR_LABEL), Some("walks"));
        assert_eq!(verbs.inflect("walk", "Past Participle (V3)"), None);
        assert_eq!(verbs.inflect("run", THIRD_PERSON_SINGULAR_LABEL), None);
    }

    #[test]
    fn test_descriptor_passthrough() {
        let idx = WordIndex::from_records(
            vec![WordRecord {
                word: "School".to_string(),
                attributes: vec![("pos".to_string(), "noun".to_string())],
            }],
            vec![],
        );

        let descriptor = idx.descriptor("school").expect("keys are lowercased");
        assert_eq!(descriptor.get("pos"), Some("noun"));
        assert_eq!(descriptor.get("gender"), None);
    }

    proptest! {
        #[test]
        fn test_every_loaded_word_exists(words in prop::collection::vec("[a-z]{2,10}", 1..20)) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let idx = index(&refs);

            for w in &words {
                prop_assert!(idx.exists(w));
            }
        }
    }
}
