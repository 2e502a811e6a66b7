use std::collections::{HashMap, HashSet};

use vakya_lexicon::VerbIndex;
use vakya_protocol::{TermFlags, THIRD_PERSON_SINGULAR_LABEL};

const PRONOUNS: [(&str, TermFlags); 7] = [
    ("i", TermFlags::PRONOUN.union(TermFlags::SINGULAR).union(TermFlags::FIRST_PERSON)),
    ("you", TermFlags::PRONOUN.union(TermFlags::SECOND_PERSON)),
    ("he", TermFlags::PRONOUN.union(TermFlags::SINGULAR).union(TermFlags::THIRD_PERSON)),
    ("she", TermFlags::PRONOUN.union(TermFlags::SINGULAR).union(TermFlags::THIRD_PERSON)),
    ("it", TermFlags::PRONOUN.union(TermFlags::SINGULAR).union(TermFlags::THIRD_PERSON)),
    ("we", TermFlags::PRONOUN.union(TermFlags::PLURAL).union(TermFlags::FIRST_PERSON)),
    ("they", TermFlags::PRONOUN.union(TermFlags::PLURAL).union(TermFlags::THIRD_PERSON)),
];

const DETERMINERS: [&str; 17] = [
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
    "our", "their", "every", "each", "some",
];

const CONJUNCTIONS: [&str; 10] = [
    "and", "or", "but", "because", "so", "while", "when", "if", "although", "though",
];

const PREPOSITIONS: [&str; 16] = [
    "to", "in", "on", "at", "from", "with", "by", "for", "of", "into", "over", "under",
    "after", "before", "about", "near",
];

const NEGATIONS: [&str; 2] = ["not", "never"];

const MODALS: [&str; 9] = [
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
];

/// Auxiliary surface form -> base form.
const AUXILIARIES: [(&str, &str); 14] = [
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("be", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("have", "have"),
    ("had", "have"),
    ("does", "do"),
    ("do", "do"),
    ("did", "do"),
];

/// Verb knowledge derived from the conjugation table.
#[derive(Debug, Clone, Default)]
pub struct Morphology {
    /// Every conjugated surface form -> its base verb.
    surface_to_base: HashMap<String, String>,
    bases: HashSet<String>,
    /// Third-person-singular forms, for number tagging.
    singular_forms: HashSet<String>,
}

impl Morphology {
    pub fn from_verbs(verbs: &VerbIndex) -> Self {
        let mut surface_to_base: HashMap<String, String> = HashMap::new();
        let mut bases = HashSet::new();
        let mut singular_forms = HashSet::new();

        for (base, entry) in verbs.iter() {
            bases.insert(base.to_string());
            for (label, form) in entry.forms() {
                let form = form.to_lowercase();
                if label == THIRD_PERSON_SINGULAR_LABEL {
                    singular_forms.insert(form.clone());
                }
                // Shared forms ("read", "set") resolve to the smallest base, so
                // the mapping does not depend on hash order
                surface_to_base
                    .entry(form)
                    .and_modify(|b| {
                        if base < b.as_str() {
                            *b = base.to_string();
                        }
                    })
                    .or_insert_with(|| base.to_string());
            }
        }
        // A base form always maps to itself
        for base in &bases {
            surface_to_base.insert(base.clone(), base.clone());
        }

        Self {
            surface_to_base,
            bases,
            singular_forms,
        }
    }

    pub fn is_known_verb(&self, normal: &str) -> bool {
        self.surface_to_base.contains_key(normal)
    }

    /// Lexical tags for a normalized word. Open-class words get no tags.
    pub fn tag(&self, normal: &str) -> TermFlags {
        if let Some((_, flags)) = PRONOUNS.iter().find(|(p, _)| *p == normal) {
            return *flags;
        }
        if DETERMINERS.contains(&normal) {
            return TermFlags::DETERMINER;
        }
        if CONJUNCTIONS.contains(&normal) {
            return TermFlags::CONJUNCTION;
        }
        if PREPOSITIONS.contains(&normal) {
            return TermFlags::PREPOSITION;
        }
        if NEGATIONS.contains(&normal) {
            return TermFlags::NEGATION;
        }
        if MODALS.contains(&normal) {
            return TermFlags::MODAL;
        }
        if AUXILIARIES.iter().any(|(form, _)| *form == normal) {
            let mut flags = TermFlags::AUXILIARY;
            if matches!(normal, "is" | "has" | "does" | "was") {
                flags |= TermFlags::SINGULAR | TermFlags::THIRD_PERSON;
            }
            return flags;
        }
        if self.is_known_verb(normal) {
            let mut flags = TermFlags::VERB;
            if self.singular_forms.contains(normal) {
                flags |= TermFlags::SINGULAR | TermFlags::THIRD_PERSON;
            }
            return flags;
        }
        TermFlags::empty()
    }

    /// Base form of a lowercase verb surface.
    ///
    /// Table forms win, then auxiliaries and modals, then suffix stripping.
    /// Among stripping candidates the first known base is preferred.
    pub fn infinitive(&self, verb: &str) -> String {
        if let Some(base) = self.surface_to_base.get(verb) {
            return base.clone();
        }
        if let Some((_, base)) = AUXILIARIES.iter().find(|(form, _)| *form == verb) {
            return base.to_string();
        }
        if MODALS.contains(&verb) {
            return verb.to_string();
        }

        let candidates = strip_suffixes(verb);
        candidates
            .iter()
            .find(|c| self.bases.contains(c.as_str()))
            .or_else(|| candidates.first())
            .cloned()
            .unwrap_or_else(|| verb.to_string())
    }
}

/// Plausible base forms of an inflected English verb, most likely first.
fn strip_suffixes(verb: &str) -> Vec<String> {
    let mut out = Vec::new();
    let len = verb.chars().count();

    if let Some(stem) = verb.strip_suffix("ies").filter(|_| len > 4) {
        out.push(format!("{stem}y"));
    } else if let Some(stem) = verb.strip_suffix("sses") {
        out.push(format!("{stem}ss"));
    } else if let Some(stem) = ["ches", "shes", "xes", "zes", "oes"]
        .iter()
        .find_map(|s| verb.strip_suffix(*s).map(|rest| (rest, *s)))
        .map(|(rest, s)| format!("{rest}{}", &s[..s.len() - 2]))
    {
        out.push(stem);
    } else if let Some(stem) = verb.strip_suffix('s').filter(|_| len > 3 && !verb.ends_with("ss")) {
        out.push(stem.to_string());
    }

    if let Some(stem) = verb.strip_suffix("ied").filter(|_| len > 4) {
        out.push(format!("{stem}y"));
    } else if let Some(stem) = verb.strip_suffix("ed").filter(|_| len > 4) {
        push_stem_variants(&mut out, stem);
    }

    if let Some(stem) = verb.strip_suffix("ing").filter(|_| len > 5) {
        push_stem_variants(&mut out, stem);
    }

    out
}

/// `stem`, `stem + e` and the undoubled stem ("stopp" -> "stop").
fn push_stem_variants(out: &mut Vec<String>, stem: &str) {
    out.push(stem.to_string());
    out.push(format!("{stem}e"));
    let mut chars = stem.chars().rev();
    if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
        if last == prev && !"aeiou".contains(last) {
            out.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vakya_protocol::VerbRecord;

    fn verbs() -> VerbIndex {
        let record = |base: &str, third: &str, past: &str| VerbRecord {
            base: base.to_string(),
            forms: vec![
                ("3rd Person Singular (he/she/it)  (V5)".to_string(), third.to_string()),
                ("Past Tense (V2)".to_string(), past.to_string()),
            ],
        };
        VerbIndex::from_records(vec![
            record("walk", "walks", "walked"),
            record("go", "goes", "went"),
            record("make", "makes", "made"),
            record("stop", "stops", "stopped"),
        ])
    }

    #[test]
    fn test_table_forms_resolve_to_base() {
        let morph = Morphology::from_verbs(&verbs());

        assert_eq!(morph.infinitive("went"), "go");
        assert_eq!(morph.infinitive("goes"), "go");
        assert_eq!(morph.infinitive("walk"), "walk");
    }

    #[test]
    fn test_suffix_stripping_prefers_known_bases() {
        let morph = Morphology::from_verbs(&verbs());

        assert_eq!(morph.infinitive("making"), "make");
        assert_eq!(morph.infinitive("stopping"), "stop");
        assert_eq!(morph.infinitive("carries"), "carry");
        assert_eq!(morph.infinitive("watches"), "watch");
        assert_eq!(morph.infinitive("jumps"), "jump");
        assert_eq!(morph.infinitive("is"), "be");
        assert_eq!(morph.infinitive("can"), "can");
        assert_eq!(morph.infinitive("xyz"), "xyz");
    }

    #[test]
    fn test_tags() {
        let morph = Morphology::from_verbs(&verbs());

        assert!(morph.tag("he").contains(TermFlags::PRONOUN | TermFlags::THIRD_PERSON));
        assert!(morph.tag("they").contains(TermFlags::PLURAL));
        assert_eq!(morph.tag("the"), TermFlags::DETERMINER);
        assert_eq!(morph.tag("to"), TermFlags::PREPOSITION);
        assert!(morph.tag("walks").contains(TermFlags::VERB | TermFlags::SINGULAR));
        assert_eq!(morph.tag("walk"), TermFlags::VERB);
        assert!(morph.tag("does").contains(TermFlags::AUXILIARY));
        assert_eq!(morph.tag("school"), TermFlags::empty());
    }
}
