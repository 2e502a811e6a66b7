//! Fixtures shared by the checker tests.

use vakya_lexicon::{Lexicon, RuleTable, VerbIndex};
use vakya_protocol::{Extraction, LinguisticAnnotator, RuleRecord, VerbRecord, WordRecord};

/// Annotator that answers every sentence with the same canned output.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnnotator {
    pub terms: Vec<String>,
    pub subjects: Extraction,
    pub verbs: Extraction,
    pub infinitives: Vec<String>,
}

impl ScriptedAnnotator {
    pub fn svo(subject: &str, verb: &str, base: &str) -> Self {
        Self {
            terms: vec![subject.to_string(), verb.to_string()],
            subjects: Extraction::of(vec![subject.to_string()]),
            verbs: Extraction::of(vec![verb.to_string()]),
            infinitives: vec![base.to_string()],
        }
    }
}

impl LinguisticAnnotator for ScriptedAnnotator {
    fn terms(&self, _sentence: &str) -> Vec<String> {
        self.terms.clone()
    }

    fn subjects(&self, _sentence: &str) -> Extraction {
        self.subjects.clone()
    }

    fn verbs(&self, _sentence: &str) -> Extraction {
        self.verbs.clone()
    }

    fn infinitives(&self, _sentence: &str) -> Vec<String> {
        self.infinitives.clone()
    }
}

fn verb_records() -> Vec<VerbRecord> {
    let third = "3rd Person Singular (he/she/it)  (V5)".to_string();
    vec![
        VerbRecord {
            base: "walk".to_string(),
            forms: vec![
                (third.clone(), "walks".to_string()),
                ("Past Tense (V2)".to_string(), "walked".to_string()),
            ],
        },
        VerbRecord {
            base: "go".to_string(),
            forms: vec![
                (third, "goes".to_string()),
                ("Past Tense (V2)".to_string(), "went".to_string()),
            ],
        },
        VerbRecord {
            base: "be".to_string(),
            forms: vec![("Past Tense (V2)".to_string(), "was".to_string())],
        },
    ]
}

pub fn verbs() -> VerbIndex {
    VerbIndex::from_records(verb_records())
}

pub fn rules_with(explanation: &str) -> RuleTable {
    RuleTable::from_records(vec![RuleRecord {
        key: Some("5".to_string()),
        rule_no: Some("5".to_string()),
        explanation: Some(explanation.to_string()),
    }])
}

pub fn lexicon() -> Lexicon {
    let known = [
        "he", "she", "they", "to", "school", "home", "the", "children", "walks", "goes",
    ];
    let words = known
        .iter()
        .map(|w| WordRecord {
            word: w.to_string(),
            attributes: vec![],
        })
        .collect();
    let rules = vec![RuleRecord {
        key: Some("5".to_string()),
        rule_no: Some("5".to_string()),
        explanation: Some("ఏకవచన కర్త (he/she/it) తో క్రియకు s/es చేర్చాలి.".to_string()),
    }];
    Lexicon::from_records(words, verb_records(), rules)
}

/// The sample tables shipped under `data/`.
pub fn shipped_lexicon() -> Lexicon {
    Lexicon::from_json(
        include_str!("../../../data/dictionary.json"),
        include_str!("../../../data/verbs.json"),
        include_str!("../../../data/rules.json"),
    )
    .expect("shipped tables load")
}
