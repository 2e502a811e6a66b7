use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Bumped whenever the archived layout below changes.
pub const BUNDLE_VERSION: u32 = 1;

/// One dictionary headword with its descriptor flattened to `(attribute, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordRecord {
    pub word: String,
    pub attributes: Vec<(String, String)>,
}

/// A base verb and its `(inflection label, surface form)` table.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbRecord {
    pub base: String,
    pub forms: Vec<(String, String)>,
}

/// A grammar rule as it appeared in the rule table.
///
/// `key` is the object key it was stored under (absent when the table is an
/// array) and `rule_no` the stringified embedded "Rule No" field.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct RuleRecord {
    pub key: Option<String>,
    pub rule_no: Option<String>,
    pub explanation: Option<String>,
}

/// Precompiled snapshot of the three lexicon tables.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconBundle {
    pub version: u32,
    pub words: Vec<WordRecord>,
    pub verbs: Vec<VerbRecord>,
    pub rules: Vec<RuleRecord>,
}

/// Rule metadata attached to a grammar mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RuleRef {
    pub rule_no: u32,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AgreementMistake {
    /// Verb as written in the sentence.
    pub wrong_verb: String,
    /// Form the subject requires, as stored in the verb table.
    pub correct_verb: String,
    pub rule: RuleRef,
}

/// Everything found in one sentence.
///
/// `spelling` holds the surface tokens that failed lookup, in sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Report {
    pub spelling: Vec<String>,
    pub agreement: Vec<AgreementMistake>,
}

impl Report {
    /// Nothing to report in either class.
    pub fn is_clear(&self) -> bool {
        self.spelling.is_empty() && self.agreement.is_empty()
    }
}
