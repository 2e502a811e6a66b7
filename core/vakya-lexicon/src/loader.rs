use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use vakya_protocol::{
    LexiconBundle, RuleRecord, VerbRecord, WordRecord, BUNDLE_VERSION, EXPLANATION_FIELD,
    RULE_NO_FIELD,
};

use crate::error::{LoadError, Table};
use crate::index::{VerbIndex, WordIndex};
use crate::rules::RuleTable;

/// File names of the three tables inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub dictionary: PathBuf,
    pub verbs: PathBuf,
    pub rules: PathBuf,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("dictionary.json"),
            verbs: PathBuf::from("verbs.json"),
            rules: PathBuf::from("rules.json"),
        }
    }
}

/// Fully loaded, immutable word, verb and rule indices.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: WordIndex,
    rules: RuleTable,
}

impl Lexicon {
    pub fn new(words: WordIndex, rules: RuleTable) -> Self {
        Self { words, rules }
    }

    /// Builds a lexicon from already-materialized records. No emptiness check.
    pub fn from_records(
        words: Vec<WordRecord>,
        verbs: Vec<VerbRecord>,
        rules: Vec<RuleRecord>,
    ) -> Self {
        Self::new(
            WordIndex::from_records(words, verbs),
            RuleTable::from_records(rules),
        )
    }

    /// Parses the dictionary, verb and rule tables from JSON text.
    pub fn from_json(dictionary: &str, verbs: &str, rules: &str) -> Result<Self, LoadError> {
        let words = parse_dictionary(&parse(Table::Dictionary, dictionary)?)?;
        let verbs = parse_verbs(&parse(Table::Verbs, verbs)?)?;
        let rules = parse_rules(&parse(Table::Rules, rules)?)?;

        let lexicon = Self::from_records(words, verbs, rules);
        lexicon.ensure_populated()?;

        tracing::info!(
            words = lexicon.words.len(),
            verbs = lexicon.words.verbs().len(),
            rules = lexicon.rules.len(),
            "lexicon loaded from JSON"
        );
        Ok(lexicon)
    }

    /// Reads the three tables named by `files` from `dir`.
    pub fn load_dir(dir: &Path, files: &DataFiles) -> Result<Self, LoadError> {
        let dictionary = read(&dir.join(&files.dictionary))?;
        let verbs = read(&dir.join(&files.verbs))?;
        let rules = read(&dir.join(&files.rules))?;

        Self::from_json(&dictionary, &verbs, &rules)
    }

    /// Validates and unpacks a bundle produced by [`to_bundle_bytes`](Self::to_bundle_bytes).
    pub fn from_bundle(bytes: &[u8]) -> Result<Self, LoadError> {
        // Archives must be read from aligned memory
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let bundle: LexiconBundle =
            rkyv::from_bytes(&aligned).map_err(|e| LoadError::Bundle(e.to_string()))?;

        if bundle.version != BUNDLE_VERSION {
            return Err(LoadError::BundleVersion {
                found: bundle.version,
                expected: BUNDLE_VERSION,
            });
        }

        let lexicon = Self::from_records(bundle.words, bundle.verbs, bundle.rules);
        lexicon.ensure_populated()?;

        tracing::info!(
            words = lexicon.words.len(),
            verbs = lexicon.words.verbs().len(),
            rules = lexicon.rules.len(),
            "lexicon loaded from bundle"
        );
        Ok(lexicon)
    }

    pub fn to_bundle(&self) -> LexiconBundle {
        LexiconBundle {
            version: BUNDLE_VERSION,
            words: self.words.to_records(),
            verbs: self.words.verbs().to_records(),
            rules: self.rules.records().to_vec(),
        }
    }

    pub fn to_bundle_bytes(&self) -> Result<Vec<u8>, LoadError> {
        let bytes = rkyv::to_bytes::<_, 4096>(&self.to_bundle())
            .map_err(|e| LoadError::Bundle(format!("{e:?}")))?;
        Ok(bytes.to_vec())
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    pub fn verbs(&self) -> &VerbIndex {
        self.words.verbs()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Empty indices would flag every word, so they count as unavailable data.
    fn ensure_populated(&self) -> Result<(), LoadError> {
        if self.words.is_empty() {
            return Err(LoadError::EmptyTable(Table::Dictionary));
        }
        if self.words.verbs().is_empty() {
            return Err(LoadError::EmptyTable(Table::Verbs));
        }
        Ok(())
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse(table: Table, text: &str) -> Result<Value, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Json { table, source })
}

fn object(table: Table, value: &Value) -> Result<&Map<String, Value>, LoadError> {
    value.as_object().ok_or(LoadError::Shape {
        table,
        expected: "object",
    })
}

/// Entries stored as `null`, `false`, `0` or `""` count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_dictionary(value: &Value) -> Result<Vec<WordRecord>, LoadError> {
    let mut records = Vec::new();
    for (word, descriptor) in object(Table::Dictionary, value)? {
        if !is_present(descriptor) {
            tracing::debug!(word = %word, "skipping dictionary entry with empty descriptor");
            continue;
        }
        let attributes = match descriptor {
            Value::Object(fields) => fields
                .iter()
                .map(|(name, v)| (name.clone(), scalar_text(v)))
                .collect(),
            other => vec![("value".to_string(), scalar_text(other))],
        };
        records.push(WordRecord {
            word: word.clone(),
            attributes,
        });
    }
    Ok(records)
}

fn parse_verbs(value: &Value) -> Result<Vec<VerbRecord>, LoadError> {
    let mut records = Vec::new();
    for (base, table) in object(Table::Verbs, value)? {
        if !is_present(table) {
            tracing::debug!(verb = %base, "skipping verb entry with empty conjugation table");
            continue;
        }
        // Non-string forms are unusable as surface words
        let forms = table
            .as_object()
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(|(label, form)| Some((label.clone(), form.as_str()?.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        records.push(VerbRecord {
            base: base.clone(),
            forms,
        });
    }
    Ok(records)
}

fn parse_rules(value: &Value) -> Result<Vec<RuleRecord>, LoadError> {
    match value {
        Value::Object(entries) => Ok(entries
            .iter()
            .map(|(key, entry)| rule_record(Some(key.clone()), entry))
            .collect()),
        Value::Array(entries) => Ok(entries.iter().map(|entry| rule_record(None, entry)).collect()),
        _ => Err(LoadError::Shape {
            table: Table::Rules,
            expected: "object or array",
        }),
    }
}

fn rule_record(key: Option<String>, entry: &Value) -> RuleRecord {
    RuleRecord {
        key,
        rule_no: entry.get(RULE_NO_FIELD).and_then(rule_no_text),
        explanation: entry
            .get(EXPLANATION_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Stringifies an embedded rule number so `5`, `5.0` and `"5"` all read "5".
fn rule_no_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                let f = n.as_f64()?;
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    Some(format!("{}", f as i64))
                } else {
                    Some(f.to_string())
                }
            }
        }
        other => Some(scalar_text(other)),
    }
}
