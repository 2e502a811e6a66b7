use std::collections::HashMap;

use vakya_protocol::{RuleRecord, RuleRef, FALLBACK_EXPLANATION};

/// Which lookup path produced a rule explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    /// Stored under its stringified number as the table key.
    Keyed,
    /// Found by scanning for a matching embedded "Rule No".
    Embedded,
    /// Nothing usable in the table.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    pub rule_no: u32,
    pub explanation: String,
    pub source: RuleSource,
}

impl From<ResolvedRule> for RuleRef {
    fn from(r: ResolvedRule) -> Self {
        Self {
            rule_no: r.rule_no,
            explanation: r.explanation,
        }
    }
}

/// Grammar rules in document order, with a key index for object-shaped tables.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    records: Vec<RuleRecord>,
    by_key: HashMap<String, usize>,
}

impl RuleTable {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RuleRecord>,
    {
        let records: Vec<RuleRecord> = records.into_iter().collect();
        let mut by_key = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if let Some(key) = &record.key {
                // JSON object keys are unique; keep the first on malformed input
                by_key.entry(key.clone()).or_insert(i);
            }
        }
        Self { records, by_key }
    }

    /// Resolves a rule explanation without applying the fallback.
    ///
    /// Priority:
    /// 1. the entry keyed by the stringified number, if its explanation is non-empty;
    /// 2. the first entry (document order) whose embedded "Rule No" matches,
    ///    if its explanation is non-empty. Later matches are not consulted.
    pub fn lookup(&self, rule_no: u32) -> Option<ResolvedRule> {
        let key = rule_no.to_string();

        let keyed = self
            .by_key
            .get(&key)
            .and_then(|&i| usable(&self.records[i]));
        if let Some(explanation) = keyed {
            return Some(ResolvedRule {
                rule_no,
                explanation: explanation.to_string(),
                source: RuleSource::Keyed,
            });
        }

        self.records
            .iter()
            .find(|r| r.rule_no.as_deref() == Some(key.as_str()))
            .and_then(usable)
            .map(|explanation| ResolvedRule {
                rule_no,
                explanation: explanation.to_string(),
                source: RuleSource::Embedded,
            })
    }

    /// [`lookup`](Self::lookup), falling back to the fixed explanation.
    pub fn explain(&self, rule_no: u32) -> ResolvedRule {
        self.lookup(rule_no).unwrap_or_else(|| {
            tracing::debug!(rule_no, "no usable rule entry, using fallback explanation");
            ResolvedRule {
                rule_no,
                explanation: FALLBACK_EXPLANATION.to_string(),
                source: RuleSource::Fallback,
            }
        })
    }

    pub fn records(&self) -> &[RuleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn usable(record: &RuleRecord) -> Option<&str> {
    record.explanation.as_deref().filter(|e| !e.is_empty())
}
