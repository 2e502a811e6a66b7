use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The three source tables of a lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Dictionary,
    Verbs,
    Rules,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Dictionary => write!(f, "dictionary"),
            Table::Verbs => write!(f, "verbs"),
            Table::Rules => write!(f, "rules"),
        }
    }
}

/// Why a lexicon could not be made available. No partial lexicon is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} table is not valid JSON: {source}")]
    Json {
        table: Table,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} table must be a JSON {expected}")]
    Shape { table: Table, expected: &'static str },

    #[error("{0} table is empty")]
    EmptyTable(Table),

    #[error("lexicon bundle is corrupt: {0}")]
    Bundle(String),

    #[error("lexicon bundle version {found} is not supported (expected {expected})")]
    BundleVersion { found: u32, expected: u32 },
}
