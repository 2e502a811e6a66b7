//! Immutable word, verb and rule indices, and the loader that builds them.

pub mod error;
pub mod index;
pub mod loader;
pub mod rules;

pub use error::{LoadError, Table};
pub use index::{Descriptor, VerbEntry, VerbIndex, WordIndex};
pub use loader::{DataFiles, Lexicon};
pub use rules::{ResolvedRule, RuleSource, RuleTable};
pub use vakya_protocol::normalize_word;
