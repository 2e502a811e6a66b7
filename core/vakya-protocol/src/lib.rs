#![no_std] // Shared with the wasm platform

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod annotator;
pub mod flags;
pub mod grammar;
pub mod text;

// Re-export core types for convenience
pub use annotator::{Extraction, LinguisticAnnotator};
pub use flags::TermFlags;
pub use grammar::*;
pub use text::{collapse_whitespace, is_trivially_short, normalize_word};

pub mod model;
pub use model::*;
