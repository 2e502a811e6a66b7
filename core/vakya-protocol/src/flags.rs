#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Coarse lexical tags an annotator attaches to a term.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct TermFlags: u32 {
        // Word class (Bits 0-7)
        const PRONOUN = 1;
        const DETERMINER = 2;
        const CONJUNCTION = 4;
        const PREPOSITION = 8;
        const VERB = 16;
        const AUXILIARY = 32;
        const MODAL = 64;
        const NEGATION = 128;

        // Number (Bits 8-9)
        const SINGULAR = 256;
        const PLURAL = 512;

        // Person (Bits 10-12)
        const FIRST_PERSON = 1024;
        const SECOND_PERSON = 2048;
        const THIRD_PERSON = 4096;
    }
}

impl TermFlags {
    /// Anything that can head a finite verb group.
    pub fn is_verbal(self) -> bool {
        self.intersects(TermFlags::VERB | TermFlags::AUXILIARY | TermFlags::MODAL)
    }

    /// Terms that close off a subject run when scanning leftwards.
    pub fn is_clause_break(self) -> bool {
        self.intersects(TermFlags::CONJUNCTION | TermFlags::PREPOSITION)
    }
}
