pub mod agreement;
pub mod error;
pub mod spelling;

#[cfg(test)]
mod testing;

pub use agreement::{check_agreement, AgreementChecker};
pub use error::{validate_sentence, CheckError};
pub use spelling::SpellChecker;

use vakya_lexicon::Lexicon;
use vakya_protocol::{LinguisticAnnotator, Report};

/// Runs the spelling and agreement checks over one sentence.
///
/// Holds only shared references, so one lexicon can serve any number of
/// checkers on different threads.
#[derive(Debug, Clone)]
pub struct SentenceChecker<'a, A> {
    lexicon: &'a Lexicon,
    annotator: A,
}

impl<'a, A: LinguisticAnnotator> SentenceChecker<'a, A> {
    pub fn new(lexicon: &'a Lexicon, annotator: A) -> Self {
        Self { lexicon, annotator }
    }

    /// Both checks run independently; the report does not rank one over the other.
    ///
    /// Callers reject blank input first (see [`validate_sentence`]).
    pub fn check(&self, sentence: &str) -> Report {
        let terms = self.annotator.terms(sentence);
        let spelling = SpellChecker::new(self.lexicon.words()).check(&terms);

        let agreement = AgreementChecker::new(self.lexicon.verbs(), self.lexicon.rules())
            .check(sentence, &self.annotator);

        tracing::debug!(
            terms = terms.len(),
            spelling = spelling.len(),
            agreement = agreement.len(),
            "sentence checked"
        );

        Report {
            spelling,
            agreement,
        }
    }
}
