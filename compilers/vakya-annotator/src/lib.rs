pub mod morphology;
pub mod parser;
pub mod syntax;
pub mod token;

use vakya_lexicon::VerbIndex;
use vakya_protocol::{Extraction, LinguisticAnnotator};

use crate::morphology::Morphology;
use crate::parser::split_terms;
use crate::syntax::{find_clauses, Clause};
use crate::token::Term;

/// A sentence split into tagged terms and clauses.
#[derive(Debug, Clone)]
pub struct Annotation<'a> {
    pub terms: Vec<Term<'a>>,
    pub clauses: Vec<Clause>,
}

impl<'a> Annotation<'a> {
    /// Subject phrases in clause order, words joined by single spaces.
    pub fn subject_phrases(&self) -> Vec<String> {
        self.clauses
            .iter()
            .filter_map(|c| c.subject.clone())
            .map(|range| {
                self.terms[range]
                    .iter()
                    .map(Term::bare)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// First word of every verb group, case preserved, punctuation removed.
    pub fn verb_surfaces(&self) -> Vec<&'a str> {
        self.clauses.iter().map(|c| self.terms[c.verb].bare()).collect()
    }
}

/// Reference annotator: closed-class word lists plus the verb table.
///
/// Verbs are recognized through every surface form in the conjugation table,
/// so coverage grows with the data rather than with code.
#[derive(Debug, Clone)]
pub struct RuleBasedAnnotator {
    morphology: Morphology,
}

impl RuleBasedAnnotator {
    pub fn new(verbs: &VerbIndex) -> Self {
        Self {
            morphology: Morphology::from_verbs(verbs),
        }
    }

    /// Primary entry point: Text -> Tagged Terms -> Clauses
    pub fn annotate<'a>(&self, sentence: &'a str) -> Annotation<'a> {
        let terms: Vec<Term<'a>> = split_terms(sentence)
            .into_iter()
            .map(|span| {
                let mut term = Term::new(span, &sentence[span.start..span.end]);
                term.flags = self.morphology.tag(&term.normal);
                term
            })
            .collect();

        let clauses = find_clauses(&terms);
        tracing::trace!(terms = terms.len(), clauses = clauses.len(), "annotated sentence");

        Annotation { terms, clauses }
    }
}

impl LinguisticAnnotator for RuleBasedAnnotator {
    fn terms(&self, sentence: &str) -> Vec<String> {
        split_terms(sentence)
            .into_iter()
            .map(|span| sentence[span.start..span.end].to_string())
            .collect()
    }

    fn subjects(&self, sentence: &str) -> Extraction {
        Extraction::of(self.annotate(sentence).subject_phrases())
    }

    fn verbs(&self, sentence: &str) -> Extraction {
        let annotation = self.annotate(sentence);
        Extraction::of(
            annotation
                .verb_surfaces()
                .into_iter()
                .map(str::to_string)
                .collect(),
        )
    }

    fn infinitives(&self, sentence: &str) -> Vec<String> {
        self.annotate(sentence)
            .verb_surfaces()
            .into_iter()
            .map(|verb| self.morphology.infinitive(&verb.to_lowercase()))
            .collect()
    }
}
