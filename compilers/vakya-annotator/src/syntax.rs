use std::ops::Range;

use vakya_protocol::TermFlags;

use crate::token::Term;

/// One finite verb group and the subject run in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Term indices of the subject phrase, if the clause has one.
    pub subject: Option<Range<usize>>,
    /// Index of the first term of the verb group.
    pub verb: usize,
}

/// Greedy left-to-right clause finder.
///
/// Each finite verb group starts a clause; its subject is the run of
/// nominal terms immediately before it, bounded by the previous verb group,
/// a conjunction or preposition, or a term ending in a comma. "and"/"or"
/// between two nominal terms joins them into one compound subject
/// ("he and she walk"). Otherwise the personal pronoun nearest the verb is
/// taken as the whole subject ("he often walk", "he thinks they walk").
pub fn find_clauses(terms: &[Term]) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let mut floor = 0;
    let mut i = 0;

    while i < terms.len() {
        if !is_finite_head(terms, i) {
            i += 1;
            continue;
        }

        clauses.push(Clause {
            subject: subject_before(terms, floor, i),
            verb: i,
        });

        // Swallow the rest of the group: "does not walk", "has been"
        i += 1;
        while i < terms.len()
            && (terms[i].flags.is_verbal() || terms[i].flags.contains(TermFlags::NEGATION))
        {
            i += 1;
        }
        floor = i;
    }

    clauses
}

/// A verbal term that is not an infinitive ("to walk") or a noun ("the walk").
fn is_finite_head(terms: &[Term], i: usize) -> bool {
    if !terms[i].flags.is_verbal() {
        return false;
    }
    match i.checked_sub(1).map(|p| &terms[p]) {
        Some(prev) => !prev.flags.contains(TermFlags::DETERMINER) && prev.normal != "to",
        None => true,
    }
}

fn subject_before(terms: &[Term], floor: usize, verb: usize) -> Option<Range<usize>> {
    let mut start = verb;
    let mut compound = false;
    while start > floor {
        let prev = &terms[start - 1];
        if start < verb && start - 1 > floor && joins_nominals(prev, &terms[start - 2]) {
            compound = true;
            start -= 1;
            continue;
        }
        // No finite head lies between `floor` and `verb`, so verbal terms here are nominal
        if prev.flags.is_clause_break() || prev.closes_clause() {
            break;
        }
        start -= 1;
    }

    if start == verb {
        return None;
    }
    if compound {
        return Some(start..verb);
    }

    let pronoun = (start..verb)
        .rev()
        .find(|&k| terms[k].flags.contains(TermFlags::PRONOUN));
    match pronoun {
        Some(k) => Some(k..k + 1),
        None => Some(start..verb),
    }
}

/// `term` is "and"/"or" sitting between `left` and a nominal on its right.
fn joins_nominals(term: &Term, left: &Term) -> bool {
    matches!(term.normal.as_str(), "and" | "or")
        && !term.closes_clause()
        && !left.flags.is_clause_break()
        && !left.closes_clause()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;

    fn t(text: &'static str, flags: TermFlags) -> Term<'static> {
        let mut term = Term::new(Span::new(0, text.len()), text);
        term.flags = flags;
        term
    }

    fn he() -> TermFlags {
        TermFlags::PRONOUN | TermFlags::SINGULAR | TermFlags::THIRD_PERSON
    }

    #[test]
    fn test_simple_svo() {
        // "He walk to school"
        let terms = vec![
            t("He", he()),
            t("walk", TermFlags::VERB),
            t("to", TermFlags::PREPOSITION),
            t("school", TermFlags::empty()),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(clauses, vec![Clause { subject: Some(0..1), verb: 1 }]);
    }

    #[test]
    fn test_noun_phrase_subject() {
        // "The old dog walks"
        let terms = vec![
            t("The", TermFlags::DETERMINER),
            t("old", TermFlags::empty()),
            t("dog", TermFlags::empty()),
            t("walks", TermFlags::VERB | TermFlags::SINGULAR),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(clauses[0].subject, Some(0..3));
        assert_eq!(clauses[0].verb, 3);
    }

    #[test]
    fn test_determiner_and_infinitive_are_not_heads() {
        // "The walk helps him to relax"
        let terms = vec![
            t("The", TermFlags::DETERMINER),
            t("walk", TermFlags::VERB),
            t("helps", TermFlags::VERB | TermFlags::SINGULAR),
            t("him", TermFlags::empty()),
            t("to", TermFlags::PREPOSITION),
            t("relax", TermFlags::VERB),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].verb, 2);
        assert_eq!(clauses[0].subject, Some(0..2));
    }

    #[test]
    fn test_imperative_has_no_subject() {
        // "Walk to school"
        let terms = vec![
            t("Walk", TermFlags::VERB),
            t("to", TermFlags::PREPOSITION),
            t("school.", TermFlags::empty()),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(clauses, vec![Clause { subject: None, verb: 0 }]);
    }

    #[test]
    fn test_coordinated_clauses_and_verb_groups() {
        // "He does not walk, and she run"
        let terms = vec![
            t("He", he()),
            t("does", TermFlags::AUXILIARY | TermFlags::SINGULAR),
            t("not", TermFlags::NEGATION),
            t("walk,", TermFlags::VERB),
            t("and", TermFlags::CONJUNCTION),
            t("she", he()),
            t("run", TermFlags::VERB),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(
            clauses,
            vec![
                Clause { subject: Some(0..1), verb: 1 },
                Clause { subject: Some(5..6), verb: 6 },
            ]
        );
    }

    #[test]
    fn test_pronoun_wins_over_adverb_run() {
        // "Yesterday, he often walk"
        let terms = vec![
            t("Yesterday,", TermFlags::empty()),
            t("he", he()),
            t("often", TermFlags::empty()),
            t("walk", TermFlags::VERB),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(clauses[0].subject, Some(1..2));
    }

    #[test]
    fn test_pronoun_nearest_the_verb_wins() {
        // "He thinks they walk", "thinks" unknown to the verb table
        let terms = vec![
            t("He", he()),
            t("thinks", TermFlags::empty()),
            t("they", TermFlags::PRONOUN | TermFlags::PLURAL | TermFlags::THIRD_PERSON),
            t("walk", TermFlags::VERB),
        ];

        let clauses = find_clauses(&terms);
        assert_eq!(clauses, vec![Clause { subject: Some(2..3), verb: 3 }]);
    }

    #[test]
    fn test_coordinated_subject_stays_whole() {
        // "He and she walk"
        let terms = vec![
            t("He", he()),
            t("and", TermFlags::CONJUNCTION),
            t("she", he()),
            t("walk", TermFlags::VERB),
        ];
        assert_eq!(find_clauses(&terms)[0].subject, Some(0..3));

        // "It rains, and she walk": the comma keeps the clauses apart
        let terms = vec![
            t("It", he()),
            t("rains,", TermFlags::empty()),
            t("and", TermFlags::CONJUNCTION),
            t("she", he()),
            t("walk", TermFlags::VERB),
        ];
        assert_eq!(find_clauses(&terms)[0].subject, Some(3..4));
    }
}
