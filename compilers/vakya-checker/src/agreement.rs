use vakya_lexicon::{RuleTable, VerbIndex};
use vakya_protocol::{
    is_singular_subject, AgreementMistake, LinguisticAnnotator, AGREEMENT_RULE_NO,
    THIRD_PERSON_SINGULAR_LABEL,
};

/// Applies rule 5: he/she/it takes the third-person-singular verb form.
#[derive(Debug, Clone, Copy)]
pub struct AgreementChecker<'a> {
    verbs: &'a VerbIndex,
    rules: &'a RuleTable,
}

impl<'a> AgreementChecker<'a> {
    pub fn new(verbs: &'a VerbIndex, rules: &'a RuleTable) -> Self {
        Self { verbs, rules }
    }

    pub fn check<A>(&self, sentence: &str, annotator: &A) -> Vec<AgreementMistake>
    where
        A: LinguisticAnnotator + ?Sized,
    {
        check_agreement(sentence, annotator, self.verbs, self.rules)
    }
}

/// Checks the first subject/verb pair of `sentence`. Yields at most one mistake.
///
/// Missing subjects, verbs, base forms or conjugations mean the rule does not
/// apply; none of them is an error.
pub fn check_agreement<A>(
    sentence: &str,
    annotator: &A,
    verbs: &VerbIndex,
    rules: &RuleTable,
) -> Vec<AgreementMistake>
where
    A: LinguisticAnnotator + ?Sized,
{
    let mut mistakes = Vec::new();

    let subjects = annotator.subjects(sentence);
    let verb_phrases = annotator.verbs(sentence);
    let (Some(subject), Some(verb_text)) = (subjects.first(), verb_phrases.first()) else {
        tracing::debug!("rule {AGREEMENT_RULE_NO} not applicable: no subject/verb pair");
        return mistakes;
    };

    let subject = subject.to_lowercase();
    if !is_singular_subject(&subject) {
        return mistakes;
    }

    let infinitives = annotator.infinitives(sentence);
    let Some(base_verb) = infinitives.first() else {
        return mistakes;
    };

    // Only a he/she/it subject with a tabled verb is covered
    let Some(correct_verb) = verbs.inflect(base_verb, THIRD_PERSON_SINGULAR_LABEL) else {
        tracing::debug!(
            base_verb = %base_verb,
            "rule {AGREEMENT_RULE_NO} skipped: verb or its singular form not in table"
        );
        return mistakes;
    };

    if verb_text.to_lowercase() != correct_verb.to_lowercase() {
        tracing::debug!(
            subject = %subject,
            wrong = %verb_text,
            correct = %correct_verb,
            "agreement mismatch"
        );
        mistakes.push(AgreementMistake {
            wrong_verb: verb_text.to_string(),
            correct_verb: correct_verb.to_string(),
            rule: rules.explain(AGREEMENT_RULE_NO).into(),
        });
    }

    mistakes
}
