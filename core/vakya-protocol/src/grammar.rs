//! Fixed parameters of the one agreement rule the checker knows.

/// Number of the third-person-singular agreement rule in the rule table.
pub const AGREEMENT_RULE_NO: u32 = 5;

/// Verb-table label holding the form rule 5 requires (whitespace-collapsed).
pub const THIRD_PERSON_SINGULAR_LABEL: &str = "3rd Person Singular (he/she/it) (V5)";

/// Subjects that trigger rule 5, lowercase.
pub const SINGULAR_SUBJECTS: [&str; 3] = ["he", "she", "it"];

/// Explanation used when the rule table has nothing for rule 5.
pub const FALLBACK_EXPLANATION: &str = "ఏకవచన కర్తతో ఏకవచన క్రియ వాడాలి.";

/// Field of a rule-table value carrying its explanation.
pub const EXPLANATION_FIELD: &str = "TeluguRule";

/// Field of a rule-table value carrying its embedded number.
pub const RULE_NO_FIELD: &str = "Rule No";

pub fn is_singular_subject(lowercased: &str) -> bool {
    SINGULAR_SUBJECTS.contains(&lowercased)
}
