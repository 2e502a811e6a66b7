use vakya_protocol::Report;

pub const EMPTY_SENTENCE_PROMPT: &str = "దయచేసి వాక్యం టైప్ చేయండి.";
pub const DATA_UNAVAILABLE: &str =
    "లోపం: ఫైల్స్ లోడ్ కాలేదు. ఫైల్స్ అన్నీ ఒకే ఫోల్డర్‌లో ఉన్నాయో లేదో చూడండి.";

/// Result cards in display order: spelling first, then grammar.
pub fn cards(report: &Report) -> String {
    let mut out = String::new();

    for word in &report.spelling {
        card(&mut out, &format!("స్పెల్లింగ్ తప్పు: {word}"), "ఈ పదం మీ డిక్షనరీలో లేదు.", None);
    }

    for mistake in &report.agreement {
        card(
            &mut out,
            &format!("గ్రామర్ తప్పు: {}", mistake.wrong_verb),
            &format!(
                "వివరణ (రూల్ #{}): {}",
                mistake.rule.rule_no, mistake.rule.explanation
            ),
            Some(&format!("సరైన పదం: {}", mistake.correct_verb)),
        );
    }

    if report.is_clear() {
        card(&mut out, "అద్భుతం!", "ఈ వాక్యంలో తప్పులు కనబడలేదు.", None);
    }

    out
}

fn card(out: &mut String, title: &str, explanation: &str, correction: Option<&str>) {
    out.push_str(&format!("== {title}\n   {explanation}\n"));
    if let Some(correction) = correction {
        out.push_str(&format!("   {correction}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vakya_protocol::{AgreementMistake, RuleRef};

    #[test]
    fn test_all_clear_card() {
        let text = cards(&Report::default());
        assert!(text.contains("అద్భుతం!"));
    }

    #[test]
    fn test_spelling_then_grammar() {
        let report = Report {
            spelling: vec!["scool".to_string()],
            agreement: vec![AgreementMistake {
                wrong_verb: "walk".to_string(),
                correct_verb: "walks".to_string(),
                rule: RuleRef {
                    rule_no: 5,
                    explanation: "rule text".to_string(),
                },
            }],
        };

        let text = cards(&report);
        let spelling = text.find("scool").expect("spelling card");
        let grammar = text.find("రూల్ #5): rule text").expect("grammar card");
        assert!(spelling < grammar);
        assert!(text.contains("సరైన పదం: walks"));
        assert!(!text.contains("అద్భుతం!"));
    }
}
