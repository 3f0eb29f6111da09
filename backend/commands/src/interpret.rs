use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use repricer_core::Mutation;

use crate::rules::RULES;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// The first run of consecutive digits anywhere in the command, divided by
/// 100 to form a fractional percentage. If several numbers appear only the
/// first is used: "descuenta 20% a productos menores a 100" reads 20 and
/// ignores the threshold.
pub fn first_literal(command: &str) -> Option<f64> {
    DIGIT_RUN
        .find(command)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|n| n / 100.0)
}

/// Match a command against the rule table. Case-insensitive keyword
/// containment, first matching rule wins. `None` when no keyword matches,
/// or a keyword matches but the command carries no numeric literal.
pub fn interpret(command: &str) -> Option<Mutation> {
    let lowered = command.to_lowercase();
    let rule = RULES
        .iter()
        .find(|r| r.keywords.iter().any(|k| lowered.contains(k)))?;
    let pct = first_literal(&lowered)?;
    debug!("[Interpret] rule '{}' matched, pct {}", rule.name, pct);
    Some((rule.build)(pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_increase_command() {
        assert_eq!(
            interpret("aumenta todo 10%"),
            Some(Mutation::IncreaseAll { pct: 0.10 })
        );
    }

    #[test]
    fn english_synonyms_trigger_too() {
        assert_eq!(
            interpret("raise everything by 5%"),
            Some(Mutation::IncreaseAll { pct: 0.05 })
        );
        assert_eq!(
            interpret("apply a 15% discount"),
            Some(Mutation::DecreaseAll { pct: 0.15 })
        );
    }

    #[test]
    fn only_the_first_literal_counts() {
        // The trailing threshold is ignored; there is no conditional support
        // in the recognized grammar.
        assert_eq!(
            interpret("descuenta 20% a productos menores a 100"),
            Some(Mutation::DecreaseAll { pct: 0.20 })
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            interpret("AUMENTA TODO 10%"),
            Some(Mutation::IncreaseAll { pct: 0.10 })
        );
    }

    #[test]
    fn increase_outranks_decrease() {
        assert_eq!(
            interpret("aumenta 10% y descuenta 20%"),
            Some(Mutation::IncreaseAll { pct: 0.10 })
        );
    }

    #[test]
    fn unknown_text_is_unrecognized() {
        assert_eq!(interpret("hola"), None);
    }

    #[test]
    fn keyword_without_a_number_is_unrecognized() {
        assert_eq!(interpret("aumenta todo"), None);
    }

    #[test]
    fn first_literal_reads_leading_digit_run() {
        assert_eq!(first_literal("sube 25% ya"), Some(0.25));
        assert_eq!(first_literal("sin numeros"), None);
    }
}
