//! The interpretation rule table.

use repricer_core::Mutation;

/// One interpretation rule: trigger keywords, and the mutation built from
/// the command's numeric literal. Rules are evaluated in table order and
/// the first keyword hit wins; there is no partial or fuzzy matching.
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub build: fn(pct: f64) -> Mutation,
}

fn increase_all(pct: f64) -> Mutation {
    Mutation::IncreaseAll { pct }
}

fn decrease_all(pct: f64) -> Mutation {
    Mutation::DecreaseAll { pct }
}

/// Recognized intents, in priority order. Spanish triggers and their
/// English synonyms are plain entries in the same table.
pub const RULES: &[Rule] = &[
    Rule {
        name: "increase",
        keywords: &["aumenta", "incrementa", "increase", "raise"],
        build: increase_all,
    },
    Rule {
        name: "decrease",
        keywords: &["descuenta", "reduce", "decrease", "discount"],
        build: decrease_all,
    },
];
