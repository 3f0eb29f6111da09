//! Command interpretation: free-text chat input in, a concrete `Mutation`
//! out. A minimal rule-based stand-in for a richer natural-language
//! translator; the rule table is the extension point.

pub mod interpret;
pub mod rules;

pub use interpret::{first_literal, interpret};
pub use rules::{Rule, RULES};
