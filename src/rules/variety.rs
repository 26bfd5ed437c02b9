//! Character variety rules - case mix, digits and symbols.

use super::{Rule, RuleOutcome};
use secrecy::{ExposeSecret, SecretString};

pub const NO_CASE_MIX: &str = "Use a mix of uppercase and lowercase letters.";
pub const NO_DIGIT: &str = "Add numbers to increase complexity.";
pub const NO_SYMBOL: &str = "Add symbols like ! @ # $ % ^ & *.";

/// Requires both an ASCII uppercase and an ASCII lowercase letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseMixRule;

impl Rule for CaseMixRule {
    fn name(&self) -> &'static str {
        "case_mix"
    }

    fn evaluate(&self, password: &SecretString) -> RuleOutcome {
        let pwd = password.expose_secret();
        let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

        if has_upper && has_lower {
            RuleOutcome::pass(1)
        } else {
            RuleOutcome::fail(NO_CASE_MIX)
        }
    }
}

/// Requires an ASCII digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitRule;

impl Rule for DigitRule {
    fn name(&self) -> &'static str {
        "digit"
    }

    fn evaluate(&self, password: &SecretString) -> RuleOutcome {
        if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
            RuleOutcome::pass(1)
        } else {
            RuleOutcome::fail(NO_DIGIT)
        }
    }
}

/// Requires a symbol: any character that is not alphanumeric.
///
/// Underscore and whitespace count as symbols. Anything Unicode marks as
/// alphabetic is not a symbol, including combining marks such as `U+093E`
/// (Devanagari vowel sign AA) that are not letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolRule;

impl Rule for SymbolRule {
    fn name(&self) -> &'static str {
        "symbol"
    }

    fn evaluate(&self, password: &SecretString) -> RuleOutcome {
        if password.expose_secret().chars().any(|c| !c.is_alphanumeric()) {
            RuleOutcome::pass(1)
        } else {
            RuleOutcome::fail(NO_SYMBOL)
        }
    }
}
