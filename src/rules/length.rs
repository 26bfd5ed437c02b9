//! Length rule - rewards longer passwords.

use super::{Rule, RuleOutcome};
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

pub const TOO_SHORT: &str = "Password is too short (use 12+ characters).";

/// Scores the password length in characters.
///
/// # Returns
/// - 2 points for `RECOMMENDED_LENGTH` or more
/// - 1 point for at least `MIN_LENGTH`
/// - 0 points and an issue otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthRule;

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn evaluate(&self, password: &SecretString) -> RuleOutcome {
        let len = password.expose_secret().chars().count();
        if len >= RECOMMENDED_LENGTH {
            RuleOutcome::pass(2)
        } else if len >= MIN_LENGTH {
            RuleOutcome::pass(1)
        } else {
            RuleOutcome::fail(TOO_SHORT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(pwd: &str) -> RuleOutcome {
        LengthRule.evaluate(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_length_rule_too_short() {
        assert_eq!(eval("Short1!"), RuleOutcome::fail(TOO_SHORT));
        assert_eq!(eval(""), RuleOutcome::fail(TOO_SHORT));
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        assert_eq!(eval("12345678"), RuleOutcome::pass(1));
    }

    #[test]
    fn test_length_rule_just_below_recommended() {
        assert_eq!(eval("12345678901"), RuleOutcome::pass(1));
    }

    #[test]
    fn test_length_rule_recommended() {
        assert_eq!(eval("123456789012"), RuleOutcome::pass(2));
        assert_eq!(eval("LongEnough123!"), RuleOutcome::pass(2));
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        assert_eq!(eval("ééééééé"), RuleOutcome::fail(TOO_SHORT));
        // 8 chars
        assert_eq!(eval("éééééééé"), RuleOutcome::pass(1));
    }
}
