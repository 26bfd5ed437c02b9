//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::blacklist::{Blacklist, CommonPasswords};
use crate::report::{PasswordStrength, StrengthReport};
use crate::rules::{CaseMixRule, CommonPasswordRule, DigitRule, LengthRule, Rule, SymbolRule};

/// Runs an ordered list of rules over a password.
pub struct StrengthAnalyzer {
    rules: Vec<Box<dyn Rule>>,
}

impl StrengthAnalyzer {
    /// Creates an analyzer with the default rule set, checking common
    /// passwords against `common`.
    pub fn new(common: impl CommonPasswords + 'static) -> Self {
        Self::with_rules(vec![
            Box::new(LengthRule),
            Box::new(CaseMixRule),
            Box::new(DigitRule),
            Box::new(SymbolRule),
            Box::new(CommonPasswordRule::new(common)),
        ])
    }

    /// Creates an analyzer running `rules` in the given order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Evaluates password strength and returns a report.
    ///
    /// Every rule runs, in order. Points are summed into the score and
    /// each failed rule adds its issue.
    pub fn check_strength(&self, password: &SecretString) -> StrengthReport {
        let mut score: u8 = 0;
        let mut issues = Vec::new();

        for rule in &self.rules {
            let outcome = rule.evaluate(password);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                rule = rule.name(),
                points = outcome.points,
                passed = outcome.issue.is_none(),
                "rule evaluated"
            );

            score = score.saturating_add(outcome.points);
            if let Some(issue) = outcome.issue {
                issues.push(issue);
            }
        }

        StrengthReport {
            strength: PasswordStrength::from_score(score),
            score,
            issues,
        }
    }
}

impl Default for StrengthAnalyzer {
    fn default() -> Self {
        Self::new(Blacklist::builtin())
    }
}

/// Evaluates password strength with the built-in common password list.
pub fn check_strength(password: &SecretString) -> StrengthReport {
    StrengthAnalyzer::default().check_strength(password)
}
