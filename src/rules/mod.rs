//! Password strength rules
//!
//! Each rule checks a single aspect of the password and contributes points
//! to the score, or an issue when the check fails.

mod common;
mod length;
mod variety;

pub use common::CommonPasswordRule;
pub use length::LengthRule;
pub use variety::{CaseMixRule, DigitRule, SymbolRule};

use secrecy::SecretString;

/// Result of a single rule evaluation.
/// - `points` - Contribution to the total score
/// - `issue` - Reason the check failed, if it did
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub points: u8,
    pub issue: Option<String>,
}

impl RuleOutcome {
    pub fn pass(points: u8) -> Self {
        Self { points, issue: None }
    }

    pub fn fail(issue: impl Into<String>) -> Self {
        Self {
            points: 0,
            issue: Some(issue.into()),
        }
    }
}

/// A single strength check.
pub trait Rule {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, password: &SecretString) -> RuleOutcome;
}
