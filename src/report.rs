//! Strength report types.

use std::fmt;

/// Categorical rating derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Maps a total score onto a rating.
    ///
    /// - `6` and above: `Strong`
    /// - `3..6`: `Moderate`
    /// - below `3`: `Weak`
    pub fn from_score(score: u8) -> Self {
        match score {
            6.. => PasswordStrength::Strong,
            3..=5 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub strength: PasswordStrength,
    pub score: u8,
    /// One entry per failed rule, in rule order.
    pub issues: Vec<String>,
}
