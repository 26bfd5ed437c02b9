//! Common password rule - checks the password against the denylist.

use super::{Rule, RuleOutcome};
use crate::blacklist::CommonPasswords;
use secrecy::{ExposeSecret, SecretString};

pub const COMMON: &str = "This password is very common and easily guessed.";

/// Awards a point when the password is not in the common password list.
pub struct CommonPasswordRule {
    list: Box<dyn CommonPasswords>,
}

impl CommonPasswordRule {
    pub fn new(list: impl CommonPasswords + 'static) -> Self {
        Self {
            list: Box::new(list),
        }
    }
}

impl Rule for CommonPasswordRule {
    fn name(&self) -> &'static str {
        "common"
    }

    fn evaluate(&self, password: &SecretString) -> RuleOutcome {
        if self.list.is_common(password.expose_secret()) {
            RuleOutcome::fail(COMMON)
        } else {
            RuleOutcome::pass(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_common_rule_common_password() {
        let rule = CommonPasswordRule::new(Blacklist::builtin());
        assert_eq!(rule.evaluate(&secret("password")), RuleOutcome::fail(COMMON));
        assert_eq!(rule.evaluate(&secret("Hello")), RuleOutcome::fail(COMMON));
    }

    #[test]
    fn test_common_rule_strong_password() {
        let rule = CommonPasswordRule::new(Blacklist::builtin());
        let result = rule.evaluate(&secret("CorrectHorseBatteryStaple!123"));
        assert_eq!(result, RuleOutcome::pass(1));
    }

    #[test]
    fn test_common_rule_custom_list() {
        struct Everything;

        impl CommonPasswords for Everything {
            fn is_common(&self, _password: &str) -> bool {
                true
            }
        }

        let rule = CommonPasswordRule::new(Everything);
        assert_eq!(rule.evaluate(&secret("xK#9!vQ2")), RuleOutcome::fail(COMMON));
    }
}
