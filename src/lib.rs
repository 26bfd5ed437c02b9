//! Password hashing and strength analysis library
//!
//! Computes a fast SHA-256 digest and a slow salted bcrypt hash of a
//! password, and scores its strength with a fixed set of heuristic rules.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the interactive `pwd-defense` binary
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Optional file replacing the built-in common
//!   password list (see [`Config`])
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_defense::{check_strength, digest, salted_hash};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3XYZ".to_string().into());
//!
//! println!("SHA-256: {}", digest(&password));
//! println!("bcrypt: {}", salted_hash(&password).expect("bcrypt failed"));
//!
//! let report = check_strength(&password);
//! println!("Strength: {} ({})", report.strength, report.score);
//! for issue in &report.issues {
//!     println!(" - {}", issue);
//! }
//! ```

// Internal modules
mod blacklist;
mod config;
mod evaluator;
mod hasher;
mod report;
mod rules;

// Public API
pub use blacklist::{BUILTIN_COMMON_PASSWORDS, Blacklist, BlacklistError, CommonPasswords};
pub use config::{BLACKLIST_PATH_ENV, Config};
pub use evaluator::{StrengthAnalyzer, check_strength};
pub use hasher::{
    DEFAULT_COST, HashError, HashResult, digest, hash_password, salted_hash,
    salted_hash_with_cost, verify_salted_hash,
};
pub use report::{PasswordStrength, StrengthReport};
pub use rules::{
    CaseMixRule, CommonPasswordRule, DigitRule, LengthRule, Rule, RuleOutcome, SymbolRule,
};
