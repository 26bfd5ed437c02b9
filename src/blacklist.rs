//! Common password list
//!
//! Holds the denylist of easily guessed passwords and exposes it through the
//! [`CommonPasswords`] membership check.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Entries of the list shipped with the crate.
pub const BUILTIN_COMMON_PASSWORDS: &[&str] =
    &["123456", "password", "admin", "qwerty", "123123", "hello"];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive membership check against a list of common passwords.
pub trait CommonPasswords {
    /// Returns `true` if the lowercase form of `password` is in the list.
    fn is_common(&self, password: &str) -> bool;
}

/// Set of lowercase common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Returns the built-in list.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_COMMON_PASSWORDS.iter().copied())
    }

    /// Builds a list from arbitrary entries, lowercasing each one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a list from a file with one password per line.
    ///
    /// Lines are trimmed and lowercased, blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::from_entries(content.lines());

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", list.len(), path);

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonPasswords for Blacklist {
    fn is_common(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}
