//! Runtime configuration.

use std::path::PathBuf;

use crate::blacklist::{Blacklist, BlacklistError};

/// Environment variable naming a custom common password file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// File to load the common password list from. `None` keeps the
    /// built-in list.
    pub blacklist_path: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// An unset or empty `PWD_BLACKLIST_PATH` leaves `blacklist_path` unset.
    pub fn from_env() -> Self {
        let blacklist_path = std::env::var_os(BLACKLIST_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { blacklist_path }
    }

    /// Loads the configured common password list.
    pub fn load_blacklist(&self) -> Result<Blacklist, BlacklistError> {
        match &self.blacklist_path {
            Some(path) => Blacklist::from_path(path),
            None => Ok(Blacklist::builtin()),
        }
    }
}
