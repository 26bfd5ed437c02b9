//! Password hashing
//!
//! Two independent representations of a password: a fast SHA-256 digest and
//! a slow salted bcrypt hash.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Work factor used by [`salted_hash`].
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Both hash representations of one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    /// Lowercase hex SHA-256, 64 characters.
    pub digest: String,
    /// bcrypt token embedding algorithm, cost, salt and hash.
    pub salted: String,
}

/// Returns the lowercase hex SHA-256 digest of the password bytes.
pub fn digest(password: &SecretString) -> String {
    let hash = Sha256::digest(password.expose_secret().as_bytes());
    hex::encode(hash)
}

/// Hashes the password with bcrypt at [`DEFAULT_COST`] and a fresh random salt.
///
/// The returned token looks like `$2b$12$<salt><hash>` and can be checked
/// with [`verify_salted_hash`].
pub fn salted_hash(password: &SecretString) -> Result<String, HashError> {
    salted_hash_with_cost(password, DEFAULT_COST)
}

/// Same as [`salted_hash`] with an explicit work factor.
///
/// # Errors
///
/// Returns error if `cost` is outside the range bcrypt accepts (4..=31)
/// or the salt cannot be generated.
pub fn salted_hash_with_cost(password: &SecretString, cost: u32) -> Result<String, HashError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(cost, "computing bcrypt hash");

    match bcrypt::hash(password.expose_secret(), cost) {
        Ok(token) => Ok(token),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("bcrypt hashing FAILED: {}", e);
            Err(e.into())
        }
    }
}

/// Checks a password against a bcrypt token using its embedded salt and cost.
///
/// # Errors
///
/// Returns error if the token is malformed.
pub fn verify_salted_hash(password: &SecretString, token: &str) -> Result<bool, HashError> {
    Ok(bcrypt::verify(password.expose_secret(), token)?)
}

/// Computes the digest and the salted hash.
pub fn hash_password(password: &SecretString) -> Result<HashResult, HashError> {
    Ok(HashResult {
        digest: digest(password),
        salted: salted_hash(password)?,
    })
}
