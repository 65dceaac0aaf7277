//! Argon2id password hashing and verification.
//!
//! Hashes are stored as PHC strings (algorithm, parameters, salt and digest in
//! one value), so a change of cost parameters does not invalidate existing
//! hashes.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use serde_json::json;

use crate::error::AppError;

/// One-way password hasher with a tunable cost factor.
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Creates a hasher with the given memory cost (KiB) and iteration count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the parameters are outside the ranges
    /// Argon2 accepts.
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .map_err(|e| {
                AppError::internal(
                    "Invalid password hashing parameters",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails.
    pub fn hash(&self, plaintext: &str) -> Result<Vec<u8>, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AppError::internal("Failed to hash password", json!({}))
            })?;

        Ok(hash.to_string().into_bytes())
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored hash is not a valid PHC string.
    pub fn verify(&self, hash: &[u8], plaintext: &str) -> Result<bool, AppError> {
        let stored_hash_error = || AppError::internal("Stored password hash is corrupt", json!({}));

        let encoded = std::str::from_utf8(hash).map_err(|_| stored_hash_error())?;
        let parsed = PasswordHash::new(encoded).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse stored password hash");
            stored_hash_error()
        })?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => {
                tracing::error!(error = %e, "Password verification failed");
                Err(AppError::internal("Failed to verify password", json!({})))
            }
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}
