use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password used to build the decoy hash burned when an account is unknown.
const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Argon2id password hasher.
///
/// Hashes are PHC strings carrying algorithm, parameters and a random salt,
/// so two hashes of the same password never compare equal as strings.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy_hash: Option<String>,
}

impl PasswordHasher {
    /// Create a hasher with the Argon2id default parameters.
    ///
    /// The decoy hash is built here so that every later unknown-account
    /// check costs exactly one verification.
    pub fn new() -> Self {
        let mut hasher = Self {
            argon2: Argon2::default(),
            decoy_hash: None,
        };
        hasher.decoy_hash = hasher.hash(DECOY_PASSWORD).ok();

        hasher
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// The digest comparison inside Argon2 runs in constant time.
    ///
    /// # Returns
    /// True only on an exact match
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a parseable PHC string
    /// * `VerificationFailed` - Argon2 failed for a reason other than a mismatch
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }

    /// Spend one verification on a decoy hash and report a mismatch.
    ///
    /// Callers use this when the account does not exist so that an unknown
    /// email costs the same as a wrong password.
    ///
    /// # Errors
    /// * `HashingFailed` - Decoy hash was never built
    pub fn verify_decoy(&self, password: &str) -> Result<bool, PasswordError> {
        let decoy = self.decoy_hash.as_deref().ok_or_else(|| {
            PasswordError::HashingFailed("decoy hash unavailable".to_string())
        })?;

        // The result is irrelevant; only the elapsed work matters.
        let _ = self.verify(password, decoy);
        Ok(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correct horse").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher
            .verify("correct horse", &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("correct horsf", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("pw").expect("Failed to hash password");
        let second = hasher.hash("pw").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("pw", &first).unwrap());
        assert!(hasher.verify("pw", &second).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_decoy_built_with_hasher() {
        let hasher = PasswordHasher::new();
        let decoy = hasher.decoy_hash.as_deref().expect("Decoy hash missing");

        assert!(decoy.starts_with("$argon2id$"));
        assert!(hasher.verify(DECOY_PASSWORD, decoy).unwrap());
    }

    #[test]
    fn test_decoy_never_matches() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_decoy(DECOY_PASSWORD).unwrap());
        assert!(!hasher.verify_decoy("anything").unwrap());
    }
}
