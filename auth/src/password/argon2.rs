use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::SaltString;
use argon2::password_hash::{self};
use argon2::Argon2;

use super::errors::PasswordError;
use super::ports::PasswordVerifier;

/// Argon2id password verifier.
///
/// Encoded credentials are PHC strings carrying algorithm, parameters and salt.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordVerifier;

impl Argon2PasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify a password against a stored hash, reporting malformed hashes.
    ///
    /// # Arguments
    /// * `raw_password` - Plaintext password to verify
    /// * `encoded_password` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid or verification failed
    pub fn verify(&self, raw_password: &str, encoded_password: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(encoded_password).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match password_hash::PasswordVerifier::verify_password(
            &Argon2::default(),
            raw_password.as_bytes(),
            &parsed_hash,
        ) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl PasswordVerifier for Argon2PasswordVerifier {
    fn encode(&self, raw_password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(raw_password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool {
        match self.verify(raw_password, encoded_password) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!(error = %e, "Stored credential could not be verified");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_match() {
        let verifier = Argon2PasswordVerifier::new();
        let password = "my_secure_password";

        let encoded = verifier.encode(password).expect("Failed to encode password");

        assert!(encoded.starts_with("$argon2id$"));
        assert!(verifier.matches(password, &encoded));
        assert!(!verifier.matches("wrong_password", &encoded));
    }

    #[test]
    fn test_encode_salts_each_call() {
        let verifier = Argon2PasswordVerifier::new();

        let first = verifier.encode("secret").expect("Failed to encode password");
        let second = verifier.encode("secret").expect("Failed to encode password");

        assert_ne!(first, second);
        assert!(verifier.matches("secret", &first));
        assert!(verifier.matches("secret", &second));
    }

    #[test]
    fn test_matches_malformed_hash_is_false() {
        let verifier = Argon2PasswordVerifier::new();

        assert!(!verifier.matches("password", "invalid_hash"));
        assert!(!verifier.matches("password", ""));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let verifier = Argon2PasswordVerifier::new();
        let result = verifier.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
