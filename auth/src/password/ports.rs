use super::errors::PasswordError;

/// One-way credential encoding and comparison.
pub trait PasswordVerifier: Send + Sync + 'static {
    /// Encode a raw secret for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Encoding operation failed
    fn encode(&self, raw_password: &str) -> Result<String, PasswordError>;

    /// Test a raw secret against an encoded one.
    ///
    /// Malformed encoded input is a mismatch, never an error.
    fn matches(&self, raw_password: &str, encoded_password: &str) -> bool;
}
