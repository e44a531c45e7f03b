pub mod argon2;
pub mod errors;
pub mod ports;

pub use argon2::Argon2PasswordVerifier;
pub use errors::PasswordError;
pub use ports::PasswordVerifier;
