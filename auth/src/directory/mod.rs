pub mod errors;
pub mod memory;
pub mod models;
pub mod ports;

pub use errors::DirectoryError;
pub use memory::InMemoryDirectory;
pub use models::UserDetails;
pub use ports::PrincipalDirectory;
