pub mod errors;
pub mod memory;
pub mod models;
pub mod ports;

pub use errors::SessionError;
pub use memory::CookieOptions;
pub use memory::MemorySessionStore;
pub use models::Session;
pub use ports::SessionStore;
