pub mod access;
pub mod denied;
pub mod errors;
pub mod models;
pub mod path;

pub use access::AccessGate;
pub use access::DEFAULT_SESSION_NAME;
pub use denied::AccessDeniedHandler;
pub use errors::GateError;
pub use models::Decision;
pub use models::Principal;
pub use models::AUTHENTICATED_PRINCIPAL;
pub use path::clean_path;
pub use path::SecuredUrls;
