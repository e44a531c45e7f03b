pub mod denied;
pub mod handlers;
pub mod middleware;
pub mod router;
