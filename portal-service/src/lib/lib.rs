pub mod config;
pub mod gate;
pub mod inbound;
pub mod outbound;
