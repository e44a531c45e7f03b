pub mod directory;
pub mod sessions;
