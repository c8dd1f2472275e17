pub mod manifest;
pub mod version;
