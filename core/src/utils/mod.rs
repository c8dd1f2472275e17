pub mod checksum;
pub mod download;
pub mod errors;
pub mod zip;
