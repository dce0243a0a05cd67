// crates/infra/src/persistence.rs
pub mod file_reader;

pub use file_reader::{FileReader, decode_utf8};
