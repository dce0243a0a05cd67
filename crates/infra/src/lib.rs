// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod text_source;

pub use text_source::{FileTextSource, ReaderTextSource};
