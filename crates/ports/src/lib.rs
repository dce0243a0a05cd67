//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`text_source`]: where the text to analyze comes from
//!
//! The domain crate never sees these; the binary wires an adapter from
//! `text_stats_infra` to the analyzer.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod text_source;

pub use text_source::TextSource;
