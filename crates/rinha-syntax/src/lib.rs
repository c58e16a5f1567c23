//! AST definitions for Rinha.
//!
//! The tree is produced by an external front end and decoded from JSON by
//! `rinha-json`. Nothing in this crate parses text.

mod node;

pub use node::*;
