//! Common utilities and data structures for the Rinha interpreter.
//!
//! This crate provides foundational pieces used by every other crate:
//! - `BytePos` / `Span`: offset ranges into the original source text
//! - `Location`: a span plus the name of the file it points into
//! - `ensure_sufficient_stack` / `with_stack`: stack growth for deep recursion

mod location;
mod span;
mod stack;

pub use location::Location;
pub use span::{BytePos, Span};
pub use stack::{ensure_sufficient_stack, with_stack};
