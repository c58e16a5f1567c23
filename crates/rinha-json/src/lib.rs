//! Decoder for the Rinha JSON AST format.
//!
//! The front end that parses `.rinha` source emits a JSON document:
//!
//! ```json
//! { "name": "fib.rinha",
//!   "expression": { "kind": "Print", "value": { ... }, "location": { ... } },
//!   "location": { "start": 0, "end": 45, "filename": "fib.rinha" } }
//! ```
//!
//! This crate turns that document into the `rinha_syntax` node tree. A node
//! missing a required child is rejected here, so the evaluator can assume a
//! structurally complete tree.

mod decode;
mod error;
mod path;

pub use decode::{decode_file, decode_str, decode_term};
pub use error::DecodeError;
