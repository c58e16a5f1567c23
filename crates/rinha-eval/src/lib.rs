//! Tree-walking evaluator for Rinha.
//!
//! Takes a decoded node tree and an environment and produces a value,
//! writing `print` output to a `PrintHandler` along the way.
//!
//! ```text
//! let program = rinha_json::decode_file(path)?;
//! let value = Evaluator::new().run(&program)?;
//! ```

mod config;
mod env;
mod error;
mod eval;
mod ops;
mod print;
mod print_handler;
pub mod value;

pub use config::{CallScope, EvalConfig};
pub use env::Environment;
pub use error::EvalError;
pub use eval::Evaluator;
pub use print::{format_number, render, Unprintable};
pub use print_handler::PrintHandler;
pub use value::{Closure, Pair, Value};
