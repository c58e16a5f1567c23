//! Rendering values for `print`.

use rinha_common::ensure_sufficient_stack;
use thiserror::Error;

use crate::Value;

/// The value has no printed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot print a value of type {type_name}")]
pub struct Unprintable {
    pub type_name: &'static str,
}

/// Render a value the way `print` shows it.
///
/// Numbers use their shortest round-trip decimal form (`3`, `0.5`),
/// strings appear verbatim, booleans as `true`/`false`, and tuples as
/// `(first,second)` at any nesting depth. Functions and unit are
/// unprintable.
pub fn render(value: &Value) -> Result<String, Unprintable> {
    let mut out = String::new();
    render_into(value, &mut out)?;
    Ok(out)
}

fn render_into(value: &Value, out: &mut String) -> Result<(), Unprintable> {
    match value {
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::Text(s) => out.push_str(s),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Tuple(pair) => {
            out.push('(');
            ensure_sufficient_stack(|| render_into(&pair.0, out))?;
            out.push(',');
            ensure_sufficient_stack(|| render_into(&pair.1, out))?;
            out.push(')');
        }
        Value::Closure(_) | Value::Unit => {
            return Err(Unprintable {
                type_name: value.type_name(),
            })
        }
    }
    Ok(())
}

/// Decimal form of a number, as used by `print` and string concatenation.
/// Integral values have no fractional part: `5`, not `5.0`.
pub fn format_number(n: f64) -> String {
    n.to_string()
}
