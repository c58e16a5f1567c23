//! Runtime values.

use std::fmt;
use std::rc::Rc;

use rinha_common::Location;
use rinha_syntax::{Ident, Node};

use crate::Environment;

/// A runtime value.
///
/// Values are immutable. Composite values share their parts through `Rc`,
/// so cloning a value is cheap.
#[derive(Clone)]
pub enum Value {
    /// Every number is a 64-bit float
    Number(f64),
    /// String value
    Text(Rc<str>),
    /// Boolean value
    Boolean(bool),
    /// Pair value
    Tuple(Rc<Pair>),
    /// Function value
    Closure(Rc<Closure>),
    /// Result of `print`
    Unit,
}

/// The two halves of a tuple.
///
/// Dropping walks nested pairs with a worklist, so a long chain of tuples
/// (a list built from pairs) does not recurse once per element.
#[derive(PartialEq)]
pub struct Pair(pub Value, pub Value);

impl Drop for Pair {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_tuple(&mut self.0, &mut pending);
        take_tuple(&mut self.1, &mut pending);
        while let Some(mut pair) = pending.pop() {
            take_tuple(&mut pair.0, &mut pending);
            take_tuple(&mut pair.1, &mut pending);
        }
    }
}

/// Move a uniquely owned nested pair out of `value` onto `pending`.
/// Shared pairs are only decremented.
fn take_tuple(value: &mut Value, pending: &mut Vec<Pair>) {
    if let Value::Tuple(_) = value {
        if let Value::Tuple(pair) = std::mem::replace(value, Value::Unit) {
            if let Some(pair) = Rc::into_inner(pair) {
                pending.push(pair);
            }
        }
    }
}

/// A function value: parameters, body, and the environment it was created in.
#[derive(Clone)]
pub struct Closure {
    pub parameters: Rc<[Ident]>,
    pub body: Rc<Node>,
    /// Snapshot of the defining scope. Later bindings in that scope are
    /// not visible here.
    pub env: Environment,
    /// Name of the `let` that bound this closure, if any.
    pub name: Option<String>,
    /// Location of the `Function` node this closure was built from.
    pub location: Location,
}

impl Closure {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Copy of this closure carrying `name`.
    pub fn named(&self, name: impl Into<String>) -> Closure {
        Closure {
            name: Some(name.into()),
            ..self.clone()
        }
    }

    /// Name used in messages.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl Value {
    pub fn text(s: impl Into<Rc<str>>) -> Value {
        Value::Text(s.into())
    }

    pub fn tuple(first: Value, second: Value) -> Value {
        Value::Tuple(Rc::new(Pair(first, second)))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    pub fn is_closure(&self) -> bool {
        matches!(self, Value::Closure(_))
    }

    /// Name of the value's runtime type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Tuple(_) => "tuple",
            Value::Closure(_) => "function",
            Value::Unit => "unit",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Tuple(pair) => write!(f, "({:?}, {:?})", pair.0, pair.1),
            Value::Closure(c) => write!(f, "<closure {}/{}>", c.display_name(), c.arity()),
            Value::Unit => write!(f, "()"),
        }
    }
}

/// Structural equality for tests and assertions. Closures never compare
/// equal. This is not the language's `==`, which lives in the evaluator.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            _ => false,
        }
    }
}
