//! Evaluation environment.

use std::collections::HashMap;
use std::rc::Rc;

use crate::Value;

/// A flat name → value scope.
///
/// There is no parent chain. Entering a `let` body or a call takes a full
/// copy of the enclosing scope (`extend`), so bindings made inside never
/// leak back out and shadowing is an overwrite in the copy. The map sits
/// behind an `Rc` and is only duplicated on the first write to a copy.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: Rc<HashMap<String, Value>>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new environment holding every binding of `base`.
    pub fn extend(base: &Environment) -> Self {
        base.clone()
    }

    /// Look up a name in this environment.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Insert or overwrite a binding, returning the stored value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Value {
        Rc::make_mut(&mut self.bindings).insert(name.into(), value.clone());
        value
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut env = Environment::new();
        let stored = env.set("x", Value::Number(1.0));
        assert_eq!(stored, Value::Number(1.0));
        assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
        assert!(env.get("y").is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut env = Environment::new();
        env.set("x", Value::Number(1.0));
        env.set("x", Value::text("one"));
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("x"), Some(&Value::text("one")));
    }

    #[test]
    fn test_extend_is_isolated_both_ways() {
        let mut base = Environment::new();
        base.set("x", Value::Number(1.0));

        let mut child = Environment::extend(&base);
        assert_eq!(child.get("x"), Some(&Value::Number(1.0)));

        child.set("x", Value::Number(2.0));
        child.set("y", Value::Boolean(true));
        assert_eq!(base.get("x"), Some(&Value::Number(1.0)));
        assert!(!base.contains("y"));

        base.set("z", Value::Unit);
        assert!(!child.contains("z"));
    }
}
