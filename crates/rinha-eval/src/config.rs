//! Evaluator configuration.

/// Which scope a call's parameters are bound into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallScope {
    /// A copy of the caller's environment. Free variables in the body
    /// resolve against the call site, and a `let`-bound function can call
    /// itself because its name is in scope at the call.
    #[default]
    Caller,
    /// A copy of the environment the closure captured, plus the closure's
    /// own `let` name so recursion still works.
    Lexical,
}

/// Evaluator configuration.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Scope that call bodies run in.
    pub call_scope: CallScope,
    /// Grow the host stack on demand for deeply nested programs.
    pub grow_stack: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            call_scope: CallScope::Caller,
            grow_stack: true,
        }
    }
}

impl EvalConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the call scope.
    pub fn call_scope(mut self, scope: CallScope) -> Self {
        self.call_scope = scope;
        self
    }

    /// Enable or disable stack growth.
    pub fn grow_stack(mut self, grow: bool) -> Self {
        self.grow_stack = grow;
        self
    }
}
