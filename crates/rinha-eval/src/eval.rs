//! The tree-walking evaluator.

use std::rc::Rc;

use rinha_common::ensure_sufficient_stack;
use rinha_syntax::{Node, NodeKind, Program};
use tracing::{debug, trace};

use crate::config::{CallScope, EvalConfig};
use crate::print::render;
use crate::{ops, Closure, Environment, EvalError, PrintHandler, Value};

/// Evaluates nodes depth-first, strictly left to right.
///
/// All scope state lives in the `Environment` passed to `evaluate`; the
/// evaluator itself only holds configuration and the `print` sink, so one
/// instance can run any number of programs.
pub struct Evaluator {
    config: EvalConfig,
    output: PrintHandler,
}

impl Evaluator {
    /// Evaluator with default configuration, printing to stdout.
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            config,
            output: PrintHandler::stdout(),
        }
    }

    pub fn with_output(mut self, output: PrintHandler) -> Self {
        self.output = output;
        self
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn output(&self) -> &PrintHandler {
        &self.output
    }

    /// Evaluate a whole program in a fresh global environment.
    ///
    /// Output is flushed whether or not evaluation faulted, so everything
    /// printed before a fault is kept.
    #[tracing::instrument(level = "debug", skip_all, fields(program = %program.name))]
    pub fn run(&self, program: &Program) -> Result<Value, EvalError> {
        let globals = Environment::new();
        let result = self.evaluate(&program.expression, &globals);
        let flushed = self.output.flush();
        match &result {
            Ok(value) => debug!(result = ?value, "evaluation finished"),
            Err(err) => debug!(error = %err, code = err.code().as_str(), "evaluation aborted"),
        }
        let value = result?;
        flushed?;
        Ok(value)
    }

    /// Evaluate `node` in `env`.
    pub fn evaluate(&self, node: &Node, env: &Environment) -> Result<Value, EvalError> {
        if self.config.grow_stack {
            ensure_sufficient_stack(|| self.eval_node(node, env))
        } else {
            self.eval_node(node, env)
        }
    }

    fn eval_node(&self, node: &Node, env: &Environment) -> Result<Value, EvalError> {
        match &node.kind {
            NodeKind::Int(n) => Ok(Value::Number(*n)),
            NodeKind::Str(s) => Ok(Value::text(s.as_str())),
            NodeKind::Bool(b) => Ok(Value::Boolean(*b)),

            NodeKind::Var(name) => env.get(name).cloned().ok_or_else(|| EvalError::UnboundVariable {
                name: name.clone(),
                location: node.location.clone(),
            }),

            NodeKind::Let { name, value, next } => {
                let mut value = self.evaluate(value, env)?;
                if let Value::Closure(closure) = &value {
                    if closure.name.is_none() {
                        value = Value::Closure(Rc::new(closure.named(name.name.as_str())));
                    }
                }
                trace!(name = %name.name, kind = value.type_name(), "let");
                let mut scope = Environment::extend(env);
                scope.set(name.name.as_str(), value);
                self.evaluate(next, &scope)
            }

            NodeKind::Function { parameters, body } => Ok(Value::Closure(Rc::new(Closure {
                parameters: Rc::clone(parameters),
                body: Rc::clone(body),
                env: Environment::extend(env),
                name: None,
                location: node.location.clone(),
            }))),

            NodeKind::Call { callee, arguments } => {
                let closure = match self.evaluate(callee, env)? {
                    Value::Closure(closure) => closure,
                    other => {
                        return Err(EvalError::NotCallable {
                            found: other.type_name(),
                            location: callee.location.clone(),
                        })
                    }
                };
                let args = arguments
                    .iter()
                    .map(|arg| self.evaluate(arg, env))
                    .collect::<Result<Vec<_>, _>>()?;
                // Extra arguments are rejected just like missing ones.
                if args.len() != closure.arity() {
                    return Err(EvalError::ArityMismatch {
                        function: closure.display_name().to_string(),
                        expected: closure.arity(),
                        received: args.len(),
                        location: node.location.clone(),
                        defined_at: closure.location.clone(),
                    });
                }
                self.call(&closure, args, env)
            }

            NodeKind::If {
                condition,
                then,
                otherwise,
            } => match self.evaluate(condition, env)? {
                Value::Boolean(true) => self.evaluate(then, env),
                Value::Boolean(false) => self.evaluate(otherwise, env),
                other => Err(EvalError::mismatch(
                    format!("`if` condition must be a boolean, found {}", other.type_name()),
                    &condition.location,
                )),
            },

            NodeKind::Binary { op, lhs, rhs } => {
                // Both sides always run, even for `&&` and `||`.
                let lhs = self.evaluate(lhs, env)?;
                let rhs = self.evaluate(rhs, env)?;
                ops::binary(*op, &lhs, &rhs, &node.location)
            }

            NodeKind::Tuple { first, second } => {
                let first = self.evaluate(first, env)?;
                let second = self.evaluate(second, env)?;
                Ok(Value::tuple(first, second))
            }

            NodeKind::First(value) => match self.evaluate(value, env)? {
                Value::Tuple(pair) => Ok(pair.0.clone()),
                other => Err(EvalError::mismatch(
                    format!("`first` expects a tuple, found {}", other.type_name()),
                    &value.location,
                )),
            },

            NodeKind::Second(value) => match self.evaluate(value, env)? {
                Value::Tuple(pair) => Ok(pair.1.clone()),
                other => Err(EvalError::mismatch(
                    format!("`second` expects a tuple, found {}", other.type_name()),
                    &value.location,
                )),
            },

            NodeKind::Print(value) => {
                let printed = self.evaluate(value, env)?;
                let text = render(&printed).map_err(|e| EvalError::mismatch(e.to_string(), &value.location))?;
                self.output.print(&text)?;
                Ok(Value::Unit)
            }
        }
    }

    /// Bind arguments positionally and run the body. Arity is already checked.
    fn call(&self, closure: &Rc<Closure>, args: Vec<Value>, caller: &Environment) -> Result<Value, EvalError> {
        trace!(function = closure.display_name(), arity = closure.arity(), "call");
        let mut scope = match self.config.call_scope {
            CallScope::Caller => Environment::extend(caller),
            CallScope::Lexical => {
                let mut scope = Environment::extend(&closure.env);
                if let Some(name) = &closure.name {
                    scope.set(name.as_str(), Value::Closure(Rc::clone(closure)));
                }
                scope
            }
        };
        for (param, arg) in closure.parameters.iter().zip(args) {
            scope.set(param.name.as_str(), arg);
        }
        self.evaluate(&closure.body, &scope)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
