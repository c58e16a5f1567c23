//! The `rinha eval` command.

use rinha_eval::{render, Environment, EvalConfig, Evaluator, PrintHandler, Value};
use rinha_json::decode_term;

use super::SourceContext;
use crate::output;

/// Evaluate one JSON term. Anything it prints is shown first, then the
/// value itself unless it is unit.
pub fn run(term: &str, config: EvalConfig, verbose: bool) -> Result<(), String> {
    let context = SourceContext::default();

    let node = decode_term(term).map_err(|e| {
        context.report(&e.to_diagnostic());
        "decode error".to_string()
    })?;

    if verbose {
        output::info(&format!("AST: {node:?}"));
    }

    let evaluator = Evaluator::with_config(config).with_output(PrintHandler::buffer());
    let result = evaluator.evaluate(&node, &Environment::new());

    let printed = evaluator.output().take();
    if !printed.is_empty() {
        println!("{printed}");
    }

    match result {
        Ok(Value::Unit) => Ok(()),
        Ok(value) => {
            let shown = render(&value).unwrap_or_else(|_| format!("{value:?}"));
            output::success(&shown);
            Ok(())
        }
        Err(e) => {
            context.report(&e.to_diagnostic());
            Err("evaluation error".to_string())
        }
    }
}
