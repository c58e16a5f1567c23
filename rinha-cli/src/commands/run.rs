//! The `rinha run` command.

use std::path::Path;

use rinha_eval::{EvalConfig, Evaluator};
use rinha_json::decode_file;

use super::SourceContext;
use crate::output;

pub fn run(file: &Path, source: Option<&Path>, config: EvalConfig, verbose: bool) -> Result<(), String> {
    let context = SourceContext::new(file, source);

    let program = decode_file(file).map_err(|e| {
        context.report(&e.to_diagnostic());
        "decode error".to_string()
    })?;

    if verbose {
        output::info(&format!(
            "Decoded `{}` ({} nodes)",
            program.name,
            program.expression.size()
        ));
    }
    tracing::debug!(?config, "starting evaluation");

    // The final value is not echoed; a program's output is what it prints.
    Evaluator::with_config(config).run(&program).map_err(|e| {
        context.report(&e.to_diagnostic());
        "evaluation error".to_string()
    })?;

    Ok(())
}
