//! The `rinha check` command.

use std::path::Path;

use rinha_json::decode_file;

use super::SourceContext;
use crate::output;

/// Decode a JSON AST file and report whether it is well formed.
pub fn run(file: &Path, verbose: bool) -> Result<(), String> {
    let program = decode_file(file).map_err(|e| {
        SourceContext::new(file, None).report(&e.to_diagnostic());
        "decode error".to_string()
    })?;

    if verbose {
        output::info(&format!("Root node: {}", program.expression.kind.name()));
    }

    output::success(&format!(
        "OK - `{}` decoded ({} nodes)",
        program.name,
        program.expression.size()
    ));
    Ok(())
}
