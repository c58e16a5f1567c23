//! CLI command implementations.

pub mod check;
pub mod eval;
pub mod run;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rinha_diagnostic::{emit, render_plain, Diagnostic};
use rinha_eval::{CallScope, EvalConfig};

use crate::output;

/// Evaluator flags shared by `run` and `eval`.
#[derive(Args)]
pub struct EvalArgs {
    /// Bind call parameters into the closure's captured scope instead of
    /// the caller's. / 将调用参数绑定到闭包捕获的作用域而非调用者的作用域。
    #[arg(long)]
    lexical_scope: bool,

    /// Do not grow the stack for deeply nested programs. / 不为深层嵌套的程序扩展栈。
    #[arg(long)]
    no_stack_growth: bool,
}

impl EvalArgs {
    pub fn config(&self) -> EvalConfig {
        let scope = if self.lexical_scope {
            CallScope::Lexical
        } else {
            CallScope::Caller
        };
        EvalConfig::new()
            .call_scope(scope)
            .grow_stack(!self.no_stack_growth)
    }
}

/// Where to find the source text that diagnostics point into.
///
/// An explicit `--source` wins. Otherwise the location's filename is looked
/// up next to the JSON file. Without either, diagnostics render plain.
#[derive(Default)]
pub struct SourceContext {
    explicit: Option<PathBuf>,
    base_dir: Option<PathBuf>,
}

impl SourceContext {
    pub fn new(json_file: &Path, explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            base_dir: json_file.parent().map(Path::to_path_buf),
        }
    }

    fn source_for(&self, diagnostic: &Diagnostic) -> Option<(String, String)> {
        let location = diagnostic.location.as_ref()?;
        let path = match &self.explicit {
            Some(path) => path.clone(),
            None => self.base_dir.as_ref()?.join(&*location.filename),
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                if self.explicit.is_some() {
                    output::warning(&format!("cannot read source '{}': {e}", path.display()));
                }
                return None;
            }
        };
        // A stale source file may not cover the span.
        if location.span.range().end > text.len() {
            return None;
        }
        Some((location.filename.to_string(), text))
    }

    /// Print a diagnostic to stderr, annotated against the source if we have it.
    pub fn report(&self, diagnostic: &Diagnostic) {
        if let Some((filename, text)) = self.source_for(diagnostic) {
            if emit(&text, &filename, diagnostic).is_ok() {
                return;
            }
        }
        eprint!("{}", render_plain(diagnostic));
    }
}
