//! Diagnostic and error reporting for Rinha.
//! Rinha 的诊断和错误报告。
//!
//! When the original source text is at hand, diagnostics are rendered with
//! ariadne. A JSON AST usually arrives without it, so there is also a plain
//! one-block renderer that only needs the locations.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Label};

use std::fmt::Write as _;
use std::io;

use ariadne::{ColorGenerator, Label as AriadneLabel, Report, ReportKind, Source};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("diagnostic has no location to render against the source")]
    NoLocation,

    #[error("failed to write diagnostic: {0}")]
    Io(#[from] io::Error),
}

/// Render a diagnostic to stderr against the source text it points into.
/// 将诊断信息针对源码渲染到标准错误输出。
///
/// Labels pointing into other files than the primary location are skipped.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> Result<(), EmitError> {
    let location = diagnostic.location.as_ref().ok_or(EmitError::NoLocation)?;

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, location.span.start.0 as usize)
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    report = report.with_label(
        AriadneLabel::new((filename, location.span.range()))
            .with_message(&diagnostic.message)
            .with_color(colors.next()),
    );

    let same_file = diagnostic
        .labels
        .iter()
        .filter(|label| label.location.filename == location.filename);
    for label in same_file {
        let ariadne_label = AriadneLabel::new((filename, label.location.span.range()))
            .with_message(&label.message)
            .with_color(colors.next());
        report = report.with_label(ariadne_label);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .eprint((filename, Source::from(source)))?;
    Ok(())
}

/// Render a diagnostic without source text.
///
/// ```text
/// error[E0300]: unbound variable `x`
///   --> fib.rinha:12..13
///   = help: check the spelling or bind the name with `let` before using it
/// ```
pub fn render_plain(diagnostic: &Diagnostic) -> String {
    let mut out = String::new();
    match &diagnostic.code {
        Some(code) => {
            let _ = writeln!(out, "error[{}]: {}", code.as_str(), diagnostic.message);
        }
        None => {
            let _ = writeln!(out, "error: {}", diagnostic.message);
        }
    }
    if let Some(location) = &diagnostic.location {
        let _ = writeln!(out, "  --> {location}");
    }
    for label in &diagnostic.labels {
        let _ = writeln!(out, "  --> {}: {}", label.location, label.message);
    }
    if let Some(help) = &diagnostic.help {
        let _ = writeln!(out, "  = help: {help}");
    }
    out
}
