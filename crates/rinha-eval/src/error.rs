//! Evaluation faults.

use std::io;

use rinha_common::Location;
use rinha_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// A fault that aborts evaluation. The interpreted language has no way to
/// catch these.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String, location: Location },

    #[error("expected a function, found {found}")]
    NotCallable {
        found: &'static str,
        location: Location,
    },

    #[error("function `{function}` expects {expected} argument(s) but received {received}")]
    ArityMismatch {
        function: String,
        expected: usize,
        received: usize,
        location: Location,
        /// Where the called function was written.
        defined_at: Location,
    },

    #[error("{message}")]
    OperandTypeMismatch { message: String, location: Location },

    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnboundVariable { .. } => ErrorCode::UnboundVariable,
            EvalError::NotCallable { .. } => ErrorCode::NotCallable,
            EvalError::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            EvalError::OperandTypeMismatch { .. } => ErrorCode::OperandTypeMismatch,
            EvalError::Output(_) => ErrorCode::OutputFailed,
        }
    }

    /// Location of the node that faulted.
    pub fn location(&self) -> Option<&Location> {
        match self {
            EvalError::UnboundVariable { location, .. }
            | EvalError::NotCallable { location, .. }
            | EvalError::ArityMismatch { location, .. }
            | EvalError::OperandTypeMismatch { location, .. } => Some(location),
            EvalError::Output(_) => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string()).with_code(self.code());
        if let Some(location) = self.location() {
            diag = diag.at(location);
        }
        if let EvalError::ArityMismatch {
            function,
            expected,
            defined_at,
            ..
        } = self
        {
            diag = diag.with_label(
                defined_at,
                format!("`{function}` defined here with {expected} parameter(s)"),
            );
        }
        diag
    }

    pub(crate) fn mismatch(message: impl Into<String>, location: &Location) -> Self {
        EvalError::OperandTypeMismatch {
            message: message.into(),
            location: location.clone(),
        }
    }
}
