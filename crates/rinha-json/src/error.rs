//! Decode errors.

use std::io;
use std::path::PathBuf;

use rinha_common::Location;
use rinha_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// Why a JSON AST document could not be turned into a node tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{field}` at {path}")]
    MissingField { path: String, field: &'static str },

    #[error("expected {expected} at {path}")]
    InvalidField { path: String, expected: &'static str },

    #[error("unsupported node kind `{kind}` at {path}")]
    UnsupportedNodeKind {
        path: String,
        kind: String,
        location: Location,
    },

    #[error("unsupported binary operator `{op}` at {path}")]
    UnsupportedOperator {
        path: String,
        op: String,
        location: Location,
    },
}

impl DecodeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::Io { .. } => ErrorCode::ReadFailed,
            DecodeError::Json(_) => ErrorCode::MalformedJson,
            DecodeError::MissingField { .. } => ErrorCode::MissingField,
            DecodeError::InvalidField { .. } => ErrorCode::InvalidField,
            DecodeError::UnsupportedNodeKind { .. } => ErrorCode::UnsupportedNodeKind,
            DecodeError::UnsupportedOperator { .. } => ErrorCode::UnsupportedOperator,
        }
    }

    /// Location of the offending node, when its `location` field decoded.
    pub fn location(&self) -> Option<&Location> {
        match self {
            DecodeError::UnsupportedNodeKind { location, .. }
            | DecodeError::UnsupportedOperator { location, .. } => Some(location),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).with_code(self.code());
        match self.location() {
            Some(location) => diag.at(location),
            None => diag,
        }
    }
}
