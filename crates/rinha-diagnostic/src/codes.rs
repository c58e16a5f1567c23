//! Error codes for Rinha diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Decode errors (E0100 - E0199)
    MalformedJson,
    MissingField,
    InvalidField,
    ReadFailed,

    // Evaluation faults (E0300 - E0399)
    UnboundVariable,
    NotCallable,
    ArityMismatch,
    OperandTypeMismatch,
    UnsupportedNodeKind,
    UnsupportedOperator,
    OutputFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Decode
            ErrorCode::MalformedJson => "E0100",
            ErrorCode::MissingField => "E0101",
            ErrorCode::InvalidField => "E0102",
            ErrorCode::ReadFailed => "E0103",

            // Eval
            ErrorCode::UnboundVariable => "E0300",
            ErrorCode::NotCallable => "E0301",
            ErrorCode::ArityMismatch => "E0302",
            ErrorCode::OperandTypeMismatch => "E0303",
            ErrorCode::UnsupportedNodeKind => "E0304",
            ErrorCode::UnsupportedOperator => "E0305",
            ErrorCode::OutputFailed => "E0306",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnboundVariable => {
                Some("check the spelling or bind the name with `let` before using it")
            }
            ErrorCode::ArityMismatch => {
                Some("pass exactly one argument for every parameter of the function")
            }
            ErrorCode::MissingField | ErrorCode::InvalidField => {
                Some("regenerate the AST file with a front end that emits the Rinha JSON format")
            }
            _ => None,
        }
    }
}
