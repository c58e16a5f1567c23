//! Diagnostic types and builders.

use rinha_common::Location;

use crate::ErrorCode;

/// A secondary location within a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub location: Location,
    pub message: String,
}

impl Label {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// An error report: message, code, primary location, secondary labels
/// and a help line.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Option<ErrorCode>,
    pub message: String,
    /// Primary location, when the failure can be pinned to a node.
    pub location: Option<Location>,
    pub labels: Vec<Label>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            location: None,
            labels: vec![],
            help: None,
        }
    }

    /// Attach an error code. Its suggestion, if any, becomes the help text.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self.help = code.suggestion().map(str::to_string);
        self
    }

    /// Set the primary location. Dummy locations are ignored.
    pub fn at(mut self, location: &Location) -> Self {
        if !location.is_dummy() {
            self.location = Some(location.clone());
        }
        self
    }

    /// Add a secondary label. Labels on dummy locations are ignored.
    pub fn with_label(mut self, location: &Location, message: impl Into<String>) -> Self {
        if !location.is_dummy() {
            self.labels.push(Label::new(location.clone(), message));
        }
        self
    }
}
