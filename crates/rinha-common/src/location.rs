//! Node locations.

use std::fmt;
use std::rc::Rc;

use crate::Span;

/// Where a node came from: a span in a named source file.
///
/// Locations only label diagnostics. Evaluation never looks at them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub span: Span,
    pub filename: Rc<str>,
}

impl Location {
    pub fn new(start: u32, end: u32, filename: Rc<str>) -> Self {
        Self {
            span: Span::new(start, end),
            filename,
        }
    }

    /// A placeholder for nodes built without a source, e.g. in tests.
    pub fn dummy() -> Self {
        Self {
            span: Span::DUMMY,
            filename: Rc::from("<unknown>"),
        }
    }

    pub fn is_dummy(&self) -> bool {
        self.span == Span::DUMMY && &*self.filename == "<unknown>"
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::dummy()
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.filename, self.span)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.filename, self.span.start.0, self.span.end.0)
    }
}
