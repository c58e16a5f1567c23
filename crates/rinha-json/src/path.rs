//! JSON paths for error messages, e.g. `expression.next.arguments[1]`.

use std::fmt;

/// One step from a parent value to a child.
#[derive(Clone, Copy)]
pub(crate) enum Segment {
    Root,
    Field(&'static str),
    Index(usize),
}

/// A path from the document root, as a stack-allocated linked list.
/// Only rendered when decoding fails.
#[derive(Clone, Copy)]
pub(crate) struct JsonPath<'a> {
    parent: Option<&'a JsonPath<'a>>,
    segment: Segment,
}

impl<'a> JsonPath<'a> {
    pub(crate) const ROOT: JsonPath<'static> = JsonPath {
        parent: None,
        segment: Segment::Root,
    };

    pub(crate) fn field(&'a self, name: &'static str) -> JsonPath<'a> {
        JsonPath {
            parent: Some(self),
            segment: Segment::Field(name),
        }
    }

    pub(crate) fn index(&'a self, index: usize) -> JsonPath<'a> {
        JsonPath {
            parent: Some(self),
            segment: Segment::Index(index),
        }
    }

    fn write_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            parent.write_to(f)?;
        }
        match self.segment {
            Segment::Root => Ok(()),
            Segment::Field(name) => {
                if matches!(self.parent, Some(p) if !matches!(p.segment, Segment::Root)) {
                    f.write_str(".")?;
                }
                f.write_str(name)
            }
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self.segment, Segment::Root) {
            return f.write_str("<root>");
        }
        self.write_to(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_rendering() {
        let root = JsonPath::ROOT;
        assert_eq!(root.to_string(), "<root>");

        let expr = root.field("expression");
        let args = expr.field("arguments");
        let second = args.index(1);
        let lhs = second.field("lhs");
        assert_eq!(lhs.to_string(), "expression.arguments[1].lhs");
    }
}
