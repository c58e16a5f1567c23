//! JSON document → node tree.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use rinha_common::{ensure_sufficient_stack, with_stack, Location};
use rinha_syntax::{BinOp, Ident, Node, NodeKind, Program};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::path::JsonPath;
use crate::DecodeError;

/// Stack for parsing. `serde_json` recurses once per nesting level and we
/// lift its depth limit, so it gets a generous dedicated stack.
const PARSE_STACK: usize = 64 * 1024 * 1024;

type Object = Map<String, Value>;

/// Decode a whole program document (`name`, `expression`, `location`).
#[tracing::instrument(level = "debug", skip_all)]
pub fn decode_str(json: &str) -> Result<Program, DecodeError> {
    with_stack(PARSE_STACK, || {
        let value = parse_value(json)?;
        let program = Decoder::default().program(&value)?;
        debug!(name = %program.name, nodes = program.expression.size(), "decoded program");
        Ok(program)
    })
}

/// Read and decode a program document from disk.
pub fn decode_file(path: &Path) -> Result<Program, DecodeError> {
    let json = fs::read_to_string(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_str(&json)
}

/// Decode a single term, without the program wrapper.
#[tracing::instrument(level = "debug", skip_all)]
pub fn decode_term(json: &str) -> Result<Node, DecodeError> {
    with_stack(PARSE_STACK, || {
        let value = parse_value(json)?;
        Decoder::default().node(&value, &JsonPath::ROOT)
    })
}

fn parse_value(json: &str) -> Result<Value, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

#[derive(Deserialize)]
struct RawLocation<'a> {
    start: u32,
    end: u32,
    #[serde(borrow)]
    filename: &'a str,
}

/// Converts `serde_json` values into nodes. Every location of a document
/// shares one `Rc<str>` per distinct filename.
#[derive(Default)]
struct Decoder {
    filenames: HashMap<String, Rc<str>>,
}

impl Decoder {
    fn program(&mut self, value: &Value) -> Result<Program, DecodeError> {
        let root = JsonPath::ROOT;
        let obj = object(value, &root)?;
        let location = self.location(obj, &root)?;
        let expression = self.child(obj, "expression", &root)?;
        let name = match obj.get("name") {
            Some(name) => string(name, &root.field("name"))?.to_string(),
            None => expression.location.filename.to_string(),
        };
        Ok(Program {
            name,
            expression,
            location,
        })
    }

    fn child(&mut self, obj: &Object, field: &'static str, path: &JsonPath<'_>) -> Result<Node, DecodeError> {
        let value = required(obj, field, path)?;
        self.node(value, &path.field(field))
    }

    fn node(&mut self, value: &Value, path: &JsonPath<'_>) -> Result<Node, DecodeError> {
        ensure_sufficient_stack(|| self.node_inner(value, path))
    }

    fn node_inner(&mut self, value: &Value, path: &JsonPath<'_>) -> Result<Node, DecodeError> {
        let obj = object(value, path)?;
        let location = self.location(obj, path)?;
        let kind = string(required(obj, "kind", path)?, &path.field("kind"))?;

        let kind = match kind {
            "Int" => NodeKind::Int(number(required(obj, "value", path)?, &path.field("value"))?),
            "Str" => NodeKind::Str(string(required(obj, "value", path)?, &path.field("value"))?.to_string()),
            "Bool" => NodeKind::Bool(boolean(required(obj, "value", path)?, &path.field("value"))?),
            "Var" => NodeKind::Var(string(required(obj, "text", path)?, &path.field("text"))?.to_string()),
            "Function" => {
                let params_path = path.field("parameters");
                let params = array(required(obj, "parameters", path)?, &params_path)?;
                let parameters = params
                    .iter()
                    .enumerate()
                    .map(|(i, param)| self.ident(param, &params_path.index(i)))
                    .collect::<Result<Vec<_>, _>>()?;
                NodeKind::Function {
                    parameters: parameters.into(),
                    body: Rc::new(self.child(obj, "value", path)?),
                }
            }
            "Call" => {
                let callee = self.child(obj, "callee", path)?;
                let args_path = path.field("arguments");
                let args = array(required(obj, "arguments", path)?, &args_path)?;
                let arguments = args
                    .iter()
                    .enumerate()
                    .map(|(i, arg)| self.node(arg, &args_path.index(i)))
                    .collect::<Result<Vec<_>, _>>()?;
                NodeKind::Call {
                    callee: Box::new(callee),
                    arguments,
                }
            }
            "Let" => NodeKind::Let {
                name: self.ident(required(obj, "name", path)?, &path.field("name"))?,
                value: Box::new(self.child(obj, "value", path)?),
                next: Box::new(self.child(obj, "next", path)?),
            },
            "If" => NodeKind::If {
                condition: Box::new(self.child(obj, "condition", path)?),
                then: Box::new(self.child(obj, "then", path)?),
                otherwise: Box::new(self.child(obj, "otherwise", path)?),
            },
            "Binary" => {
                let op_path = path.field("op");
                let name = string(required(obj, "op", path)?, &op_path)?;
                let op = BinOp::from_name(name).ok_or_else(|| DecodeError::UnsupportedOperator {
                    path: op_path.to_string(),
                    op: name.to_string(),
                    location: location.clone(),
                })?;
                NodeKind::Binary {
                    op,
                    lhs: Box::new(self.child(obj, "lhs", path)?),
                    rhs: Box::new(self.child(obj, "rhs", path)?),
                }
            }
            "Tuple" => NodeKind::Tuple {
                first: Box::new(self.child(obj, "first", path)?),
                second: Box::new(self.child(obj, "second", path)?),
            },
            "First" => NodeKind::First(Box::new(self.child(obj, "value", path)?)),
            "Second" => NodeKind::Second(Box::new(self.child(obj, "value", path)?)),
            "Print" => NodeKind::Print(Box::new(self.child(obj, "value", path)?)),
            other => {
                return Err(DecodeError::UnsupportedNodeKind {
                    path: path.to_string(),
                    kind: other.to_string(),
                    location,
                })
            }
        };

        Ok(Node::new(kind, location))
    }

    fn ident(&mut self, value: &Value, path: &JsonPath<'_>) -> Result<Ident, DecodeError> {
        let obj = object(value, path)?;
        let name = string(required(obj, "text", path)?, &path.field("text"))?;
        let location = self.location(obj, path)?;
        Ok(Ident::new(name, location))
    }

    /// A missing or null `location` decodes to a dummy location.
    fn location(&mut self, obj: &Object, path: &JsonPath<'_>) -> Result<Location, DecodeError> {
        let value = match obj.get("location") {
            None | Some(Value::Null) => return Ok(Location::dummy()),
            Some(value) => value,
        };
        let raw = RawLocation::deserialize(value).map_err(|_| DecodeError::InvalidField {
            path: path.field("location").to_string(),
            expected: "a location object with `start`, `end` and `filename`",
        })?;
        let filename = match self.filenames.get(raw.filename) {
            Some(filename) => filename.clone(),
            None => {
                let filename: Rc<str> = Rc::from(raw.filename);
                self.filenames.insert(raw.filename.to_string(), filename.clone());
                filename
            }
        };
        Ok(Location::new(raw.start, raw.end, filename))
    }
}

fn required<'v>(obj: &'v Object, field: &'static str, path: &JsonPath<'_>) -> Result<&'v Value, DecodeError> {
    obj.get(field).ok_or_else(|| DecodeError::MissingField {
        path: path.to_string(),
        field,
    })
}

fn invalid(path: &JsonPath<'_>, expected: &'static str) -> DecodeError {
    DecodeError::InvalidField {
        path: path.to_string(),
        expected,
    }
}

fn object<'v>(value: &'v Value, path: &JsonPath<'_>) -> Result<&'v Object, DecodeError> {
    value.as_object().ok_or_else(|| invalid(path, "an object"))
}

fn array<'v>(value: &'v Value, path: &JsonPath<'_>) -> Result<&'v Vec<Value>, DecodeError> {
    value.as_array().ok_or_else(|| invalid(path, "an array"))
}

fn string<'v>(value: &'v Value, path: &JsonPath<'_>) -> Result<&'v str, DecodeError> {
    value.as_str().ok_or_else(|| invalid(path, "a string"))
}

fn number(value: &Value, path: &JsonPath<'_>) -> Result<f64, DecodeError> {
    value.as_f64().ok_or_else(|| invalid(path, "a number"))
}

fn boolean(value: &Value, path: &JsonPath<'_>) -> Result<bool, DecodeError> {
    value.as_bool().ok_or_else(|| invalid(path, "a boolean"))
}
