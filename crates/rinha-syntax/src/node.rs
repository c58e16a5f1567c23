//! Expression nodes.
//! 表达式节点。

use std::fmt;
use std::rc::Rc;

use rinha_common::{Location, ensure_sufficient_stack};

/// A program: the root term of a decoded file.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: String,
    pub expression: Node,
    pub location: Location,
}

/// An identifier with its location.
/// 带位置的标识符。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub location: Location,
}

impl Ident {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// An AST node.
/// AST 节点。
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub location: Location,
}

impl Node {
    pub fn new(kind: NodeKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Node with a dummy location.
    pub fn synthetic(kind: NodeKind) -> Self {
        Self::new(kind, Location::dummy())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        ensure_sufficient_stack(|| self.size_inner())
    }

    fn size_inner(&self) -> usize {
        let children: usize = match &self.kind {
            NodeKind::Int(_) | NodeKind::Str(_) | NodeKind::Bool(_) | NodeKind::Var(_) => 0,
            NodeKind::Function { body, .. } => body.size(),
            NodeKind::Call { callee, arguments } => {
                callee.size() + arguments.iter().map(Node::size).sum::<usize>()
            }
            NodeKind::Let { value, next, .. } => value.size() + next.size(),
            NodeKind::If {
                condition,
                then,
                otherwise,
            } => condition.size() + then.size() + otherwise.size(),
            NodeKind::Binary { lhs, rhs, .. } => lhs.size() + rhs.size(),
            NodeKind::Tuple { first, second } => first.size() + second.size(),
            NodeKind::First(value) | NodeKind::Second(value) | NodeKind::Print(value) => {
                value.size()
            }
        };
        children + 1
    }
}

/// Children are dropped from a worklist instead of recursively. Decoded
/// programs can nest far deeper than the thread stack allows.
/// 子节点通过工作列表释放，避免深层递归。
impl Drop for Node {
    fn drop(&mut self) {
        if self.kind.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.kind.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.kind.take_children(&mut pending);
        }
    }
}

/// Node kind.
/// 节点类型。
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Number literal. Every number is a 64-bit float. / 数字字面量
    Int(f64),
    /// String literal / 字符串字面量
    Str(String),
    /// Boolean literal / 布尔字面量
    Bool(bool),

    /// Variable reference / 变量引用
    Var(String),

    /// Anonymous function `fn (a, b) => body` / 匿名函数
    Function {
        /// Shared with the closures built from this node, like `body`.
        parameters: Rc<[Ident]>,
        body: Rc<Node>,
    },

    /// Function call `f(x, y)` / 函数调用
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    /// `let name = value; next` / let 绑定
    Let {
        name: Ident,
        value: Box<Node>,
        next: Box<Node>,
    },

    /// `if (condition) { then } else { otherwise }` / 条件表达式
    If {
        condition: Box<Node>,
        then: Box<Node>,
        otherwise: Box<Node>,
    },

    /// Binary operation / 二元运算
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },

    /// Pair `(first, second)` / 二元组
    Tuple {
        first: Box<Node>,
        second: Box<Node>,
    },

    /// `first(t)` / 取第一项
    First(Box<Node>),
    /// `second(t)` / 取第二项
    Second(Box<Node>),
    /// `print(v)` / 打印
    Print(Box<Node>),
}

impl NodeKind {
    fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Int(_) | NodeKind::Str(_) | NodeKind::Bool(_) | NodeKind::Var(_)
        )
    }

    /// Move owned children onto `out`, leaving a leaf behind. A function
    /// body still shared with a closure stays with the closure.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        if self.is_leaf() {
            return;
        }
        match std::mem::replace(self, NodeKind::Bool(false)) {
            NodeKind::Int(_) | NodeKind::Str(_) | NodeKind::Bool(_) | NodeKind::Var(_) => {}
            NodeKind::Function { body, .. } => out.extend(Rc::into_inner(body)),
            NodeKind::Call { callee, arguments } => {
                out.push(*callee);
                out.extend(arguments);
            }
            NodeKind::Let { value, next, .. } => {
                out.push(*value);
                out.push(*next);
            }
            NodeKind::If {
                condition,
                then,
                otherwise,
            } => {
                out.push(*condition);
                out.push(*then);
                out.push(*otherwise);
            }
            NodeKind::Binary { lhs, rhs, .. } => {
                out.push(*lhs);
                out.push(*rhs);
            }
            NodeKind::Tuple { first, second } => {
                out.push(*first);
                out.push(*second);
            }
            NodeKind::First(value) | NodeKind::Second(value) | NodeKind::Print(value) => {
                out.push(*value);
            }
        }
    }

    /// The `kind` tag used by the JSON format.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Int(_) => "Int",
            NodeKind::Str(_) => "Str",
            NodeKind::Bool(_) => "Bool",
            NodeKind::Var(_) => "Var",
            NodeKind::Function { .. } => "Function",
            NodeKind::Call { .. } => "Call",
            NodeKind::Let { .. } => "Let",
            NodeKind::If { .. } => "If",
            NodeKind::Binary { .. } => "Binary",
            NodeKind::Tuple { .. } => "Tuple",
            NodeKind::First(_) => "First",
            NodeKind::Second(_) => "Second",
            NodeKind::Print(_) => "Print",
        }
    }
}

/// Binary operators.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Arithmetic 算术运算
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Rem, // %

    // Comparison 比较运算
    Eq,  // ==
    Neq, // !=
    Lt,  // <
    Gt,  // >
    Lte, // <=
    Gte, // >=

    // Logical 逻辑运算
    And, // &&
    Or,  // ||
}

impl BinOp {
    pub const ALL: [BinOp; 13] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Div,
        BinOp::Rem,
        BinOp::Eq,
        BinOp::Neq,
        BinOp::Lt,
        BinOp::Gt,
        BinOp::Lte,
        BinOp::Gte,
        BinOp::And,
        BinOp::Or,
    ];

    /// The operator's name in the JSON format.
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Sub",
            BinOp::Mul => "Mul",
            BinOp::Div => "Div",
            BinOp::Rem => "Rem",
            BinOp::Eq => "Eq",
            BinOp::Neq => "Neq",
            BinOp::Lt => "Lt",
            BinOp::Gt => "Gt",
            BinOp::Lte => "Lte",
            BinOp::Gte => "Gte",
            BinOp::And => "And",
            BinOp::Or => "Or",
        }
    }

    pub fn from_name(name: &str) -> Option<BinOp> {
        BinOp::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Source-level symbol, used in error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Lte => "<=",
            BinOp::Gte => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_names() {
        for op in BinOp::ALL {
            assert_eq!(BinOp::from_name(op.name()), Some(op));
        }
        assert_eq!(BinOp::from_name("Pow"), None);
        assert_eq!(BinOp::Neq.to_string(), "!=");
    }

    #[test]
    fn test_dropping_a_deep_tree() {
        let mut node = Node::synthetic(NodeKind::Int(0.0));
        for _ in 0..200_000 {
            node = Node::synthetic(NodeKind::Binary {
                op: BinOp::Add,
                lhs: Box::new(node),
                rhs: Box::new(Node::synthetic(NodeKind::Int(1.0))),
            });
        }
        assert_eq!(node.size(), 400_001);
        drop(node);
    }

    #[test]
    fn test_shared_function_body_outlives_tree() {
        let body = Rc::new(Node::synthetic(NodeKind::Var("x".to_string())));
        let function = Node::synthetic(NodeKind::Function {
            parameters: Rc::from(vec![Ident::new("x", Location::dummy())]),
            body: Rc::clone(&body),
        });
        drop(function);
        assert!(matches!(&body.kind, NodeKind::Var(name) if name == "x"));
    }

    #[test]
    fn test_size_counts_every_node() {
        let int = |n| Node::synthetic(NodeKind::Int(n));
        let sum = Node::synthetic(NodeKind::Binary {
            op: BinOp::Add,
            lhs: Box::new(int(1.0)),
            rhs: Box::new(int(2.0)),
        });
        let print = Node::synthetic(NodeKind::Print(Box::new(sum)));
        assert_eq!(print.size(), 4);
        assert_eq!(print.kind.name(), "Print");
    }
}
