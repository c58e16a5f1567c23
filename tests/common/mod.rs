//! Shared helpers for integration tests: node builders and runners.

#![allow(dead_code)]

use std::rc::Rc;

use rinha_common::Location;
use rinha_eval::{Environment, EvalConfig, EvalError, Evaluator, PrintHandler, Value};
use rinha_syntax::{BinOp, Ident, Node, NodeKind};

pub fn int(n: f64) -> Node {
    Node::synthetic(NodeKind::Int(n))
}

pub fn text(s: &str) -> Node {
    Node::synthetic(NodeKind::Str(s.to_string()))
}

pub fn boolean(b: bool) -> Node {
    Node::synthetic(NodeKind::Bool(b))
}

pub fn var(name: &str) -> Node {
    Node::synthetic(NodeKind::Var(name.to_string()))
}

pub fn let_(name: &str, value: Node, next: Node) -> Node {
    Node::synthetic(NodeKind::Let {
        name: Ident::new(name, Location::dummy()),
        value: Box::new(value),
        next: Box::new(next),
    })
}

pub fn func(params: &[&str], body: Node) -> Node {
    let parameters: Vec<Ident> = params
        .iter()
        .map(|p| Ident::new(*p, Location::dummy()))
        .collect();
    Node::synthetic(NodeKind::Function {
        parameters: parameters.into(),
        body: Rc::new(body),
    })
}

pub fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::synthetic(NodeKind::Call {
        callee: Box::new(callee),
        arguments,
    })
}

pub fn if_(condition: Node, then: Node, otherwise: Node) -> Node {
    Node::synthetic(NodeKind::If {
        condition: Box::new(condition),
        then: Box::new(then),
        otherwise: Box::new(otherwise),
    })
}

pub fn bin(op: BinOp, lhs: Node, rhs: Node) -> Node {
    Node::synthetic(NodeKind::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

pub fn tuple(first: Node, second: Node) -> Node {
    Node::synthetic(NodeKind::Tuple {
        first: Box::new(first),
        second: Box::new(second),
    })
}

pub fn first(value: Node) -> Node {
    Node::synthetic(NodeKind::First(Box::new(value)))
}

pub fn second(value: Node) -> Node {
    Node::synthetic(NodeKind::Second(Box::new(value)))
}

pub fn print(value: Node) -> Node {
    Node::synthetic(NodeKind::Print(Box::new(value)))
}

/// Evaluate with a capturing print handler; returns the result and the output.
pub fn run_with(config: EvalConfig, node: &Node) -> (Result<Value, EvalError>, String) {
    let evaluator = Evaluator::with_config(config).with_output(PrintHandler::buffer());
    let result = evaluator.evaluate(node, &Environment::new());
    let output = evaluator.output().take();
    (result, output)
}

pub fn run(node: &Node) -> (Result<Value, EvalError>, String) {
    run_with(EvalConfig::default(), node)
}

pub fn eval(node: &Node) -> Result<Value, EvalError> {
    run(node).0
}

/// Output of a program that must not fault.
pub fn output_of(node: &Node) -> String {
    let (result, output) = run(node);
    if let Err(e) = result {
        panic!("evaluation failed: {e}");
    }
    output
}
