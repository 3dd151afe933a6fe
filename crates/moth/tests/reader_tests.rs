//! Parse tree reading tests

use moth::syntax::{parse, Node, NodeKind};
use moth::*;
use pretty_assertions::assert_eq;

fn read_str(src: &str) -> Value {
    read(&parse(src).expect("parse failed"))
}

#[test]
fn test_read_leaves() {
    assert_eq!(read(&Node::leaf(NodeKind::Number, "12")), Value::number(12));
    assert_eq!(read(&Node::leaf(NodeKind::Symbol, "head")), Value::symbol("head"));
}

#[test]
fn test_read_keeps_source_order() {
    assert_eq!(read_str("a 1 b 2").to_string(), "(a 1 b 2)");
}

#[test]
fn test_read_nested_groups() {
    let v = read_str("(join {1 (x)} {})");
    assert_eq!(
        v,
        Value::SExpr(vec![Value::SExpr(vec![
            Value::symbol("join"),
            Value::QExpr(vec![
                Value::number(1),
                Value::SExpr(vec![Value::symbol("x")])
            ]),
            Value::qexpr(),
        ])])
    );
}

#[test]
fn test_read_skips_delimiters_and_markers() {
    // Hand-built tree with every kind of structural child a parser may emit.
    let tree = Node::branch(
        NodeKind::Program,
        vec![
            Node::leaf(NodeKind::Marker, ""),
            Node::branch(
                NodeKind::QExpr,
                vec![
                    Node::leaf(NodeKind::Punct, "{"),
                    Node::leaf(NodeKind::Symbol, "x"),
                    Node::leaf(NodeKind::Punct, "}"),
                ],
            ),
            Node::leaf(NodeKind::Marker, ""),
        ],
    );
    assert_eq!(read(&tree).to_string(), "({x})");
}

#[test]
fn test_read_overflowing_literal_yields_error_value() {
    let v = read_str("{1 100000000000000000000}");
    assert_eq!(
        v.to_string(),
        "({1 Error: invalid number: 100000000000000000000})"
    );
}

#[test]
fn test_read_symbol_text_is_verbatim() {
    for sym in ["+", "-", "list", "a_b", "<=", "\\", "x!&"] {
        assert_eq!(read_str(sym), Value::SExpr(vec![Value::symbol(sym)]));
    }
}

#[test]
fn test_parse_errors_are_reported_not_read() {
    let err = parse("(head {1 2)").unwrap_err();
    assert_eq!(err.message, "unexpected ')'");
    assert!(err.to_string().starts_with("<stdin>:1:11:"));
}
