//! Parse tree to value conversion

use crate::syntax::{Node, NodeKind};
use crate::{EvalError, Value};

/// Convert a parse tree node into a value tree.
///
/// Delimiters and markers inside groups are skipped. A numeric literal that
/// does not fit in an `i64` becomes an error value rather than a failure.
pub fn read(node: &Node) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.contents),
        NodeKind::Symbol => Value::symbol(node.contents.as_str()),
        NodeKind::Program | NodeKind::SExpr => read_children(Value::sexpr(), node),
        NodeKind::QExpr => read_children(Value::qexpr(), node),
        NodeKind::Punct | NodeKind::Marker => EvalError::InvalidNode {
            kind: node.kind.to_string(),
        }
        .into(),
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => EvalError::InvalidNumber {
            literal: text.to_string(),
        }
        .into(),
    }
}

fn read_children(mut container: Value, node: &Node) -> Value {
    for child in node.children.iter().filter(|c| !c.kind.is_structural()) {
        container.push(read(child));
    }
    tracing::trace!(kind = %node.kind, children = container.len(), "read group");
    container
}
