//! Source text to parse tree
//!
//! The evaluator never sees source text. This module turns a line of input
//! into a generic tree of tagged nodes, and the [reader](crate::reader) turns
//! that tree into values.
//!
//! ```text
//! program : ^ <expr>* $
//! expr    : <number> | <symbol> | <sexpr> | <qexpr>
//! sexpr   : '(' <expr>* ')'
//! qexpr   : '{' <expr>* '}'
//! number  : /-?[0-9]+/
//! symbol  : /[a-zA-Z0-9_+\-*\/\\=<>!&]+/
//! ```
//!
//! Alternatives are tried in order: wherever a number matches it is taken,
//! and a symbol only starts where no number does. `1-2` reads as `1 -2`.

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, SourceLocation};
pub use parser::{parse, parse_named};

use std::fmt;

/// Classification of a parse tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a parsed line
    Program,
    /// Integer literal
    Number,
    /// Symbol literal
    Symbol,
    /// Parenthesised group
    SExpr,
    /// Braced group
    QExpr,
    /// Delimiter: `(`, `)`, `{` or `}`
    Punct,
    /// Zero-width start/end of input marker
    Marker,
}

impl NodeKind {
    /// True for nodes that carry no value of their own.
    pub fn is_structural(self) -> bool {
        matches!(self, NodeKind::Punct | NodeKind::Marker)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "program",
            NodeKind::Number => "number",
            NodeKind::Symbol => "symbol",
            NodeKind::SExpr => "sexpr",
            NodeKind::QExpr => "qexpr",
            NodeKind::Punct => "char",
            NodeKind::Marker => "regex",
        };
        write!(f, "{}", name)
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// What the node is
    pub kind: NodeKind,
    /// Literal text for leaves and punctuation; empty for groups and markers
    pub contents: String,
    /// Children in source order, delimiters included
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node.
    pub fn leaf(kind: NodeKind, contents: impl Into<String>) -> Self {
        Self {
            kind,
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create a group node.
    pub fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            contents: String::new(),
            children,
        }
    }
}
