//! Recursive-descent parser producing the node tree

use std::iter::Peekable;
use std::ops::Range;

use logos::{Logos, SpannedIter};

use super::lexer::Token;
use super::{Node, NodeKind, ParseError, SourceLocation};

/// Parse a line of input read from standard input.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    parse_named("<stdin>", source)
}

/// Parse `source`, attributing errors to `file`.
///
/// The root is a [`NodeKind::Program`] node whose children are a start
/// marker, every top-level expression, and an end marker.
pub fn parse_named(file: &str, source: &str) -> Result<Node, ParseError> {
    let mut parser = Parser {
        file,
        source,
        tokens: Token::lexer(source).spanned().peekable(),
    };
    parser.program()
}

struct Parser<'src> {
    file: &'src str,
    source: &'src str,
    tokens: Peekable<SpannedIter<'src, Token>>,
}

impl<'src> Parser<'src> {
    fn program(&mut self) -> Result<Node, ParseError> {
        let mut children = vec![Node::leaf(NodeKind::Marker, "")];
        while self.tokens.peek().is_some() {
            children.push(self.expr()?);
        }
        children.push(Node::leaf(NodeKind::Marker, ""));
        Ok(Node::branch(NodeKind::Program, children))
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let Some((token, span)) = self.tokens.next() else {
            return Err(self.error("unexpected end of input", self.source.len()));
        };
        let source = self.source;
        let text = &source[span.clone()];
        match token {
            Ok(Token::Number) => Ok(Node::leaf(NodeKind::Number, text)),
            Ok(Token::Symbol) => Ok(Node::leaf(NodeKind::Symbol, text)),
            Ok(Token::LParen) => self.group(NodeKind::SExpr, text, Token::RParen, ")"),
            Ok(Token::LBrace) => self.group(NodeKind::QExpr, text, Token::RBrace, "}"),
            Ok(Token::RParen | Token::RBrace) => {
                Err(self.error(format!("unexpected '{}'", text), span.start))
            }
            Err(()) => Err(self.unexpected_char(span)),
        }
    }

    fn group(
        &mut self,
        kind: NodeKind,
        open: &str,
        close: Token,
        close_text: &str,
    ) -> Result<Node, ParseError> {
        let mut children = vec![Node::leaf(NodeKind::Punct, open)];
        loop {
            match self.tokens.peek() {
                None => {
                    return Err(self.error(
                        format!("expected '{}' before end of input", close_text),
                        self.source.len(),
                    ))
                }
                Some((Ok(token), _)) if *token == close => {
                    self.tokens.next();
                    children.push(Node::leaf(NodeKind::Punct, close_text));
                    return Ok(Node::branch(kind, children));
                }
                Some(_) => children.push(self.expr()?),
            }
        }
    }

    fn unexpected_char(&self, span: Range<usize>) -> ParseError {
        let text = &self.source[span.clone()];
        self.error(format!("unexpected character '{}'", text), span.start)
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> ParseError {
        ParseError::new(message)
            .with_location(SourceLocation::from_offset(self.file, self.source, offset))
    }
}
