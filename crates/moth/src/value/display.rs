//! Display and Debug implementations for Value

use std::fmt;

use super::*;

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::SExpr(items) => write_seq(f, items, '(', ')'),
            Value::QExpr(items) => write_seq(f, items, '{', '}'),
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug names the builtin and quotes errors; everything else reads
        // the same as Display.
        match self {
            Value::Error(msg) => write!(f, "Error({:?})", msg),
            Value::Function(b) => write!(f, "<builtin {}>", b.name),
            Value::SExpr(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, ")")
            }
            Value::QExpr(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "}}")
            }
            _ => fmt::Display::fmt(self, f),
        }
    }
}
