//! Tests for the Value type: printing, ownership and deep copies

use moth::*;
use pretty_assertions::assert_eq;

fn q(items: Vec<Value>) -> Value {
    Value::QExpr(items)
}

fn s(items: Vec<Value>) -> Value {
    Value::SExpr(items)
}

#[test]
fn test_constructors_are_empty_or_childless() {
    assert_eq!(Value::sexpr().len(), 0);
    assert_eq!(Value::qexpr().len(), 0);
    assert_eq!(Value::number(3).as_number(), Some(3));
    assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
    assert_eq!(Value::error("bad").as_error(), Some("bad"));
}

#[test]
fn test_display_forms() {
    let builtin = builtins::lookup("+").unwrap();
    let v = s(vec![
        Value::number(-12),
        Value::symbol("sym"),
        q(vec![Value::number(1), s(vec![])]),
        Value::function(builtin),
        Value::error("oops"),
    ]);
    assert_eq!(v.to_string(), "(-12 sym {1 ()} <function> Error: oops)");
}

#[test]
fn test_display_empty_containers() {
    assert_eq!(Value::sexpr().to_string(), "()");
    assert_eq!(Value::qexpr().to_string(), "{}");
}

#[test]
fn test_debug_names_builtins() {
    let builtin = builtins::lookup("head").unwrap();
    assert_eq!(format!("{:?}", Value::function(builtin)), "<builtin head>");
    assert_eq!(format!("{:?}", Value::error("x")), "Error(\"x\")");
    assert_eq!(
        format!("{:?}", q(vec![Value::number(1), Value::symbol("a")])),
        "{1 a}"
    );
}

#[test]
fn test_functions_never_compare_equal() {
    let builtin = builtins::lookup("+").unwrap();
    let f = Value::function(builtin);
    assert_ne!(f, f.clone());
}

#[test]
fn test_copy_is_independent_of_source() {
    let mut original = q(vec![
        Value::number(1),
        s(vec![Value::symbol("x"), q(vec![Value::number(2)])]),
    ]);
    let copy = original.clone();
    let printed = copy.to_string();

    // Mutate the source, then drop it entirely.
    original.take_at(0);
    original.push(Value::symbol("extra"));
    assert_eq!(original.to_string(), "{(x {2}) extra}");
    drop(original);

    assert_eq!(copy.to_string(), printed);
    assert_eq!(printed, "{1 (x {2})}");
}

#[test]
fn test_take_at_preserves_relative_order() {
    let mut v = s((1..=5).map(Value::number).collect());
    assert_eq!(v.take_at(0), Value::number(1));
    assert_eq!(v.take_at(3), Value::number(5));
    assert_eq!(v.to_string(), "(2 3 4)");
}

#[test]
fn test_consume_returns_only_the_child() {
    let v = q(vec![Value::symbol("a"), Value::symbol("b")]);
    assert_eq!(v.consume(1), Value::symbol("b"));
}

#[test]
fn test_into_children() {
    let v = s(vec![Value::number(1)]);
    assert_eq!(v.children(), Some(&[Value::number(1)][..]));
    assert_eq!(v.into_children(), Some(vec![Value::number(1)]));
    assert_eq!(Value::number(1).into_children(), None);
}

#[test]
fn test_type_names() {
    use moth::error::type_name;
    assert_eq!(type_name(&Value::number(0)), "number");
    assert_eq!(type_name(&Value::error("")), "error");
    assert_eq!(type_name(&Value::symbol("a")), "symbol");
    assert_eq!(type_name(&Value::sexpr()), "s-expression");
    assert_eq!(type_name(&Value::qexpr()), "q-expression");
    assert_eq!(
        type_name(&Value::function(builtins::lookup("list").unwrap())),
        "function"
    );
}
