use crate::{parse, swap, Value};

#[test]
fn copy_is_independent_of_source() {
    let src = parse(r#"{"a":[1,2,3]}"#).expect("parses");
    let mut dst = Value::Null;
    dst.copy_from(&src);
    assert_eq!(dst, src);

    dst.as_object_mut()
        .expect("object")
        .value_mut(0)
        .as_array_mut()
        .expect("array")
        .push_back();
    assert_ne!(dst, src, "mutating the copy must not affect the source");
}

#[test]
fn move_leaves_source_null_and_transfers_contents() {
    let mut src = parse("[1,2,3]").expect("parses");
    let original = src.clone();
    let mut dst = Value::Boolean(true);
    dst.move_from(&mut src);
    assert_eq!(dst, original);
    assert_eq!(src, Value::Null);
}

#[test]
fn swap_exchanges_both_values() {
    let mut a = parse(r#"{"x":1}"#).expect("parses");
    let mut b = parse("[true,false]").expect("parses");
    let (a0, b0) = (a.clone(), b.clone());
    swap(&mut a, &mut b);
    assert_eq!(a, b0);
    assert_eq!(b, a0);
}

#[test]
fn equality_is_reflexive_symmetric_and_transitive() {
    let a = parse(r#"{"a":1,"b":[2,3]}"#).expect("parses");
    let b = parse(r#"{"b":[2,3],"a":1}"#).expect("parses");
    let c = parse(r#"{"a":1,"b":[2,3]}"#).expect("parses");

    assert_eq!(a, a, "reflexive");
    assert_eq!(a, b, "symmetric operand 1");
    assert_eq!(b, a, "symmetric operand 2");
    assert_eq!(b, c, "transitive step");
    assert_eq!(a, c, "transitive conclusion");
}

#[test]
fn distinct_values_are_not_equal() {
    assert_ne!(parse("1").unwrap(), parse("2").unwrap());
    assert_ne!(parse("[1,2]").unwrap(), parse("[2,1]").unwrap());
    assert_ne!(parse(r#"{"a":1}"#).unwrap(), parse(r#"{"a":2}"#).unwrap());
}
