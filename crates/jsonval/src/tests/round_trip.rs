//! Property: for any `Value` built from valid JSON text `T`,
//! `parse(stringify(parse(T))) == parse(T)`.
//!
//! `Value` itself (rather than raw text) is the `Arbitrary` type here, since
//! generating well-formed JSON text directly would just reimplement the
//! serializer under test.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{parse, stringify, Array, Object, Value};

const MAX_DEPTH: u32 = 4;

#[derive(Clone, Debug)]
struct ArbValue(Value);

fn arbitrary_at_depth(g: &mut Gen, depth: u32) -> Value {
    if depth >= MAX_DEPTH {
        return arbitrary_scalar(g);
    }
    // Bias toward scalars so trees terminate quickly; containers get rarer
    // as depth grows.
    let choice = u32::arbitrary(g) % 7;
    match choice {
        0..=3 => arbitrary_scalar(g),
        4 | 5 => {
            let len = usize::arbitrary(g) % 4;
            let mut arr = Array::default();
            for _ in 0..len {
                *arr.push_back() = arbitrary_at_depth(g, depth + 1);
            }
            Value::Array(arr)
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut obj = Object::default();
            for i in 0..len {
                let key = alloc::format!("k{i}");
                *obj.set_by_key(key.as_bytes()) = arbitrary_at_depth(g, depth + 1);
            }
            Value::Object(obj)
        }
    }
}

fn arbitrary_scalar(g: &mut Gen) -> Value {
    match u32::arbitrary(g) % 4 {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => {
            // Finite, non-huge magnitudes so the serializer's shortest
            // round-trip form reparses without hitting NumberTooBig.
            let n = (i32::arbitrary(g) as f64) / 1000.0;
            Value::Number(n)
        }
        _ => {
            let raw = alloc::string::String::arbitrary(g);
            let filtered: alloc::string::String =
                raw.chars().filter(|c| !c.is_control() && *c != '"' && *c != '\\').collect();
            Value::String(filtered.as_bytes().into())
        }
    }
}

impl Arbitrary for ArbValue {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbValue(arbitrary_at_depth(g, 0))
    }
}

#[quickcheck]
fn stringify_then_reparse_is_stable(v: ArbValue) -> bool {
    let text = stringify(&v.0);
    let text = core::str::from_utf8(text.as_slice()).expect("serializer emits ASCII/UTF-8");
    let reparsed = parse(text).expect("serializer output must re-parse");
    reparsed == v.0
}

#[test]
fn concrete_nested_document_round_trips() {
    let original = parse(r#"{"a":1,"b":[true,null,"x"],"c":{}}"#).expect("parses");
    let text = stringify(&original);
    let text = core::str::from_utf8(text.as_slice()).unwrap();
    let reparsed = parse(text).expect("re-parses");
    assert_eq!(reparsed, original);
}
