//! Serializes a [`Value`] tree to compact JSON text.
//!
//! The walk is a straightforward recursive traversal; the reference
//! implementation's scratch-stack accumulation is reproduced here as a
//! single growable `Vec<u8>` output buffer, since Rust's `Vec` already
//! provides the "pre-reserve an upper bound, then let the unused tail go
//! unused" behavior the original hand-rolled with `realloc`.

use alloc::string::ToString;
use alloc::vec::Vec;

use bstr::BString;

use crate::value::Value;

/// Serializes `value` to compact JSON text (no insignificant whitespace).
///
/// The result is a [`BString`] rather than [`alloc::string::String`]
/// because a [`Value::String`] payload set through the mutation API is not
/// required to be valid UTF-8, and this serializer is byte-transparent for
/// any byte `>= 0x20` — it copies such bytes through unchanged rather than
/// validating or re-encoding them.
#[must_use]
pub fn stringify(value: &Value) -> BString {
    let mut out = Vec::with_capacity(128);
    write_value(&mut out, value);
    BString::from(out)
}

fn write_value(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Boolean(true) => out.extend_from_slice(b"true"),
        Value::Boolean(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => write_string(out, s.as_slice()),
        Value::Array(a) => {
            out.push(b'[');
            for (i, elem) in a.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(out, elem);
            }
            out.push(b']');
        }
        Value::Object(o) => {
            out.push(b'{');
            for (i, member) in o.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(out, member.key.as_slice());
                out.push(b':');
                write_value(out, &member.value);
            }
            out.push(b'}');
        }
    }
}

fn write_number(out: &mut Vec<u8>, n: f64) {
    // `Value::Number` is expected to hold a finite value: the parser never
    // produces NaN or infinity (overflow is rejected as `NumberTooBig`
    // before a `Value` is built). Rust's `f64` `Display` already yields the
    // shortest decimal lexeme that round-trips exactly through
    // `str::parse::<f64>`, which exceeds the reference implementation's
    // 17-significant-digit `%.17g` floor — an explicitly acceptable
    // upgrade per the format this crate ports.
    out.extend_from_slice(n.to_string().as_bytes());
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn write_string(out: &mut Vec<u8>, bytes: &[u8]) {
    // Worst case every byte expands to a `\u00XX` escape; reserve that
    // upper bound up front, matching the reference's `len * 6 + 2`.
    out.reserve(bytes.len() * 6 + 2);
    out.push(b'"');
    for &b in bytes {
        match b {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b if b < 0x20 => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX_DIGITS[(b >> 4) as usize]);
                out.push(HEX_DIGITS[(b & 0x0F) as usize]);
            }
            b => out.push(b),
        }
    }
    out.push(b'"');
}
