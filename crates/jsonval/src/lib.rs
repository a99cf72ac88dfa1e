//! An owned JSON value tree, a single-pass parser, a compact serializer,
//! and a structural edit API (deep copy, move, swap, equality, array/object
//! editing) over that tree.
//!
//! This is a Rust port of a small C JSON library built around a tagged
//! union and an explicit parse-time scratch stack. The port keeps that
//! shape — see [`scratch`] for the stack and [`parser`] for the recursive
//! descent built on it — while replacing the original's manual
//! allocation/freeing with ordinary owned Rust types, so a `Value`'s
//! subtree is freed for free when it is dropped.
//!
//! ```
//! use jsonval::{parse, stringify};
//!
//! let doc = parse(r#"{"a":1,"b":[true,null]}"#).expect("valid json");
//! assert_eq!(doc.as_object().expect("object").size(), 2);
//! assert_eq!(stringify(&doc).as_slice(), br#"{"a":1,"b":[true,null]}"#);
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod array;
mod error;
mod object;
mod parser;
mod scratch;
mod serializer;
mod value;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use array::Array;
pub use error::{ParseError, ParseResult};
pub use object::{Member, Object, KEY_NOT_FOUND};
pub use parser::parse;
pub use serializer::stringify;
pub use value::{swap, Kind, Value};
