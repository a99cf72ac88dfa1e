//! The JSON value tree: a tagged union over the seven JSON kinds, with owned
//! child storage and the structural-algebra operations (copy, move, swap,
//! equality) that act on it.
//!
//! Ownership is strictly tree-shaped: every [`Value`] owns its direct
//! children exclusively, there is no sharing and no cycles, and dropping a
//! root drops its entire subtree for free via Rust's ordinary `Drop` glue —
//! the reference implementation's explicit post-order `json_free` walk is
//! simply what the compiler already does for an owned, non-`Rc` tree.

use bstr::BString;

pub use crate::array::Array;
pub use crate::object::{Member, Object};

/// The discriminant of a [`Value`].
///
/// `True` and `False` are reported as distinct kinds even though they share
/// a single [`Value::Boolean`] variant, matching the reference
/// implementation's three-way `JSON_NULL` / `JSON_FALSE` / `JSON_TRUE` split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`.
    Null,
    /// `false`.
    False,
    /// `true`.
    True,
    /// Any IEEE-754 double.
    Number,
    /// A byte string.
    String,
    /// An ordered sequence of values.
    Array,
    /// An insertion-ordered sequence of key/value members.
    Object,
}

/// A JSON value: `null`, a boolean, a double-precision number, a byte
/// string, an array, or an object.
///
/// A value's string payload is a [`BString`] rather than [`alloc::string::String`]
/// because the mutation API (see [`Value::set_string`]) and the parser's
/// `\uXXXX` decoding can both produce byte sequences that are not required
/// to be valid UTF-8 once embedded NULs or surrogate-adjacent bytes are
/// considered; the serializer passes bytes `>= 0x20` through unchanged
/// without re-validating them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A double-precision number.
    Number(f64),
    /// An owned byte string.
    String(BString),
    /// An ordered array of values.
    Array(Array),
    /// An insertion-ordered object.
    Object(Object),
}

impl Default for Value {
    /// A fresh `Value` is born as `Null`, matching `json_init`.
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Reports this value's [`Kind`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Boolean(false) => Kind::False,
            Self::Boolean(true) => Kind::True,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Borrows the inner `bool` if this is [`Value::Boolean`].
    ///
    /// # Panics
    ///
    /// Panics if this is not a boolean, mirroring the reference
    /// implementation's `assert(type == JSON_TRUE || type == JSON_FALSE)`.
    #[must_use]
    pub fn get_boolean(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            other => panic!("get_boolean called on a {:?} value", other.kind()),
        }
    }

    /// Overwrites this value with a boolean, dropping any prior contents.
    pub fn set_boolean(&mut self, b: bool) {
        *self = Self::Boolean(b);
    }

    /// Borrows the inner `f64` if this is [`Value::Number`], or `None`
    /// otherwise.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the inner `f64`.
    ///
    /// # Panics
    ///
    /// Panics if this is not a number.
    #[must_use]
    pub fn get_number(&self) -> f64 {
        self.as_number()
            .unwrap_or_else(|| panic!("get_number called on a {:?} value", self.kind()))
    }

    /// Overwrites this value with a number, dropping any prior contents.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Borrows the inner byte string if this is [`Value::String`], or `None`
    /// otherwise.
    #[must_use]
    pub fn as_string(&self) -> Option<&BString> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string's bytes.
    ///
    /// # Panics
    ///
    /// Panics if this is not a string.
    #[must_use]
    pub fn get_string(&self) -> &[u8] {
        self.as_string()
            .unwrap_or_else(|| panic!("get_string called on a {:?} value", self.kind()))
            .as_slice()
    }

    /// Returns the string's length in bytes.
    ///
    /// # Panics
    ///
    /// Panics if this is not a string.
    #[must_use]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Overwrites this value with a copy of `bytes`, dropping any prior
    /// contents. `bytes` need not be valid UTF-8.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Self::String(BString::from(bytes));
    }

    /// Borrows the inner array if this is [`Value::Array`], or `None`
    /// otherwise.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutably borrows the inner array if this is [`Value::Array`], or
    /// `None` otherwise.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Overwrites this value with a fresh, empty array reserved for at
    /// least `capacity` elements, dropping any prior contents.
    pub fn set_array(&mut self, capacity: usize) {
        *self = Self::Array(Array::with_capacity(capacity));
    }

    /// Borrows the inner object if this is [`Value::Object`], or `None`
    /// otherwise.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutably borrows the inner object if this is [`Value::Object`], or
    /// `None` otherwise.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Overwrites this value with a fresh, empty object reserved for at
    /// least `capacity` members, dropping any prior contents.
    pub fn set_object(&mut self, capacity: usize) {
        *self = Self::Object(Object::with_capacity(capacity));
    }

    /// Deep-copies `src` into `self`, destroying `self`'s prior contents.
    ///
    /// Scalars are copied bitwise; strings get a fresh byte buffer; arrays
    /// and objects are recursively copied element-by-element. Afterward,
    /// mutating `self` never affects `src` (testable property: `copy(dst,
    /// src)` implies `dst == src` and dst is independently owned).
    ///
    /// Rust's borrow checker rejects `self.copy_from(self)` at compile
    /// time, so the reference implementation's `dst != src` precondition
    /// needs no runtime check here.
    pub fn copy_from(&mut self, src: &Self) {
        *self = src.clone();
    }

    /// Moves `src` into `self`, destroying `self`'s prior contents and
    /// leaving `src` as [`Value::Null`].
    ///
    /// This is a transfer of ownership with no allocation, equivalent to
    /// the reference implementation's bitwise-copy-then-reinit.
    pub fn move_from(&mut self, src: &mut Self) {
        *self = core::mem::take(src);
    }
}

/// Exchanges the contents of `a` and `b`.
///
/// Aliased calls (`swap(&mut v, &mut v)`) are rejected by the borrow
/// checker before this function can even be called, so unlike the
/// reference implementation this never needs a runtime identity check.
pub fn swap(a: &mut Value, b: &mut Value) {
    core::mem::swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::{Kind, Value};
    use crate::array::Array;

    #[test]
    fn kind_distinguishes_true_and_false() {
        assert_eq!(Value::Boolean(true).kind(), Kind::True);
        assert_eq!(Value::Boolean(false).kind(), Kind::False);
        assert_eq!(Value::Null.kind(), Kind::Null);
    }

    #[test]
    fn copy_then_mutate_does_not_affect_source() {
        let mut src = Value::Array(Array::default());
        src.as_array_mut().expect("array").push_back();

        let mut dst = Value::Null;
        dst.copy_from(&src);
        assert_eq!(dst, src);

        dst.as_array_mut().expect("array").push_back();
        assert_ne!(dst, src);
    }

    #[test]
    fn move_from_empties_source() {
        let mut src = Value::Number(7.0);
        let mut dst = Value::Null;
        dst.move_from(&mut src);
        assert_eq!(dst, Value::Number(7.0));
        assert_eq!(src, Value::Null);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = Value::Number(1.0);
        let mut b = Value::Boolean(true);
        super::swap(&mut a, &mut b);
        assert_eq!(a, Value::Boolean(true));
        assert_eq!(b, Value::Number(1.0));
    }

    #[test]
    fn numeric_equality_follows_ieee754() {
        assert_eq!(Value::Number(0.0), Value::Number(-0.0));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }
}
