//! The JSON object container: an owned, insertion-ordered sequence of
//! key/value [`Member`]s, mirrored from the reference C object which stores
//! members contiguously rather than in a hash table.

use alloc::vec::Vec;
use core::slice;

use bstr::BString;

use crate::value::Value;

/// Distinguished index returned by the reference implementation's
/// `json_find_object_index` when a key is absent (`(size_t)-1`).
///
/// Idiomatic callers should prefer the `Option`-returning methods on
/// [`Object`]; this constant exists so ports of code written against the
/// sentinel convention have somewhere to compare against.
pub const KEY_NOT_FOUND: usize = usize::MAX;

/// A single object member: an owned byte-string key paired with its value.
///
/// Keys are stored as [`BString`] rather than [`alloc::string::String`]
/// because JSON text does not guarantee object keys are valid UTF-8 once
/// they pass through the mutation API (see [`Value`] string handling), and
/// the serializer is byte-transparent above the C0 control range.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The member's key.
    pub key: BString,
    /// The member's value.
    pub value: Value,
}

impl Member {
    /// Builds a member from a key and value.
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A JSON object: an owned, insertion-ordered sequence of [`Member`]s.
///
/// Insertion order is preserved and observable by index (via
/// [`Object::key`]/[`Object::value`]), but [`PartialEq`] compares objects
/// order-insensitively, matching JSON's definition of object equality.
/// Keys are **not** deduplicated by the parser; only the [`Object::set_by_key`]
/// mutation path guarantees it will never introduce a duplicate.
#[derive(Debug, Clone, Default)]
pub struct Object(Vec<Member>);

impl Object {
    /// Builds an empty object with at least `capacity` slots pre-allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// The number of live members.
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// `true` if the object holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of slots currently allocated (always `>= size()`).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Grows capacity to at least `capacity` total slots. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if let Some(additional) = capacity.checked_sub(self.0.len()) {
            if self.0.capacity() < capacity {
                self.0.reserve(additional);
            }
        }
    }

    /// Releases any capacity beyond the current size.
    pub fn shrink(&mut self) {
        self.0.shrink_to_fit();
    }

    /// Removes every member, retaining the allocated capacity.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Borrows the key of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn key(&self, index: usize) -> &BString {
        &self.0[index].key
    }

    /// Borrows the value of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn value(&self, index: usize) -> &Value {
        &self.0[index].value
    }

    /// Mutably borrows the value of the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn value_mut(&mut self, index: usize) -> &mut Value {
        &mut self.0[index].value
    }

    /// Linearly scans for the first member whose key equals `key`, returning
    /// its index.
    #[must_use]
    pub fn find_by_key(&self, key: &[u8]) -> Option<usize> {
        self.0.iter().position(|m| m.key.as_slice() == key)
    }

    /// Finds the value of the first member whose key equals `key`.
    #[must_use]
    pub fn find_value_by_key(&self, key: &[u8]) -> Option<&Value> {
        self.find_by_key(key).map(|i| &self.0[i].value)
    }

    /// Finds the value of the first member whose key equals `key`, mutably.
    pub fn find_value_by_key_mut(&mut self, key: &[u8]) -> Option<&mut Value> {
        let index = self.find_by_key(key)?;
        Some(&mut self.0[index].value)
    }

    /// Returns a handle to the value for `key`, appending a new
    /// `(key, Null)` member if it is not already present.
    ///
    /// Calling this twice with the same key never creates a duplicate
    /// member; the second call returns the slot created by the first.
    pub fn set_by_key(&mut self, key: &[u8]) -> &mut Value {
        if let Some(index) = self.find_by_key(key) {
            return &mut self.0[index].value;
        }
        self.0.push(Member::new(BString::from(key), Value::Null));
        &mut self.0.last_mut().expect("just pushed").value
    }

    /// Removes the member at `index`, shifting later members left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn remove(&mut self, index: usize) {
        self.0.remove(index);
    }

    /// Iterates over the members in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Member> {
        self.0.iter()
    }

    /// Mutably iterates over the members in insertion order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Member> {
        self.0.iter_mut()
    }

    pub(crate) fn from_vec(v: Vec<Member>) -> Self {
        Self(v)
    }
}

/// Order-insensitive structural equality: every member on the left must
/// find a key-matching member on the right with an equal value. Duplicate
/// keys compare asymmetrically (first match on the right wins), matching
/// the reference implementation.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        self.0.iter().all(|m| {
            other
                .find_value_by_key(m.key.as_slice())
                .is_some_and(|v| *v == m.value)
        })
    }
}

impl<'a> IntoIterator for &'a Object {
    type IntoIter = slice::Iter<'a, Member>;
    type Item = &'a Member;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Object {
    type IntoIter = alloc::vec::IntoIter<Member>;
    type Item = Member;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Member> for Object {
    fn from_iter<T: IntoIterator<Item = Member>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
