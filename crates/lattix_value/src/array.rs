//! Ordered key/value arrays.
//!
//! An `ArrayValue` maps integer or string keys to values and remembers
//! insertion order. Appending with `push` uses the next free integer key,
//! one past the largest integer key seen so far. Once `i64::MAX` is taken
//! there is no next key and `push` fails.
//!
//! # Design
//!
//! - Entries live in a `Vec` so iteration follows insertion order
//! - An `FxHashMap` from key to entry position gives O(1) lookup
//! - Overwriting a key keeps its original position

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Value;

/// A key of an array: an integer or a string.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(index) => Some(*index),
            Self::Str(_) => None,
        }
    }
}

/// Integer keys render bare, string keys render quoted: `0`, `"name"`.
impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(index) => write!(f, "{index}"),
            Self::Str(name) => write!(f, "\"{name}\""),
        }
    }
}

impl From<i32> for ArrayKey {
    fn from(index: i32) -> Self {
        Self::Int(i64::from(index))
    }
}

impl From<i64> for ArrayKey {
    fn from(index: i64) -> Self {
        Self::Int(index)
    }
}

impl From<&str> for ArrayKey {
    fn from(name: &str) -> Self {
        Self::Str(name.to_owned())
    }
}

impl From<String> for ArrayKey {
    fn from(name: String) -> Self {
        Self::Str(name)
    }
}

/// Errors from array operations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArrayError {
    #[error("cannot push onto array: next key {key} is already occupied")]
    NextKeyOccupied { key: i64 },
}

/// An insertion-ordered array of key/value entries.
#[derive(Clone, Debug, Default)]
pub struct ArrayValue {
    entries: Vec<(ArrayKey, Value)>,
    positions: FxHashMap<ArrayKey, usize>,
    next_index: i64,
}

impl ArrayValue {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a value under the next free integer key and return that key.
    ///
    /// # Errors
    ///
    /// [`ArrayError::NextKeyOccupied`] when the largest integer key is
    /// `i64::MAX`; the array is left unchanged.
    pub fn push(&mut self, value: Value) -> Result<ArrayKey, ArrayError> {
        let key = ArrayKey::Int(self.next_index);
        if self.contains_key(&key) {
            tracing::debug!(key = self.next_index, "rejected push onto exhausted array");
            return Err(ArrayError::NextKeyOccupied {
                key: self.next_index,
            });
        }
        self.insert(key.clone(), value);
        Ok(key)
    }

    /// Insert or overwrite `key`, returning the previous value if any.
    ///
    /// An overwritten entry keeps its position in iteration order.
    pub fn insert(&mut self, key: ArrayKey, value: Value) -> Option<Value> {
        if let Some(&position) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }

        if let ArrayKey::Int(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &ArrayKey) -> bool {
        self.positions.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&ArrayKey, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &ArrayKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }
}

/// Two arrays are equal when they hold the same entries in the same order.
impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Values are keyed `0, 1, 2, ...` in iteration order.
impl FromIterator<Value> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        iter.into_iter()
            .zip(0_i64..)
            .map(|(value, index)| (ArrayKey::Int(index), value))
            .collect()
    }
}

impl FromIterator<(ArrayKey, Value)> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = (ArrayKey, Value)>>(iter: I) -> Self {
        let mut array = Self::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
