//! Loose structured array types.
//!
//! A structured array type declares a type for each of a set of keys, plus
//! an extra-keys type governing every key it does not declare:
//! - `nothing`: no undeclared keys are allowed (an exact structure)
//! - `anything`: undeclared keys may hold any value
//! - any other type: undeclared keys must hold values of that type
//!
//! # Subtyping
//!
//! `S` is a subtype of `T` when every array matching `S` also matches `T`.
//! The comparison works on the key sets of both structures:
//! 1. The extra-keys types must compare.
//! 2. Keys declared on only one side must all be on the same side.
//! 3. Shared keys must agree on a single direction.
//! 4. Keys declared only on one side must fit the other side's extra-keys
//!    type, which forces the direction: the side with more declared keys is
//!    the subtype.
//!
//! Any contradiction makes the two types incomparable.

use lattix_value::{ArrayKey, ArrayValue};
use rustc_hash::FxHashMap;

use crate::{key_diff, Comparison, KeyDiff, Type, TypeError};

/// The structure of a loose structured array type.
#[derive(Debug)]
pub struct StructuredArray {
    /// Declared keys in declaration order.
    keys: Vec<(ArrayKey, Type)>,
    /// Position of each declared key in `keys`.
    positions: FxHashMap<ArrayKey, usize>,
    extra: Type,
}

impl StructuredArray {
    /// Validate and build a structure.
    ///
    /// Fails when a key is declared twice or mapped to `nothing` (which would
    /// make the whole type uninhabited).
    pub(crate) fn new(
        keys: impl IntoIterator<Item = (ArrayKey, Type)>,
        extra: Type,
    ) -> Result<Self, TypeError> {
        let keys: Vec<(ArrayKey, Type)> = keys.into_iter().collect();
        let mut positions = FxHashMap::default();
        positions.reserve(keys.len());

        for (position, (key, ty)) in keys.iter().enumerate() {
            if ty.is_nothing() {
                tracing::debug!(%key, "rejected structured array key mapped to nothing");
                return Err(TypeError::UninhabitedKey { key: key.clone() });
            }
            if positions.insert(key.clone(), position).is_some() {
                tracing::debug!(%key, "rejected duplicate structured array key");
                return Err(TypeError::DuplicateKey { key: key.clone() });
            }
        }

        Ok(Self {
            keys,
            positions,
            extra,
        })
    }

    /// Declared keys and their types, in declaration order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&ArrayKey, &Type)> {
        self.keys.iter().map(|(key, ty)| (key, ty))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &ArrayKey> {
        self.keys.iter().map(|(key, _)| key)
    }

    pub fn types(&self) -> impl ExactSizeIterator<Item = &Type> {
        self.keys.iter().map(|(_, ty)| ty)
    }

    /// Type of a declared key.
    pub fn get(&self, key: &ArrayKey) -> Option<&Type> {
        self.positions
            .get(key)
            .map(|&position| &self.keys[position].1)
    }

    #[inline]
    pub fn declares(&self, key: &ArrayKey) -> bool {
        self.positions.contains_key(key)
    }

    /// Number of declared keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Consume the structure, yielding every declared type and then the
    /// extra-keys type.
    pub(crate) fn into_types(self) -> impl Iterator<Item = Type> {
        let Self { keys, extra, .. } = self;
        keys.into_iter()
            .map(|(_, ty)| ty)
            .chain(std::iter::once(extra))
    }

    /// Type governing undeclared keys.
    #[inline]
    pub fn extra(&self) -> &Type {
        &self.extra
    }

    /// Whether undeclared keys are allowed at all.
    #[inline]
    pub fn allows_extra_keys(&self) -> bool {
        !self.extra.is_nothing()
    }

    /// Whether `array` matches this structure.
    pub fn has_array(&self, array: &ArrayValue) -> bool {
        let allow_extras = self.allows_extra_keys();
        if !allow_extras && array.len() != self.keys.len() {
            return false;
        }

        // With unique declared keys, "all declared keys present" plus equal
        // lengths means equal key sets.
        for (key, ty) in &self.keys {
            match array.get(key) {
                Some(value) if ty.has(value) => {}
                _ => return false,
            }
        }

        if allow_extras && !self.extra.is_anything() {
            return array
                .iter()
                .filter(|(key, _)| !self.declares(key))
                .all(|(_, value)| self.extra.has(value));
        }
        true
    }

    /// Key-set difference between this structure (left) and `other` (right).
    pub fn key_diff<'a>(&'a self, other: &'a StructuredArray) -> KeyDiff<'a> {
        key_diff(self.keys(), other.keys())
    }

    /// Position of this structure relative to `other` in the subtyping order.
    #[tracing::instrument(level = "trace", skip_all, fields(left = self.len(), right = other.len()))]
    pub fn compare(&self, other: &StructuredArray) -> Option<Comparison> {
        let Some(extra_comparison) = self.extra.compare(&other.extra) else {
            tracing::trace!("extra-keys types do not compare");
            return None;
        };

        let diff = self.key_diff(other);
        let only_left = !diff.only_left.is_empty();
        let only_right = !diff.only_right.is_empty();

        if only_left && only_right {
            tracing::trace!("each side declares keys the other lacks");
            return None;
        }
        if only_left && extra_comparison == Comparison::Greater {
            tracing::trace!("left declares extra keys but has the wider extra-keys type");
            return None;
        }
        if only_right && extra_comparison == Comparison::Less {
            tracing::trace!("right declares extra keys but has the wider extra-keys type");
            return None;
        }

        let mut result = extra_comparison;
        for key in &diff.shared {
            let (Some(left), Some(right)) = (self.get(key), other.get(key)) else {
                continue;
            };
            match left.compare(right)? {
                Comparison::Equal => {}
                comparison if result == Comparison::Equal => result = comparison,
                comparison if comparison != result => {
                    tracing::trace!(%key, "shared key contradicts the established direction");
                    return None;
                }
                _ => {}
            }
        }

        if result == Comparison::Greater && only_left {
            tracing::trace!("left is wider on shared keys but requires keys right lacks");
            return None;
        }
        if result == Comparison::Less && only_right {
            tracing::trace!("right is wider on shared keys but requires keys left lacks");
            return None;
        }

        // At most one of these loops runs.
        for key in &diff.only_left {
            let Some(left) = self.get(key) else {
                continue;
            };
            match left.compare(&other.extra) {
                None | Some(Comparison::Greater) => {
                    tracing::trace!(%key, "left-only key does not fit right's extra-keys type");
                    return None;
                }
                Some(_) => result = Comparison::Less,
            }
        }
        for key in &diff.only_right {
            let Some(right) = other.get(key) else {
                continue;
            };
            match self.extra.compare(right) {
                None | Some(Comparison::Less) => {
                    tracing::trace!(%key, "right-only key does not fit left's extra-keys type");
                    return None;
                }
                Some(_) => result = Comparison::Greater,
            }
        }

        Some(result)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
mod tests;
