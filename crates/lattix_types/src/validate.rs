//! Validators: membership tests that explain their failures.
//!
//! `has` answers yes or no. The functions here answer the same question but
//! return a [`TypeMismatch`] naming the first violation, for callers that
//! want to report it. A validator fails exactly when the matching `has`
//! returns `false`.

use lattix_value::{ArrayKey, ArrayValue, Value, ValueKind};

use crate::{key_diff, StructuredArray, Type, TypeKind};

/// Why a value is not a member of a type.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeMismatch {
    #[error("expected a value of type {expected}, found {found}")]
    Value { expected: String, found: ValueKind },

    #[error("expected array element {key} to be an instance of type {expected}, found {found}")]
    Element {
        key: ArrayKey,
        expected: String,
        found: ValueKind,
    },

    #[error("missing array key {key} of type {expected}")]
    MissingKey { key: ArrayKey, expected: String },

    #[error("unexpected array key {key}, structure {structure} allows no extra keys")]
    UnexpectedKey { key: ArrayKey, structure: String },
}

impl Type {
    /// Like [`has`](Self::has), but reports why `value` is not a member.
    ///
    /// # Errors
    ///
    /// The first violation found. Array types report the offending key.
    pub fn check(&self, value: &Value) -> Result<(), TypeMismatch> {
        if self.has(value) {
            return Ok(());
        }

        let detail = match (self.kind(), value) {
            (TypeKind::TypedArray(element), Value::Array(array)) => {
                check_elements(array, element).err()
            }
            (TypeKind::Structured(structure), Value::Array(array)) => {
                check_structure(array, structure).err()
            }
            _ => None,
        };
        Err(detail.unwrap_or_else(|| TypeMismatch::Value {
            expected: self.to_string(),
            found: value.kind(),
        }))
    }
}

/// Whether every element of `array` belongs to `element`.
pub fn has_elements(array: &ArrayValue, element: &Type) -> bool {
    array.values().all(|value| element.has(value))
}

/// Fail on the first element of `array` outside `element`.
///
/// # Errors
///
/// [`TypeMismatch::Element`] for the first offending element.
pub fn check_elements(array: &ArrayValue, element: &Type) -> Result<(), TypeMismatch> {
    match array.iter().find(|(_, value)| !element.has(value)) {
        Some((key, value)) => Err(TypeMismatch::Element {
            key: key.clone(),
            expected: element.to_string(),
            found: value.kind(),
        }),
        None => Ok(()),
    }
}

/// Whether `array` matches `structure`.
#[inline]
pub fn has_structure(array: &ArrayValue, structure: &StructuredArray) -> bool {
    structure.has_array(array)
}

/// Fail on the first way `array` departs from `structure`.
///
/// Declared keys are checked first, in declaration order, then undeclared
/// keys in array order.
///
/// # Errors
///
/// - [`TypeMismatch::MissingKey`] for a declared key the array lacks
/// - [`TypeMismatch::Element`] for a value outside its key's type
/// - [`TypeMismatch::UnexpectedKey`] for an undeclared key when the
///   structure allows none
pub fn check_structure(array: &ArrayValue, structure: &StructuredArray) -> Result<(), TypeMismatch> {
    let diff = key_diff(structure.keys(), array.keys());

    for (key, ty) in structure.entries() {
        match array.get(key) {
            None => {
                return Err(TypeMismatch::MissingKey {
                    key: key.clone(),
                    expected: ty.to_string(),
                })
            }
            Some(value) if !ty.has(value) => {
                return Err(TypeMismatch::Element {
                    key: key.clone(),
                    expected: ty.to_string(),
                    found: value.kind(),
                })
            }
            Some(_) => {}
        }
    }

    let extra = structure.extra();
    for &key in &diff.only_right {
        if !structure.allows_extra_keys() {
            return Err(TypeMismatch::UnexpectedKey {
                key: key.clone(),
                structure: structure.to_string(),
            });
        }
        if let Some(value) = array.get(key) {
            if !extra.has(value) {
                return Err(TypeMismatch::Element {
                    key: key.clone(),
                    expected: extra.to_string(),
                    found: value.kind(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
