//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a `Type` is built and cached next to
//! its kind, so questions like "is this an array type" never need a match.
//!
//! Flags are organized into two groups:
//! - **Category flags**: which family of the lattice the type belongs to,
//!   read by `compare` to reject cross-family pairs up front
//! - **Optimization flags**: shortcuts for membership tests

use bitflags::bitflags;

use crate::TypeKind;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Category Flags (bits 0-7) ===

        /// `Anything` or `Nothing`.
        const IS_TRIVIAL = 1 << 0;
        /// Only contains arrays.
        const IS_ARRAY = 1 << 1;
        /// Only contains objects.
        const IS_OBJECT = 1 << 2;

        // === Optimization Flags (bits 8-15) ===

        /// Typed array whose element type is `anything`: every array is a member.
        const ACCEPTS_ANY_ELEMENT = 1 << 8;
    }
}

impl TypeFlags {
    /// Compute the flags of a kind from its own shape.
    pub fn compute(kind: &TypeKind) -> Self {
        match kind {
            TypeKind::Anything | TypeKind::Nothing => Self::IS_TRIVIAL,
            TypeKind::Bool
            | TypeKind::True
            | TypeKind::False
            | TypeKind::Float
            | TypeKind::Int
            | TypeKind::Null
            | TypeKind::Str => Self::empty(),
            TypeKind::BaseArray | TypeKind::Structured(_) => Self::IS_ARRAY,
            TypeKind::TypedArray(element) if element.is_anything() => {
                Self::IS_ARRAY | Self::ACCEPTS_ANY_ELEMENT
            }
            TypeKind::TypedArray(_) => Self::IS_ARRAY,
            TypeKind::BaseObject | TypeKind::Class(_) => Self::IS_OBJECT,
        }
    }

    /// Primary category of a type based on its flags.
    #[inline]
    pub const fn category(self) -> TypeCategory {
        if self.contains(Self::IS_TRIVIAL) {
            TypeCategory::Trivial
        } else if self.contains(Self::IS_ARRAY) {
            TypeCategory::Array
        } else if self.contains(Self::IS_OBJECT) {
            TypeCategory::Object
        } else {
            TypeCategory::Scalar
        }
    }
}

/// Family of a type in the lattice, derived from [`TypeFlags`].
///
/// Types from different non-trivial categories never compare.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeCategory {
    /// `anything` or `nothing`
    Trivial,
    /// bool, true, false, float, int, null, string
    Scalar,
    /// array, typed arrays, structured arrays
    Array,
    /// object and class types
    Object,
}

impl TypeCategory {
    /// Whether two types of these categories can be ordered at all.
    #[inline]
    pub fn may_compare(self, other: Self) -> bool {
        self == other || self == Self::Trivial || other == Self::Trivial
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
