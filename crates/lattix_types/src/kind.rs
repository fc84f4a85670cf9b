//! The closed set of type descriptor variants.
//!
//! Every `Type` wraps exactly one `TypeKind`. Comparison, membership and
//! formatting all match on this enum exhaustively, so a new variant cannot
//! be added without deciding how each capability treats it.
//!
//! # Kind Groups
//!
//! - Trivial: `Anything` (top), `Nothing` (bottom)
//! - Scalars: `Bool`, `True`, `False`, `Float`, `Int`, `Null`, `Str`
//! - Arrays: `BaseArray`, `TypedArray`, `Structured`
//! - Objects: `BaseObject`, `Class`

use lattix_value::ClassRef;

use crate::{StructuredArray, Type};

/// Type descriptor variant.
#[derive(Debug)]
pub enum TypeKind {
    /// Every value (top of the lattice).
    Anything,
    /// No value (bottom of the lattice).
    Nothing,
    /// `true` and `false`.
    Bool,
    /// Only `true`.
    True,
    /// Only `false`.
    False,
    /// 64-bit floats.
    Float,
    /// 64-bit signed integers.
    Int,
    /// Only `null`.
    Null,
    /// UTF-8 strings.
    Str,
    /// Every array.
    BaseArray,
    /// Every object.
    BaseObject,
    /// Instances of a class or its descendants.
    Class(ClassRef),
    /// Arrays whose elements all belong to the wrapped type.
    TypedArray(Type),
    /// Arrays with per-key types and a policy for undeclared keys.
    Structured(StructuredArray),
}

impl TypeKind {
    /// Name of this kind, independent of any payload.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Anything => "anything",
            Self::Nothing => "nothing",
            Self::Bool => "bool",
            Self::True => "true",
            Self::False => "false",
            Self::Float => "float",
            Self::Int => "int",
            Self::Null => "null",
            Self::Str => "string",
            Self::BaseArray => "array",
            Self::BaseObject => "object",
            Self::Class(_) => "class",
            Self::TypedArray(_) => "typed_array",
            Self::Structured(_) => "structured_array",
        }
    }

    /// Whether this is `Anything` or `Nothing`.
    #[inline]
    pub const fn is_trivial(&self) -> bool {
        matches!(self, Self::Anything | Self::Nothing)
    }
}
