//! The `Type` handle.
//!
//! A `Type` is an immutable, reference-counted descriptor. Cloning is a
//! pointer copy; the kind and its cached flags are shared. Primitive and
//! trivial types are process-wide singletons (see `registry`), so repeated
//! accessor calls hand out clones of the same allocation.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use lattix_value::{ClassRef, Value};

use crate::{compare, membership, Comparison, StructuredArray, TypeCategory, TypeFlags, TypeKind};

struct TypeData {
    kind: TypeKind,
    flags: TypeFlags,
}

/// Nested descriptors are released iteratively, so dropping a deep type
/// does not recurse once per nesting level.
impl Drop for TypeData {
    fn drop(&mut self) {
        if !matches!(self.kind, TypeKind::TypedArray(_) | TypeKind::Structured(_)) {
            return;
        }

        let mut pending = Vec::new();
        take_children(&mut self.kind, &mut pending);
        while let Some(child) = pending.pop() {
            // Shared children are still referenced elsewhere and stay alive.
            if let Some(mut data) = Arc::into_inner(child.0) {
                take_children(&mut data.kind, &mut pending);
            }
        }
    }
}

/// Move the child descriptors of `kind` onto `pending`, leaving a leaf.
fn take_children(kind: &mut TypeKind, pending: &mut Vec<Type>) {
    match std::mem::replace(kind, TypeKind::Nothing) {
        TypeKind::TypedArray(element) => pending.push(element),
        TypeKind::Structured(structure) => pending.extend(structure.into_types()),
        _ => {}
    }
}

/// A runtime type descriptor.
///
/// Supports three operations: membership ([`has`](Self::has)), partial-order
/// comparison ([`compare`](Self::compare)), and a canonical rendering via
/// `Display`.
#[derive(Clone)]
pub struct Type(Arc<TypeData>);

impl Type {
    /// Wrap a kind, computing its flags.
    ///
    /// Singleton kinds must only be built once, by the registry.
    pub(crate) fn from_kind(kind: TypeKind) -> Self {
        let flags = TypeFlags::compute(&kind);
        Self(Arc::new(TypeData { kind, flags }))
    }

    #[inline]
    pub fn kind(&self) -> &TypeKind {
        &self.0.kind
    }

    #[inline]
    pub fn flags(&self) -> TypeFlags {
        self.0.flags
    }

    #[inline]
    pub fn category(&self) -> TypeCategory {
        self.0.flags.category()
    }

    /// Whether two handles point at the same descriptor allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub fn is_anything(&self) -> bool {
        matches!(self.kind(), TypeKind::Anything)
    }

    #[inline]
    pub fn is_nothing(&self) -> bool {
        matches!(self.kind(), TypeKind::Nothing)
    }

    /// The class of a class type.
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self.kind() {
            TypeKind::Class(class) => Some(class),
            _ => None,
        }
    }

    /// The element type of a typed array type.
    pub fn element_type(&self) -> Option<&Type> {
        match self.kind() {
            TypeKind::TypedArray(element) => Some(element),
            _ => None,
        }
    }

    /// The structure of a structured array type.
    pub fn as_structured(&self) -> Option<&StructuredArray> {
        match self.kind() {
            TypeKind::Structured(structure) => Some(structure),
            _ => None,
        }
    }

    /// Whether `value` is an instance of this type.
    ///
    /// Total: malformed or unexpected values yield `false`, never a panic.
    pub fn has(&self, value: &Value) -> bool {
        membership::has(self, value)
    }

    /// Position of this type relative to `other` in the subtyping order.
    ///
    /// `Less`: strict subtype. `Equal`: same set of values. `Greater`: strict
    /// supertype. `None`: incomparable.
    pub fn compare(&self, other: &Type) -> Option<Comparison> {
        compare::compare(self, other)
    }

    /// `self` is equal to or a strict subtype of `other`.
    pub fn is_subtype_of(&self, other: &Type) -> bool {
        self.compare(other).is_some_and(Comparison::is_le)
    }

    /// `self` is equal to or a strict supertype of `other`.
    pub fn is_supertype_of(&self, other: &Type) -> bool {
        self.compare(other).is_some_and(Comparison::is_ge)
    }

    pub fn is_strict_subtype_of(&self, other: &Type) -> bool {
        self.compare(other).is_some_and(Comparison::is_less)
    }

    pub fn is_strict_supertype_of(&self, other: &Type) -> bool {
        self.compare(other).is_some_and(Comparison::is_greater)
    }
}

/// Two types are equal when they denote the same set of values.
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_some_and(Comparison::is_equal)
    }
}

/// The subtyping order.
impl PartialOrd for Type {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).map(Ordering::from)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({self})")
    }
}

// A Type is one pointer wide.
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Type>() == 8);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
