//! Subtype comparison between type descriptors.
//!
//! Each kind handles the cases it knows about, then hands the rest to the
//! trivial fallback of the other operand: `anything` on the right makes the
//! left a strict subtype, `nothing` on the right makes it a strict supertype,
//! and everything else is incomparable. `Anything` and `Nothing` themselves
//! are the base cases.
//!
//! # Lattice
//!
//! ```text
//!                    anything
//!                       |
//!   bool  float  int  null  string   array          object
//!    |                                 |               |
//! true false              typed arrays, structured   classes (by ancestry)
//!                       |
//!                    nothing
//! ```

use lattix_value::ClassDef;

use crate::stack::ensure_sufficient_stack;
use crate::{Comparison, Type, TypeKind};

/// Compare `this` against `other`.
pub(crate) fn compare(this: &Type, other: &Type) -> Option<Comparison> {
    if this.ptr_eq(other) {
        return Some(Comparison::Equal);
    }
    if !this.category().may_compare(other.category()) {
        return None;
    }
    ensure_sufficient_stack(|| compare_kinds(this, other))
}

fn compare_kinds(this: &Type, other: &Type) -> Option<Comparison> {
    match this.kind() {
        TypeKind::Anything => Some(if other.is_anything() {
            Comparison::Equal
        } else {
            Comparison::Greater
        }),
        TypeKind::Nothing => Some(if other.is_nothing() {
            Comparison::Equal
        } else {
            Comparison::Less
        }),
        TypeKind::Bool => match other.kind() {
            TypeKind::Bool => Some(Comparison::Equal),
            TypeKind::True | TypeKind::False => Some(Comparison::Greater),
            _ => trivial_fallback(other),
        },
        TypeKind::True => compare_bool_literal(true, other),
        TypeKind::False => compare_bool_literal(false, other),
        TypeKind::Float | TypeKind::Int | TypeKind::Null | TypeKind::Str => {
            if std::mem::discriminant(this.kind()) == std::mem::discriminant(other.kind()) {
                Some(Comparison::Equal)
            } else {
                trivial_fallback(other)
            }
        }
        TypeKind::BaseArray => match other.kind() {
            TypeKind::BaseArray => Some(Comparison::Equal),
            TypeKind::TypedArray(_) | TypeKind::Structured(_) => Some(Comparison::Greater),
            _ => trivial_fallback(other),
        },
        TypeKind::BaseObject => match other.kind() {
            TypeKind::BaseObject => Some(Comparison::Equal),
            TypeKind::Class(_) => Some(Comparison::Greater),
            _ => trivial_fallback(other),
        },
        TypeKind::Class(class) => match other.kind() {
            TypeKind::BaseObject => Some(Comparison::Less),
            TypeKind::Class(other_class) => compare_classes(class, other_class),
            _ => trivial_fallback(other),
        },
        TypeKind::TypedArray(element) => match other.kind() {
            TypeKind::BaseArray => Some(Comparison::Less),
            TypeKind::TypedArray(other_element) => element.compare(other_element),
            _ => trivial_fallback(other),
        },
        TypeKind::Structured(structure) => match other.kind() {
            TypeKind::BaseArray => Some(Comparison::Less),
            TypeKind::Structured(other_structure) => structure.compare(other_structure),
            _ => trivial_fallback(other),
        },
    }
}

/// Result for the left operand once `other` has been found to be outside
/// the left operand's own family.
///
/// Called on the right operand: `Less` when it is `anything`, `Greater` when
/// it is `nothing`, `None` otherwise.
pub(crate) fn trivial_fallback(other: &Type) -> Option<Comparison> {
    match other.kind() {
        TypeKind::Anything => Some(Comparison::Less),
        TypeKind::Nothing => Some(Comparison::Greater),
        TypeKind::Bool
        | TypeKind::True
        | TypeKind::False
        | TypeKind::Float
        | TypeKind::Int
        | TypeKind::Null
        | TypeKind::Str
        | TypeKind::BaseArray
        | TypeKind::BaseObject
        | TypeKind::Class(_)
        | TypeKind::TypedArray(_)
        | TypeKind::Structured(_) => None,
    }
}

fn compare_bool_literal(value: bool, other: &Type) -> Option<Comparison> {
    match other.kind() {
        TypeKind::Bool => Some(Comparison::Less),
        TypeKind::True => value.then_some(Comparison::Equal),
        TypeKind::False => (!value).then_some(Comparison::Equal),
        _ => trivial_fallback(other),
    }
}

/// Nominal comparison: equal names, then ancestry in either direction.
pub fn compare_classes(class: &ClassDef, other: &ClassDef) -> Option<Comparison> {
    if class.name() == other.name() {
        Some(Comparison::Equal)
    } else if class.is_descendant_of(other) {
        Some(Comparison::Less)
    } else if other.is_descendant_of(class) {
        Some(Comparison::Greater)
    } else {
        None
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
