//! Runtime type descriptors for lattix.
//!
//! A [`Type`] describes a set of runtime [`Value`](lattix_value::Value)s and
//! supports three operations:
//! - `has`: membership of a value
//! - `compare`: position relative to another type in the subtyping order,
//!   `None` when the two are incomparable
//! - `Display`: a canonical rendering for diagnostics
//!
//! # Lattice
//!
//! `anything` is the top and `nothing` the bottom. Primitives are pairwise
//! incomparable siblings. Class types order by ancestry below `object`.
//! Typed arrays order by element type and structured arrays by shape, both
//! below `array`.
//!
//! # Construction
//!
//! Trivial, primitive and boolean literal types are process-wide singletons
//! (`Type::int()`). Class and array types are built per call and can fail:
//! see [`TypeError`].

mod compare;
mod comparison;
mod error;
mod flags;
mod format;
mod key_diff;
mod kind;
mod membership;
mod registry;
mod stack;
mod structured;
mod ty;
mod validate;

pub use compare::compare_classes;
pub use comparison::Comparison;
pub use error::TypeError;
pub use flags::{TypeCategory, TypeFlags};
pub use key_diff::{key_diff, KeyDiff};
pub use kind::TypeKind;
pub use structured::StructuredArray;
pub use ty::Type;
pub use validate::{check_elements, check_structure, has_elements, has_structure, TypeMismatch};

// Descriptors are shared freely between threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Type>();
};
