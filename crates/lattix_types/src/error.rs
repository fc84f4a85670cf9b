//! Errors raised while constructing type descriptors.
//!
//! Comparison and membership never fail: incomparability is `None` and a
//! non-member is `false`. Only construction can be rejected.

use lattix_value::{ArrayKey, ClassError};

/// Error building a type descriptor.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeError {
    /// A structured array key was declared with type `nothing`, which no
    /// array could ever satisfy.
    #[error("key {key} cannot have type nothing")]
    UninhabitedKey { key: ArrayKey },

    /// A structured array declared the same key twice.
    #[error("key {key} is declared more than once")]
    DuplicateKey { key: ArrayKey },

    /// A class type named a class the registry does not know.
    #[error(transparent)]
    Class(#[from] ClassError),
}
