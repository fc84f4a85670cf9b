//! lattix: runtime type descriptors with a structural subtyping lattice.
//!
//! ```
//! use lattix::{list, Comparison, Type};
//!
//! let ints = Type::array_of(Type::int());
//! assert!(ints.has(&list![1, 2, 3]));
//! assert_eq!(ints.compare(&Type::array()), Some(Comparison::Less));
//!
//! let pair = Type::positional([Type::int(), Type::string()], Type::nothing())?;
//! assert_eq!(pair.to_string(), "[0: int, 1: string]");
//! # Ok::<(), lattix::TypeError>(())
//! ```
//!
//! Types live in `lattix_types`, values and the class registry in
//! `lattix_value`; this crate re-exports both.

use std::sync::Once;

pub use lattix_types::{
    check_elements, check_structure, compare_classes, has_elements, has_structure, key_diff,
    Comparison, KeyDiff, StructuredArray, Type, TypeCategory, TypeError, TypeFlags, TypeKind,
    TypeMismatch,
};
pub use lattix_value::{
    keyed, list, ArrayError, ArrayKey, ArrayValue, ClassDef, ClassError, ClassKind, ClassRef, ClassRegistry,
    Object, SharedClassRegistry, Value, ValueKind,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=lattix_types=trace` to see why structures are incomparable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
            tracing::debug!("tracing initialized");
        }
    });
}
