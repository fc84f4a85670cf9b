//! Stack growth for recursion over nested type descriptors.
//!
//! Comparison, membership and formatting recurse once per nesting level of a
//! typed or structured array. Descriptors are built by callers, so nesting
//! depth is unbounded; every recursive step goes through
//! [`ensure_sufficient_stack`]. Dropping a descriptor does not recurse at
//! all: `TypeData` releases its children from an explicit work list.
//!
//! On wasm the stack cannot be grown and the closure is called directly.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
