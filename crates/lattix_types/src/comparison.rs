//! Result of comparing two types in the subtyping order.
//!
//! The subtyping order is partial, so every comparison entry point returns
//! `Option<Comparison>`: `None` means the two types are incomparable
//! (neither is a subtype of the other).

use std::cmp::Ordering;
use std::fmt;

/// Relative position of the left operand in a comparison.
///
/// For types, `Less` means the left type is a strict subtype of the right,
/// `Greater` a strict supertype.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(i8)]
pub enum Comparison {
    Less = -1,
    Equal = 0,
    Greater = 1,
}

impl Comparison {
    /// The comparison seen from the other operand.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
        }
    }

    #[inline]
    pub const fn is_less(self) -> bool {
        matches!(self, Self::Less)
    }

    #[inline]
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }

    #[inline]
    pub const fn is_greater(self) -> bool {
        matches!(self, Self::Greater)
    }

    #[inline]
    pub const fn is_le(self) -> bool {
        !self.is_greater()
    }

    #[inline]
    pub const fn is_ge(self) -> bool {
        !self.is_less()
    }

    /// Pick the value matching this comparison.
    #[inline]
    pub fn choose<T>(self, less: T, equal: T, greater: T) -> T {
        match self {
            Self::Less => less,
            Self::Equal => equal,
            Self::Greater => greater,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Less => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Greater => Ordering::Greater,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.choose("less", "equal", "greater"))
    }
}

const _: () = assert!(std::mem::size_of::<Comparison>() == 1);
