//! Canonical rendering of type descriptors.
//!
//! - primitives and trivial types render as their kind name (`int`, `anything`)
//! - class types render as the class name
//! - typed arrays render as `{element}[]`
//! - structured arrays render as `[key: type, ...]`, with string keys quoted
//!   and a trailing `...` (or `...{extra}`) when undeclared keys are allowed

use std::fmt::{self, Write};

use crate::stack::ensure_sufficient_stack;
use crate::{StructuredArray, Type, TypeKind};

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TypeKind::Class(class) => f.write_str(class.name()),
            TypeKind::TypedArray(element) => {
                ensure_sufficient_stack(|| write!(f, "{element}[]"))
            }
            TypeKind::Structured(structure) => {
                ensure_sufficient_stack(|| fmt::Display::fmt(structure, f))
            }
            kind => f.write_str(kind.name()),
        }
    }
}

impl fmt::Display for StructuredArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (index, (key, ty)) in self.entries().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {ty}")?;
        }

        let extra = self.extra();
        if !extra.is_nothing() {
            if !self.is_empty() {
                f.write_char(' ')?;
            }
            f.write_str("...")?;
            if !extra.is_anything() {
                write!(f, "{extra}")?;
            }
        }
        f.write_char(']')
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
