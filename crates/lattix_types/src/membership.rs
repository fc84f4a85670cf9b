//! Membership tests: is a runtime value an instance of a type.

use lattix_value::Value;

use crate::stack::ensure_sufficient_stack;
use crate::validate::has_elements;
use crate::{Type, TypeFlags, TypeKind};

pub(crate) fn has(ty: &Type, value: &Value) -> bool {
    // Array types only ever contain arrays.
    if ty.flags().contains(TypeFlags::IS_ARRAY) && !value.is_array() {
        return false;
    }

    match ty.kind() {
        TypeKind::Anything => true,
        TypeKind::Nothing => false,
        TypeKind::Bool => matches!(value, Value::Bool(_)),
        TypeKind::True => matches!(value, Value::Bool(true)),
        TypeKind::False => matches!(value, Value::Bool(false)),
        TypeKind::Float => matches!(value, Value::Float(_)),
        TypeKind::Int => matches!(value, Value::Int(_)),
        TypeKind::Null => matches!(value, Value::Null),
        TypeKind::Str => matches!(value, Value::Str(_)),
        TypeKind::BaseArray => value.is_array(),
        TypeKind::BaseObject => value.is_object(),
        TypeKind::Class(class) => value
            .as_object()
            .is_some_and(|object| object.is_instance_of(class)),
        TypeKind::TypedArray(element) => match value {
            Value::Array(_) if ty.flags().contains(TypeFlags::ACCEPTS_ANY_ELEMENT) => true,
            Value::Array(array) => ensure_sufficient_stack(|| has_elements(array, element)),
            _ => false,
        },
        TypeKind::Structured(structure) => match value {
            Value::Array(array) => ensure_sufficient_stack(|| structure.has_array(array)),
            _ => false,
        },
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
