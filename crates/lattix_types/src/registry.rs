//! Process-wide singletons and constructors for every type variant.
//!
//! Trivial, primitive and boolean literal types are built once, on first
//! use, into a fixed table. Their accessors hand out clones of the same
//! allocation, so `Type::int().ptr_eq(&Type::int())` always holds.
//! Class and array types are built per call.

use std::sync::LazyLock;

use lattix_value::{ArrayKey, ClassRef, ClassRegistry};

use crate::{StructuredArray, Type, TypeError, TypeKind};

/// Pre-built singleton descriptors, one slot per fixed variant.
struct Singletons {
    anything: Type,
    nothing: Type,
    bool: Type,
    true_type: Type,
    false_type: Type,
    float: Type,
    int: Type,
    null: Type,
    string: Type,
    array: Type,
    object: Type,
}

static SINGLETONS: LazyLock<Singletons> = LazyLock::new(|| {
    tracing::trace!("building singleton type table");
    Singletons {
        anything: Type::from_kind(TypeKind::Anything),
        nothing: Type::from_kind(TypeKind::Nothing),
        bool: Type::from_kind(TypeKind::Bool),
        true_type: Type::from_kind(TypeKind::True),
        false_type: Type::from_kind(TypeKind::False),
        float: Type::from_kind(TypeKind::Float),
        int: Type::from_kind(TypeKind::Int),
        null: Type::from_kind(TypeKind::Null),
        string: Type::from_kind(TypeKind::Str),
        array: Type::from_kind(TypeKind::BaseArray),
        object: Type::from_kind(TypeKind::BaseObject),
    }
});

impl Type {
    /// Every value.
    pub fn anything() -> Type {
        SINGLETONS.anything.clone()
    }

    /// No value.
    pub fn nothing() -> Type {
        SINGLETONS.nothing.clone()
    }

    pub fn bool() -> Type {
        SINGLETONS.bool.clone()
    }

    /// Only `true`.
    pub fn true_type() -> Type {
        SINGLETONS.true_type.clone()
    }

    /// Only `false`.
    pub fn false_type() -> Type {
        SINGLETONS.false_type.clone()
    }

    pub fn float() -> Type {
        SINGLETONS.float.clone()
    }

    pub fn int() -> Type {
        SINGLETONS.int.clone()
    }

    pub fn null() -> Type {
        SINGLETONS.null.clone()
    }

    pub fn string() -> Type {
        SINGLETONS.string.clone()
    }

    /// Every array.
    pub fn array() -> Type {
        SINGLETONS.array.clone()
    }

    /// Every object.
    pub fn object() -> Type {
        SINGLETONS.object.clone()
    }

    /// Arrays whose elements all belong to `element`.
    pub fn array_of(element: Type) -> Type {
        Type::from_kind(TypeKind::TypedArray(element))
    }

    /// Instances of an already resolved class or its descendants.
    pub fn from_class(class: ClassRef) -> Type {
        Type::from_kind(TypeKind::Class(class))
    }

    /// Instances of the class or interface registered as `name`.
    ///
    /// # Errors
    ///
    /// [`TypeError::Class`] when `name` is not registered.
    pub fn class(registry: &ClassRegistry, name: &str) -> Result<Type, TypeError> {
        let class = registry.resolve(name).map_err(|error| {
            tracing::debug!(class = name, "class type names an unknown class");
            TypeError::from(error)
        })?;
        Ok(Type::from_class(class))
    }

    /// An exact structure: exactly the declared keys, each of its type.
    ///
    /// # Errors
    ///
    /// [`TypeError::UninhabitedKey`] when a key is mapped to `nothing`,
    /// [`TypeError::DuplicateKey`] when a key is declared twice.
    pub fn structured<K: Into<ArrayKey>>(
        keys: impl IntoIterator<Item = (K, Type)>,
    ) -> Result<Type, TypeError> {
        Type::loose_structured(keys, Type::nothing())
    }

    /// A structure whose undeclared keys must hold values of `extra`.
    ///
    /// `extra` of `nothing` forbids undeclared keys, `anything` allows any.
    ///
    /// # Errors
    ///
    /// Same as [`structured`](Self::structured).
    pub fn loose_structured<K: Into<ArrayKey>>(
        keys: impl IntoIterator<Item = (K, Type)>,
        extra: Type,
    ) -> Result<Type, TypeError> {
        let structure =
            StructuredArray::new(keys.into_iter().map(|(key, ty)| (key.into(), ty)), extra)?;
        Ok(Type::from_kind(TypeKind::Structured(structure)))
    }

    /// A structure over the keys `0..types.len()`, like a tuple.
    ///
    /// # Errors
    ///
    /// [`TypeError::UninhabitedKey`] when one of `types` is `nothing`.
    pub fn positional(
        types: impl IntoIterator<Item = Type>,
        extra: Type,
    ) -> Result<Type, TypeError> {
        Type::loose_structured(
            types
                .into_iter()
                .zip(0_i64..)
                .map(|(ty, index)| (ArrayKey::Int(index), ty)),
            extra,
        )
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
