//! Runtime values for lattix.
//!
//! This crate is the environment the type lattice is evaluated against:
//! - `Value`: a dynamically typed runtime value (scalars, arrays, objects)
//! - `ArrayValue`: an insertion-ordered map from `ArrayKey` to `Value`
//! - `ClassRegistry`: nominal class/interface definitions and their ancestry
//!
//! Nothing here knows about type descriptors. `lattix_types` consumes these
//! values through their kind tag, array key/value enumeration, and the
//! ancestry queries on `ClassDef`.

mod array;
mod class;
mod object;
mod value;

pub use array::{ArrayError, ArrayKey, ArrayValue};
pub use class::{ClassDef, ClassError, ClassKind, ClassRef, ClassRegistry, SharedClassRegistry};
pub use object::Object;
pub use value::{Value, ValueKind};

/// Build a `Value::Array` with sequential integer keys.
///
/// Each element goes through `Value::from`, so scalars, strings, objects
/// and nested values can be mixed freely.
///
/// ```
/// use lattix_value::{list, Value};
///
/// let value = list![1, 2, "f"];
/// assert!(value.is_array());
/// assert_eq!(list![], Value::Array(lattix_value::ArrayValue::new()));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::Array($crate::ArrayValue::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Value::list([$($crate::Value::from($element)),+])
    };
}

/// Build a `Value::Array` from explicit `key => value` pairs, in order.
///
/// ```
/// use lattix_value::{keyed, ArrayKey, Value};
///
/// let value = keyed! { 1 => 1, 0 => Value::Null };
/// let array = value.as_array().unwrap();
/// assert_eq!(array.keys().next(), Some(&ArrayKey::Int(1)));
/// ```
#[macro_export]
macro_rules! keyed {
    ($($key:expr => $element:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut array = $crate::ArrayValue::new();
        $( array.insert($crate::ArrayKey::from($key), $crate::Value::from($element)); )*
        $crate::Value::Array(array)
    }};
}
