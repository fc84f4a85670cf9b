//! Class instances.

use crate::{ClassDef, ClassRef, Value};

/// An instance of a registered class with named properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    class: ClassRef,
    properties: Vec<(String, Value)>,
}

impl Object {
    /// Create an instance of `class` with no properties.
    pub fn new(class: ClassRef) -> Self {
        Self {
            class,
            properties: Vec::new(),
        }
    }

    /// Set a property, replacing an earlier value with the same name.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    /// The runtime class of this instance.
    #[inline]
    pub fn class(&self) -> &ClassRef {
        &self.class
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Whether this object's class is `class` or one of its descendants.
    pub fn is_instance_of(&self, class: &ClassDef) -> bool {
        self.class.is_same_or_descendant_of(class)
    }
}
