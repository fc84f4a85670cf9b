//! Nominal class and interface registry.
//!
//! The registry answers the two questions class types need from their
//! environment: does a name refer to a defined class, and is one class a
//! descendant of another.
//!
//! # Design
//!
//! - Ancestry is captured at registration time: each `ClassDef` holds
//!   `ClassRef`s to its parent and implemented interfaces
//! - A class can only name ancestors that are already registered, so the
//!   ancestry graph is acyclic by construction
//! - Definitions are immutable once registered; lookups hand out `Arc` clones

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Shared, immutable handle to a registered class or interface.
pub type ClassRef = Arc<ClassDef>;

/// Whether a definition is a concrete class or an interface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
}

/// A registered class or interface and its direct ancestors.
#[derive(Debug, Eq, PartialEq)]
pub struct ClassDef {
    name: String,
    kind: ClassKind,
    /// Parent class (classes only).
    parent: Option<ClassRef>,
    /// Implemented interfaces for classes, extended interfaces for interfaces.
    interfaces: Vec<ClassRef>,
}

impl ClassDef {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    #[inline]
    pub fn parent(&self) -> Option<&ClassRef> {
        self.parent.as_ref()
    }

    #[inline]
    pub fn interfaces(&self) -> &[ClassRef] {
        &self.interfaces
    }

    /// Whether `ancestor` appears anywhere above this definition, through
    /// parents or interfaces. A definition is not its own descendant.
    pub fn is_descendant_of(&self, ancestor: &ClassDef) -> bool {
        self.parent
            .iter()
            .chain(&self.interfaces)
            .any(|direct| direct.name == ancestor.name || direct.is_descendant_of(ancestor))
    }

    /// `self == ancestor` by name, or [`is_descendant_of`](Self::is_descendant_of).
    pub fn is_same_or_descendant_of(&self, ancestor: &ClassDef) -> bool {
        self.name == ancestor.name || self.is_descendant_of(ancestor)
    }

    /// Parent chain from the direct parent up to the root class.
    pub fn ancestors(&self) -> impl Iterator<Item = &ClassRef> {
        std::iter::successors(self.parent.as_ref(), |class| class.parent.as_ref())
    }
}

impl fmt::Display for ClassDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Error from defining or resolving a class.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ClassError {
    /// No class or interface with this name is registered.
    #[error("class \"{name}\" does not exist")]
    NotFound { name: String },

    /// A definition with this name is already registered.
    #[error("class \"{name}\" is already defined")]
    AlreadyDefined { name: String },

    /// A named parent or interface is not registered yet.
    #[error("cannot define \"{name}\": ancestor \"{ancestor}\" does not exist")]
    UnknownAncestor { name: String, ancestor: String },

    /// A class tried to extend an interface.
    #[error("cannot define \"{name}\": \"{parent}\" is an interface, not a class")]
    ParentNotClass { name: String, parent: String },

    /// A class implemented, or an interface extended, a concrete class.
    #[error("cannot define \"{name}\": \"{interface}\" is not an interface")]
    NotAnInterface { name: String, interface: String },
}

/// Registry of class and interface definitions.
///
/// # Thread Safety
/// Registration takes a write lock for the whole definition so the
/// existence checks and the insert are atomic. Lookups take a read lock and
/// return an owned `ClassRef`.
#[derive(Default)]
pub struct ClassRegistry {
    classes: RwLock<FxHashMap<String, ClassRef>>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a concrete class with an optional parent class and a list of
    /// implemented interfaces.
    pub fn define_class(
        &self,
        name: &str,
        parent: Option<&str>,
        interfaces: &[&str],
    ) -> Result<ClassRef, ClassError> {
        let mut classes = self.classes.write();
        if classes.contains_key(name) {
            return Err(ClassError::AlreadyDefined {
                name: name.to_owned(),
            });
        }

        let parent = parent
            .map(|parent| {
                let class = lookup_ancestor(&classes, name, parent)?;
                match class.kind {
                    ClassKind::Class => Ok(class),
                    ClassKind::Interface => Err(ClassError::ParentNotClass {
                        name: name.to_owned(),
                        parent: parent.to_owned(),
                    }),
                }
            })
            .transpose()?;
        let interfaces = resolve_interfaces(&classes, name, interfaces)?;

        let class = Arc::new(ClassDef {
            name: name.to_owned(),
            kind: ClassKind::Class,
            parent,
            interfaces,
        });
        classes.insert(name.to_owned(), Arc::clone(&class));
        tracing::debug!(class = name, "registered class");
        Ok(class)
    }

    /// Define an interface extending zero or more interfaces.
    pub fn define_interface(&self, name: &str, extends: &[&str]) -> Result<ClassRef, ClassError> {
        let mut classes = self.classes.write();
        if classes.contains_key(name) {
            return Err(ClassError::AlreadyDefined {
                name: name.to_owned(),
            });
        }

        let interfaces = resolve_interfaces(&classes, name, extends)?;
        let interface = Arc::new(ClassDef {
            name: name.to_owned(),
            kind: ClassKind::Interface,
            parent: None,
            interfaces,
        });
        classes.insert(name.to_owned(), Arc::clone(&interface));
        tracing::debug!(interface = name, "registered interface");
        Ok(interface)
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<ClassRef> {
        self.classes.read().get(name).cloned()
    }

    /// Look up a definition by name, failing with [`ClassError::NotFound`].
    pub fn resolve(&self, name: &str) -> Result<ClassRef, ClassError> {
        self.get(name).ok_or_else(|| ClassError::NotFound {
            name: name.to_owned(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.read().contains_key(name)
    }

    /// Whether `child` names a strict descendant of `ancestor`.
    ///
    /// Returns `None` when either name is not registered.
    pub fn is_subclass_of(&self, child: &str, ancestor: &str) -> Option<bool> {
        let classes = self.classes.read();
        let child = classes.get(child)?;
        let ancestor = classes.get(ancestor)?;
        Some(child.is_descendant_of(ancestor))
    }

    pub fn len(&self) -> usize {
        self.classes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.read().is_empty()
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("len", &self.len())
            .finish()
    }
}

fn lookup_ancestor(
    classes: &FxHashMap<String, ClassRef>,
    name: &str,
    ancestor: &str,
) -> Result<ClassRef, ClassError> {
    classes
        .get(ancestor)
        .cloned()
        .ok_or_else(|| ClassError::UnknownAncestor {
            name: name.to_owned(),
            ancestor: ancestor.to_owned(),
        })
}

fn resolve_interfaces(
    classes: &FxHashMap<String, ClassRef>,
    name: &str,
    interfaces: &[&str],
) -> Result<Vec<ClassRef>, ClassError> {
    interfaces
        .iter()
        .map(|&interface| {
            let resolved = lookup_ancestor(classes, name, interface)?;
            match resolved.kind {
                ClassKind::Interface => Ok(resolved),
                ClassKind::Class => Err(ClassError::NotAnInterface {
                    name: name.to_owned(),
                    interface: interface.to_owned(),
                }),
            }
        })
        .collect()
}

/// Clonable handle to a registry shared between threads.
///
/// Every clone sees the same definitions.
#[derive(Clone, Debug, Default)]
pub struct SharedClassRegistry(Arc<ClassRegistry>);

impl SharedClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::ops::Deref for SharedClassRegistry {
    type Target = ClassRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests use unwrap/expect to panic on unexpected state"
)]
mod tests;
