use super::*;
use crate::{Object, Value};
use pretty_assertions::assert_eq;

fn hierarchy() -> ClassRegistry {
    let registry = ClassRegistry::new();
    registry
        .define_interface("Shape", &[])
        .expect("Shape is new");
    registry
        .define_class("A", None, &[])
        .expect("A is new");
    registry
        .define_class("B", Some("A"), &["Shape"])
        .expect("B is new");
    registry
        .define_class("C", Some("B"), &[])
        .expect("C is new");
    registry
        .define_class("D", None, &[])
        .expect("D is new");
    registry
}

#[test]
fn ancestry_through_parents() {
    let registry = hierarchy();

    assert_eq!(registry.is_subclass_of("B", "A"), Some(true));
    assert_eq!(registry.is_subclass_of("C", "A"), Some(true));
    assert_eq!(registry.is_subclass_of("A", "B"), Some(false));
    assert_eq!(registry.is_subclass_of("A", "A"), Some(false));
    assert_eq!(registry.is_subclass_of("D", "A"), Some(false));
}

#[test]
fn ancestry_through_interfaces() {
    let registry = hierarchy();

    assert_eq!(registry.is_subclass_of("B", "Shape"), Some(true));
    assert_eq!(registry.is_subclass_of("C", "Shape"), Some(true));
    assert_eq!(registry.is_subclass_of("A", "Shape"), Some(false));
}

#[test]
fn unknown_names_have_no_answer() {
    let registry = hierarchy();

    assert_eq!(registry.is_subclass_of("Missing", "A"), None);
    assert_eq!(registry.is_subclass_of("A", "Missing"), None);
}

#[test]
fn ancestors_walks_parent_chain() {
    let registry = hierarchy();
    let c = registry.resolve("C").expect("C is registered");

    let names: Vec<&str> = c.ancestors().map(|class| class.name()).collect();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(c.parent().map(|class| class.name()), Some("B"));
    assert_eq!(c.kind(), ClassKind::Class);
    assert!(c.interfaces().is_empty());
}

#[test]
fn resolve_reports_missing_classes() {
    let registry = hierarchy();

    assert_eq!(
        registry.resolve("Nope"),
        Err(ClassError::NotFound {
            name: "Nope".to_owned()
        })
    );
    assert_eq!(
        ClassError::NotFound {
            name: "Nope".to_owned()
        }
        .to_string(),
        "class \"Nope\" does not exist"
    );
}

#[test]
fn definition_errors() {
    let registry = hierarchy();

    assert_eq!(
        registry.define_class("A", None, &[]),
        Err(ClassError::AlreadyDefined {
            name: "A".to_owned()
        })
    );
    assert_eq!(
        registry.define_class("E", Some("Missing"), &[]),
        Err(ClassError::UnknownAncestor {
            name: "E".to_owned(),
            ancestor: "Missing".to_owned()
        })
    );
    assert_eq!(
        registry.define_class("E", Some("Shape"), &[]),
        Err(ClassError::ParentNotClass {
            name: "E".to_owned(),
            parent: "Shape".to_owned()
        })
    );
    assert_eq!(
        registry.define_class("E", None, &["A"]),
        Err(ClassError::NotAnInterface {
            name: "E".to_owned(),
            interface: "A".to_owned()
        })
    );
    assert_eq!(
        registry.define_interface("Solid", &["Missing"]),
        Err(ClassError::UnknownAncestor {
            name: "Solid".to_owned(),
            ancestor: "Missing".to_owned()
        })
    );
    assert!(!registry.contains("E"));
}

#[test]
fn interfaces_extend_interfaces() {
    let registry = hierarchy();
    registry
        .define_interface("Polygon", &["Shape"])
        .expect("Polygon is new");
    registry
        .define_class("Square", None, &["Polygon"])
        .expect("Square is new");

    assert_eq!(registry.is_subclass_of("Polygon", "Shape"), Some(true));
    assert_eq!(registry.is_subclass_of("Square", "Shape"), Some(true));
}

#[test]
fn object_membership_follows_ancestry() {
    let registry = hierarchy();
    let a = registry.resolve("A").expect("A is registered");
    let c = registry.resolve("C").expect("C is registered");
    let d = registry.resolve("D").expect("D is registered");

    let object = Object::new(c.clone()).with_property("x", 1);
    assert!(object.is_instance_of(&a));
    assert!(object.is_instance_of(&c));
    assert!(!object.is_instance_of(&d));
    assert_eq!(object.property("x"), Some(&Value::from(1)));
    assert_eq!(object.property("y"), None);

    let object = object.with_property("x", 2);
    assert_eq!(object.property("x"), Some(&Value::from(2)));
}

#[test]
fn shared_registry_clones_see_same_definitions() {
    let shared = SharedClassRegistry::new();
    let clone = shared.clone();
    shared.define_class("A", None, &[]).expect("A is new");

    assert!(clone.contains("A"));
    assert_eq!(clone.len(), 1);
    assert!(!clone.is_empty());
}
