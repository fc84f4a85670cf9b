//! End-to-end scenarios through the facade crate.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lattix::{list, Comparison, ClassRegistry, Object, SharedClassRegistry, Type, TypeError, Value};
use pretty_assertions::assert_eq;

/// A, and B extending A.
fn classes() -> ClassRegistry {
    lattix::init_tracing();
    let registry = ClassRegistry::new();
    registry.define_class("A", None, &[]).unwrap();
    registry.define_class("B", Some("A"), &[]).unwrap();
    registry
}

fn new(registry: &ClassRegistry, name: &str) -> Value {
    Value::from(Object::new(registry.resolve(name).unwrap()))
}

fn class(registry: &ClassRegistry, name: &str) -> Type {
    Type::class(registry, name).unwrap()
}

/// `{0: array, 1: string, 2: A}` with any extra keys.
fn s1(registry: &ClassRegistry) -> Type {
    Type::positional(
        [Type::array(), Type::string(), class(registry, "A")],
        Type::anything(),
    )
    .unwrap()
}

#[test]
fn exact_structure() {
    let ty = Type::positional([Type::int(), Type::int(), Type::string()], Type::nothing()).unwrap();

    assert!(ty.has(&list![1, 2, "f"]));
    assert!(!ty.has(&list![1, 2, 3]));
    assert!(!ty.has(&list![1, 2, "f", 4]));
}

#[test]
fn typed_extra_keys() {
    let registry = classes();
    let ty = Type::positional(
        [Type::string(), class(&registry, "A")],
        class(&registry, "B"),
    )
    .unwrap();

    assert!(ty.has(&list!["5", new(&registry, "A"), new(&registry, "B"), new(&registry, "B")]));
    assert!(!ty.has(&list![4, new(&registry, "A"), new(&registry, "B")]));
}

#[test]
fn structural_subtype() {
    let registry = classes();
    let s2 = Type::positional(
        [
            Type::array_of(Type::int()),
            Type::string(),
            class(&registry, "B"),
        ],
        Type::anything(),
    )
    .unwrap();

    assert_eq!(s1(&registry).compare(&s2), Some(Comparison::Greater));
    assert_eq!(s2.compare(&s1(&registry)), Some(Comparison::Less));
}

#[test]
fn incomparable_extras() {
    let registry = classes();
    let s3 = Type::positional([Type::array(), Type::string()], class(&registry, "A")).unwrap();

    assert_eq!(s1(&registry).compare(&s3), None);
    assert_eq!(s3.compare(&s1(&registry)), None);
}

#[test]
fn typed_array_of_anything_has_every_array() {
    let any = Type::array_of(Type::anything());

    assert!(any.has(&list![1, "y", Value::Null]));
    assert!(!any.has(&Value::Int(1)));
    assert!(!Type::array_of(Type::int()).has(&Value::from("1, 2")));
}

#[test]
fn typed_array_comparison_follows_elements() {
    let registry = classes();
    let pairs = [
        (Type::int(), Type::int()),
        (class(&registry, "B"), class(&registry, "A")),
        (Type::string(), Type::null()),
        (Type::nothing(), Type::bool()),
    ];

    for (left, right) in pairs {
        let expected = left.compare(&right);
        assert_eq!(Type::array_of(left).compare(&Type::array_of(right)), expected);
    }
}

#[test]
fn rendering_ellipsis_rules() {
    let registry = classes();
    let exact = Type::positional([Type::int(), Type::string()], Type::nothing()).unwrap();
    let open = Type::loose_structured([("a", Type::int())], Type::anything()).unwrap();

    assert!(!exact.to_string().contains("..."));
    assert!(open.to_string().ends_with(" ...]"));
    assert_eq!(s1(&registry).to_string(), "[0: array, 1: string, 2: A ...]");
}

#[test]
fn singletons_are_identical() {
    assert!(Type::int().ptr_eq(&Type::int()));
    assert!(Type::anything().ptr_eq(&Type::anything()));
    assert!(Type::nothing().ptr_eq(&Type::nothing()));
}

#[test]
fn unknown_class_fails_construction() {
    let registry = classes();

    assert!(matches!(
        Type::class(&registry, "Missing"),
        Err(TypeError::Class(_))
    ));
    assert_eq!(
        Type::class(&registry, "Missing").unwrap_err().to_string(),
        "class \"Missing\" does not exist"
    );
}

#[test]
fn shared_registry_across_threads() {
    let registry = SharedClassRegistry::new();
    registry.define_class("A", None, &[]).unwrap();

    let worker = registry.clone();
    let defined = std::thread::spawn(move || {
        worker.define_class("B", Some("A"), &[]).unwrap();
        Type::class(&worker, "B").unwrap()
    })
    .join()
    .unwrap();

    let a = Type::class(&registry, "A").unwrap();
    assert_eq!(defined.compare(&a), Some(Comparison::Less));
    assert!(defined.has(&Value::from(Object::new(registry.resolve("B").unwrap()))));
}

#[test]
fn check_explains_mismatch() {
    let ty = Type::structured([("id", Type::int())]).unwrap();
    let error = ty.check(&list![1]).unwrap_err();

    assert_eq!(error.to_string(), "missing array key \"id\" of type int");
}
