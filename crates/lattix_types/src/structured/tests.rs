use super::*;
use lattix_value::{keyed, list, ClassRegistry, Object, Value};
use pretty_assertions::assert_eq;

/// A and B, with B extending A.
fn classes() -> ClassRegistry {
    let registry = ClassRegistry::new();
    registry.define_class("A", None, &[]).unwrap();
    registry.define_class("B", Some("A"), &[]).unwrap();
    registry
}

fn class(registry: &ClassRegistry, name: &str) -> Type {
    Type::class(registry, name).unwrap()
}

fn instance(registry: &ClassRegistry, name: &str) -> Value {
    Value::from(Object::new(registry.resolve(name).unwrap()))
}

fn cmp(left: &Type, right: &Type) -> Option<Comparison> {
    let forward = left.compare(right);
    assert_eq!(
        right.compare(left),
        forward.map(Comparison::reverse),
        "{left} vs {right} is not antisymmetric"
    );
    forward
}

// Construction

#[test]
fn rejects_key_of_type_nothing() {
    let error = Type::structured([(0, Type::int()), (1, Type::nothing())]).unwrap_err();

    assert_eq!(
        error,
        TypeError::UninhabitedKey {
            key: ArrayKey::Int(1)
        }
    );
}

#[test]
fn rejects_duplicate_keys() {
    let error =
        Type::structured([("id", Type::int()), ("id", Type::string())]).unwrap_err();

    assert_eq!(
        error,
        TypeError::DuplicateKey {
            key: ArrayKey::from("id")
        }
    );
}

#[test]
fn nothing_is_fine_as_extra_keys_type() {
    let ty = Type::loose_structured([(0, Type::int())], Type::nothing()).unwrap();
    let structure = ty.as_structured().unwrap();

    assert!(!structure.allows_extra_keys());
    assert!(structure.extra().is_nothing());
}

#[test]
fn accessors_keep_declaration_order() {
    let ty = Type::structured([(2, Type::int()), (0, Type::string())]).unwrap();
    let structure = ty.as_structured().unwrap();

    let keys: Vec<&ArrayKey> = structure.keys().collect();
    assert_eq!(keys, vec![&ArrayKey::Int(2), &ArrayKey::Int(0)]);
    assert!(structure.declares(&ArrayKey::Int(0)));
    assert!(!structure.declares(&ArrayKey::Int(1)));
    assert!(structure
        .get(&ArrayKey::Int(0))
        .is_some_and(|ty| ty.ptr_eq(&Type::string())));
    assert_eq!(structure.len(), 2);
}

// Membership

#[test]
fn has_without_extras() {
    let registry = classes();
    let ty = Type::positional(
        [
            Type::null(),
            Type::int(),
            class(&registry, "A"),
            class(&registry, "B"),
        ],
        Type::nothing(),
    )
    .unwrap();
    let a = || instance(&registry, "A");
    let b = || instance(&registry, "B");

    assert!(ty.has(&list![Value::Null, 1, a(), b()]));
    assert!(ty.has(&list![Value::Null, 0, b(), b()]));
    assert!(ty.has(&keyed! { 1 => 1, 0 => Value::Null, 2 => a(), 3 => b() }));
    assert!(!ty.has(&list![Value::Null, 1, a(), b(), "4"]));
    assert!(!ty.has(&list![Value::Null, 1, a(), a()]));
    assert!(!ty.has(&keyed! { 1 => Value::Null, 0 => Value::Null, 2 => b(), 3 => b() }));
}

#[test]
fn has_with_any_extras() {
    let registry = classes();
    let ty = Type::positional(
        [Type::string(), class(&registry, "A")],
        Type::anything(),
    )
    .unwrap();

    assert!(ty.has(&list![
        "a",
        instance(&registry, "A"),
        "s",
        55,
        1.2,
        Value::Null,
        true
    ]));
    assert!(!ty.has(&list!["a", 5, "g", Value::Null, true, 5.6]));
}

#[test]
fn has_with_typed_extras() {
    let registry = classes();
    let ty = Type::positional(
        [Type::string(), class(&registry, "A")],
        class(&registry, "B"),
    )
    .unwrap();
    let a = || instance(&registry, "A");
    let b = || instance(&registry, "B");

    assert!(ty.has(&list!["5", a(), b(), b()]));
    assert!(!ty.has(&list![4, a(), b()]));
    assert!(!ty.has(&list!["g", a(), b(), a()]));
}

#[test]
fn has_requires_declared_keys_even_with_extras() {
    let ty = Type::loose_structured([("id", Type::int())], Type::anything()).unwrap();

    assert!(ty.has(&keyed! { "id" => 1, "name" => "x" }));
    assert!(!ty.has(&keyed! { "name" => "x" }));
}

#[test]
fn has_rejects_non_arrays() {
    let ty = Type::structured([(0, Type::int())]).unwrap();

    assert!(!ty.has(&Value::Int(0)));
    assert!(!ty.has(&Value::Null));
    assert!(!ty.has(&Value::from("0")));
}

#[test]
fn empty_exact_structure_has_only_empty_array() {
    let ty = Type::structured(Vec::<(i64, Type)>::new()).unwrap();

    assert!(ty.has(&list![]));
    assert!(!ty.has(&list![1]));
}

// Comparison

fn reference(registry: &ClassRegistry) -> Type {
    Type::positional(
        [Type::array(), Type::string(), class(registry, "A")],
        Type::anything(),
    )
    .unwrap()
}

#[test]
fn compare_same_shape() {
    let registry = classes();
    let ty = reference(&registry);

    assert_eq!(cmp(&ty, &ty), Some(Comparison::Equal));
    assert_eq!(cmp(&ty, &reference(&registry)), Some(Comparison::Equal));
}

#[test]
fn compare_ignores_key_order() {
    let registry = classes();
    let reordered = Type::loose_structured(
        [
            (1, Type::string()),
            (0, Type::array()),
            (2, class(&registry, "A")),
        ],
        Type::anything(),
    )
    .unwrap();

    assert_eq!(cmp(&reference(&registry), &reordered), Some(Comparison::Equal));
}

#[test]
fn compare_narrower_shared_keys() {
    let registry = classes();
    let narrower = Type::positional(
        [
            Type::array_of(Type::int()),
            Type::string(),
            class(&registry, "B"),
        ],
        Type::anything(),
    )
    .unwrap();
    let reordered = Type::loose_structured(
        [
            (1, Type::string()),
            (0, Type::array_of(Type::int())),
            (2, class(&registry, "A")),
        ],
        Type::anything(),
    )
    .unwrap();

    assert_eq!(cmp(&reference(&registry), &narrower), Some(Comparison::Greater));
    assert_eq!(cmp(&reference(&registry), &reordered), Some(Comparison::Greater));
}

#[test]
fn compare_more_declared_keys_is_narrower() {
    let registry = classes();
    let fewer = Type::positional([Type::array(), Type::string()], Type::anything()).unwrap();

    assert_eq!(cmp(&reference(&registry), &fewer), Some(Comparison::Less));
}

#[test]
fn compare_narrower_extras() {
    let registry = classes();
    let other = Type::positional(
        [Type::array(), Type::string(), class(&registry, "B")],
        Type::string(),
    )
    .unwrap();

    assert_eq!(cmp(&reference(&registry), &other), Some(Comparison::Greater));
}

#[test]
fn compare_left_only_key_with_wider_extras() {
    let registry = classes();
    let other = Type::positional(
        [Type::array(), Type::string()],
        class(&registry, "A"),
    )
    .unwrap();

    assert_eq!(cmp(&reference(&registry), &other), None);
}

#[test]
fn compare_incomparable_shared_key() {
    let registry = classes();
    let other = Type::positional(
        [Type::int(), Type::string(), class(&registry, "B")],
        Type::anything(),
    )
    .unwrap();

    assert_eq!(cmp(&reference(&registry), &other), None);
}

#[test]
fn compare_disjoint_key_sets() {
    let left = Type::loose_structured([("a", Type::int())], Type::anything()).unwrap();
    let right = Type::loose_structured([("b", Type::int())], Type::anything()).unwrap();

    assert_eq!(cmp(&left, &right), None);
}

#[test]
fn compare_conflicting_shared_keys() {
    let registry = classes();
    let (a, b) = (class(&registry, "A"), class(&registry, "B"));
    let left = Type::structured([(0, a.clone()), (1, b.clone())]).unwrap();
    let right = Type::structured([(0, b), (1, a)]).unwrap();

    assert_eq!(cmp(&left, &right), None);
}

#[test]
fn compare_exact_structures_with_different_keys() {
    let fewer = Type::structured([(0, Type::int())]).unwrap();
    let more = Type::structured([(0, Type::int()), (1, Type::int())]).unwrap();

    // Neither admits the other's arrays.
    assert_eq!(cmp(&fewer, &more), None);
}

#[test]
fn compare_extra_key_fitting_extras() {
    let loose = Type::loose_structured([(0, Type::int())], Type::int()).unwrap();
    let longer = Type::loose_structured([(0, Type::int()), (1, Type::int())], Type::int()).unwrap();
    let misfit =
        Type::loose_structured([(0, Type::int()), (1, Type::string())], Type::int()).unwrap();

    assert_eq!(cmp(&longer, &loose), Some(Comparison::Less));
    assert_eq!(cmp(&misfit, &loose), None);
}

#[test]
fn compare_wider_shared_key_against_extra_requirement() {
    // Left is wider on key 0 but declares key 1, which right lacks.
    let left = Type::loose_structured(
        [(0, Type::anything()), (1, Type::int())],
        Type::anything(),
    )
    .unwrap();
    let right = Type::loose_structured([(0, Type::int())], Type::anything()).unwrap();

    assert_eq!(cmp(&left, &right), None);
}

#[test]
fn compare_incomparable_extras() {
    let left = Type::loose_structured([(0, Type::int())], Type::int()).unwrap();
    let right = Type::loose_structured([(0, Type::int())], Type::string()).unwrap();

    assert_eq!(cmp(&left, &right), None);
}

#[test]
fn compare_empty_structures() {
    let empty = Type::structured(Vec::<(i64, Type)>::new()).unwrap();
    let open = Type::loose_structured(Vec::<(i64, Type)>::new(), Type::anything()).unwrap();
    let ints = Type::loose_structured(Vec::<(i64, Type)>::new(), Type::int()).unwrap();

    assert_eq!(cmp(&empty, &open), Some(Comparison::Less));
    assert_eq!(cmp(&ints, &open), Some(Comparison::Less));
    assert_eq!(cmp(&empty, &ints), Some(Comparison::Less));
}

#[test]
fn key_diff_splits_declared_keys() {
    let left = Type::structured([(0, Type::int()), (1, Type::int())]).unwrap();
    let right = Type::structured([(1, Type::int()), (2, Type::int())]).unwrap();
    let diff = left
        .as_structured()
        .unwrap()
        .key_diff(right.as_structured().unwrap());

    assert_eq!(diff.only_left.as_slice(), [&ArrayKey::Int(0)]);
    assert_eq!(diff.only_right.as_slice(), [&ArrayKey::Int(2)]);
    assert_eq!(diff.shared.as_slice(), [&ArrayKey::Int(1)]);
}
