//! Integration tests for combining constraints inside shapes.

use assay::{
    all, any, equals, from_fn, greater_or_equal, greater_than, less_or_equal, less_than,
    max_length, min_length, one_of, present, required, type_of, ArrayShape, BoxedConstraint, Constraint, ConstraintError, ConstraintResult,
    ErrorKind, ObjectShape, Shape, UnknownKeys, ValuePath, ValueType,
};
use serde_json::json;

#[test]
fn test_status_enumeration_inside_object() {
    let order = type_of(
        ObjectShape::new()
            .field("status", required(one_of(["pending", "shipped", "delivered"])))
            .field("quantity", all![type_of(ValueType::Number), greater_than(0)]),
    );

    assert!(order
        .validate(&json!({"status": "shipped", "quantity": 3}))
        .is_ok());

    let result = order.validate(&json!({"status": "lost", "quantity": 0}));
    let kinds: Vec<_> = result.iter().map(|r| r.first().kind()).collect();
    assert_eq!(kinds, vec![ErrorKind::OneOf, ErrorKind::GreaterThan]);
    assert_eq!(
        result.errors()[0].first(),
        &ConstraintError::OneOf {
            options: vec![json!("pending"), json!("shipped"), json!("delivered")],
            value: json!("lost"),
        }
    );
}

#[test]
fn test_any_of_shapes() {
    let id = any![
        all![type_of(ValueType::Number), greater_than(0)],
        all![type_of(ValueType::String), min_length(3), max_length(12)]
    ];

    assert!(id.validate(&json!(42)).is_ok());
    assert!(id.validate(&json!("abc-123")).is_ok());

    let result = id.validate(&json!("ab"));
    assert_eq!(
        result.iter().map(|r| r.first().kind()).collect::<Vec<_>>(),
        vec![
            ErrorKind::TypeMismatch,
            ErrorKind::GreaterThan,
            ErrorKind::MinLength
        ]
    );
}

#[test]
fn test_nested_any_inside_all() {
    let constraint = all![
        any![equals(1), equals(2)],
        any![less_than(0), greater_than(10)]
    ];

    assert_eq!(constraint.validate(&json!(1)).len(), 2);
    assert_eq!(constraint.validate(&json!(3)).len(), 4);
}

#[test]
fn test_reject_unknown_keys() {
    let strict = type_of(
        ObjectShape::new()
            .field("name", present())
            .unknown_keys(UnknownKeys::Reject),
    );

    assert!(strict.validate(&json!({"name": "Dude"})).is_ok());

    let result = strict.validate(&json!({"rug": "tied the room together", "age": 42}));
    let rendered: Vec<_> = result
        .iter()
        .map(|r| (r.path().to_string(), r.first().clone()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("name".to_string(), ConstraintError::Required),
            (
                "age".to_string(),
                ConstraintError::UnknownKey {
                    key: "age".to_string()
                }
            ),
            (
                "rug".to_string(),
                ConstraintError::UnknownKey {
                    key: "rug".to_string()
                }
            ),
        ]
    );
}

#[test]
fn test_unknown_keys_ignored_by_default() {
    let loose = type_of(ObjectShape::new().field("name", present()));
    assert!(loose
        .validate(&json!({"name": "Dude", "drink": "White Russian"}))
        .is_ok());
}

#[test]
fn test_object_shape_on_non_object_checks_keys_as_absent() {
    let constraint = type_of(
        ObjectShape::new()
            .field("name", required(type_of(ValueType::String)))
            .field("nickname", type_of(ValueType::String)),
    );

    let result = constraint.validate(&json!("just a string"));
    assert_eq!(
        result,
        ConstraintResult::error_at(ValuePath::root().key("name"), ConstraintError::Required)
    );
}

#[test]
fn test_array_shape_on_non_array() {
    let constraint = type_of(ArrayShape::new().item(type_of(ValueType::String)));
    let result = constraint.validate(&json!({"not": "an array"}));
    assert_eq!(
        result,
        ConstraintResult::error_at(
            ValuePath::root(),
            ConstraintError::TypeMismatch {
                expected: ValueType::Array,
                actual: ValueType::Object,
            }
        )
    );

    assert!(type_of(Shape::array()).validate(&json!(7)).is_ok());
}

#[test]
fn test_custom_constraint_composes_with_builtins() {
    let no_spaces = from_fn(|value, path| match value.and_then(|v| v.as_str()) {
        Some(text) if text.contains(' ') => ConstraintResult::error_at(
            path.clone(),
            ConstraintError::Pattern {
                pattern: "no spaces".to_string(),
                value: json!(text),
            },
        ),
        _ => ConstraintResult::ok(),
    });

    let handle = type_of(ObjectShape::new().field(
        "handle",
        required(all![type_of(ValueType::String), min_length(3), no_spaces]),
    ));

    assert!(handle.validate(&json!({"handle": "the_dude"})).is_ok());

    let result = handle.validate(&json!({"handle": "a b"}));
    assert_eq!(result.with_kind(ErrorKind::Pattern).len(), 1);
    assert_eq!(result.errors()[0].path().to_string(), "handle");
}

#[test]
fn test_constraint_lists_built_at_runtime() {
    let bounds: Vec<BoxedConstraint> = (1..=3).map(|n| greater_than(n * 10).boxed()).collect();
    let every = assay::all(bounds);

    assert!(every.validate(&json!(31)).is_ok());
    assert_eq!(every.validate(&json!(15)).len(), 2);
}

#[test]
fn test_equality_matches_numbers_by_value() {
    let rating = type_of(
        ObjectShape::new()
            .field("stars", required(one_of([1, 2, 3, 4, 5])))
            .field("version", equals(2)),
    );

    assert!(rating
        .validate(&json!({"stars": 4.0, "version": 2.0}))
        .is_ok());
    assert!(all![greater_or_equal(1), less_or_equal(1), equals(1)]
        .validate(&json!(1.0))
        .is_ok());
    assert!(equals(-0.0).validate(&json!(0)).is_ok());

    let result = rating.validate(&json!({"stars": 4.5, "version": 2.5}));
    assert_eq!(
        result.iter().map(|r| r.first().kind()).collect::<Vec<_>>(),
        vec![ErrorKind::OneOf, ErrorKind::Equals]
    );
}

#[test]
fn test_unknown_key_kind_is_matchable() {
    let strict = type_of(
        ObjectShape::new()
            .field("name", present())
            .unknown_keys(UnknownKeys::Reject),
    );

    let result = strict.validate(&json!({"name": "Dude", "rug": true}));
    let unknown = result.with_kind(ObjectShape::UNKNOWN_KEY_KIND);
    assert_eq!(
        unknown,
        vec![&ConstraintError::UnknownKey {
            key: "rug".to_string()
        }]
    );
}
