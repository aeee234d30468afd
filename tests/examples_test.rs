//! End-to-end usage examples: whole constraint trees against realistic input.

use assay::{
    all, any, equals, exact_length, greater_or_equal, greater_than, less_or_equal, less_than,
    max_length, min_length, pattern, present, required, type_of, ArrayShape, Constraint,
    ConstraintError, ConstraintResult, ObjectShape, PathResult, TypeConstraint, ValuePath,
    ValueType,
};
use serde_json::{json, Value};

fn root() -> ValuePath {
    ValuePath::root()
}

fn type_error(path: ValuePath, expected: ValueType, actual: ValueType) -> PathResult {
    PathResult::single(path, ConstraintError::TypeMismatch { expected, actual })
}

fn required_error(path: ValuePath) -> PathResult {
    PathResult::single(path, ConstraintError::Required)
}

fn company() -> TypeConstraint {
    type_of(
        ObjectShape::new()
            .field(
                "title",
                required(all![
                    type_of(ValueType::String),
                    min_length(1),
                    max_length(20)
                ]),
            )
            .field(
                "owner",
                required(type_of(
                    ObjectShape::new()
                        .field(
                            "name",
                            required(all![type_of(ValueType::String), min_length(1)]),
                        )
                        .field(
                            "email",
                            required(all![
                                type_of(ValueType::String),
                                pattern(r"^[^@\s]+@[^@\s]+$").unwrap()
                            ]),
                        )
                        .field("phone", type_of(ValueType::String)),
                )),
            )
            .field(
                "branches",
                required(all![
                    type_of(
                        ArrayShape::new().item(type_of(
                            ObjectShape::new()
                                .field("address", required(type_of(ValueType::String)))
                                .field("isActive", required(type_of(ValueType::Boolean))),
                        ))
                    ),
                    min_length(1)
                ]),
            ),
    )
}

#[test]
fn test_string_type_check() {
    assert!(type_of(ValueType::String).validate(&json!("foo")).is_ok());
}

#[test]
fn test_number_type_check_fails_on_string() {
    let result = type_of(ValueType::Number).validate(&json!("foo"));
    assert_eq!(
        result,
        ConstraintResult::error([type_error(root(), ValueType::Number, ValueType::String)])
    );
}

#[test]
fn test_string_type_check_fails_on_number() {
    let result = type_of(ValueType::String).validate(&json!(200));
    assert!(result.is_err());
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.errors()[0],
        type_error(root(), ValueType::String, ValueType::Number)
    );
}

#[test]
fn test_plain_object_with_key_lists() {
    let constraint = type_of(
        ObjectShape::new()
            .fields("name", vec![type_of(ValueType::String).boxed()])
            .fields("age", vec![type_of(ValueType::Number).boxed()]),
    );

    assert!(constraint
        .validate(&json!({"name": "Dude", "age": 42}))
        .is_ok());

    let result = constraint.validate(&json!({"name": 404, "age": "old"}));
    assert_eq!(
        result,
        ConstraintResult::error([
            type_error(root().key("name"), ValueType::String, ValueType::Number),
            type_error(root().key("age"), ValueType::Number, ValueType::String),
        ])
    );
}

#[test]
fn test_required_field_within_a_type() {
    let constraint = type_of(
        ObjectShape::new()
            .field("name", present())
            .field("age", type_of(ValueType::Number)),
    );

    assert!(constraint
        .validate(&json!({"name": "Dude", "age": 42}))
        .is_ok());
    assert_eq!(
        constraint.validate(&json!({"age": 42})),
        ConstraintResult::error([required_error(root().key("name"))])
    );
}

#[test]
fn test_required_without_child() {
    assert!(present().validate(&json!("I am here")).is_ok());
    assert_eq!(
        present().check(None, &root()),
        ConstraintResult::error([required_error(root())])
    );
}

#[test]
fn test_required_with_child() {
    let constraint = required(type_of(ValueType::String));
    assert!(constraint.validate(&json!("Dude")).is_ok());
    assert_eq!(
        constraint.validate(&json!(400)),
        ConstraintResult::error([type_error(root(), ValueType::String, ValueType::Number)])
    );
}

#[test]
fn test_array_of_required_strings() {
    let constraint = type_of(ArrayShape::new().item(required(type_of(ValueType::String))));

    assert!(constraint.validate(&json!(["string"])).is_ok());
    assert_eq!(
        constraint.validate(&json!(["string", null, 42])),
        ConstraintResult::error([
            required_error(root().index(1)),
            type_error(root().index(2), ValueType::String, ValueType::Number),
        ])
    );
}

#[test]
fn test_string_array_reports_offending_index() {
    let constraint = type_of(ArrayShape::new().item(type_of(ValueType::String)));
    assert_eq!(
        constraint.validate(&json!(["Dude", 42])),
        ConstraintResult::error([type_error(
            root().index(1),
            ValueType::String,
            ValueType::Number
        )])
    );
}

#[test]
fn test_string_or_number_array() {
    let constraint = type_of(ArrayShape::new().item(any![
        type_of(ValueType::String),
        type_of(ValueType::Number)
    ]));
    assert!(constraint.validate(&json!(["string", 42])).is_ok());
}

#[test]
fn test_range_with_strict_bounds() {
    let constraint = all![greater_than(5), less_than(10)];
    assert!(constraint.validate(&json!(7)).is_ok());

    let result = constraint.validate(&json!(20));
    assert_eq!(
        result,
        ConstraintResult::error_at(
            root(),
            ConstraintError::LessThan {
                max: json!(10),
                value: json!(20)
            }
        )
    );
}

#[test]
fn test_inclusive_bounds_report_both_sides() {
    assert!(all![greater_or_equal(10), less_or_equal(10)]
        .validate(&json!(10))
        .is_ok());

    let result = all![greater_or_equal(11), less_or_equal(9)].validate(&json!(10));
    assert_eq!(
        result,
        ConstraintResult::error([
            PathResult::single(
                root(),
                ConstraintError::GreaterOrEqual {
                    min: json!(11),
                    value: json!(10)
                }
            ),
            PathResult::single(
                root(),
                ConstraintError::LessOrEqual {
                    max: json!(9),
                    value: json!(10)
                }
            ),
        ])
    );
}

#[test]
fn test_length_alternatives() {
    let constraint = any![exact_length(5), exact_length(6)];
    assert!(constraint.validate(&json!("Donny")).is_ok());
    assert!(constraint.validate(&json!("Walter")).is_ok());

    let result = constraint.validate(&json!("Dude"));
    assert_eq!(result.len(), 2);
    for (record, len) in result.iter().zip([5, 6]) {
        assert_eq!(record.path(), &root());
        assert_eq!(
            record.first(),
            &ConstraintError::ExactLength {
                len,
                value: json!("Dude"),
                value_length: Some(4)
            }
        );
    }
}

#[test]
fn test_min_and_max_length() {
    let constraint = all![min_length(5), max_length(7)];
    assert!(constraint.validate(&json!("Walter")).is_ok());

    assert_eq!(
        constraint.validate(&json!("Dude")).errors()[0].first(),
        &ConstraintError::MinLength {
            min_len: 5,
            value: json!("Dude"),
            value_length: Some(4)
        }
    );
    assert_eq!(
        constraint.validate(&json!("El Duderino")).errors()[0].first(),
        &ConstraintError::MaxLength {
            max_len: 7,
            value: json!("El Duderino"),
            value_length: Some(11)
        }
    );
}

#[test]
fn test_equality() {
    assert!(equals("Dude").validate(&json!("Dude")).is_ok());
    assert_eq!(
        equals("Dude").validate(&json!("Walter")),
        ConstraintResult::error_at(
            root(),
            ConstraintError::Equals {
                expected: json!("Dude"),
                value: json!("Walter")
            }
        )
    );
}

#[test]
fn test_complex_case_passes() {
    let value = json!({
        "title": "Bowling inc.",
        "owner": {
            "name": "Dude",
            "email": "dude@bowling.com",
            "phone": "123123123"
        },
        "branches": [
            {"address": "Elm Street 13", "isActive": true}
        ]
    });
    assert_eq!(company().validate(&value), ConstraintResult::ok());
}

#[test]
fn test_complex_case_reports_every_missing_piece() {
    let value = json!({
        "owner": {"name": ""},
        "branches": []
    });

    let expected = ConstraintResult::error([
        required_error(root().key("title")),
        PathResult::single(
            root().key("owner").key("name"),
            ConstraintError::MinLength {
                min_len: 1,
                value: json!(""),
                value_length: Some(0),
            },
        ),
        required_error(root().key("owner").key("email")),
        PathResult::single(
            root().key("branches"),
            ConstraintError::MinLength {
                min_len: 1,
                value: json!([]),
                value_length: Some(0),
            },
        ),
    ]);
    assert_eq!(company().validate(&value), expected);
}

#[test]
fn test_complex_case_nested_branch_errors() {
    let value = json!({
        "title": "A title that is far too long",
        "owner": {"name": "Walter", "email": "not-an-email", "phone": 5550100},
        "branches": [
            {"address": "Elm Street 13", "isActive": true},
            {"address": 13, "isActive": "yes"}
        ],
        "founded": 1998
    });

    let result = company().validate(&value);
    let located: Vec<_> = result
        .iter()
        .map(|r| (r.path().to_string(), r.first().kind().code()))
        .collect();
    assert_eq!(
        located,
        vec![
            ("title".to_string(), "max_length"),
            ("owner.email".to_string(), "pattern"),
            ("owner.phone".to_string(), "type_mismatch"),
            ("branches[1].address".to_string(), "type_mismatch"),
            ("branches[1].isActive".to_string(), "type_mismatch"),
        ]
    );
}

#[test]
fn test_standalone_use_defaults_to_root_path() {
    let result = min_length(3).validate(&Value::from("ab"));
    assert!(result.errors()[0].path().is_root());
}
