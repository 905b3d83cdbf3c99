//! Traversal tests
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::*;
use crate::value::Value;
use pretty_assertions::assert_eq;

struct City {
    name: String,
}

struct Address {
    street: String,
    city: Option<City>,
}

struct Company {
    name: String,
    address: Address,
}

struct Dependent {
    name: String,
    age: u32,
}

struct Employee {
    id: i64,
    nickname: Option<String>,
    company: Option<Company>,
    dependents: Vec<Dependent>,
    tags: Vec<String>,
}

fn employee() -> Employee {
    Employee {
        id: 7,
        nickname: None,
        company: Some(Company {
            name: "Acme".into(),
            address: Address {
                street: "Main St".into(),
                city: Some(City { name: "".into() }),
            },
        }),
        dependents: vec![
            Dependent {
                name: "Ana".into(),
                age: 4,
            },
            Dependent {
                name: "".into(),
                age: 70,
            },
        ],
        tags: vec!["ok".into(), " ".into()],
    }
}

fn paths(violations: &ViolationSet) -> Vec<&str> {
    violations.iter().map(|v| v.property()).collect()
}

fn names(violations: &ViolationSet) -> Vec<&str> {
    violations.iter().map(|v| v.constraint().name()).collect()
}

#[test]
fn test_valid_object_is_returned_unchanged() {
    let result = validate(employee(), |v| {
        v.property("id", |e| e.id).is_positive();
    });

    let employee = result.unwrap();
    assert_eq!(employee.id, 7);
}

#[test]
fn test_constraints_run_in_declared_order_without_short_circuit() {
    let violations = collect(&employee(), |v| {
        v.property("id", |e| e.id).is_negative().is_zero().is_greater_than(100);
    });

    assert_eq!(names(&violations), ["Negative", "Zero", "Greater"]);
    assert_eq!(paths(&violations), ["id", "id", "id"]);
    assert!(violations.iter().all(|v| v.value() == &Value::Int(7)));
}

#[test]
fn test_nested_paths_are_dotted() {
    let violations = collect(&employee(), |v| {
        v.optional_property("company", |e| e.company.as_ref())
            .validate_nested(|company| {
                company.property("name", |c| &c.name).has_max_size(2);
                company.property("address", |c| &c.address).validate_nested(|address| {
                    address.property("street", |a| &a.street).is_not_blank();
                    address
                        .optional_property("city", |a| a.city.as_ref())
                        .validate_nested(|city| {
                            city.property("name", |c| &c.name).is_not_blank();
                        });
                });
            });
    });

    assert_eq!(paths(&violations), ["company.name", "company.address.city.name"]);
    assert_eq!(names(&violations), ["Size", "NotBlank"]);
}

#[test]
fn test_absent_nested_object_is_skipped() {
    let mut employee = employee();
    employee.company = None;

    let violations = collect(&employee, |v| {
        v.optional_property("company", |e| e.company.as_ref())
            .validate_nested(|company| {
                company.property("name", |c| &c.name).is_empty();
            });
    });

    assert!(violations.is_empty());
}

#[test]
fn test_absent_nested_object_fails_not_null() {
    let mut employee = employee();
    employee.company = None;

    let violations = collect(&employee, |v| {
        v.optional_property("company", |e| e.company.as_ref())
            .is_not_null()
            .validate_nested(|company| {
                company.property("name", |c| &c.name).is_empty();
            });
    });

    assert_eq!(paths(&violations), ["company"]);
    assert_eq!(violations.as_slice()[0].value(), &Value::Null);
}

#[test]
fn test_each_element_gets_an_indexed_path() {
    let violations = collect(&employee(), |v| {
        v.property("dependents", |e| &e.dependents).validate_each(|d| {
            d.property("name", |d| &d.name).is_not_blank();
            d.property("age", |d| d.age).is_less_than(65u32);
        });
    });

    assert_eq!(paths(&violations), ["dependents[1].name", "dependents[1].age"]);
    assert_eq!(violations.as_slice()[1].value(), &Value::UInt(70));
}

#[test]
fn test_current_applies_to_scalar_elements() {
    let violations = collect(&employee(), |v| {
        v.property("tags", |e| &e.tags).has_max_size(5).validate_each(|tag| {
            tag.current().is_not_blank();
        });
    });

    assert_eq!(paths(&violations), ["tags[1]"]);
    assert_eq!(violations.as_slice()[0].value(), &Value::String(" ".into()));
}

#[test]
fn test_absent_optional_property_passes_everything_but_not_null() {
    let violations = collect(&employee(), |v| {
        v.optional_property("nickname", |e| e.nickname.as_ref())
            .is_not_blank()
            .has_size(3, 10)
            .is_email()
            .is_not_null();
    });

    assert_eq!(names(&violations), ["NotNull"]);
}

#[test]
fn test_null_constraint_fails_on_present_value() {
    let violations = collect(&employee(), |v| {
        v.property("id", |e| e.id).is_null();
    });

    assert_eq!(names(&violations), ["Null"]);
}

#[test]
fn test_custom_predicate_sees_absence() {
    let violations = collect(&employee(), |v| {
        v.optional_property("nickname", |e| e.nickname.as_ref())
            .validate(crate::Constraint::new("Required"), |value| value.is_some());
    });

    assert_eq!(names(&violations), ["Required"]);
    assert_eq!(
        violations.as_slice()[0].constraint().message_key(),
        "valor.constraints.Required"
    );
}

#[test]
fn test_root_prefix_is_applied() {
    let violations = collect_with_context(&employee(), ValidationContext::with_root("batch[2]"), |v| {
        v.property("id", |e| e.id).is_negative();
    });

    assert_eq!(paths(&violations), ["batch[2].id"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let rules = |v: &mut Validator<'_, Employee>| {
        v.property("id", |e| e.id).is_negative();
        v.property("dependents", |e| &e.dependents).validate_each(|d| {
            d.property("name", |d| &d.name).is_not_blank();
        });
    };

    let employee = employee();
    let first = collect(&employee, rules);
    let second = collect(&employee, rules);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_validator_sees_violations_so_far() {
    let mut seen = 0;
    collect(&employee(), |v| {
        v.property("id", |e| e.id).is_zero();
        seen = v.violations().len();
    });

    assert_eq!(seen, 1);
}
