mod common;

use common::{as_int, nth};

#[test]
fn operator_precedence() {
    let result = libra::run("test", "2 + 3 * 4").expect("should run");
    assert_eq!(as_int(&nth(&result, 0)), 14);
}

#[test]
fn power_is_right_associative_with_factor() {
    let result = libra::run("test", "2 ^ 3 ^ 2").expect("should run");
    // power() re-enters factor() for the exponent, so this is 2 ^ (3 ^ 2) = 512.
    assert_eq!(as_int(&nth(&result, 0)), 512);
}

#[test]
fn integer_division_promotes_to_float() {
    let result = libra::run("test", "7 / 2").expect("should run");
    match nth(&result, 0) {
        libra::value::Value::Float(v) => assert!((v - 3.5).abs() < f64::EPSILON),
        other => panic!("expected a float, got {other:?}"),
    }
}

#[test]
fn variable_assignment_and_access() {
    let result = libra::run("test", "var x = 5\nx + 1").expect("should run");
    assert_eq!(as_int(&nth(&result, 0)), 5);
    assert_eq!(as_int(&nth(&result, 1)), 6);
}

#[test]
fn comparisons_and_boolean_operators() {
    let result = libra::run("test", "(1 < 2) AND (3 > 2)").expect("should run");
    assert_eq!(as_int(&nth(&result, 0)), 1);

    let result = libra::run("test", "NOT (1 == 2)").expect("should run");
    assert_eq!(as_int(&nth(&result, 0)), 1);
}
