mod common;

use common::{as_int, as_string, last, nth};
use libra::value::Value;

#[test]
fn list_indexing_uses_division() {
    let result = libra::run("test", "var xs = [10, 20, 30]\nxs / 1").expect("should run");
    assert_eq!(as_int(&nth(&result, 1)), 20);
}

#[test]
fn list_concatenation_and_element_append_are_copy_on_write() {
    let src = "var xs = [1, 2]\nvar ys = xs + 3\nxs";
    let result = libra::run("test", src).expect("should run");
    // `+` on a list returns a new list; the original is untouched.
    match nth(&result, 2) {
        Value::List(l) => assert_eq!(l.borrow().len(), 2),
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn plain_assignment_aliases_the_backing_buffer() {
    // `var b = a` shares the same list, so mutating through a builtin on
    // one is visible through the other -- lists are reference values here,
    // not copied on assignment.
    let src = "var a = [1]\nvar b = a\nappend(a, 2)\nlen(b)";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&last(&result)), 2);
}

#[test]
fn empty_list_is_truthy() {
    let result = libra::run("test", "if [] then 1 else 2").expect("should run");
    assert_eq!(as_int(&nth(&result, 0)), 1);
}

#[test]
fn append_len_and_pop_builtins() {
    let src = "var xs = [1, 2, 3]\nappend(xs, 4)\nvar popped = pop(xs, 0)\nlen(xs)";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&nth(&result, 2)), 1);
    assert_eq!(as_int(&nth(&result, 3)), 3);
}

#[test]
fn ccat_extends_a_list_in_place() {
    let src = "var xs = [1, 2]\nccat(xs, [3, 4])\nlen(xs)";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&last(&result)), 4);
}

#[test]
fn print_ret_returns_the_rendered_string() {
    let result = libra::run("test", "print_ret(42)").expect("should run");
    assert_eq!(as_string(&nth(&result, 0)), "42");
}

#[test]
fn exec_loads_another_script_into_the_global_scope() {
    let src = "exec(\"tests/fixtures/greeting.lb\")\ngreeting(\"there\")";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_string(&nth(&result, 1)), "hi there");
}

#[test]
fn type_predicates() {
    let src = "isnum(1)\nisstr(\"hi\")\nislist([1])\nisfun(print)";
    let result = libra::run("test", src).expect("should run");
    for i in 0..4 {
        assert_eq!(as_int(&nth(&result, i)), 1);
    }
}
