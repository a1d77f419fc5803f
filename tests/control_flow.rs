mod common;

use common::{as_int, nth};

#[test]
fn if_elsif_else_inline() {
    let src = "var x = 10\nif x > 100 then 1 elsif x > 5 then 2 else 3";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&nth(&result, 1)), 2);
}

#[test]
fn if_block_form_returns_null_but_keeps_side_effects() {
    let src = "var x = 1\nif x == 1 then\n var x = 99\njust\nx * 2";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&nth(&result, 1)), 0);
    assert_eq!(as_int(&nth(&result, 2)), 198);
}

#[test]
fn from_loop_accumulates() {
    let src = "var total = 0\nfrom i = 1 to 5 then var total = total + i\ntotal";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&nth(&result, 2)), 10);
}

#[test]
fn from_loop_with_step() {
    let src = "var total = 0\nfrom i = 10 to 0 step -2 then var total = total + i\ntotal";
    let result = libra::run("test", src).expect("should run");
    // i takes 10, 8, 6, 4, 2 -> sum 30.
    assert_eq!(as_int(&nth(&result, 2)), 30);
}

#[test]
fn until_loop_runs_while_condition_is_false() {
    let src = "var i = 0\nuntil i == 3 then var i = i + 1\ni";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&nth(&result, 2)), 3);
}

#[test]
fn brk_stops_a_from_loop() {
    let src = "var collected = []\nfrom i = 1 to 10 then\n if i == 4 then brk\n append(collected, i)\njust\nlen(collected)";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&nth(&result, 2)), 3);
}

#[test]
fn cont_skips_the_rest_of_a_from_iteration() {
    let src = "var collected = []\nfrom i = 1 to 6 then\n if i == 3 then cont\n append(collected, i)\njust\nlen(collected)";
    let result = libra::run("test", src).expect("should run");
    // i = 1, 2, 3 (skipped), 4, 5 -> four appends.
    assert_eq!(as_int(&nth(&result, 2)), 4);
}
