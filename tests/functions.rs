mod common;

use common::{as_int, last, nth};

#[test]
fn single_expression_function() {
    let result = libra::run("test", "fun add(a, b): a + b\nadd(2, 3)").expect("should run");
    assert_eq!(as_int(&nth(&result, 1)), 5);
}

#[test]
fn block_function_with_explicit_return() {
    let src = "fun fact(n)\n if n <= 1 then ret 1\n ret n * fact(n - 1)\njust\nfact(5)";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&last(&result)), 120);
}

#[test]
fn closure_reads_the_live_enclosing_scope() {
    // f closes over `x`; the later reassignment of `x` at the same scope is
    // visible through that closure because the scope is a shared reference,
    // not a snapshot taken when `f` was defined.
    let src = "var x = 1\nfun f()\n ret x\njust\nvar x = 2\nf()";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&last(&result)), 2);
}

#[test]
fn arity_mismatch_is_a_runtime_error() {
    let err = libra::run("test", "fun f(a): a\nf(1, 2)").unwrap_err();
    assert!(err.to_string().contains("too many args"));
}

#[test]
fn brk_inside_a_called_function_still_breaks_the_caller_s_loop() {
    // cont/brk raised from inside a function call are not consumed by the
    // call boundary (only `ret` is) -- they keep propagating until a loop
    // catches them, even though the loop and the function are different
    // lexical scopes.
    let src = "\
var collected = []
fun stop()
 brk
just
from i = 1 to 10 then
 if i == 3 then stop()
 append(collected, i)
just
len(collected)";
    let result = libra::run("test", src).expect("should run");
    assert_eq!(as_int(&last(&result)), 2);
}
