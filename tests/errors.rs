mod common;

use libra::error::Error;

#[test]
fn division_by_zero_is_a_runtime_error() {
    let err = libra::run("test", "1 / 0").unwrap_err();
    assert!(matches!(err, Error::Runtime(_)));
    assert!(err.to_string().contains("Division by zero"));
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    let err = libra::run("test", "missing_name + 1").unwrap_err();
    assert!(err.to_string().contains("is not defined"));
}

#[test]
fn illegal_character_is_a_lexer_error() {
    let err = libra::run("test", "@").unwrap_err();
    assert!(matches!(err, Error::IllegalChar(_)));
}

#[test]
fn unexpected_token_is_a_parser_error() {
    let err = libra::run("test", "var = 1").unwrap_err();
    assert!(matches!(err, Error::InvalidSyntax(_)));
}

#[test]
fn list_index_out_of_bounds_is_a_runtime_error() {
    let err = libra::run("test", "[1, 2] / 5").unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn error_display_includes_a_traceback_for_runtime_errors() {
    let src = "fun f()\n ret 1 / 0\njust\nf()";
    let err = libra::run("test", src).unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("Traceback"));
    assert!(rendered.contains("Division by zero"));
}
