//! Lexer, parser and tree-walking interpreter for the Libra scripting
//! language. `run` is the single entry point: source text in, a `Value`
//! or a rendered `Error` out.

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod render;
pub mod token;
pub mod value;

use std::rc::Rc;

use log::debug;

use context::Context;
use environment::Scope;
use error::{Error, RuntimeError};
use interpreter::Interpreter;
use value::Value;

/// Lex, parse and evaluate `source`. `file_name` is only used for
/// diagnostics (it never needs to name a real file on disk).
pub fn run(file_name: &str, source: &str) -> Result<Value, Error> {
    debug!("running {file_name} ({} bytes)", source.len());

    let tokens = lexer::lex(file_name, source)?;
    debug!("lexed {} tokens", tokens.len());

    let ast = parser::Parser::new(tokens).parse()?;

    let global_scope = Scope::new(None);
    interpreter::builtins::install(&global_scope);
    let global_context = Context::new("<program>");

    let result = Interpreter::new().visit(&ast, &global_scope, &global_context);

    if let Some(error) = result.error {
        return Err(error.into());
    }
    if result.loop_should_continue || result.loop_should_break {
        let keyword = if result.loop_should_continue { "cont" } else { "brk" };
        return Err(Error::Runtime(RuntimeError::new(
            ast.pos_start().clone(),
            ast.pos_end().clone(),
            format!("'{keyword}' outside of a loop"),
            global_context,
        )));
    }

    Ok(result
        .value
        .or(result.func_return_value)
        .unwrap_or_else(Value::null))
}
