//! Built-in function implementations (`spec.md` §6). Dispatched by
//! `BuiltIn` tag rather than by name lookup, since the global scope binds
//! exactly one `Value::BuiltIn` per variant.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use log::trace;

use crate::context::Context;
use crate::environment::Scope;
use crate::error::RuntimeError;
use crate::interpreter::RTResult;
use crate::position::Position;
use crate::value::{BuiltIn, Value};

pub fn call(
    builtin: BuiltIn,
    args: Vec<Value>,
    pos_start: &Position,
    pos_end: &Position,
    scope: &Rc<RefCell<Scope>>,
    context: &Rc<Context>,
) -> RTResult {
    let res = RTResult::default();
    let expected = builtin.arg_names().len();

    if args.len() > expected {
        return res.failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            format!(
                "{} too many args passed into {}",
                args.len() - expected,
                builtin.name()
            ),
            context.clone(),
        ));
    }
    if args.len() < expected {
        return res.failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            format!(
                "{} too few args passed into {}",
                expected - args.len(),
                builtin.name()
            ),
            context.clone(),
        ));
    }

    trace!("calling built-in {}", builtin.name());

    match builtin {
        BuiltIn::Print => exec_print(args),
        BuiltIn::PrintRet => exec_print_ret(args),
        BuiltIn::Input => exec_input(),
        BuiltIn::InputInt => exec_input_int(),
        BuiltIn::Clear => exec_clear(),
        BuiltIn::IsNum => exec_is_num(args),
        BuiltIn::IsStr => exec_is_str(args),
        BuiltIn::IsList => exec_is_list(args),
        BuiltIn::IsFun => exec_is_fun(args),
        BuiltIn::Append => exec_append(args, pos_start, pos_end, context),
        BuiltIn::Pop => exec_pop(args, pos_start, pos_end, context),
        BuiltIn::Ccat => exec_ccat(args, pos_start, pos_end, context),
        BuiltIn::Len => exec_len(args, pos_start, pos_end, context),
        BuiltIn::Exec => exec_exec(args, pos_start, pos_end, scope, context),
    }
}

fn exec_print(mut args: Vec<Value>) -> RTResult {
    println!("{}", args.remove(0));
    RTResult::default().success(Value::null())
}

fn exec_print_ret(mut args: Vec<Value>) -> RTResult {
    let value = args.remove(0);
    RTResult::default().success(Value::String(value.to_string()))
}

fn exec_input() -> RTResult {
    print!("> ");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok();
    RTResult::default().success(Value::String(line.trim_end_matches('\n').to_owned()))
}

fn exec_input_int() -> RTResult {
    loop {
        print!("> ");
        std::io::stdout().flush().ok();
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).ok();
        let text = line.trim_end_matches('\n');
        match text.parse::<i64>() {
            Ok(v) => return RTResult::default().success(Value::Int(v)),
            Err(_) => println!("'{text}' must be an integer. Try again!"),
        }
    }
}

fn exec_clear() -> RTResult {
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().ok();
    RTResult::default().success(Value::null())
}

fn exec_is_num(args: Vec<Value>) -> RTResult {
    let is_num = matches!(args[0], Value::Int(_) | Value::Float(_));
    RTResult::default().success(Value::bool(is_num))
}

fn exec_is_str(args: Vec<Value>) -> RTResult {
    RTResult::default().success(Value::bool(matches!(args[0], Value::String(_))))
}

fn exec_is_list(args: Vec<Value>) -> RTResult {
    RTResult::default().success(Value::bool(matches!(args[0], Value::List(_))))
}

fn exec_is_fun(args: Vec<Value>) -> RTResult {
    RTResult::default().success(Value::bool(matches!(
        args[0],
        Value::Function(_) | Value::BuiltIn(_)
    )))
}

fn exec_append(
    mut args: Vec<Value>,
    pos_start: &Position,
    pos_end: &Position,
    context: &Rc<Context>,
) -> RTResult {
    let value = args.remove(1);
    match &args[0] {
        Value::List(list) => {
            list.borrow_mut().push(value);
            RTResult::default().success(Value::null())
        }
        other => RTResult::default().failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            format!("First argument to append must be a list, got {}", other.type_name()),
            context.clone(),
        )),
    }
}

fn exec_pop(
    args: Vec<Value>,
    pos_start: &Position,
    pos_end: &Position,
    context: &Rc<Context>,
) -> RTResult {
    let (list, index) = (&args[0], &args[1]);
    let (list, index) = match (list, index) {
        (Value::List(list), Value::Int(index)) => (list, *index),
        (Value::List(_), other) => {
            return RTResult::default().failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("Second argument to pop must be a number, got {}", other.type_name()),
                context.clone(),
            ))
        }
        (other, _) => {
            return RTResult::default().failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("First argument to pop must be a list, got {}", other.type_name()),
                context.clone(),
            ))
        }
    };

    let mut list = list.borrow_mut();
    if index < 0 || index as usize >= list.len() {
        return RTResult::default().failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            "Element at this index could not be removed from list because index is out of bounds",
            context.clone(),
        ));
    }
    let popped = list.remove(index as usize);
    RTResult::default().success(popped)
}

fn exec_ccat(
    args: Vec<Value>,
    pos_start: &Position,
    pos_end: &Position,
    context: &Rc<Context>,
) -> RTResult {
    match (&args[0], &args[1]) {
        (Value::List(a), Value::List(b)) => {
            a.borrow_mut().extend(b.borrow().iter().cloned());
            RTResult::default().success(Value::null())
        }
        (Value::List(_), other) => RTResult::default().failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            format!("Second argument to ccat must be a list, got {}", other.type_name()),
            context.clone(),
        )),
        (other, _) => RTResult::default().failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            format!("First argument to ccat must be a list, got {}", other.type_name()),
            context.clone(),
        )),
    }
}

fn exec_len(
    args: Vec<Value>,
    pos_start: &Position,
    pos_end: &Position,
    context: &Rc<Context>,
) -> RTResult {
    match &args[0] {
        Value::List(list) => RTResult::default().success(Value::Int(list.borrow().len() as i64)),
        other => RTResult::default().failure(RuntimeError::new(
            pos_start.clone(),
            pos_end.clone(),
            format!("Argument to len must be a list, got {}", other.type_name()),
            context.clone(),
        )),
    }
}

/// Loads, lexes, parses and evaluates another script in the caller's
/// **global** scope — `exec` is how one file pulls in definitions from
/// another, the original's only cross-file mechanism.
fn exec_exec(
    args: Vec<Value>,
    pos_start: &Position,
    pos_end: &Position,
    scope: &Rc<RefCell<Scope>>,
    context: &Rc<Context>,
) -> RTResult {
    let file_name = match &args[0] {
        Value::String(s) => s.clone(),
        other => {
            return RTResult::default().failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("Argument to exec must be a string, got {}", other.type_name()),
                context.clone(),
            ))
        }
    };

    let source = match std::fs::read_to_string(&file_name) {
        Ok(s) => s,
        Err(e) => {
            return RTResult::default().failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("Failed to load script \"{file_name}\": {e}"),
                context.clone(),
            ))
        }
    };

    let tokens = match crate::lexer::lex(file_name.clone(), source) {
        Ok(tokens) => tokens,
        Err(e) => {
            let e: crate::error::Error = e.into();
            return RTResult::default().failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("Failed to execute script \"{file_name}\":\n{e}"),
                context.clone(),
            ));
        }
    };

    let ast = match crate::parser::Parser::new(tokens).parse() {
        Ok(ast) => ast,
        Err(e) => {
            return RTResult::default().failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("Failed to execute script \"{file_name}\":\n{e}"),
                context.clone(),
            ))
        }
    };

    let root_scope = Scope::root(scope);
    let exec_context = Context::child(format!("<exec {file_name}>"), context.clone(), pos_start.clone());
    let result = crate::interpreter::Interpreter::new().visit(&ast, &root_scope, &exec_context);

    if let Some(error) = result.error {
        return RTResult::default().failure(error);
    }

    RTResult::default().success(Value::null())
}

/// Binds every built-in and the `mpi` constant into the global scope,
/// mirroring the original's module-level `global_symbol_table`.
pub fn install(scope: &Rc<RefCell<crate::environment::Scope>>) {
    use BuiltIn::*;
    let mut s = scope.borrow_mut();

    s.set("NULL", Value::null());
    s.set("FALSE", Value::bool(false));
    s.set("TRUE", Value::bool(true));
    s.set("mpi", Value::Float(std::f64::consts::PI));

    for b in [
        Print, PrintRet, Input, InputInt, Clear, IsNum, IsStr, IsList, IsFun, Append, Pop, Ccat,
        Len, Exec,
    ] {
        s.set(b.name(), Value::BuiltIn(b));
    }
    // `clrscr` is the same built-in as `clear` under its other surface name.
    s.set("clrscr", Value::BuiltIn(Clear));
}
