use libra::value::Value;

/// Every top-level program evaluates to the `List` of its statements'
/// values; pull out the one a test cares about.
pub fn nth(value: &Value, i: usize) -> Value {
    match value {
        Value::List(list) => list.borrow()[i].clone(),
        other => panic!("expected a top-level statement list, got {other:?}"),
    }
}

pub fn last(value: &Value) -> Value {
    match value {
        Value::List(list) => list.borrow().last().cloned().expect("empty program"),
        other => panic!("expected a top-level statement list, got {other:?}"),
    }
}

pub fn as_int(value: &Value) -> i64 {
    match value {
        Value::Int(v) => *v,
        other => panic!("expected an int, got {other:?}"),
    }
}

pub fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => panic!("expected a string, got {other:?}"),
    }
}
