//! Variable scopes. A `Scope` is a flat table plus an optional parent link;
//! `get` walks up the chain, `set` only ever writes the local table — there
//! is no promotion to an outer scope on assignment, matching how closures
//! are expected to see their defining scope mutate in place rather than
//! fork a private copy.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

#[derive(Debug)]
pub struct Scope {
    symbols: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Scope>>>,
}

impl Scope {
    pub fn new(parent: Option<Rc<RefCell<Scope>>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            symbols: HashMap::new(),
            parent,
        }))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        match self.symbols.get(name) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref().and_then(|p| p.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.symbols.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) {
        self.symbols.remove(name);
    }

    /// Walks up to the outermost scope — the one `exec` evaluates into,
    /// mirroring how the original always looks up `exec` against its
    /// module-level `global_symbol_table` rather than the caller's scope.
    pub fn root(scope: &Rc<RefCell<Scope>>) -> Rc<RefCell<Scope>> {
        match &scope.borrow().parent {
            Some(parent) => Scope::root(parent),
            None => scope.clone(),
        }
    }
}
