//! Tree-walking evaluator. One `visit_*` method per `ast::Node` variant,
//! dispatched from `visit`, the way the teacher's `run_expression`/
//! `run_statement` pair does for its own (much smaller) AST.

pub mod builtins;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{self, BinOpKind, Node, NumberValue, UnaryOpKind};
use crate::context::Context;
use crate::environment::Scope;
use crate::error::RuntimeError;
use crate::value::{BuiltIn, FunctionValue, Value};

/// Five-way result of evaluating a node: a plain value, a propagating
/// error, a function `ret`, or a loop `cont`/`brk` signal. Function calls
/// consume `ret` but let `cont`/`brk` pass straight through — they are the
/// caller's problem, by design of the language this interprets.
#[derive(Debug, Default)]
pub struct RTResult {
    pub value: Option<Value>,
    pub error: Option<RuntimeError>,
    pub func_return_value: Option<Value>,
    pub loop_should_continue: bool,
    pub loop_should_break: bool,
}

impl RTResult {
    fn reset(&mut self) {
        self.value = None;
        self.error = None;
        self.func_return_value = None;
        self.loop_should_continue = false;
        self.loop_should_break = false;
    }

    /// Adopt the flow-control bits of `res` (consuming its value) without
    /// yet deciding what this result itself resolves to.
    fn register(&mut self, res: RTResult) -> Option<Value> {
        self.error = res.error;
        self.func_return_value = res.func_return_value;
        self.loop_should_continue = res.loop_should_continue;
        self.loop_should_break = res.loop_should_break;
        res.value
    }

    pub fn success(mut self, value: Value) -> Self {
        self.reset();
        self.value = Some(value);
        self
    }

    pub fn success_return(mut self, value: Value) -> Self {
        self.reset();
        self.func_return_value = Some(value);
        self
    }

    pub fn success_continue(mut self) -> Self {
        self.reset();
        self.loop_should_continue = true;
        self
    }

    pub fn success_break(mut self) -> Self {
        self.reset();
        self.loop_should_break = true;
        self
    }

    pub fn failure(mut self, error: RuntimeError) -> Self {
        self.reset();
        self.error = Some(error);
        self
    }

    pub fn should_return(&self) -> bool {
        self.error.is_some()
            || self.func_return_value.is_some()
            || self.loop_should_continue
            || self.loop_should_break
    }
}

fn new_result() -> RTResult {
    RTResult::default()
}

pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    pub fn visit(&self, node: &Node, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        match node {
            Node::Number(n) => self.visit_number(n, context),
            Node::String(n) => self.visit_string(n),
            Node::List(n) => self.visit_list(n, scope, context),
            Node::VarAccess(n) => self.visit_var_access(n, scope, context),
            Node::VarAssign(n) => self.visit_var_assign(n, scope, context),
            Node::BinOp(n) => self.visit_bin_op(n, scope, context),
            Node::UnaryOp(n) => self.visit_unary_op(n, scope, context),
            Node::If(n) => self.visit_if(n, scope, context),
            Node::From(n) => self.visit_from(n, scope, context),
            Node::Until(n) => self.visit_until(n, scope, context),
            Node::FuncDef(n) => self.visit_func_def(n, scope, context),
            Node::Call(n) => self.visit_call(n, scope, context),
            Node::Ret(n) => self.visit_ret(n, scope, context),
            Node::Cont(_) => new_result().success_continue(),
            Node::Brk(_) => new_result().success_break(),
            Node::Statements(n) => self.visit_statements(n, scope, context),
        }
    }

    fn visit_number(&self, n: &ast::NumberNode, _context: &Rc<Context>) -> RTResult {
        let value = match n.value {
            NumberValue::Int(v) => Value::Int(v),
            NumberValue::Float(v) => Value::Float(v),
        };
        new_result().success(value)
    }

    fn visit_string(&self, n: &ast::StringNode) -> RTResult {
        new_result().success(Value::String(n.value.clone()))
    }

    fn visit_list(&self, n: &ast::ListNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();
        let mut elements = Vec::with_capacity(n.element_nodes.len());
        for element in &n.element_nodes {
            let value = res.register(self.visit(element, scope, context));
            if res.should_return() {
                return res;
            }
            elements.push(value.unwrap());
        }
        res.success(Value::List(Rc::new(RefCell::new(elements))))
    }

    fn visit_var_access(
        &self,
        n: &ast::VarAccessNode,
        scope: &Rc<RefCell<Scope>>,
        context: &Rc<Context>,
    ) -> RTResult {
        let res = new_result();
        match scope.borrow().get(&n.var_name) {
            Some(value) => res.success(value),
            None => res.failure(RuntimeError::new(
                n.pos_start.clone(),
                n.pos_end.clone(),
                format!("'{}' is not defined", n.var_name),
                context.clone(),
            )),
        }
    }

    fn visit_var_assign(
        &self,
        n: &ast::VarAssignNode,
        scope: &Rc<RefCell<Scope>>,
        context: &Rc<Context>,
    ) -> RTResult {
        let mut res = new_result();
        let value = res.register(self.visit(&n.value_node, scope, context));
        if res.should_return() {
            return res;
        }
        let value = value.unwrap();
        scope.borrow_mut().set(n.var_name.clone(), value.clone());
        res.success(value)
    }

    fn visit_bin_op(&self, n: &ast::BinOpNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();
        let left = res.register(self.visit(&n.left, scope, context));
        if res.should_return() {
            return res;
        }
        let right = res.register(self.visit(&n.right, scope, context));
        if res.should_return() {
            return res;
        }
        let (left, right) = (left.unwrap(), right.unwrap());
        let pos_start = n.pos_start.clone();
        let pos_end = n.pos_end.clone();
        let ctx = context.clone();

        let result = match n.op {
            BinOpKind::Add => left.added_to(&right, pos_start, pos_end, ctx),
            BinOpKind::Sub => left.subbed_by(&right, pos_start, pos_end, ctx),
            BinOpKind::Mul => left.multed_by(&right, pos_start, pos_end, ctx),
            BinOpKind::Div => left.dived_by(&right, pos_start, pos_end, ctx),
            BinOpKind::Mod => left.moded_by(&right, pos_start, pos_end, ctx),
            BinOpKind::Pow => left.powed_by(&right, pos_start, pos_end, ctx),
            BinOpKind::Ee => Ok(left.get_comparison_eq(&right)),
            BinOpKind::Ne => Ok(left.get_comparison_ne(&right)),
            BinOpKind::Lt => left.get_comparison_lt(&right, pos_start, pos_end, ctx),
            BinOpKind::Gt => left.get_comparison_gt(&right, pos_start, pos_end, ctx),
            BinOpKind::Lte => left.get_comparison_lte(&right, pos_start, pos_end, ctx),
            BinOpKind::Gte => left.get_comparison_gte(&right, pos_start, pos_end, ctx),
            BinOpKind::And => Ok(left.anded_by(&right)),
            BinOpKind::Or => Ok(left.ored_by(&right)),
        };

        match result {
            Ok(value) => res.success(value),
            Err(e) => res.failure(e),
        }
    }

    fn visit_unary_op(
        &self,
        n: &ast::UnaryOpNode,
        scope: &Rc<RefCell<Scope>>,
        context: &Rc<Context>,
    ) -> RTResult {
        let mut res = new_result();
        let value = res.register(self.visit(&n.node, scope, context));
        if res.should_return() {
            return res;
        }
        let value = value.unwrap();

        let result = match n.op {
            // `-value` is `value * -1`, not a dedicated negation op.
            UnaryOpKind::Minus => {
                value.multed_by(&Value::Int(-1), n.pos_start.clone(), n.pos_end.clone(), context.clone())
            }
            UnaryOpKind::Plus => Ok(value),
            UnaryOpKind::Not => Ok(value.notted()),
        };

        match result {
            Ok(value) => res.success(value),
            Err(e) => res.failure(e),
        }
    }

    fn visit_if(&self, n: &ast::IfNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();

        for case in &n.cases {
            let condition = res.register(self.visit(&case.condition, scope, context));
            if res.should_return() {
                return res;
            }
            if condition.unwrap().is_true() {
                let value = res.register(self.visit(&case.body, scope, context));
                if res.should_return() {
                    return res;
                }
                let value = value.unwrap();
                return res.success(if case.should_return_null {
                    Value::null()
                } else {
                    value
                });
            }
        }

        if let Some((else_body, should_return_null)) = &n.else_case {
            let value = res.register(self.visit(else_body, scope, context));
            if res.should_return() {
                return res;
            }
            let value = value.unwrap();
            return res.success(if *should_return_null { Value::null() } else { value });
        }

        res.success(Value::null())
    }

    fn visit_from(&self, n: &ast::FromNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();
        let mut elements = Vec::new();

        let start = res.register(self.visit(&n.start_value, scope, context));
        if res.should_return() {
            return res;
        }
        let end = res.register(self.visit(&n.end_value, scope, context));
        if res.should_return() {
            return res;
        }
        let step = if let Some(step_node) = &n.step_value {
            let step = res.register(self.visit(step_node, scope, context));
            if res.should_return() {
                return res;
            }
            step.unwrap()
        } else {
            Value::Int(1)
        };
        let start = start.unwrap();
        let end = end.unwrap();

        // Stay in integer arithmetic when every bound is an int, the way the
        // original keeps a plain number and only drops to float once one is
        // involved, instead of always widening the loop counter.
        let all_ints = matches!(start, Value::Int(_))
            && matches!(end, Value::Int(_))
            && matches!(step, Value::Int(_));

        let step_f = as_f64(&step);
        let end_f = as_f64(&end);
        let mut i_f = as_f64(&start);
        let mut i_int = if let Value::Int(v) = start { v } else { 0 };
        let step_int = if let Value::Int(v) = step { v } else { 0 };

        loop {
            if (step_f >= 0.0 && i_f >= end_f) || (step_f < 0.0 && i_f <= end_f) {
                break;
            }
            let current = if all_ints { Value::Int(i_int) } else { Value::Float(i_f) };
            scope.borrow_mut().set(n.var_name.clone(), current);
            i_f += step_f;
            i_int += step_int;

            let body_value = res.register(self.visit(&n.body, scope, context));
            if res.should_return() {
                if res.loop_should_continue {
                    res.loop_should_continue = false;
                    continue;
                }
                if res.loop_should_break {
                    res.loop_should_break = false;
                    break;
                }
                return res;
            }
            elements.push(body_value.unwrap());
        }

        scope.borrow_mut().remove(&n.var_name);

        res.success(if n.should_return_null {
            Value::null()
        } else {
            Value::List(Rc::new(RefCell::new(elements)))
        })
    }

    fn visit_until(&self, n: &ast::UntilNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();
        let mut elements = Vec::new();

        loop {
            let condition = res.register(self.visit(&n.condition, scope, context));
            if res.should_return() {
                return res;
            }
            if condition.unwrap().is_true() {
                break;
            }

            let body_value = res.register(self.visit(&n.body, scope, context));
            if res.should_return() {
                if res.loop_should_continue {
                    res.loop_should_continue = false;
                    continue;
                }
                if res.loop_should_break {
                    res.loop_should_break = false;
                    break;
                }
                return res;
            }
            elements.push(body_value.unwrap());
        }

        res.success(if n.should_return_null {
            Value::null()
        } else {
            Value::List(Rc::new(RefCell::new(elements)))
        })
    }

    fn visit_func_def(
        &self,
        n: &ast::FuncDefNode,
        scope: &Rc<RefCell<Scope>>,
        context: &Rc<Context>,
    ) -> RTResult {
        let res = new_result();
        let name = n.var_name.clone().unwrap_or_else(|| "<anonymous>".to_owned());
        let func = Value::Function(Rc::new(FunctionValue {
            name,
            body: Rc::new((*n.body).clone()),
            arg_names: n.arg_names.clone(),
            should_auto_return: n.should_auto_return,
            closure: scope.clone(),
            defining_context: context.clone(),
            pos_start: n.pos_start.clone(),
            pos_end: n.pos_end.clone(),
        }));

        if let Some(var_name) = &n.var_name {
            scope.borrow_mut().set(var_name.clone(), func.clone());
        }

        res.success(func)
    }

    fn visit_call(&self, n: &ast::CallNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();
        let callee = res.register(self.visit(&n.node_to_call, scope, context));
        if res.should_return() {
            return res;
        }
        let callee = callee.unwrap();

        let mut args = Vec::with_capacity(n.arg_nodes.len());
        for arg_node in &n.arg_nodes {
            let value = res.register(self.visit(arg_node, scope, context));
            if res.should_return() {
                return res;
            }
            args.push(value.unwrap());
        }

        let call_res = self.execute(&callee, args, &n.pos_start, &n.pos_end, scope, context);
        let value = res.register(call_res);
        if res.should_return() {
            return res;
        }
        res.success(value.unwrap())
    }

    fn visit_ret(&self, n: &ast::RetNode, scope: &Rc<RefCell<Scope>>, context: &Rc<Context>) -> RTResult {
        let mut res = new_result();
        let value = match &n.node_to_return {
            Some(node) => {
                let v = res.register(self.visit(node, scope, context));
                if res.should_return() {
                    return res;
                }
                v.unwrap()
            }
            None => Value::null(),
        };
        res.success_return(value)
    }

    fn visit_statements(
        &self,
        n: &ast::StatementsNode,
        scope: &Rc<RefCell<Scope>>,
        context: &Rc<Context>,
    ) -> RTResult {
        let mut res = new_result();
        let mut elements = Vec::with_capacity(n.statements.len());
        for statement in &n.statements {
            let value = res.register(self.visit(statement, scope, context));
            if res.should_return() {
                return res;
            }
            elements.push(value.unwrap());
        }
        res.success(Value::List(Rc::new(RefCell::new(elements))))
    }

    /// Invokes a callable `Value`; arity errors are reported inside the
    /// callee's own (freshly created) context, matching how the original
    /// attributes them to the function rather than the call site.
    fn execute(
        &self,
        callee: &Value,
        args: Vec<Value>,
        pos_start: &crate::position::Position,
        pos_end: &crate::position::Position,
        scope: &Rc<RefCell<Scope>>,
        calling_context: &Rc<Context>,
    ) -> RTResult {
        let res = new_result();
        match callee {
            Value::Function(func) => self.execute_function(func, args),
            Value::BuiltIn(b) => builtins::call(*b, args, pos_start, pos_end, scope, calling_context),
            other => res.failure(RuntimeError::new(
                pos_start.clone(),
                pos_end.clone(),
                format!("{} is not callable", other.type_name()),
                calling_context.clone(),
            )),
        }
    }

    fn execute_function(&self, func: &Rc<FunctionValue>, args: Vec<Value>) -> RTResult {
        let mut res = new_result();
        let exec_context = Context::child(
            func.name.clone(),
            func.defining_context.clone(),
            func.pos_start.clone(),
        );
        let exec_scope = Scope::new(Some(func.closure.clone()));

        if args.len() > func.arg_names.len() {
            return res.failure(RuntimeError::new(
                func.pos_start.clone(),
                func.pos_end.clone(),
                format!(
                    "{} too many args passed into {}",
                    args.len() - func.arg_names.len(),
                    func.name
                ),
                exec_context,
            ));
        }
        if args.len() < func.arg_names.len() {
            return res.failure(RuntimeError::new(
                func.pos_start.clone(),
                func.pos_end.clone(),
                format!(
                    "{} too few args passed into {}",
                    func.arg_names.len() - args.len(),
                    func.name
                ),
                exec_context,
            ));
        }

        for (name, value) in func.arg_names.iter().zip(args.into_iter()) {
            exec_scope.borrow_mut().set(name.clone(), value);
        }

        let value = res.register(self.visit(&func.body, &exec_scope, &exec_context));
        if res.should_return() && res.func_return_value.is_none() {
            return res;
        }

        let ret_value = if func.should_auto_return {
            value
        } else {
            None
        }
        .or_else(|| res.func_return_value.clone())
        .unwrap_or_else(Value::null);

        res.success(ret_value)
    }
}

fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Int(v) => *v as f64,
        Value::Float(v) => *v,
        _ => 0.0,
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
