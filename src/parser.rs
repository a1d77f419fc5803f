//! Recursive-descent parser: tokens in, `Node` out.
//!
//! Mirrors the teacher's speculative-parse shape (`try_register`/`reverse`)
//! so a production can attempt one grammar rule, and on failure rewind the
//! token cursor and try the next without leaving partial state behind.

use crate::ast::*;
use crate::error::InvalidSyntaxError;
use crate::token::{Token, TokenKind};

/// Threads a parsed `Node` (or the first real error) through a chain of
/// grammar rules, tracking how many tokens were actually consumed so a
/// failed speculative branch can be told apart from one that failed after
/// making real progress.
#[derive(Default)]
struct ParseResult {
    node: Option<Node>,
    error: Option<InvalidSyntaxError>,
    last_registered_advance_count: usize,
    advance_count: usize,
    to_reverse_count: usize,
}

impl ParseResult {
    fn new() -> Self {
        Self::default()
    }

    fn register_advancement(&mut self) {
        self.last_registered_advance_count = 1;
        self.advance_count += 1;
    }

    fn register(&mut self, res: ParseResult) -> Option<Node> {
        self.last_registered_advance_count = res.advance_count;
        self.advance_count += res.advance_count;
        if res.error.is_some() {
            self.error = res.error;
        }
        res.node
    }

    fn try_register(&mut self, res: ParseResult) -> Option<Node> {
        if res.error.is_some() {
            self.to_reverse_count = res.advance_count;
            return None;
        }
        self.register(res)
    }

    fn success(mut self, node: Node) -> Self {
        self.node = Some(node);
        self
    }

    fn failure(mut self, error: InvalidSyntaxError) -> Self {
        if self.error.is_none() || self.last_registered_advance_count == 0 {
            self.error = Some(error);
        }
        self
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    tok_idx: isize,
    current_tok: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let current_tok = tokens[0].clone();
        let mut parser = Self {
            tokens,
            tok_idx: -1,
            current_tok,
        };
        parser.advance();
        parser
    }

    pub fn parse(mut self) -> Result<Node, InvalidSyntaxError> {
        let res = self.statements();
        match res.node {
            Some(node) if res.error.is_none() && !matches!(self.current_tok.kind, TokenKind::Eof) => {
                Err(InvalidSyntaxError {
                    pos_start: self.current_tok.pos_start.clone(),
                    pos_end: self.current_tok.pos_end.clone(),
                    details: "Expected an operator".to_owned(),
                })
            }
            Some(node) if res.error.is_none() => Ok(node),
            _ => Err(res.error.unwrap_or_else(|| InvalidSyntaxError {
                pos_start: self.current_tok.pos_start.clone(),
                pos_end: self.current_tok.pos_end.clone(),
                details: "Invalid syntax".to_owned(),
            })),
        }
    }

    fn advance(&mut self) -> &Token {
        self.tok_idx += 1;
        self.update_current_tok();
        &self.current_tok
    }

    fn reverse(&mut self, amount: usize) -> &Token {
        self.tok_idx -= amount as isize;
        self.update_current_tok();
        &self.current_tok
    }

    fn update_current_tok(&mut self) {
        if self.tok_idx >= 0 && (self.tok_idx as usize) < self.tokens.len() {
            self.current_tok = self.tokens[self.tok_idx as usize].clone();
        }
    }

    fn err_here(&self, details: impl Into<String>) -> InvalidSyntaxError {
        InvalidSyntaxError {
            pos_start: self.current_tok.pos_start.clone(),
            pos_end: self.current_tok.pos_end.clone(),
            details: details.into(),
        }
    }

    // ---- statements ----------------------------------------------------

    fn statements(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let mut statements = Vec::new();
        let pos_start = self.current_tok.pos_start.clone();

        while matches!(self.current_tok.kind, TokenKind::Newl) {
            res.register_advancement();
            self.advance();
        }

        let first = res.register(self.statement());
        if res.error.is_some() {
            return res;
        }
        statements.push(first.unwrap());

        let mut more_statements = true;
        loop {
            let mut newline_count = 0;
            while matches!(self.current_tok.kind, TokenKind::Newl) {
                res.register_advancement();
                self.advance();
                newline_count += 1;
            }
            if newline_count == 0 {
                more_statements = false;
            }
            if !more_statements {
                break;
            }

            let statement_res = self.statement();
            if statement_res.node.is_none() {
                self.reverse(statement_res.advance_count);
                more_statements = false;
                continue;
            }
            let stmt = res.register(statement_res);
            if res.error.is_some() {
                return res;
            }
            statements.push(stmt.unwrap());
        }

        res.success(Node::Statements(StatementsNode {
            pos_end: statements
                .last()
                .map(|n| n.pos_end().clone())
                .unwrap_or_else(|| pos_start.clone()),
            statements,
            pos_start,
        }))
    }

    fn statement(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let pos_start = self.current_tok.pos_start.clone();

        if self.current_tok.is_keyword("ret") {
            res.register_advancement();
            self.advance();

            let expr = if matches!(self.current_tok.kind, TokenKind::Newl | TokenKind::Eof) {
                None
            } else {
                let node = res.register(self.expr());
                if res.error.is_some() {
                    return res;
                }
                Some(Box::new(node.unwrap()))
            };

            return res.success(Node::Ret(RetNode {
                pos_end: expr
                    .as_ref()
                    .map(|n| n.pos_end().clone())
                    .unwrap_or_else(|| self.current_tok.pos_start.clone()),
                node_to_return: expr,
                pos_start,
            }));
        }

        if self.current_tok.is_keyword("cont") {
            res.register_advancement();
            self.advance();
            return res.success(Node::Cont(ContNode {
                pos_start: pos_start.clone(),
                pos_end: pos_start,
            }));
        }

        if self.current_tok.is_keyword("brk") {
            res.register_advancement();
            self.advance();
            return res.success(Node::Brk(BrkNode {
                pos_start: pos_start.clone(),
                pos_end: pos_start,
            }));
        }

        let expr = res.register(self.expr());
        if res.error.is_some() {
            return res.failure(self.err_here(
                "Expected 'var', 'if', 'from', 'until', 'fun', 'ret', 'cont', 'brk', int, float, identifier, '+', '-', '(', '[' or 'NOT'",
            ));
        }
        res.success(expr.unwrap())
    }

    // ---- expr / comp / arith / term / factor / power / call / atom -----

    fn expr(&mut self) -> ParseResult {
        let mut res = ParseResult::new();

        if self.current_tok.is_keyword("var") {
            let pos_start = self.current_tok.pos_start.clone();
            res.register_advancement();
            self.advance();

            let var_name = match &self.current_tok.kind {
                TokenKind::Identifier(name) => name.clone(),
                _ => return res.failure(self.err_here("Expected identifier")),
            };
            res.register_advancement();
            self.advance();

            if !matches!(self.current_tok.kind, TokenKind::Eq) {
                return res.failure(self.err_here("Expected '='"));
            }
            res.register_advancement();
            self.advance();

            let value = res.register(self.expr());
            if res.error.is_some() {
                return res;
            }
            let value = value.unwrap();
            return res.success(Node::VarAssign(VarAssignNode {
                pos_end: value.pos_end().clone(),
                var_name,
                value_node: Box::new(value),
                pos_start,
            }));
        }

        let mut left = res.register(self.comp_expr());
        if res.error.is_some() {
            return res.failure(self.err_here(
                "Expected 'var', 'if', 'from', 'until', 'fun', int, float, identifier, '+', '-', '(', '[' or 'NOT'",
            ));
        }

        while self.current_tok.is_keyword("AND") || self.current_tok.is_keyword("OR") {
            let op = if self.current_tok.is_keyword("AND") {
                BinOpKind::And
            } else {
                BinOpKind::Or
            };
            res.register_advancement();
            self.advance();

            let right = res.register(self.comp_expr());
            if res.error.is_some() {
                return res;
            }
            let l = left.take().unwrap();
            let r = right.unwrap();
            left = Some(Node::BinOp(BinOpNode {
                pos_start: l.pos_start().clone(),
                pos_end: r.pos_end().clone(),
                left: Box::new(l),
                op,
                right: Box::new(r),
            }));
        }

        res.success(left.unwrap())
    }

    fn comp_expr(&mut self) -> ParseResult {
        let mut res = ParseResult::new();

        if self.current_tok.is_keyword("NOT") {
            let pos_start = self.current_tok.pos_start.clone();
            res.register_advancement();
            self.advance();

            let node = res.register(self.comp_expr());
            if res.error.is_some() {
                return res;
            }
            let node = node.unwrap();
            return res.success(Node::UnaryOp(UnaryOpNode {
                pos_start,
                pos_end: node.pos_end().clone(),
                op: UnaryOpKind::Not,
                node: Box::new(node),
            }));
        }

        let mut left = res.register(self.arith_expr());
        if res.error.is_some() {
            return res.failure(self.err_here(
                "Expected int, float, identifier, '+', '-', '(', '[' or 'NOT'",
            ));
        }

        while let Some(op) = bin_op_kind_comp(&self.current_tok.kind) {
            res.register_advancement();
            self.advance();
            let right = res.register(self.arith_expr());
            if res.error.is_some() {
                return res;
            }
            let l = left.take().unwrap();
            let r = right.unwrap();
            left = Some(Node::BinOp(BinOpNode {
                pos_start: l.pos_start().clone(),
                pos_end: r.pos_end().clone(),
                left: Box::new(l),
                op,
                right: Box::new(r),
            }));
        }

        res.success(left.unwrap())
    }

    fn arith_expr(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let mut left = res.register(self.term());
        if res.error.is_some() {
            return res;
        }

        while matches!(self.current_tok.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = if matches!(self.current_tok.kind, TokenKind::Plus) {
                BinOpKind::Add
            } else {
                BinOpKind::Sub
            };
            res.register_advancement();
            self.advance();
            let right = res.register(self.term());
            if res.error.is_some() {
                return res;
            }
            let l = left.take().unwrap();
            let r = right.unwrap();
            left = Some(Node::BinOp(BinOpNode {
                pos_start: l.pos_start().clone(),
                pos_end: r.pos_end().clone(),
                left: Box::new(l),
                op,
                right: Box::new(r),
            }));
        }

        res.success(left.unwrap())
    }

    fn term(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let mut left = res.register(self.factor());
        if res.error.is_some() {
            return res;
        }

        while matches!(
            self.current_tok.kind,
            TokenKind::Mul | TokenKind::Div | TokenKind::Mod
        ) {
            let op = match self.current_tok.kind {
                TokenKind::Mul => BinOpKind::Mul,
                TokenKind::Div => BinOpKind::Div,
                _ => BinOpKind::Mod,
            };
            res.register_advancement();
            self.advance();
            let right = res.register(self.factor());
            if res.error.is_some() {
                return res;
            }
            let l = left.take().unwrap();
            let r = right.unwrap();
            left = Some(Node::BinOp(BinOpNode {
                pos_start: l.pos_start().clone(),
                pos_end: r.pos_end().clone(),
                left: Box::new(l),
                op,
                right: Box::new(r),
            }));
        }

        res.success(left.unwrap())
    }

    fn factor(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let pos_start = self.current_tok.pos_start.clone();

        if matches!(self.current_tok.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = if matches!(self.current_tok.kind, TokenKind::Plus) {
                UnaryOpKind::Plus
            } else {
                UnaryOpKind::Minus
            };
            res.register_advancement();
            self.advance();
            let node = res.register(self.factor());
            if res.error.is_some() {
                return res;
            }
            let node = node.unwrap();
            return res.success(Node::UnaryOp(UnaryOpNode {
                pos_start,
                pos_end: node.pos_end().clone(),
                op,
                node: Box::new(node),
            }));
        }

        self.power()
    }

    fn power(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let mut left = res.register(self.call());
        if res.error.is_some() {
            return res;
        }

        while matches!(self.current_tok.kind, TokenKind::Pow) {
            res.register_advancement();
            self.advance();
            let right = res.register(self.factor());
            if res.error.is_some() {
                return res;
            }
            let l = left.take().unwrap();
            let r = right.unwrap();
            left = Some(Node::BinOp(BinOpNode {
                pos_start: l.pos_start().clone(),
                pos_end: r.pos_end().clone(),
                left: Box::new(l),
                op: BinOpKind::Pow,
                right: Box::new(r),
            }));
        }

        res.success(left.unwrap())
    }

    fn call(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let atom = res.register(self.atom());
        if res.error.is_some() {
            return res;
        }
        let atom = atom.unwrap();

        if matches!(self.current_tok.kind, TokenKind::LParen) {
            res.register_advancement();
            self.advance();
            let mut arg_nodes = Vec::new();

            if matches!(self.current_tok.kind, TokenKind::RParen) {
                res.register_advancement();
                self.advance();
            } else {
                let first = res.register(self.expr());
                if res.error.is_some() {
                    return res.failure(self.err_here(
                        "Expected ')', 'var', 'if', 'from', 'until', 'fun', int, float, identifier, '+', '-', '(', '[' or 'NOT'",
                    ));
                }
                arg_nodes.push(first.unwrap());

                while matches!(self.current_tok.kind, TokenKind::Comma) {
                    res.register_advancement();
                    self.advance();
                    let next = res.register(self.expr());
                    if res.error.is_some() {
                        return res;
                    }
                    arg_nodes.push(next.unwrap());
                }

                if !matches!(self.current_tok.kind, TokenKind::RParen) {
                    return res.failure(self.err_here("Expected ',' or ')'"));
                }
                res.register_advancement();
                self.advance();
            }

            let pos_end = self.current_tok.pos_end.clone();
            return res.success(Node::Call(CallNode {
                pos_start: atom.pos_start().clone(),
                pos_end,
                node_to_call: Box::new(atom),
                arg_nodes,
            }));
        }

        res.success(atom)
    }

    fn atom(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let tok = self.current_tok.clone();

        match &tok.kind {
            TokenKind::Int(v) => {
                res.register_advancement();
                self.advance();
                res.success(Node::Number(NumberNode {
                    value: NumberValue::Int(*v),
                    pos_start: tok.pos_start,
                    pos_end: tok.pos_end,
                }))
            }
            TokenKind::Float(v) => {
                res.register_advancement();
                self.advance();
                res.success(Node::Number(NumberNode {
                    value: NumberValue::Float(*v),
                    pos_start: tok.pos_start,
                    pos_end: tok.pos_end,
                }))
            }
            TokenKind::String(s) => {
                res.register_advancement();
                self.advance();
                res.success(Node::String(StringNode {
                    value: s.clone(),
                    pos_start: tok.pos_start,
                    pos_end: tok.pos_end,
                }))
            }
            TokenKind::Identifier(name) => {
                res.register_advancement();
                self.advance();
                res.success(Node::VarAccess(VarAccessNode {
                    var_name: name.clone(),
                    pos_start: tok.pos_start,
                    pos_end: tok.pos_end,
                }))
            }
            TokenKind::LParen => {
                res.register_advancement();
                self.advance();
                let expr = res.register(self.expr());
                if res.error.is_some() {
                    return res;
                }
                if !matches!(self.current_tok.kind, TokenKind::RParen) {
                    return res.failure(self.err_here("Expected ')'"));
                }
                res.register_advancement();
                self.advance();
                res.success(expr.unwrap())
            }
            TokenKind::LSqb => self.list_expr(),
            TokenKind::Keyword(k) if k == "if" => self.if_expr(),
            TokenKind::Keyword(k) if k == "from" => self.from_expr(),
            TokenKind::Keyword(k) if k == "until" => self.until_expr(),
            TokenKind::Keyword(k) if k == "fun" => self.func_def(),
            _ => res.failure(self.err_here(
                "Expected int, float, identifier, '+', '-', '(', '[', 'if', 'from', 'until', 'fun' or 'NOT'",
            )),
        }
    }

    fn list_expr(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let mut element_nodes = Vec::new();
        let pos_start = self.current_tok.pos_start.clone();

        res.register_advancement();
        self.advance();

        if matches!(self.current_tok.kind, TokenKind::RSqb) {
            res.register_advancement();
            self.advance();
        } else {
            let first = res.register(self.expr());
            if res.error.is_some() {
                return res.failure(self.err_here(
                    "Expected ']', 'var', 'if', 'from', 'until', 'fun', int, float, identifier, '+', '-', '(', '[' or 'NOT'",
                ));
            }
            element_nodes.push(first.unwrap());

            while matches!(self.current_tok.kind, TokenKind::Comma) {
                res.register_advancement();
                self.advance();
                let next = res.register(self.expr());
                if res.error.is_some() {
                    return res;
                }
                element_nodes.push(next.unwrap());
            }

            if !matches!(self.current_tok.kind, TokenKind::RSqb) {
                return res.failure(self.err_here("Expected ',' or ']'"));
            }
            res.register_advancement();
            self.advance();
        }

        let pos_end = self.current_tok.pos_end.clone();
        res.success(Node::List(ListNode {
            element_nodes,
            pos_start,
            pos_end,
        }))
    }

    // ---- if / from / until / fun ---------------------------------------

    fn if_expr(&mut self) -> ParseResult {
        self.if_expr_cases("if")
    }

    /// Parses whatever follows an `if`/`elsif` body: another `elsif` chain,
    /// a trailing `else`, or nothing (the `just` terminator belongs to the
    /// caller in the block-form case).
    fn elsif_or_else(&mut self) -> Result<(Vec<IfCase>, Option<(Box<Node>, bool)>), InvalidSyntaxError> {
        if self.current_tok.is_keyword("elsif") {
            let res = self.if_expr_cases("elsif");
            return match res.node {
                Some(Node::If(if_node)) => Ok((if_node.cases, if_node.else_case)),
                _ => Err(res.error.unwrap_or_else(|| self.err_here("Invalid syntax"))),
            };
        }

        if self.current_tok.is_keyword("else") {
            self.advance();

            if matches!(self.current_tok.kind, TokenKind::Newl) {
                self.advance();
                let res = self.statements();
                let body = match res.node {
                    Some(node) => node,
                    None => return Err(res.error.unwrap_or_else(|| self.err_here("Invalid syntax"))),
                };
                if !self.current_tok.is_keyword("just") {
                    return Err(self.err_here("Expected 'just'"));
                }
                self.advance();
                return Ok((Vec::new(), Some((Box::new(body), true))));
            }

            let res = self.statement();
            let body = match res.node {
                Some(node) => node,
                None => return Err(res.error.unwrap_or_else(|| self.err_here("Invalid syntax"))),
            };
            return Ok((Vec::new(), Some((Box::new(body), false))));
        }

        Ok((Vec::new(), None))
    }

    fn if_expr_cases(&mut self, keyword: &str) -> ParseResult {
        let mut res = ParseResult::new();
        let mut cases = Vec::new();
        let pos_start = self.current_tok.pos_start.clone();

        if !self.current_tok.is_keyword(keyword) {
            return res.failure(self.err_here(format!("Expected '{keyword}'")));
        }
        res.register_advancement();
        self.advance();

        let condition = res.register(self.expr());
        if res.error.is_some() {
            return res;
        }
        let condition = condition.unwrap();

        if !self.current_tok.is_keyword("then") {
            return res.failure(self.err_here("Expected 'then'"));
        }
        res.register_advancement();
        self.advance();

        let should_return_null = matches!(self.current_tok.kind, TokenKind::Newl);
        let body = if should_return_null {
            res.register_advancement();
            self.advance();
            let statements = res.register(self.statements());
            if res.error.is_some() {
                return res;
            }
            statements.unwrap()
        } else {
            let statement = res.register(self.statement());
            if res.error.is_some() {
                return res;
            }
            statement.unwrap()
        };
        cases.push(IfCase {
            condition,
            body,
            should_return_null,
        });

        let else_case;
        if should_return_null && self.current_tok.is_keyword("just") {
            res.register_advancement();
            self.advance();
            else_case = None;
        } else {
            match self.elsif_or_else() {
                Ok((more_cases, ec)) => {
                    cases.extend(more_cases);
                    else_case = ec;
                }
                Err(e) => return res.failure(e),
            }
        }

        let pos_end = else_case
            .as_ref()
            .map(|(n, _): &(Box<Node>, bool)| n.pos_end().clone())
            .or_else(|| cases.last().map(|c: &IfCase| c.body.pos_end().clone()))
            .unwrap_or_else(|| pos_start.clone());

        res.success(Node::If(IfNode {
            cases,
            else_case,
            pos_start,
            pos_end,
        }))
    }

    fn from_expr(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let pos_start = self.current_tok.pos_start.clone();

        res.register_advancement();
        self.advance();

        let var_name = match &self.current_tok.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => return res.failure(self.err_here("Expected identifier")),
        };
        res.register_advancement();
        self.advance();

        if !matches!(self.current_tok.kind, TokenKind::Eq) {
            return res.failure(self.err_here("Expected '='"));
        }
        res.register_advancement();
        self.advance();

        let start_value = res.register(self.expr());
        if res.error.is_some() {
            return res;
        }
        let start_value = start_value.unwrap();

        if !self.current_tok.is_keyword("to") {
            return res.failure(self.err_here("Expected 'to'"));
        }
        res.register_advancement();
        self.advance();

        let end_value = res.register(self.expr());
        if res.error.is_some() {
            return res;
        }
        let end_value = end_value.unwrap();

        let step_value = if self.current_tok.is_keyword("step") {
            res.register_advancement();
            self.advance();
            let step = res.register(self.expr());
            if res.error.is_some() {
                return res;
            }
            Some(Box::new(step.unwrap()))
        } else {
            None
        };

        if !self.current_tok.is_keyword("then") {
            return res.failure(self.err_here("Expected 'then'"));
        }
        res.register_advancement();
        self.advance();

        if matches!(self.current_tok.kind, TokenKind::Newl) {
            res.register_advancement();
            self.advance();

            let body = res.register(self.statements());
            if res.error.is_some() {
                return res;
            }
            let body = body.unwrap();

            if !self.current_tok.is_keyword("just") {
                return res.failure(self.err_here("Expected 'just'"));
            }
            res.register_advancement();
            self.advance();

            return res.success(Node::From(FromNode {
                pos_start,
                pos_end: body.pos_end().clone(),
                var_name,
                start_value: Box::new(start_value),
                end_value: Box::new(end_value),
                step_value,
                body: Box::new(body),
                should_return_null: true,
            }));
        }

        let body = res.register(self.statement());
        if res.error.is_some() {
            return res;
        }
        let body = body.unwrap();

        res.success(Node::From(FromNode {
            pos_start,
            pos_end: body.pos_end().clone(),
            var_name,
            start_value: Box::new(start_value),
            end_value: Box::new(end_value),
            step_value,
            body: Box::new(body),
            should_return_null: false,
        }))
    }

    fn until_expr(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let pos_start = self.current_tok.pos_start.clone();

        res.register_advancement();
        self.advance();

        let condition = res.register(self.expr());
        if res.error.is_some() {
            return res;
        }
        let condition = condition.unwrap();

        if !self.current_tok.is_keyword("then") {
            return res.failure(self.err_here("Expected 'then'"));
        }
        res.register_advancement();
        self.advance();

        if matches!(self.current_tok.kind, TokenKind::Newl) {
            res.register_advancement();
            self.advance();

            let body = res.register(self.statements());
            if res.error.is_some() {
                return res;
            }
            let body = body.unwrap();

            if !self.current_tok.is_keyword("just") {
                return res.failure(self.err_here("Expected 'just'"));
            }
            res.register_advancement();
            self.advance();

            return res.success(Node::Until(UntilNode {
                pos_start,
                pos_end: body.pos_end().clone(),
                condition: Box::new(condition),
                body: Box::new(body),
                should_return_null: true,
            }));
        }

        let body = res.register(self.statement());
        if res.error.is_some() {
            return res;
        }
        let body = body.unwrap();

        res.success(Node::Until(UntilNode {
            pos_start,
            pos_end: body.pos_end().clone(),
            condition: Box::new(condition),
            body: Box::new(body),
            should_return_null: false,
        }))
    }

    fn func_def(&mut self) -> ParseResult {
        let mut res = ParseResult::new();
        let pos_start = self.current_tok.pos_start.clone();

        res.register_advancement();
        self.advance();

        let var_name = if let TokenKind::Identifier(name) = &self.current_tok.kind {
            let name = name.clone();
            res.register_advancement();
            self.advance();
            Some(name)
        } else {
            None
        };

        if !matches!(self.current_tok.kind, TokenKind::LParen) {
            return res.failure(self.err_here(if var_name.is_some() {
                "Expected '('"
            } else {
                "Expected identifier or '('"
            }));
        }
        res.register_advancement();
        self.advance();

        let mut arg_names = Vec::new();
        if let TokenKind::Identifier(name) = &self.current_tok.kind {
            arg_names.push(name.clone());
            res.register_advancement();
            self.advance();

            while matches!(self.current_tok.kind, TokenKind::Comma) {
                res.register_advancement();
                self.advance();
                match &self.current_tok.kind {
                    TokenKind::Identifier(name) => {
                        arg_names.push(name.clone());
                        res.register_advancement();
                        self.advance();
                    }
                    _ => return res.failure(self.err_here("Expected identifier")),
                }
            }

            if !matches!(self.current_tok.kind, TokenKind::RParen) {
                return res.failure(self.err_here("Expected ',' or ')'"));
            }
        } else if !matches!(self.current_tok.kind, TokenKind::RParen) {
            return res.failure(self.err_here("Expected identifier or ')'"));
        }
        res.register_advancement();
        self.advance();

        if matches!(self.current_tok.kind, TokenKind::Colon) {
            res.register_advancement();
            self.advance();
            let body = res.register(self.expr());
            if res.error.is_some() {
                return res;
            }
            let body = body.unwrap();
            return res.success(Node::FuncDef(FuncDefNode {
                pos_start,
                pos_end: body.pos_end().clone(),
                var_name,
                arg_names,
                body: Box::new(body),
                should_auto_return: true,
            }));
        }

        if !matches!(self.current_tok.kind, TokenKind::Newl) {
            return res.failure(self.err_here("Expected ':' or newline"));
        }
        res.register_advancement();
        self.advance();

        let body = res.register(self.statements());
        if res.error.is_some() {
            return res;
        }
        let body = body.unwrap();

        if !self.current_tok.is_keyword("just") {
            return res.failure(self.err_here("Expected 'just'"));
        }
        res.register_advancement();
        self.advance();

        res.success(Node::FuncDef(FuncDefNode {
            pos_start,
            pos_end: body.pos_end().clone(),
            var_name,
            arg_names,
            body: Box::new(body),
            should_auto_return: false,
        }))
    }
}

fn bin_op_kind_comp(kind: &TokenKind) -> Option<BinOpKind> {
    match kind {
        TokenKind::Ee => Some(BinOpKind::Ee),
        TokenKind::Ne => Some(BinOpKind::Ne),
        TokenKind::Lt => Some(BinOpKind::Lt),
        TokenKind::Gt => Some(BinOpKind::Gt),
        TokenKind::Lte => Some(BinOpKind::Lte),
        TokenKind::Gte => Some(BinOpKind::Gte),
        _ => None,
    }
}

