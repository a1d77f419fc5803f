use crate::ast::Node;
use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Ee,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
}

/// `left OP right`.
#[derive(Debug, Clone)]
pub struct BinOpNode {
    pub left: Box<Node>,
    pub op: BinOpKind,
    pub right: Box<Node>,
    pub pos_start: Position,
    pub pos_end: Position,
}
