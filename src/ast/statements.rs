use crate::ast::Node;
use crate::position::Position;

/// A sequence of statements, evaluating to a list of their values (the same
/// role Python's `ListNode` return value plays for a block body).
#[derive(Debug, Clone)]
pub struct StatementsNode {
    pub statements: Vec<Node>,
    pub pos_start: Position,
    pub pos_end: Position,
}
