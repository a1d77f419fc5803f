use crate::ast::Node;
use crate::position::Position;

/// `var NAME = value`.
#[derive(Debug, Clone)]
pub struct VarAssignNode {
    pub var_name: String,
    pub value_node: Box<Node>,
    pub pos_start: Position,
    pub pos_end: Position,
}
