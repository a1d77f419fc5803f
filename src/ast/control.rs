use crate::ast::Node;
use crate::position::Position;

/// `ret expr?`.
#[derive(Debug, Clone)]
pub struct RetNode {
    pub node_to_return: Option<Box<Node>>,
    pub pos_start: Position,
    pub pos_end: Position,
}

/// `cont`.
#[derive(Debug, Clone)]
pub struct ContNode {
    pub pos_start: Position,
    pub pos_end: Position,
}

/// `brk`.
#[derive(Debug, Clone)]
pub struct BrkNode {
    pub pos_start: Position,
    pub pos_end: Position,
}
