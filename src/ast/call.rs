use crate::ast::Node;
use crate::position::Position;

/// `callee(arg, arg, ...)`.
#[derive(Debug, Clone)]
pub struct CallNode {
    pub node_to_call: Box<Node>,
    pub arg_nodes: Vec<Node>,
    pub pos_start: Position,
    pub pos_end: Position,
}
