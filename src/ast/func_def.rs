use crate::ast::Node;
use crate::position::Position;

/// `fun NAME? (args) = expr` or `fun NAME? (args) NEWL statements just`.
#[derive(Debug, Clone)]
pub struct FuncDefNode {
    pub var_name: Option<String>,
    pub arg_names: Vec<String>,
    pub body: Box<Node>,
    pub should_auto_return: bool,
    pub pos_start: Position,
    pub pos_end: Position,
}
