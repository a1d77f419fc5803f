use crate::ast::Node;
use crate::position::Position;

/// One `(condition, body)` arm of an `if`/`elsif` chain. `should_return_null`
/// is true for block-bodied arms (`then NEWL ... just`), whose value is
/// discarded in favour of the language's `null` sentinel, matching the
/// single-line-expression-vs-block distinction the original makes throughout.
#[derive(Debug, Clone)]
pub struct IfCase {
    pub condition: Node,
    pub body: Node,
    pub should_return_null: bool,
}

/// `if cond then ... (elsif cond then ...)* (else ...)?`.
#[derive(Debug, Clone)]
pub struct IfNode {
    pub cases: Vec<IfCase>,
    pub else_case: Option<(Box<Node>, bool)>,
    pub pos_start: Position,
    pub pos_end: Position,
}
