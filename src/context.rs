//! Traceback frames, threaded through runtime errors.

use std::rc::Rc;

use crate::position::Position;

/// A single traceback frame: a display name, a link to the calling frame,
/// and the position of the call site within the parent.
#[derive(Debug, Clone)]
pub struct Context {
    pub display_name: String,
    pub parent: Option<Rc<Context>>,
    pub parent_entry_pos: Option<Position>,
}

impl Context {
    pub fn new(display_name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            display_name: display_name.into(),
            parent: None,
            parent_entry_pos: None,
        })
    }

    pub fn child(
        display_name: impl Into<String>,
        parent: Rc<Context>,
        parent_entry_pos: Position,
    ) -> Rc<Self> {
        Rc::new(Self {
            display_name: display_name.into(),
            parent: Some(parent),
            parent_entry_pos: Some(parent_entry_pos),
        })
    }
}
