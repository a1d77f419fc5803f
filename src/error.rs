//! The four error kinds named in `spec.md` §7, plus a crate-level enum
//! unifying them for `run`'s `Result`.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::rc::Rc;

use crate::context::Context;
use crate::position::Position;
use crate::render::render_span;

/// Lexer error: an unrecognized character.
#[derive(Debug, Clone)]
pub struct IllegalCharError {
    pub pos_start: Position,
    pub pos_end: Position,
    pub details: String,
}

impl Display for IllegalCharError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Illegal Character: {}", self.details)?;
        writeln!(
            f,
            "File {}, line {}",
            self.pos_start.file_name,
            self.pos_start.line + 1
        )?;
        write!(
            f,
            "\n{}",
            render_span(&self.pos_start.file_text, &self.pos_start, &self.pos_end)
        )
    }
}

impl StdError for IllegalCharError {}

/// Lexer error: a required character (currently only `=` after `!`) was missing.
#[derive(Debug, Clone)]
pub struct ExpectedCharError {
    pub pos_start: Position,
    pub pos_end: Position,
    pub details: String,
}

impl Display for ExpectedCharError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expected Character: {}", self.details)?;
        writeln!(
            f,
            "File {}, line {}",
            self.pos_start.file_name,
            self.pos_start.line + 1
        )?;
        write!(
            f,
            "\n{}",
            render_span(&self.pos_start.file_text, &self.pos_start, &self.pos_end)
        )
    }
}

impl StdError for ExpectedCharError {}

/// Parser error: the token stream cannot continue any production.
#[derive(Debug, Clone)]
pub struct InvalidSyntaxError {
    pub pos_start: Position,
    pub pos_end: Position,
    pub details: String,
}

impl Display for InvalidSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invalid Syntax: {}", self.details)?;
        writeln!(
            f,
            "File {}, line {}",
            self.pos_start.file_name,
            self.pos_start.line + 1
        )?;
        write!(
            f,
            "\n{}",
            render_span(&self.pos_start.file_text, &self.pos_start, &self.pos_end)
        )
    }
}

impl StdError for InvalidSyntaxError {}

/// Interpreter error: everything that fails during evaluation. Carries the
/// active `Context` chain so a traceback can be rendered.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub pos_start: Position,
    pub pos_end: Position,
    pub details: String,
    pub context: Rc<Context>,
}

impl RuntimeError {
    pub fn new(
        pos_start: Position,
        pos_end: Position,
        details: impl Into<String>,
        context: Rc<Context>,
    ) -> Self {
        Self {
            pos_start,
            pos_end,
            details: details.into(),
            context,
        }
    }

    fn generate_traceback(&self) -> String {
        let mut frames = Vec::new();
        let mut pos = self.pos_start.clone();
        let mut ctx = Some(self.context.clone());

        while let Some(c) = ctx {
            frames.push(format!(
                "  File {}, line {}, in {}\n",
                pos.file_name,
                pos.line + 1,
                c.display_name
            ));
            match (&c.parent_entry_pos, &c.parent) {
                (Some(p), Some(parent)) => {
                    pos = p.clone();
                    ctx = Some(parent.clone());
                }
                _ => ctx = None,
            }
        }

        frames.reverse();
        format!("Traceback (most recent call last):\n{}", frames.concat())
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_traceback())?;
        writeln!(f, "Runtime Error: {}", self.details)?;
        write!(
            f,
            "\n{}",
            render_span(&self.pos_start.file_text, &self.pos_start, &self.pos_end)
        )
    }
}

impl StdError for RuntimeError {}

/// Unifies every error kind the pipeline can produce, for `run`'s `Result`.
#[derive(Debug, Clone)]
pub enum Error {
    IllegalChar(IllegalCharError),
    ExpectedChar(ExpectedCharError),
    InvalidSyntax(InvalidSyntaxError),
    Runtime(RuntimeError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IllegalChar(e) => Display::fmt(e, f),
            Error::ExpectedChar(e) => Display::fmt(e, f),
            Error::InvalidSyntax(e) => Display::fmt(e, f),
            Error::Runtime(e) => Display::fmt(e, f),
        }
    }
}

impl StdError for Error {}

impl From<IllegalCharError> for Error {
    fn from(value: IllegalCharError) -> Self {
        Error::IllegalChar(value)
    }
}

impl From<ExpectedCharError> for Error {
    fn from(value: ExpectedCharError) -> Self {
        Error::ExpectedChar(value)
    }
}

impl From<InvalidSyntaxError> for Error {
    fn from(value: InvalidSyntaxError) -> Self {
        Error::InvalidSyntax(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Error::Runtime(value)
    }
}
