use thiserror::Error;

use crate::parser::Rule;

#[derive(Debug, Error)]
pub enum MacroError {
    /// A command argument that is neither a string nor a placeholder
    #[error("unexpected token: {kind}")]
    UnexpectedToken { kind: &'static str },

    #[error("grammar error: {0}")]
    Grammar(#[from] Box<pest::error::Error<Rule>>),
}
