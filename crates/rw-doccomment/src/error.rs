//! Error types for comment rendering.
//!
//! Every variant except [`RenderError::Format`] is a precondition violation:
//! the upstream parser handed over a tree the renderers cannot accept. A
//! failed call never returns partial output.

use crate::ast::CommentKind;
use crate::commands::CommandId;

/// Error raised while rendering a comment tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A verbatim block line was visited outside its enclosing block.
    #[error("verbatim block line rendered outside of a verbatim block")]
    VerbatimBlockLine,

    /// Inline content or a nested full comment appeared as a direct child of a full comment.
    #[error("{kind} comment cannot be a child of a full comment")]
    NotBlockContent {
        /// Kind of the offending child.
        kind: CommentKind,
    },

    /// Function declarations cannot be partial template specializations.
    #[error("function reported as a partial template specialization")]
    FunctionPartialSpecialization,

    /// Bold, monospaced and emphasized inline commands take exactly one argument.
    #[error("inline command \\{command} renders styled text but has {count} arguments")]
    StyledArgumentCount {
        /// Command name as written in the comment.
        command: String,
        /// Number of arguments supplied.
        count: usize,
    },

    /// Command identifier missing from the command traits table.
    #[error("unknown command id {0}")]
    UnknownCommand(CommandId),

    /// The node kind has no standalone rendering.
    #[error("{kind} comment cannot be rendered on its own")]
    UnsupportedNode {
        /// Kind of the node passed in.
        kind: CommentKind,
    },

    /// Writing into the output buffer failed.
    #[error("formatting error")]
    Format(#[from] std::fmt::Error),
}
