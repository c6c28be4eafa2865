//! Splitting a full comment into semantic parts.
//!
//! Both renderers consume [`FullCommentParts`]; only the emission rules
//! differ between them.

use std::ptr;

use crate::ast::{
    BlockCommandComment, Comment, FullComment, ParagraphComment, ParamCommandComment,
    TParamCommandComment,
};
use crate::commands::{CommandId, CommandInfo, CommandTraits};
use crate::error::RenderError;

/// Classified view over the children of a [`FullComment`].
///
/// Holds references into the tree; the tree itself is never reordered.
#[derive(Debug, Default)]
pub struct FullCommentParts<'a> {
    /// First block command flagged as brief.
    pub brief: Option<&'a BlockCommandComment>,
    /// First non-whitespace paragraph, kept as a fallback summary.
    pub first_paragraph: Option<&'a ParagraphComment>,
    /// First block command flagged as returns.
    pub returns: Option<&'a BlockCommandComment>,
    /// Named parameters, sorted by prototype index.
    pub params: Vec<&'a ParamCommandComment>,
    /// Named template parameters, sorted by position.
    pub tparams: Vec<&'a TParamCommandComment>,
    /// Remaining blocks in source order.
    pub misc: Vec<&'a Comment>,
}

impl<'a> FullCommentParts<'a> {
    /// Classify the direct children of `comment`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotBlockContent`] if a child is inline content or
    /// another full comment, and [`RenderError::UnknownCommand`] if a command id
    /// is missing from `traits`.
    pub fn classify(
        comment: &'a FullComment,
        traits: &CommandTraits,
    ) -> Result<Self, RenderError> {
        let mut parts = Self::default();

        for child in &comment.children {
            match child {
                Comment::Paragraph(paragraph) => {
                    if paragraph.is_whitespace() {
                        continue;
                    }
                    if parts.first_paragraph.is_none() {
                        parts.first_paragraph = Some(paragraph);
                    }
                    parts.misc.push(child);
                }
                Comment::BlockCommand(block) => {
                    let info = command_info(traits, block.command)?;
                    if parts.brief.is_none() && info.is_brief {
                        parts.brief = Some(block);
                    } else if parts.returns.is_none() && info.is_returns {
                        parts.returns = Some(block);
                    } else {
                        parts.misc.push(child);
                    }
                }
                Comment::ParamCommand(param) => {
                    if param.name.is_none() {
                        tracing::trace!("Dropping unnamed param command");
                        continue;
                    }
                    if !param.direction_explicit && !param.has_non_whitespace_paragraph() {
                        tracing::trace!(name = ?param.name, "Dropping empty param command");
                        continue;
                    }
                    parts.params.push(param);
                }
                Comment::TParamCommand(tparam) => {
                    if tparam.name.is_none() || !tparam.has_non_whitespace_paragraph() {
                        tracing::trace!(name = ?tparam.name, "Dropping tparam command");
                        continue;
                    }
                    parts.tparams.push(tparam);
                }
                Comment::VerbatimBlock(_) => parts.misc.push(child),
                Comment::VerbatimLine(line) => {
                    let info = command_info(traits, line.command)?;
                    if info.is_declaration {
                        tracing::trace!(command = %info.name, "Skipping declaration command");
                    } else {
                        parts.misc.push(child);
                    }
                }
                Comment::Text(_)
                | Comment::InlineCommand(_)
                | Comment::HtmlStartTag(_)
                | Comment::HtmlEndTag(_)
                | Comment::VerbatimBlockLine(_)
                | Comment::Full(_) => {
                    return Err(RenderError::NotBlockContent { kind: child.kind() });
                }
            }
        }

        // Unresolved parameters go last, keeping their source order.
        parts
            .params
            .sort_by_key(|param| param.index.unwrap_or(u32::MAX));
        parts.tparams.sort_by_key(|tparam| tparam_sort_key(tparam));

        Ok(parts)
    }

    /// Whether `block` is the first paragraph, which renders as the summary
    /// when there is no brief command.
    #[must_use]
    pub fn is_brief_fallback(&self, block: &Comment) -> bool {
        if self.brief.is_some() {
            return false;
        }
        match (block, self.first_paragraph) {
            (Comment::Paragraph(paragraph), Some(first)) => ptr::eq(paragraph, first),
            _ => false,
        }
    }

    /// Misc blocks that still need rendering after the summary.
    pub fn discussion(&self) -> impl Iterator<Item = &'a Comment> + '_ {
        self.misc
            .iter()
            .copied()
            .filter(|block| !self.is_brief_fallback(block))
    }
}

/// Direct template parameters by index, then nested ones, then unresolved.
fn tparam_sort_key(tparam: &TParamCommandComment) -> (u8, u32) {
    match tparam.depth() {
        0 => (2, 0),
        1 => (0, tparam.index(0).unwrap_or(0)),
        _ => (1, 0),
    }
}

pub(crate) fn command_info(
    traits: &CommandTraits,
    id: CommandId,
) -> Result<&CommandInfo, RenderError> {
    traits.info(id).ok_or(RenderError::UnknownCommand(id))
}
