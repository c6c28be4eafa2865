//! HTML rendering of comment trees.
//!
//! Produces a fragment for rich-text display: a full comment becomes a
//! summary paragraph, the discussion, `<dl>` lists for template parameters and
//! parameters, and a returns paragraph.

use std::fmt::Write;

use crate::ast::{
    BlockCommandComment, Comment, FullComment, HtmlStartTagComment, InlineCommandComment,
    ParagraphComment, ParamCommandComment, RenderKind, TParamCommandComment, VerbatimBlockComment,
};
use crate::classify::{FullCommentParts, command_info};
use crate::commands::CommandTraits;
use crate::error::RenderError;
use crate::escape::push_html_escaped;

/// Renders comment trees as HTML fragments.
#[derive(Clone, Copy, Debug)]
pub struct HtmlRenderer<'t> {
    traits: &'t CommandTraits,
}

impl<'t> HtmlRenderer<'t> {
    #[must_use]
    pub fn new(traits: &'t CommandTraits) -> Self {
        Self { traits }
    }

    /// Render a raw HTML tag or a full comment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedNode`] for any other node kind, or a
    /// precondition error from a malformed tree.
    pub fn render(&self, node: &Comment) -> Result<String, RenderError> {
        match node {
            Comment::HtmlStartTag(_) | Comment::HtmlEndTag(_) => {
                let mut out = String::with_capacity(64);
                self.visit(node, &mut out)?;
                Ok(out)
            }
            Comment::Full(comment) => self.render_full_comment(comment),
            _ => Err(RenderError::UnsupportedNode { kind: node.kind() }),
        }
    }

    /// Render a full comment.
    pub fn render_full_comment(&self, comment: &FullComment) -> Result<String, RenderError> {
        let mut out = String::with_capacity(1024);
        self.visit_full_comment(comment, &mut out)
            .inspect_err(|e| tracing::debug!(error = %e, "HTML rendering aborted"))?;
        Ok(out)
    }

    fn visit(&self, node: &Comment, out: &mut String) -> Result<(), RenderError> {
        match node {
            Comment::Text(text) => push_html_escaped(out, &text.text),
            Comment::InlineCommand(command) => visit_inline_command(command, out)?,
            Comment::HtmlStartTag(tag) => write_start_tag(tag, out)?,
            Comment::HtmlEndTag(tag) => write!(out, "</{}>", tag.tag_name)?,
            Comment::Paragraph(paragraph) => self.visit_paragraph(paragraph, out)?,
            Comment::BlockCommand(block) => self.visit_block_command(block, out)?,
            Comment::ParamCommand(param) => self.visit_param_command(param, out)?,
            Comment::TParamCommand(tparam) => self.visit_tparam_command(tparam, out)?,
            Comment::VerbatimBlock(block) => visit_verbatim_block(block, out),
            Comment::VerbatimBlockLine(_) => return Err(RenderError::VerbatimBlockLine),
            Comment::VerbatimLine(line) => {
                out.push_str("<pre>");
                push_html_escaped(out, &line.text);
                out.push_str("</pre>");
            }
            Comment::Full(comment) => self.visit_full_comment(comment, out)?,
        }
        Ok(())
    }

    fn visit_paragraph(
        &self,
        paragraph: &ParagraphComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        if paragraph.is_whitespace() {
            return Ok(());
        }
        out.push_str("<p>");
        self.visit_children(paragraph, out)?;
        out.push_str("</p>");
        Ok(())
    }

    /// Render a paragraph's children without the `<p>` wrapper.
    fn visit_children(
        &self,
        paragraph: &ParagraphComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        for child in &paragraph.children {
            self.visit(child, out)?;
        }
        Ok(())
    }

    fn visit_block_command(
        &self,
        block: &BlockCommandComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let info = command_info(self.traits, block.command)?;
        if info.is_brief {
            out.push_str(r#"<p class="para-brief">"#);
            self.visit_children(&block.paragraph, out)?;
            out.push_str("</p>");
        } else if info.is_returns {
            out.push_str(r#"<p class="para-returns"><span class="word-returns">Returns</span> "#);
            self.visit_children(&block.paragraph, out)?;
            out.push_str("</p>");
        } else {
            self.visit_paragraph(&block.paragraph, out)?;
        }
        Ok(())
    }

    fn visit_param_command(
        &self,
        param: &ParamCommandComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let suffix = param
            .index
            .map_or_else(|| "invalid".to_owned(), |index| index.to_string());

        write!(out, r#"<dt class="param-name-index-{suffix}">"#)?;
        push_html_escaped(out, param.name.as_deref().unwrap_or_default());
        write!(out, r#"</dt><dd class="param-descr-index-{suffix}">"#)?;
        self.visit_children(&param.paragraph, out)?;
        out.push_str("</dd>");
        Ok(())
    }

    fn visit_tparam_command(
        &self,
        tparam: &TParamCommandComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let suffix = match (tparam.depth(), tparam.index(0)) {
            (1, Some(index)) => index.to_string(),
            (0, _) => "invalid".to_owned(),
            _ => "other".to_owned(),
        };

        write!(out, r#"<dt class="tparam-name-index-{suffix}">"#)?;
        push_html_escaped(out, tparam.name.as_deref().unwrap_or_default());
        write!(out, r#"</dt><dd class="tparam-descr-index-{suffix}">"#)?;
        self.visit_children(&tparam.paragraph, out)?;
        out.push_str("</dd>");
        Ok(())
    }

    fn visit_full_comment(
        &self,
        comment: &FullComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let parts = FullCommentParts::classify(comment, self.traits)?;
        tracing::debug!(
            params = parts.params.len(),
            tparams = parts.tparams.len(),
            misc = parts.misc.len(),
            "Rendering full comment as HTML"
        );

        if let Some(brief) = parts.brief {
            self.visit_block_command(brief, out)?;
        } else if let Some(first) = parts.first_paragraph {
            out.push_str(r#"<p class="para-brief">"#);
            self.visit_children(first, out)?;
            out.push_str("</p>");
        }

        for block in parts.discussion() {
            self.visit(block, out)?;
        }

        if !parts.tparams.is_empty() {
            out.push_str("<dl>");
            for tparam in &parts.tparams {
                self.visit_tparam_command(tparam, out)?;
            }
            out.push_str("</dl>");
        }

        if !parts.params.is_empty() {
            out.push_str("<dl>");
            for param in &parts.params {
                self.visit_param_command(param, out)?;
            }
            out.push_str("</dl>");
        }

        if let Some(returns) = parts.returns {
            self.visit_block_command(returns, out)?;
        }

        Ok(())
    }
}

fn visit_inline_command(
    command: &InlineCommandComment,
    out: &mut String,
) -> Result<(), RenderError> {
    let Some(first) = command.args.first().filter(|arg| !arg.is_empty()) else {
        return Ok(());
    };

    let tag = match command.render_kind {
        RenderKind::Normal => {
            for arg in &command.args {
                push_html_escaped(out, arg);
                out.push(' ');
            }
            return Ok(());
        }
        RenderKind::Bold => "b",
        RenderKind::Monospaced => "tt",
        RenderKind::Emphasized => "em",
    };

    if command.args.len() != 1 {
        return Err(RenderError::StyledArgumentCount {
            command: command.name.clone(),
            count: command.args.len(),
        });
    }

    write!(out, "<{tag}>")?;
    push_html_escaped(out, first);
    write!(out, "</{tag}>")?;
    Ok(())
}

fn visit_verbatim_block(block: &VerbatimBlockComment, out: &mut String) {
    if block.lines.is_empty() {
        return;
    }
    out.push_str("<pre>");
    for (i, line) in block.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_html_escaped(out, &line.text);
    }
    out.push_str("</pre>");
}

/// Re-serialize a start tag as written. No escaping is applied.
pub(crate) fn write_start_tag(
    tag: &HtmlStartTagComment,
    out: &mut String,
) -> Result<(), RenderError> {
    write!(out, "<{}", tag.tag_name)?;
    for attr in &tag.attrs {
        write!(out, " {}", attr.name)?;
        if !attr.value.is_empty() {
            write!(out, r#"="{}""#, attr.value)?;
        }
    }
    out.push_str(if tag.self_closing { "/>" } else { ">" });
    Ok(())
}
