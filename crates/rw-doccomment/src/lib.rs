//! HTML and XML renderers for parsed documentation comments.
//!
//! A parsed comment is a tree of [`Comment`] nodes rooted at a
//! [`FullComment`]. Rendering first classifies the full comment's children
//! into brief, returns, parameters, template parameters and discussion
//! ([`FullCommentParts`]), then emits them in a fixed order.
//!
//! # Architecture
//!
//! - [`HtmlRenderer`]: HTML fragments with CSS hooks (`para-brief`,
//!   `param-name-index-N`, ...)
//! - [`XmlRenderer`]: XML documents that also carry declaration metadata
//!   obtained through [`SourceLocationResolver`] and [`UsrResolver`]
//!
//! Command names are resolved through a [`CommandTraits`] table, which
//! decides which block commands act as brief, returns or declaration
//! markers.
//!
//! # Example
//!
//! ```
//! use rw_doccomment::{
//!     BlockCommandComment, CommandTraits, FullComment, ParagraphComment, render_full_comment_html,
//! };
//!
//! let traits = CommandTraits::new();
//! let brief = traits.lookup("brief").unwrap();
//! let comment = FullComment::new(vec![
//!     BlockCommandComment::new(brief, ParagraphComment::text("Does X.")).into(),
//! ]);
//!
//! let html = render_full_comment_html(&comment, &traits).unwrap();
//! assert_eq!(html, r#"<p class="para-brief">Does X.</p>"#);
//! ```

mod ast;
mod classify;
mod commands;
mod decl;
mod error;
mod escape;
mod html;
mod xml;

pub use ast::{
    BlockCommandComment, Comment, CommentKind, FullComment, HtmlAttribute, HtmlEndTagComment,
    HtmlStartTagComment, InlineCommandComment, ParagraphComment, ParamCommandComment,
    PassDirection, RenderKind, TParamCommandComment, TextComment, VerbatimBlockComment,
    VerbatimBlockLineComment, VerbatimLineComment,
};
pub use classify::FullCommentParts;
pub use commands::{CommandId, CommandInfo, CommandKind, CommandTraits};
pub use decl::{
    AvailabilityAttr, DeclId, DeclInfo, DeclKind, SourceLocation, SourceLocationResolver,
    TemplateKind, Unresolved, UsrResolver, VersionTuple,
};
pub use error::RenderError;
pub use html::HtmlRenderer;
pub use xml::XmlRenderer;

/// Render an HTML start tag, HTML end tag or full comment as HTML.
///
/// Other node kinds yield [`RenderError::UnsupportedNode`].
pub fn render_html(node: &Comment, traits: &CommandTraits) -> Result<String, RenderError> {
    HtmlRenderer::new(traits).render(node)
}

/// Render a full comment as HTML.
pub fn render_full_comment_html(
    comment: &FullComment,
    traits: &CommandTraits,
) -> Result<String, RenderError> {
    HtmlRenderer::new(traits).render_full_comment(comment)
}

/// Render a full comment as an XML document.
pub fn render_xml(
    comment: &FullComment,
    traits: &CommandTraits,
    locations: &impl SourceLocationResolver,
    usrs: &impl UsrResolver,
) -> Result<String, RenderError> {
    XmlRenderer::new(traits, locations, usrs).render(comment)
}
