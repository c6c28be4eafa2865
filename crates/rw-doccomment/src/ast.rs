//! Documentation comment tree.
//!
//! Trees are built by an external parser and are read-only afterwards.
//! Child order is source order. Renderers never mutate a tree; the classifier
//! only reorders its own views of it.

use std::fmt;

use crate::commands::CommandId;
use crate::decl::DeclInfo;

/// Discriminant of a [`Comment`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentKind {
    Text,
    InlineCommand,
    HtmlStartTag,
    HtmlEndTag,
    Paragraph,
    BlockCommand,
    ParamCommand,
    TParamCommand,
    VerbatimBlock,
    VerbatimBlockLine,
    VerbatimLine,
    FullComment,
}

impl CommentKind {
    /// Whether nodes of this kind appear inside running text.
    #[must_use]
    pub fn is_inline_content(self) -> bool {
        matches!(
            self,
            Self::Text | Self::InlineCommand | Self::HtmlStartTag | Self::HtmlEndTag
        )
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::InlineCommand => "inline command",
            Self::HtmlStartTag => "HTML start tag",
            Self::HtmlEndTag => "HTML end tag",
            Self::Paragraph => "paragraph",
            Self::BlockCommand => "block command",
            Self::ParamCommand => "param command",
            Self::TParamCommand => "tparam command",
            Self::VerbatimBlock => "verbatim block",
            Self::VerbatimBlockLine => "verbatim block line",
            Self::VerbatimLine => "verbatim line",
            Self::FullComment => "full",
        };
        f.write_str(name)
    }
}

/// A node of a documentation comment tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Comment {
    Text(TextComment),
    InlineCommand(InlineCommandComment),
    HtmlStartTag(HtmlStartTagComment),
    HtmlEndTag(HtmlEndTagComment),
    Paragraph(ParagraphComment),
    BlockCommand(BlockCommandComment),
    ParamCommand(ParamCommandComment),
    TParamCommand(TParamCommandComment),
    VerbatimBlock(VerbatimBlockComment),
    VerbatimBlockLine(VerbatimBlockLineComment),
    VerbatimLine(VerbatimLineComment),
    Full(FullComment),
}

impl Comment {
    /// Kind of this node.
    #[must_use]
    pub fn kind(&self) -> CommentKind {
        match self {
            Self::Text(_) => CommentKind::Text,
            Self::InlineCommand(_) => CommentKind::InlineCommand,
            Self::HtmlStartTag(_) => CommentKind::HtmlStartTag,
            Self::HtmlEndTag(_) => CommentKind::HtmlEndTag,
            Self::Paragraph(_) => CommentKind::Paragraph,
            Self::BlockCommand(_) => CommentKind::BlockCommand,
            Self::ParamCommand(_) => CommentKind::ParamCommand,
            Self::TParamCommand(_) => CommentKind::TParamCommand,
            Self::VerbatimBlock(_) => CommentKind::VerbatimBlock,
            Self::VerbatimBlockLine(_) => CommentKind::VerbatimBlockLine,
            Self::VerbatimLine(_) => CommentKind::VerbatimLine,
            Self::Full(_) => CommentKind::FullComment,
        }
    }

    /// Whether the node carries no visible text.
    ///
    /// Only text and paragraphs can be whitespace; every other kind is not.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        match self {
            Self::Text(text) => text.is_whitespace(),
            Self::Paragraph(paragraph) => paragraph.is_whitespace(),
            _ => false,
        }
    }
}

/// Plain text run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextComment {
    pub text: String,
}

impl TextComment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True iff the text is empty or consists only of blanks.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
    }
}

/// How an inline command's argument is styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderKind {
    #[default]
    Normal,
    Bold,
    Monospaced,
    Emphasized,
}

/// Inline command such as `\b word` or `\c code`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineCommandComment {
    /// Command name without the backslash.
    pub name: String,
    pub render_kind: RenderKind,
    pub args: Vec<String>,
}

impl InlineCommandComment {
    #[must_use]
    pub fn new(name: impl Into<String>, render_kind: RenderKind, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            render_kind,
            args,
        }
    }
}

/// One `name="value"` pair of an HTML start tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlAttribute {
    pub name: String,
    /// Empty when the attribute was written without a value.
    pub value: String,
}

impl HtmlAttribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Raw HTML start tag embedded in a comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlStartTagComment {
    pub tag_name: String,
    pub attrs: Vec<HtmlAttribute>,
    pub self_closing: bool,
}

impl HtmlStartTagComment {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Vec::new(),
            self_closing: false,
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(HtmlAttribute::new(name, value));
        self
    }

    #[must_use]
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }
}

/// Raw HTML end tag embedded in a comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlEndTagComment {
    pub tag_name: String,
}

impl HtmlEndTagComment {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}

/// Sequence of inline content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphComment {
    pub children: Vec<Comment>,
}

impl ParagraphComment {
    #[must_use]
    pub fn new(children: Vec<Comment>) -> Self {
        Self { children }
    }

    /// Paragraph holding a single text run.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Comment::Text(TextComment::new(text))])
    }

    /// True iff every child is whitespace text.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.children.iter().all(|child| match child {
            Comment::Text(text) => text.is_whitespace(),
            _ => false,
        })
    }
}

/// Block command such as `\brief` or `\returns` with its discussion.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockCommandComment {
    pub command: CommandId,
    pub paragraph: ParagraphComment,
}

impl BlockCommandComment {
    #[must_use]
    pub fn new(command: CommandId, paragraph: ParagraphComment) -> Self {
        Self { command, paragraph }
    }
}

/// Direction in which a function parameter passes data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PassDirection {
    #[default]
    In,
    Out,
    InOut,
}

impl PassDirection {
    /// Spelling used in XML output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in,out",
        }
    }
}

/// `\param` command.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamCommandComment {
    /// Parameter name; `None` when the author wrote none.
    pub name: Option<String>,
    /// Position in the function prototype; `None` when unresolved.
    pub index: Option<u32>,
    pub direction: PassDirection,
    /// Whether `[in]`/`[out]`/`[in,out]` was written explicitly.
    pub direction_explicit: bool,
    pub paragraph: ParagraphComment,
}

impl ParamCommandComment {
    #[must_use]
    pub fn new(name: impl Into<String>, paragraph: ParagraphComment) -> Self {
        Self {
            name: Some(name.into()),
            index: None,
            direction: PassDirection::In,
            direction_explicit: false,
            paragraph,
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    /// Set an explicitly written direction.
    #[must_use]
    pub fn with_direction(mut self, direction: PassDirection) -> Self {
        self.direction = direction;
        self.direction_explicit = true;
        self
    }

    #[must_use]
    pub fn has_non_whitespace_paragraph(&self) -> bool {
        !self.paragraph.is_whitespace()
    }
}

/// `\tparam` command.
#[derive(Clone, Debug, PartialEq)]
pub struct TParamCommandComment {
    pub name: Option<String>,
    /// Index at each template nesting level, outermost first; empty when unresolved.
    pub position: Vec<u32>,
    pub paragraph: ParagraphComment,
}

impl TParamCommandComment {
    #[must_use]
    pub fn new(name: impl Into<String>, paragraph: ParagraphComment) -> Self {
        Self {
            name: Some(name.into()),
            position: Vec::new(),
            paragraph,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Vec<u32>) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn is_position_valid(&self) -> bool {
        !self.position.is_empty()
    }

    /// Template nesting depth; 1 for a direct template parameter.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.position.len()
    }

    /// Index at the given nesting level (0 = outermost).
    #[must_use]
    pub fn index(&self, level: usize) -> Option<u32> {
        self.position.get(level).copied()
    }

    #[must_use]
    pub fn has_non_whitespace_paragraph(&self) -> bool {
        !self.paragraph.is_whitespace()
    }
}

/// One line of a verbatim block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbatimBlockLineComment {
    pub text: String,
}

impl VerbatimBlockLineComment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Multi-line literal block such as `\code` ... `\endcode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbatimBlockComment {
    pub command: CommandId,
    pub lines: Vec<VerbatimBlockLineComment>,
}

impl VerbatimBlockComment {
    #[must_use]
    pub fn new<I, S>(command: CommandId, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command,
            lines: lines.into_iter().map(VerbatimBlockLineComment::new).collect(),
        }
    }
}

/// Single-line literal command such as `\fn void f()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbatimLineComment {
    pub command: CommandId,
    pub text: String,
}

impl VerbatimLineComment {
    #[must_use]
    pub fn new(command: CommandId, text: impl Into<String>) -> Self {
        Self {
            command,
            text: text.into(),
        }
    }
}

/// Root of a documentation comment: every block attached to one declaration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FullComment {
    pub children: Vec<Comment>,
    /// Declaration the comment is attached to, when known.
    pub decl: Option<DeclInfo>,
}

impl FullComment {
    #[must_use]
    pub fn new(children: Vec<Comment>) -> Self {
        Self {
            children,
            decl: None,
        }
    }

    #[must_use]
    pub fn with_decl(mut self, decl: DeclInfo) -> Self {
        self.decl = Some(decl);
        self
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Comment {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Text(TextComment),
    InlineCommand(InlineCommandComment),
    HtmlStartTag(HtmlStartTagComment),
    HtmlEndTag(HtmlEndTagComment),
    Paragraph(ParagraphComment),
    BlockCommand(BlockCommandComment),
    ParamCommand(ParamCommandComment),
    TParamCommand(TParamCommandComment),
    VerbatimBlock(VerbatimBlockComment),
    VerbatimBlockLine(VerbatimBlockLineComment),
    VerbatimLine(VerbatimLineComment),
    Full(FullComment),
);
