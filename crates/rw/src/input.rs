//! JSON input format for `rw render`.
//!
//! Nodes name commands by string. Names missing from the command table are
//! registered as plain commands before the tree is built.

use rw_config::XmlConfig;
use rw_doccomment::{
    AvailabilityAttr, BlockCommandComment, Comment, CommandId, CommandInfo, CommandKind,
    CommandTraits, DeclId, DeclInfo, DeclKind, FullComment, HtmlEndTagComment,
    HtmlStartTagComment, InlineCommandComment, ParagraphComment, ParamCommandComment,
    PassDirection, RenderKind, SourceLocation, SourceLocationResolver, TParamCommandComment,
    TemplateKind, TextComment, UsrResolver, VerbatimBlockComment, VerbatimLineComment,
    VersionTuple,
};
use serde::Deserialize;

/// Top-level input document.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentDocument {
    #[serde(default)]
    decl: Option<DeclInput>,
    children: Vec<NodeInput>,
}

/// A comment tree ready for rendering, with the metadata the XML renderer
/// resolves through its resolvers.
pub(crate) struct Document {
    pub comment: FullComment,
    pub metadata: DeclMetadata,
}

/// Location and USR of the single declaration in a document.
#[derive(Debug, Default)]
pub(crate) struct DeclMetadata {
    location: Option<SourceLocation>,
    usr: Option<String>,
}

impl SourceLocationResolver for DeclMetadata {
    fn resolve_location(&self, _decl: DeclId) -> Option<SourceLocation> {
        self.location.clone()
    }
}

impl UsrResolver for DeclMetadata {
    fn resolve_usr(&self, _decl: DeclId) -> Option<String> {
        self.usr.clone()
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum NodeInput {
    Text {
        text: String,
    },
    InlineCommand {
        name: String,
        #[serde(default)]
        render_kind: RenderKindInput,
        #[serde(default)]
        args: Vec<String>,
    },
    HtmlStartTag {
        name: String,
        #[serde(default)]
        attrs: Vec<AttrInput>,
        #[serde(default)]
        self_closing: bool,
    },
    HtmlEndTag {
        name: String,
    },
    Paragraph {
        children: Vec<NodeInput>,
    },
    BlockCommand {
        command: String,
        #[serde(default)]
        paragraph: Vec<NodeInput>,
    },
    ParamCommand {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        index: Option<u32>,
        #[serde(default)]
        direction: Option<DirectionInput>,
        #[serde(default)]
        paragraph: Vec<NodeInput>,
    },
    TparamCommand {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        position: Vec<u32>,
        #[serde(default)]
        paragraph: Vec<NodeInput>,
    },
    VerbatimBlock {
        command: String,
        #[serde(default)]
        lines: Vec<String>,
    },
    VerbatimLine {
        command: String,
        #[serde(default)]
        text: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RenderKindInput {
    #[default]
    Normal,
    Bold,
    Monospaced,
    Emphasized,
}

#[derive(Debug, Deserialize)]
struct AttrInput {
    name: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum DirectionInput {
    In,
    Out,
    InOut,
}

#[derive(Debug, Deserialize)]
struct DeclInput {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    kind: DeclKindInput,
    #[serde(default)]
    template_kind: TemplateKindInput,
    #[serde(default)]
    is_instance_method: bool,
    #[serde(default)]
    is_class_method: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    usr: Option<String>,
    #[serde(default)]
    location: Option<LocationInput>,
    #[serde(default)]
    availability: Vec<AvailabilityInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum DeclKindInput {
    Function,
    Class,
    Variable,
    Namespace,
    Typedef,
    Enum,
    #[default]
    Other,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TemplateKindInput {
    #[default]
    NotTemplate,
    Template,
    Specialization,
    PartialSpecialization,
}

#[derive(Debug, Deserialize)]
struct LocationInput {
    #[serde(default)]
    file: Option<String>,
    line: u32,
    column: u32,
}

#[derive(Debug, Deserialize)]
struct AvailabilityInput {
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    introduced: Option<VersionInput>,
    #[serde(default)]
    deprecated: Option<VersionInput>,
    #[serde(default)]
    obsoleted: Option<VersionInput>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    unavailable: bool,
}

/// Dotted version string such as `10.7` or `10.7.2`.
#[derive(Debug, Deserialize)]
#[serde(try_from = "String")]
struct VersionInput(VersionTuple);

impl TryFrom<String> for VersionInput {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| format!("invalid version {value:?}"))
        };
        let mut parts = value.split('.');
        let major = parse(parts.next().unwrap_or_default())?;
        let mut version = VersionTuple::new(major);
        if let Some(minor) = parts.next() {
            version = version.with_minor(parse(minor)?);
        }
        if let Some(subminor) = parts.next() {
            version = version.with_subminor(parse(subminor)?);
        }
        if parts.next().is_some() {
            return Err(format!("invalid version {value:?}"));
        }
        Ok(Self(version))
    }
}

impl CommentDocument {
    /// Build the comment tree, registering unknown commands in `traits`.
    pub(crate) fn into_document(self, traits: &mut CommandTraits, xml: &XmlConfig) -> Document {
        let children = self
            .children
            .into_iter()
            .map(|node| node.into_comment(traits))
            .collect();
        let mut comment = FullComment::new(children);
        let mut metadata = DeclMetadata::default();

        if let Some(decl) = self.decl {
            metadata.usr = decl.usr;
            metadata.location = decl.location.map(|location| SourceLocation {
                file: location
                    .file
                    .map(|file| xml.strip_file_prefix(&file).to_owned()),
                line: location.line,
                column: location.column,
            });

            let mut info = DeclInfo::new(DeclId(decl.id), decl.kind.into())
                .with_template_kind(decl.template_kind.into());
            info.is_instance_method = decl.is_instance_method;
            info.is_class_method = decl.is_class_method;
            info.name = decl.name;
            info.availability = decl.availability.into_iter().map(Into::into).collect();
            comment = comment.with_decl(info);
        }

        Document { comment, metadata }
    }
}

impl NodeInput {
    fn into_comment(self, traits: &mut CommandTraits) -> Comment {
        match self {
            Self::Text { text } => TextComment::new(text).into(),
            Self::InlineCommand {
                name,
                render_kind,
                args,
            } => {
                resolve_command(traits, &name, CommandKind::Inline);
                InlineCommandComment::new(name, render_kind.into(), args).into()
            }
            Self::HtmlStartTag {
                name,
                attrs,
                self_closing,
            } => {
                let mut tag = attrs
                    .into_iter()
                    .fold(HtmlStartTagComment::new(name), |tag, attr| {
                        tag.with_attr(attr.name, attr.value)
                    });
                tag.self_closing = self_closing;
                tag.into()
            }
            Self::HtmlEndTag { name } => HtmlEndTagComment::new(name).into(),
            Self::Paragraph { children } => paragraph(children, traits).into(),
            Self::BlockCommand {
                command,
                paragraph: children,
            } => {
                let id = resolve_command(traits, &command, CommandKind::Block);
                BlockCommandComment::new(id, paragraph(children, traits)).into()
            }
            Self::ParamCommand {
                name,
                index,
                direction,
                paragraph: children,
            } => {
                ParamCommandComment {
                    name,
                    index,
                    direction_explicit: direction.is_some(),
                    direction: direction.map(Into::into).unwrap_or_default(),
                    paragraph: paragraph(children, traits),
                }
                .into()
            }
            Self::TparamCommand {
                name,
                position,
                paragraph: children,
            } => {
                TParamCommandComment {
                    name,
                    position,
                    paragraph: paragraph(children, traits),
                }
                .into()
            }
            Self::VerbatimBlock { command, lines } => {
                let id = resolve_command(traits, &command, CommandKind::VerbatimBlock);
                VerbatimBlockComment::new(id, lines).into()
            }
            Self::VerbatimLine { command, text } => {
                let id = resolve_command(traits, &command, CommandKind::VerbatimLine);
                VerbatimLineComment::new(id, text).into()
            }
        }
    }
}

fn paragraph(children: Vec<NodeInput>, traits: &mut CommandTraits) -> ParagraphComment {
    ParagraphComment::new(
        children
            .into_iter()
            .map(|node| node.into_comment(traits))
            .collect(),
    )
}

/// Look up `name`, registering it as a plain command of `kind` if unknown.
fn resolve_command(traits: &mut CommandTraits, name: &str, kind: CommandKind) -> CommandId {
    if let Some(id) = traits.lookup(name) {
        return id;
    }
    tracing::info!(command = name, ?kind, "Registering unknown command");
    traits.register(CommandInfo::new(name, kind))
}

impl From<RenderKindInput> for RenderKind {
    fn from(value: RenderKindInput) -> Self {
        match value {
            RenderKindInput::Normal => Self::Normal,
            RenderKindInput::Bold => Self::Bold,
            RenderKindInput::Monospaced => Self::Monospaced,
            RenderKindInput::Emphasized => Self::Emphasized,
        }
    }
}

impl From<DirectionInput> for PassDirection {
    fn from(value: DirectionInput) -> Self {
        match value {
            DirectionInput::In => Self::In,
            DirectionInput::Out => Self::Out,
            DirectionInput::InOut => Self::InOut,
        }
    }
}

impl From<DeclKindInput> for DeclKind {
    fn from(value: DeclKindInput) -> Self {
        match value {
            DeclKindInput::Function => Self::Function,
            DeclKindInput::Class => Self::Class,
            DeclKindInput::Variable => Self::Variable,
            DeclKindInput::Namespace => Self::Namespace,
            DeclKindInput::Typedef => Self::Typedef,
            DeclKindInput::Enum => Self::Enum,
            DeclKindInput::Other => Self::Other,
        }
    }
}

impl From<TemplateKindInput> for TemplateKind {
    fn from(value: TemplateKindInput) -> Self {
        match value {
            TemplateKindInput::NotTemplate => Self::NotTemplate,
            TemplateKindInput::Template => Self::Template,
            TemplateKindInput::Specialization => Self::Specialization,
            TemplateKindInput::PartialSpecialization => Self::PartialSpecialization,
        }
    }
}

impl From<AvailabilityInput> for AvailabilityAttr {
    fn from(value: AvailabilityInput) -> Self {
        Self {
            platform: value.platform,
            introduced: value.introduced.map(|v| v.0),
            deprecated: value.deprecated.map(|v| v.0),
            obsoleted: value.obsoleted.map(|v| v.0),
            message: value.message,
            unavailable: value.unavailable,
        }
    }
}
