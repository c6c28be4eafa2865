//! Command traits table.
//!
//! The parser resolves every `\command` it sees to a [`CommandId`]. Renderers
//! ask the [`CommandTraits`] table what role a command plays instead of
//! matching on names, so projects can register their own aliases.

use std::collections::HashMap;
use std::fmt;

/// Opaque handle to an entry in a [`CommandTraits`] table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CommandId(u32);

impl CommandId {
    /// Raw numeric value of the handle.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Syntactic shape of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// Block command followed by a paragraph.
    Block,
    /// Inline command inside running text.
    Inline,
    /// `\param`.
    Param,
    /// `\tparam`.
    TParam,
    /// Multi-line verbatim block (`\code` ... `\endcode`).
    VerbatimBlock,
    /// Single-line verbatim command.
    VerbatimLine,
}

/// What renderers need to know about a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandInfo {
    /// Command name without the leading backslash.
    pub name: String,
    /// Syntactic shape.
    pub kind: CommandKind,
    /// Introduces the brief summary.
    pub is_brief: bool,
    /// Introduces the return value description.
    pub is_returns: bool,
    /// Documents a source declaration rather than prose; excluded from output.
    pub is_declaration: bool,
}

impl CommandInfo {
    /// Plain command with no special role.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_brief: false,
            is_returns: false,
            is_declaration: false,
        }
    }

    /// Block command introducing the brief summary.
    #[must_use]
    pub fn brief(name: impl Into<String>) -> Self {
        Self {
            is_brief: true,
            ..Self::new(name, CommandKind::Block)
        }
    }

    /// Block command introducing the return value description.
    #[must_use]
    pub fn returns(name: impl Into<String>) -> Self {
        Self {
            is_returns: true,
            ..Self::new(name, CommandKind::Block)
        }
    }

    /// Verbatim line naming a declaration.
    #[must_use]
    pub fn declaration(name: impl Into<String>) -> Self {
        Self {
            is_declaration: true,
            ..Self::new(name, CommandKind::VerbatimLine)
        }
    }
}

const BUILTIN_INLINE: &[&str] = &["a", "b", "c", "e", "em", "p"];
const BUILTIN_VERBATIM_BLOCKS: &[&str] = &[
    "code", "verbatim", "htmlonly", "latexonly", "xmlonly", "manonly", "rtfonly", "dot", "msc",
];
const BUILTIN_VERBATIM_LINES: &[&str] = &[
    "defgroup",
    "ingroup",
    "addtogroup",
    "weakgroup",
    "name",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
    "mainpage",
    "subpage",
    "ref",
];
const BUILTIN_DECLARATIONS: &[&str] = &[
    "fn",
    "var",
    "property",
    "typedef",
    "overload",
    "namespace",
    "class",
    "struct",
    "union",
    "enum",
    "interface",
    "protocol",
    "category",
];

/// Lookup table from [`CommandId`] to [`CommandInfo`].
///
/// Passed explicitly into every render call; there is no global registry.
#[derive(Clone, Debug, Default)]
pub struct CommandTraits {
    commands: Vec<CommandInfo>,
    by_name: HashMap<String, CommandId>,
}

impl CommandTraits {
    /// Table pre-populated with the builtin documentation commands.
    #[must_use]
    pub fn new() -> Self {
        let mut traits = Self::empty();
        traits.register(CommandInfo::brief("brief"));
        traits.register(CommandInfo::brief("short"));
        for name in ["returns", "return", "result"] {
            traits.register(CommandInfo::returns(name));
        }
        traits.register(CommandInfo::new("param", CommandKind::Param));
        traits.register(CommandInfo::new("tparam", CommandKind::TParam));
        for name in BUILTIN_INLINE {
            traits.register(CommandInfo::new(*name, CommandKind::Inline));
        }
        for name in BUILTIN_VERBATIM_BLOCKS {
            traits.register(CommandInfo::new(*name, CommandKind::VerbatimBlock));
        }
        for name in BUILTIN_VERBATIM_LINES {
            traits.register(CommandInfo::new(*name, CommandKind::VerbatimLine));
        }
        for name in BUILTIN_DECLARATIONS {
            traits.register(CommandInfo::declaration(*name));
        }
        traits
    }

    /// Table with no commands at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a command, returning its id.
    ///
    /// Registering a name that already exists replaces its info and keeps the id.
    #[allow(clippy::cast_possible_truncation)]
    pub fn register(&mut self, info: CommandInfo) -> CommandId {
        if let Some(&id) = self.by_name.get(&info.name) {
            self.commands[id.0 as usize] = info;
            return id;
        }
        let id = CommandId(self.commands.len() as u32);
        self.by_name.insert(info.name.clone(), id);
        self.commands.push(info);
        id
    }

    /// Find a command by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<CommandId> {
        self.by_name.get(name).copied()
    }

    /// Info for a command id, if the id belongs to this table.
    #[must_use]
    pub fn info(&self, id: CommandId) -> Option<&CommandInfo> {
        self.commands.get(id.0 as usize)
    }

    /// All registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CommandId, &CommandInfo)> {
        self.commands.iter().enumerate().map(|(i, info)| {
            #[allow(clippy::cast_possible_truncation)]
            (CommandId(i as u32), info)
        })
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the table has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
