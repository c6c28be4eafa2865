//! Declaration record attached to a full comment.
//!
//! The declaration model itself lives outside this crate. Renderers only see
//! the summary in [`DeclInfo`] plus two resolvers that map a [`DeclId`] to a
//! source position and to a USR.

use std::fmt;

/// Opaque handle to a declaration in the surrounding symbol model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeclId(pub u64);

/// Kind of the documented entity; selects the XML root element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeclKind {
    Function,
    Class,
    Variable,
    Namespace,
    Typedef,
    Enum,
    #[default]
    Other,
}

impl DeclKind {
    /// XML root element name.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Class => "Class",
            Self::Variable => "Variable",
            Self::Namespace => "Namespace",
            Self::Typedef => "Typedef",
            Self::Enum => "Enum",
            Self::Other => "Other",
        }
    }
}

/// Template-ness of the documented entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemplateKind {
    #[default]
    NotTemplate,
    Template,
    Specialization,
    PartialSpecialization,
}

/// A `major[.minor[.subminor]]` version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionTuple {
    pub major: u32,
    pub minor: Option<u32>,
    pub subminor: Option<u32>,
}

impl VersionTuple {
    #[must_use]
    pub fn new(major: u32) -> Self {
        Self {
            major,
            minor: None,
            subminor: None,
        }
    }

    #[must_use]
    pub fn with_minor(mut self, minor: u32) -> Self {
        self.minor = Some(minor);
        self
    }

    #[must_use]
    pub fn with_subminor(mut self, subminor: u32) -> Self {
        self.subminor = Some(subminor);
        self
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
            if let Some(subminor) = self.subminor {
                write!(f, ".{subminor}")?;
            }
        }
        Ok(())
    }
}

/// Availability annotation on a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailabilityAttr {
    /// Platform name such as `macosx` or `ios`.
    pub platform: Option<String>,
    pub introduced: Option<VersionTuple>,
    pub deprecated: Option<VersionTuple>,
    /// Last version the entity is available in.
    pub obsoleted: Option<VersionTuple>,
    /// Deprecation message; empty when none.
    pub message: String,
    /// Unconditionally unavailable.
    pub unavailable: bool,
}

impl AvailabilityAttr {
    /// Value of the XML `distribution` attribute.
    ///
    /// `macosx` maps to `OSX`; any other named platform maps to `iOS`.
    #[must_use]
    pub fn distribution(&self) -> &'static str {
        match self.platform.as_deref() {
            Some("macosx") => "OSX",
            Some(_) => "iOS",
            None => "",
        }
    }
}

/// Summary of the declaration a full comment documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclInfo {
    /// Handle passed to the location and USR resolvers.
    pub decl: DeclId,
    pub kind: DeclKind,
    pub template_kind: TemplateKind,
    /// Function-only.
    pub is_instance_method: bool,
    /// Function-only.
    pub is_class_method: bool,
    /// Display name; `None` for anonymous entities.
    pub name: Option<String>,
    pub availability: Vec<AvailabilityAttr>,
}

impl DeclInfo {
    #[must_use]
    pub fn new(decl: DeclId, kind: DeclKind) -> Self {
        Self {
            decl,
            kind,
            template_kind: TemplateKind::NotTemplate,
            is_instance_method: false,
            is_class_method: false,
            name: None,
            availability: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_template_kind(mut self, template_kind: TemplateKind) -> Self {
        self.template_kind = template_kind;
        self
    }

    #[must_use]
    pub fn with_availability(mut self, attr: AvailabilityAttr) -> Self {
        self.availability.push(attr);
        self
    }
}

/// Resolved source position of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path of the file, when the location maps to a real file.
    pub file: Option<String>,
    pub line: u32,
    pub column: u32,
}

/// Maps a declaration handle to its source position.
pub trait SourceLocationResolver {
    fn resolve_location(&self, decl: DeclId) -> Option<SourceLocation>;
}

/// Maps a declaration handle to its USR.
pub trait UsrResolver {
    fn resolve_usr(&self, decl: DeclId) -> Option<String>;
}

impl<F> SourceLocationResolver for F
where
    F: Fn(DeclId) -> Option<SourceLocation>,
{
    fn resolve_location(&self, decl: DeclId) -> Option<SourceLocation> {
        self(decl)
    }
}

impl<F> UsrResolver for F
where
    F: Fn(DeclId) -> Option<String>,
{
    fn resolve_usr(&self, decl: DeclId) -> Option<String> {
        self(decl)
    }
}

/// Resolver that never resolves anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unresolved;

impl SourceLocationResolver for Unresolved {
    fn resolve_location(&self, _decl: DeclId) -> Option<SourceLocation> {
        None
    }
}

impl UsrResolver for Unresolved {
    fn resolve_usr(&self, _decl: DeclId) -> Option<String> {
        None
    }
}
