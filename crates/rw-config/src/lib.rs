//! Configuration management for RW.
//!
//! Parses `rw.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `xml.strip_prefix`

mod expand;

use rw_doccomment::{CommandInfo, CommandKind, CommandTraits};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// XML output configuration.
    pub xml: XmlConfig,
    /// Project-specific command registrations.
    pub commands: Vec<CommandConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output format of `rw render`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment.
    #[default]
    Html,
    /// XML document with declaration metadata.
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "html",
            Self::Xml => "xml",
        })
    }
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Default output format.
    pub format: OutputFormat,
}

/// XML output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    /// Prefix removed from `file` attributes. Empty disables stripping.
    pub strip_prefix: Option<String>,
}

impl XmlConfig {
    /// Apply `strip_prefix` to a source file path.
    ///
    /// Paths outside the prefix are returned unchanged.
    #[must_use]
    pub fn strip_file_prefix<'a>(&self, file: &'a str) -> &'a str {
        match self.strip_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => file
                .strip_prefix(prefix)
                .map_or(file, |rest| rest.trim_start_matches('/')),
            _ => file,
        }
    }
}

/// Role a custom command plays during classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandRole {
    /// Introduces the brief summary.
    Brief,
    /// Introduces the return value description.
    Returns,
    /// Verbatim line naming a declaration; excluded from output.
    Declaration,
    /// Plain block command.
    #[default]
    Block,
}

impl fmt::Display for CommandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Brief => "brief",
            Self::Returns => "returns",
            Self::Declaration => "declaration",
            Self::Block => "block",
        })
    }
}

/// A `[[commands]]` entry.
#[derive(Debug, Deserialize)]
pub struct CommandConfig {
    /// Command name without the leading backslash.
    pub name: String,
    /// Role of the command.
    #[serde(default)]
    pub role: CommandRole,
}

impl CommandConfig {
    fn to_info(&self) -> CommandInfo {
        match self.role {
            CommandRole::Brief => CommandInfo::brief(&self.name),
            CommandRole::Returns => CommandInfo::returns(&self.name),
            CommandRole::Declaration => CommandInfo::declaration(&self.name),
            CommandRole::Block => CommandInfo::new(&self.name, CommandKind::Block),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`xml.strip_prefix`").
        field: String,
        /// Error message (e.g., "${`PROJECT_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a command name to consist of ASCII alphanumerics and underscores.
fn require_command_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ConfigError::Validation(format!(
            "{field} must contain only ASCII letters, digits and underscores, got {value:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.render.format = format;
        }
    }

    /// Build the command traits table: builtins plus `[[commands]]` entries.
    ///
    /// Entries reusing a builtin name replace the builtin's role.
    #[must_use]
    pub fn command_traits(&self) -> CommandTraits {
        let mut traits = CommandTraits::new();
        for command in &self.commands {
            traits.register(command.to_info());
        }
        traits
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and expansion
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_commands()
    }

    /// Validate `[[commands]]` entries.
    fn validate_commands(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, command) in self.commands.iter().enumerate() {
            require_command_name(&command.name, &format!("commands[{i}].name"))?;
            if !seen.insert(command.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "command {:?} is registered more than once",
                    command.name
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref prefix) = self.xml.strip_prefix {
            self.xml.strip_prefix = Some(expand::expand_env(prefix, "xml.strip_prefix")?);
        }
        Ok(())
    }
}
