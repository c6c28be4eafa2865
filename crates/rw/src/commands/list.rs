//! `rw commands` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rw_config::Config;
use rw_doccomment::{CommandInfo, CommandKind, CommandTraits};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the commands command.
#[derive(Args)]
pub(crate) struct CommandsArgs {
    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CommandsArgs {
    /// Execute the commands command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let traits = config.command_traits();
        output.highlight(&format!("{} commands", traits.len()));

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(format_table(&traits).as_bytes())?;
        Ok(())
    }
}

/// One line per command: name, syntactic kind and role.
fn format_table(traits: &CommandTraits) -> String {
    let width = traits
        .iter()
        .map(|(_, info)| info.name.len())
        .max()
        .unwrap_or_default();

    let mut table = String::new();
    for (_, info) in traits.iter() {
        table.push_str(&format!(
            "{:<width$}  {:<14}  {}\n",
            info.name,
            kind_label(info.kind),
            role_label(info)
        ));
    }
    table
}

fn kind_label(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Block => "block",
        CommandKind::Inline => "inline",
        CommandKind::Param => "param",
        CommandKind::TParam => "tparam",
        CommandKind::VerbatimBlock => "verbatim-block",
        CommandKind::VerbatimLine => "verbatim-line",
    }
}

fn role_label(info: &CommandInfo) -> &'static str {
    if info.is_brief {
        "brief"
    } else if info.is_returns {
        "returns"
    } else if info.is_declaration {
        "declaration"
    } else {
        "-"
    }
}
