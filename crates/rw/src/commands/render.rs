//! `rw render` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use rw_config::{CliSettings, Config, OutputFormat};
use rw_doccomment::{HtmlRenderer, XmlRenderer};

use crate::error::CliError;
use crate::input::CommentDocument;
use crate::output::Output;

/// Output format selectable on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Html,
    Xml,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Html => Self::Html,
            FormatArg::Xml => Self::Xml,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Comment tree as JSON (`-` reads stdin).
    input: PathBuf,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input parsing or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            format: self.format.map(Into::into),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let json = read_input(&self.input)?;
        let rendered = render_json(&config, &json)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{rendered}\n"))?;
                output.success(&format!(
                    "Wrote {} output to {}",
                    config.render.format,
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{rendered}")?;
            }
        }

        Ok(())
    }
}

/// Read the input document from a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin().lock().read_to_string(&mut json)?;
        Ok(json)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Parse a JSON comment document and render it in the configured format.
fn render_json(config: &Config, json: &str) -> Result<String, CliError> {
    let document: CommentDocument = serde_json::from_str(json)?;
    let mut traits = config.command_traits();
    let document = document.into_document(&mut traits, &config.xml);

    tracing::info!(
        format = %config.render.format,
        children = document.comment.children.len(),
        "Rendering comment"
    );

    let rendered = match config.render.format {
        OutputFormat::Html => HtmlRenderer::new(&traits).render_full_comment(&document.comment)?,
        OutputFormat::Xml => {
            XmlRenderer::new(&traits, &document.metadata, &document.metadata)
                .render(&document.comment)?
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DOCUMENT: &str = r#"{
        "decl": {
            "kind": "function",
            "name": "foo",
            "location": {"file": "/work/foo.h", "line": 4, "column": 6}
        },
        "children": [
            {"kind": "block_command", "command": "summary",
             "paragraph": [{"kind": "text", "text": "Does X."}]},
            {"kind": "param_command", "name": "n", "index": 0,
             "paragraph": [{"kind": "text", "text": "count"}]},
            {"kind": "paragraph", "children": [{"kind": "text", "text": "a/b"}]}
        ]
    }"#;

    fn config(toml: &str) -> Config {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_render_html_with_custom_brief() {
        let config = config("[[commands]]\nname = \"summary\"\nrole = \"brief\"\n");

        let html = render_json(&config, DOCUMENT).unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<p class="para-brief">Does X.</p><p>a&#47;b</p>"#,
                r#"<dl><dt class="param-name-index-0">n</dt><dd class="param-descr-index-0">count</dd></dl>"#,
            )
        );
    }

    #[test]
    fn test_render_xml_strips_prefix() {
        let config = config(
            "[render]\nformat = \"xml\"\n\n[xml]\nstrip_prefix = \"/work\"\n\n\
             [[commands]]\nname = \"summary\"\nrole = \"brief\"\n",
        );

        let xml = render_json(&config, DOCUMENT).unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<Function file="foo.h" line="4" column="6"><Name>foo</Name>"#,
                "<Abstract><Para>Does X.</Para></Abstract>",
                "<Parameters><Parameter><Name>n</Name><Index>0</Index>",
                r#"<Direction isExplicit="0">in</Direction>"#,
                "<Discussion><Para>count</Para></Discussion></Parameter></Parameters>",
                "<Discussion><Para>a/b</Para></Discussion></Function>",
            )
        );
    }

    #[test]
    fn test_unknown_command_renders_as_plain_block() {
        let html = render_json(&Config::default(), DOCUMENT).unwrap();

        assert!(html.starts_with(r#"<p class="para-brief">a&#47;b</p><p>Does X.</p><dl>"#));
    }

    #[test]
    fn test_invalid_json() {
        let err = render_json(&Config::default(), "{").unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_malformed_tree_is_render_error() {
        let json = r#"{"children": [{"kind": "text", "text": "loose"}]}"#;

        let err = render_json(&Config::default(), json).unwrap_err();

        assert!(matches!(err, CliError::Render(_)));
        assert!(err.to_string().starts_with("Rendering failed:"));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comment.json");
        std::fs::write(&path, DOCUMENT).unwrap();

        assert_eq!(read_input(&path).unwrap(), DOCUMENT);
    }
}
