//! Turning command results into text.
//!
//! Every handler returns a [`CommandOutput`]: serializable data plus the
//! name of the template that presents it. The `--output` flag decides
//! whether the data goes through that template or straight to a data
//! format.

mod message;
mod render;
mod serialize;
mod templates;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::OutputError;

pub use message::Message;
pub use render::Renderer;
pub use serialize::{serialize_csv, serialize_data};
pub use templates::TEMPLATES;

/// The `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// term on a terminal, text otherwise
    #[default]
    Auto,
    /// Styled text
    Term,
    /// Plain text
    Text,
    /// Text with style names shown as [name]..[/name]
    TermDebug,
    Json,
    Yaml,
    Xml,
    /// The command's rows as CSV
    Csv,
}

/// How the `style` template filter treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Styled,
    Plain,
    Debug,
}

/// Formats that serialize data and skip templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Xml,
    Csv,
}

/// What an [`OutputMode`] comes down to once `auto` is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Template(TextMode),
    Data(DataFormat),
}

impl OutputMode {
    /// Settles the mode. `auto` picks styled text when stdout is a
    /// terminal.
    pub fn presentation(self, stdout_is_terminal: bool) -> Presentation {
        match self {
            OutputMode::Auto if stdout_is_terminal => Presentation::Template(TextMode::Styled),
            OutputMode::Auto | OutputMode::Text => Presentation::Template(TextMode::Plain),
            OutputMode::Term => Presentation::Template(TextMode::Styled),
            OutputMode::TermDebug => Presentation::Template(TextMode::Debug),
            OutputMode::Json => Presentation::Data(DataFormat::Json),
            OutputMode::Yaml => Presentation::Data(DataFormat::Yaml),
            OutputMode::Xml => Presentation::Data(DataFormat::Xml),
            OutputMode::Csv => Presentation::Data(DataFormat::Csv),
        }
    }
}

fn stdout_is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub template: &'static str,
    pub data: serde_json::Value,
    /// Exported instead of `data` in CSV mode: the list a user would
    /// want as a spreadsheet.
    pub rows: Option<serde_json::Value>,
}

impl CommandOutput {
    pub fn new<T: Serialize>(template: &'static str, data: &T) -> Result<Self, OutputError> {
        Ok(CommandOutput {
            template,
            data: serde_json::to_value(data)?,
            rows: None,
        })
    }

    pub fn with_rows<R: Serialize>(mut self, rows: &R) -> Result<Self, OutputError> {
        self.rows = Some(serde_json::to_value(rows)?);
        Ok(self)
    }

    pub fn format(&self, mode: OutputMode) -> Result<String, OutputError> {
        self.present(mode.presentation(stdout_is_terminal()))
    }

    pub fn present(&self, presentation: Presentation) -> Result<String, OutputError> {
        match presentation {
            Presentation::Template(text_mode) => {
                Renderer::new(text_mode)?.render(self.template, &self.data)
            }
            Presentation::Data(DataFormat::Csv) => {
                serialize_csv(self.rows.as_ref().unwrap_or(&self.data))
            }
            Presentation::Data(format) => serialize_data(&self.data, format),
        }
    }
}

/// Where formatted output goes; the `--out` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(OutputDestination::Stdout, OutputDestination::File)
    }

    /// Writes `text`, ending it with a newline if it has none.
    pub fn write_text(&self, text: &str) -> io::Result<()> {
        let mut text = text.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        match self {
            OutputDestination::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            OutputDestination::File(path) => {
                require_parent(path)?;
                fs::write(path, text)
            }
        }
    }
}

/// The output file's directory must already exist.
fn require_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such directory: {}", dir.display()),
        )),
        _ => Ok(()),
    }
}

/// Formats `output` for `mode` and writes it to `dest`.
pub fn emit(
    output: &CommandOutput,
    mode: OutputMode,
    dest: &OutputDestination,
) -> Result<(), OutputError> {
    let text = output.format(mode)?;
    debug!(template = output.template, ?mode, bytes = text.len(), "writing output");
    dest.write_text(&text).map_err(OutputError::Write)
}
