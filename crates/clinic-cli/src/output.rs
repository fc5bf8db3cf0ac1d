use crate::{CliError, CliResult};

use clinic_client::ListView;
use clinic_core::Entity;

use std::io::Write;

use serde::Serialize;
use serde_json::json;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    PrettyJson,
}

impl OutputFormat {
    /// `--pretty` implies `--json`
    pub fn from_flags(json: bool, pretty: bool) -> Self {
        match (json, pretty) {
            (_, true) => Self::PrettyJson,
            (true, false) => Self::Json,
            (false, false) => Self::Table,
        }
    }

    pub fn is_json(self) -> bool {
        self != Self::Table
    }
}

/// Writes command results to stdout (or any writer) in the chosen format
pub struct Output<'a> {
    format: OutputFormat,
    out: &'a mut dyn Write,
}

impl<'a> Output<'a> {
    pub fn new(format: OutputFormat, out: &'a mut dyn Write) -> Self {
        Self { format, out }
    }

    /// Print a value: serialized as JSON, or through `render` as text
    pub fn value<T, F>(&mut self, value: &T, render: F) -> CliResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        let text = match self.format {
            OutputFormat::Table => render(value),
            OutputFormat::Json => serde_json::to_string(value).map_err(CliError::json)?,
            OutputFormat::PrettyJson => {
                serde_json::to_string_pretty(value).map_err(CliError::json)?
            }
        };
        self.write_line(&text)
    }

    /// Print a status message; JSON output wraps it as `{"message": ...}`
    pub fn message(&mut self, text: &str) -> CliResult<()> {
        self.value(&json!({ "message": text }), |_| text.to_string())
    }

    /// Print a loaded list, or its inline error.
    ///
    /// A list that failed to load is rendered as its error message and
    /// reported as a failure, the way the screen shows the error banner in
    /// place of the table.
    pub fn list<E, F>(&mut self, view: &ListView<E>, render: F) -> CliResult<()>
    where
        E: Entity,
        F: FnOnce(&[E]) -> String,
    {
        if let Some(error) = view.error() {
            self.value(&json!({ "error": error }), |_| format!("Error: {error}"))?;
            return Err(CliError::reported());
        }

        self.value(view.items(), render)
    }

    fn write_line(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.out, "{text}").map_err(|e| CliError::io("Failed to write output", e))
    }
}
