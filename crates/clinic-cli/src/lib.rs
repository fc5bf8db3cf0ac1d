//! clinic-cli library
//!
//! The `clinic` binary is a thin wrapper over [`run`]; [`execute`] is exposed
//! so a command can be driven against any client, output and navigator.

pub mod app;
pub mod appointment_commands;
pub mod arg_parsers;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod patient_commands;
pub mod prompt;
pub mod session_commands;
pub mod table;
pub mod terminal_navigator;

#[cfg(test)]
mod tests;

pub use app::{execute, run};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use output::{Output, OutputFormat};
pub use terminal_navigator::TerminalNavigator;
