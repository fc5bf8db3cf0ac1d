//! clinic - clinic administration from the terminal
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the token is kept in .clinic/session.json
//! clinic login --email admin@clinic.test --password secret
//!
//! # List patients as a table, or as JSON
//! clinic patient list
//! clinic patient list --json --pretty
//!
//! # Book an appointment (local time)
//! clinic appointment create --patient-id 3 --doctor "Dr. Grey" --date 2030-01-15T09:30
//! ```

use clinic_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    clinic_cli::run(Cli::parse()).await
}
