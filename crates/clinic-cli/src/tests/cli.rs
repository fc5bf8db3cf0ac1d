use crate::appointment_commands::AppointmentCommands;
use crate::patient_commands::PatientCommands;
use crate::{Cli, Commands, OutputFormat};

use clinic_core::Gender;

use clap::Parser;

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "clinic",
        "patient",
        "list",
        "--json",
        "--server",
        "http://127.0.0.1:9000",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.server.as_deref(), Some("http://127.0.0.1:9000"));
    assert!(matches!(
        cli.command,
        Commands::Patient {
            action: PatientCommands::List
        }
    ));
}

#[test]
fn test_patient_create_defaults_gender() {
    let cli = Cli::try_parse_from([
        "clinic", "patient", "create", "--name", "Ann Lee", "--age", "34", "--phone", "555-0100",
    ])
    .unwrap();

    match cli.command {
        Commands::Patient {
            action: PatientCommands::Create { gender, email, .. },
        } => {
            assert_eq!(gender, Gender::Male);
            assert_eq!(email, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_invalid_gender_rejected_by_parser() {
    let result = Cli::try_parse_from([
        "clinic", "patient", "create", "--name", "Ann", "--age", "34", "--gender", "x", "--phone",
        "1",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_appointment_delete_yes_flag() {
    let cli = Cli::try_parse_from(["clinic", "appointment", "delete", "7", "-y"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Appointment {
            action: AppointmentCommands::Delete { id: 7, yes: true }
        }
    ));
}

#[test]
fn test_login_requires_credentials() {
    assert!(Cli::try_parse_from(["clinic", "login", "--email", "a@b.co"]).is_err());
}

#[test]
fn test_only_session_commands_are_unprotected() {
    let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;

    assert!(!parse(&["clinic", "login", "--email", "a@b.co", "--password", "x"]).is_protected());
    assert!(!parse(&["clinic", "logout"]).is_protected());
    assert!(!parse(&["clinic", "status"]).is_protected());
    assert!(parse(&["clinic", "dashboard"]).is_protected());
    assert!(parse(&["clinic", "patient", "get", "1"]).is_protected());
}

#[test]
fn test_pretty_implies_json() {
    assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::PrettyJson);
    assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
    assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Table);
}
