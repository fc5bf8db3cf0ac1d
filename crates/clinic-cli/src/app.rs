use crate::{Cli, CliError, CliResult, Commands, Output, OutputFormat, TerminalNavigator};
use crate::{logger, session_commands};

use clinic_client::{ApiClient, DashboardStats, FileTokenStore, Navigator, RouteGuard, Session};
use clinic_config::Config;

use std::process::ExitCode;

use log::{LevelFilter, debug};

/// Load configuration, set up logging and the session, then run the command.
///
/// Errors are printed to stderr as a single `Error: <message>` line.
pub async fn run(cli: Cli) -> ExitCode {
    match run_cli(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_reported() => ExitCode::FAILURE,
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", e.message());
            ExitCode::FAILURE
        }
    }
}

async fn run_cli(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    let level = if cli.verbose {
        (*config.logging.level).max(LevelFilter::Debug)
    } else {
        *config.logging.level
    };
    logger::initialize(level, config.log_file_path()?, config.logging.colored)?;
    config.log_summary();

    let session = Session::open(FileTokenStore::new(config.session_path()?))?;
    let client = ApiClient::from_config(&config.api, session)?;

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let mut output = Output::new(OutputFormat::from_flags(cli.json, cli.pretty), &mut stdout);
    let mut navigator = TerminalNavigator::stderr();

    execute(cli.command, &client, &mut output, &mut navigator).await
}

/// Run one command.
///
/// Protected commands mount a [`RouteGuard`] first; when it denies access the
/// navigator is sent to the login route and nothing is requested.
pub async fn execute(
    command: Commands,
    client: &ApiClient,
    output: &mut Output<'_>,
    navigator: &mut dyn Navigator,
) -> CliResult<()> {
    if command.is_protected() {
        require_session(client.session(), navigator)?;
    }

    match command {
        Commands::Login { email, password } => {
            session_commands::login(client, &email, &password, output).await
        }
        Commands::Logout => session_commands::logout(client, navigator, output),
        Commands::Status => session_commands::status(client, output),
        Commands::Dashboard => {
            let stats = client.dashboard_stats().await?;
            output.value(&stats, dashboard_summary)
        }
        Commands::Patient { action } => action.run(client, output).await,
        Commands::Appointment { action } => action.run(client, output).await,
    }
}

fn require_session(session: &Session, navigator: &mut dyn Navigator) -> CliResult<()> {
    let mut guard = RouteGuard::new(session.clone());
    guard.mount(navigator);

    guard
        .render(|| ())
        .into_content()
        .ok_or_else(CliError::access_denied)
}

pub fn dashboard_summary(stats: &DashboardStats) -> String {
    format!(
        "Patients:     {}\nAppointments: {}",
        stats.patients, stats.appointments
    )
}
