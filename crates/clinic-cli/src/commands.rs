use crate::{appointment_commands::AppointmentCommands, patient_commands::PatientCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and keep the session token for later commands
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Show whether a session token is stored
    Status,

    /// Patient and appointment counts
    Dashboard,

    /// Patient operations
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },

    /// Appointment operations
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommands,
    },
}

impl Commands {
    /// Commands that need a signed-in session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login { .. } | Self::Logout | Self::Status)
    }
}
