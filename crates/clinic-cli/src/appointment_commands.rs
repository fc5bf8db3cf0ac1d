use crate::arg_parsers::{parse_date, parse_status};
use crate::patient_commands::non_blank;
use crate::prompt::confirm;
use crate::table::Table;
use crate::{CliResult, Output};

use clinic_client::{ApiClient, Invalidation, ListView};
use clinic_core::{Appointment, AppointmentStatus, FormMode, Patient, validate_appointment};

use chrono::{DateTime, Local, Utc};
use clap::Subcommand;
use log::info;
use serde::Serialize;

/// Display format for appointment dates, in local time
const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// List all appointments with their patient names
    List,

    /// Get an appointment by ID
    Get {
        /// Appointment ID
        id: i64,
    },

    /// Book a new appointment
    Create {
        /// Patient ID
        #[arg(long)]
        patient_id: i64,

        /// Doctor's name
        #[arg(long)]
        doctor: String,

        /// Start time: RFC 3339, or local YYYY-MM-DDTHH:MM
        #[arg(long, value_parser = parse_date)]
        date: DateTime<Utc>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Status: scheduled, completed or cancelled
        #[arg(long, value_parser = parse_status)]
        status: Option<AppointmentStatus>,
    },

    /// Update an appointment; omitted fields keep their current value
    Update {
        /// Appointment ID
        id: i64,

        #[arg(long)]
        patient_id: Option<i64>,

        #[arg(long)]
        doctor: Option<String>,

        /// New start time: RFC 3339, or local YYYY-MM-DDTHH:MM
        #[arg(long, value_parser = parse_date)]
        date: Option<DateTime<Utc>>,

        /// New notes (empty string to clear)
        #[arg(long)]
        notes: Option<String>,

        #[arg(long, value_parser = parse_status)]
        status: Option<AppointmentStatus>,
    },

    /// Delete an appointment
    Delete {
        /// Appointment ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

/// Appointment row joined with its patient's name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRow<'a> {
    #[serde(flatten)]
    pub appointment: &'a Appointment,
    pub patient_name: String,
}

impl AppointmentCommands {
    pub async fn run(self, client: &ApiClient, output: &mut Output<'_>) -> CliResult<()> {
        match self {
            AppointmentCommands::List => {
                let mut appointments = ListView::<Appointment>::new(Invalidation::Refetch);
                let mut patients = ListView::<Patient>::new(Invalidation::Refetch);

                tokio::join!(
                    appointments.load(|| client.list_appointments()),
                    patients.load(|| client.list_patients())
                );

                // Either fetch failing replaces the whole table with its error
                if appointments.error().is_some() {
                    return output.list(&appointments, |_| String::new());
                }
                if patients.error().is_some() {
                    return output.list(&patients, |_| String::new());
                }

                let names = patients.items();
                let rows: Vec<AppointmentRow<'_>> = appointments
                    .items()
                    .iter()
                    .map(|appointment| AppointmentRow {
                        appointment,
                        patient_name: patient_name(names, appointment.patient_id),
                    })
                    .collect();

                output.value(&rows, |rows| appointment_table(rows))
            }

            AppointmentCommands::Get { id } => {
                let appointment = client.get_appointment(id).await?;
                output.value(&appointment, appointment_detail)
            }

            AppointmentCommands::Create {
                patient_id,
                doctor,
                date,
                notes,
                status,
            } => {
                let appointment = Appointment {
                    notes: non_blank(notes),
                    status,
                    ..Appointment::new(patient_id, doctor, date)
                };
                validate_appointment(&appointment, FormMode::Create, Utc::now())?;

                let created = client.create_appointment(&appointment).await?;
                info!("Created appointment {:?}", created.id);
                output.value(&created, appointment_detail)
            }

            AppointmentCommands::Update {
                id,
                patient_id,
                doctor,
                date,
                notes,
                status,
            } => {
                let mut appointment = client.get_appointment(id).await?;
                if let Some(patient_id) = patient_id {
                    appointment.patient_id = patient_id;
                }
                if let Some(doctor) = doctor {
                    appointment.doctor = doctor;
                }
                if let Some(date) = date {
                    appointment.date = date;
                }
                if notes.is_some() {
                    appointment.notes = non_blank(notes);
                }
                if status.is_some() {
                    appointment.status = status;
                }
                validate_appointment(&appointment, FormMode::Update, Utc::now())?;

                let updated = client.update_appointment(id, &appointment).await?;
                output.value(&updated, appointment_detail)
            }

            AppointmentCommands::Delete { id, yes } => {
                if !yes && !confirm("Are you sure you want to delete this appointment?")? {
                    return output.message("Cancelled");
                }

                let mut view = ListView::<Appointment>::new(Invalidation::Patch);
                view.delete(id, || client.delete_appointment(id)).await?;
                output.message(&format!("Deleted appointment {id}"))
            }
        }
    }
}

/// Name of the referenced patient, or `Patient #<id>` when unknown
pub fn patient_name(patients: &[Patient], patient_id: i64) -> String {
    patients
        .iter()
        .find(|p| p.id == Some(patient_id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Patient #{patient_id}"))
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format(DATE_DISPLAY_FORMAT)
        .to_string()
}

pub fn appointment_table(rows: &[AppointmentRow<'_>]) -> String {
    if rows.is_empty() {
        return "No appointments found".to_string();
    }

    let mut table = Table::new(&["ID", "PATIENT", "DOCTOR", "DATE", "STATUS", "NOTES"]);
    for row in rows {
        let appointment = row.appointment;
        table.row(vec![
            appointment.id.map(|id| id.to_string()).unwrap_or_default(),
            row.patient_name.clone(),
            appointment.doctor.clone(),
            format_date(appointment.date),
            appointment.status().to_string(),
            appointment.notes.clone().unwrap_or_default(),
        ]);
    }
    table.render()
}

pub fn appointment_detail(appointment: &Appointment) -> String {
    let id = appointment
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    [
        format!("ID:      {id}"),
        format!("Patient: {}", appointment.patient_id),
        format!("Doctor:  {}", appointment.doctor),
        format!("Date:    {}", format_date(appointment.date)),
        format!("Status:  {}", appointment.status()),
        format!("Notes:   {}", appointment.notes.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}
