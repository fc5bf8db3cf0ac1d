use crate::arg_parsers::parse_gender;
use crate::prompt::confirm;
use crate::table::Table;
use crate::{CliResult, Output};

use clinic_client::{ApiClient, Invalidation, ListView};
use clinic_core::{Gender, Patient, validate_patient};

use clap::Subcommand;
use log::info;

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// List all patients
    List,

    /// Get a patient by ID
    Get {
        /// Patient ID
        id: i64,
    },

    /// Register a new patient
    Create {
        /// Full name
        #[arg(long)]
        name: String,

        /// Age in years (1-150)
        #[arg(long)]
        age: i32,

        /// Gender: male, female or other
        #[arg(long, value_parser = parse_gender, default_value = "male")]
        gender: Gender,

        /// Phone number (digits, spaces, -, +, parentheses)
        #[arg(long)]
        phone: String,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Postal address
        #[arg(long)]
        address: Option<String>,
    },

    /// Update a patient; omitted fields keep their current value
    Update {
        /// Patient ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<i32>,

        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,

        #[arg(long)]
        phone: Option<String>,

        /// New email (empty string to clear)
        #[arg(long)]
        email: Option<String>,

        /// New address (empty string to clear)
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a patient
    Delete {
        /// Patient ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

impl PatientCommands {
    pub async fn run(self, client: &ApiClient, output: &mut Output<'_>) -> CliResult<()> {
        match self {
            PatientCommands::List => {
                let mut view = ListView::<Patient>::new(Invalidation::Refetch);
                view.load(|| client.list_patients()).await;
                output.list(&view, patient_table)
            }

            PatientCommands::Get { id } => {
                let patient = client.get_patient(id).await?;
                output.value(&patient, patient_detail)
            }

            PatientCommands::Create {
                name,
                age,
                gender,
                phone,
                email,
                address,
            } => {
                let patient = Patient {
                    email: non_blank(email),
                    address: non_blank(address),
                    ..Patient::new(name, age, gender, phone)
                };
                validate_patient(&patient)?;

                let created = client.create_patient(&patient).await?;
                info!("Created patient {:?}", created.id);
                output.value(&created, patient_detail)
            }

            PatientCommands::Update {
                id,
                name,
                age,
                gender,
                phone,
                email,
                address,
            } => {
                let mut patient = client.get_patient(id).await?;
                if let Some(name) = name {
                    patient.name = name;
                }
                if let Some(age) = age {
                    patient.age = age;
                }
                if let Some(gender) = gender {
                    patient.gender = gender;
                }
                if let Some(phone) = phone {
                    patient.phone = phone;
                }
                if email.is_some() {
                    patient.email = non_blank(email);
                }
                if address.is_some() {
                    patient.address = non_blank(address);
                }
                validate_patient(&patient)?;

                let updated = client.update_patient(id, &patient).await?;
                output.value(&updated, patient_detail)
            }

            PatientCommands::Delete { id, yes } => {
                if !yes && !confirm("Are you sure you want to delete this patient?")? {
                    return output.message("Cancelled");
                }

                let mut view = ListView::<Patient>::new(Invalidation::Patch);
                view.delete(id, || client.delete_patient(id)).await?;
                output.message(&format!("Deleted patient {id}"))
            }
        }
    }
}

/// Empty or whitespace-only input counts as "not provided"
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn patient_table(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "No patients found".to_string();
    }

    let mut table = Table::new(&["ID", "NAME", "AGE", "GENDER", "PHONE", "EMAIL"]);
    for patient in patients {
        table.row(vec![
            patient.id.map(|id| id.to_string()).unwrap_or_default(),
            patient.name.clone(),
            patient.age.to_string(),
            patient.gender.to_string(),
            patient.phone.clone(),
            patient.email.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.render()
}

pub fn patient_detail(patient: &Patient) -> String {
    let id = patient
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    [
        format!("ID:      {id}"),
        format!("Name:    {}", patient.name),
        format!("Age:     {}", patient.age),
        format!("Gender:  {}", patient.gender),
        format!("Phone:   {}", patient.phone),
        format!("Email:   {}", patient.email.as_deref().unwrap_or("-")),
        format!("Address: {}", patient.address.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}
