//! medrec CLI
//!
//! Command-line caller for the patient registry. Each invocation issues
//! one well-formed command and prints a human-readable outcome.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use medrec::{Config, MedRecError, PatientRecord, PatientRegistry};
use tracing_subscriber::{fmt, EnvFilter};

/// medrec CLI
#[derive(Parser, Debug)]
#[command(name = "medrec-cli")]
#[command(about = "Single-operator patient record manager")]
#[command(version)]
struct Args {
    /// Path of the patient collection file
    #[arg(short, long, default_value = "./patients.csv")]
    data_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new patient
    Add {
        /// Unique patient id
        id: String,

        /// Patient name
        name: String,

        /// Patient age in years
        age: u32,

        /// Patient gender
        gender: String,

        /// Diagnosed disease
        disease: String,

        /// Admission date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        admit_date: Option<NaiveDate>,
    },

    /// Display all patients
    List,

    /// Update an existing patient by id
    Update {
        /// Id of the patient to update
        id: String,

        /// New name
        name: String,

        /// New age in years
        age: u32,

        /// New gender
        gender: String,

        /// New disease
        disease: String,

        /// New admission date (YYYY-MM-DD); keeps the stored date if omitted
        #[arg(long)]
        admit_date: Option<NaiveDate>,
    },

    /// Delete a patient by id
    Delete {
        /// Id of the patient to delete
        id: String,
    },

    /// Find a patient by id
    Find {
        /// Id of the patient to find
        id: String,
    },

    /// Search a patient by exact name
    SearchName {
        /// Name to search for
        name: String,
    },

    /// Search a patient by exact disease
    SearchDisease {
        /// Disease to search for
        disease: String,
    },

    /// Show collection statistics
    Stats,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,medrec=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder().data_file(&args.data_file).build();
    let registry = PatientRegistry::new(config);

    match run(&registry, args.command) {
        Ok(()) => {}
        Err(e @ (MedRecError::Validation(_) | MedRecError::PatientNotFound(_))) => {
            // Recoverable outcomes: report and let the operator retry
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("storage failure: {}", e);
            std::process::exit(1);
        }
    }
}

/// Execute one command against the registry
fn run(registry: &PatientRegistry, command: Commands) -> medrec::Result<()> {
    match command {
        Commands::Add {
            id,
            name,
            age,
            gender,
            disease,
            admit_date,
        } => {
            if registry.exists(&id)? {
                println!("Patient ID already exists. Enter a unique ID");
                return Ok(());
            }

            let admit_date = admit_date.unwrap_or_else(|| Local::now().date_naive());
            let record = PatientRecord::new(id, name, age, gender, disease, admit_date)?;
            registry.add(&record)?;
            println!("Patient {} has been added successfully", record.name);
        }

        Commands::List => {
            let records = registry.list_all()?;
            if records.is_empty() {
                println!("No patients found");
            } else {
                for record in &records {
                    println!("{}", record);
                    println!("{}", "-".repeat(27));
                }
            }
        }

        Commands::Update {
            id,
            name,
            age,
            gender,
            disease,
            admit_date,
        } => {
            let existing = match registry.find_by_id(&id)? {
                Some(record) => record,
                None => {
                    println!("Patient not found");
                    return Ok(());
                }
            };

            // The admit date is never recomputed on update: reuse the
            // stored date unless the operator supplies a new one
            let admit_date = admit_date.unwrap_or(existing.admit_date);
            let record = PatientRecord::new(id.clone(), name, age, gender, disease, admit_date)?;
            registry.update(&id, record)?;
            println!("Patient with ID: {} has been updated", id);
        }

        Commands::Delete { id } => match registry.delete(&id) {
            Ok(()) => println!("Patient with ID '{}' has been deleted", id),
            Err(MedRecError::PatientNotFound(_)) => println!("Patient not found with that ID"),
            Err(e) => return Err(e),
        },

        Commands::Find { id } => match registry.find_by_id(&id)? {
            Some(record) => println!("{}", record),
            None => println!("Patient not found"),
        },

        Commands::SearchName { name } => match registry.find_by_name(&name)? {
            Some(record) => println!("{}", record),
            None => println!("Patient not found with that name"),
        },

        Commands::SearchDisease { disease } => match registry.find_by_disease(&disease)? {
            Some(record) => println!("{}", record),
            None => println!("Patient not found with that disease"),
        },

        Commands::Stats => {
            let stats = registry.statistics()?;
            println!("Hospital Statistics");
            println!("{}", "-".repeat(30));
            println!("{}", stats);
        }
    }

    Ok(())
}
