//! Patient record definitions
//!
//! Defines the single persisted entity and its validation rules.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MedRecError, Result};

/// A single patient record
///
/// Field order matches the column order of the persisted CSV file:
/// `patient_id, name, age, gender, disease, admit_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Caller-supplied identifier; uniqueness is advisory and checked
    /// at add-time only (see `PatientRegistry::exists`)
    pub patient_id: String,

    /// Patient name (non-empty)
    pub name: String,

    /// Patient age in years (strictly positive)
    pub age: u32,

    /// Free-text gender; statistics recognizes only the literal
    /// lowercase "male"/"female"
    pub gender: String,

    /// Diagnosed disease (non-empty)
    pub disease: String,

    /// Admission date, serialized as an ISO-8601 calendar date
    /// (YYYY-MM-DD); set once at creation, never recomputed on update
    pub admit_date: NaiveDate,
}

impl PatientRecord {
    /// Create a validated record
    ///
    /// Returns:
    /// - `Ok(record)` — all fields pass validation
    /// - `Err(Validation)` — an empty required field or a zero age
    ///
    /// Text fields are stored trimmed.
    pub fn new(
        patient_id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        disease: impl Into<String>,
        admit_date: NaiveDate,
    ) -> Result<Self> {
        let patient_id = non_empty("patient id", patient_id.into())?;
        let name = non_empty("name", name.into())?;
        let gender = non_empty("gender", gender.into())?;
        let disease = non_empty("disease", disease.into())?;

        if age == 0 {
            return Err(MedRecError::Validation(
                "age must be a positive number".to_string(),
            ));
        }

        Ok(Self {
            patient_id,
            name,
            age,
            gender,
            disease,
            admit_date,
        })
    }
}

/// Validate that a trimmed field is non-empty
fn non_empty(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MedRecError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15}: {}", "ID", self.patient_id)?;
        writeln!(f, "{:<15}: {}", "Name", self.name)?;
        writeln!(f, "{:<15}: {}", "Age", self.age)?;
        writeln!(f, "{:<15}: {}", "Gender", self.gender)?;
        writeln!(f, "{:<15}: {}", "Disease", self.disease)?;
        write!(f, "{:<15}: {}", "Admission Date", self.admit_date)
    }
}
