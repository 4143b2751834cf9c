//! Statistics Aggregator
//!
//! Summary metrics over a snapshot of the patient collection.
//!
//! ## Responsibilities
//! - Total patient count
//! - Gender breakdown (literal lowercase "male"/"female" buckets only)
//! - Most common disease, counted case-insensitively
//!
//! The aggregator never reloads: it operates on whatever snapshot the
//! caller passes in, typically the just-reloaded full collection.
//!
//! Gender matching is exact against the lowercase literals, so "Male" or
//! "Other" land in neither bucket, while disease counting lowercases
//! every value first. Lookups elsewhere in the registry stay fully
//! case-sensitive; the mismatch is long-standing observed behavior.

use std::fmt;

use crate::record::PatientRecord;

/// Summary metrics over one collection snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Total number of records in the snapshot
    pub total: usize,

    /// Records whose gender is exactly "male"
    pub male: usize,

    /// Records whose gender is exactly "female"
    pub female: usize,

    /// The single most frequent disease, or `None` for an empty snapshot
    pub most_common_disease: Option<DiseaseCount>,
}

/// A disease and its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseCount {
    /// Disease name, title-cased for display
    pub disease: String,

    /// Number of records carrying the disease
    pub cases: usize,
}

impl Statistics {
    /// Compute statistics over the given snapshot
    pub fn from_records(records: &[PatientRecord]) -> Self {
        let total = records.len();

        let male = records.iter().filter(|r| r.gender == "male").count();
        let female = records.iter().filter(|r| r.gender == "female").count();

        Self {
            total,
            male,
            female,
            most_common_disease: most_common_disease(records),
        }
    }
}

/// Find the most frequent disease, counted case-insensitively
///
/// Ties are broken by first-encountered order; the winner is reported
/// title-cased.
fn most_common_disease(records: &[PatientRecord]) -> Option<DiseaseCount> {
    // Counted in a Vec to keep first-encountered order for tie-breaking
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let disease = record.disease.to_lowercase();
        match counts.iter_mut().find(|(d, _)| *d == disease) {
            Some((_, n)) => *n += 1,
            None => counts.push((disease, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (disease, cases) in counts {
        // Strictly greater, so the first of equal maxima wins
        let better = match &best {
            None => true,
            Some((_, best_cases)) => cases > *best_cases,
        };
        if better {
            best = Some((disease, cases));
        }
    }

    best.map(|(disease, cases)| DiseaseCount {
        disease: title_case(&disease),
        cases,
    })
}

/// Capitalize the first letter of each whitespace-separated word
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20}: {}", "Total Patients", self.total)?;
        writeln!(f, "{:<20}: {}", "Male Patients", self.male)?;
        writeln!(f, "{:<20}: {}", "Female Patients", self.female)?;
        match &self.most_common_disease {
            Some(top) => write!(
                f,
                "{:<20}: {} ({} cases)",
                "Most Common Disease", top.disease, top.cases
            ),
            None => write!(f, "{:<20}: N/A", "Most Common Disease"),
        }
    }
}
