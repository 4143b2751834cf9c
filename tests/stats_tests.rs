//! Tests for the statistics aggregator
//!
//! These tests verify:
//! - Total count and gender breakdown over a snapshot
//! - Gender buckets match only the literal lowercase "male"/"female"
//! - Disease counting is case-insensitive with first-encountered tie-break
//! - Empty collections report no most-common disease

use medrec::record::PatientRecord;
use medrec::stats::Statistics;

// =============================================================================
// Helper Functions
// =============================================================================

fn patient(id: &str, gender: &str, disease: &str) -> PatientRecord {
    PatientRecord::new(id, "Test Patient", 40, gender, disease, "2024-03-11".parse().unwrap())
        .unwrap()
}

// =============================================================================
// Aggregate Tests
// =============================================================================

#[test]
fn test_statistics_scenario() {
    let records = vec![
        patient("P001", "male", "Flu"),
        patient("P002", "female", "flu"),
        patient("P003", "male", "Cold"),
    ];

    let stats = Statistics::from_records(&records);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.male, 2);
    assert_eq!(stats.female, 1);

    let top = stats.most_common_disease.unwrap();
    assert_eq!(top.disease, "Flu");
    assert_eq!(top.cases, 2);
}

#[test]
fn test_empty_collection() {
    let stats = Statistics::from_records(&[]);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.male, 0);
    assert_eq!(stats.female, 0);
    assert_eq!(stats.most_common_disease, None);
}

// =============================================================================
// Gender Bucket Tests
// =============================================================================

#[test]
fn test_gender_buckets_match_lowercase_literals_only() {
    let records = vec![
        patient("P001", "Male", "flu"),
        patient("P002", "FEMALE", "flu"),
        patient("P003", "other", "flu"),
        patient("P004", "male", "flu"),
    ];

    let stats = Statistics::from_records(&records);

    // "Male", "FEMALE" and "other" land in neither bucket
    assert_eq!(stats.total, 4);
    assert_eq!(stats.male, 1);
    assert_eq!(stats.female, 0);
}

// =============================================================================
// Disease Counting Tests
// =============================================================================

#[test]
fn test_disease_counting_is_case_insensitive() {
    let records = vec![
        patient("P001", "male", "Flu"),
        patient("P002", "female", "flu"),
        patient("P003", "male", "FLU"),
    ];

    let top = Statistics::from_records(&records).most_common_disease.unwrap();
    assert_eq!(top.disease, "Flu");
    assert_eq!(top.cases, 3);
}

#[test]
fn test_tie_broken_by_first_encountered_disease() {
    let records = vec![
        patient("P001", "male", "cold"),
        patient("P002", "female", "flu"),
        patient("P003", "male", "flu"),
        patient("P004", "female", "cold"),
    ];

    // cold and flu both occur twice; cold was seen first
    let top = Statistics::from_records(&records).most_common_disease.unwrap();
    assert_eq!(top.disease, "Cold");
    assert_eq!(top.cases, 2);
}

#[test]
fn test_most_common_disease_is_title_cased() {
    let records = vec![
        patient("P001", "male", "common cold"),
        patient("P002", "female", "COMMON COLD"),
    ];

    let top = Statistics::from_records(&records).most_common_disease.unwrap();
    assert_eq!(top.disease, "Common Cold");
    assert_eq!(top.cases, 2);
}

#[test]
fn test_single_record_is_most_common() {
    let records = vec![patient("P001", "female", "migraine")];

    let top = Statistics::from_records(&records).most_common_disease.unwrap();
    assert_eq!(top.disease, "Migraine");
    assert_eq!(top.cases, 1);
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_summary() {
    let records = vec![
        patient("P001", "male", "flu"),
        patient("P002", "female", "flu"),
    ];

    let rendered = Statistics::from_records(&records).to_string();

    assert!(rendered.contains("Total Patients"));
    assert!(rendered.contains(": 2"));
    assert!(rendered.contains("Flu (2 cases)"));
}

#[test]
fn test_display_empty_reports_not_available() {
    let rendered = Statistics::from_records(&[]).to_string();

    assert!(rendered.contains("N/A"));
}
