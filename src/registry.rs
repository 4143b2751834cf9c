//! Patient Registry
//!
//! The collection-level operations layer over the Record Store.
//!
//! ## Responsibilities
//! - Reload the authoritative collection before every operation
//! - Linear-scan lookups by id, name, and disease (first match wins)
//! - In-place update and first-match delete with full rewrite
//! - Hand a fresh snapshot to the statistics aggregator
//!
//! ## Consistency Model
//! No state is cached between calls: every operation starts with
//! `RecordStore::load_all`, so each call observes the latest on-disk
//! collection. This substitutes for transactions at the cost of a full
//! scan per call. Access is single-threaded; callers running multiple
//! threads or processes must serialize externally.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{MedRecError, Result};
use crate::record::PatientRecord;
use crate::stats::Statistics;
use crate::store::RecordStore;

/// The patient collection manager
pub struct PatientRegistry {
    /// Registry configuration
    config: Config,

    /// Persistent store, the single source of truth
    store: RecordStore,
}

impl PatientRegistry {
    /// Create a registry with the given config
    ///
    /// The data file is not touched until the first operation.
    pub fn new(config: Config) -> Self {
        let store = RecordStore::new(config.data_file.clone());
        Self { config, store }
    }

    /// Create a registry over a data file path (convenience method)
    ///
    /// Uses default config with the specified data file.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Config::builder().data_file(path).build())
    }

    /// Add a new record to the collection
    ///
    /// Appends without rewriting existing rows. The caller is responsible
    /// for having checked id uniqueness beforehand via [`exists`]; the
    /// store itself never enforces it.
    ///
    /// [`exists`]: PatientRegistry::exists
    pub fn add(&self, record: &PatientRecord) -> Result<()> {
        self.store.append_one(record)?;

        tracing::info!("added patient {} ({})", record.patient_id, record.name);
        Ok(())
    }

    /// Check whether any record carries the given patient id
    ///
    /// Reloads the collection first, so the answer reflects the current
    /// on-disk state. Used by callers before constructing a new record.
    pub fn exists(&self, patient_id: &str) -> Result<bool> {
        let records = self.store.load_all()?;
        Ok(records.iter().any(|r| r.patient_id == patient_id))
    }

    /// Replace the first record with the given id
    ///
    /// The replacement occupies the matched record's slot — position in
    /// the collection is preserved, not moved to the end. Later
    /// duplicates of the same id are untouched.
    ///
    /// Returns:
    /// - `Ok(())` — record replaced and persisted
    /// - `Err(PatientNotFound)` — no match; collection left unchanged
    pub fn update(&self, patient_id: &str, new_record: PatientRecord) -> Result<()> {
        // Step 1: Reload the authoritative collection
        let mut records = self.store.load_all()?;

        // Step 2: Find the first matching slot
        let slot = records
            .iter()
            .position(|r| r.patient_id == patient_id)
            .ok_or_else(|| MedRecError::PatientNotFound(patient_id.to_string()))?;

        // Step 3: Replace in place and persist the full collection
        records[slot] = new_record;
        self.store.save_all(&records)?;

        tracing::info!("updated patient {}", patient_id);
        Ok(())
    }

    /// Remove the first record with the given id
    ///
    /// Only the first match is removed; later duplicates survive.
    ///
    /// Returns:
    /// - `Ok(())` — record removed and persisted
    /// - `Err(PatientNotFound)` — no match; collection left unchanged
    pub fn delete(&self, patient_id: &str) -> Result<()> {
        // Step 1: Reload the authoritative collection
        let mut records = self.store.load_all()?;

        // Step 2: Find the first matching slot
        let slot = records
            .iter()
            .position(|r| r.patient_id == patient_id)
            .ok_or_else(|| MedRecError::PatientNotFound(patient_id.to_string()))?;

        // Step 3: Remove and persist the full collection
        records.remove(slot);
        self.store.save_all(&records)?;

        tracing::info!("deleted patient {}", patient_id);
        Ok(())
    }

    /// Find the first record with the given id
    pub fn find_by_id(&self, patient_id: &str) -> Result<Option<PatientRecord>> {
        let records = self.store.load_all()?;
        Ok(records.into_iter().find(|r| r.patient_id == patient_id))
    }

    /// Find the first record with the given name (exact, case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<PatientRecord>> {
        let records = self.store.load_all()?;
        Ok(records.into_iter().find(|r| r.name == name))
    }

    /// Find the first record with the given disease (exact, case-sensitive)
    pub fn find_by_disease(&self, disease: &str) -> Result<Option<PatientRecord>> {
        let records = self.store.load_all()?;
        Ok(records.into_iter().find(|r| r.disease == disease))
    }

    /// Return the full collection in stored order
    ///
    /// An empty collection is `Ok(vec![])`, distinct from an error.
    pub fn list_all(&self) -> Result<Vec<PatientRecord>> {
        self.store.load_all()
    }

    /// Compute summary statistics over a fresh snapshot of the collection
    pub fn statistics(&self) -> Result<Statistics> {
        let records = self.store.load_all()?;
        Ok(Statistics::from_records(&records))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        self.store.data_file()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
