//! Record Store
//!
//! Durable persistence for the full patient collection, one CSV file.
//!
//! ## Responsibilities
//! - Read the entire persisted collection into memory
//! - Rewrite the entire collection (update/delete paths)
//! - Append a single record without touching existing rows (add path)
//!
//! ## File Format
//! ```text
//! patient_id,name,age,gender,disease,admit_date     <- fixed header
//! P001,Asha Rao,34,female,flu,2024-03-11            <- one row per record
//! ...
//! ```
//! Standard CSV quoting applies to embedded delimiters. There is no
//! schema versioning.
//!
//! ## Durability
//! `save_all` truncates the file before writing the new contents. A crash
//! mid-write can leave the collection truncated; callers accept this
//! limitation in exchange for the simple rewrite model. There is no
//! locking, so two simultaneous writers can race on the truncate-then-write
//! sequence.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::PatientRecord;

/// Fixed header row of the persisted collection
const HEADER: [&str; 6] = ["patient_id", "name", "age", "gender", "disease", "admit_date"];

/// Persists the patient collection to a single CSV file
///
/// The store is the single source of truth: callers are expected to
/// reload via `load_all` before every operation rather than caching
/// records across calls.
pub struct RecordStore {
    /// Path of the persisted collection
    data_file: PathBuf,
}

impl RecordStore {
    /// Create a store over the given data file
    ///
    /// The file is not touched until the first read or write.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Read the entire persisted collection, in stored order
    ///
    /// Returns:
    /// - `Ok(records)` — the full collection; empty if the file does not exist
    /// - `Err(_)` — an underlying I/O or CSV failure
    ///
    /// Rows that fail to decode (wrong field count, unparsable age or
    /// date) are skipped with a warning rather than failing the load.
    pub fn load_all(&self) -> Result<Vec<PatientRecord>> {
        // Missing file reads as an empty collection, not an error
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.data_file)?;

        let mut records = Vec::new();
        for row in reader.deserialize::<PatientRecord>() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "skipping malformed row in {}: {}",
                        self.data_file.display(),
                        e
                    );
                }
            }
        }

        Ok(records)
    }

    /// Overwrite the persisted collection with exactly the given records
    ///
    /// The header row is always written, even for an empty collection.
    /// The write is not atomic: existing content is destroyed first.
    pub fn save_all(&self, records: &[PatientRecord]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.data_file)?;

        writer.write_record(&HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Append one record to the end of the persisted collection
    ///
    /// Existing rows are neither read nor rewritten, so appends stay O(1)
    /// while update/delete pay the full O(n) rewrite. The header row is
    /// written first iff the file is missing or empty.
    pub fn append_one(&self, record: &PatientRecord) -> Result<()> {
        let write_header = match fs::metadata(&self.data_file) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => return Err(e.into()),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.data_file)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer.write_record(&HEADER)?;
        }
        writer.serialize(record)?;
        writer.flush()?;

        Ok(())
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
