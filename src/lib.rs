//! # medrec
//!
//! A single-operator patient record manager with:
//! - Flat-file CSV persistence (one row per patient, fixed header)
//! - Reload-before-act consistency (the file is the source of truth)
//! - Linear-scan lookup by id, name, and disease
//! - Aggregate statistics over the full collection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI (caller)                            │
//! │              (well-formed commands, one-shot)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Patient Registry                            │
//! │        (reload → scan/mutate → persist, per call)            │
//! └─────────┬───────────────────────────────────┬───────────────┘
//!           │                                   │
//!           ▼                                   ▼
//!    ┌─────────────┐                     ┌─────────────┐
//!    │ Record Store│                     │ Statistics  │
//!    │ (CSV file)  │                     │ (snapshot)  │
//!    └─────────────┘                     └─────────────┘
//! ```
//!
//! Every registry operation re-reads the whole collection from the store
//! before acting, so each call observes the latest on-disk state at the
//! cost of a full scan. Adds are O(1) appends; updates and deletes
//! rewrite the entire file.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod registry;
pub mod stats;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MedRecError, Result};
pub use config::Config;
pub use record::PatientRecord;
pub use registry::PatientRegistry;
pub use stats::Statistics;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of medrec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
