//! Core contracts for Personae.
//!
//! This crate defines the demographic constants, frequency-table types and
//! the record/dataset shapes shared by the generator and the CLI.

pub mod cohort;
pub mod error;
pub mod record;
pub mod tables;
pub mod validation;

pub use cohort::{AgeCohort, CohortCode, JUNIOR, MIDDLE, SENIOR, Sex};
pub use error::{Error, Result};
pub use record::{ContactRecord, DataGroups, Dataset, LocationRecord, PersonRecord};
pub use tables::{LocationEntry, LocationTable, NameKind, NameTable};
pub use validation::{MAX_TOTAL, validate_total};

/// Locale of the bundled frequency tables.
pub const LOCALE: &str = "ru_RU";
