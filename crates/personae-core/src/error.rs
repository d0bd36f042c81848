use thiserror::Error;

/// Core error type shared across Personae crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested record count is outside the supported range.
    #[error("invalid count {total}: expected 1..={max}")]
    InvalidCount { total: i64, max: usize },
    /// A frequency table cannot be sampled from.
    #[error("invalid table {name}: {reason}")]
    InvalidTable { name: String, reason: String },
    /// A cohort constant describes an impossible date range.
    #[error("invalid cohort {0}")]
    InvalidCohort(String),
}

/// Convenience alias for results returned by Personae crates.
pub type Result<T> = std::result::Result<T, Error>;
