use crate::error::{Error, Result};

/// Largest total a single run supports.
pub const MAX_TOTAL: usize = 100_000;

/// Boundary check for a requested record count.
pub fn validate_total(total: i64, max: usize) -> Result<usize> {
    match usize::try_from(total) {
        Ok(value) if value >= 1 && value <= max => Ok(value),
        _ => Err(Error::InvalidCount { total, max }),
    }
}
