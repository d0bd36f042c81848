use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Age band code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohortCode {
    Junior,
    Middle,
    Senior,
}

impl CohortCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Middle => "middle",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for CohortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed demographic description of one age band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeCohort {
    pub code: CohortCode,
    /// Share of the whole population; the three cohorts sum to 1.
    pub population_share: f64,
    pub birth_year_start: i32,
    /// Inclusive.
    pub birth_year_end: i32,
    /// Share of females inside the cohort.
    pub female_share: f64,
}

pub const JUNIOR: AgeCohort = AgeCohort {
    code: CohortCode::Junior,
    population_share: 0.27,
    birth_year_start: 1990,
    birth_year_end: 2004,
    female_share: 0.49,
};

pub const MIDDLE: AgeCohort = AgeCohort {
    code: CohortCode::Middle,
    population_share: 0.42,
    birth_year_start: 1973,
    birth_year_end: 1989,
    female_share: 0.51,
};

pub const SENIOR: AgeCohort = AgeCohort {
    code: CohortCode::Senior,
    population_share: 0.31,
    birth_year_start: 1958,
    birth_year_end: 1972,
    female_share: 0.55,
};

impl AgeCohort {
    /// All cohorts in generation order.
    pub const ALL: [AgeCohort; 3] = [JUNIOR, MIDDLE, SENIOR];

    pub fn by_code(code: CohortCode) -> AgeCohort {
        match code {
            CohortCode::Junior => JUNIOR,
            CohortCode::Middle => MIDDLE,
            CohortCode::Senior => SENIOR,
        }
    }

    /// First and last possible birth dates (both inclusive).
    pub fn birth_range(&self) -> Result<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(self.birth_year_start, 1, 1);
        let last = NaiveDate::from_ymd_opt(self.birth_year_end, 12, 31);
        match (first, last) {
            (Some(first), Some(last)) if first <= last => Ok((first, last)),
            _ => Err(Error::InvalidCohort(format!(
                "{}: {}..={}",
                self.code, self.birth_year_start, self.birth_year_end
            ))),
        }
    }

    /// Number of distinct calendar days a birth date can take.
    pub fn span_days(&self) -> Result<usize> {
        let (first, last) = self.birth_range()?;
        Ok((last - first).num_days() as usize + 1)
    }
}

/// Biological sex with the display label used in exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "муж.",
            Self::Female => "жен.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
