use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::Rng;

use personae_core::AgeCohort;

use crate::errors::GenerationError;

/// Uniform birth dates inside a cohort's year range.
#[derive(Debug, Clone, Copy)]
pub struct BirthdateGenerator {
    max_attempts: u32,
}

impl Default for BirthdateGenerator {
    fn default() -> Self {
        Self { max_attempts: 64 }
    }
}

impl BirthdateGenerator {
    /// `max_attempts` bounds the draws per requested date.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// One uniformly random date, no uniqueness.
    pub fn draw(&self, cohort: &AgeCohort, rng: &mut impl Rng) -> Result<NaiveDate, GenerationError> {
        let (first, last) = cohort.birth_range()?;
        let span = (last - first).num_days();
        Ok(first + Duration::days(rng.random_range(0..=span)))
    }

    /// `count` pairwise-distinct dates, resampling on collision.
    pub fn generate(
        &self,
        cohort: &AgeCohort,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<NaiveDate>, GenerationError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let (first, last) = cohort.birth_range()?;
        let span = (last - first).num_days();
        let available = span as usize + 1;
        if count > available {
            return Err(GenerationError::BirthdateSpaceExhaustion {
                cohort: cohort.code,
                requested: count,
                available,
            });
        }

        let budget = (count as u64).saturating_mul(self.max_attempts as u64);
        let mut seen = HashSet::with_capacity(count);
        let mut dates = Vec::with_capacity(count);
        let mut draws = 0_u64;

        while dates.len() < count {
            if draws >= budget {
                return Err(GenerationError::SamplingExhaustion {
                    what: "birth dates",
                    requested: count,
                    available: dates.len(),
                });
            }
            draws += 1;
            let date = first + Duration::days(rng.random_range(0..=span));
            if seen.insert(date) {
                dates.push(date);
            }
        }

        Ok(dates)
    }
}
