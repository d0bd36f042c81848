use serde::{Deserialize, Serialize};

use personae_core::{CohortCode, DataGroups, Sex};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Column groups produced on top of the base person data.
    pub groups: DataGroups,
    /// Master seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    /// Fail instead of layering when a batch outgrows its birth-date range.
    pub strict: bool,
    /// Draw budget per requested birth date.
    pub max_attempts_birthdate: u32,
    /// Login candidates tried per email before giving up.
    pub max_attempts_email: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            groups: DataGroups::Base,
            seed: None,
            strict: false,
            max_attempts_birthdate: 64,
            max_attempts_email: 1000,
        }
    }
}

/// Summary of one (cohort, sex) batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub cohort: CohortCode,
    pub sex: Sex,
    pub count: usize,
    /// Birth dates were drawn in several distinct-date layers.
    pub layered: bool,
}

/// Report for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub total: usize,
    pub groups: DataGroups,
    pub batches: Vec<BatchReport>,
    pub phones_generated: usize,
    pub emails_generated: usize,
    /// Emails that needed more than their first login pattern.
    pub email_fallbacks: u64,
    pub locations_generated: usize,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(seed: u64, total: usize, groups: DataGroups) -> Self {
        Self {
            seed,
            total,
            groups,
            ..Self::default()
        }
    }

    pub fn record_batch(&mut self, batch: BatchReport) {
        self.batches.push(batch);
    }

    pub fn persons_generated(&self) -> usize {
        self.batches.iter().map(|batch| batch.count).sum()
    }
}
