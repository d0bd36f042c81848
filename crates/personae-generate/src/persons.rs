use std::collections::HashSet;

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use personae_core::{AgeCohort, NameKind, PersonRecord, Sex};

use crate::assets::Assets;
use crate::birthdate::BirthdateGenerator;
use crate::demography::apportion;
use crate::errors::GenerationError;
use crate::model::BatchReport;
use crate::sampler::WeightedSampler;

/// Pre-sampled names for one batch, one entry per record.
#[derive(Debug, Clone, Default)]
pub struct NameColumns {
    pub last_names: Vec<String>,
    pub first_names: Vec<String>,
    pub patronymics: Vec<String>,
}

impl NameColumns {
    /// Sample `count` names of every kind for a (cohort, sex) batch.
    pub fn sample(
        assets: &Assets,
        cohort: &AgeCohort,
        sex: Sex,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GenerationError> {
        let mut column = |kind: NameKind| -> Result<Vec<String>, GenerationError> {
            let table = assets.names(kind, sex, cohort.code)?;
            Ok(WeightedSampler::new(table)?.sample(count, rng))
        };
        Ok(Self {
            last_names: column(NameKind::Last)?,
            first_names: column(NameKind::First)?,
            patronymics: column(NameKind::Patronymic)?,
        })
    }

    fn shortest(&self) -> usize {
        self.last_names
            .len()
            .min(self.first_names.len())
            .min(self.patronymics.len())
    }
}

/// Persons of one (cohort, sex) batch.
#[derive(Debug, Clone)]
pub struct Batch {
    pub persons: Vec<PersonRecord>,
    /// More records than distinct days: dates are distinct per layer only.
    pub layered: bool,
}

/// Joins pre-sampled names with collision-avoided birth dates.
#[derive(Debug, Clone, Copy)]
pub struct PersonAssembler {
    birthdates: BirthdateGenerator,
    max_attempts: u32,
    strict: bool,
}

impl Default for PersonAssembler {
    fn default() -> Self {
        Self::new(64, false)
    }
}

impl PersonAssembler {
    pub fn new(max_attempts: u32, strict: bool) -> Self {
        Self {
            birthdates: BirthdateGenerator::new(max_attempts),
            max_attempts: max_attempts.max(1),
            strict,
        }
    }

    /// Build `count` persons, consuming one name of each kind per record.
    pub fn assemble(
        &self,
        cohort: &AgeCohort,
        sex: Sex,
        count: usize,
        names: NameColumns,
        rng: &mut impl Rng,
    ) -> Result<Batch, GenerationError> {
        let available = names.shortest();
        if available < count {
            return Err(GenerationError::SamplingExhaustion {
                what: "names",
                requested: count,
                available,
            });
        }

        let (dates, layered) = self.birthdates(cohort, count, rng)?;
        let mut persons: Vec<PersonRecord> = names
            .last_names
            .into_iter()
            .zip(names.first_names)
            .zip(names.patronymics)
            .zip(dates)
            .map(|(((last_name, first_name), patronymic), birth_date)| PersonRecord {
                last_name,
                first_name,
                patronymic,
                sex,
                birth_date,
            })
            .collect();

        if layered {
            self.redraw_duplicates(cohort, &mut persons, rng)?;
        }

        Ok(Batch { persons, layered })
    }

    fn birthdates(
        &self,
        cohort: &AgeCohort,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<(Vec<NaiveDate>, bool), GenerationError> {
        let available = cohort.span_days()?;
        if count <= available || self.strict {
            return Ok((self.birthdates.generate(cohort, count, rng)?, false));
        }

        let layers = count.div_ceil(available);
        warn!(
            cohort = %cohort.code,
            count,
            available,
            layers,
            "batch exceeds birth-date range, drawing distinct dates per layer"
        );
        let mut dates = Vec::with_capacity(count);
        for layer in 0..layers {
            let size = count / layers + usize::from(layer < count % layers);
            dates.extend(self.birthdates.generate(cohort, size, rng)?);
        }
        Ok((dates, true))
    }

    // Layered dates can repeat, so a full person can repeat too.
    fn redraw_duplicates(
        &self,
        cohort: &AgeCohort,
        persons: &mut [PersonRecord],
        rng: &mut impl Rng,
    ) -> Result<(), GenerationError> {
        let requested = persons.len();
        let mut seen = HashSet::with_capacity(requested);
        let mut redrawn = 0_u64;
        for person in persons.iter_mut() {
            let mut attempts = 0;
            while !seen.insert(person.clone()) {
                if attempts >= self.max_attempts {
                    return Err(GenerationError::SamplingExhaustion {
                        what: "distinct persons",
                        requested,
                        available: seen.len(),
                    });
                }
                attempts += 1;
                redrawn += 1;
                person.birth_date = self.birthdates.draw(cohort, rng)?;
            }
        }
        if redrawn > 0 {
            debug!(cohort = %cohort.code, redrawn, "redrew duplicated persons");
        }
        Ok(())
    }
}

/// The base dataset: all six batches concatenated, then shuffled once.
pub fn generate_base(
    total: usize,
    assets: &Assets,
    assembler: &PersonAssembler,
    rng: &mut impl Rng,
) -> Result<(Vec<PersonRecord>, Vec<BatchReport>), GenerationError> {
    let mut persons = Vec::with_capacity(total);
    let mut reports = Vec::with_capacity(6);

    for (cohort, sex, count) in apportion(total) {
        let names = NameColumns::sample(assets, &cohort, sex, count, rng)?;
        let batch = assembler.assemble(&cohort, sex, count, names, rng)?;
        debug!(
            cohort = %cohort.code,
            sex = sex.as_str(),
            count,
            layered = batch.layered,
            "batch assembled"
        );
        reports.push(BatchReport {
            cohort: cohort.code,
            sex,
            count,
            layered: batch.layered,
        });
        persons.extend(batch.persons);
    }

    persons.shuffle(rng);
    Ok((persons, reports))
}
