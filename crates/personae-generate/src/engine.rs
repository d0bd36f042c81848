use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use personae_core::{Dataset, MAX_TOTAL, validate_total};

use crate::assets::Assets;
use crate::contacts::ContactGenerator;
use crate::errors::GenerationError;
use crate::locations::LocationGenerator;
use crate::model::{GenerateOptions, GenerationReport};
use crate::persons::{PersonAssembler, generate_base};

const PERSONS_STAGE: &str = "persons";
const CONTACTS_STAGE: &str = "contacts";
const LOCATIONS_STAGE: &str = "locations";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating a dataset of `total` persons.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn run(&self, total: usize, assets: &Assets) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let total = validate_total(i64::try_from(total).unwrap_or(i64::MAX), MAX_TOTAL)?;
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let groups = self.options.groups;
        let mut report = GenerationReport::new(seed, total, groups);

        info!(
            total,
            seed,
            groups = groups.as_str(),
            strict = self.options.strict,
            "generation started"
        );

        let assembler =
            PersonAssembler::new(self.options.max_attempts_birthdate, self.options.strict);
        let mut rng = stage_rng(seed, PERSONS_STAGE);
        let (persons, batches) = generate_base(total, assets, &assembler, &mut rng)?;
        for batch in batches {
            report.record_batch(batch);
        }

        let contacts = if groups.includes_contacts() {
            let generator = ContactGenerator::new(self.options.max_attempts_email);
            let mut rng = stage_rng(seed, CONTACTS_STAGE);
            let batch = generator.generate(&persons, &mut rng)?;
            report.phones_generated = batch.contacts.len();
            report.emails_generated = batch.contacts.len();
            report.email_fallbacks = batch.email_fallbacks;
            if batch.email_fallbacks > 0 {
                warn!(
                    fallbacks = batch.email_fallbacks,
                    "emails collided and used a later login pattern"
                );
            }
            Some(batch.contacts)
        } else {
            None
        };

        let locations = if groups.includes_locations() {
            let mut rng = stage_rng(seed, LOCATIONS_STAGE);
            let locations = LocationGenerator.generate(total, assets.localities(), &mut rng)?;
            report.locations_generated = locations.len();
            Some(locations)
        } else {
            None
        };

        let dataset = Dataset {
            persons,
            contacts,
            locations,
        };
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            total = dataset.len(),
            seed,
            phones = report.phones_generated,
            emails = report.emails_generated,
            locations = report.locations_generated,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { dataset, report })
    }
}

fn stage_rng(seed: u64, stage: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed, stage))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
