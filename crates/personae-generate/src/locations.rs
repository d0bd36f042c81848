use rand::Rng;
use tracing::debug;

use personae_core::{LocationRecord, LocationTable};

use crate::errors::GenerationError;
use crate::sampler::LocationSampler;

/// Population-weighted (region, locality) pairs, drawn with replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationGenerator;

impl LocationGenerator {
    pub fn generate(
        &self,
        count: usize,
        table: &LocationTable,
        rng: &mut impl Rng,
    ) -> Result<Vec<LocationRecord>, GenerationError> {
        let sampler = LocationSampler::new(table)?;
        let locations: Vec<LocationRecord> = (0..count)
            .map(|_| {
                let entry = sampler.draw(rng);
                LocationRecord {
                    region: entry.region.clone(),
                    locality: entry.locality.clone(),
                }
            })
            .collect();
        debug!(count = locations.len(), "locations generated");
        Ok(locations)
    }
}

/// Region and locality columns, aligned by index.
pub fn split(locations: &[LocationRecord]) -> (Vec<String>, Vec<String>) {
    locations
        .iter()
        .map(|record| (record.region.clone(), record.locality.clone()))
        .unzip()
}
