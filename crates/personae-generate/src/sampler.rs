use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use personae_core::{LocationEntry, LocationTable, NameTable};

use crate::errors::GenerationError;

/// Draws names with replacement, each with probability proportional to its
/// weight.
#[derive(Debug, Clone)]
pub struct WeightedSampler<'a> {
    table: &'a NameTable,
    index: WeightedIndex<f64>,
}

impl<'a> WeightedSampler<'a> {
    pub fn new(table: &'a NameTable) -> Result<Self, GenerationError> {
        let index = weighted_index(table.name(), table.entries().iter().map(|(_, w)| *w))?;
        Ok(Self { table, index })
    }

    pub fn draw(&self, rng: &mut impl Rng) -> &'a str {
        let (name, _) = &self.table.entries()[self.index.sample(rng)];
        name.as_str()
    }

    pub fn sample(&self, k: usize, rng: &mut impl Rng) -> Vec<String> {
        (0..k).map(|_| self.draw(rng).to_string()).collect()
    }
}

/// One-shot convenience over [`WeightedSampler`].
pub fn sample(table: &NameTable, k: usize, rng: &mut impl Rng) -> Result<Vec<String>, GenerationError> {
    Ok(WeightedSampler::new(table)?.sample(k, rng))
}

/// Population-weighted sampler over localities.
#[derive(Debug, Clone)]
pub struct LocationSampler<'a> {
    table: &'a LocationTable,
    index: WeightedIndex<f64>,
}

impl<'a> LocationSampler<'a> {
    pub fn new(table: &'a LocationTable) -> Result<Self, GenerationError> {
        let index = weighted_index(
            "localities",
            table.entries().iter().map(|entry| entry.population),
        )?;
        Ok(Self { table, index })
    }

    pub fn draw(&self, rng: &mut impl Rng) -> &'a LocationEntry {
        &self.table.entries()[self.index.sample(rng)]
    }
}

fn weighted_index(
    name: &str,
    weights: impl Iterator<Item = f64>,
) -> Result<WeightedIndex<f64>, GenerationError> {
    WeightedIndex::new(weights).map_err(|err| {
        GenerationError::Core(personae_core::Error::InvalidTable {
            name: name.to_string(),
            reason: err.to_string(),
        })
    })
}
