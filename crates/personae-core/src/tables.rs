use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which part of a full name a table provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Last,
    First,
    Patronymic,
}

impl NameKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Last => "last_names",
            Self::First => "first_names",
            Self::Patronymic => "patronymics",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names with their relative frequency weights.
///
/// A table is never empty and every weight is finite and positive, so any
/// constructed table can be sampled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameTable {
    name: String,
    entries: Vec<(String, f64)>,
}

impl NameTable {
    pub fn new(name: impl Into<String>, entries: Vec<(String, f64)>) -> Result<Self> {
        let name = name.into();
        if entries.is_empty() {
            return Err(Error::InvalidTable {
                name,
                reason: "table is empty".to_string(),
            });
        }
        if let Some((entry, weight)) = entries
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight <= 0.0)
        {
            return Err(Error::InvalidTable {
                reason: format!("weight {weight} for '{entry}' must be positive"),
                name,
            });
        }
        Ok(Self { name, entries })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn weight(&self, value: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == value)
            .map(|(_, weight)| *weight)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.weight(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One populated locality and the region it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub locality: String,
    pub region: String,
    /// Population weight (thousands of inhabitants in the bundled table).
    pub population: f64,
}

/// Localities weighted by population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTable {
    entries: Vec<LocationEntry>,
}

impl LocationTable {
    pub fn new(entries: Vec<LocationEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidTable {
                name: "localities".to_string(),
                reason: "table is empty".to_string(),
            });
        }
        if let Some(entry) = entries
            .iter()
            .find(|entry| !entry.population.is_finite() || entry.population <= 0.0)
        {
            return Err(Error::InvalidTable {
                name: "localities".to_string(),
                reason: format!(
                    "population {} for '{}' must be positive",
                    entry.population, entry.locality
                ),
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn region_of(&self, locality: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.locality == locality)
            .map(|entry| entry.region.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
