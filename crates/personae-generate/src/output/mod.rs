//! Export adapters for a generated [`Dataset`].
//!
//! The generator never assigns identifiers; [`rows`] numbers the records
//! from 1 in dataset order and every writer works from those rows.

pub mod csv;
pub mod json;
pub mod sql;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use personae_core::Dataset;

use crate::errors::GenerationError;

/// File formats a dataset can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Sql,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [Self::Csv, Self::Sql, Self::Json];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Sql => "sql",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown output format '{value}'"))
    }
}

/// One exported row: the person plus whichever column groups were generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<'a> {
    pub id: usize,
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub patronymic: &'a str,
    pub sex: &'static str,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<&'a str>,
}

/// Join the column sets positionally and number rows from 1.
pub fn rows(dataset: &Dataset) -> Vec<Row<'_>> {
    dataset
        .persons
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let contact = dataset
                .contacts
                .as_ref()
                .and_then(|contacts| contacts.get(index));
            let location = dataset
                .locations
                .as_ref()
                .and_then(|locations| locations.get(index));
            Row {
                id: index + 1,
                last_name: &person.last_name,
                first_name: &person.first_name,
                patronymic: &person.patronymic,
                sex: person.sex.label(),
                birth_date: person.birth_date_iso(),
                phone: contact.map(|contact| contact.phone.as_str()),
                email: contact.map(|contact| contact.email.as_str()),
                region: location.map(|location| location.region.as_str()),
                locality: location.map(|location| location.locality.as_str()),
            }
        })
        .collect()
}

/// Write `dataset` to `<dir>/<stem>.<ext>` and return the file path.
pub fn write_dataset(
    dir: &Path,
    stem: &str,
    format: OutputFormat,
    dataset: &Dataset,
) -> Result<PathBuf, GenerationError> {
    if !dataset.is_aligned() {
        return Err(GenerationError::Misaligned {
            persons: dataset.len(),
        });
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}.{}", format.extension()));
    let bytes = match format {
        OutputFormat::Csv => csv::write_dataset_csv(&path, dataset)?,
        OutputFormat::Sql => sql::write_dataset_sql(&path, dataset)?,
        OutputFormat::Json => json::write_dataset_json(&path, dataset)?,
    };
    info!(path = %path.display(), format = %format, rows = dataset.len(), bytes, "dataset written");
    Ok(path)
}
