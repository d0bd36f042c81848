use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use personae_core::{
    AgeCohort, CohortCode, LocationEntry, LocationTable, NameKind, NameTable, Sex,
};

use crate::errors::GenerationError;

const LOCALITIES_FILE: &str = "localities.csv";

macro_rules! embedded {
    ($($file:literal),* $(,)?) => {
        &[$(($file, include_str!(concat!("../assets/ru_RU/", $file)))),*]
    };
}

static EMBEDDED: &[(&str, &str)] = embedded![
    "last_names_male.csv",
    "last_names_female.csv",
    "first_names_junior_male.csv",
    "first_names_junior_female.csv",
    "first_names_middle_male.csv",
    "first_names_middle_female.csv",
    "first_names_senior_male.csv",
    "first_names_senior_female.csv",
    "patronymics_junior_male.csv",
    "patronymics_junior_female.csv",
    "patronymics_middle_male.csv",
    "patronymics_middle_female.csv",
    "patronymics_senior_male.csv",
    "patronymics_senior_female.csv",
    "localities.csv",
];

#[derive(Debug, Deserialize)]
struct NameRow {
    name: String,
    weight: f64,
}

#[derive(Debug, Deserialize)]
struct LocalityRow {
    locality: String,
    region: String,
    population: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TableKey {
    kind: NameKind,
    cohort: Option<CohortCode>,
    sex: Sex,
}

impl TableKey {
    fn new(kind: NameKind, sex: Sex, cohort: CohortCode) -> Self {
        let cohort = match kind {
            NameKind::Last => None,
            NameKind::First | NameKind::Patronymic => Some(cohort),
        };
        Self { kind, cohort, sex }
    }
}

/// Immutable frequency tables for one locale.
#[derive(Debug, Clone)]
pub struct Assets {
    names: BTreeMap<TableKey, NameTable>,
    localities: LocationTable,
}

impl Assets {
    /// Table for a name kind; last names are shared by all cohorts.
    pub fn names(
        &self,
        kind: NameKind,
        sex: Sex,
        cohort: CohortCode,
    ) -> Result<&NameTable, GenerationError> {
        self.names
            .get(&TableKey::new(kind, sex, cohort))
            .ok_or_else(|| {
                GenerationError::Asset(format!("no {kind} table for {cohort}/{}", sex.as_str()))
            })
    }

    pub fn localities(&self) -> &LocationTable {
        &self.localities
    }

    /// Every name table, for callers that need to inspect the alphabet.
    pub fn name_tables(&self) -> impl Iterator<Item = &NameTable> {
        self.names.values()
    }
}

/// Reads frequency tables, either embedded or from an override directory.
#[derive(Debug, Clone, Default)]
pub struct AssetsLoader {
    root: Option<PathBuf>,
}

impl AssetsLoader {
    pub fn embedded() -> Self {
        Self { root: None }
    }

    /// Files missing from `root` fall back to the embedded tables.
    pub fn from_dir(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    pub fn load(&self) -> Result<Assets, GenerationError> {
        let mut names = BTreeMap::new();
        for sex in Sex::ALL {
            for cohort in AgeCohort::ALL {
                for kind in [NameKind::Last, NameKind::First, NameKind::Patronymic] {
                    let key = TableKey::new(kind, sex, cohort.code);
                    if names.contains_key(&key) {
                        continue;
                    }
                    let file = table_file(kind, sex, cohort.code);
                    let contents = self.read_source(&file)?;
                    names.insert(key, parse_names(&file, &contents)?);
                }
            }
        }

        let contents = self.read_source(LOCALITIES_FILE)?;
        let localities = parse_localities(&contents)?;

        Ok(Assets { names, localities })
    }

    fn read_source(&self, file: &str) -> Result<String, GenerationError> {
        if let Some(root) = &self.root {
            let path = root.join(file);
            match fs::read_to_string(&path) {
                Ok(contents) => return Ok(contents),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "asset missing, using embedded table");
                }
                Err(err) => {
                    return Err(GenerationError::Asset(format!(
                        "failed to read asset {}: {}",
                        path.display(),
                        err
                    )));
                }
            }
        }
        embedded_source(file)
    }
}

/// Embedded tables, parsed once per process.
pub fn assets() -> Result<&'static Assets, GenerationError> {
    static ASSETS: OnceLock<Assets> = OnceLock::new();
    if let Some(assets) = ASSETS.get() {
        return Ok(assets);
    }
    let loaded = AssetsLoader::embedded().load()?;
    Ok(ASSETS.get_or_init(|| loaded))
}

fn table_file(kind: NameKind, sex: Sex, cohort: CohortCode) -> String {
    match kind {
        NameKind::Last => format!("{kind}_{}.csv", sex.as_str()),
        NameKind::First | NameKind::Patronymic => {
            format!("{kind}_{cohort}_{}.csv", sex.as_str())
        }
    }
}

fn embedded_source(file: &str) -> Result<String, GenerationError> {
    EMBEDDED
        .iter()
        .find(|(name, _)| *name == file)
        .map(|(_, contents)| contents.to_string())
        .ok_or_else(|| GenerationError::Asset(format!("unknown asset {file}")))
}

fn parse_names(file: &str, contents: &str) -> Result<NameTable, GenerationError> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut entries = Vec::new();
    for row in reader.deserialize::<NameRow>() {
        let row = row.map_err(|err| asset_error(Path::new(file), err))?;
        entries.push((row.name.trim().to_string(), row.weight));
    }
    let name = file.trim_end_matches(".csv");
    Ok(NameTable::new(name, entries)?)
}

fn parse_localities(contents: &str) -> Result<LocationTable, GenerationError> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut entries = Vec::new();
    for row in reader.deserialize::<LocalityRow>() {
        let row = row.map_err(|err| asset_error(Path::new(LOCALITIES_FILE), err))?;
        entries.push(LocationEntry {
            locality: row.locality.trim().to_string(),
            region: row.region.trim().to_string(),
            population: row.population,
        });
    }
    Ok(LocationTable::new(entries)?)
}

fn asset_error(path: &Path, err: csv::Error) -> GenerationError {
    GenerationError::Asset(format!("invalid asset {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_kind_cohort_sex() {
        assert_eq!(
            table_file(NameKind::Last, Sex::Female, CohortCode::Senior),
            "last_names_female.csv"
        );
        assert_eq!(
            table_file(NameKind::Patronymic, Sex::Male, CohortCode::Junior),
            "patronymics_junior_male.csv"
        );
    }

    #[test]
    fn every_table_file_is_embedded() {
        for sex in Sex::ALL {
            for cohort in AgeCohort::ALL {
                for kind in [NameKind::Last, NameKind::First, NameKind::Patronymic] {
                    let file = table_file(kind, sex, cohort.code);
                    assert!(embedded_source(&file).is_ok(), "{file} not embedded");
                }
            }
        }
        assert!(embedded_source(LOCALITIES_FILE).is_ok());
    }
}
