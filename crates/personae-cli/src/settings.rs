use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use personae_core::{DataGroups, MAX_TOTAL};
use personae_generate::output::OutputFormat;

/// Settings file picked up from the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "personae.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Values from the TOML settings file; every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub total: i64,
    pub data: DataGroups,
    pub formats: Vec<OutputFormat>,
    pub output: String,
    pub out_dir: PathBuf,
    pub max_total: usize,
    pub seed: Option<u64>,
    pub strict: bool,
    pub assets_dir: Option<PathBuf>,
    pub run_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            total: 1000,
            data: DataGroups::Base,
            formats: vec![OutputFormat::Csv],
            output: "new_dataset".to_string(),
            out_dir: PathBuf::from("."),
            max_total: MAX_TOTAL,
            seed: None,
            strict: false,
            assets_dir: None,
            run_dir: None,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load `explicit`, else `personae.toml` in the working directory, else defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !path.exists() {
                return Ok(Settings::default());
            }
            path
        }
    };
    let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
        path: path.clone(),
        source,
    })?;
    Settings::from_toml(&content, &path)
}

/// Command-line values that override the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub total: Option<i64>,
    pub data: Option<DataGroups>,
    pub formats: Vec<OutputFormat>,
    pub output: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub strict: bool,
    pub assets_dir: Option<PathBuf>,
    pub run_dir: Option<PathBuf>,
}

/// Final configuration of a run, recorded in the run directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub requested_total: i64,
    pub total: usize,
    pub data: DataGroups,
    pub formats: Vec<OutputFormat>,
    pub output: String,
    pub out_dir: PathBuf,
    pub seed: Option<u64>,
    pub strict: bool,
    pub assets_dir: Option<PathBuf>,
    pub run_dir: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn resolve(settings: Settings, overrides: Overrides) -> Self {
        let requested_total = overrides.total.unwrap_or(settings.total);
        let max_total = settings.max_total.clamp(1, MAX_TOTAL);
        let mut formats = if overrides.formats.is_empty() {
            settings.formats
        } else {
            overrides.formats
        };
        let mut seen = Vec::with_capacity(formats.len());
        formats.retain(|format| {
            let fresh = !seen.contains(format);
            seen.push(*format);
            fresh
        });

        Self {
            requested_total,
            total: clamp_total(requested_total, max_total),
            data: overrides.data.unwrap_or(settings.data),
            formats,
            output: overrides.output.unwrap_or(settings.output),
            out_dir: overrides.out_dir.unwrap_or(settings.out_dir),
            seed: overrides.seed.or(settings.seed),
            strict: overrides.strict || settings.strict,
            assets_dir: overrides.assets_dir.or(settings.assets_dir),
            run_dir: overrides.run_dir.or(settings.run_dir),
        }
    }

    pub fn was_clamped(&self) -> bool {
        i64::try_from(self.total).ok() != Some(self.requested_total)
    }
}

/// Bring a requested total into `1..=max`.
pub fn clamp_total(requested: i64, max: usize) -> usize {
    let max = max.max(1);
    usize::try_from(requested).unwrap_or(0).clamp(1, max)
}
