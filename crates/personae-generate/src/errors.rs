use personae_core::CohortCode;
use thiserror::Error;

/// Errors emitted by the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Core(#[from] personae_core::Error),
    #[error("cannot draw {requested} unique {what}: only {available} available")]
    SamplingExhaustion {
        what: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("cannot draw {requested} distinct birth dates for {cohort}: range holds {available} days")]
    BirthdateSpaceExhaustion {
        cohort: CohortCode,
        requested: usize,
        available: usize,
    },
    #[error("no transliteration for '{ch}' in login '{login}'")]
    UnmappedCharacter { ch: char, login: String },
    #[error("column groups are not aligned with {persons} persons")]
    Misaligned { persons: usize },
    #[error("asset error: {0}")]
    Asset(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
