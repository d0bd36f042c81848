use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use personae_core::Dataset;

use super::rows;
use crate::errors::GenerationError;

/// Pretty-printed array of rows; returns bytes written.
pub fn write_dataset_json(path: &Path, dataset: &Dataset) -> Result<u64, GenerationError> {
    let body = serde_json::to_vec_pretty(&rows(dataset))?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&body)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(body.len() as u64 + 1)
}
