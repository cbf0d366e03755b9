//! CSV serialization of extracted product batches
//!
//! Fixed column order `name,price,rating`, UTF-8, standard quoting. An
//! existing file at the target path is overwritten, not merged.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ProductBatch;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Target path is unwritable (permissions, missing directory).
    #[error("Cannot write CSV to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writer-level failure while serializing rows.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Write a batch to `path` as CSV with a header row, one row per record in
/// batch order. Returns the path on success.
pub fn export_batch(batch: &ProductBatch, path: &Path) -> Result<PathBuf, ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    for record in batch {
        // serde field order gives the header row: name,price,rating
        writer.serialize(record)?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(path.to_path_buf())
}

/// Default output filename in the original tool's convention,
/// e.g. `products_20260825_141530.csv`.
pub fn default_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("products_{timestamp}.csv"))
}
