// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::JobRecord;
use crate::utils::error::StorageError;

pub struct CsvStore {
    output_path: PathBuf,
}

impl CsvStore {
    /// Creates a store that writes to `output_path`. Nothing touches disk until a save.
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self { output_path: output_path.as_ref().to_path_buf() }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the records to CSV, one row each, in the order given.
    ///
    /// `None` entries are dropped. When nothing is left to write no file is
    /// created and `Ok(0)` is returned.
    pub fn save_jobs<'a, I, R>(&self, jobs: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Option<&'a JobRecord>>,
    {
        let records: Vec<&JobRecord> = jobs.into_iter().filter_map(Into::into).collect();
        if records.is_empty() {
            tracing::warn!("No jobs to save");
            return Ok(0);
        }

        // Create the parent directory if it doesn't exist
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.output_path)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::info!("Successfully saved {} jobs to {}", records.len(), self.output_path.display());
        Ok(records.len())
    }
}
