// ============================================================
// Layer 6 — Dataset Statistics Logger
// ============================================================
// Records one row per exported dataset in a CSV file:
//
//   source,raw_records,kept,positives,negatives,written,skipped
//   tacos_check_2b,18090,17650,5012,12638,17650,0
//
// raw_records — checking records before length filtering
// kept        — records passing the filter
// positives / negatives — label split of the kept records
// written     — examples written to the JSONL file
// skipped     — kept records whose context window was rejected
//
// Output file: <output_dir>/stats.csv, appended across runs.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::data::dataset::CheckingDataset;

const HEADER: &str = "source,raw_records,kept,positives,negatives,written,skipped";

/// Record and label counts for one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub source:      String,
    pub raw_records: usize,
    pub kept:        usize,
    pub positives:   usize,
    pub negatives:   usize,
    pub written:     usize,
    pub skipped:     usize,
}

impl DatasetStats {
    /// Counts for a loaded dataset before anything is written
    pub fn of(dataset: &CheckingDataset) -> Self {
        let records   = dataset.records();
        let positives = records.iter().filter(|r| r.positive).count();

        Self {
            source:      dataset.source().to_string(),
            raw_records: dataset.raw_length(),
            kept:        records.len(),
            positives,
            negatives:   records.len() - positives,
            written:     0,
            skipped:     0,
        }
    }

    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.source,
            self.raw_records,
            self.kept,
            self.positives,
            self.negatives,
            self.written,
            self.skipped,
        )
    }
}

/// Appends DatasetStats rows to a CSV file.
pub struct StatsLogger {
    csv_path: PathBuf,
}

impl StatsLogger {
    /// Writes the header if the file does not exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("stats.csv");
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created stats CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    pub fn log(&self, stats: &DatasetStats) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(f, "{}", stats.csv_row())?;

        tracing::debug!(
            "Logged stats for {}: {} written, {} skipped",
            stats.source,
            stats.written,
            stats.skipped,
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
