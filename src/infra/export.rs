// ============================================================
// Layer 6 — Example Export
// ============================================================
// Writes training examples as JSON Lines: one serialised
// TrainingExample per line, so a training job can stream the
// file without parsing it whole.
//
// Also saves the ExportConfig used for the run as pretty JSON,
// recording the bounds and sampling settings that produced the
// examples.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::application::config::ExportConfig;
use crate::domain::conversation::TrainingExample;

const CONFIG_FILE: &str = "export_config.json";

/// Owns an output directory and writes export artifacts into it.
pub struct ExportWriter {
    dir: PathBuf,
}

impl ExportWriter {
    /// Create the writer, creating the directory (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// `<dir>/<name>.jsonl`
    pub fn examples_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.jsonl"))
    }

    /// Write examples for one dataset, replacing any earlier file.
    /// Returns how many lines were written.
    pub fn write_examples<I>(&self, name: &str, examples: I) -> Result<usize>
    where
        I: IntoIterator<Item = TrainingExample>,
    {
        let path = self.examples_path(name);
        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        let mut written = 0usize;
        for ex in examples {
            serde_json::to_writer(&mut out, &ex)?;
            out.write_all(b"\n")?;
            written += 1;
        }
        out.flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} examples to '{}'", written, path.display());
        Ok(written)
    }

    pub fn save_config(&self, cfg: &ExportConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved export config to '{}'", path.display());
        Ok(())
    }
}
