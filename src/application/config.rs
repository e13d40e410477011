// ============================================================
// Layer 2 — Run Configuration
// ============================================================
// Settings shared by every command plus the export-only ones.
// Serialisable so an export can record exactly how it was made.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    dataset::CheckingDataset,
    filter::LengthFilter,
    registry::DatasetRegistry,
};
use crate::domain::conversation::SamplingConfig;

/// Where annotations live and how records are filtered and rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory the registry's annotation paths are relative to
    pub data_root: String,
    pub filter:    LengthFilter,
    pub sampling:  SamplingConfig,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_root: ".".to_string(),
            filter:    LengthFilter::unbounded(),
            sampling:  SamplingConfig::default(),
        }
    }
}

impl DataConfig {
    /// Load and filter a registered dataset.
    pub fn open(&self, registry: &DatasetRegistry, name: &str) -> Result<CheckingDataset> {
        let spec = registry.get(name)?;

        CheckingDataset::open(spec, Path::new(&self.data_root), &self.filter, self.sampling)
            .with_context(|| format!("Failed to load dataset '{name}'"))
    }
}

/// Everything an `export` run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Registry names, exported in this order
    pub datasets:   Vec<String>,
    pub output_dir: String,

    #[serde(flatten)]
    pub data: DataConfig,
}
