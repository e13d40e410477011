// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Builds every example of the selected datasets and writes them
// to disk:
//
//   Step 1: Save the export config      (Layer 6 - infra)
//   Step 2: Load + filter each dataset  (Layer 4 - data)
//   Step 3: Build examples              (Layer 4 - data)
//   Step 4: Write <name>.jsonl          (Layer 6 - infra)
//   Step 5: Append a stats.csv row      (Layer 6 - infra)
//
// A record whose context window is rejected is logged and
// skipped; it shows up in the `skipped` column of stats.csv.

use anyhow::Result;
use burn::data::dataset::Dataset;

use crate::application::config::ExportConfig;
use crate::data::registry::DatasetRegistry;
use crate::infra::{
    export::ExportWriter,
    stats::{DatasetStats, StatsLogger},
};

pub struct ExportUseCase {
    config:   ExportConfig,
    registry: DatasetRegistry,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config, registry: DatasetRegistry::builtin() }
    }

    /// Run the export; returns the statistics of each dataset in order.
    pub fn execute(&self) -> Result<Vec<DatasetStats>> {
        let cfg = &self.config;

        // Fail on a bad name before anything is written
        for name in &cfg.datasets {
            self.registry.get(name)?;
        }

        // ── Step 1: Record how this export was produced ──────────────────────
        let writer = ExportWriter::new(&cfg.output_dir)?;
        writer.save_config(cfg)?;
        let stats_log = StatsLogger::new(&cfg.output_dir)?;

        let mut all_stats = Vec::with_capacity(cfg.datasets.len());

        for name in &cfg.datasets {
            // ── Step 2: Load and filter ──────────────────────────────────────
            let dataset   = cfg.data.open(&self.registry, name)?;
            let mut stats = DatasetStats::of(&dataset);

            // ── Step 3 + 4: Build and write ──────────────────────────────────
            // Rejected windows are already left out of the dataset view
            stats.written = writer.write_examples(name, dataset.iter())?;
            stats.skipped = dataset.rejected();

            // ── Step 5: Log ──────────────────────────────────────────────────
            stats_log.log(&stats)?;
            tracing::info!(
                "[{}] wrote {} examples to '{}' ({} skipped)",
                name,
                stats.written,
                writer.examples_path(name).display(),
                stats.skipped,
            );

            all_stats.push(stats);
        }

        Ok(all_stats)
    }
}
