// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Read-only views of a dataset for the `stats` and `show`
// commands. Nothing is written to disk.

use anyhow::{anyhow, Context, Result};

use crate::application::config::DataConfig;
use crate::data::registry::DatasetRegistry;
use crate::domain::conversation::TrainingExample;
use crate::infra::stats::DatasetStats;

pub struct InspectUseCase {
    config:   DataConfig,
    registry: DatasetRegistry,
}

impl InspectUseCase {
    pub fn new(config: DataConfig) -> Self {
        Self { config, registry: DatasetRegistry::builtin() }
    }

    /// Record and label counts after filtering
    pub fn stats(&self, name: &str) -> Result<DatasetStats> {
        let dataset = self.config.open(&self.registry, name)?;
        Ok(DatasetStats::of(&dataset))
    }

    /// Build the example at `index`. A rejected window is an error here.
    pub fn show(&self, name: &str, index: usize) -> Result<TrainingExample> {
        let dataset = self.config.open(&self.registry, name)?;
        let total   = dataset.records().len();

        dataset
            .example(index)
            .ok_or_else(|| anyhow!("index {index} out of range ({name} has {total} records)"))?
            .with_context(|| format!("Cannot build example {index} of '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{fs, path::Path};

    fn setup(root: &Path) -> DataConfig {
        let dir = root.join("data/verifying");
        fs::create_dir_all(&dir).unwrap();

        let annos = json!([
            {
                "video_path": "videos/door.mp4",
                "duration": 100.0,
                "query": "the man opens the door",
                "span": [[42.0, 48.0]],
                "pred": [[40.0, 50.0], [60.0, 80.0]]
            },
            {
                "video_path": "videos/blank.mp4",
                "duration": 0.0,
                "query": "a b c",
                "span": [[5.0, 6.0]],
                "pred": [[0.0, 1.0]]
            }
        ]);
        fs::write(dir.join("verifying_didemo_7b.json"), annos.to_string()).unwrap();

        DataConfig { data_root: root.display().to_string(), ..Default::default() }
    }

    #[test]
    fn test_stats() {
        let root  = tempfile::tempdir().unwrap();
        let stats = InspectUseCase::new(setup(root.path())).stats("didemo_check_7b").unwrap();
        assert_eq!(stats.raw_records, 3);
        assert_eq!(stats.kept, 3);
        assert_eq!(stats.positives, 1);
    }

    #[test]
    fn test_show() {
        let root = tempfile::tempdir().unwrap();
        let uc   = InspectUseCase::new(setup(root.path()));

        let ex = uc.show("didemo_check_7b", 0).unwrap();
        assert_eq!(ex.answer(), Some("Yes."));

        assert!(uc.show("didemo_check_7b", 3).is_err());
        // zero-duration video
        assert!(uc.show("didemo_check_7b", 2).is_err());
    }

    #[test]
    fn test_missing_annotation_file() {
        let root = tempfile::tempdir().unwrap();
        let cfg  = DataConfig { data_root: root.path().display().to_string(), ..Default::default() };
        assert!(InspectUseCase::new(cfg).stats("tacos_check_7b").is_err());
    }
}
