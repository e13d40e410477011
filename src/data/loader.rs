// ============================================================
// Layer 4 — Annotation Loader
// ============================================================
// Reads raw annotations and derives one checking record per
// (annotation, prediction) pair.
//
// The annotation path is either:
//   - a single JSON file holding an array of annotations, or
//   - a directory; every *.json file directly inside it is read
//     in file-name order and the arrays are concatenated
//
// Only the top TOP_K_PREDICTIONS predictions of each annotation
// are used. Every derived record is returned: nothing is sampled,
// shuffled or rebalanced here.

use std::{
    convert::Infallible,
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::domain::annotation::{CheckingRecord, RawAnnotation};
use crate::domain::traits::AnnotationSource;

/// How many ranked predictions per annotation become records
pub const TOP_K_PREDICTIONS: usize = 5;

/// The only split annotation files exist for
pub const TRAIN_SPLIT: &str = "train";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unsupported split '{0}' (only 'train' is available)")]
    UnsupportedSplit(String),

    #[error("cannot read '{path}': {source}")]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("invalid annotation JSON in '{path}': {source}")]
    Parse {
        path:   PathBuf,
        source: serde_json::Error,
    },
}

impl From<Infallible> for LoadError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

// ─── JsonAnnotationLoader ─────────────────────────────────────────────────────
/// Loads raw annotations from a JSON file or a directory of JSON files.
pub struct JsonAnnotationLoader {
    path: PathBuf,
}

impl JsonAnnotationLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sorted paths of the *.json files directly inside `dir`
    fn json_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let io_err = |source| LoadError::Io { path: dir.to_path_buf(), source };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }
}

impl AnnotationSource for JsonAnnotationLoader {
    type Error = LoadError;

    fn load_raw(&self) -> Result<Vec<RawAnnotation>, LoadError> {
        if !self.path.is_dir() {
            return read_annotation_file(&self.path);
        }

        let files = Self::json_files(&self.path)?;
        tracing::debug!(
            "Reading {} annotation files from '{}'",
            files.len(),
            self.path.display()
        );

        let mut annos = Vec::new();
        for file in &files {
            annos.extend(read_annotation_file(file)?);
        }
        Ok(annos)
    }
}

/// Parse one file holding a JSON array of annotations.
fn read_annotation_file(path: &Path) -> Result<Vec<RawAnnotation>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let annos: Vec<RawAnnotation> = serde_json::from_str(&text).map_err(|source| {
        LoadError::Parse { path: path.to_path_buf(), source }
    })?;

    tracing::debug!("Loaded {} annotations from '{}'", annos.len(), path.display());
    Ok(annos)
}

// ─── Label statistics ─────────────────────────────────────────────────────────
/// Positive / negative counts for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStats {
    pub source:    String,
    pub positives: usize,
    pub negatives: usize,
}

impl LabelStats {
    pub fn count(source: &str, records: &[CheckingRecord]) -> Self {
        let positives = records.iter().filter(|r| r.positive).count();
        Self {
            source:    source.to_string(),
            positives,
            negatives: records.len() - positives,
        }
    }

    /// negatives / positives; None when there are no positives
    pub fn ratio(&self) -> Option<f64> {
        (self.positives > 0).then(|| self.negatives as f64 / self.positives as f64)
    }
}

impl fmt::Display for LabelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] pos: {} neg: {} n/p ratio: ", self.source, self.positives, self.negatives)?;
        match self.ratio() {
            // Debug keeps the ".0" on whole numbers: 4.0, not 4
            Some(r) => write!(f, "{r:?}"),
            None => write!(f, "n/a"),
        }
    }
}

// ─── Record derivation ────────────────────────────────────────────────────────
/// Expand raw annotations into labelled checking records.
pub fn derive_records(source: &str, raw_annos: &[RawAnnotation]) -> Vec<CheckingRecord> {
    raw_annos
        .iter()
        .flat_map(|raw| {
            raw.pred
                .iter()
                .take(TOP_K_PREDICTIONS)
                .map(move |pred| CheckingRecord::from_prediction(source, raw, pred))
        })
        .collect()
}

/// Load the checking records of `split` from `annotations`.
///
/// Logs the positive/negative balance under the source tag.
pub fn load<S>(annotations: &S, source: &str, split: &str) -> Result<Vec<CheckingRecord>, LoadError>
where
    S: AnnotationSource,
    LoadError: From<S::Error>,
{
    if split != TRAIN_SPLIT {
        return Err(LoadError::UnsupportedSplit(split.to_string()));
    }

    let raw_annos = annotations.load_raw()?;
    let records   = derive_records(source, &raw_annos);

    let stats = LabelStats::count(source, &records);
    tracing::info!("{stats}");

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::span::RawSpan;
    use serde_json::json;
    use std::io::Write;

    fn raw(query: &str, preds: usize) -> RawAnnotation {
        RawAnnotation {
            video_path: format!("videos/{query}.mp4"),
            duration:   Some(100.0),
            query:      query.to_string(),
            span:       vec![[42.0, 48.0]],
            pred:       (0..preds)
                .map(|i| RawSpan::pair(40.0 + i as f64 * 10.0, 50.0 + i as f64 * 10.0))
                .collect(),
            task:       None,
        }
    }

    #[test]
    fn test_only_top_five_predictions_are_used() {
        let records = derive_records("src", &[raw("a", 8), raw("b", 3)]);
        assert_eq!(records.len(), 5 + 3);
        assert_eq!(records[0].query, "a");
        assert_eq!(records[5].query, "b");
    }

    #[test]
    fn test_labels_follow_max_iou() {
        let records = derive_records("src", &[raw("a", 5)]);
        let labels: Vec<bool> = records.iter().map(|r| r.positive).collect();
        assert_eq!(labels, vec![true, false, false, false, false]);
    }

    #[test]
    fn test_rejects_non_train_split() {
        let source = vec![raw("a", 1)];
        let err    = load(&source, "src", "val").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedSplit(s) if s == "val"));
    }

    #[test]
    fn test_load_from_memory() {
        let source  = vec![raw("a", 2)];
        let records = load(&source, "tacos_check_2b", "train").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.source == "tacos_check_2b"));
    }

    #[test]
    fn test_label_stats() {
        let records = derive_records("src", &[raw("a", 5)]);
        let stats   = LabelStats::count("src", &records);
        assert_eq!(stats.positives, 1);
        assert_eq!(stats.negatives, 4);
        assert_eq!(stats.ratio(), Some(4.0));
        assert_eq!(stats.to_string(), "[src] pos: 1 neg: 4 n/p ratio: 4.0");

        let records = derive_records("src", &[raw("a", 3), raw("b", 1)]);
        let stats   = LabelStats::count("src", &records);
        assert_eq!(stats.to_string(), "[src] pos: 2 neg: 2 n/p ratio: 1.0");

        let empty = LabelStats::count("src", &[]);
        assert_eq!(empty.ratio(), None);
        assert_eq!(empty.to_string(), "[src] pos: 0 neg: 0 n/p ratio: n/a");
    }

    fn write_json(path: &Path, value: serde_json::Value) {
        let mut f = fs::File::create(path).unwrap();
        serde_json::to_writer(&mut f, &value).unwrap();
        f.flush().unwrap();
    }

    fn anno_json(query: &str) -> serde_json::Value {
        json!({
            "video_path": "v.mp4",
            "duration": 30.0,
            "query": query,
            "span": [[1.0, 2.0]],
            "pred": [[1.0, 2.0]]
        })
    }

    #[test]
    fn test_load_single_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("annos.json");
        write_json(&path, json!([anno_json("x"), anno_json("y")]));

        let annos = JsonAnnotationLoader::new(&path).load_raw().unwrap();
        assert_eq!(annos.len(), 2);
    }

    #[test]
    fn test_load_directory_in_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_json(&dir.path().join("b.json"), json!([anno_json("second")]));
        write_json(&dir.path().join("a.json"), json!([anno_json("first")]));
        write_json(&dir.path().join("c.json"), json!([anno_json("third"), anno_json("fourth")]));
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let annos = JsonAnnotationLoader::new(dir.path()).load_raw().unwrap();
        let queries: Vec<&str> = annos.iter().map(|a| a.query.as_str()).collect();
        assert_eq!(queries, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonAnnotationLoader::new(dir.path().join("nope.json"))
            .load_raw()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonAnnotationLoader::new(&path).load_raw().unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
