// ============================================================
// Layer 3 — Annotation Records
// ============================================================
// Two record shapes flow through the pipeline:
//
//   RawAnnotation   — one line-item of an annotation file: a video,
//                     a query, the ground-truth span(s) and the
//                     grounder's ranked predictions
//
//   CheckingRecord  — one (annotation, prediction) pair with the
//                     positive/negative label already decided
//
// Example annotation file entry:
//   {
//     "video_path": "videos/abc.mp4",
//     "duration":   100.0,
//     "query":      "the man opens the door",
//     "span":       [[42.0, 48.0]],
//     "pred":       [[40.0, 50.0], [0.0, 12.0], ...],
//     "task":       "grounding"
//   }

use serde::{Deserialize, Serialize};

use crate::domain::span::{max_iou, RawSpan, Span};

/// IoU at or above which a prediction counts as a positive example
pub const POSITIVE_IOU_THRESHOLD: f64 = 0.5;

/// Task label used when an annotation does not carry one
pub const UNKNOWN_TASK: &str = "unknown";

/// Every checking record pairs video frames with text
pub const MULTIMODAL: &str = "multimodal";

/// One raw annotation as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnnotation {
    pub video_path: String,

    /// Video length in seconds. Some sources leave it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    pub query: String,

    /// Ground-truth spans, treated as a set. Unlike predictions these
    /// must be [start, end] pairs; any other shape fails to parse.
    #[serde(default)]
    pub span: Vec<[f64; 2]>,

    /// Ranked grounder predictions, best first
    #[serde(default)]
    pub pred: Vec<RawSpan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl RawAnnotation {
    /// Ground-truth spans as unclamped Span values
    pub fn ground_truth(&self) -> Vec<Span> {
        self.span.iter().map(|&[s, e]| Span::new(s, e)).collect()
    }
}

/// One candidate span to be judged, with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckingRecord {
    /// Registry name of the dataset that produced this record
    pub source:     String,
    pub data_type:  String,
    pub video_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    pub query: String,
    pub span:  Vec<[f64; 2]>,

    /// The candidate span under judgement
    pub pred: RawSpan,

    /// max IoU(pred, span) >= 0.5
    pub positive: bool,

    pub task: String,
}

impl CheckingRecord {
    /// Label one prediction of a raw annotation.
    pub fn from_prediction(source: &str, raw: &RawAnnotation, pred: &RawSpan) -> Self {
        let iou = max_iou(pred.as_span(), &raw.ground_truth());

        Self {
            source:     source.to_string(),
            data_type:  MULTIMODAL.to_string(),
            video_path: raw.video_path.clone(),
            duration:   raw.duration,
            query:      raw.query.clone(),
            span:       raw.span.clone(),
            pred:       pred.clone(),
            positive:   iou >= POSITIVE_IOU_THRESHOLD,
            task:       raw.task.clone().unwrap_or_else(|| UNKNOWN_TASK.to_string()),
        }
    }

    /// Number of pieces the query splits into on single spaces.
    ///
    /// Consecutive spaces produce empty pieces that still count,
    /// and an empty query counts as one word.
    pub fn num_words(&self) -> usize {
        self.query.split(' ').count()
    }

    /// Upper clamp bound for span normalisation
    pub fn duration_or_unbounded(&self) -> f64 {
        self.duration.unwrap_or(f64::INFINITY)
    }
}
