// ============================================================
// Layer 4 — Length Filter
// ============================================================
// Drops checking records whose query is too short/long or whose
// video is too short/long. Every bound is optional; a negative
// bound is the same as no bound.
//
// Missing durations read differently per check:
//   min_video_len → missing duration counts as +∞ (never too short)
//   max_video_len → missing duration counts as 0  (never too long)

use serde::{Deserialize, Serialize};

use crate::domain::annotation::CheckingRecord;

/// Inclusive word-count and duration bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthFilter {
    pub min_num_words: Option<i64>,
    pub max_num_words: Option<i64>,
    pub min_video_len: Option<f64>,
    pub max_video_len: Option<f64>,
}

impl LengthFilter {
    /// A filter that keeps everything
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn keeps(&self, record: &CheckingRecord) -> bool {
        let num_words = record.num_words() as i64;

        if let Some(min) = active(self.min_num_words) {
            if num_words < min {
                return false;
            }
        }
        if let Some(max) = active(self.max_num_words) {
            if num_words > max {
                return false;
            }
        }
        if let Some(min) = active(self.min_video_len) {
            if record.duration.unwrap_or(f64::INFINITY) < min {
                return false;
            }
        }
        if let Some(max) = active(self.max_video_len) {
            // A missing duration passes on purpose: 0, not +∞, for this check
            if record.duration.unwrap_or(0.0) > max {
                return false;
            }
        }

        true
    }

    /// Keep the records that pass every bound, preserving order.
    pub fn apply(&self, records: Vec<CheckingRecord>) -> Vec<CheckingRecord> {
        let before = records.len();
        let kept: Vec<CheckingRecord> = records.into_iter().filter(|r| self.keeps(r)).collect();

        tracing::debug!("Length filter kept {} of {} records", kept.len(), before);
        kept
    }
}

/// A bound is live only when present and non-negative
fn active<T: PartialOrd + Default + Copy>(bound: Option<T>) -> Option<T> {
    bound.filter(|b| *b >= T::default())
}
