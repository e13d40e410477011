// ============================================================
// Layer 4 — Example Builder
// ============================================================
// Turns one checking record into one training example.
//
//   candidate (s0, e0)        |=======|
//   offset = (e0 - s0) / 2
//   window    (s1, e1)    |---|=======|---|
//
// The window is cropped from the video and shown to the model;
// ss / se place the candidate inside the window:
//
//   ss = (s0 - s1) / (e1 - s1)
//   se = (e0 - s1) / (e1 - s1)
//
// With no clamping the candidate sits at ss = 0.25, se = 0.75.
// Near the video edges the window is clamped and the fractions
// shift accordingly. A window of zero width has no meaningful
// fractions and is rejected.

use crate::domain::annotation::CheckingRecord;
use crate::domain::conversation::{
    ContentPart, Message, SamplingConfig, TrainingExample, VideoPart,
};
use crate::domain::prompts::{answer_for, checker_prompt};
use crate::domain::span::{parse_raw_span, parse_span, Span};

/// Candidate spans shorter than this are widened before padding
pub const MIN_CANDIDATE_LEN: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("context window [{start}, {end}] has zero width")]
    ZeroWidthWindow { start: f64, end: f64 },

    #[error("relative position of [{candidate_start}, {candidate_end}] in window [{start}, {end}] is not finite")]
    NonFiniteWindow {
        candidate_start: f64,
        candidate_end:   f64,
        start:           f64,
        end:             f64,
    },
}

// ─── Window geometry ──────────────────────────────────────────────────────────
/// The candidate span, its padded context window, and where the
/// candidate sits inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckWindow {
    pub candidate: Span,
    pub window:    Span,
    pub ss:        f64,
    pub se:        f64,
}

impl CheckWindow {
    /// Compute the window for a candidate prediction.
    pub fn for_record(record: &CheckingRecord) -> Result<Self, BuildError> {
        let duration  = record.duration_or_unbounded();
        let candidate = parse_raw_span(&record.pred, duration, Some(MIN_CANDIDATE_LEN));

        let offset = (candidate.end - candidate.start) / 2.0;
        let window = parse_span(candidate.start - offset, candidate.end + offset, duration, None);

        let (ss, se) = relative_position(candidate, window)?;
        Ok(Self { candidate, window, ss, se })
    }
}

/// Fractions of `window` at which `inner` starts and ends.
pub fn relative_position(inner: Span, window: Span) -> Result<(f64, f64), BuildError> {
    let width = window.end - window.start;
    if width == 0.0 {
        return Err(BuildError::ZeroWidthWindow { start: window.start, end: window.end });
    }

    let ss = (inner.start - window.start) / width;
    let se = (inner.end - window.start) / width;

    if !ss.is_finite() || !se.is_finite() {
        return Err(BuildError::NonFiniteWindow {
            candidate_start: inner.start,
            candidate_end:   inner.end,
            start:           window.start,
            end:             window.end,
        });
    }

    Ok((ss, se))
}

// ─── ExampleBuilder ───────────────────────────────────────────────────────────
/// Builds checker conversations. Pure and deterministic.
#[derive(Debug, Clone, Default)]
pub struct ExampleBuilder {
    sampling: SamplingConfig,
}

impl ExampleBuilder {
    pub fn new(sampling: SamplingConfig) -> Self {
        Self { sampling }
    }

    pub fn build(&self, record: &CheckingRecord) -> Result<TrainingExample, BuildError> {
        let geometry = CheckWindow::for_record(record)?;

        let user = Message::user(vec![
            ContentPart::Video(VideoPart {
                video:       record.video_path.clone(),
                video_start: geometry.window.start,
                video_end:   geometry.window.end,
                sampling:    self.sampling,
            }),
            ContentPart::Text { text: checker_prompt(&record.query) },
        ]);
        let assistant = Message::assistant(answer_for(record.positive));

        Ok(TrainingExample {
            messages: vec![user, assistant],
            ss:       geometry.ss,
            se:       geometry.se,
        })
    }
}
