// ============================================================
// Layer 3 — Spans and Temporal IoU
// ============================================================
// A span is a [start, end] interval in seconds inside a video.
//
// Annotation files store spans as JSON arrays, normally a pair:
//   "pred": [40.0, 50.0]
// but model outputs are not always well formed, so a span value
// may also arrive as a bare number or as a list of any length.
// RawSpan accepts all of those shapes; parse_span turns any of
// them into an ordered pair clamped to the video.
//
// Temporal IoU (intersection over union) between two spans:
//
//   a:      |-----------|
//   b:            |-----------|
//   inter:        |-----|
//   union:  |-----------------|
//
//   iou = inter / (len(a) + len(b) - inter)

use serde::{Deserialize, Serialize};

/// An ordered time interval in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f64,
    pub end:   f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// end - start; negative for reversed spans
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

// ─── RawSpan ──────────────────────────────────────────────────────────────────
/// A span value exactly as it appears in an annotation file.
///
/// Serialises back to the same JSON shape it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSpan {
    /// A single timestamp, e.g. `12.5`
    Point(f64),

    /// A list of timestamps, normally `[start, end]`
    Points(Vec<f64>),
}

impl RawSpan {
    pub fn pair(start: f64, end: f64) -> Self {
        RawSpan::Points(vec![start, end])
    }

    /// The first two values as (start, end), unordered.
    ///
    ///   [a, b, ...] → (a, b)
    ///   [a] or a    → (a, a)
    ///   []          → (0, 0)
    pub fn endpoints(&self) -> (f64, f64) {
        match self {
            RawSpan::Point(t) => (*t, *t),
            RawSpan::Points(v) => match v.as_slice() {
                [] => (0.0, 0.0),
                [t] => (*t, *t),
                [s, e, ..] => (*s, *e),
            },
        }
    }

    /// Endpoints as a Span without ordering or clamping
    pub fn as_span(&self) -> Span {
        let (s, e) = self.endpoints();
        Span::new(s, e)
    }
}

// ─── Temporal IoU ─────────────────────────────────────────────────────────────
/// Temporal intersection over union of two spans.
///
/// Always in [0, 1]. Disjoint spans, spans with a non-positive union
/// and spans containing NaN or infinity all score 0.
pub fn temporal_iou(a: Span, b: Span) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }

    let inter = (a.end.min(b.end) - a.start.max(b.start)).max(0.0);
    let union = a.length() + b.length() - inter;

    if union <= 0.0 {
        return 0.0;
    }

    let iou = inter / union;
    if iou.is_finite() {
        iou.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Best IoU of `pred` against any ground-truth span; 0 for an empty set.
pub fn max_iou(pred: Span, ground_truth: &[Span]) -> f64 {
    ground_truth
        .iter()
        .map(|gt| temporal_iou(pred, *gt))
        .fold(0.0, f64::max)
}

// ─── parse_span ───────────────────────────────────────────────────────────────
/// Normalise two timestamps into an ordered span inside [0, duration].
///
/// When `min_len` is set and the clamped span is shorter, it is widened
/// symmetrically to `min_len` around its centre. The centre is kept at
/// least `min_len / 2` away from both video edges so the widened span
/// fits whenever the video is long enough; a final clamp handles the
/// videos that are not.
///
/// Pass `f64::INFINITY` as `duration` when the video length is unknown.
/// NaN endpoints collapse to 0. Never fails.
pub fn parse_span(start: f64, end: f64, duration: f64, min_len: Option<f64>) -> Span {
    let (s, e) = (clamp(start, duration), clamp(end, duration));
    let (mut s, mut e) = (s.min(e), s.max(e));

    if let Some(min_len) = min_len {
        if e - s < min_len {
            let half   = min_len / 2.0;
            let centre = ((s + e) / 2.0).max(half).min(duration - half);
            s = centre - half;
            e = centre + half;
        }
    }

    Span::new(clamp(s, duration), clamp(e, duration))
}

/// Like [`parse_span`] but reading the endpoints from a raw span value.
pub fn parse_raw_span(raw: &RawSpan, duration: f64, min_len: Option<f64>) -> Span {
    let (s, e) = raw.endpoints();
    parse_span(s, e, duration, min_len)
}

// f64::max / f64::min return the non-NaN operand, so NaN lands on 0
fn clamp(t: f64, duration: f64) -> f64 {
    t.max(0.0).min(duration)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_iou_partial_overlap() {
        let iou = temporal_iou(Span::new(40.0, 50.0), Span::new(42.0, 48.0));
        assert!(close(iou, 0.6));
    }

    #[test]
    fn test_iou_is_symmetric() {
        let pairs = [
            (Span::new(0.0, 10.0), Span::new(5.0, 20.0)),
            (Span::new(3.0, 4.0),  Span::new(0.0, 100.0)),
            (Span::new(7.5, 9.0),  Span::new(8.0, 8.5)),
        ];
        for (a, b) in pairs {
            assert!(close(temporal_iou(a, b), temporal_iou(b, a)));
        }
    }

    #[test]
    fn test_iou_disjoint_is_zero() {
        assert_eq!(temporal_iou(Span::new(0.0, 5.0), Span::new(6.0, 9.0)), 0.0);
        // touching at a single point
        assert_eq!(temporal_iou(Span::new(0.0, 5.0), Span::new(5.0, 9.0)), 0.0);
    }

    #[test]
    fn test_iou_identical_is_one() {
        let s = Span::new(12.0, 30.0);
        assert!(close(temporal_iou(s, s), 1.0));
    }

    #[test]
    fn test_iou_degenerate_is_zero() {
        // zero-length identical spans: 0 / 0
        let p = Span::new(5.0, 5.0);
        assert_eq!(temporal_iou(p, p), 0.0);

        assert_eq!(temporal_iou(Span::new(f64::NAN, 3.0), Span::new(0.0, 3.0)), 0.0);
        assert_eq!(temporal_iou(Span::new(0.0, f64::INFINITY), Span::new(0.0, 3.0)), 0.0);

        // reversed spans never overlap anything
        assert_eq!(temporal_iou(Span::new(50.0, 40.0), Span::new(30.0, 60.0)), 0.0);
    }

    #[test]
    fn test_iou_stays_in_unit_range() {
        let spans = [
            Span::new(0.0, 1.0),
            Span::new(0.5, 0.7),
            Span::new(-3.0, 2.0),
            Span::new(10.0, 2.0),
            Span::new(1.0, 1.0),
        ];
        for a in spans {
            for b in spans {
                let iou = temporal_iou(a, b);
                assert!((0.0..=1.0).contains(&iou), "{a:?} {b:?} → {iou}");
            }
        }
    }

    #[test]
    fn test_max_iou_picks_best() {
        let gts = [Span::new(0.0, 2.0), Span::new(42.0, 48.0)];
        assert!(close(max_iou(Span::new(40.0, 50.0), &gts), 0.6));
        assert_eq!(max_iou(Span::new(40.0, 50.0), &[]), 0.0);
    }

    #[test]
    fn test_parse_span_orders_and_clamps() {
        assert_eq!(parse_span(50.0, 40.0, 100.0, None), Span::new(40.0, 50.0));
        assert_eq!(parse_span(-5.0, 120.0, 100.0, None), Span::new(0.0, 100.0));
        assert_eq!(parse_span(35.0, 55.0, 100.0, None), Span::new(35.0, 55.0));
    }

    #[test]
    fn test_parse_span_nan_collapses_to_zero() {
        assert_eq!(parse_span(f64::NAN, 10.0, 100.0, None), Span::new(0.0, 10.0));
    }

    #[test]
    fn test_parse_span_min_len_widens_around_centre() {
        assert_eq!(parse_span(10.0, 10.0, 100.0, Some(2.0)), Span::new(9.0, 11.0));
        // pushed inward at the edges
        assert_eq!(parse_span(0.0, 0.0, 100.0, Some(2.0)), Span::new(0.0, 2.0));
        assert_eq!(parse_span(100.0, 100.0, 100.0, Some(2.0)), Span::new(98.0, 100.0));
        // already long enough
        assert_eq!(parse_span(40.0, 50.0, 100.0, Some(2.0)), Span::new(40.0, 50.0));
    }

    #[test]
    fn test_parse_span_min_len_on_short_video() {
        let s = parse_span(0.5, 0.5, 1.0, Some(2.0));
        assert_eq!(s, Span::new(0.0, 1.0));
    }

    #[test]
    fn test_parse_span_unknown_duration() {
        let s = parse_span(-1.0, 1e6, f64::INFINITY, Some(2.0));
        assert_eq!(s, Span::new(0.0, 1e6));
    }

    #[test]
    fn test_raw_span_shapes() {
        assert_eq!(RawSpan::Point(3.0).endpoints(), (3.0, 3.0));
        assert_eq!(RawSpan::Points(vec![]).endpoints(), (0.0, 0.0));
        assert_eq!(RawSpan::Points(vec![4.0]).endpoints(), (4.0, 4.0));
        assert_eq!(RawSpan::Points(vec![9.0, 2.0, 7.0]).endpoints(), (9.0, 2.0));

        let s = parse_raw_span(&RawSpan::Point(30.0), 100.0, Some(2.0));
        assert_eq!(s, Span::new(29.0, 31.0));
    }

    #[test]
    fn test_raw_span_json_shapes() {
        let pair: RawSpan = serde_json::from_str("[1.5, 3]").unwrap();
        assert_eq!(pair, RawSpan::pair(1.5, 3.0));

        let point: RawSpan = serde_json::from_str("7").unwrap();
        assert_eq!(point, RawSpan::Point(7.0));

        assert_eq!(serde_json::to_string(&pair).unwrap(), "[1.5,3.0]");
    }
}
