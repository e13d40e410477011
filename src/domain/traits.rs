// ============================================================
// Layer 3 — Core Traits
// ============================================================
// The data layer derives checking records from whatever hands
// it raw annotations. Programming against AnnotationSource keeps
// that derivation independent of where annotations live:
//   - JsonAnnotationLoader  → a JSON file or a directory of them
//   - Vec<RawAnnotation>    → records already in memory

use crate::domain::annotation::RawAnnotation;

// ─── AnnotationSource ─────────────────────────────────────────────────────────
/// Any component that can produce raw annotation records.
pub trait AnnotationSource {
    type Error;

    /// Load every raw annotation this source holds, in a stable order.
    fn load_raw(&self) -> Result<Vec<RawAnnotation>, Self::Error>;
}

impl AnnotationSource for Vec<RawAnnotation> {
    type Error = std::convert::Infallible;

    fn load_raw(&self) -> Result<Vec<RawAnnotation>, Self::Error> {
        Ok(self.clone())
    }
}
