// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Annotation files all the way to training examples:
//
//   annotation JSON (file or directory)
//       │
//       ▼
//   JsonAnnotationLoader → raw annotations
//       │
//       ▼
//   loader::load         → one labelled CheckingRecord per top-5 prediction
//       │
//       ▼
//   LengthFilter         → drops records outside the word/duration bounds
//       │
//       ▼
//   CheckingDataset      → burn Dataset; builds an example per index
//       │
//       ▼
//   ExampleBuilder       → padded window, ss/se, two-turn conversation
//
// DatasetRegistry names the annotation sources.

/// Reads annotation files and derives checking records
pub mod loader;

/// Word-count and duration bounds
pub mod filter;

/// Checking record → training example
pub mod builder;

/// burn Dataset over filtered checking records
pub mod dataset;

/// Named annotation sources
pub mod registry;
