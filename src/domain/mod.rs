// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing the concepts
// of the checker task:
//
//   span          — time intervals, temporal IoU, span normalisation
//   annotation    — raw annotation records and derived checking records
//   conversation  — the two-turn training example handed to the
//                   video/text processor
//   prompts       — fixed instruction templates and special tokens
//   traits        — where raw annotations come from
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only plain data and arithmetic

/// Time spans, temporal IoU and span normalisation
pub mod span;

/// Raw and derived annotation records
pub mod annotation;

/// Conversation / training example types
pub mod conversation;

/// Prompt templates and special tokens
pub mod prompts;

/// Core abstractions implemented by other layers
pub mod traits;
