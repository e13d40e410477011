// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the output directory:
//
//   export.rs — writes built examples as JSON Lines, one file
//               per dataset, and saves the export configuration
//               as JSON next to them so a run can be reproduced
//
//   stats.rs  — appends one CSV row per exported dataset with
//               its record and label counts
//
// Output layout:
//   <output_dir>/
//     qvhighlights_check_2b.jsonl
//     tacos_check_7b.jsonl
//     export_config.json
//     stats.csv

/// JSONL example writer and config persistence
pub mod export;

/// Per-dataset statistics CSV logger
pub mod stats;
