// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers for each command.
// No span math and no printing here: the data layer computes,
// the CLI layer prints.

/// Shared and export-specific run settings
pub mod config;

/// The export workflow: build every example and write it out
pub mod export_use_case;

/// Read-only stats / single-example views
pub mod inspect_use_case;
