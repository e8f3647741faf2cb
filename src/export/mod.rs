//! Export module
//!
//! - CSV: expense rows (spreadsheet-compatible)
//! - JSON: full snapshot with derived figures
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
