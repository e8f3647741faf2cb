//! Audit logging
//!
//! Records every expense creation, expense deletion and budget change in an
//! append-only, line-delimited JSON log (`audit.log`).
//!
//! - `Change`: an added or deleted expense, or a budget change
//! - `AuditEntry`: a timestamped `Change`
//! - `AuditLogger`: appends entries and reads them back for `budget history`

mod entry;
mod logger;

pub use entry::{AuditEntry, Change};
pub use logger::AuditLogger;
