//! Service layer for the budget tracker
//!
//! Sits between the presentation layer and the store: every change goes
//! through here so it reaches disk and the audit log.

pub mod tracker;

pub use tracker::TrackerService;
