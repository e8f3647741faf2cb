//! Modal dialogs

pub mod budget;
pub mod confirm;
pub mod expense;
pub mod help;
