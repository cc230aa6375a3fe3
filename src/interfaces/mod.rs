//! Adapters between the settlement core and the outside world: CSV input,
//! and CSV, JSON or plain-text output.

pub mod csv;
pub mod json;
pub mod summary;
