//! Application layer: the settlement engine and the reports built on top of it.
//!
//! [`settlement::SettlementEngine`] is a pure function from participants to
//! payments. [`report::SettlementReport`] resolves its output back to display
//! names for the interfaces.

pub mod report;
pub mod settlement;
