//! Domain types shared by the settlement engine and its interfaces.
//!
//! Amounts are always integer minor units (e.g. cents). Conversion to and from
//! user-facing decimal text lives in [`money`].

pub mod money;
pub mod participant;
pub mod payment;
