//! Cranial measurement classification and follow-up scheduling.
//!
//! A stateless, synchronous engine: raw caliper measurements go in, derived
//! indices, two independent classification scales (type/severity and CHOA),
//! growth-curve percentiles, recommendations and a reassessment schedule come
//! out. Reference tables are static and read-only, so every function is safe
//! to call from any thread without coordination.

pub mod assessment;
pub mod classify;
pub mod config;
pub mod curves;
pub mod error;
pub mod indices;
pub mod recommend;
pub mod report_helpers;
pub mod schedule;
