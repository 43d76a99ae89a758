// src/core/mod.rs

// Root of the `core` module: the data model and the scanning engine live
// here, with no knowledge of the HTTP surface that invokes them.

/// Data structures shared across the crate: the validated `ScanTarget`,
/// the per-probe report records, and the composed `ScanReport`.
pub mod models;

/// The four diagnostic probes and the aggregation logic that fans them out
/// and combines their sub-scores into the overall score.
pub mod scanner;
