//! irah-analytics
//!
//! Aggregate views over the evaluation history: headline summary, tier
//! distribution, daily volume, scale means and correlations, and the
//! filtered tables shown on the dashboard. Pure functions over slices of
//! records; loading the history is the caller's job.

pub mod dashboard;
pub mod distribution;
pub mod stats;
pub mod summary;
pub mod table;
