//! irah-export
//!
//! CSV export of the evaluation table and the plain-text dashboard report.

pub mod csv;
pub mod error;
pub mod report;
