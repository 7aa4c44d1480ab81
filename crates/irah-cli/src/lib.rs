//! irah-cli library root.
//!
//! Exposes the config layer, the store backend selection, and the
//! evaluation orchestrator so integration tests can drive them without
//! going through argument parsing.

pub mod backend;
pub mod config;
pub mod evaluator;
