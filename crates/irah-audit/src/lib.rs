//! irah-audit
//!
//! Structured audit events for evaluation persistence, emitted through `tracing`.

pub mod events;
