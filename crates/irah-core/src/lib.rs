//! irah-core
//!
//! Pure domain types, the canonical record schema, and store key conventions.
//! No I/O. This is the shared vocabulary of the IRAH system.

pub mod error;
pub mod models;
pub mod schema;
pub mod store_keys;
