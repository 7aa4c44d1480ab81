//! irah-storage
//!
//! The evaluation record store. One trait, three backends: a JSON-lines file
//! on local disk, a JSON-lines object in S3 guarded by ETag preconditions,
//! and an in-memory store for tests and dry runs.

pub mod client;
pub mod codec;
pub mod error;
pub mod local;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;
