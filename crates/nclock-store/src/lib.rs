//! N-Clock Store - best-effort key-value persistence
//!
//! Two logical surfaces:
//! - `KvStore`: the host-provided key-value seam plus the JSON-file-backed
//!   production implementation
//! - record DTOs for the persisted data (presets, preset feature flag,
//!   settings) with full-replace fallback to built-in defaults on any
//!   parse failure
//!
//! There is no schema versioning and no durability guarantee beyond what a
//! synchronous file write provides.

pub mod kv;
pub mod records;

pub use kv::*;
pub use records::*;
