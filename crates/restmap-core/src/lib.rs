//! restmap-core - resource-model canonicalization engine
//!
//! This crate builds a description of a web service's resources (endpoints,
//! HTTP methods, addresses, documentation) from redundant, partially
//! conflicting facts harvested by scanning annotated source code:
//! - Raw model store with idempotent discovery mutators
//! - Canonicalizer running the fixed-order `build()` passes: graph-to-tree
//!   conversion with cycle handling, address-template merge and ancestor
//!   concatenation, resource splitting and merging, name simplification
//! - Address-template specialization algebra
//! - Friendly-name derivation for display
//! - Deterministic read-only queries for a rendering collaborator
//! - Snapshot round-trip with digest verification for transport
//!
//! The engine is single-threaded and batch: discovery facts accumulate via
//! store mutators, `build()` runs once, and the result is only read.

pub mod canonicalize;
pub mod config;
pub mod errors;
pub mod model;
pub mod naming;
pub mod ops;
pub mod queries;
pub mod snapshot;
pub mod template;

// Re-export commonly used types
pub use canonicalize::Canonicalizer;
pub use config::Config;
pub use errors::{RestmapError, Result};
pub use model::{Method, Resource, TemplateVar, MEDIA_WILDCARD};
pub use ops::Store;
