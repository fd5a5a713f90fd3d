//! Query module for read-only operations
//!
//! Deterministic, read-only views for the rendering collaborator. No query
//! mutates the store; all orderings are documented tie-break rules, never
//! hash iteration order.

pub mod resource_queries;

pub use resource_queries::{
    documentation_of, friendly_name_of, location_of, media_types, methods_of,
    resources_with_methods, template_vars_of,
};
