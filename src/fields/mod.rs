//! Hybrid field resolution core.
//!
//! - **[`model`]** — field definition and resource document types
//! - **[`cache`]** — TTL/LRU cache with single-flight discovery
//! - **[`fusion`]** — static + dynamic merge into one document
//! - **[`suggest`]** — fuzzy field-name suggestion engine
pub mod cache;
pub mod fusion;
pub mod model;
pub mod suggest;
