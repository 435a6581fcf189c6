//! MCP tool modules.
//!
//! Tools are grouped by domain: catalog lookup and search, taxonomy
//! listings, workout plan builders, and exercise variations.

pub mod catalog;
pub mod taxonomy;
pub mod variations;
pub mod workouts;
