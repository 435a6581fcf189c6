//! Core types and services for exdb-mcp.
//!
//! This crate owns the cached HTTP client for the upstream `ExerciseDB` REST
//! API, exposes typed catalog queries over its endpoints, and provides the
//! selection and rendering recipes the workout tools are built from.

pub mod cache;
pub mod catalog;
pub mod fetch;
pub mod model;
pub mod plan;
pub mod render;
pub mod select;
