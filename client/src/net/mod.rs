//! Networking modules for the grade-lookup endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single GET request and `types` defines its response
//! schema and the rendered result.

pub mod api;
pub mod types;
