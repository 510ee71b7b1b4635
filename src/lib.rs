//! Library surface of the mercado backend.
//!
//! The binary in `main.rs` wires these modules together; integration tests
//! build the same router against an in-memory store.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
