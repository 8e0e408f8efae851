//! examtrack-core — Exam record model and statistics engine.
//!
//! This crate defines the record types and the pure aggregation functions
//! that the rest of examtrack builds on. Everything here operates on
//! in-memory snapshots; persistence lives in `examtrack-store`.

pub mod error;
pub mod model;
pub mod stats;
