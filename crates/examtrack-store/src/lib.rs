//! examtrack-store — durable JSON collection of exam records.
//!
//! The store owns the on-disk record list and hands out snapshots for the
//! statistics engine to consume. Every mutating operation persists before
//! returning, so the data file is always the source of truth.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
