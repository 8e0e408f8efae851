//! Subcommand implementations.

pub mod add;
pub mod distribution;
pub mod list;
pub mod manage;
pub mod stats;
pub mod transfer;
pub mod trend;
