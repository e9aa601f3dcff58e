//! Common types and helpers for all aggregates

pub mod aggregate_id;
pub mod names;

// Re-exports
pub use aggregate_id::AggregateId;
pub use names::{normalize_name, same_name};
