//! CLI library components for the column profiler.

pub mod logging;
pub mod summary;
pub mod types;
