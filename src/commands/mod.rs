//! Command implementations

pub mod analyze;

pub use analyze::{TextStats, analyze};
