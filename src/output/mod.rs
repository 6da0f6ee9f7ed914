//! Report output
//!
//! Plain-text report layout and line formatting helpers.

pub mod formatters;
pub mod report;

pub use report::{FOOTER, failure_lines, format_report, header_lines, stats_lines};
