//! BookBot
//!
//! Word count and letter frequency report for a plain-text book.
//!
//! # Quick Start
//!
//! ```rust
//! use bookbot::commands::analyze;
//! use bookbot::core::Document;
//! use std::path::Path;
//!
//! let stats = analyze(&Document::new("Bb. Aa!"));
//! for line in stats.report_lines(Path::new("tiny.txt")) {
//!     println!("{line}");
//! }
//! ```

// Core domain types
pub mod core;

// Reading books from disk
pub mod books;

// Command implementations
pub mod commands;

// Report formatting
pub mod output;
