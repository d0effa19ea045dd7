//! # yamada-tools
//!
//! The Japanese national holiday calculator (祝日確認) of Yamada Tools.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! what the `yamada-holidays` command needs on top of them: TOML
//! configuration, logging setup, and plain-text / JSON reports.
//!
//! ## Quick start
//!
//! ```rust
//! use yamada_tools::time::japanese_holidays;
//!
//! let holidays = japanese_holidays(2024);
//! assert_eq!(holidays[0].name(), "元日");
//! assert!(holidays.iter().any(|h| h.name() == "振替休日"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the session context.
pub use yamada_core as core;

/// Dates, calendars, and the holiday calculator.
pub use yamada_time as time;

pub mod config;
pub mod logging;
pub mod report;
