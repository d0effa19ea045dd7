//! # yamada-core
//!
//! Core types shared by the yamada-tools crates.
//!
//! This crate provides the error type and the [`Session`] context that
//! carries the evaluation date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Session context (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Session;
