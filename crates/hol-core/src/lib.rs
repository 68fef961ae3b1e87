//! # hol-core
//!
//! Core types and error definitions for the holiday engine.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: primitive type aliases and the error
//! taxonomy every date rule, calendar conversion, and catalog operation
//! reports through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A proleptic Gregorian (or lunisolar) calendar year.
pub type Year = i32;

/// A signed day count, used for offsets such as "Easter − 2".
pub type DayOffset = i32;

/// Day serial number (rata die: 0001-01-01 is day 1).
pub type Serial = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
