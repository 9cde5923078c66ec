//! # fincalc-core
//!
//! Core types and error definitions for fincalc-rs.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace – primitive type aliases, the error type, and the `require!`
//! validation macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `require!` validation macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// Signed integer type used for period counts.
///
/// Deliberately signed: a negative count is an input error the validation
/// layer must be able to observe and reject, not a value the type system
/// makes unrepresentable.
pub type Integer = i32;

/// Alias used for sequence sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
