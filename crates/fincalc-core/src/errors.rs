//! Error types for fincalc-rs.
//!
//! Every failure in this library is an input-validation failure, so the
//! error type has a single `thiserror`-derived variant carrying the reason
//! string for the precondition that was violated.  Validation happens at
//! the top of each calculation, before any arithmetic; the library never
//! returns `NaN` or `±inf` for an input that validation should reject.

use thiserror::Error;

/// The top-level error type used throughout fincalc-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precondition on a calculation input was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// The human-readable reason attached to this error.
    pub fn reason(&self) -> &str {
        match self {
            Error::InvalidArgument(reason) => reason,
        }
    }
}

/// Shorthand `Result` type used throughout fincalc-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validates a calculation precondition.
///
/// Returns `Err(Error::InvalidArgument(...))` from the enclosing function
/// if `$cond` is false.
///
/// # Example
/// ```
/// use fincalc_core::{require, Real};
///
/// fn checked_sqrt(x: Real) -> fincalc_core::Result<Real> {
///     require!(x >= 0.0, "x must be non-negative, got {x}");
///     Ok(x.sqrt())
/// }
/// assert!(checked_sqrt(4.0).is_ok());
/// assert!(checked_sqrt(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! require {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
