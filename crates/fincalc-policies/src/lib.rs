//! # fincalc-policies
//!
//! The three calculation policies and the generic [`Calculator`] wrapper.
//!
//! Each policy is a stateless unit struct exposing an associated
//! `calculate` function – a pure mapping from typed inputs to a [`Real`]
//! result, validating its own preconditions.  The [`Calculator`] wrapper
//! binds one policy at compile time and forwards calls to it verbatim.
//!
//! [`Real`]: fincalc_core::Real

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The policy-parameterized calculator wrapper.
pub mod calculator;

/// Future value under compound growth.
pub mod future_value;

/// Present value of a cash-flow series.
pub mod present_value;

/// Nominal-to-effective annual rate conversion.
pub mod rate_conversion;

pub use calculator::Calculator;
pub use future_value::FutureValue;
pub use present_value::PresentValue;
pub use rate_conversion::InterestRateConversion;
