//! # fincalc
//!
//! Policy-based financial calculators: present value of a cash-flow
//! series, future value under compound growth, and nominal-to-effective
//! annual rate conversion.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `fincalc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! fincalc = "0.1"
//! ```
//!
//! ```rust
//! use fincalc::policies::{Calculator, FutureValue};
//!
//! let fv_calc = Calculator::<FutureValue>::new();
//! let fv = fv_calc.calculate(1000.0, 0.05, 10)?;
//! assert!((fv - 1628.89).abs() < 0.01);
//! # Ok::<(), fincalc::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fincalc_core as core;

/// Calculation policies and the generic `Calculator` wrapper.
pub use fincalc_policies as policies;
