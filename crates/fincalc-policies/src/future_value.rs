//! Future value of a principal under compound growth.

use fincalc_core::{require, Integer, Rate, Real, Result};

/// Compound-growth policy for a single principal amount.
///
/// `FV = principal · (1 + r)^n`
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureValue;

impl FutureValue {
    /// Value of `principal` after `periods` periods of compounding at the
    /// per-period `interest_rate` (decimal, e.g. 0.05 for 5 %).
    ///
    /// With `periods == 0` the growth factor is exactly 1 and the result
    /// equals `principal` bit-for-bit, whatever the (valid) rate.
    ///
    /// # Errors
    /// [`InvalidArgument`](fincalc_core::Error::InvalidArgument) if
    /// `principal < 0`, `periods < 0`, or `interest_rate <= -1`.
    pub fn calculate(principal: Real, interest_rate: Rate, periods: Integer) -> Result<Real> {
        require!(principal >= 0.0, "principal must be >= 0, got {principal}");
        require!(
            interest_rate > -1.0,
            "interest rate must exceed -1, got {interest_rate}"
        );
        require!(periods >= 0, "periods must be >= 0, got {periods}");

        Ok(principal * (1.0 + interest_rate).powi(periods))
    }
}
