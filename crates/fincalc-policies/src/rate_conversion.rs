//! Conversion of a nominal rate to an effective annual rate.

use fincalc_core::{require, Integer, Rate, Result};

/// Policy converting a stated (nominal) annual rate into the effective
/// annual rate realized under intra-year compounding.
///
/// `EAR = (1 + r/n)^n − 1` for `n` compounding periods per year.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestRateConversion;

impl InterestRateConversion {
    /// Effective annual rate for `nominal_rate` (decimal) compounded
    /// `compounding_periods` times per year.
    ///
    /// Annual compounding (`compounding_periods == 1`) returns
    /// `nominal_rate` itself: mathematically the two are identical, and
    /// skipping the general formula keeps them identical in floating point
    /// as well.
    ///
    /// # Errors
    /// [`InvalidArgument`](fincalc_core::Error::InvalidArgument) if
    /// `compounding_periods <= 0` or `nominal_rate <= -1`.
    pub fn calculate(nominal_rate: Rate, compounding_periods: Integer) -> Result<Rate> {
        require!(
            nominal_rate > -1.0,
            "nominal rate must exceed -1, got {nominal_rate}"
        );
        require!(
            compounding_periods > 0,
            "compounding periods must be > 0, got {compounding_periods}"
        );

        if compounding_periods == 1 {
            return Ok(nominal_rate);
        }
        let n = compounding_periods as Rate;
        Ok((1.0 + nominal_rate / n).powi(compounding_periods) - 1.0)
    }
}
