//! Present value of an ordered series of future cash flows.

use fincalc_core::{require, Rate, Real, Result};

/// Discounting policy for a series of future-dated cash flows.
///
/// The series position encodes time: the first element occurs at period 1,
/// the second at period 2, and so on.  There is no period-0 entry – every
/// cash flow is discounted at least once.  A caller with an immediate
/// (undiscounted) flow nets it outside this calculation.
///
/// `PV = Σ_i cash_flows[i] / (1 + r)^(i+1)`
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentValue;

impl PresentValue {
    /// Present value of `cash_flows` discounted at the per-period
    /// `discount_rate` (decimal, e.g. 0.05 for 5 %).
    ///
    /// Negative and zero amounts are legal and pass through the arithmetic
    /// unchanged.
    ///
    /// # Errors
    /// [`InvalidArgument`](fincalc_core::Error::InvalidArgument) if
    /// `cash_flows` is empty or `discount_rate <= -1`.
    pub fn calculate(discount_rate: Rate, cash_flows: &[Real]) -> Result<Real> {
        require!(
            discount_rate > -1.0,
            "discount rate must exceed -1, got {discount_rate}"
        );
        require!(!cash_flows.is_empty(), "cash flows must not be empty");

        let base = 1.0 + discount_rate;
        let mut pv = 0.0;
        for (i, amount) in cash_flows.iter().enumerate() {
            // first cash flow is one period out, so discount i+1 times
            pv += amount / base.powi(i as i32 + 1);
        }
        Ok(pv)
    }
}
