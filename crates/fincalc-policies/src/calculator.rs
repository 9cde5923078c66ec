//! Policy-based generic calculator.

use std::marker::PhantomData;

use fincalc_core::{Integer, Rate, Real, Result};

use crate::{FutureValue, InterestRateConversion, PresentValue};

/// A calculator bound to one calculation policy at compile time.
///
/// The wrapper owns no state and adds no behaviour: each instantiation
/// exposes a `calculate` method whose parameter list matches the bound
/// policy's exactly, forwards the arguments verbatim, and returns the
/// policy's result verbatim.  All validation lives in the policies.
///
/// The three policies have three different `calculate` signatures, so
/// there is deliberately no shared trait over them – each instantiation
/// gets its own inherent `impl` block instead of a runtime-polymorphic
/// base that the zero-overhead design has no use for.
///
/// Instances are `Copy` and freely shareable across threads; constructing
/// one once and calling it repeatedly is equivalent to constructing fresh
/// for each call.
///
/// # Example
/// ```
/// use fincalc_policies::{Calculator, PresentValue};
///
/// let pv_calc = Calculator::<PresentValue>::new();
/// let pv = pv_calc.calculate(0.05, &[100.0, 200.0, 300.0])?;
/// assert!(pv > 0.0);
/// # Ok::<(), fincalc_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator<P> {
    policy: PhantomData<P>,
}

impl<P> Calculator<P> {
    /// Create a calculator bound to the policy `P`.
    pub fn new() -> Self {
        Self {
            policy: PhantomData,
        }
    }
}

impl Calculator<PresentValue> {
    /// Forwards to [`PresentValue::calculate`].
    pub fn calculate(&self, discount_rate: Rate, cash_flows: &[Real]) -> Result<Real> {
        PresentValue::calculate(discount_rate, cash_flows)
    }
}

impl Calculator<FutureValue> {
    /// Forwards to [`FutureValue::calculate`].
    pub fn calculate(
        &self,
        principal: Real,
        interest_rate: Rate,
        periods: Integer,
    ) -> Result<Real> {
        FutureValue::calculate(principal, interest_rate, periods)
    }
}

impl Calculator<InterestRateConversion> {
    /// Forwards to [`InterestRateConversion::calculate`].
    pub fn calculate(&self, nominal_rate: Rate, compounding_periods: Integer) -> Result<Rate> {
        InterestRateConversion::calculate(nominal_rate, compounding_periods)
    }
}
