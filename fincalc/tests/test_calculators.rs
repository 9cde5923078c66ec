//! End-to-end checks through the façade: the three calculators working
//! together the way a caller would use them.

use approx::assert_abs_diff_eq;
use fincalc::core::{Error, Real};
use fincalc::policies::{Calculator, FutureValue, InterestRateConversion, PresentValue};

#[test]
fn future_value_round_trips_through_present_value() {
    // Grow 1000 for 5 periods at 8 %, then discount the single terminal
    // amount back: intermediate periods carry zero cash flows, the last
    // carries the future value.
    let principal = 1000.0;
    let rate = 0.08;
    let periods = 5;

    let fv_calc = Calculator::<FutureValue>::new();
    let pv_calc = Calculator::<PresentValue>::new();

    let fv = fv_calc.calculate(principal, rate, periods).unwrap();
    let mut flows = vec![0.0; periods as usize];
    flows[periods as usize - 1] = fv;
    let recovered = pv_calc.calculate(rate, &flows).unwrap();

    assert!(
        (recovered - principal).abs() < 1.0,
        "recovered {recovered}, expected {principal}"
    );
}

#[test]
fn effective_rate_reprices_a_monthly_deposit() {
    // Compounding 1000 monthly at a 12 % nominal rate for one year must
    // equal one period of growth at the effective annual rate.
    let ear_calc = Calculator::<InterestRateConversion>::new();
    let fv_calc = Calculator::<FutureValue>::new();

    let monthly = fv_calc.calculate(1000.0, 0.12 / 12.0, 12).unwrap();
    let ear = ear_calc.calculate(0.12, 12).unwrap();
    let annual = fv_calc.calculate(1000.0, ear, 1).unwrap();

    assert!(
        (monthly - annual).abs() < 1e-6,
        "monthly {monthly}, annual {annual}"
    );
}

#[test]
fn demo_scenario_values() {
    // The worked examples a user sees first.
    let pv = Calculator::<PresentValue>::new()
        .calculate(0.10, &[100.0])
        .unwrap();
    assert_abs_diff_eq!(pv, 90.909, epsilon = 0.01);

    let fv = Calculator::<FutureValue>::new()
        .calculate(1000.0, 0.05, 10)
        .unwrap();
    assert_abs_diff_eq!(fv, 1628.89, epsilon = 0.01);

    let ear = Calculator::<InterestRateConversion>::new()
        .calculate(0.12, 12)
        .unwrap();
    assert_abs_diff_eq!(ear, 0.1268, epsilon = 0.0001);
}

#[test]
fn failures_surface_as_invalid_argument_with_a_reason() {
    let cases: Vec<Result<Real, Error>> = vec![
        Calculator::<PresentValue>::new().calculate(0.05, &[]),
        Calculator::<PresentValue>::new().calculate(-1.0, &[100.0]),
        Calculator::<FutureValue>::new().calculate(-1000.0, 0.05, 10),
        Calculator::<FutureValue>::new().calculate(1000.0, 0.05, -1),
        Calculator::<InterestRateConversion>::new().calculate(0.12, 0),
    ];
    for result in cases {
        let err = result.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(!err.reason().is_empty());
    }
}
