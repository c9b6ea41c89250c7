//! Integration test: the full desk scenario.
//!
//! 9Y $1MM receiver traded 2026-01-07 at its par rate, discount curve 38bp
//! below IBOR, valued 3 months after inception on curves bootstrapped from
//! the scenario quotes.

use approx::assert_abs_diff_eq;

use parswap::parswap_core::Date;
use parswap::parswap_curves::interpolation::InterpolationMethod;
use parswap::{DeskConfig, DeskError, SwapDesk};

fn desk() -> SwapDesk {
    SwapDesk::new(DeskConfig::scenario().unwrap()).unwrap()
}

#[test]
fn test_curve_table() {
    let table = desk().curve_table().unwrap();

    assert_eq!(table.len(), 7);
    assert_abs_diff_eq!(table[0].ibor_zero, 0.0411);
    assert_abs_diff_eq!(table[0].discount_zero, 0.0373, epsilon = 1e-15);

    let ten_year = table[6];
    assert_eq!(ten_year.time, 10.0);
    assert_abs_diff_eq!(ten_year.ibor_zero, 0.030215, epsilon = 1e-5);
    assert_abs_diff_eq!(ten_year.ibor_df, 0.73923, epsilon = 1e-4);
}

#[test]
fn test_par_and_risk() {
    let par_risk = desk().par_and_risk().unwrap();

    assert_abs_diff_eq!(par_risk.par_rate, 0.0308891, epsilon = 1e-4);
    assert_abs_diff_eq!(par_risk.risk.dv01, -784.0, epsilon = 5.0);
    assert_abs_diff_eq!(par_risk.risk.gamma, 0.73, epsilon = 0.1);
    assert!(par_risk.annuity > 7.0 && par_risk.annuity < 8.5);
    assert!(par_risk.zero_shift_dv01 < 0.0);
}

#[test]
fn test_seasoned_valuation() {
    let result = desk().seasoned_valuation().unwrap();

    assert_eq!(result.valuation_date, Date::from_ymd(2026, 4, 7).unwrap());
    assert_abs_diff_eq!(result.float_accrued(), 10_134.25, epsilon = 0.01);
    assert_abs_diff_eq!(result.fixed_accrued(), 7_618.20, epsilon = 0.5);
    assert_abs_diff_eq!(result.clean_pv, -371.47, epsilon = 2.0);
    assert!(result.clean_pv < 0.0);
}

#[test]
fn test_interpolation_comparison() {
    let desk = desk();
    let comparison = desk.compare_interpolation().unwrap();
    let seasoned = desk.seasoned_valuation().unwrap();

    assert_abs_diff_eq!(comparison.linear.clean_pv, seasoned.clean_pv, epsilon = 1e-9);
    assert!(comparison.spline.clean_pv > 0.0);
    assert_abs_diff_eq!(comparison.spline.clean_pv, 191.79, epsilon = 5.0);
    assert_abs_diff_eq!(
        comparison.clean_pv_difference,
        comparison.spline.clean_pv - comparison.linear.clean_pv
    );
    assert!(comparison.spline_par_rate < comparison.fixed_rate);
}

#[test]
fn test_run_report_serializes() {
    let report = desk().run().unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"curve_table\""));
    assert!(report.repricing.is_valid());
    assert_eq!(report.comparison.fixed_rate, report.par_risk.par_rate);
}

#[test]
fn test_spline_bootstrap_config_still_compares_against_linear() {
    let config = DeskConfig::scenario().unwrap().with_bootstrap(
        parswap::parswap_curves::bootstrap::BootstrapConfig::default()
            .with_interpolation(InterpolationMethod::CubicSpline)
            .with_short_end_anchor(true),
    );
    let desk = SwapDesk::new(config).unwrap();

    assert_eq!(desk.curves().interpolation(), InterpolationMethod::CubicSpline);
    let comparison = desk.compare_interpolation().unwrap();
    assert!(comparison.linear.clean_pv.is_finite());
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = DeskConfig::scenario().unwrap();
    config.swap.notional = -5.0;

    assert!(matches!(SwapDesk::new(config), Err(DeskError::Validation(_))));
}
