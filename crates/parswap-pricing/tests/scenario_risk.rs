//! Integration test: par rate and curve risk of the 9Y receiver on the
//! bootstrapped scenario curves.

use approx::assert_abs_diff_eq;

use parswap_core::Date;
use parswap_curves::bootstrap::CurveBootstrapper;
use parswap_curves::quotes::MarketQuotes;
use parswap_pricing::{RiskCalculator, RiskConfig, Swap, SwapEngine, SwapSpec};

const SPREAD_BPS: f64 = -38.0;

fn trade_date() -> Date {
    Date::from_ymd(2026, 1, 7).unwrap()
}

fn par_swap() -> Swap {
    let quotes = MarketQuotes::sample();
    let curves = CurveBootstrapper::new(trade_date())
        .bootstrap(&quotes, SPREAD_BPS)
        .unwrap()
        .into_curves();
    let spec = SwapSpec::new(trade_date(), 9, 1_000_000.0);
    let par = SwapEngine::new(&curves, quotes.fixing()).par_rate(&spec).unwrap();
    Swap::new(spec, par).unwrap()
}

#[test]
fn test_nine_year_par() {
    assert_abs_diff_eq!(par_swap().fixed_rate, 0.0308891, epsilon = 1e-4);
}

#[test]
fn test_dv01_and_gamma() {
    let swap = par_swap();
    let report = RiskCalculator::new(CurveBootstrapper::new(trade_date()))
        .dv01_and_gamma(&MarketQuotes::sample(), SPREAD_BPS, &swap)
        .unwrap();

    assert_abs_diff_eq!(report.base_pv, 0.0, epsilon = 1e-2);
    assert_abs_diff_eq!(report.dv01, -784.0, epsilon = 5.0);
    assert_abs_diff_eq!(report.gamma, 0.73, epsilon = 0.1);
    assert!(report.dv01 < 0.0);
    assert!(report.gamma >= 0.0);
}

#[test]
fn test_parallel_flag_gives_same_figures() {
    let swap = par_swap();
    let quotes = MarketQuotes::sample();
    let sequential = RiskCalculator::new(CurveBootstrapper::new(trade_date()))
        .dv01_and_gamma(&quotes, SPREAD_BPS, &swap)
        .unwrap();
    let parallel = RiskCalculator::new(CurveBootstrapper::new(trade_date()))
        .with_config(RiskConfig::default().with_parallel(true))
        .dv01_and_gamma(&quotes, SPREAD_BPS, &swap)
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_zero_shift_dv01_is_close_to_rebootstrap() {
    let quotes = MarketQuotes::sample();
    let curves = CurveBootstrapper::new(trade_date())
        .bootstrap(&quotes, SPREAD_BPS)
        .unwrap()
        .into_curves();
    let swap = par_swap();
    let calculator = RiskCalculator::new(CurveBootstrapper::new(trade_date()));

    let zero_shift = calculator.zero_shift_dv01(&curves, quotes.fixing(), &swap).unwrap();
    let rebootstrap = calculator.dv01_and_gamma(&quotes, SPREAD_BPS, &swap).unwrap().dv01;

    assert!(zero_shift < 0.0);
    assert!((zero_shift - rebootstrap).abs() < 0.1 * rebootstrap.abs());
}
