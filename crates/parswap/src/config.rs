//! Desk configuration.
//!
//! One serde document carries everything a desk session needs: market
//! quotes, the discount spread, the swap terms and the bootstrap and risk
//! settings.

use serde::{Deserialize, Serialize};

use parswap_core::Date;
use parswap_curves::bootstrap::BootstrapConfig;
use parswap_curves::quotes::MarketQuotes;
use parswap_pricing::{RiskConfig, SwapSpec};

use crate::error::{DeskError, DeskResult, ValidationError};

/// Configuration of a [`SwapDesk`](crate::SwapDesk) session.
///
/// # Example
///
/// ```rust
/// use parswap::DeskConfig;
///
/// let config = DeskConfig::scenario().unwrap();
/// let json = config.to_json().unwrap();
/// assert_eq!(DeskConfig::from_json(&json).unwrap(), config);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Fixing and par quotes.
    pub quotes: MarketQuotes,
    /// Discount spread over IBOR in basis points.
    pub spread_bps: f64,
    /// Terms of the swap to price.
    pub swap: SwapSpec,
    /// Seasoning horizon in years for the seasoned valuation.
    pub horizon_years: f64,
    /// Bootstrap settings.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    /// Risk settings.
    #[serde(default)]
    pub risk: RiskConfig,
}

impl DeskConfig {
    /// Creates a configuration with default bootstrap and risk settings.
    pub fn new(quotes: MarketQuotes, spread_bps: f64, swap: SwapSpec, horizon_years: f64) -> Self {
        Self {
            quotes,
            spread_bps,
            swap,
            horizon_years,
            bootstrap: BootstrapConfig::default(),
            risk: RiskConfig::default(),
        }
    }

    /// The scenario: 9Y $1MM receiver traded 2026-01-07, spread -38bp,
    /// valued 3 months after inception.
    pub fn scenario() -> DeskResult<Self> {
        let trade = Date::from_ymd(2026, 1, 7)?;
        Ok(Self::new(
            MarketQuotes::sample(),
            -38.0,
            SwapSpec::new(trade, 9, 1_000_000.0),
            0.25,
        ))
    }

    /// Sets the bootstrap settings.
    #[must_use]
    pub fn with_bootstrap(mut self, bootstrap: BootstrapConfig) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Sets the risk settings.
    #[must_use]
    pub fn with_risk(mut self, risk: RiskConfig) -> Self {
        self.risk = risk;
        self
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> DeskResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json(&self) -> DeskResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every section, reporting all problems at once.
    pub fn validate(&self) -> DeskResult<()> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DeskError::Validation(errors))
        }
    }

    /// Collects validation errors.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.quotes.validate() {
            errors.push(ValidationError::new("quotes", e.to_string()));
        }
        if !self.spread_bps.is_finite() {
            errors.push(ValidationError::new("spread_bps", "must be finite"));
        }
        if let Err(e) = self.swap.validate() {
            errors.push(ValidationError::new("swap", e.to_string()));
        }
        if self.swap.maturity_years > self.quotes.max_tenor() {
            errors.push(ValidationError::new(
                "swap.maturity_years",
                format!(
                    "{}Y is beyond the longest quote ({}Y)",
                    self.swap.maturity_years,
                    self.quotes.max_tenor()
                ),
            ));
        }
        if !(self.horizon_years.is_finite() && self.horizon_years >= 0.0) {
            errors.push(ValidationError::new("horizon_years", "must be non-negative"));
        } else if self.horizon_years >= f64::from(self.swap.maturity_years) {
            errors.push(ValidationError::new(
                "horizon_years",
                "must fall before the swap matures",
            ));
        }
        if let Err(e) = self.bootstrap.validate() {
            errors.push(ValidationError::new("bootstrap", e.to_string()));
        }
        if self.bootstrap.conventions != self.swap.conventions {
            errors.push(ValidationError::new(
                "swap",
                "leg conventions must match the quoted instruments",
            ));
        }
        if let Err(e) = self.risk.validate() {
            errors.push(ValidationError::new("risk", e.to_string()));
        }

        errors
    }
}
