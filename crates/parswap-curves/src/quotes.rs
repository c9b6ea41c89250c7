//! Market inputs for the bootstrap.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Time of the fixing knot in years (6M).
pub const FIXING_TENOR: f64 = 0.5;

/// A par swap quote for a whole-year tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParQuote {
    /// Tenor in years.
    pub tenor: u32,
    /// Par swap rate (decimal).
    pub rate: f64,
}

/// The 6M IBOR fixing plus par swap rates by tenor.
///
/// Quotes are kept sorted by tenor. Instances are immutable; bumped quote
/// sets are new values.
///
/// # Example
///
/// ```rust
/// use parswap_curves::quotes::MarketQuotes;
///
/// let quotes = MarketQuotes::new(0.0411, [(1, 0.0414), (2, 0.0373), (10, 0.0308)]).unwrap();
/// let up = quotes.bumped(1.0);
///
/// assert_eq!(up.fixing(), 0.0411);
/// assert!((up.rate_for(10).unwrap() - 0.0309).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuotes {
    fixing: f64,
    par_rates: Vec<ParQuote>,
}

impl MarketQuotes {
    /// Creates validated quotes from `(tenor, rate)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuotes` for an empty set, a zero or duplicated tenor,
    /// or a non-finite rate.
    pub fn new(fixing: f64, par_rates: impl IntoIterator<Item = (u32, f64)>) -> CurveResult<Self> {
        let mut par_rates: Vec<ParQuote> = par_rates
            .into_iter()
            .map(|(tenor, rate)| ParQuote { tenor, rate })
            .collect();
        par_rates.sort_by_key(|q| q.tenor);

        let quotes = Self { fixing, par_rates };
        quotes.validate()?;
        Ok(quotes)
    }

    /// The scenario market: 6M fixing 4.11% and par rates 1Y-10Y.
    #[must_use]
    pub fn sample() -> Self {
        let par_rates = [
            (1, 0.0414),
            (2, 0.0373),
            (3, 0.0348),
            (5, 0.0321),
            (7, 0.0311),
            (10, 0.0308),
        ];
        Self {
            fixing: 0.0411,
            par_rates: par_rates
                .into_iter()
                .map(|(tenor, rate)| ParQuote { tenor, rate })
                .collect(),
        }
    }

    /// Checks the invariants `new` enforces; used after deserialization.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.fixing.is_finite() {
            return Err(CurveError::invalid_quotes("fixing must be finite"));
        }
        if self.par_rates.is_empty() {
            return Err(CurveError::invalid_quotes("at least one par rate is required"));
        }
        for (i, q) in self.par_rates.iter().enumerate() {
            if q.tenor == 0 {
                return Err(CurveError::invalid_quotes("tenors must be at least 1Y"));
            }
            if !q.rate.is_finite() {
                return Err(CurveError::invalid_quotes(format!(
                    "{}Y rate is not finite",
                    q.tenor
                )));
            }
            if i > 0 && q.tenor <= self.par_rates[i - 1].tenor {
                return Err(CurveError::invalid_quotes(format!(
                    "tenors must be unique and ascending, {}Y repeats",
                    q.tenor
                )));
            }
        }
        Ok(())
    }

    /// The 6M IBOR fixing.
    #[must_use]
    pub fn fixing(&self) -> f64 {
        self.fixing
    }

    /// Par quotes in ascending tenor order.
    #[must_use]
    pub fn par_rates(&self) -> &[ParQuote] {
        &self.par_rates
    }

    /// Quoted tenors in ascending order.
    #[must_use]
    pub fn tenors(&self) -> Vec<u32> {
        self.par_rates.iter().map(|q| q.tenor).collect()
    }

    /// Longest quoted tenor.
    #[must_use]
    pub fn max_tenor(&self) -> u32 {
        self.par_rates.last().map_or(0, |q| q.tenor)
    }

    /// Par rate for a tenor, if quoted.
    #[must_use]
    pub fn rate_for(&self, tenor: u32) -> Option<f64> {
        self.par_rates.iter().find(|q| q.tenor == tenor).map(|q| q.rate)
    }

    /// Every par rate moved by `bps` basis points. The fixing is not shocked.
    #[must_use]
    pub fn bumped(&self, bps: f64) -> Self {
        let shift = bps / 10_000.0;
        Self {
            fixing: self.fixing,
            par_rates: self
                .par_rates
                .iter()
                .map(|q| ParQuote {
                    tenor: q.tenor,
                    rate: q.rate + shift,
                })
                .collect(),
        }
    }
}
