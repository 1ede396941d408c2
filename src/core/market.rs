//! Simulated market data.
//!
//! Each instrument follows a multiplicative random walk: every day the
//! previous price is multiplied by `1 + draw`, where `draw` comes from a
//! normal distribution with the instrument's drift and volatility. All
//! randomness goes through [`DrawSource`] so a fixed seed reproduces the
//! same series bit for bit.
use crate::core::error::FlexError;
use chrono::{Duration, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_SEED: u64 = 42;
pub const SERIES_DAYS: usize = 30;

/// Source of per-step returns for the random walk.
pub trait DrawSource {
    fn draw(&mut self, mean: f64, std_dev: f64) -> Result<f64, FlexError>;
}

/// Normally distributed draws from a seeded `StdRng`.
pub struct SeededNormal {
    rng: StdRng,
}

impl SeededNormal {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededNormal {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DrawSource for SeededNormal {
    fn draw(&mut self, mean: f64, std_dev: f64) -> Result<f64, FlexError> {
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| FlexError::InvalidDistribution(format!("{e} (std_dev={std_dev})")))?;
        Ok(normal.sample(&mut self.rng))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Instrument {
    pub name: String,
    pub start_price: f64,
    /// Mean daily return
    pub drift: f64,
    /// Standard deviation of the daily return
    pub volatility: f64,
}

impl Instrument {
    pub fn new(name: &str, start_price: f64, drift: f64, volatility: f64) -> Self {
        Self {
            name: name.to_string(),
            start_price,
            drift,
            volatility,
        }
    }

    /// Volatility is a standard deviation, so it must be finite and non-negative.
    pub fn validate(&self) -> Result<(), FlexError> {
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(FlexError::InvalidDistribution(format!(
                "{}: volatility must be a finite, non-negative number, got {}",
                self.name, self.volatility
            )));
        }
        if !self.drift.is_finite() {
            return Err(FlexError::InvalidDistribution(format!(
                "{}: drift must be finite, got {}",
                self.name, self.drift
            )));
        }
        Ok(())
    }
}

/// The three index funds tracked on the market page.
pub fn default_instruments() -> Vec<Instrument> {
    vec![
        Instrument::new("S&P 500 (SPY)", 460.0, 0.0003, 0.008),
        Instrument::new("NASDAQ (QQQ)", 440.0, 0.0004, 0.01),
        Instrument::new("Total Market (VTI)", 230.0, 0.0003, 0.007),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    pub name: String,
    pub points: Vec<PricePoint>,
}

impl MarketSeries {
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Percentage change between the last two points.
    pub fn daily_change(&self) -> Option<f64> {
        match self.points.as_slice() {
            [.., prev, last] if prev.price != 0.0 => {
                Some((last.price - prev.price) / prev.price * 100.0)
            }
            _ => None,
        }
    }
}

/// Generates `days` daily points per instrument, the last one dated `today`.
///
/// Draws are taken one step at a time across all instruments, so adding or
/// reordering instruments changes every series.
pub fn generate_market_data(
    instruments: &[Instrument],
    today: NaiveDate,
    days: usize,
    source: &mut dyn DrawSource,
) -> Result<Vec<MarketSeries>, FlexError> {
    for instrument in instruments {
        instrument.validate()?;
    }

    let dates: Vec<NaiveDate> = (0..days)
        .rev()
        .map(|offset| today - Duration::days(offset as i64))
        .collect();

    let mut prices: Vec<Vec<f64>> = instruments
        .iter()
        .map(|i| {
            let mut series = Vec::with_capacity(days);
            if days > 0 {
                series.push(i.start_price);
            }
            series
        })
        .collect();

    for _ in 1..days {
        for (instrument, series) in instruments.iter().zip(prices.iter_mut()) {
            let draw = source.draw(instrument.drift, instrument.volatility)?;
            let last = series[series.len() - 1];
            series.push(last * (1.0 + draw));
        }
    }

    debug!(
        instruments = instruments.len(),
        days, "Generated simulated market data"
    );

    Ok(instruments
        .iter()
        .zip(prices)
        .map(|(instrument, series)| MarketSeries {
            name: instrument.name.clone(),
            points: dates
                .iter()
                .zip(series)
                .map(|(date, price)| PricePoint { date: *date, price })
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns each mean unchanged, which makes the walk fully predictable.
    struct MeanOnly;

    impl DrawSource for MeanOnly {
        fn draw(&mut self, mean: f64, _std_dev: f64) -> Result<f64, FlexError> {
            Ok(mean)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let instruments = default_instruments();
        let a = generate_market_data(
            &instruments,
            today(),
            SERIES_DAYS,
            &mut SeededNormal::new(DEFAULT_SEED),
        )
        .unwrap();
        let b = generate_market_data(
            &instruments,
            today(),
            SERIES_DAYS,
            &mut SeededNormal::new(DEFAULT_SEED),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_series() {
        let instruments = default_instruments();
        let a = generate_market_data(&instruments, today(), SERIES_DAYS, &mut SeededNormal::new(1))
            .unwrap();
        let b = generate_market_data(&instruments, today(), SERIES_DAYS, &mut SeededNormal::new(2))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_series_shape_and_dates() {
        let series = generate_market_data(
            &default_instruments(),
            today(),
            SERIES_DAYS,
            &mut SeededNormal::default(),
        )
        .unwrap();
        assert_eq!(series.len(), 3);
        for s in &series {
            assert_eq!(s.points.len(), 30);
            assert_eq!(s.latest().unwrap().date, today());
            assert_eq!(s.points[0].date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
            assert!(s.points.windows(2).all(|w| w[1].date - w[0].date == Duration::days(1)));
        }
        assert_eq!(series[0].points[0].price, 460.0);
        assert_eq!(series[1].points[0].price, 440.0);
        assert_eq!(series[2].points[0].price, 230.0);
    }

    #[test]
    fn test_walk_compounds_draws() {
        let instruments = vec![Instrument::new("Test", 100.0, 0.01, 0.0)];
        let series = generate_market_data(&instruments, today(), 3, &mut MeanOnly).unwrap();
        let prices: Vec<f64> = series[0].points.iter().map(|p| p.price).collect();
        let expected = [100.0, 101.0, 102.01];
        assert_eq!(prices.len(), expected.len());
        for (actual, expected) in prices.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
        }
        let change = series[0].daily_change().unwrap();
        assert!((change - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_volatility_is_rejected() {
        let instruments = vec![Instrument::new("Broken", 100.0, 0.0, -1.0)];
        let result = generate_market_data(&instruments, today(), 5, &mut SeededNormal::default());
        assert!(matches!(result, Err(FlexError::InvalidDistribution(_))));
    }

    #[test]
    fn test_bad_instruments_rejected_for_any_source() {
        for volatility in [-0.01, f64::NAN, f64::INFINITY] {
            let instruments = vec![Instrument::new("Broken", 100.0, 0.0, volatility)];
            let result = generate_market_data(&instruments, today(), 5, &mut MeanOnly);
            assert!(
                matches!(result, Err(FlexError::InvalidDistribution(_))),
                "volatility {volatility} was accepted"
            );
        }
        let instruments = vec![Instrument::new("Broken", 100.0, f64::NAN, 0.01)];
        assert!(generate_market_data(&instruments, today(), 5, &mut MeanOnly).is_err());

        // Zero volatility is a valid, if flat, distribution
        let instruments = vec![Instrument::new("Flat", 100.0, 0.0, 0.0)];
        let series = generate_market_data(&instruments, today(), 5, &mut SeededNormal::default())
            .unwrap();
        assert!(series[0].points.iter().all(|p| p.price == 100.0));
    }

    #[test]
    fn test_daily_change_needs_two_points() {
        let series = generate_market_data(&default_instruments(), today(), 1, &mut MeanOnly)
            .unwrap();
        assert!(series[0].daily_change().is_none());
        assert_eq!(series[0].latest().unwrap().price, 460.0);
    }
}
