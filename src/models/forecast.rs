use {
    crate::{config::VOLATILITY_PCT, domain::Candle},
    rand::{Rng, SeedableRng, rngs::StdRng},
};

/// Lazy random-walk extension of the latest trend. Drawn as a dashed
/// projection line only; it claims nothing about future prices and is never
/// checked against later candles.
pub struct ForecastPath {
    price: f64,
    drift: f64,
    volatility: f64,
    remaining: usize,
    rng: StdRng,
}

impl ForecastPath {
    pub(crate) fn new(window: &[Candle], base_price: f64, steps: usize, seed: u64) -> Self {
        let price = window.last().map(|c| c.close).unwrap_or(base_price);
        // Continue the most recent close-to-close move
        let drift = match window.len() {
            0 | 1 => 0.0,
            n => window[n - 1].close - window[n - 2].close,
        };
        Self {
            price,
            drift,
            volatility: base_price * VOLATILITY_PCT,
            remaining: steps,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Iterator for ForecastPath {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let noise = (self.rng.random::<f64>() - 0.5) * self.volatility;
        self.price += self.drift + noise;
        Some(self.price)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(close: f64) -> Candle {
        Candle {
            timestamp_ms: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1.0,
            delta: 0.0,
        }
    }

    #[test]
    fn yields_exactly_n_points() {
        let window = vec![candle(100.0), candle(101.0)];
        let path: Vec<f64> = ForecastPath::new(&window, 100.0, 12, 9).collect();
        assert_eq!(path.len(), 12);
    }

    #[test]
    fn same_seed_reproduces_path() {
        let window = vec![candle(100.0), candle(101.0)];
        let a: Vec<f64> = ForecastPath::new(&window, 100.0, 8, 77).collect();
        let b: Vec<f64> = ForecastPath::new(&window, 100.0, 8, 77).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn upward_drift_dominates_bounded_noise() {
        // drift 10 per step vs noise bounded by +/-0.1: strictly rising
        let window = vec![candle(100.0), candle(110.0)];
        let path: Vec<f64> = ForecastPath::new(&window, 100.0, 10, 5).collect();
        let mut last = 110.0;
        for p in path {
            assert!(p > last);
            last = p;
        }
    }

    #[test]
    fn empty_window_starts_at_base_price() {
        let mut path = ForecastPath::new(&[], 50.0, 3, 1);
        let first = path.next().unwrap();
        // no drift, only noise around the base price
        assert!((first - 50.0).abs() <= 50.0 * VOLATILITY_PCT);
    }
}
