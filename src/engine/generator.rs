use {
    crate::{
        config::{VOLATILITY_PCT, constants::generator},
        domain::Candle,
    },
    rand::{Rng, SeedableRng, rngs::StdRng},
};

/// Bounded random walk over one pair's price. Each candle opens at the
/// previous close; the walk is scaled to a fixed fraction of the pair's base
/// price, so BTC and DOGE wiggle proportionally.
pub struct CandleGenerator {
    base_price: f64,
    rng: StdRng,
}

impl CandleGenerator {
    pub(crate) fn new(base_price: f64, seed: u64) -> Self {
        Self {
            base_price,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn next_candle(&mut self, prev: Option<&Candle>, timestamp_ms: i64) -> Candle {
        let open = prev.map(|c| c.close).unwrap_or(self.base_price);
        let volatility = self.base_price * VOLATILITY_PCT;

        let change = (self.rng.random::<f64>() - 0.5) * volatility;
        let close = open + change;

        let wick = volatility * generator::WICK_SCALE;
        let high = open.max(close) + self.rng.random::<f64>() * wick;
        let low = open.min(close) - self.rng.random::<f64>() * wick;

        Candle {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume: self
                .rng
                .random_range(generator::VOLUME_MIN..generator::VOLUME_MAX),
            delta: self
                .rng
                .random_range(-generator::DELTA_BOUND..generator::DELTA_BOUND),
        }
    }

    /// Seeds a full window of chained candles, backdated one interval apart
    /// so the newest candle lands on `now_ms`.
    pub(crate) fn initial_window(
        &mut self,
        count: usize,
        now_ms: i64,
        interval_ms: i64,
    ) -> Vec<Candle> {
        let mut window = Vec::with_capacity(count);
        for i in 0..count {
            let age = (count - 1 - i) as i64;
            let ts = now_ms - age * interval_ms;
            let candle = self.next_candle(window.last(), ts);
            window.push(candle);
        }
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CANDLE_WINDOW;

    #[test]
    fn high_and_low_bound_the_body() {
        let mut generator = CandleGenerator::new(43250.0, 99);
        let mut prev: Option<Candle> = None;
        for i in 0..500 {
            let c = generator.next_candle(prev.as_ref(), i);
            assert!(c.high >= c.open.max(c.close));
            assert!(c.low <= c.open.min(c.close));
            prev = Some(c);
        }
    }

    #[test]
    fn candles_chain_open_to_previous_close() {
        let mut generator = CandleGenerator::new(98.0, 4);
        let window = generator.initial_window(CANDLE_WINDOW, 1_000_000, 10_000);
        for pair in window.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
        assert_eq!(window[0].open, 98.0);
    }

    #[test]
    fn initial_window_is_backdated_at_interval_spacing() {
        let mut generator = CandleGenerator::new(2280.0, 5);
        let window = generator.initial_window(10, 100_000, 10_000);
        assert_eq!(window.len(), 10);
        assert_eq!(window.last().unwrap().timestamp_ms, 100_000);
        assert_eq!(window[0].timestamp_ms, 100_000 - 9 * 10_000);
        for pair in window.windows(2) {
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, 10_000);
        }
    }

    #[test]
    fn volume_and_delta_stay_in_range() {
        let mut g = CandleGenerator::new(0.52, 6);
        for i in 0..200 {
            let c = g.next_candle(None, i);
            assert!(c.volume >= generator::VOLUME_MIN && c.volume < generator::VOLUME_MAX);
            assert!(c.delta >= -generator::DELTA_BOUND && c.delta < generator::DELTA_BOUND);
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_sequence() {
        let mut a = CandleGenerator::new(310.0, 1234);
        let mut b = CandleGenerator::new(310.0, 1234);
        let wa = a.initial_window(CANDLE_WINDOW, 0, 10_000);
        let wb = b.initial_window(CANDLE_WINDOW, 0, 10_000);
        assert_eq!(wa, wb);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = CandleGenerator::new(310.0, 1);
        let mut b = CandleGenerator::new(310.0, 2);
        let wa = a.initial_window(10, 0, 10_000);
        let wb = b.initial_window(10, 0, 10_000);
        assert_ne!(wa, wb);
    }
}
