use {
    crate::domain::{Candle, TradingPair},
    itertools::Itertools,
};

/// Derived per-pair snapshot. Recomputed wholesale on every tick,
/// never mutated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    pub pair: TradingPair,
    /// Latest candle close.
    pub price: f64,
    /// Percent change from the first candle's open in the window.
    pub change_24h_pct: f64,
    /// Sum of volume over the window.
    pub volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub last_update_ms: i64,
}

impl MarketData {
    pub(crate) fn from_window(pair: TradingPair, candles: &[Candle], now_ms: i64) -> Self {
        let Some(latest) = candles.last() else {
            return Self::empty(pair, now_ms);
        };
        let first_open = candles[0].open;

        let change_24h_pct = if first_open.abs() > f64::EPSILON {
            (latest.close - first_open) / first_open * 100.0
        } else {
            0.0
        };

        let high_24h = candles
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let low_24h = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);

        Self {
            pair,
            price: latest.close,
            change_24h_pct,
            volume: candles.iter().map(|c| c.volume).sum(),
            high_24h,
            low_24h,
            last_update_ms: now_ms,
        }
    }

    fn empty(pair: TradingPair, now_ms: i64) -> Self {
        Self {
            pair,
            price: pair.base_price(),
            change_24h_pct: 0.0,
            volume: 0.0,
            high_24h: pair.base_price(),
            low_24h: pair.base_price(),
            last_update_ms: now_ms,
        }
    }
}

/// Price span of the visible candles, used for chart y-bounds.
pub(crate) fn price_extents(candles: &[Candle]) -> Option<(f64, f64)> {
    let lows = candles.iter().map(|c| c.low);
    let highs = candles.iter().map(|c| c.high);
    lows.chain(highs)
        .minmax_by(|a, b| a.total_cmp(b))
        .into_option()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Candle {
        Candle {
            timestamp_ms: 0,
            open,
            high,
            low,
            close,
            volume,
            delta: 0.0,
        }
    }

    #[test]
    fn snapshot_summarizes_window() {
        let window = vec![
            candle(100.0, 110.0, 95.0, 104.0, 10.0),
            candle(104.0, 112.0, 101.0, 108.0, 20.0),
        ];
        let data = MarketData::from_window(TradingPair::BtcUsdt, &window, 42);

        assert_eq!(data.price, 108.0);
        assert_eq!(data.high_24h, 112.0);
        assert_eq!(data.low_24h, 95.0);
        assert_eq!(data.volume, 30.0);
        assert!((data.change_24h_pct - 8.0).abs() < 1e-9);
        assert_eq!(data.last_update_ms, 42);
    }

    #[test]
    fn empty_window_falls_back_to_base_price() {
        let data = MarketData::from_window(TradingPair::EthUsdt, &[], 0);
        assert_eq!(data.price, TradingPair::EthUsdt.base_price());
        assert_eq!(data.change_24h_pct, 0.0);
    }

    #[test]
    fn extents_cover_lows_and_highs() {
        let window = vec![
            candle(100.0, 110.0, 95.0, 104.0, 1.0),
            candle(104.0, 120.0, 99.0, 108.0, 1.0),
        ];
        assert_eq!(price_extents(&window), Some((95.0, 120.0)));
        assert_eq!(price_extents(&[]), None);
    }
}
