use {
    crate::{
        config::constants::indicator::{
            FAST_EMA_PERIOD, RSI_OVERBOUGHT, RSI_OVERSOLD, RSI_PERIOD, SLOW_EMA_PERIOD,
            VOLUME_AVG_PERIOD, VOLUME_RATIO_BEARISH, VOLUME_RATIO_BULLISH,
        },
        domain::Candle,
    },
    rand::Rng,
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IndicatorStatus {
    Bullish,
    Bearish,
    Neutral,
}

/// Named technical signal with a tri-state classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub name: &'static str,
    pub value: f64,
    pub status: IndicatorStatus,
}

/// Simple average of the last `period` closes. The dashboard labels these
/// "EMA", but the math is a plain mean.
fn trailing_close_average(candles: &[Candle], period: usize) -> f64 {
    let start = candles.len().saturating_sub(period);
    let tail = &candles[start..];
    if tail.is_empty() {
        return 0.0;
    }
    tail.iter().map(|c| c.close).sum::<f64>() / tail.len() as f64
}

/// 14-period RSI over one-period close differences. Mean loss of zero is
/// substituted with 1 so the ratio stays finite.
fn rsi(candles: &[Candle]) -> f64 {
    let start = candles.len().saturating_sub(RSI_PERIOD);
    let closes: Vec<f64> = candles[start..].iter().map(|c| c.close).collect();
    if closes.len() < 2 {
        return 50.0;
    }

    let diffs = closes.len() - 1;
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change >= 0.0 {
            gain_sum += change;
        } else {
            loss_sum -= change;
        }
    }

    let avg_gain = gain_sum / diffs as f64;
    let mut avg_loss = loss_sum / diffs as f64;
    if avg_loss == 0.0 {
        avg_loss = 1.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Latest volume over the trailing average volume, times 100.
fn volume_ratio(candles: &[Candle]) -> f64 {
    let Some(latest) = candles.last() else {
        return 0.0;
    };
    let start = candles.len().saturating_sub(VOLUME_AVG_PERIOD);
    let tail = &candles[start..];
    let avg = tail.iter().map(|c| c.volume).sum::<f64>() / tail.len() as f64;
    if avg <= f64::EPSILON {
        return 0.0;
    }
    (latest.volume / avg) * 100.0
}

/// The five-signal strip shown under each chart. Stoch14 carries no real
/// signal: its value and classification are uniformly random.
pub(crate) fn compute_indicators(candles: &[Candle], rng: &mut impl Rng) -> Vec<Indicator> {
    let latest_close = candles.last().map(|c| c.close).unwrap_or(0.0);

    let ema_fast = trailing_close_average(candles, FAST_EMA_PERIOD);
    let ema_slow = trailing_close_average(candles, SLOW_EMA_PERIOD);
    let rsi = rsi(candles);
    let vol_ratio = volume_ratio(candles);

    let cross_status = |fast: f64, slow: f64| {
        if fast > slow {
            IndicatorStatus::Bullish
        } else if fast < slow {
            IndicatorStatus::Bearish
        } else {
            IndicatorStatus::Neutral
        }
    };

    let rsi_status = if rsi > RSI_OVERBOUGHT {
        IndicatorStatus::Bearish
    } else if rsi < RSI_OVERSOLD {
        IndicatorStatus::Bullish
    } else {
        IndicatorStatus::Neutral
    };

    let volume_status = if vol_ratio > VOLUME_RATIO_BULLISH {
        IndicatorStatus::Bullish
    } else if vol_ratio < VOLUME_RATIO_BEARISH {
        IndicatorStatus::Bearish
    } else {
        IndicatorStatus::Neutral
    };

    let stoch_status = if rng.random_bool(0.5) {
        IndicatorStatus::Bullish
    } else {
        IndicatorStatus::Bearish
    };

    vec![
        Indicator {
            name: "EMA5",
            value: ema_fast,
            status: cross_status(ema_fast, ema_slow),
        },
        Indicator {
            name: "EMA10",
            value: ema_slow,
            status: cross_status(latest_close, ema_slow),
        },
        Indicator {
            name: "RSI14",
            value: rsi,
            status: rsi_status,
        },
        Indicator {
            name: "Stoch14",
            value: rng.random_range(0.0..100.0),
            status: stoch_status,
        },
        Indicator {
            name: "Volume",
            value: vol_ratio,
            status: volume_status,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn flat_candle(close: f64, volume: f64) -> Candle {
        Candle {
            timestamp_ms: 0,
            open: close,
            high: close,
            low: close,
            close,
            volume,
            delta: 0.0,
        }
    }

    fn ramp(start: f64, step: f64, count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| flat_candle(start + step * i as f64, 1000.0))
            .collect()
    }

    #[test]
    fn rsi_is_bounded() {
        let rising = ramp(100.0, 1.0, 30);
        let falling = ramp(100.0, -1.0, 30);
        for window in [rising, falling] {
            let value = rsi(&window);
            assert!((0.0..=100.0).contains(&value), "rsi {} out of range", value);
        }
    }

    #[test]
    fn rsi_all_gains_saturates_high() {
        // avg loss 0 is substituted with 1, so RSI stays below 100 but high
        let value = rsi(&ramp(100.0, 2.0, 20));
        assert!(value > 50.0 && value <= 100.0);
    }

    #[test]
    fn volume_ratio_is_non_negative() {
        let mut window = ramp(100.0, 0.5, 25);
        window.last_mut().unwrap().volume = 5000.0;
        assert!(volume_ratio(&window) >= 0.0);
        assert!(volume_ratio(&[]) >= 0.0);
    }

    #[test]
    fn averages_use_trailing_slice() {
        let window = ramp(0.0, 1.0, 10); // closes 0..=9
        // last 5 closes are 5,6,7,8,9
        assert!((trailing_close_average(&window, 5) - 7.0).abs() < 1e-9);
        // all 10 closes
        assert!((trailing_close_average(&window, 10) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn strip_has_five_named_signals() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = ramp(100.0, 0.1, 50);
        let strip = compute_indicators(&window, &mut rng);
        let names: Vec<&str> = strip.iter().map(|i| i.name).collect();
        assert_eq!(names, ["EMA5", "EMA10", "RSI14", "Stoch14", "Volume"]);
    }

    #[test]
    fn rising_closes_classify_bullish_cross() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = ramp(100.0, 1.0, 50);
        let strip = compute_indicators(&window, &mut rng);
        // fast average sits above slow average on a steady ramp
        assert_eq!(strip[0].status, IndicatorStatus::Bullish);
        assert_eq!(strip[1].status, IndicatorStatus::Bullish);
    }

    #[test]
    fn short_window_is_handled() {
        let mut rng = StdRng::seed_from_u64(7);
        let strip = compute_indicators(&ramp(100.0, 1.0, 3), &mut rng);
        assert_eq!(strip.len(), 5);
        assert!((0.0..=100.0).contains(&strip[2].value));
    }
}
