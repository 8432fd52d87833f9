use std::time::Duration;

// Top Level Constants
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10); // Matches the "10s intervals" header badge

/// Candles retained per pair. Oldest is dropped on every tick.
pub const CANDLE_WINDOW: usize = 50;
/// Charts only draw the trailing slice of the window.
pub const CHART_VISIBLE_CANDLES: usize = 30;

/// Close-to-close perturbation scale, as a fraction of the pair's base price.
pub const VOLATILITY_PCT: f64 = 0.002;

pub const EVENT_FEED_CAPACITY: usize = 30;
/// Chance per pair per tick that a market event is emitted.
pub const EVENT_PROBABILITY: f64 = 0.3;
/// Events within this many refresh intervals of a candle get a chart marker.
pub const EVENT_MARKER_REACH: f64 = 1.5;

pub const FORECAST_STEPS: usize = 12;

pub mod book {
    /// Levels generated per side.
    pub const DEPTH: usize = 8;
    /// Levels actually shown in the panel.
    pub const VISIBLE_LEVELS: usize = 6;
    /// Fractional price step between adjacent levels (0.01%).
    pub const PRICE_STEP_PCT: f64 = 0.0001;
    pub const AMOUNT_MIN: f64 = 0.1;
    pub const AMOUNT_MAX: f64 = 2.1;
}

pub mod indicator {
    pub const FAST_EMA_PERIOD: usize = 5;
    pub const SLOW_EMA_PERIOD: usize = 10;
    pub const RSI_PERIOD: usize = 14;
    pub const VOLUME_AVG_PERIOD: usize = 20;

    pub const RSI_OVERBOUGHT: f64 = 70.0;
    pub const RSI_OVERSOLD: f64 = 30.0;
    pub const VOLUME_RATIO_BULLISH: f64 = 150.0;
    pub const VOLUME_RATIO_BEARISH: f64 = 50.0;
}

pub mod generator {
    /// Volume is drawn uniformly from this range per candle.
    pub const VOLUME_MIN: f64 = 500_000.0;
    pub const VOLUME_MAX: f64 = 1_500_000.0;
    /// Signed delta is drawn uniformly from +/- this bound.
    pub const DELTA_BOUND: f64 = 250_000.0;
    /// Wick extension relative to the close-to-close volatility.
    pub const WICK_SCALE: f64 = 0.5;
}
