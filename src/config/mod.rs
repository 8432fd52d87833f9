//! Configuration module for the market-observer application.

pub mod constants;

// Can't be private because we don't re-export its struct
pub mod plot;

pub use constants::{
    CANDLE_WINDOW, CHART_VISIBLE_CANDLES, EVENT_FEED_CAPACITY, EVENT_MARKER_REACH,
    EVENT_PROBABILITY, FORECAST_STEPS, REFRESH_INTERVAL, VOLATILITY_PCT,
};
pub use plot::PLOT_CONFIG;
