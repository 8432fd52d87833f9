//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one x step)
    pub candle_wick_width: f32, // Pixels
    /// Stroke drawn around a candle body that coincides with a market event
    pub event_marker_color: Color32,
    pub event_marker_width: f32,

    // --- FORECAST OVERLAY ---
    pub forecast_color: Color32,
    pub forecast_dash_length: f32,
    pub forecast_line_width: f32,

    // --- VOLUME / DELTA BARS ---
    pub volume_bar_opacity: f32,
    pub delta_bar_opacity: f32,

    pub plot_y_padding_pct: f64, // Y-Axis padding factor (e.g. 0.05 = 5% top and bottom)

    // --- SEMANTIC COLORS ---
    pub color_gain: Color32,
    pub color_loss: Color32,
    pub color_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,

    // --- EVENT BADGES ---
    pub badge_high_volume: Color32,
    pub badge_divergence: Color32,
    pub badge_ema_cross: Color32,
    pub badge_oversold: Color32,
    pub badge_overbought: Color32,

    pub plot_height_price: f32,
    pub plot_height_volume: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_wick_width: 1.0,
    event_marker_color: Color32::from_rgb(255, 215, 0), // Gold
    event_marker_width: 1.5,

    forecast_color: Color32::from_rgb(120, 170, 240),
    forecast_dash_length: 6.0,
    forecast_line_width: 1.5,

    volume_bar_opacity: 0.5,
    delta_bar_opacity: 0.6,

    plot_y_padding_pct: 0.05,

    color_gain: Color32::from_rgb(38, 166, 154),
    color_loss: Color32::from_rgb(239, 83, 80),
    color_neutral: Color32::GRAY,
    color_text_primary: Color32::WHITE,
    color_text_subdued: Color32::GRAY,

    badge_high_volume: Color32::from_rgb(0, 191, 255),
    badge_divergence: Color32::from_rgb(148, 0, 211),
    badge_ema_cross: Color32::from_rgb(255, 165, 0),
    badge_oversold: Color32::from_rgb(38, 166, 154),
    badge_overbought: Color32::from_rgb(239, 83, 80),

    plot_height_price: 260.0,
    plot_height_volume: 110.0,
};
