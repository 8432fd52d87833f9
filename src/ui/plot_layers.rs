use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Polygon};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Candle;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    /// The visible tail of the window; candle i draws at x = i.
    pub candles: &'a [Candle],
    /// Per-candle flag: a market event landed near this candle.
    pub event_marks: &'a [bool],
    /// Projected prices continuing past the last candle.
    pub forecast: &'a [f64],
    pub show_forecast: bool,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// CANDLESTICK LAYER
// ============================================================================
pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (idx, candle) in ctx.candles.iter().enumerate() {
            let x = idx as f64;
            let is_green = candle.close >= candle.open;
            let color = if is_green {
                PLOT_CONFIG.candle_bullish_color
            } else {
                PLOT_CONFIG.candle_bearish_color
            };

            draw_wick_line(plot_ui, x, candle.high, candle.low, color);

            let (body_bot_raw, body_top_raw) = candle.body_range();
            // Doji check
            let body_top = if (body_top_raw - body_bot_raw).abs() < f64::EPSILON {
                body_bot_raw * 1.0001
            } else {
                body_top_raw
            };

            let marked = ctx.event_marks.get(idx).copied().unwrap_or(false);
            draw_body_rect(plot_ui, x, body_top, body_bot_raw, color, marked);
        }
    }
}

// ============================================================================
// FORECAST LAYER (dashed projection continuing the last candle)
// ============================================================================
pub struct ForecastLayer;

impl PlotLayer for ForecastLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.show_forecast || ctx.forecast.is_empty() {
            return;
        }
        let Some(last) = ctx.candles.last() else {
            return;
        };

        let anchor_x = (ctx.candles.len() - 1) as f64;
        let mut points = Vec::with_capacity(ctx.forecast.len() + 1);
        points.push([anchor_x, last.close]);
        for (i, price) in ctx.forecast.iter().enumerate() {
            points.push([anchor_x + (i + 1) as f64, *price]);
        }

        plot_ui.line(
            Line::new("", PlotPoints::new(points))
                .color(PLOT_CONFIG.forecast_color)
                .width(PLOT_CONFIG.forecast_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.forecast_dash_length,
                }),
        );
    }
}

// --- HELPERS ---

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32, marked: bool) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    // Event-flagged candles get an accent outline instead of a clean body
    let stroke = if marked {
        Stroke::new(
            PLOT_CONFIG.event_marker_width,
            PLOT_CONFIG.event_marker_color,
        )
    } else {
        Stroke::NONE
    };

    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(stroke),
    );
}
