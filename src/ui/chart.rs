use {
    crate::{
        config::{CHART_VISIBLE_CANDLES, EVENT_MARKER_REACH, PLOT_CONFIG},
        domain::Candle,
        engine::PairFeed,
        models::{EventFeed, price_extents},
        ui::{
            UI_TEXT,
            plot_layers::{CandlestickLayer, ForecastLayer, LayerContext, PlotLayer},
        },
    },
    eframe::egui::{RichText, Ui},
    egui_plot::{Plot, PlotBounds},
};

/// Candlestick chart of the trailing visible slice, with event-flagged
/// candles outlined and an optional dashed forecast projection.
pub(crate) struct PriceChart<'a> {
    feed: &'a PairFeed,
    events: &'a EventFeed,
    slot_label: &'static str,
    interval_ms: i64,
    show_forecast: bool,
}

impl<'a> PriceChart<'a> {
    pub(crate) fn new(
        feed: &'a PairFeed,
        events: &'a EventFeed,
        slot_label: &'static str,
        interval_ms: i64,
        show_forecast: bool,
    ) -> Self {
        Self {
            feed,
            events,
            slot_label,
            interval_ms,
            show_forecast,
        }
    }

    pub(crate) fn render(&self, ui: &mut Ui) {
        let window = self.feed.window();
        let start = window.len().saturating_sub(CHART_VISIBLE_CANDLES);
        let visible = &window[start..];
        if visible.is_empty() {
            return;
        }

        let event_marks = self.mark_candles_near_events(visible);
        let forecast = self.feed.forecast();

        let (mut y_min, mut y_max) = price_extents(visible).unwrap_or((0.0, 1.0));
        if self.show_forecast {
            for price in forecast {
                y_min = y_min.min(*price);
                y_max = y_max.max(*price);
            }
        }
        let pad = (y_max - y_min).max(f64::EPSILON) * PLOT_CONFIG.plot_y_padding_pct;

        let x_max = if self.show_forecast {
            (visible.len() + forecast.len()) as f64
        } else {
            visible.len() as f64
        };

        let ctx = LayerContext {
            candles: visible,
            event_marks: &event_marks,
            forecast,
            show_forecast: self.show_forecast,
        };

        Plot::new(("price_chart", self.slot_label))
            .height(PLOT_CONFIG.plot_height_price)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .label_formatter(|_, _| String::new())
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [-0.5, y_min - pad],
                    [x_max - 0.5, y_max + pad],
                ));
                CandlestickLayer.render(plot_ui, &ctx);
                ForecastLayer.render(plot_ui, &ctx);
            });

        ui.label(
            RichText::new(UI_TEXT.chart_caption)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    }

    /// A candle is marked when any of this pair's events landed within
    /// EVENT_MARKER_REACH refresh intervals of it.
    fn mark_candles_near_events(&self, visible: &[Candle]) -> Vec<bool> {
        let reach_ms = (EVENT_MARKER_REACH * self.interval_ms as f64) as i64;
        visible
            .iter()
            .map(|candle| {
                self.events
                    .for_pair(self.feed.pair())
                    .any(|e| (e.timestamp_ms - candle.timestamp_ms).abs() < reach_ms)
            })
            .collect()
    }
}
