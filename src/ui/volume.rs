use {
    crate::{
        config::{CHART_VISIBLE_CANDLES, PLOT_CONFIG},
        domain::Candle,
        engine::PairFeed,
        ui::UI_TEXT,
    },
    eframe::egui::{Color32, RichText, Stroke, Ui},
    egui_plot::{Plot, PlotBounds, PlotPoints, PlotUi, Polygon},
};

/// Volume bars plus signed-delta bars for the visible candle slice.
pub(crate) struct VolumeChart<'a> {
    feed: &'a PairFeed,
    slot_label: &'static str,
}

impl<'a> VolumeChart<'a> {
    pub(crate) fn new(feed: &'a PairFeed, slot_label: &'static str) -> Self {
        Self { feed, slot_label }
    }

    pub(crate) fn render(&self, ui: &mut Ui) {
        let window = self.feed.window();
        let start = window.len().saturating_sub(CHART_VISIBLE_CANDLES);
        let visible = &window[start..];
        if visible.is_empty() {
            return;
        }

        ui.label(
            RichText::new(UI_TEXT.volume_caption)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
        self.render_volume_bars(ui, visible);

        ui.add_space(6.0);
        ui.label(
            RichText::new(UI_TEXT.delta_caption)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
        self.render_delta_bars(ui, visible);
    }

    fn render_volume_bars(&self, ui: &mut Ui, visible: &[Candle]) {
        let max_volume = visible.iter().map(|c| c.volume).fold(0.0, f64::max);

        bar_plot(ui, ("volume_bars", self.slot_label), 0.0, max_volume, |plot_ui| {
            for (idx, candle) in visible.iter().enumerate() {
                let color = if candle.close >= candle.open {
                    PLOT_CONFIG.candle_bullish_color
                } else {
                    PLOT_CONFIG.candle_bearish_color
                };
                draw_bar(
                    plot_ui,
                    idx as f64,
                    candle.volume,
                    color.linear_multiply(PLOT_CONFIG.volume_bar_opacity),
                );
            }
        });
    }

    fn render_delta_bars(&self, ui: &mut Ui, visible: &[Candle]) {
        let max_abs = visible.iter().map(|c| c.delta.abs()).fold(0.0, f64::max);

        bar_plot(ui, ("delta_bars", self.slot_label), -max_abs, max_abs, |plot_ui| {
            for (idx, candle) in visible.iter().enumerate() {
                let color = if candle.delta >= 0.0 {
                    PLOT_CONFIG.candle_bullish_color
                } else {
                    PLOT_CONFIG.candle_bearish_color
                };
                draw_bar(
                    plot_ui,
                    idx as f64,
                    candle.delta,
                    color.linear_multiply(PLOT_CONFIG.delta_bar_opacity),
                );
            }
        });
    }
}

fn bar_plot(
    ui: &mut Ui,
    id_salt: (&'static str, &'static str),
    y_min: f64,
    y_max: f64,
    draw: impl FnOnce(&mut PlotUi),
) {
    let span = (y_max - y_min).max(f64::EPSILON);
    let pad = span * PLOT_CONFIG.plot_y_padding_pct;

    Plot::new(id_salt)
        .height(PLOT_CONFIG.plot_height_volume)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .label_formatter(|_, _| String::new())
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-0.5, y_min - pad],
                [CHART_VISIBLE_CANDLES as f64 - 0.5, y_max + pad],
            ));
            draw(plot_ui);
        });
}

/// Rectangle from the zero line to `value` (negative values hang below).
fn draw_bar(plot_ui: &mut PlotUi, x: f64, value: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let (bottom, top) = if value >= 0.0 { (0.0, value) } else { (value, 0.0) };
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];
    plot_ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}
