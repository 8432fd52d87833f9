use {
    crate::{
        config::{PLOT_CONFIG, constants::book},
        domain::TradingPair,
        engine::PairFeed,
        models::{EventFeed, Indicator, OrderBookEntry},
        ui::{
            UI_CONFIG, UI_TEXT,
            chart::PriceChart,
            styles::{
                badge, change_color, format_change_pct, format_price, format_volume_millions,
                status_color,
            },
            volume::VolumeChart,
        },
    },
    eframe::egui::{Color32, ComboBox, Grid, RichText, Ui},
    strum::IntoEnumIterator,
};

/// One half of the screen: header stats, charts, indicator strip and order
/// book for a single monitored pair.
pub(crate) struct PairDashboard<'a> {
    feed: &'a PairFeed,
    events: &'a EventFeed,
    slot_label: &'static str,
    interval_ms: i64,
    show_forecast: bool,
}

impl<'a> PairDashboard<'a> {
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

    /// Renders the full column. Returns the newly selected pair when the
    /// user changes the dropdown.
    pub(crate) fn render(&mut self, ui: &mut Ui) -> Option<TradingPair> {
        let mut switched = None;

        UI_CONFIG.card_frame().show(ui, |ui| {
            switched = self.render_header(ui);
        });
        ui.add_space(6.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label(RichText::new(UI_TEXT.heading_price_chart).strong());
            PriceChart::new(
                self.feed,
                self.events,
                self.slot_label,
                self.interval_ms,
                self.show_forecast,
            )
            .render(ui);
        });
        ui.add_space(6.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label(RichText::new(UI_TEXT.heading_volume).strong());
            VolumeChart::new(self.feed, self.slot_label).render(ui);
        });
        ui.add_space(6.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label(RichText::new(UI_TEXT.heading_indicators).strong());
            ui.add_space(4.0);
            render_indicator_strip(ui, self.feed.indicators());
        });
        ui.add_space(6.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label(RichText::new(UI_TEXT.heading_order_book).strong());
            ui.add_space(4.0);
            self.render_order_book(ui);
        });

        switched
    }

    fn render_header(&self, ui: &mut Ui) -> Option<TradingPair> {
        let market = self.feed.market();
        let mut selected = self.feed.pair();

        ui.horizontal(|ui| {
            ComboBox::from_id_salt((self.slot_label, "pair_select"))
                .selected_text(selected.display_name())
                .show_ui(ui, |ui| {
                    for pair in TradingPair::iter() {
                        ui.selectable_value(&mut selected, pair, pair.display_name());
                    }
                });

            ui.colored_label(UI_CONFIG.colors.live_dot, "●");
            ui.label(
                RichText::new(UI_TEXT.live_badge)
                    .small()
                    .color(PLOT_CONFIG.color_text_subdued),
            );

            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    badge(
                        ui,
                        &format_change_pct(market.change_24h_pct),
                        change_color(market.change_24h_pct),
                    );
                },
            );
        });
        ui.add_space(6.0);

        Grid::new((self.slot_label, "stats_grid"))
            .num_columns(2)
            .spacing([40.0, 4.0])
            .show(ui, |ui| {
                stat(
                    ui,
                    UI_TEXT.label_price,
                    &format_price(market.price),
                    change_color(market.change_24h_pct),
                );
                stat(
                    ui,
                    UI_TEXT.label_volume_24h,
                    &format_volume_millions(market.volume),
                    PLOT_CONFIG.color_text_primary,
                );
                ui.end_row();

                stat(
                    ui,
                    UI_TEXT.label_high_24h,
                    &format_price(market.high_24h),
                    PLOT_CONFIG.color_gain,
                );
                stat(
                    ui,
                    UI_TEXT.label_low_24h,
                    &format_price(market.low_24h),
                    PLOT_CONFIG.color_loss,
                );
                ui.end_row();
            });

        (selected != self.feed.pair()).then_some(selected)
    }

    fn render_order_book(&self, ui: &mut Ui) {
        let book = self.feed.book();
        ui.columns(2, |cols| {
            render_book_side(
                &mut cols[0],
                UI_TEXT.label_bids,
                &book.bids,
                PLOT_CONFIG.color_gain,
            );
            render_book_side(
                &mut cols[1],
                UI_TEXT.label_asks,
                &book.asks,
                PLOT_CONFIG.color_loss,
            );
        });
    }
}

fn stat(ui: &mut Ui, label: &str, value: &str, color: Color32) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new(label)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
        ui.label(RichText::new(value).strong().monospace().color(color));
    });
}

fn render_indicator_strip(ui: &mut Ui, indicators: &[Indicator]) {
    ui.columns(indicators.len().max(1), |cols| {
        for (col, indicator) in cols.iter_mut().zip(indicators) {
            let color = status_color(indicator.status);
            col.vertical(|ui| {
                ui.label(RichText::new(indicator.name).small().color(color));
                ui.label(
                    RichText::new(format!("{:.1}", indicator.value))
                        .strong()
                        .monospace()
                        .color(PLOT_CONFIG.color_text_primary),
                );
                ui.label(
                    RichText::new(indicator.status.to_string())
                        .small()
                        .color(color),
                );
            });
        }
    });
}

fn render_book_side(ui: &mut Ui, title: &str, levels: &[OrderBookEntry], price_color: Color32) {
    ui.label(
        RichText::new(title)
            .small()
            .strong()
            .color(PLOT_CONFIG.color_text_subdued),
    );
    for level in levels.iter().take(book::VISIBLE_LEVELS) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format_price(level.price))
                    .small()
                    .monospace()
                    .color(price_color),
            );
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    ui.label(
                        RichText::new(format!("{:.4}", level.amount))
                            .small()
                            .monospace()
                            .color(PLOT_CONFIG.color_text_subdued),
                    );
                },
            );
        });
    }
}
