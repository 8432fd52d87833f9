use {
    crate::{
        Cli,
        config::REFRESH_INTERVAL,
        domain::TradingPair,
        engine::{MarketEngine, SlotId},
        ui::{EventsFeedPanel, PairDashboard, UI_CONFIG, UI_TEXT, setup_custom_visuals},
        utils::now_timestamp_ms,
    },
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel},
    },
    serde::{Deserialize, Serialize},
    std::time::Duration,
    web_time::Instant,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Selected pairs persist across sessions; market data never does.
    left_pair: TradingPair,
    right_pair: TradingPair,
    show_forecast: bool,
    #[serde(skip)]
    engine: MarketEngine,
    #[serde(skip)]
    last_tick: Option<Instant>,
    #[serde(skip)]
    interval: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self {
            left_pair: TradingPair::BtcUsdt,
            right_pair: TradingPair::EthUsdt,
            show_forecast: true,
            engine: MarketEngine::default(),
            last_tick: None,
            interval: REFRESH_INTERVAL,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // CLI pairs override whatever was persisted
        if let Some(symbol) = &args.left {
            match TradingPair::from_symbol(symbol) {
                Ok(pair) => app.left_pair = pair,
                Err(err) => log::warn!("--left ignored: {}", err),
            }
        }
        if let Some(symbol) = &args.right {
            match TradingPair::from_symbol(symbol) {
                Ok(pair) => app.right_pair = pair,
                Err(err) => log::warn!("--right ignored: {}", err),
            }
        }

        app.interval = Duration::from_secs(args.interval_secs.max(1));
        app.engine = MarketEngine::new(
            app.left_pair,
            app.right_pair,
            args.seed,
            app.interval,
            now_timestamp_ms(),
        );
        app.last_tick = Some(Instant::now());
        app
    }

    /// The one periodic driver: advance every feed when the interval has
    /// elapsed. Runs synchronously inside the egui update loop.
    fn tick_if_due(&mut self) {
        let last = self.last_tick.get_or_insert_with(Instant::now);
        if last.elapsed() >= self.interval {
            self.engine.tick(now_timestamp_ms());
            self.last_tick = Some(Instant::now());
        }
    }

    fn time_until_next_tick(&self) -> Duration {
        let elapsed = self.last_tick.map(|t| t.elapsed()).unwrap_or_default();
        self.interval.saturating_sub(elapsed)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.tick_if_due();

        // Disjoint field borrows so panel closures don't fight over self
        let Self {
            left_pair,
            right_pair,
            show_forecast,
            engine,
            interval,
            ..
        } = self;

        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.label(
                        RichText::new(format!(
                            "{} • {}s intervals",
                            UI_TEXT.app_subtitle,
                            interval.as_secs()
                        ))
                        .small(),
                    );
                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            ui.checkbox(show_forecast, UI_TEXT.forecast_toggle);
                            ui.label(RichText::new(UI_TEXT.live_badge).small());
                            ui.colored_label(UI_CONFIG.colors.live_dot, "●");
                        },
                    );
                });
            });

        TopBottomPanel::bottom("footer")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(UI_TEXT.footer_disclaimer).small());
                });
            });

        TopBottomPanel::bottom("events_feed")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                EventsFeedPanel::new(engine.events()).render(ui);
            });

        let mut switches: [Option<TradingPair>; 2] = [None, None];

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.columns(2, |cols| {
                    switches[0] = PairDashboard::new(
                        engine.feed(SlotId::Left),
                        engine.events(),
                        "left",
                        engine.interval_ms(),
                        *show_forecast,
                    )
                    .render(&mut cols[0]);

                    switches[1] = PairDashboard::new(
                        engine.feed(SlotId::Right),
                        engine.events(),
                        "right",
                        engine.interval_ms(),
                        *show_forecast,
                    )
                    .render(&mut cols[1]);
                });
            });
        });

        // Selection changes resynthesize immediately, independent of the timer
        if let Some(pair) = switches[0] {
            engine.set_pair(SlotId::Left, pair, now_timestamp_ms());
            *left_pair = pair;
        }
        if let Some(pair) = switches[1] {
            engine.set_pair(SlotId::Right, pair, now_timestamp_ms());
            *right_pair = pair;
        }

        ctx.request_repaint_after(self.time_until_next_tick());
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
