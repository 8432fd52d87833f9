use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub live_dot: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        central_panel: Color32::from_rgb(16, 18, 24),
        side_panel: Color32::from_rgb(22, 25, 32),
        card: Color32::from_rgb(28, 32, 40),
        card_border: Color32::from_gray(55),
        live_dot: Color32::from_rgb(38, 166, 154),
    },
};

impl UiConfig {
    /// Frame for one dashboard card (stats, chart, book, ...)
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the footer (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }
}

pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub live_badge: &'static str,

    pub label_price: &'static str,
    pub label_volume_24h: &'static str,
    pub label_high_24h: &'static str,
    pub label_low_24h: &'static str,

    pub heading_price_chart: &'static str,
    pub heading_volume: &'static str,
    pub heading_indicators: &'static str,
    pub heading_order_book: &'static str,
    pub heading_events: &'static str,

    pub chart_caption: &'static str,
    pub forecast_toggle: &'static str,
    pub volume_caption: &'static str,
    pub delta_caption: &'static str,

    pub label_bids: &'static str,
    pub label_asks: &'static str,

    pub events_waiting: &'static str,
    pub events_count_suffix: &'static str,

    pub footer_disclaimer: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Market Observer",
    app_subtitle: "Simulated crypto market analysis",
    live_badge: "LIVE",

    label_price: "Price",
    label_volume_24h: "24h Volume",
    label_high_24h: "24h High",
    label_low_24h: "24h Low",

    heading_price_chart: "Price Chart",
    heading_volume: "Volume & Delta Analysis",
    heading_indicators: "Technical Indicators",
    heading_order_book: "Order Book",
    heading_events: "Market Events Feed",

    chart_caption: "Last 30 candles",
    forecast_toggle: "Forecast",
    volume_caption: "Volume",
    delta_caption: "Delta",

    label_bids: "BIDS",
    label_asks: "ASKS",

    events_waiting: "Waiting for market events...",
    events_count_suffix: "events",

    footer_disclaimer: "For informational purposes only. Not financial advice. All data is simulated.",
};
