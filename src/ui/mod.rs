mod chart;
mod config;
mod dashboard;
mod events;
mod plot_layers;
mod styles;
mod volume;

pub(crate) use config::{UI_CONFIG, UI_TEXT};
pub(crate) use dashboard::PairDashboard;
pub(crate) use events::EventsFeedPanel;
pub(crate) use styles::setup_custom_visuals;

pub use styles::{format_change_pct, format_price, format_volume_millions};
