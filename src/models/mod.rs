mod event;
mod forecast;
mod indicator;
mod market_data;
mod order_book;

pub use {
    event::{EventFeed, EventKind, MarketEvent},
    forecast::ForecastPath,
    indicator::{Indicator, IndicatorStatus},
    market_data::MarketData,
    order_book::{OrderBook, OrderBookEntry},
};

pub(crate) use {indicator::compute_indicators, market_data::price_extents};
