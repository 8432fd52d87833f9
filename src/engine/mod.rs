mod feed;
mod generator;

pub use feed::{MarketEngine, PairFeed, SlotId};
pub(crate) use generator::CandleGenerator;
