// Domain types and value objects
mod candle;
mod pair;

pub use candle::{Candle, CandleType};
pub use pair::TradingPair;
