#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One synthetic OHLCV interval. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub timestamp_ms: i64,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    pub volume: f64,
    /// Signed proxy for net buy/sell volume imbalance.
    pub delta: f64,
}

impl Candle {
    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open, self.close),
            CandleType::Bearish => (self.close, self.open),
        }
    }
}
