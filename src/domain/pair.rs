use {
    anyhow::{Result, anyhow},
    serde::{Deserialize, Serialize},
    strum::IntoEnumIterator,
    strum_macros::EnumIter,
};

/// The ten USDT pairs the dashboard can monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
pub enum TradingPair {
    #[default]
    BtcUsdt,
    EthUsdt,
    BnbUsdt,
    SolUsdt,
    AdaUsdt,
    XrpUsdt,
    DogeUsdt,
    MaticUsdt,
    DotUsdt,
    AvaxUsdt,
}

impl TradingPair {
    /// Anchor price the random walk is scaled around.
    pub fn base_price(&self) -> f64 {
        match self {
            Self::BtcUsdt => 43250.0,
            Self::EthUsdt => 2280.0,
            Self::BnbUsdt => 310.0,
            Self::SolUsdt => 98.0,
            Self::AdaUsdt => 0.52,
            Self::XrpUsdt => 0.61,
            Self::DogeUsdt => 0.082,
            Self::MaticUsdt => 0.85,
            Self::DotUsdt => 7.2,
            Self::AvaxUsdt => 36.5,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::BtcUsdt => "BTCUSDT",
            Self::EthUsdt => "ETHUSDT",
            Self::BnbUsdt => "BNBUSDT",
            Self::SolUsdt => "SOLUSDT",
            Self::AdaUsdt => "ADAUSDT",
            Self::XrpUsdt => "XRPUSDT",
            Self::DogeUsdt => "DOGEUSDT",
            Self::MaticUsdt => "MATICUSDT",
            Self::DotUsdt => "DOTUSDT",
            Self::AvaxUsdt => "AVAXUSDT",
        }
    }

    pub fn base_asset(&self) -> &'static str {
        self.symbol()
            .strip_suffix("USDT")
            .unwrap_or_else(|| self.symbol())
    }

    /// Display form, e.g. "BTC/USDT".
    pub fn display_name(&self) -> String {
        format!("{}/USDT", self.base_asset())
    }

    pub fn from_symbol(text: &str) -> Result<Self> {
        let wanted = text.trim().to_ascii_uppercase();
        Self::iter()
            .find(|p| p.symbol() == wanted)
            .ok_or_else(|| anyhow!("unknown trading pair '{}'", text))
    }
}

impl std::fmt::Display for TradingPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trips() {
        for pair in TradingPair::iter() {
            assert_eq!(TradingPair::from_symbol(pair.symbol()).unwrap(), pair);
        }
    }

    #[test]
    fn from_symbol_is_case_insensitive() {
        assert_eq!(
            TradingPair::from_symbol("btcusdt").unwrap(),
            TradingPair::BtcUsdt
        );
    }

    #[test]
    fn from_symbol_rejects_unknown() {
        assert!(TradingPair::from_symbol("FOOBAR").is_err());
    }

    #[test]
    fn display_name_splits_quote() {
        assert_eq!(TradingPair::SolUsdt.display_name(), "SOL/USDT");
    }

    #[test]
    fn base_prices_are_positive() {
        for pair in TradingPair::iter() {
            assert!(pair.base_price() > 0.0);
        }
    }
}
