use {
    crate::{config::EVENT_FEED_CAPACITY, domain::TradingPair},
    rand::Rng,
    std::collections::VecDeque,
    strum::{EnumCount, IntoEnumIterator},
    strum_macros::{EnumCount as EnumCountMacro, EnumIter},
    uuid::Uuid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCountMacro)]
pub enum EventKind {
    HighVolume,
    Divergence,
    EmaCross,
    Oversold,
    Overbought,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighVolume => "HIGH VOLUME",
            Self::Divergence => "DIVERGENCE",
            Self::EmaCross => "EMA CROSS",
            Self::Oversold => "OVERSOLD",
            Self::Overbought => "OVERBOUGHT",
        }
    }
}

/// A notable occurrence flagged on a tick. Purely synthetic: the kind is
/// drawn uniformly, not detected from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketEvent {
    pub id: Uuid,
    pub timestamp_ms: i64,
    pub pair: TradingPair,
    pub kind: EventKind,
    pub description: String,
    pub price: f64,
}

impl MarketEvent {
    pub(crate) fn random(
        pair: TradingPair,
        price: f64,
        timestamp_ms: i64,
        rng: &mut impl Rng,
    ) -> Self {
        let pick = rng.random_range(0..EventKind::COUNT);
        let kind = EventKind::iter().nth(pick).unwrap_or(EventKind::HighVolume);
        Self {
            id: Uuid::new_v4(),
            timestamp_ms,
            pair,
            kind,
            description: format!("{} detected", kind.label()),
            price,
        }
    }
}

/// Capped ring of recent events, newest first. Shared across both slots.
#[derive(Debug, Default)]
pub struct EventFeed {
    events: VecDeque<MarketEvent>,
}

impl EventFeed {
    pub fn push(&mut self, event: MarketEvent) {
        self.events.push_front(event);
        self.events.truncate(EVENT_FEED_CAPACITY);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &MarketEvent> {
        self.events.iter()
    }

    pub fn for_pair<'a>(&'a self, pair: TradingPair) -> impl Iterator<Item = &'a MarketEvent> {
        self.events.iter().filter(move |e| e.pair == pair)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn ring_never_exceeds_capacity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut feed = EventFeed::default();
        for i in 0..(EVENT_FEED_CAPACITY * 3) {
            feed.push(MarketEvent::random(
                TradingPair::BtcUsdt,
                100.0,
                i as i64,
                &mut rng,
            ));
            assert!(feed.len() <= EVENT_FEED_CAPACITY);
        }
        assert_eq!(feed.len(), EVENT_FEED_CAPACITY);
    }

    #[test]
    fn newest_event_is_first() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut feed = EventFeed::default();
        for ts in 0..10 {
            feed.push(MarketEvent::random(
                TradingPair::EthUsdt,
                100.0,
                ts,
                &mut rng,
            ));
        }
        let stamps: Vec<i64> = feed.iter().map(|e| e.timestamp_ms).collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
        assert_eq!(stamps[0], 9);
    }

    #[test]
    fn pair_filter_only_yields_that_pair() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut feed = EventFeed::default();
        feed.push(MarketEvent::random(TradingPair::BtcUsdt, 1.0, 0, &mut rng));
        feed.push(MarketEvent::random(TradingPair::EthUsdt, 1.0, 1, &mut rng));
        feed.push(MarketEvent::random(TradingPair::BtcUsdt, 1.0, 2, &mut rng));

        assert_eq!(feed.for_pair(TradingPair::BtcUsdt).count(), 2);
        assert_eq!(feed.for_pair(TradingPair::EthUsdt).count(), 1);
        assert_eq!(feed.for_pair(TradingPair::SolUsdt).count(), 0);
    }

    #[test]
    fn description_names_the_kind() {
        let mut rng = StdRng::seed_from_u64(14);
        let event = MarketEvent::random(TradingPair::AdaUsdt, 0.52, 0, &mut rng);
        assert!(event.description.ends_with("detected"));
        assert!(event.description.starts_with(event.kind.label()));
    }
}
