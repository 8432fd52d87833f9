use {
    crate::{
        config::{CANDLE_WINDOW, EVENT_PROBABILITY, FORECAST_STEPS, REFRESH_INTERVAL},
        domain::{Candle, TradingPair},
        engine::CandleGenerator,
        models::{
            EventFeed, ForecastPath, Indicator, MarketData, MarketEvent, OrderBook,
            compute_indicators,
        },
    },
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::time::Duration,
};

// Keeps the two per-slot RNG streams apart when deriving them from one seed.
const STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotId {
    Left,
    Right,
}

/// Everything one dashboard slot shows: the candle window plus every derived
/// view, regenerated on each tick or pair switch.
pub struct PairFeed {
    pair: TradingPair,
    generator: CandleGenerator,
    window: Vec<Candle>,
    market: MarketData,
    indicators: Vec<Indicator>,
    book: OrderBook,
    forecast: Vec<f64>,
    /// Stream for everything random that is not the candle walk itself
    /// (Stoch14, book sizes, event rolls, forecast seeds).
    rng: StdRng,
}

impl PairFeed {
    fn synthesize(pair: TradingPair, seed: u64, now_ms: i64, interval_ms: i64) -> Self {
        let mut generator = CandleGenerator::new(pair.base_price(), seed);
        let window = generator.initial_window(CANDLE_WINDOW, now_ms, interval_ms);
        let mut feed = Self {
            pair,
            generator,
            window,
            market: MarketData::from_window(pair, &[], now_ms),
            indicators: Vec::new(),
            book: OrderBook::default(),
            forecast: Vec::new(),
            rng: StdRng::seed_from_u64(seed ^ STREAM_SALT),
        };
        feed.refresh_derived(now_ms);
        feed
    }

    /// One timer tick: advance the window by a candle, drop the oldest,
    /// rebuild all derived state, maybe roll an event.
    fn advance(&mut self, now_ms: i64) -> Option<MarketEvent> {
        let candle = self.generator.next_candle(self.window.last(), now_ms);
        self.window.push(candle);
        if self.window.len() > CANDLE_WINDOW {
            self.window.remove(0);
        }
        self.refresh_derived(now_ms);

        if self.rng.random::<f64>() < EVENT_PROBABILITY {
            Some(MarketEvent::random(
                self.pair,
                self.market.price,
                now_ms,
                &mut self.rng,
            ))
        } else {
            None
        }
    }

    fn refresh_derived(&mut self, now_ms: i64) {
        self.market = MarketData::from_window(self.pair, &self.window, now_ms);
        self.indicators = compute_indicators(&self.window, &mut self.rng);
        self.book = OrderBook::synthesize(self.market.price, &mut self.rng);
        self.forecast = ForecastPath::new(
            &self.window,
            self.pair.base_price(),
            FORECAST_STEPS,
            self.rng.random(),
        )
        .collect();
    }

    pub fn pair(&self) -> TradingPair {
        self.pair
    }

    pub fn window(&self) -> &[Candle] {
        &self.window
    }

    pub fn market(&self) -> &MarketData {
        &self.market
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Projected prices continuing past the newest candle.
    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }
}

/// Owns both slots and the shared event ring. All mutation happens
/// synchronously from the UI thread's periodic tick.
pub struct MarketEngine {
    left: PairFeed,
    right: PairFeed,
    events: EventFeed,
    interval_ms: i64,
}

impl MarketEngine {
    pub fn new(
        left_pair: TradingPair,
        right_pair: TradingPair,
        seed: Option<u64>,
        interval: Duration,
        now_ms: i64,
    ) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let interval_ms = interval.as_millis() as i64;
        log::info!(
            "engine up: {} / {}, interval {}ms, seed {}",
            left_pair,
            right_pair,
            interval_ms,
            seed
        );
        Self {
            left: PairFeed::synthesize(left_pair, slot_seed(seed, 0), now_ms, interval_ms),
            right: PairFeed::synthesize(right_pair, slot_seed(seed, 1), now_ms, interval_ms),
            events: EventFeed::default(),
            interval_ms,
        }
    }

    /// Advances both slots by one candle and collects any rolled events
    /// into the shared ring.
    pub fn tick(&mut self, now_ms: i64) {
        for feed in [&mut self.left, &mut self.right] {
            if let Some(event) = feed.advance(now_ms) {
                log::debug!("{}: {}", event.pair, event.description);
                self.events.push(event);
            }
        }
    }

    /// Swaps a slot to a new pair and resynthesizes its full window and
    /// derived state immediately. The other slot is untouched.
    pub fn set_pair(&mut self, slot: SlotId, pair: TradingPair, now_ms: i64) {
        let interval_ms = self.interval_ms;
        let feed = self.feed_mut(slot);
        if feed.pair == pair {
            return;
        }
        log::info!("{:?} slot: {} -> {}", slot, feed.pair, pair);
        let reseed = feed.rng.random();
        *feed = PairFeed::synthesize(pair, reseed, now_ms, interval_ms);
    }

    pub fn feed(&self, slot: SlotId) -> &PairFeed {
        match slot {
            SlotId::Left => &self.left,
            SlotId::Right => &self.right,
        }
    }

    fn feed_mut(&mut self, slot: SlotId) -> &mut PairFeed {
        match slot {
            SlotId::Left => &mut self.left,
            SlotId::Right => &mut self.right,
        }
    }

    pub fn events(&self) -> &EventFeed {
        &self.events
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }
}

impl Default for MarketEngine {
    fn default() -> Self {
        Self::new(
            TradingPair::BtcUsdt,
            TradingPair::EthUsdt,
            None,
            REFRESH_INTERVAL,
            crate::utils::now_timestamp_ms(),
        )
    }
}

fn slot_seed(seed: u64, slot_index: u64) -> u64 {
    seed.wrapping_add(slot_index.wrapping_mul(STREAM_SALT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EVENT_FEED_CAPACITY, REFRESH_INTERVAL};

    fn engine(seed: u64) -> MarketEngine {
        MarketEngine::new(
            TradingPair::BtcUsdt,
            TradingPair::EthUsdt,
            Some(seed),
            REFRESH_INTERVAL,
            0,
        )
    }

    fn tick_n(e: &mut MarketEngine, n: usize) {
        for i in 0..n {
            e.tick((i as i64 + 1) * 10_000);
        }
    }

    #[test]
    fn window_stays_capped_after_many_ticks() {
        let mut e = engine(1);
        tick_n(&mut e, 200);
        assert_eq!(e.feed(SlotId::Left).window().len(), CANDLE_WINDOW);
        assert_eq!(e.feed(SlotId::Right).window().len(), CANDLE_WINDOW);
    }

    #[test]
    fn candle_invariants_hold_across_ticks() {
        let mut e = engine(2);
        tick_n(&mut e, 100);
        for feed in [e.feed(SlotId::Left), e.feed(SlotId::Right)] {
            for c in feed.window() {
                assert!(c.high >= c.open.max(c.close));
                assert!(c.low <= c.open.min(c.close));
            }
        }
    }

    #[test]
    fn derived_state_tracks_latest_candle() {
        let mut e = engine(3);
        tick_n(&mut e, 5);
        let feed = e.feed(SlotId::Left);
        assert_eq!(feed.market().price, feed.window().last().unwrap().close);
        assert_eq!(feed.indicators().len(), 5);
        assert_eq!(feed.forecast().len(), FORECAST_STEPS);
        assert!(!feed.book().bids.is_empty());
    }

    #[test]
    fn event_ring_respects_capacity() {
        let mut e = engine(4);
        tick_n(&mut e, 600);
        assert!(e.events().len() <= EVENT_FEED_CAPACITY);
        // With p=0.3 per slot per tick, 600 ticks saturate the ring
        assert_eq!(e.events().len(), EVENT_FEED_CAPACITY);
    }

    #[test]
    fn same_seed_reproduces_both_slots() {
        let mut a = engine(42);
        let mut b = engine(42);
        tick_n(&mut a, 20);
        tick_n(&mut b, 20);
        assert_eq!(a.feed(SlotId::Left).window(), b.feed(SlotId::Left).window());
        assert_eq!(
            a.feed(SlotId::Right).window(),
            b.feed(SlotId::Right).window()
        );
        assert_eq!(
            a.feed(SlotId::Left).indicators(),
            b.feed(SlotId::Left).indicators()
        );
    }

    #[test]
    fn slots_start_from_different_streams() {
        let e = MarketEngine::new(
            TradingPair::BtcUsdt,
            TradingPair::BtcUsdt,
            Some(7),
            REFRESH_INTERVAL,
            0,
        );
        assert_ne!(e.feed(SlotId::Left).window(), e.feed(SlotId::Right).window());
    }

    #[test]
    fn switching_one_slot_leaves_the_other_untouched() {
        let mut a = engine(9);
        let mut b = engine(9);
        tick_n(&mut a, 10);
        tick_n(&mut b, 10);

        a.set_pair(SlotId::Left, TradingPair::SolUsdt, 100_000);
        assert_eq!(a.feed(SlotId::Left).pair(), TradingPair::SolUsdt);
        assert_eq!(a.feed(SlotId::Left).window().len(), CANDLE_WINDOW);

        // The right slot's stream never observed the switch
        a.tick(110_000);
        b.tick(110_000);
        assert_eq!(
            a.feed(SlotId::Right).window(),
            b.feed(SlotId::Right).window()
        );
    }

    #[test]
    fn switching_to_same_pair_is_a_no_op() {
        let mut a = engine(10);
        let before = a.feed(SlotId::Left).window().to_vec();
        a.set_pair(SlotId::Left, TradingPair::BtcUsdt, 50_000);
        assert_eq!(a.feed(SlotId::Left).window(), &before[..]);
    }
}
