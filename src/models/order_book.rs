use {crate::config::constants::book, rand::Rng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBookEntry {
    pub price: f64,
    pub amount: f64,
    pub total: f64,
}

/// Synthetic depth snapshot. Regenerated wholesale from the current price on
/// every tick; no state survives between ticks and nothing is matched.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Descending from just below the reference price.
    pub bids: Vec<OrderBookEntry>,
    /// Ascending from just above the reference price.
    pub asks: Vec<OrderBookEntry>,
}

impl OrderBook {
    pub(crate) fn synthesize(reference_price: f64, rng: &mut impl Rng) -> Self {
        let mut bids = Vec::with_capacity(book::DEPTH);
        let mut asks = Vec::with_capacity(book::DEPTH);

        let step = reference_price * book::PRICE_STEP_PCT;
        for level in 0..book::DEPTH {
            let offset = (level + 1) as f64 * step;

            let bid_price = reference_price - offset;
            let bid_amount = rng.random_range(book::AMOUNT_MIN..book::AMOUNT_MAX);
            bids.push(OrderBookEntry {
                price: bid_price,
                amount: bid_amount,
                total: bid_price * bid_amount,
            });

            let ask_price = reference_price + offset;
            let ask_amount = rng.random_range(book::AMOUNT_MIN..book::AMOUNT_MAX);
            asks.push(OrderBookEntry {
                price: ask_price,
                amount: ask_amount,
                total: ask_price * ask_amount,
            });
        }

        Self { bids, asks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn generates_eight_levels_per_side() {
        let mut rng = StdRng::seed_from_u64(1);
        let ob = OrderBook::synthesize(43250.0, &mut rng);
        assert_eq!(ob.bids.len(), book::DEPTH);
        assert_eq!(ob.asks.len(), book::DEPTH);
    }

    #[test]
    fn bids_descend_and_asks_ascend_around_reference() {
        let mut rng = StdRng::seed_from_u64(2);
        let reference = 98.0;
        let ob = OrderBook::synthesize(reference, &mut rng);

        for pair in ob.bids.windows(2) {
            assert!(pair[0].price > pair[1].price);
        }
        for pair in ob.asks.windows(2) {
            assert!(pair[0].price < pair[1].price);
        }
        assert!(ob.bids[0].price < reference);
        assert!(ob.asks[0].price > reference);
    }

    #[test]
    fn totals_are_price_times_amount() {
        let mut rng = StdRng::seed_from_u64(3);
        let ob = OrderBook::synthesize(0.52, &mut rng);
        for entry in ob.bids.iter().chain(ob.asks.iter()) {
            assert!((entry.total - entry.price * entry.amount).abs() < 1e-12);
            assert!(entry.amount >= book::AMOUNT_MIN);
            assert!(entry.amount < book::AMOUNT_MAX);
        }
    }
}
