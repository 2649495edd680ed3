//! Fixed perpetual quotes for the team dashboard. The cards only teach how
//! to read a perpetual's readouts, so the figures are a static snapshot.

use crate::domain::errors::FetchResult;
use crate::domain::market_data::{FundingRate, PerpetualQuote, PerpetualSource, Symbol};

/// `(base, price, funding rate, index price, open interest, 24h change %)`
const SNAPSHOT: [(&str, f64, f64, f64, f64, f64); 4] = [
    ("BTC", 98_784.39, 0.01, 98_741.53, 1_250_000.0, -2.5),
    ("ETH", 3_382.4, 0.034, 3_379.77, 850_000.0, 1.8),
    ("BNB", 634.44, 0.0278, 634.12, 450_000.0, -0.5),
    ("SOL", 262.38, 0.0355, 262.15, 320_000.0, 3.2),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPerpetualFeed;

impl PerpetualSource for SimulatedPerpetualFeed {
    async fn perpetuals(&self, bases: &[Symbol]) -> FetchResult<Vec<PerpetualQuote>> {
        Ok(bases
            .iter()
            .filter_map(|base| SNAPSHOT.iter().find(|row| row.0 == base.value()))
            .map(|&(base, price, funding, index_price, open_interest, change_24h)| PerpetualQuote {
                base: Symbol::from(base),
                price,
                funding_rate: FundingRate(funding),
                index_price,
                open_interest,
                change_24h,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn follows_request_order_and_skips_unknown() {
        let bases = [Symbol::from("sol"), Symbol::from("DOGE"), Symbol::from("BTC")];
        let quotes = block_on(SimulatedPerpetualFeed.perpetuals(&bases)).unwrap();
        let names: Vec<&str> = quotes.iter().map(|q| q.base.value()).collect();
        assert_eq!(names, vec!["SOL", "BTC"]);
        assert_eq!(quotes[1].open_interest, 1_250_000.0);
    }
}
