use super::entities::{ChartDataPoint, DepthSeries, OpenInterestUsd, OrderBookEntry, OrderBookSnapshot};
use crate::domain::errors::{FetchError, FetchResult};

/// Levels per side fed into the depth chart
pub const DEPTH_LEVELS: usize = 20;

/// Turns order-book snapshots into cumulative depth series.
pub struct DepthAggregator;

impl DepthAggregator {
    /// Running prefix sum of sizes over the first `limit` levels, in the order
    /// given. Upstream order is best-first, so the series grows moving away
    /// from the mid price.
    pub fn cumulative(levels: &[OrderBookEntry], limit: usize) -> Vec<ChartDataPoint> {
        levels
            .iter()
            .take(limit)
            .scan(0.0_f64, |total, level| {
                *total += level.size.value();
                Some(ChartDataPoint { x: level.price.value(), y: *total })
            })
            .collect()
    }

    /// Both sides, each accumulated independently
    pub fn aggregate(snapshot: &OrderBookSnapshot, limit: usize) -> DepthSeries {
        DepthSeries {
            bids: Self::cumulative(&snapshot.bids, limit),
            asks: Self::cumulative(&snapshot.asks, limit),
        }
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Notional open interest: contracts in base units times spot price, in cents.
/// A non-finite product is a payload error, never a displayable number.
pub fn open_interest_usd(open_interest_base: f64, spot_price: f64) -> FetchResult<OpenInterestUsd> {
    let notional = open_interest_base * spot_price;
    if !notional.is_finite() {
        return Err(FetchError::payload(format!(
            "open interest {open_interest_base} x spot {spot_price} is not finite"
        )));
    }
    Ok(OpenInterestUsd(round_to(notional, 2)))
}
