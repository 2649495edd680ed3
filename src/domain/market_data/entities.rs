use super::value_objects::{AssetId, Price, Size, Symbol};
use serde::{Deserialize, Serialize};

/// One resting order level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderBookEntry {
    pub price: Price,
    pub size: Size,
}

impl OrderBookEntry {
    pub fn new(price: f64, size: f64) -> Self {
        Self { price: Price::from(price), size: Size::from(size) }
    }
}

/// Top-of-book snapshot as returned upstream: bids best-first (descending),
/// asks best-first (ascending).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBookSnapshot {
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
}

/// Depth-chart point: `x` is the level price, `y` the cumulative size up to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub x: f64,
    pub y: f64,
}

/// Both cumulative sides of one snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DepthSeries {
    pub bids: Vec<ChartDataPoint>,
    pub asks: Vec<ChartDataPoint>,
}

impl DepthSeries {
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// `(min_price, max_price)` across both sides
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.bids.iter().chain(self.asks.iter()).fold(None, |acc, p| match acc {
            None => Some((p.x, p.x)),
            Some((lo, hi)) => Some((lo.min(p.x), hi.max(p.x))),
        })
    }

    /// Largest cumulative size; the last point of each side since both are
    /// non-decreasing.
    pub fn max_cumulative(&self) -> f64 {
        let bid = self.bids.last().map(|p| p.y).unwrap_or(0.0);
        let ask = self.asks.last().map(|p| p.y).unwrap_or(0.0);
        bid.max(ask)
    }
}

/// Perpetual funding rate as a raw fraction (`0.0001` = 0.01%)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundingRate(pub f64);

/// Share of accounts long vs short, as fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongShortRatio {
    pub long_account: f64,
    pub short_account: f64,
}

/// Open interest converted to USD, already rounded to cents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenInterestUsd(pub f64);

/// One ticker row
#[derive(Debug, Clone, PartialEq)]
pub struct AssetQuote {
    pub asset: AssetId,
    pub usd: f64,
    pub usd_24h_change: f64,
}

/// Summary of one USDT-margined perpetual for the team dashboard cards
#[derive(Debug, Clone, PartialEq)]
pub struct PerpetualQuote {
    pub base: Symbol,
    pub price: f64,
    pub funding_rate: FundingRate,
    pub index_price: f64,
    /// Contracts outstanding, in base units
    pub open_interest: f64,
    /// Percent, already scaled (`-2.5` = down 2.5%)
    pub change_24h: f64,
}
