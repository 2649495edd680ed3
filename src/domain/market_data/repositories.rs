use super::entities::{AssetQuote, FundingRate, LongShortRatio, OrderBookSnapshot, PerpetualQuote};
use super::value_objects::{AssetId, Symbol};
use crate::domain::errors::FetchResult;

/// Upstream feeds behind the BTC dashboard.
///
/// Implementations are single-threaded (browser event loop), so the returned
/// futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait MarketDataSource {
    /// Top-of-book snapshot, best levels first on each side
    async fn order_book(&self) -> FetchResult<OrderBookSnapshot>;

    async fn funding_rate(&self) -> FetchResult<FundingRate>;

    async fn long_short_ratio(&self) -> FetchResult<LongShortRatio>;

    /// Open interest in base-asset units
    async fn open_interest(&self) -> FetchResult<f64>;

    /// Last spot trade price in USD
    async fn spot_price(&self) -> FetchResult<f64>;
}

/// Aggregate price index used by the home-page ticker
#[allow(async_fn_in_trait)]
pub trait PriceIndexSource {
    /// Quotes in the order of `assets`; assets missing upstream are skipped
    async fn quotes(&self, assets: &[AssetId]) -> FetchResult<Vec<AssetQuote>>;
}

/// Perpetual contract summaries shown on the team dashboard
#[allow(async_fn_in_trait)]
pub trait PerpetualSource {
    /// One quote per known base symbol, in the order of `bases`
    async fn perpetuals(&self, bases: &[Symbol]) -> FetchResult<Vec<PerpetualQuote>>;
}
