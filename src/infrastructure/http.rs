//! REST clients for the public market-data endpoints (gloo-net `fetch`).

pub mod dto;

use crate::config::{DashboardConfig, Endpoints};
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    AssetId, AssetQuote, FundingRate, LongShortRatio, MarketDataSource, OrderBookSnapshot, PriceIndexSource, Symbol,
};
use crate::log_debug;
use dto::{OpenInterestDto, OrderBookDto, PremiumIndexDto, SimplePriceDto, TickerPriceDto};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const COMPONENT: LogComponent = LogComponent::Infrastructure("HttpClient");

/// GET `url` and decode the JSON body, mapping each failure mode onto
/// its `FetchError` variant.
async fn get_json<T: DeserializeOwned>(url: &str) -> FetchResult<T> {
    log_debug!(COMPONENT, "GET {url}");
    let response = Request::get(url).send().await.map_err(|e| FetchError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status { status: response.status(), url: url.to_string() });
    }
    response.json::<T>().await.map_err(|e| FetchError::Payload(e.to_string()))
}

/// Coinbase order book plus Binance futures/spot metrics
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    endpoints: Endpoints,
    product: Symbol,
    symbol: Symbol,
    long_short_period: String,
    depth_levels: usize,
}

impl ExchangeClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            endpoints: config.endpoints.clone(),
            product: config.order_book_product.clone(),
            symbol: config.futures_symbol.clone(),
            long_short_period: config.long_short_period.clone(),
            depth_levels: config.depth_levels,
        }
    }

    pub fn order_book_url(&self) -> String {
        format!("{}/products/{}/book?level=2", self.endpoints.coinbase, self.product.value())
    }

    pub fn premium_index_url(&self) -> String {
        format!("{}/fapi/v1/premiumIndex?symbol={}", self.endpoints.binance_futures, self.symbol.value())
    }

    pub fn long_short_url(&self) -> String {
        format!(
            "{}/futures/data/globalLongShortAccountRatio?symbol={}&period={}",
            self.endpoints.binance_futures,
            self.symbol.value(),
            self.long_short_period
        )
    }

    pub fn open_interest_url(&self) -> String {
        format!("{}/fapi/v1/openInterest?symbol={}", self.endpoints.binance_futures, self.symbol.value())
    }

    pub fn spot_price_url(&self) -> String {
        format!("{}/api/v3/ticker/price?symbol={}", self.endpoints.binance_spot, self.symbol.value())
    }
}

impl MarketDataSource for ExchangeClient {
    async fn order_book(&self) -> FetchResult<OrderBookSnapshot> {
        get_json::<OrderBookDto>(&self.order_book_url()).await?.into_snapshot(self.depth_levels)
    }

    async fn funding_rate(&self) -> FetchResult<FundingRate> {
        FundingRate::try_from(get_json::<PremiumIndexDto>(&self.premium_index_url()).await?)
    }

    async fn long_short_ratio(&self) -> FetchResult<LongShortRatio> {
        dto::latest_long_short(get_json(&self.long_short_url()).await?)
    }

    async fn open_interest(&self) -> FetchResult<f64> {
        let dto: OpenInterestDto = get_json(&self.open_interest_url()).await?;
        FetchError::parse_number("openInterest", &dto.open_interest)
    }

    async fn spot_price(&self) -> FetchResult<f64> {
        let dto: TickerPriceDto = get_json(&self.spot_price_url()).await?;
        FetchError::parse_number("price", &dto.price)
    }
}

/// CoinGecko `simple/price` index for the home-page ticker
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(endpoints: &Endpoints) -> Self {
        Self { base_url: endpoints.coingecko.clone() }
    }

    pub fn simple_price_url(&self, assets: &[AssetId]) -> String {
        let ids: Vec<&str> = assets.iter().map(|a| a.api_id()).collect();
        format!("{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true", self.base_url, ids.join(","))
    }
}

impl PriceIndexSource for CoinGeckoClient {
    async fn quotes(&self, assets: &[AssetId]) -> FetchResult<Vec<AssetQuote>> {
        let payload: HashMap<String, SimplePriceDto> = get_json(&self.simple_price_url(assets)).await?;
        Ok(dto::quotes_from(payload, assets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_urls() {
        let client = ExchangeClient::new(&DashboardConfig::default());
        assert_eq!(client.order_book_url(), "https://api.exchange.coinbase.com/products/BTC-USD/book?level=2");
        assert_eq!(client.premium_index_url(), "https://fapi.binance.com/fapi/v1/premiumIndex?symbol=BTCUSDT");
        assert_eq!(
            client.long_short_url(),
            "https://fapi.binance.com/futures/data/globalLongShortAccountRatio?symbol=BTCUSDT&period=5m"
        );
        assert_eq!(client.open_interest_url(), "https://fapi.binance.com/fapi/v1/openInterest?symbol=BTCUSDT");
        assert_eq!(client.spot_price_url(), "https://api.binance.com/api/v3/ticker/price?symbol=BTCUSDT");
    }

    #[test]
    fn coingecko_url_lists_assets_in_order() {
        let client = CoinGeckoClient::new(&Endpoints::default());
        assert_eq!(
            client.simple_price_url(&[AssetId::Bitcoin, AssetId::Cardano]),
            "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,cardano&vs_currencies=usd&include_24hr_change=true"
        );
    }
}
