//! Wire shapes of the upstream REST APIs and their conversion into domain
//! types. Numbers arrive as decimal strings on every exchange endpoint.

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::{AssetId, AssetQuote, FundingRate, LongShortRatio, OrderBookEntry, OrderBookSnapshot};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Coinbase `book?level=2`: levels are `[price, size, num_orders]`
#[derive(Debug, Deserialize)]
pub struct OrderBookDto {
    pub bids: Vec<Vec<Value>>,
    pub asks: Vec<Vec<Value>>,
}

impl OrderBookDto {
    /// Parse at most `limit` levels per side
    pub fn into_snapshot(self, limit: usize) -> FetchResult<OrderBookSnapshot> {
        Ok(OrderBookSnapshot { bids: parse_levels(&self.bids, limit)?, asks: parse_levels(&self.asks, limit)? })
    }
}

fn parse_levels(levels: &[Vec<Value>], limit: usize) -> FetchResult<Vec<OrderBookEntry>> {
    levels.iter().take(limit).map(|level| parse_level(level)).collect()
}

fn parse_level(level: &[Value]) -> FetchResult<OrderBookEntry> {
    let field = |idx: usize, name: &str| -> FetchResult<f64> {
        match level.get(idx) {
            Some(Value::String(raw)) => FetchError::parse_number(name, raw),
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| FetchError::payload(format!("{name}: {n}"))),
            other => Err(FetchError::payload(format!("{name}: unexpected {other:?}"))),
        }
    };
    let price = field(0, "price")?;
    let size = field(1, "size")?;
    if size < 0.0 {
        return Err(FetchError::payload(format!("negative size {size} at price {price}")));
    }
    Ok(OrderBookEntry::new(price, size))
}

/// Binance `premiumIndex`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumIndexDto {
    pub last_funding_rate: String,
}

impl TryFrom<PremiumIndexDto> for FundingRate {
    type Error = FetchError;

    fn try_from(dto: PremiumIndexDto) -> FetchResult<Self> {
        FetchError::parse_number("lastFundingRate", &dto.last_funding_rate).map(FundingRate)
    }
}

/// One row of `globalLongShortAccountRatio`; the endpoint returns a list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongShortDto {
    pub long_account: String,
    pub short_account: String,
}

/// Only the first row is used
pub fn latest_long_short(rows: Vec<LongShortDto>) -> FetchResult<LongShortRatio> {
    let latest = rows.into_iter().next().ok_or_else(|| FetchError::payload("empty long/short ratio list"))?;
    Ok(LongShortRatio {
        long_account: FetchError::parse_number("longAccount", &latest.long_account)?,
        short_account: FetchError::parse_number("shortAccount", &latest.short_account)?,
    })
}

/// Binance `openInterest`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInterestDto {
    pub open_interest: String,
}

/// Binance `ticker/price`
#[derive(Debug, Deserialize)]
pub struct TickerPriceDto {
    pub price: String,
}

/// CoinGecko `simple/price` value for one asset
#[derive(Debug, Deserialize)]
pub struct SimplePriceDto {
    pub usd: f64,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

/// Quotes in `assets` order; assets missing from the payload are skipped
pub fn quotes_from(mut payload: HashMap<String, SimplePriceDto>, assets: &[AssetId]) -> Vec<AssetQuote> {
    assets
        .iter()
        .filter_map(|asset| {
            payload.remove(asset.api_id()).map(|dto| AssetQuote {
                asset: *asset,
                usd: dto.usd,
                usd_24h_change: dto.usd_24h_change.unwrap_or(0.0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_book_levels_parse_and_truncate() {
        let dto: OrderBookDto = serde_json::from_str(
            r#"{"sequence": 1, "bids": [["100.00","2",3],["99.50","3.5",1],["99","1",1]], "asks": [["101","0.25",2]]}"#,
        )
        .unwrap();
        let snapshot = dto.into_snapshot(2).unwrap();
        assert_eq!(snapshot.bids, vec![OrderBookEntry::new(100.0, 2.0), OrderBookEntry::new(99.5, 3.5)]);
        assert_eq!(snapshot.asks, vec![OrderBookEntry::new(101.0, 0.25)]);
    }

    #[test]
    fn malformed_level_is_a_payload_error() {
        let dto: OrderBookDto = serde_json::from_str(r#"{"bids": [["abc","2"]], "asks": []}"#).unwrap();
        assert!(matches!(dto.into_snapshot(20), Err(FetchError::Payload(_))));
        let dto: OrderBookDto = serde_json::from_str(r#"{"bids": [["100"]], "asks": []}"#).unwrap();
        assert!(dto.into_snapshot(20).is_err());
    }

    #[test]
    fn funding_rate_from_premium_index() {
        let dto: PremiumIndexDto =
            serde_json::from_str(r#"{"symbol":"BTCUSDT","markPrice":"1","lastFundingRate":"0.00010000"}"#).unwrap();
        assert_eq!(FundingRate::try_from(dto).unwrap(), FundingRate(0.0001));
    }

    #[test]
    fn long_short_uses_first_row() {
        let rows: Vec<LongShortDto> = serde_json::from_str(
            r#"[{"symbol":"BTCUSDT","longShortRatio":"1.5","longAccount":"0.6000","shortAccount":"0.4000","timestamp":1},
                {"symbol":"BTCUSDT","longShortRatio":"1","longAccount":"0.5","shortAccount":"0.5","timestamp":0}]"#,
        )
        .unwrap();
        let ratio = latest_long_short(rows).unwrap();
        assert_eq!(ratio.long_account, 0.6);
        assert!(latest_long_short(Vec::new()).is_err());
    }

    #[test]
    fn simple_price_keeps_requested_order() {
        let payload: HashMap<String, SimplePriceDto> = serde_json::from_str(
            r#"{"ethereum":{"usd":3382.4,"usd_24h_change":1.8},"bitcoin":{"usd":98784.39,"usd_24h_change":-2.5}}"#,
        )
        .unwrap();
        let quotes = quotes_from(payload, &[AssetId::Bitcoin, AssetId::Solana, AssetId::Ethereum]);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].asset, AssetId::Bitcoin);
        assert_eq!(quotes[1].usd_24h_change, 1.8);
    }
}
