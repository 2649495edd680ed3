//! Runtime configuration with built-in defaults.
//!
//! Every field has a default, so a JSON override only needs the keys it
//! changes: `{"metrics_refresh_ms": 30000}`.

use crate::domain::errors::{AppError, AppResult};
use crate::domain::market_data::{AssetId, DEPTH_LEVELS, Symbol};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub coinbase: String,
    pub binance_futures: String,
    pub binance_spot: String,
    pub coingecko: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            coinbase: "https://api.exchange.coinbase.com".to_string(),
            binance_futures: "https://fapi.binance.com".to_string(),
            binance_spot: "https://api.binance.com".to_string(),
            coingecko: "https://api.coingecko.com/api/v3".to_string(),
        }
    }
}

/// Constructor options handed to the embedded TradingView widget; field
/// names are the widget's own keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingViewOptions {
    pub width: String,
    pub height: String,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub toolbar_bg: String,
    pub enable_publishing: bool,
    pub hide_side_toolbar: bool,
    pub allow_symbol_change: bool,
    pub container_id: String,
}

impl Default for TradingViewOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            symbol: "BINANCE:BTCUSDT".to_string(),
            interval: "1".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            style: "1".to_string(),
            locale: "en".to_string(),
            toolbar_bg: "#f1f3f6".to_string(),
            enable_publishing: false,
            hide_side_toolbar: false,
            allow_symbol_change: true,
            container_id: "tradingview_btcusdt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub endpoints: Endpoints,
    /// Coinbase product for the depth chart
    pub order_book_product: Symbol,
    /// Binance perpetual / spot symbol for the metrics
    pub futures_symbol: Symbol,
    pub long_short_period: String,
    pub depth_levels: usize,
    pub order_book_refresh_ms: u64,
    pub metrics_refresh_ms: u64,
    pub widget_script_src: String,
    pub widget: TradingViewOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            order_book_product: Symbol::from("BTC-USD"),
            futures_symbol: Symbol::from("BTCUSDT"),
            long_short_period: "5m".to_string(),
            depth_levels: DEPTH_LEVELS,
            order_book_refresh_ms: 5_000,
            metrics_refresh_ms: 15_000,
            widget_script_src: "https://s3.tradingview.com/tv.js".to_string(),
            widget: TradingViewOptions::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::Config(format!("invalid dashboard config: {e}")))?;
        config.validated()
    }

    /// Reject zero periods; clamp depth to what the chart is built for
    pub fn validated(mut self) -> AppResult<Self> {
        if self.order_book_refresh_ms == 0 || self.metrics_refresh_ms == 0 {
            return Err(AppError::Config("refresh periods must be non-zero".to_string()));
        }
        self.depth_levels = self.depth_levels.clamp(1, DEPTH_LEVELS);
        Ok(self)
    }

    pub fn order_book_period(&self) -> Duration {
        Duration::from_millis(self.order_book_refresh_ms)
    }

    pub fn metrics_period(&self) -> Duration {
        Duration::from_millis(self.metrics_refresh_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub assets: Vec<AssetId>,
    pub refresh_ms: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            assets: vec![
                AssetId::Bitcoin,
                AssetId::Ethereum,
                AssetId::BinanceCoin,
                AssetId::Solana,
                AssetId::Cardano,
            ],
            refresh_ms: 30_000,
        }
    }
}

impl TickerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(1))
    }
}

/// Perpetual cards on the team dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuturesConfig {
    pub symbols: Vec<Symbol>,
    pub refresh_ms: u64,
}

impl Default for FuturesConfig {
    fn default() -> Self {
        Self {
            symbols: ["BTC", "ETH", "BNB", "SOL"].into_iter().map(Symbol::from).collect(),
            refresh_ms: 5_000,
        }
    }
}

impl FuturesConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_cadence() {
        let config = DashboardConfig::default();
        assert_eq!(config.order_book_period(), Duration::from_secs(5));
        assert_eq!(config.metrics_period(), Duration::from_secs(15));
        assert_eq!(config.depth_levels, 20);
        assert_eq!(TickerConfig::default().period(), Duration::from_secs(30));
        assert_eq!(FuturesConfig::default().period(), Duration::from_secs(5));
        assert_eq!(FuturesConfig::default().symbols.len(), 4);
    }

    #[test]
    fn partial_json_override_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{"metrics_refresh_ms": 30000, "depth_levels": 50}"#).unwrap();
        assert_eq!(config.metrics_period(), Duration::from_secs(30));
        assert_eq!(config.depth_levels, 20);
        assert_eq!(config.futures_symbol.value(), "BTCUSDT");
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = DashboardConfig::from_json(r#"{"order_book_refresh_ms": 0}"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(DashboardConfig::from_json("not json").is_err());
    }
}
