use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Quote price in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Order size in base-asset units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct Size(f64);

impl Size {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Exchange-specific market identifier (`BTC-USD`, `BTCUSDT`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.trim().is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.trim().to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Assets shown on the home-page ticker, keyed by price-index id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetId {
    #[strum(serialize = "bitcoin")]
    #[display(fmt = "bitcoin")]
    Bitcoin,
    #[strum(serialize = "ethereum")]
    #[display(fmt = "ethereum")]
    Ethereum,
    #[strum(serialize = "binancecoin")]
    #[display(fmt = "binancecoin")]
    BinanceCoin,
    #[strum(serialize = "solana")]
    #[display(fmt = "solana")]
    Solana,
    #[strum(serialize = "cardano")]
    #[display(fmt = "cardano")]
    Cardano,
}

impl AssetId {
    pub fn api_id(&self) -> &str {
        self.as_ref()
    }
}
