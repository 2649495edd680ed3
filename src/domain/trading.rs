//! Simulated order form for the `/op` panel. Nothing is ever executed.

use crate::domain::errors::{AppError, AppResult};
use derive_more::Display;
use strum::{AsRefStr, EnumString};

pub const MIN_LEVERAGE: u8 = 1;
pub const MAX_LEVERAGE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
pub enum OrderType {
    #[default]
    #[strum(serialize = "limit")]
    #[display(fmt = "Limit")]
    Limit,
    #[strum(serialize = "market")]
    #[display(fmt = "Market")]
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Side {
    #[display(fmt = "Long")]
    Long,
    #[display(fmt = "Short")]
    Short,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderTicket {
    pub side: Side,
    pub order_type: OrderType,
    /// `None` for market orders
    pub price: Option<f64>,
    pub leverage: u8,
    pub amount: f64,
}

impl OrderTicket {
    pub fn summary(&self) -> String {
        let price = match self.price {
            Some(p) => format!("@ ${p:.2}"),
            None => "@ market".to_string(),
        };
        format!("{} {} {} BTC {} ({}x)", self.order_type, self.side, self.amount, price, self.leverage)
    }
}

/// Raw form inputs, kept as typed text until submission
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    order_type: OrderType,
    price: String,
    leverage: u8,
    pub amount: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self { order_type: OrderType::Limit, price: String::new(), leverage: MIN_LEVERAGE, amount: String::new() }
    }
}

impl OrderForm {
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn leverage(&self) -> u8 {
        self.leverage
    }

    /// Switching to market clears the price field
    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
        if order_type == OrderType::Market {
            self.price.clear();
        }
    }

    /// Ignored for market orders, whose price input is disabled
    pub fn set_price(&mut self, price: String) {
        if self.order_type == OrderType::Limit {
            self.price = price;
        }
    }

    pub fn set_leverage(&mut self, leverage: u8) {
        self.leverage = leverage.clamp(MIN_LEVERAGE, MAX_LEVERAGE);
    }

    /// Filled share of the slider track, in percent
    pub fn leverage_fill_percent(&self) -> f64 {
        (self.leverage - MIN_LEVERAGE) as f64 * 100.0 / (MAX_LEVERAGE - MIN_LEVERAGE) as f64
    }

    pub fn submit(&self, side: Side) -> AppResult<OrderTicket> {
        let amount = positive("amount", &self.amount)?;
        let price = match self.order_type {
            OrderType::Limit => Some(positive("price", &self.price)?),
            OrderType::Market => None,
        };
        Ok(OrderTicket { side, order_type: self.order_type, price, leverage: self.leverage, amount })
    }
}

fn positive(field: &str, raw: &str) -> AppResult<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation(format!("{field} must be a number")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(format!("{field} must be greater than zero")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn market_clears_and_locks_price() {
        let mut form = OrderForm::default();
        form.set_price("100".to_string());
        form.set_order_type(OrderType::from_str("market").unwrap());
        assert_eq!(form.price(), "");
        form.set_price("5".to_string());
        assert_eq!(form.price(), "");
    }

    #[test]
    fn leverage_is_clamped() {
        let mut form = OrderForm::default();
        form.set_leverage(0);
        assert_eq!(form.leverage(), 1);
        form.set_leverage(25);
        assert_eq!(form.leverage(), 10);
        assert!((form.leverage_fill_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn limit_order_needs_price_and_amount() {
        let mut form = OrderForm::default();
        form.amount = "0.5".to_string();
        assert!(form.submit(Side::Long).is_err());
        form.set_price("64000".to_string());
        form.set_leverage(3);
        let ticket = form.submit(Side::Long).unwrap();
        assert_eq!(ticket.price, Some(64000.0));
        assert_eq!(ticket.summary(), "Limit Long 0.5 BTC @ $64000.00 (3x)");
    }

    #[test]
    fn market_order_has_no_price() {
        let mut form = OrderForm::default();
        form.set_order_type(OrderType::Market);
        form.amount = "2".to_string();
        let ticket = form.submit(Side::Short).unwrap();
        assert_eq!(ticket.price, None);
        assert_eq!(ticket.summary(), "Market Short 2 BTC @ market (1x)");
    }
}
