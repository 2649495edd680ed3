//! In-memory mock authentication. No credential is ever checked or stored.

use crate::domain::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TradingStats {
    pub win_rate: f64,
    pub total_trades: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub trading_stats: TradingStats,
}

/// Holds the single signed-in user, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    user: Option<User>,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Username is the local part of the email
    pub fn sign_in(&mut self, email: &str, password: &str) -> AppResult<&User> {
        let email = require("email", email)?;
        require("password", password)?;
        let username = email.split('@').next().unwrap_or(email).to_string();
        Ok(&*self.user.insert(fabricate(username, email)))
    }

    pub fn sign_up(&mut self, username: &str, email: &str, password: &str) -> AppResult<&User> {
        let username = require("username", username)?;
        let email = require("email", email)?;
        require("password", password)?;
        Ok(&*self.user.insert(fabricate(username.to_string(), email)))
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

fn require<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

fn fabricate(username: String, email: &str) -> User {
    User { id: "1".to_string(), username, email: email.to_string(), trading_stats: TradingStats::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_derives_username_from_email() {
        let mut auth = AuthState::default();
        let user = auth.sign_in("satoshi@example.com", "pw").unwrap();
        assert_eq!(user.username, "satoshi");
        assert_eq!(user.trading_stats.total_trades, 0);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn sign_up_keeps_username_and_sign_out_clears() {
        let mut auth = AuthState::default();
        auth.sign_up("hal", "hal@example.com", "pw").unwrap();
        assert_eq!(auth.user().unwrap().username, "hal");
        auth.sign_out();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut auth = AuthState::default();
        assert!(auth.sign_in("", "pw").is_err());
        assert!(auth.sign_up("x", "x@example.com", " ").is_err());
        assert!(!auth.is_authenticated());
    }
}
