//! Metric slots and their display formatting.
//!
//! A slot starts in `Loading` and every refresh overwrites it with either
//! `Ready` or `Failed`; it never goes back to `Loading`.

use super::entities::{AssetQuote, FundingRate, LongShortRatio, OpenInterestUsd, PerpetualQuote};
use crate::domain::errors::FetchResult;

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MetricSlot<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
}

impl<T> MetricSlot<T> {
    pub fn from_result(result: FetchResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(_) => Self::Failed,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Render through `format`, or the sentinel text for non-ready slots
    pub fn display(&self, format: impl FnOnce(&T) -> MetricDisplay) -> MetricDisplay {
        match self {
            Self::Loading => MetricDisplay::neutral(LOADING_TEXT),
            Self::Ready(value) => format(value),
            Self::Failed => MetricDisplay::neutral(ERROR_TEXT),
        }
    }
}

/// Direction hint, only used for colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "metric-value positive",
            Tone::Negative => "metric-value negative",
            Tone::Neutral => "metric-value",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDisplay {
    pub text: String,
    pub tone: Tone,
}

impl MetricDisplay {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Neutral)
    }
}

/// `0.0001` → `0.0100%`; sign of the shown value picks the tone
pub fn funding_rate_display(rate: &FundingRate) -> MetricDisplay {
    let text = format!("{:.4}", rate.0 * 100.0);
    let shown = text.parse::<f64>().unwrap_or(0.0);
    let tone = if shown >= 0.0 { Tone::Positive } else { Tone::Negative };
    MetricDisplay::new(format!("{text}%"), tone)
}

pub fn longs_display(ratio: &LongShortRatio) -> MetricDisplay {
    MetricDisplay::new(format!("{:.2}%", ratio.long_account * 100.0), Tone::Positive)
}

pub fn shorts_display(ratio: &LongShortRatio) -> MetricDisplay {
    MetricDisplay::new(format!("{:.2}%", ratio.short_account * 100.0), Tone::Negative)
}

/// `$` plus en-US grouping, trailing zero cents dropped (`$1,234,567.5`)
pub fn open_interest_display(value: &OpenInterestUsd) -> MetricDisplay {
    MetricDisplay::neutral(format!("${}", format_grouped(value.0, 0, 2)))
}

/// Dollar amount with cents, `$98,784.39`
pub fn usd_text(value: f64) -> String {
    format!("${}", format_grouped(value, 2, 2))
}

pub fn quote_price_text(quote: &AssetQuote) -> String {
    usd_text(quote.usd)
}

/// Absolute 24h change; tone is positive only for strictly rising prices
pub fn quote_change_display(quote: &AssetQuote) -> MetricDisplay {
    let tone = if quote.usd_24h_change > 0.0 { Tone::Positive } else { Tone::Negative };
    MetricDisplay::new(format!("{:.2}%", quote.usd_24h_change.abs()), tone)
}

/// Arrow plus absolute 24h change; a flat day counts as rising
pub fn perpetual_change_display(quote: &PerpetualQuote) -> MetricDisplay {
    let (arrow, tone) = if quote.change_24h >= 0.0 { ('↑', Tone::Positive) } else { ('↓', Tone::Negative) };
    MetricDisplay::new(format!("{arrow} {}%", quote.change_24h.abs()), tone)
}

/// Open interest in thousands of contracts, `1250000` → `1,250.00K`
pub fn open_interest_thousands_text(contracts: f64) -> String {
    format!("{}K", format_grouped(contracts / 1000.0, 2, 2))
}

/// Thousands-separated decimal with between `min_frac` and `max_frac`
/// fraction digits.
pub fn format_grouped(value: f64, min_frac: usize, max_frac: usize) -> String {
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed.clone(), String::new()),
    };

    let mut frac = frac_part;
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}
