use derive_more::Display;

/// Why a single upstream fetch did not produce a value.
///
/// The aggregator collapses every variant into the same `Failed` slot state;
/// the distinction only exists for the log line.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP {} from {}", status, url)]
    Status { status: u16, url: String },
    #[display(fmt = "malformed payload: {}", _0)]
    Payload(String),
}

impl std::error::Error for FetchError {}

impl FetchError {
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload(msg.into())
    }

    /// Parse a decimal string field the way the upstream APIs encode numbers.
    pub fn parse_number(field: &str, raw: &str) -> Result<f64, Self> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| Self::Payload(format!("{field}: {raw:?} ({e})")))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::Payload(format!("{field}: non-finite value {raw:?}")))
        }
    }
}

/// Application-level errors outside the fetch path.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Browser API error: {}", _0)]
    Browser(String),
    #[display(fmt = "Rendering error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Validation error: {}", _0)]
    Validation(String),
    #[display(fmt = "Configuration error: {}", _0)]
    Config(String),
}

impl std::error::Error for AppError {}

pub type FetchResult<T> = Result<T, FetchError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_api_strings() {
        assert_eq!(FetchError::parse_number("price", "100.50").unwrap(), 100.5);
        assert_eq!(FetchError::parse_number("size", " 2 ").unwrap(), 2.0);
    }

    #[test]
    fn parse_number_rejects_garbage_and_nan() {
        assert!(matches!(FetchError::parse_number("price", "abc"), Err(FetchError::Payload(_))));
        assert!(matches!(FetchError::parse_number("price", "NaN"), Err(FetchError::Payload(_))));
    }

    #[test]
    fn status_display_names_url() {
        let err = FetchError::Status { status: 503, url: "https://x".to_string() };
        assert_eq!(err.to_string(), "HTTP 503 from https://x");
    }
}
