//! Error types for the stock menu bot

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the stock catalog
///
/// Every variant is fatal: a catalog that fails to load is never exposed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("failed to read stock data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data is not valid JSON or is missing required fields
    #[error("malformed stock data: {0}")]
    Json(#[from] serde_json::Error),

    /// A stock carries a price below zero
    #[error("negative price {price} for {stock} on {exchange}")]
    NegativePrice {
        exchange: String,
        stock: String,
        price: f64,
    },

    /// A stock carries a NaN or infinite price
    #[error("non-finite price for {stock} on {exchange}")]
    NonFinitePrice { exchange: String, stock: String },
}

/// Top level error for the bot
#[derive(Debug, Error)]
pub enum StockBotError {
    /// Catalog failed to load
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, StockBotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NegativePrice {
            exchange: "Nasdaq".to_string(),
            stock: "AMD".to_string(),
            price: -1.5,
        };
        assert_eq!(err.to_string(), "negative price -1.5 for AMD on Nasdaq");

        let err = StockBotError::Config("empty placeholder".to_string());
        assert_eq!(err.to_string(), "Configuration error: empty placeholder");
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let err: StockBotError = CatalogError::NonFinitePrice {
            exchange: "Nasdaq".to_string(),
            stock: "AMD".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "non-finite price for AMD on Nasdaq");
    }
}
