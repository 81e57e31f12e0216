//! Static stock catalog
//!
//! The catalog is loaded once at startup from a JSON document shaped like:
//!
//! ```json
//! [
//!   { "stockExchange": "Nasdaq",
//!     "topStocks": [ { "stockName": "AMD", "price": 150.0 } ] }
//! ]
//! ```
//!
//! Loading is fail-fast: a malformed record rejects the whole document.
//! After loading the catalog is never mutated.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// A single stock listed on an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// Stock identifier, unique within its exchange
    #[serde(rename = "stockName")]
    pub name: String,
    /// Last known price
    pub price: f64,
}

impl Stock {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A stock exchange and the stocks it lists, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Canonical exchange identifier
    #[serde(rename = "stockExchange")]
    pub name: String,
    /// Listed stocks
    #[serde(rename = "topStocks")]
    pub stocks: Vec<Stock>,
}

impl Exchange {
    pub fn new(name: impl Into<String>, stocks: Vec<Stock>) -> Self {
        Self {
            name: name.into(),
            stocks,
        }
    }
}

/// Read-only lookups the navigator needs from a stock data source
#[cfg_attr(test, mockall::automock)]
pub trait StockDirectory {
    /// Exchange identifiers in source order
    fn list_exchanges(&self) -> Vec<String>;

    /// Stock identifiers of the named exchange, empty when it is unknown
    fn list_stocks(&self, exchange: &str) -> Vec<String>;

    /// Price of a stock, `None` when the pair is unknown
    fn price(&self, exchange: &str, stock: &str) -> Option<f64>;
}

/// Ordered, immutable collection of exchanges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    exchanges: Vec<Exchange>,
}

impl Catalog {
    /// Build a catalog from already parsed exchanges, validating prices
    pub fn new(exchanges: Vec<Exchange>) -> Result<Self, CatalogError> {
        for exchange in &exchanges {
            for stock in &exchange.stocks {
                if !stock.price.is_finite() {
                    return Err(CatalogError::NonFinitePrice {
                        exchange: exchange.name.clone(),
                        stock: stock.name.clone(),
                    });
                }
                if stock.price < 0.0 {
                    return Err(CatalogError::NegativePrice {
                        exchange: exchange.name.clone(),
                        stock: stock.name.clone(),
                        price: stock.price,
                    });
                }
            }
        }

        warn_on_duplicates(&exchanges);

        Ok(Self { exchanges })
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let exchanges: Vec<Exchange> = serde_json::from_str(json)?;
        Self::new(exchanges)
    }

    /// Parse a catalog from any reader producing JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let exchanges: Vec<Exchange> = serde_json::from_reader(reader)?;
        Self::new(exchanges)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(
            path = %path.display(),
            exchanges = catalog.len(),
            "Loaded stock catalog"
        );
        Ok(catalog)
    }

    /// First exchange with exactly this identifier
    pub fn exchange(&self, name: &str) -> Option<&Exchange> {
        self.exchanges.iter().find(|e| e.name == name)
    }

    /// Number of exchanges
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Whether the catalog holds no exchanges
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

impl StockDirectory for Catalog {
    fn list_exchanges(&self) -> Vec<String> {
        self.exchanges.iter().map(|e| e.name.clone()).collect()
    }

    fn list_stocks(&self, exchange: &str) -> Vec<String> {
        self.exchange(exchange)
            .map(|e| e.stocks.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default()
    }

    fn price(&self, exchange: &str, stock: &str) -> Option<f64> {
        self.exchanges
            .iter()
            .filter(|e| e.name == exchange)
            .flat_map(|e| e.stocks.iter())
            .find(|s| s.name == stock)
            .map(|s| s.price)
    }
}

fn warn_on_duplicates(exchanges: &[Exchange]) {
    let mut seen = HashSet::new();
    for exchange in exchanges {
        if !seen.insert(exchange.name.as_str()) {
            warn!(exchange = %exchange.name, "Duplicate exchange identifier in stock data");
        }

        let mut stocks = HashSet::new();
        for stock in &exchange.stocks {
            if !stocks.insert(stock.name.as_str()) {
                warn!(
                    exchange = %exchange.name,
                    stock = %stock.name,
                    "Duplicate stock identifier in stock data"
                );
            }
        }
    }
}
