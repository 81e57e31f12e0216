//! Menu states, user input errors and line rendering
//!
//! Every rendered line carries its own trailing `\n` so a front end can
//! write lines verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Indentation in front of every selectable option
pub const OPTION_INDENT: &str = "      ";

/// Option shown on the price screen to return to the exchange list
pub const MAIN_MENU_OPTION: &str = "Main menu";

/// Option shown on the price screen to return to the stock list
pub const GO_BACK_OPTION: &str = "Go Back";

/// Which menu is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Nothing valid is displayed; the next input resets to the main menu
    #[default]
    Unset,
    /// List of exchanges
    MainMenu,
    /// List of stocks of the current exchange
    StockMenu,
    /// Price of a stock plus the back-navigation options
    StockPrice,
}

/// Recoverable user input errors, rendered as a single transcript line
///
/// Displayed as `ERROR {code:03}: {message}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    InvalidExchange,
    InvalidStock,
    InvalidBackOption,
    InvalidState,
}

impl InputError {
    /// Numeric code shown in the error line
    pub fn code(&self) -> u16 {
        match self {
            InputError::InvalidExchange => 1,
            InputError::InvalidStock => 2,
            InputError::InvalidBackOption => 3,
            InputError::InvalidState => 4,
        }
    }

    /// Message text without the code prefix
    pub fn message(&self) -> &'static str {
        match self {
            InputError::InvalidExchange => {
                "Invalid input. Please select a stock exchange from the list above."
            }
            InputError::InvalidStock => "Invalid input. Please select a stock from the list above.",
            InputError::InvalidBackOption => {
                "Invalid input. Please select a valid option to go back."
            }
            InputError::InvalidState => "Invalid state. Displaying main menu.",
        }
    }

    /// The error as a transcript line
    pub fn line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR {:03}: {}", self.code(), self.message())
    }
}

impl std::error::Error for InputError {}

/// Two fractional digits, always
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

fn option_line(option: &str) -> String {
    format!("{OPTION_INDENT}{option}\n")
}

/// Greeting, exchange prompt and one line per exchange
pub fn main_menu_lines(greeting: &str, exchanges: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(exchanges.len() + 2);
    lines.push(format!("=== {greeting} ===\n"));
    lines.push("=== Please select a Stock Exchange. ===\n".to_string());
    lines.extend(exchanges.iter().map(|e| option_line(e)));
    lines
}

/// Stock prompt and one line per stock
pub fn stock_menu_lines(stocks: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(stocks.len() + 1);
    lines.push("=== Please select a stock. ===\n".to_string());
    lines.extend(stocks.iter().map(|s| option_line(s)));
    lines
}

/// Price sentence followed by the two back-navigation options
pub fn stock_price_lines(stock: &str, price: f64) -> Vec<String> {
    vec![
        format!(
            "Stock Price of {stock} is {}. Please select an option.\n",
            format_price(price)
        ),
        option_line(MAIN_MENU_OPTION),
        option_line(GO_BACK_OPTION),
    ]
}

/// Options a user may pick on the price screen
pub fn back_options() -> Vec<String> {
    vec![MAIN_MENU_OPTION.to_string(), GO_BACK_OPTION.to_string()]
}

/// Case-insensitive exact match of already trimmed input against options
///
/// Returns the option in its canonical spelling.
pub fn find_option<'a>(options: &'a [String], input: &str) -> Option<&'a str> {
    let needle = input.to_lowercase();
    options
        .iter()
        .find(|option| option.to_lowercase() == needle)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(150.0), "150.00");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(1574.8), "1574.80");
        assert_eq!(format_price(164.216), "164.22");
    }

    #[test]
    fn test_error_lines() {
        assert_eq!(
            InputError::InvalidStock.line(),
            "ERROR 002: Invalid input. Please select a stock from the list above.\n"
        );
        assert_eq!(InputError::InvalidExchange.code(), 1);
        assert_eq!(InputError::InvalidState.code(), 4);
    }

    #[test]
    fn test_every_error_line_carries_its_code() {
        let expected = [
            (
                InputError::InvalidExchange,
                "ERROR 001: Invalid input. Please select a stock exchange from the list above.",
            ),
            (
                InputError::InvalidStock,
                "ERROR 002: Invalid input. Please select a stock from the list above.",
            ),
            (
                InputError::InvalidBackOption,
                "ERROR 003: Invalid input. Please select a valid option to go back.",
            ),
            (InputError::InvalidState, "ERROR 004: Invalid state. Displaying main menu."),
        ];
        for (error, text) in expected {
            assert_eq!(error.to_string(), text);
            assert!(error.line().starts_with(&format!("ERROR {:03}:", error.code())));
        }
    }

    #[test]
    fn test_main_menu_lines() {
        let lines = main_menu_lines("Hi", &["Nasdaq".to_string(), "NYSE".to_string()]);
        assert_eq!(
            lines,
            vec![
                "=== Hi ===\n",
                "=== Please select a Stock Exchange. ===\n",
                "      Nasdaq\n",
                "      NYSE\n",
            ]
        );
    }

    #[test]
    fn test_stock_price_lines() {
        let lines = stock_price_lines("AMD", 150.0);
        assert_eq!(lines[0], "Stock Price of AMD is 150.00. Please select an option.\n");
        assert_eq!(lines[1], "      Main menu\n");
        assert_eq!(lines[2], "      Go Back\n");
    }

    #[test]
    fn test_find_option_is_case_insensitive_and_exact() {
        let options = vec!["Nasdaq".to_string(), "New York Stock Exchange".to_string()];
        assert_eq!(find_option(&options, "NASDAQ"), Some("Nasdaq"));
        assert_eq!(
            find_option(&options, "new york stock exchange"),
            Some("New York Stock Exchange")
        );
        assert_eq!(find_option(&options, "nas"), None);
        assert_eq!(find_option(&options, "new york"), None);
    }

    #[test]
    fn test_default_state_is_unset() {
        assert_eq!(MenuState::default(), MenuState::Unset);
    }
}
