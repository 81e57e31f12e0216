//! Stock menu bot
//!
//! The [`Navigator`] is a small state machine that walks a user through
//! exchange selection, stock selection and price display. It never touches a
//! terminal or window: every call returns a [`NavigatorResponse`] that the
//! front end renders, usually through a [`Transcript`].
//!
//! # Example
//!
//! ```rust
//! use stockbot_core::{BotConfig, Catalog, MenuState, Navigator};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"stockExchange":"Nasdaq","topStocks":[{"stockName":"AMD","price":150}]}]"#,
//! )?;
//! let mut navigator = Navigator::new(catalog, &BotConfig::default());
//! navigator.start();
//!
//! let response = navigator.handle_input("nasdaq");
//! assert_eq!(response.state, MenuState::StockMenu);
//! assert_eq!(response.options, vec!["AMD".to_string()]);
//! # Ok::<(), stockbot_core::CatalogError>(())
//! ```

pub mod menu;
pub mod transcript;

use crate::catalog::{Catalog, StockDirectory};
use crate::config::BotConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use menu::{InputError, MenuState};
pub use transcript::{Speaker, Transcript, TranscriptEntry};

/// Mutable navigation state owned by a [`Navigator`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSession {
    /// Menu currently displayed
    pub state: MenuState,
    /// Exchange picked from the main menu
    pub current_exchange: Option<String>,
    /// Stocks of `current_exchange`, fetched once and reused on "Go Back"
    pub current_stocks: Option<Vec<String>>,
}

impl MenuSession {
    /// Back to a fresh main menu
    pub fn reset_to_main_menu(&mut self) {
        self.state = MenuState::MainMenu;
        self.current_exchange = None;
        self.current_stocks = None;
    }
}

/// Outcome of one input event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigatorResponse {
    /// Whether the displayed menu changed
    pub transitioned: bool,
    /// Lines to render after the optional clear, each ending in `\n`
    pub lines: Vec<String>,
    /// The front end must wipe its transcript before writing `lines`
    pub clear_transcript: bool,
    /// Trimmed user input to echo, `None` for ignored input
    pub echo: Option<String>,
    /// Options offered by a newly displayed menu, empty on errors
    pub options: Vec<String>,
    /// User input error reported in `lines`, if any
    pub error: Option<InputError>,
    /// Menu state after handling the input
    pub state: MenuState,
}

impl NavigatorResponse {
    fn ignored(state: MenuState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    fn rejected(error: InputError, state: MenuState) -> Self {
        Self {
            lines: vec![error.line()],
            error: Some(error),
            state,
            ..Default::default()
        }
    }

    /// True when the input was ignored entirely
    pub fn is_noop(&self) -> bool {
        !self.transitioned && self.lines.is_empty() && self.echo.is_none() && !self.clear_transcript
    }
}

/// Menu navigation state machine over a stock directory
#[derive(Debug)]
pub struct Navigator<D = Catalog> {
    directory: D,
    greeting: String,
    placeholder: String,
    session: MenuSession,
}

impl<D: StockDirectory> Navigator<D> {
    /// Create a navigator positioned on the main menu
    pub fn new(directory: D, config: &BotConfig) -> Self {
        let mut session = MenuSession::default();
        session.reset_to_main_menu();
        Self::with_session(directory, config, session)
    }

    /// Create a navigator resuming an existing session
    pub fn with_session(directory: D, config: &BotConfig, session: MenuSession) -> Self {
        Self {
            directory,
            greeting: config.greeting.clone(),
            placeholder: config.placeholder.trim().to_string(),
            session,
        }
    }

    /// Display the main menu; used once at startup
    pub fn start(&mut self) -> NavigatorResponse {
        self.session.reset_to_main_menu();
        debug!("Displaying main menu");
        self.display_main_menu()
    }

    /// Handle one line of raw user input
    pub fn handle_input(&mut self, raw: &str) -> NavigatorResponse {
        let input = raw.trim();
        if input.is_empty() || input == self.placeholder {
            return NavigatorResponse::ignored(self.session.state);
        }

        let mut response = match self.session.state {
            MenuState::MainMenu => self.select_exchange(input),
            MenuState::StockMenu => self.select_stock(input),
            MenuState::StockPrice => self.select_back_option(input),
            MenuState::Unset => self.recover(),
        };
        response.echo = Some(input.to_string());
        response
    }

    /// Current menu state
    pub fn state(&self) -> MenuState {
        self.session.state
    }

    /// Exchange picked from the main menu, if any
    pub fn current_exchange(&self) -> Option<&str> {
        self.session.current_exchange.as_deref()
    }

    /// Cached stock list of the current exchange, if any
    pub fn current_stock_list(&self) -> Option<&[String]> {
        self.session.current_stocks.as_deref()
    }

    /// The whole session
    pub fn session(&self) -> &MenuSession {
        &self.session
    }

    /// Render the exchange list and enter the main menu
    pub fn display_main_menu(&mut self) -> NavigatorResponse {
        let exchanges = self.directory.list_exchanges();
        self.session.state = MenuState::MainMenu;
        NavigatorResponse {
            transitioned: true,
            lines: menu::main_menu_lines(&self.greeting, &exchanges),
            options: exchanges,
            state: MenuState::MainMenu,
            ..Default::default()
        }
    }

    /// Render the stock list of `exchange` and enter the stock menu
    ///
    /// The stock list is fetched only when none is cached.
    pub fn display_stock_menu(&mut self, exchange: &str) -> NavigatorResponse {
        let stocks = self
            .session
            .current_stocks
            .get_or_insert_with(|| self.directory.list_stocks(exchange))
            .clone();
        if self.session.current_exchange.is_none() {
            self.session.current_exchange = Some(exchange.to_string());
        }
        self.session.state = MenuState::StockMenu;

        NavigatorResponse {
            transitioned: true,
            lines: menu::stock_menu_lines(&stocks),
            options: stocks,
            state: MenuState::StockMenu,
            ..Default::default()
        }
    }

    /// Render the price of `stock` and enter the price screen
    ///
    /// An unknown exchange/stock pair is reported as an invalid stock pick.
    pub fn display_stock_price(&mut self, exchange: &str, stock: &str) -> NavigatorResponse {
        let Some(price) = self.directory.price(exchange, stock) else {
            info!(exchange, stock, "No price for selected stock");
            return NavigatorResponse::rejected(InputError::InvalidStock, self.session.state);
        };
        self.session.state = MenuState::StockPrice;

        NavigatorResponse {
            transitioned: true,
            lines: menu::stock_price_lines(stock, price),
            options: menu::back_options(),
            state: MenuState::StockPrice,
            ..Default::default()
        }
    }

    fn select_exchange(&mut self, input: &str) -> NavigatorResponse {
        let exchanges = self.directory.list_exchanges();
        match menu::find_option(&exchanges, input) {
            Some(exchange) => {
                debug!(exchange, "Exchange selected");
                self.session.current_exchange = None;
                self.session.current_stocks = None;
                self.display_stock_menu(exchange)
            }
            None => {
                info!(input, "Invalid exchange selection");
                NavigatorResponse::rejected(InputError::InvalidExchange, MenuState::MainMenu)
            }
        }
    }

    fn select_stock(&mut self, input: &str) -> NavigatorResponse {
        let Some(exchange) = self.session.current_exchange.clone() else {
            return self.recover();
        };
        let Some(stocks) = self.session.current_stocks.as_deref() else {
            return self.recover();
        };

        match menu::find_option(stocks, input).map(str::to_string) {
            Some(stock) => {
                debug!(exchange = %exchange, stock = %stock, "Stock selected");
                self.display_stock_price(&exchange, &stock)
            }
            None => {
                info!(input, "Invalid stock selection");
                NavigatorResponse::rejected(InputError::InvalidStock, MenuState::StockMenu)
            }
        }
    }

    fn select_back_option(&mut self, input: &str) -> NavigatorResponse {
        let choice = input.to_lowercase();
        if choice == MAIN_MENU_KEY {
            debug!("Returning to main menu");
            self.session.reset_to_main_menu();
            let mut response = self.display_main_menu();
            response.clear_transcript = true;
            response
        } else if choice == GO_BACK_KEY {
            match self.session.current_exchange.clone() {
                Some(exchange) if self.session.current_stocks.is_some() => {
                    debug!(exchange = %exchange, "Going back to stock menu");
                    self.display_stock_menu(&exchange)
                }
                _ => self.recover(),
            }
        } else {
            info!(input, "Invalid back-navigation option");
            NavigatorResponse::rejected(InputError::InvalidBackOption, MenuState::StockPrice)
        }
    }

    fn recover(&mut self) -> NavigatorResponse {
        warn!(state = ?self.session.state, "Invalid menu state, resetting to main menu");
        self.session.reset_to_main_menu();

        let mut response = self.display_main_menu();
        response.lines.insert(0, InputError::InvalidState.line());
        response.error = Some(InputError::InvalidState);
        response.clear_transcript = true;
        response
    }
}

const MAIN_MENU_KEY: &str = "main menu";
const GO_BACK_KEY: &str = "go back";
