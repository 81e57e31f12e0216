//! Stock exchange menu bot
//!
//! This crate holds everything a front end needs to run the menu bot:
//!
//! - [`Catalog`]: a static, read-only set of exchanges and stock prices
//!   loaded once from JSON
//! - [`Navigator`]: the menu state machine (main menu, stock menu, price
//!   screen) that turns raw user text into lines to render
//! - [`Transcript`]: the rendered conversation a front end keeps
//! - [`BotConfig`]: data path, greeting and placeholder settings
//!
//! The navigator performs no I/O. A terminal or window layer forwards input
//! lines to [`Navigator::handle_input`] and renders the returned
//! [`NavigatorResponse`].

pub mod bot;
pub mod catalog;
pub mod config;
pub mod error;

pub use bot::{
    InputError, MenuSession, MenuState, Navigator, NavigatorResponse, Speaker, Transcript,
    TranscriptEntry,
};
pub use catalog::{Catalog, Exchange, Stock, StockDirectory};
pub use config::BotConfig;
pub use error::{CatalogError, Result, StockBotError};
