//! Stock menu bot CLI
//!
//! An interactive terminal front end for the stock exchange menu bot.
//!
//! # Usage
//!
//! ```bash
//! # Point the bot at a stock data file
//! export STOCKBOT_DATA="./stock_data.json"
//!
//! # Run the bot
//! cargo run --bin stock-bot -p stockbot-cli
//! ```

mod repl;

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use stockbot_core::{BotConfig, Catalog, Navigator};
use stockbot_utils::LogConfig;
use tracing::info;

use crate::repl::Repl;

#[derive(Parser, Debug)]
#[command(name = "stock-bot")]
#[command(about = "Menu-driven stock exchange price bot", long_about = None)]
struct Args {
    /// Path of the JSON stock data file (overrides STOCKBOT_DATA)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Greeting shown on the main menu
    #[arg(long)]
    greeting: Option<String>,

    /// Log filter directive, e.g. "debug" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Column user input is right-aligned to
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Prefix every rendered line with its time
    #[arg(long)]
    timestamps: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = LogConfig::from_env().with_json(args.json_logs);
    if let Some(level) = &args.log_level {
        log_config = log_config.with_filter(level.clone());
    }
    stockbot_utils::init_tracing_with(&log_config);

    // Flags win over the environment; validation sees the merged result
    let mut builder = BotConfig::builder()
        .with_env()
        .show_timestamps(args.timestamps);
    if let Some(path) = args.data {
        builder = builder.data_path(path);
    }
    if let Some(greeting) = args.greeting {
        builder = builder.greeting(greeting);
    }
    let config = builder.build();
    config.validate().context("invalid configuration")?;

    let catalog = Catalog::from_path(&config.data_path).with_context(|| {
        format!("failed to load stock data from {}", config.data_path.display())
    })?;
    info!(
        path = %config.data_path.display(),
        exchanges = catalog.len(),
        "Stock catalog ready"
    );

    let navigator = Navigator::new(catalog, &config);
    let mut repl = Repl::new(navigator, &config, args.width);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
