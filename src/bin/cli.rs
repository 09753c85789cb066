//! bs-quote CLI
//!
//! Interactive Black-Scholes pricer on a live Alpha Vantage quote.
//!
//! Usage: `bs-quote [config.toml]`. Logs go to stderr, filtered by `RUST_LOG`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use bs_quote::config::AppConfig;
use bs_quote::data::QuoteClient;
use bs_quote::driver;
use bs_quote::input::Prompter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let client = match QuoteClient::with_settings(&config.quote.base_url, config.quote.timeout()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    println!("Black-Scholes Option Pricer");
    println!("===========================\n");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match driver::run(&config, &client, &mut prompter) {
        Ok(report) => {
            tracing::info!(
                "Priced {} at strike {} ({} files written)",
                report.symbol,
                report.inputs.strike,
                report.written.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.is_quote_failure() => {
            eprintln!("Failed to fetch stock price: {}", e);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
