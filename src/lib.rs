//! # bs-quote - Black-Scholes pricing on a live spot quote
//!
//! Prices a European option on one stock with the closed-form Black-Scholes
//! formula, using the latest price from Alpha Vantage as spot, and renders
//! the results as text, ASCII charts, CSV files and an SVG payoff diagram.
//!
//! ## Key Components
//!
//! - **Data Fetching**: Alpha Vantage `GLOBAL_QUOTE` with a request timeout
//! - **Black-Scholes**: call and put prices, delta, gamma, vega, theta, rho
//! - **Payoff**: long/short call, long put, protective put, bull call spread
//!   and straddle at expiry, with breakevens and extrema
//! - **Report**: CSV export, ASCII bar charts, text tables, SVG plot
//! - **Driver**: the interactive prompt-and-render sequence
//!
//! ## Usage
//!
//! ```rust
//! use bs_quote::prelude::*;
//!
//! let r = bs_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! assert!((r.call_price - 10.45).abs() < 0.01);
//!
//! let table = payoff(100.0, r.call_price, 30);
//! assert_eq!(table.len(), 61);
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Retry or rate-limit quote requests
//! - Price more than one underlying per run
//! - Validate inputs (T = 0 or σ = 0 gives inf/NaN)

pub mod config;
pub mod core;
pub mod data;
pub mod driver;
pub mod input;
pub mod models;
pub mod report;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{OptionResult, OptionType, PricerError, PricerResult, PricingInputs};

    // Data fetching
    pub use crate::data::{parse_quote_body, price_or_sentinel, QuoteClient, SpotQuote};

    // Models
    pub use crate::models::{
        norm_cdf,
        norm_pdf,
        // Black-Scholes
        price as bs_price,
        price_inputs,
        strike_sweep,
        // Payoff
        payoff,
        strategy_curves,
        summarize_all,
        CurveSummary,
        PayoffPoint,
        Position,
        StrategyPoint,
    };

    // Presentation
    pub use crate::report::{magnitude_chart, signed_chart};

    // Driver
    pub use crate::config::AppConfig;
    pub use crate::driver::{run, RunReport, SpotSource};
    pub use crate::input::{parse_with_fallback, Parsed, Prompter};
}

// Re-export main types at crate root
pub use crate::core::{OptionType, PricerError, PricerResult, PricingInputs};
