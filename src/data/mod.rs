//! Market data fetching
//!
//! Handles:
//! - Alpha Vantage GLOBAL_QUOTE for the live spot price

pub mod alpha_vantage;

pub use alpha_vantage::*;
