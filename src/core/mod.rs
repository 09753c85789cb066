//! Core data types
//!
//! Defines fundamental types:
//! - OptionType: call or put
//! - PricingInputs: spot, strike, time, rate, volatility
//! - OptionResult: prices and Greeks from one pricing call

pub mod option;
pub mod greeks;
pub mod error;

pub use option::*;
pub use greeks::*;
pub use error::*;
