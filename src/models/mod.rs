//! Pricing Models
//!
//! Implements:
//! - Black-Scholes (closed-form prices and Greeks)
//! - Payoff diagrams at expiry

pub mod black_scholes;
pub mod payoff;

pub use black_scholes::*;
pub use payoff::*;
