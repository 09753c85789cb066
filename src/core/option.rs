//! Option type and pricing inputs
//!
//! A single European option on one underlying, priced with fixed spot, rate
//! and volatility.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Black-Scholes inputs for one underlying
///
/// Nothing is validated: a zero `time` or `vol` flows through the formulas
/// as infinities or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Spot price S
    pub spot: f64,
    /// Strike price K
    pub strike: f64,
    /// Time to expiry T in years
    pub time: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Annualised volatility σ
    pub vol: f64,
}

impl PricingInputs {
    pub fn new(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            time,
            rate,
            vol,
        }
    }

    /// Same inputs at a different strike
    pub fn with_strike(&self, strike: f64) -> Self {
        Self { strike, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_with_strike() {
        let inputs = PricingInputs::new(100.0, 105.0, 0.5, 0.01, 0.2);
        let moved = inputs.with_strike(90.0);

        assert_eq!(moved.strike, 90.0);
        assert_eq!(moved.spot, inputs.spot);
        assert_eq!(moved.vol, inputs.vol);
    }
}
