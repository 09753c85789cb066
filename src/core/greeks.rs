//! Pricing result
//!
//! Call and put prices plus first and second order sensitivities.

use serde::{Deserialize, Serialize};

/// Output of one Black-Scholes evaluation
///
/// Both prices are always filled in. Delta, theta and rho are for the option
/// type that was requested; gamma and vega are the same for calls and puts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionResult {
    pub call_price: f64,
    pub put_price: f64,
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Vega: dV/dσ, per unit of volatility
    pub vega: f64,
    /// Theta: dV/dt, per year
    pub theta: f64,
    /// Rho: dV/dr, per unit of rate
    pub rho: f64,
}

impl OptionResult {
    /// Field names in export order
    pub const FIELDS: [&'static str; 7] = [
        "Call Price",
        "Put Price",
        "Delta",
        "Gamma",
        "Vega",
        "Theta",
        "Rho",
    ];

    /// Values in the same order as [`OptionResult::FIELDS`]
    pub fn values(&self) -> [f64; 7] {
        [
            self.call_price,
            self.put_price,
            self.delta,
            self.gamma,
            self.vega,
            self.theta,
            self.rho,
        ]
    }

    /// Vega per 1% vol move
    pub fn vega_pct(&self) -> f64 {
        self.vega / 100.0
    }

    /// Theta per calendar day
    pub fn theta_per_day(&self) -> f64 {
        self.theta / 365.0
    }

    /// Rho per 1% rate move
    pub fn rho_pct(&self) -> f64 {
        self.rho / 100.0
    }

    /// All seven numbers are finite
    pub fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_order() {
        let r = OptionResult {
            call_price: 1.0,
            put_price: 2.0,
            delta: 3.0,
            gamma: 4.0,
            vega: 5.0,
            theta: 6.0,
            rho: 7.0,
        };
        assert_eq!(r.values(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(OptionResult::FIELDS[4], "Vega");
        assert!(r.is_finite());
    }

    #[test]
    fn test_unit_conversions() {
        let r = OptionResult {
            vega: 40.0,
            theta: -3.65,
            rho: 50.0,
            ..Default::default()
        };
        assert!((r.vega_pct() - 0.4).abs() < 1e-12);
        assert!((r.theta_per_day() + 0.01).abs() < 1e-12);
        assert!((r.rho_pct() - 0.5).abs() < 1e-12);

        let nan = OptionResult {
            gamma: f64::NAN,
            ..Default::default()
        };
        assert!(!nan.is_finite());
    }
}
