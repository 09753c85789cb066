//! Black-Scholes Model
//!
//! Provides:
//! - European call and put pricing
//! - Delta, gamma, vega, theta and rho in closed form
//! - Strike sweeps at fixed spot, time, rate and volatility
//!
//! Greeks are reported in raw units: vega per unit of σ, theta per year,
//! rho per unit of r. See [`OptionResult`] for per-1% and per-day helpers.
//!
//! Inputs are not validated. T = 0 or σ = 0 divides by zero and the result
//! carries infinities or NaN; callers that need finite numbers must guard.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::core::{OptionResult, OptionType, PricingInputs};

/// Standard normal CDF, Φ(x) = ½·erfc(−x/√2)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes prices and Greeks
///
/// Both prices are always computed; `option_type` picks which delta, theta
/// and rho are returned.
pub fn price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> OptionResult {
    let sqrt_t = time.sqrt();
    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();
    let pdf_d1 = norm_pdf(d1);
    let phi = option_type.phi();

    let call_price = spot * norm_cdf(d1) - strike * df * norm_cdf(d2);
    let put_price = strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1);

    // Call: N(d1); put: N(d1) - 1 = -N(-d1)
    let delta = phi * norm_cdf(phi * d1);

    // Gamma and vega are the same for call and put
    let gamma = pdf_d1 / (spot * vol * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;

    let decay = -(spot * pdf_d1 * vol) / (2.0 * sqrt_t);
    let theta = decay - phi * rate * strike * df * norm_cdf(phi * d2);
    let rho = phi * strike * time * df * norm_cdf(phi * d2);

    OptionResult {
        call_price,
        put_price,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// [`price`] on a bundled set of inputs
pub fn price_inputs(inputs: &PricingInputs, option_type: OptionType) -> OptionResult {
    price(
        inputs.spot,
        inputs.strike,
        inputs.time,
        inputs.rate,
        inputs.vol,
        option_type,
    )
}

/// Price every integer strike in `[from, to]` stepping by `step`
///
/// Spot, time, rate and volatility come from `inputs`; its strike is ignored.
/// A zero step is treated as one.
pub fn strike_sweep(
    inputs: &PricingInputs,
    option_type: OptionType,
    from: i64,
    to: i64,
    step: usize,
) -> Vec<(i64, OptionResult)> {
    (from..=to)
        .step_by(step.max(1))
        .map(|k| (k, price_inputs(&inputs.with_strike(k as f64), option_type)))
        .collect()
}

/// Symmetric strike window around spot: `trunc(spot) ± half_width`
pub fn strike_window(spot: f64, half_width: i64) -> (i64, i64) {
    ((spot - half_width as f64) as i64, (spot + half_width as f64) as i64)
}
