//! Plain text tables

use std::fmt::Write;

use crate::core::{OptionResult, PricingInputs};
use crate::models::CurveSummary;

/// Inputs echoed back before pricing
pub fn render_inputs(symbol: &str, inputs: &PricingInputs) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Inputs ({}) ---", symbol);
    let _ = writeln!(out, "Spot  : ${:.2}", inputs.spot);
    let _ = writeln!(out, "Strike: ${:.2}", inputs.strike);
    let _ = writeln!(out, "Time  : {:.4} years ({:.0} days)", inputs.time, inputs.time * 365.0);
    let _ = writeln!(out, "Rate  : {:.2}%", inputs.rate * 100.0);
    let _ = writeln!(out, "Vol   : {:.2}%", inputs.vol * 100.0);
    out
}

/// Prices and Greeks of a single evaluation
pub fn render_result(result: &OptionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Option Pricing ---");
    let _ = writeln!(out, "Call Price: ${:.4}", result.call_price);
    let _ = writeln!(out, "Put Price : ${:.4}", result.put_price);

    let _ = writeln!(out, "\n--- Greeks ---");
    let _ = writeln!(out, "Delta: {:.4}", result.delta);
    let _ = writeln!(out, "Gamma: {:.6}", result.gamma);
    let _ = writeln!(out, "Vega : {:.4} ({:.4} per 1% vol)", result.vega, result.vega_pct());
    let _ = writeln!(out, "Theta: {:.4} ({:.4} per day)", result.theta, result.theta_per_day());
    let _ = writeln!(out, "Rho  : {:.4} ({:.4} per 1% rate)", result.rho, result.rho_pct());
    out
}

/// Strike sweep as a fixed-width table
pub fn render_sweep(rows: &[(i64, OptionResult)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Strike Sweep ---");
    let _ = writeln!(
        out,
        "{:>6} {:>10} {:>10} {:>8} {:>8} {:>9} {:>9} {:>9}",
        "Strike", "Call", "Put", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    for (strike, r) in rows {
        let _ = writeln!(
            out,
            "{:>6} {:>10.4} {:>10.4} {:>8.4} {:>8.5} {:>9.4} {:>9.4} {:>9.4}",
            strike, r.call_price, r.put_price, r.delta, r.gamma, r.vega, r.theta, r.rho
        );
    }
    out
}

/// Max profit, max loss and breakevens per payoff curve
pub fn render_summaries(summaries: &[CurveSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Payoff Summary ---");

    for s in summaries {
        let be = if s.breakevens.is_empty() {
            "none".to_string()
        } else {
            s.breakevens
                .iter()
                .map(|b| format!("{:.1}", b))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(
            out,
            "{:<16} max profit {:>8.2} @ {:<6.0} max loss {:>8.2} @ {:<6.0} breakeven: {}",
            s.name, s.max_profit.1, s.max_profit.0, s.max_loss.1, s.max_loss.0, be
        );
    }
    out
}
