//! Payoff diagrams at expiry
//!
//! Profit and loss of simple option positions across a window of spot
//! prices around the strike, with a fixed premium paid or received:
//! - Long call / short call
//! - Long put
//! - Protective put (long stock plus long put)
//!
//! Also builds two composite strategies from the same table (bull call
//! spread, long straddle) and locates breakevens and extrema of any curve.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;

/// Default half-width of the spot window, in price units
pub const DEFAULT_RANGE: i64 = 30;

/// One row of the payoff table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub spot_price: i64,
    pub long_call: f64,
    pub short_call: f64,
    pub long_put: f64,
    pub protective_put: f64,
}

/// Payoff table for every integer spot in `[trunc(strike - range), trunc(strike + range)]`
pub fn payoff(strike: f64, premium: f64, range: i64) -> Vec<PayoffPoint> {
    let lo = (strike - range as f64) as i64;
    let hi = (strike + range as f64) as i64;

    (lo..=hi)
        .map(|s| {
            let spot = s as f64;
            let call = OptionType::Call.intrinsic(spot, strike);
            let long_call = call - premium;
            let short_call = premium - call;
            let long_put = OptionType::Put.intrinsic(spot, strike) - premium;
            // Stock position plus the long put
            let protective_put = (spot - strike) + long_put;

            PayoffPoint {
                spot_price: s,
                long_call,
                short_call,
                long_put,
                protective_put,
            }
        })
        .collect()
}

/// Which column of the payoff table to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    LongCall,
    ShortCall,
    LongPut,
    ProtectivePut,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::LongCall,
        Position::ShortCall,
        Position::LongPut,
        Position::ProtectivePut,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Position::LongCall => "Long Call",
            Position::ShortCall => "Short Call",
            Position::LongPut => "Long Put",
            Position::ProtectivePut => "Protective Put",
        }
    }

    pub fn value(&self, point: &PayoffPoint) -> f64 {
        match self {
            Position::LongCall => point.long_call,
            Position::ShortCall => point.short_call,
            Position::LongPut => point.long_put,
            Position::ProtectivePut => point.protective_put,
        }
    }
}

/// `(spot, value)` pairs of one column, ready for charting
pub fn series(points: &[PayoffPoint], position: Position) -> Vec<(i64, f64)> {
    points
        .iter()
        .map(|p| (p.spot_price, position.value(p)))
        .collect()
}

/// Composite strategies derived from the payoff table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyPoint {
    pub spot_price: i64,
    pub bull_call_spread: f64,
    pub straddle: f64,
}

fn lookup(points: &[PayoffPoint], spot: i64) -> Option<&PayoffPoint> {
    points.iter().find(|p| p.spot_price == spot)
}

/// Bull call spread: long call anchored at `lower`, short call anchored at `higher`
///
/// Each leg is re-based by its value at the anchor spot, so the curve is the
/// table's long-call and short-call columns shifted. `None` when either
/// anchor is outside the table.
pub fn bull_call_spread(points: &[PayoffPoint], lower: i64, higher: i64) -> Option<Vec<f64>> {
    let lc = lookup(points, lower)?.long_call;
    let sc = lookup(points, higher)?.short_call;

    Some(
        points
            .iter()
            .map(|p| p.long_call - lc + p.short_call - sc)
            .collect(),
    )
}

/// Long straddle: long call plus long put at the same strike
pub fn straddle(points: &[PayoffPoint]) -> Vec<f64> {
    points.iter().map(|p| p.long_call + p.long_put).collect()
}

/// Both composite strategies, spread anchored 15 and 25 above the lowest spot
///
/// The spread is all NaN when an anchor falls outside the table, including
/// when it would overflow `i64` at the top of the range.
pub fn strategy_curves(points: &[PayoffPoint]) -> Vec<StrategyPoint> {
    let Some(min_spot) = points.iter().map(|p| p.spot_price).min() else {
        return Vec::new();
    };

    let anchors = min_spot.checked_add(15).zip(min_spot.checked_add(25));
    let spread = anchors
        .and_then(|(lower, higher)| bull_call_spread(points, lower, higher))
        .unwrap_or_else(|| vec![f64::NAN; points.len()]);
    let straddle = straddle(points);

    points
        .iter()
        .zip(spread)
        .zip(straddle)
        .map(|((p, bull_call_spread), straddle)| StrategyPoint {
            spot_price: p.spot_price,
            bull_call_spread,
            straddle,
        })
        .collect()
}

/// Spots where a curve changes sign
///
/// Every consecutive pair with `y[i-1] * y[i] <= 0` contributes the midpoint
/// of its two spots. A curve that touches zero at a grid point reports both
/// neighbouring midpoints.
pub fn breakevens(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    xs.windows(2)
        .zip(ys.windows(2))
        .filter(|(_, y)| y[0] * y[1] <= 0.0)
        .map(|(x, _)| (x[0] + x[1]) / 2.0)
        .collect()
}

/// First maximum and first minimum of a curve as `(x, y)` pairs
pub fn extrema(xs: &[f64], ys: &[f64]) -> Option<((f64, f64), (f64, f64))> {
    let mut it = xs.iter().copied().zip(ys.iter().copied());
    let first = it.next()?;
    let (max, min) = it.fold((first, first), |(max, min), p| {
        (
            if p.1 > max.1 { p } else { max },
            if p.1 < min.1 { p } else { min },
        )
    });
    Some((max, min))
}

/// Breakevens and extrema of one named curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub name: String,
    pub max_profit: (f64, f64),
    pub max_loss: (f64, f64),
    pub breakevens: Vec<f64>,
}

pub fn summarize(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Option<CurveSummary> {
    let (max_profit, max_loss) = extrema(xs, ys)?;
    Some(CurveSummary {
        name: name.into(),
        max_profit,
        max_loss,
        breakevens: breakevens(xs, ys),
    })
}

/// Summaries for the four basic positions and both strategies
pub fn summarize_all(points: &[PayoffPoint], strategies: &[StrategyPoint]) -> Vec<CurveSummary> {
    let xs: Vec<f64> = points.iter().map(|p| p.spot_price as f64).collect();

    let mut out: Vec<CurveSummary> = Position::ALL
        .iter()
        .filter_map(|pos| {
            let ys: Vec<f64> = points.iter().map(|p| pos.value(p)).collect();
            summarize(pos.name(), &xs, &ys)
        })
        .collect();

    let sx: Vec<f64> = strategies.iter().map(|p| p.spot_price as f64).collect();
    let spread: Vec<f64> = strategies.iter().map(|p| p.bull_call_spread).collect();
    let strad: Vec<f64> = strategies.iter().map(|p| p.straddle).collect();

    if spread.iter().all(|v| v.is_finite()) {
        out.extend(summarize("Bull Call Spread", &sx, &spread));
    }
    out.extend(summarize("Straddle", &sx, &strad));
    out
}
