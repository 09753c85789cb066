//! CSV export
//!
//! Three flat files, all numeric, written with fixed headers. Each writer
//! truncates its target first.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::{OptionResult, PricerResult, PricingInputs};
use crate::models::PayoffPoint;

pub const OPTION_RESULT_FILE: &str = "option_result.csv";
pub const CHART_DATA_FILE: &str = "option_chart_data.csv";
pub const PAYOFF_FILE: &str = "payoff_diagram.csv";

const INPUT_HEADER: [&str; 5] = [
    "Spot Price",
    "Strike Price",
    "Time to Expiry",
    "Risk-Free Rate",
    "Volatility",
];

const CHART_HEADER: [&str; 8] = [
    "Strike",
    "CallPrice",
    "PutPrice",
    "Delta",
    "Gamma",
    "Vega",
    "Theta",
    "Rho",
];

const PAYOFF_HEADER: [&str; 5] = [
    "SpotPrice",
    "LongCall",
    "ShortCall",
    "LongPut",
    "ProtectivePut",
];

/// Shortest representation that parses back to the same value
fn num(v: f64) -> String {
    v.to_string()
}

/// Inputs block, a blank line, then the seven outputs
pub fn write_option_result(
    path: impl AsRef<Path>,
    inputs: &PricingInputs,
    result: &OptionResult,
) -> PricerResult<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;

    {
        let mut wtr = csv::Writer::from_writer(&mut file);
        wtr.write_record(INPUT_HEADER)?;
        wtr.write_record([
            num(inputs.spot),
            num(inputs.strike),
            num(inputs.time),
            num(inputs.rate),
            num(inputs.vol),
        ])?;
        wtr.flush()?;
    }

    file.write_all(b"\n")?;

    {
        let mut wtr = csv::Writer::from_writer(&mut file);
        wtr.write_record(OptionResult::FIELDS)?;
        wtr.write_record(result.values().map(num))?;
        wtr.flush()?;
    }

    tracing::info!("Saved option result to {}", path.display());
    Ok(())
}

/// One row per swept strike with all seven outputs
pub fn write_chart_data(
    path: impl AsRef<Path>,
    rows: &[(i64, OptionResult)],
) -> PricerResult<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(CHART_HEADER)?;
    for (strike, res) in rows {
        let mut record = vec![strike.to_string()];
        record.extend(res.values().map(num));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;

    tracing::info!("Saved full chart data to {}", path.display());
    Ok(())
}

/// One row per spot price with the four payoff columns
pub fn write_payoff(path: impl AsRef<Path>, points: &[PayoffPoint]) -> PricerResult<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(PAYOFF_HEADER)?;
    for p in points {
        wtr.write_record([
            p.spot_price.to_string(),
            num(p.long_call),
            num(p.short_call),
            num(p.long_put),
            num(p.protective_put),
        ])?;
    }
    wtr.flush()?;

    tracing::info!("Saved payoff diagram to {}", path.display());
    Ok(())
}
