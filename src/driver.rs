//! Interactive run
//!
//! One pass, in order: credentials and symbol, live spot, pricing inputs,
//! single-strike pricing, strike sweep, payoff diagrams. Every table and
//! chart goes to the prompter's writer; files go to the output directory.
//!
//! Only two things stop a run: the quote fetch failing and a non-positive
//! spot. Export failures are reported and skipped.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::core::{OptionResult, OptionType, PricerError, PricerResult, PricingInputs};
use crate::data::QuoteClient;
use crate::input::{Parsed, Prompter};
use crate::models::{
    payoff, price_inputs, series, strategy_curves, strike_sweep, strike_window, summarize_all,
    CurveSummary, PayoffPoint, Position, StrategyPoint,
};
use crate::report::{
    magnitude_chart, payoff_svg, render_inputs, render_result, render_summaries, render_sweep,
    signed_chart, write_chart_data, write_option_result, write_payoff, CHART_DATA_FILE,
    OPTION_RESULT_FILE, PAYOFF_FILE, PAYOFF_SVG_FILE,
};

/// Where the spot price comes from
pub trait SpotSource {
    fn fetch_price(&self, symbol: &str, api_key: &str) -> PricerResult<f64>;
}

impl SpotSource for QuoteClient {
    fn fetch_price(&self, symbol: &str, api_key: &str) -> PricerResult<f64> {
        QuoteClient::fetch_price(self, symbol, api_key)
    }
}

impl<F> SpotSource for F
where
    F: Fn(&str, &str) -> PricerResult<f64>,
{
    fn fetch_price(&self, symbol: &str, api_key: &str) -> PricerResult<f64> {
        self(symbol, api_key)
    }
}

/// Which pricing inputs came from the user and which fell back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultedInputs {
    pub strike: bool,
    pub time: bool,
    pub rate: bool,
    pub vol: bool,
}

/// Everything a run computed
#[derive(Debug, Clone)]
pub struct RunReport {
    pub symbol: String,
    pub inputs: PricingInputs,
    pub defaulted: DefaultedInputs,
    pub result: OptionResult,
    pub sweep: Vec<(i64, OptionResult)>,
    pub payoff: Vec<PayoffPoint>,
    pub strategies: Vec<StrategyPoint>,
    pub summaries: Vec<CurveSummary>,
    /// Files written successfully, in order
    pub written: Vec<PathBuf>,
}

/// Prompt, fetch, price, render and export
pub fn run<S, R, W>(
    config: &AppConfig,
    source: &S,
    prompter: &mut Prompter<R, W>,
) -> PricerResult<RunReport>
where
    S: SpotSource,
    R: BufRead,
    W: Write,
{
    let api_key = match &config.quote.api_key {
        Some(key) => key.clone(),
        None => prompter
            .read_line("Enter API Key for Alpha Vantage: ")?
            .unwrap_or_default()
            .trim()
            .to_string(),
    };

    let symbol = prompter
        .prompt_text(
            &format!("Enter Stock Symbol (e.g., {}): ", config.defaults.symbol),
            &config.defaults.symbol,
        )?
        .value;

    let spot = source.fetch_price(&symbol, &api_key).map_err(|e| {
        tracing::error!("Quote fetch for {} failed: {}", symbol, e);
        e
    })?;

    if spot.is_nan() || spot <= 0.0 {
        return Err(PricerError::invalid_input(format!(
            "Non-positive spot price {} for {}",
            spot, symbol
        )));
    }

    let out = prompter.writer();
    writeln!(out, "Live Stock Price for {}: ${:.2}", symbol, spot)?;

    let d = &config.defaults;
    let strike = prompter.prompt_number(
        &format!("Enter Strike Price (K) [default: spot+{}]: ", d.strike_offset),
        spot + d.strike_offset,
    )?;
    let time = prompter.prompt_number(
        &format!("Enter Time to Expiry (in years) [default: {}]: ", d.time),
        d.time,
    )?;
    let rate = prompter.prompt_number(
        &format!("Enter Risk-Free Rate (as decimal, e.g. 0.05) [default: {}]: ", d.rate),
        d.rate,
    )?;
    let vol = prompter.prompt_number(
        &format!("Enter Volatility (as decimal, e.g. 0.2) [default: {}]: ", d.vol),
        d.vol,
    )?;

    let defaulted = DefaultedInputs {
        strike: strike.defaulted,
        time: time.defaulted,
        rate: rate.defaulted,
        vol: vol.defaulted,
    };
    let inputs = PricingInputs::new(spot, strike.value, time.value, rate.value, vol.value);
    log_fallbacks(&[
        ("strike", strike),
        ("time", time),
        ("rate", rate),
        ("vol", vol),
    ]);

    let result = price_inputs(&inputs, OptionType::Call);
    if !result.is_finite() {
        tracing::warn!("Non-finite pricing output for {:?}", inputs);
    }

    let mut written = Vec::new();
    let out = prompter.writer();

    write!(out, "{}", render_inputs(&symbol, &inputs))?;
    write!(out, "{}", render_result(&result))?;

    let path = config.output.path(OPTION_RESULT_FILE);
    export(out, "option result", path, &mut written, |p| {
        write_option_result(p, &inputs, &result)
    })?;

    // Strike sweep
    let (from, to) = strike_window(spot, config.sweep.half_width);
    let sweep = strike_sweep(&inputs, OptionType::Call, from, to, config.sweep.step);

    let calls: Vec<(i64, f64)> = sweep.iter().map(|(k, r)| (*k, r.call_price)).collect();
    let puts: Vec<(i64, f64)> = sweep.iter().map(|(k, r)| (*k, r.put_price)).collect();
    let deltas: Vec<(i64, f64)> = sweep.iter().map(|(k, r)| (*k, r.delta)).collect();

    let chart = &config.chart;
    write!(out, "{}", render_sweep(&sweep))?;
    write!(
        out,
        "{}",
        magnitude_chart("Call Price vs Strike Price", &calls, chart.price_scale)
    )?;
    write!(
        out,
        "{}",
        magnitude_chart("Put Price vs Strike Price", &puts, chart.price_scale)
    )?;
    write!(
        out,
        "{}",
        magnitude_chart(
            &format!("Delta (x{}) vs Strike Price", chart.delta_scale),
            &deltas,
            chart.delta_scale
        )
    )?;

    let path = config.output.path(CHART_DATA_FILE);
    export(out, "full chart data", path, &mut written, |p| {
        write_chart_data(p, &sweep)
    })?;

    // Payoff diagrams, priced with the call premium
    let points = payoff(inputs.strike, result.call_price, config.payoff.range);
    for pos in Position::ALL {
        write!(
            out,
            "{}",
            signed_chart(
                &format!("{} Payoff", pos.name()),
                &series(&points, pos),
                config.payoff.offset
            )
        )?;
    }

    let path = config.output.path(PAYOFF_FILE);
    export(out, "payoff diagram", path, &mut written, |p| {
        write_payoff(p, &points)
    })?;

    let strategies = strategy_curves(&points);
    let summaries = summarize_all(&points, &strategies);
    write!(out, "{}", render_summaries(&summaries))?;

    if config.output.svg {
        let path = config.output.path(PAYOFF_SVG_FILE);
        export(out, "payoff chart", path, &mut written, |p| {
            payoff_svg(p, &points, &strategies)
        })?;
    }

    out.flush()?;

    Ok(RunReport {
        symbol,
        inputs,
        defaulted,
        result,
        sweep,
        payoff: points,
        strategies,
        summaries,
        written,
    })
}

fn log_fallbacks(fields: &[(&str, Parsed<f64>)]) {
    for (name, parsed) in fields {
        if parsed.defaulted {
            tracing::debug!("Using default {} = {}", name, parsed.value);
        }
    }
}

/// Run one writer; a failure is reported on `out` and logged, never returned
fn export<W, F>(
    out: &mut W,
    what: &str,
    path: PathBuf,
    written: &mut Vec<PathBuf>,
    write_file: F,
) -> PricerResult<()>
where
    W: Write,
    F: FnOnce(&PathBuf) -> PricerResult<()>,
{
    match write_file(&path) {
        Ok(()) => {
            writeln!(out, "Saved {} to {}", what, path.display())?;
            written.push(path);
        }
        Err(e) => {
            tracing::warn!("Could not write {}: {}", path.display(), e);
            writeln!(out, "Could not save {} to {}", what, path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.output.dir = dir.to_path_buf();
        config.output.svg = false;
        config
    }

    #[test]
    fn test_run_with_defaults() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut prompter = Prompter::new(Cursor::new("key\nIBM\n\n\n\n\n"), Vec::new());
        let source = |symbol: &str, key: &str| -> PricerResult<f64> {
            assert_eq!(symbol, "IBM");
            assert_eq!(key, "key");
            Ok(100.0)
        };

        let report = run(&config, &source, &mut prompter).unwrap();

        assert_eq!(report.inputs, PricingInputs::new(100.0, 105.0, 0.5, 0.01, 0.2));
        assert_eq!(
            report.defaulted,
            DefaultedInputs {
                strike: true,
                time: true,
                rate: true,
                vol: true
            }
        );
        assert_eq!(report.sweep.len(), 9);
        assert_eq!(report.payoff.len(), 61);
        assert_eq!(report.written.len(), 3);
        for p in &report.written {
            assert!(p.exists());
        }
    }

    #[test]
    fn test_api_key_from_config_skips_prompt() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.quote.api_key = Some("from-config".to_string());

        let mut prompter = Prompter::new(Cursor::new("MSFT\n100\n1\n0.05\n0.2\n"), Vec::new());
        let source = |_: &str, key: &str| -> PricerResult<f64> {
            assert_eq!(key, "from-config");
            Ok(100.0)
        };

        let report = run(&config, &source, &mut prompter).unwrap();
        assert_eq!(report.symbol, "MSFT");
        assert_eq!(report.defaulted, DefaultedInputs::default());
        assert!((report.result.call_price - 10.4506).abs() < 1e-3);
    }

    #[test]
    fn test_quote_failure_is_fatal() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut prompter = Prompter::new(Cursor::new("k\nIBM\n"), Vec::new());
        let source = |_: &str, _: &str| -> PricerResult<f64> {
            Err(PricerError::data("No quote data returned"))
        };

        let err = run(&config, &source, &mut prompter).unwrap_err();
        assert!(err.is_quote_failure());
        assert!(!dir.path().join(OPTION_RESULT_FILE).exists());
    }

    #[test]
    fn test_non_positive_spot_is_fatal() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let mut prompter = Prompter::new(Cursor::new("k\nIBM\n"), Vec::new());

        let source = |_: &str, _: &str| -> PricerResult<f64> { Ok(-1.0) };

        let err = run(&config, &source, &mut prompter).unwrap_err();
        assert!(matches!(err, PricerError::InvalidInput(_)));
    }

    #[test]
    fn test_export_failure_is_not_fatal() {
        let dir = tempdir().unwrap();
        let config = config_in(&dir.path().join("does-not-exist"));
        let mut prompter = Prompter::new(Cursor::new("k\nIBM\n"), Vec::new());

        let source = |_: &str, _: &str| -> PricerResult<f64> { Ok(50.0) };

        let report = run(&config, &source, &mut prompter).unwrap();
        assert!(report.written.is_empty());

        let (_, out) = prompter.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Could not save option result"));
        assert!(out.contains("--- Protective Put Payoff ---"));
    }
}
