//! SVG payoff diagram
//!
//! Draws every payoff column and both composite strategies on one chart,
//! with a zero line and a legend.

use std::path::Path;

use plotters::prelude::*;

use crate::core::{PricerError, PricerResult};
use crate::models::{PayoffPoint, Position, StrategyPoint};

pub const PAYOFF_SVG_FILE: &str = "payoff_diagram.svg";

const COLORS: [RGBColor; 6] = [
    RED,
    BLUE,
    GREEN,
    MAGENTA,
    RGBColor(255, 140, 0),
    CYAN,
];

fn plot_err<E: std::fmt::Display>(e: E) -> PricerError {
    PricerError::Plot(e.to_string())
}

/// Named curves to draw, skipping any with non-finite values
fn curves(points: &[PayoffPoint], strategies: &[StrategyPoint]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut out: Vec<(String, Vec<(f64, f64)>)> = Position::ALL
        .iter()
        .map(|pos| {
            let pts = points
                .iter()
                .map(|p| (p.spot_price as f64, pos.value(p)))
                .collect();
            (pos.name().to_string(), pts)
        })
        .collect();

    let spread: Vec<(f64, f64)> = strategies
        .iter()
        .map(|p| (p.spot_price as f64, p.bull_call_spread))
        .collect();
    let straddle: Vec<(f64, f64)> = strategies
        .iter()
        .map(|p| (p.spot_price as f64, p.straddle))
        .collect();

    out.push(("Bull Call Spread".to_string(), spread));
    out.push(("Straddle".to_string(), straddle));

    out.retain(|(_, pts)| !pts.is_empty() && pts.iter().all(|(_, y)| y.is_finite()));
    out
}

/// Write the payoff diagram as an SVG file
pub fn payoff_svg(
    path: impl AsRef<Path>,
    points: &[PayoffPoint],
    strategies: &[StrategyPoint],
) -> PricerResult<()> {
    let path = path.as_ref();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(PricerError::invalid_input("No payoff points to plot"));
    };

    let x_min = first.spot_price as f64;
    let mut x_max = (last.spot_price as f64).max(x_min + 1.0);
    // Near the ends of i64 the +1 is lost to rounding
    if x_max <= x_min {
        x_max = x_min + x_min.abs() * 1e-12;
    }

    let curves = curves(points, strategies);
    let (y_lo, y_hi) = curves
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|(_, y)| *y))
        .fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));

    // 5% padding, at least one price unit
    let padding = ((y_hi - y_lo) * 0.05).max(1.0);
    let (y_min, y_max) = (y_lo - padding, y_hi + padding);

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Option Strategy Payoff Diagrams at Expiry", ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Spot Price at Expiry")
        .y_desc("Profit / Loss ($)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(x_min, 0.0), (x_max, 0.0)],
            BLACK.stroke_width(1),
        )))
        .map_err(plot_err)?;

    for ((name, pts), color) in curves.into_iter().zip(COLORS.iter().cycle()) {
        let color = *color;
        chart
            .draw_series(LineSeries::new(pts, color.stroke_width(2)))
            .map_err(plot_err)?
            .label(name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;

    tracing::info!("Saved payoff chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{payoff, strategy_curves};
    use tempfile::tempdir;

    #[test]
    fn test_payoff_svg_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PAYOFF_SVG_FILE);
        let pts = payoff(100.0, 4.0, 30);

        payoff_svg(&path, &pts, &strategy_curves(&pts)).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Protective Put"));
    }

    #[test]
    fn test_empty_is_error() {
        let dir = tempdir().unwrap();
        let err = payoff_svg(dir.path().join("x.svg"), &[], &[]).unwrap_err();
        assert!(matches!(err, PricerError::InvalidInput(_)));
    }

    #[test]
    fn test_single_point_at_i64_max() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PAYOFF_SVG_FILE);
        let pts = payoff(f64::INFINITY, 1.0, 30);
        assert_eq!(pts.len(), 1);

        payoff_svg(&path, &pts, &strategy_curves(&pts)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_curves_skip_nan_strategy() {
        let pts = payoff(100.0, 4.0, 5);
        // Window too narrow for the spread anchors
        let strat = strategy_curves(&pts);
        let names: Vec<String> = curves(&pts, &strat).into_iter().map(|(n, _)| n).collect();
        assert!(!names.contains(&"Bull Call Spread".to_string()));
        assert!(names.contains(&"Straddle".to_string()));
    }
}
