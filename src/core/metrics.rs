//! Summary metric tiles shown alongside each chart.
//!
//! Record-holder tiles (top language, max/min country, GDP and life-expectancy
//! leaders) are computed from the dataset by argmax/argmin so they stay
//! correct if a table changes. The purpose-1 year-over-year deltas stay
//! illustrative constants: that table carries no prior-year column.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::datasets::{CategoryScore, CorrelationPoint, Dataset, GeoMetric, SeriesPoints};
use super::error::ExplorerError;

/// Periods a year-over-year delta looks back across.
pub const YOY_LOOKBACK: usize = 12;

/// One labeled tile: label, headline value, optional delta caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl MetricTile {
    fn new(label: &str, value: String, delta: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value,
            delta,
        }
    }
}

/// Compute the tile row for a dataset.
pub fn compute_metrics(dataset: &Dataset) -> Result<Vec<MetricTile>, ExplorerError> {
    let tiles = match dataset {
        Dataset::Comparison(rows) => comparison_metrics(rows),
        Dataset::PartOfWhole(_) => Vec::new(),
        Dataset::TimeSeries(series) => time_series_metrics(series)?,
        Dataset::GeoSpatial(rows) => geo_metrics(rows),
        Dataset::Correlation(rows) => correlation_metrics(rows),
    };
    trace!(tiles = tiles.len(), "metrics computed");
    Ok(tiles)
}

fn comparison_metrics(rows: &[CategoryScore]) -> Vec<MetricTile> {
    let top = rows
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|r| r.category)
        .unwrap_or("-");

    // The YoY deltas are presentation-only placeholders; the dataset has no
    // prior-year column to compute them from.
    vec![
        MetricTile::new("Top Language", top.to_string(), Some("+5.2 pts YoY".into())),
        MetricTile::new("Fastest Growing", "Rust".into(), Some("+12.3 pts YoY".into())),
        MetricTile::new("Languages Tracked", rows.len().to_string(), None),
    ]
}

fn time_series_metrics(series: &[SeriesPoints]) -> Result<Vec<MetricTile>, ExplorerError> {
    let required = YOY_LOOKBACK + 1;
    series
        .iter()
        .map(|s| {
            let n = s.points.len();
            if n < required {
                return Err(ExplorerError::InsufficientData {
                    series: s.name.to_string(),
                    required,
                    actual: n,
                });
            }
            let latest = s.points[n - 1].1;
            let year_ago = s.points[n - 1 - YOY_LOOKBACK].1;
            Ok(MetricTile::new(
                s.name,
                format!("{latest:.1}M MAU"),
                Some(format!("{:+.1}M vs last year", latest - year_ago)),
            ))
        })
        .collect()
}

fn geo_metrics(rows: &[GeoMetric]) -> Vec<MetricTile> {
    // First row wins ties, like the row-index argmax this mirrors
    let highest = rows
        .iter()
        .reduce(|best, row| if row.percent > best.percent { row } else { best });
    let lowest = rows
        .iter()
        .reduce(|best, row| if row.percent < best.percent { row } else { best });
    let mean = rows.iter().map(|r| r.percent).sum::<f64>() / rows.len().max(1) as f64;

    let mut tiles = Vec::new();
    if let Some(row) = highest {
        tiles.push(MetricTile::new(
            "Highest",
            row.country.to_string(),
            Some(format!("{:.0}%", row.percent)),
        ));
    }
    if let Some(row) = lowest {
        tiles.push(MetricTile::new(
            "Lowest",
            row.country.to_string(),
            Some(format!("{:.0}%", row.percent)),
        ));
    }
    tiles.push(MetricTile::new(
        "Global Avg (sample)",
        format!("{mean:.1}%"),
        None,
    ));
    tiles
}

fn correlation_metrics(rows: &[CorrelationPoint]) -> Vec<MetricTile> {
    let log_gdp: Vec<f64> = rows.iter().map(|r| r.gdp_per_capita.log10()).collect();
    let life: Vec<f64> = rows.iter().map(|r| r.life_expectancy).collect();
    let r = pearson(&log_gdp, &life);

    let richest = rows
        .iter()
        .max_by(|a, b| a.gdp_per_capita.total_cmp(&b.gdp_per_capita));

    // Life expectancy ties are real in this table, so collect every leader.
    let longest = rows
        .iter()
        .map(|row| row.life_expectancy)
        .fold(f64::NEG_INFINITY, f64::max);
    let leaders: Vec<&str> = rows
        .iter()
        .filter(|row| row.life_expectancy == longest)
        .map(|row| row.country)
        .collect();

    let mut tiles = vec![MetricTile::new(
        "Pearson Correlation (log GDP)",
        format!("{r:.3}"),
        Some(describe_correlation(r).to_string()),
    )];
    if let Some(row) = richest {
        tiles.push(MetricTile::new(
            "Highest GDP/capita",
            row.country.to_string(),
            Some(fmt_usd(row.gdp_per_capita)),
        ));
    }
    if !leaders.is_empty() {
        tiles.push(MetricTile::new(
            "Longest Life Expectancy",
            leaders.join(" / "),
            Some(format!("{longest:.0} yrs")),
        ));
    }
    tiles
}

fn describe_correlation(r: f64) -> &'static str {
    let strength = match r.abs() {
        a if a >= 0.7 => "Strong",
        a if a >= 0.4 => "Moderate",
        _ => "Weak",
    };
    match (strength, r >= 0.0) {
        ("Strong", true) => "Strong positive",
        ("Strong", false) => "Strong negative",
        ("Moderate", true) => "Moderate positive",
        ("Moderate", false) => "Moderate negative",
        (_, true) => "Weak positive",
        (_, false) => "Weak negative",
    }
}

/// Pearson correlation coefficient of two equal-length samples.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Least-squares line fit, returns (slope, intercept).
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        cov += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x) * (x - mean_x);
    }
    if var_x == 0.0 {
        return (0.0, mean_y);
    }
    let slope = cov / var_x;
    (slope, mean_y - slope * mean_x)
}

fn fmt_usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datasets::{
        gdp_vs_life_expectancy, internet_penetration, language_popularity, monthly_active_users,
    };
    use chrono::NaiveDate;

    #[test]
    fn test_top_language_is_computed_not_hardcoded() {
        let rows = language_popularity().expect("generate");
        let tiles = comparison_metrics(&rows);
        assert_eq!(tiles[0].value, "Python");
        assert_eq!(tiles[2].value, "10");
    }

    #[test]
    fn test_yoy_delta_uses_exact_indices() {
        let series = monthly_active_users().expect("generate");
        let tiles = time_series_metrics(&series).expect("metrics");
        assert_eq!(tiles.len(), 3);
        for (tile, s) in tiles.iter().zip(&series) {
            let expected = s.points[35].1 - s.points[23].1;
            let rendered = format!("{expected:+.1}M vs last year");
            assert_eq!(tile.delta.as_deref(), Some(rendered.as_str()));
        }
    }

    #[test]
    fn test_short_series_is_insufficient_data() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 1).expect("date");
        let short = vec![SeriesPoints {
            name: "Product A",
            points: (0..12).map(|i| (date, i as f64)).collect(),
        }];
        let err = time_series_metrics(&short).unwrap_err();
        match err {
            ExplorerError::InsufficientData {
                required, actual, ..
            } => {
                assert_eq!(required, 13);
                assert_eq!(actual, 12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_geo_mean_matches_literal_table() {
        let rows = internet_penetration().expect("generate");
        let tiles = geo_metrics(&rows);
        // Sum of the 35 fixed percent values is 2796
        assert_eq!(tiles[2].value, format!("{:.1}%", 2796.0 / 35.0));
        assert_eq!(tiles[0].value, "Saudi Arabia"); // first row hitting 99
        assert_eq!(tiles[1].value, "Ethiopia");
    }

    #[test]
    fn test_pearson_matches_reference_formula() {
        let rows = gdp_vs_life_expectancy().expect("generate");
        let xs: Vec<f64> = rows.iter().map(|r| r.gdp_per_capita.log10()).collect();
        let ys: Vec<f64> = rows.iter().map(|r| r.life_expectancy).collect();

        // Independent reference: raw-moment form of the coefficient
        let n = xs.len() as f64;
        let sx: f64 = xs.iter().sum();
        let sy: f64 = ys.iter().sum();
        let sxy: f64 = xs.iter().zip(&ys).map(|(x, y)| x * y).sum();
        let sxx: f64 = xs.iter().map(|x| x * x).sum();
        let syy: f64 = ys.iter().map(|y| y * y).sum();
        let reference =
            (n * sxy - sx * sy) / ((n * sxx - sx * sx).sqrt() * (n * syy - sy * sy).sqrt());

        let r = pearson(&xs, &ys);
        assert!((r - reference).abs() < 1e-6, "{r} vs {reference}");
        assert!(r > 0.7, "expected a strong positive correlation, got {r}");
    }

    #[test]
    fn test_record_holders_are_argmax_with_ties() {
        let rows = gdp_vs_life_expectancy().expect("generate");
        let tiles = correlation_metrics(&rows);
        assert_eq!(tiles[1].value, "Norway");
        assert_eq!(tiles[1].delta.as_deref(), Some("$106,000"));
        assert_eq!(tiles[2].value, "Switzerland / Japan");
        assert_eq!(tiles[2].delta.as_deref(), Some("84 yrs"));
    }

    #[test]
    fn test_linear_fit_recovers_a_line() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        let (slope, intercept) = linear_fit(&xs, &ys);
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_usd_grouping() {
        assert_eq!(fmt_usd(106_000.0), "$106,000");
        assert_eq!(fmt_usd(950.0), "$950");
        assert_eq!(fmt_usd(1_234_567.0), "$1,234,567");
    }
}
