//! Chart builders: dataset in, declarative spec out.
//!
//! Builders never render; they bind data, theme colors and display options
//! into a [`ChartSpec`] the renderer consumes.

use tracing::debug;

use super::datasets::{CategoryScore, CorrelationPoint, GeoMetric, MarketCapRow, SeriesPoints};
use super::metrics::linear_fit;
use super::spec::{
    Axis, AxisScale, BubblePoint, ChartSpec, GeoValue, HierarchyKind, HoverMode, Layout, LeafNode,
    Projection, SectorNode, Trace,
};
use crate::theme::Theme;

/// Fixed choropleth color domain, independent of the data min/max.
pub const CHOROPLETH_DOMAIN: [f64; 2] = [20.0, 100.0];

/// Purpose 1: horizontal bars, ascending by score, argmax highlighted.
pub fn language_bar(rows: &[CategoryScore], theme: &Theme) -> ChartSpec {
    let mut sorted: Vec<CategoryScore> = rows.to_vec();
    sorted.sort_by(|a, b| a.score.total_cmp(&b.score));

    let highlight = sorted
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.score.total_cmp(&b.score))
        .map(|(i, _)| i)
        .unwrap_or(0);

    ChartSpec {
        traces: vec![Trace::HorizontalBar {
            categories: sorted.iter().map(|r| r.category.to_string()).collect(),
            values: sorted.iter().map(|r| r.score).collect(),
            highlight,
            accent: theme.accent,
            base: theme.accent_dim,
        }],
        layout: Layout {
            x_axis: Axis {
                title: Some("Popularity Score".into()),
                range: Some([0.0, 110.0]),
                scale: AxisScale::Linear,
                grid: true,
            },
            height: 420.0,
            ..Layout::default()
        },
    }
}

/// Purpose 2: the same sector -> company hierarchy as nested rectangles and
/// as nested rings. Both figures share identical leaf values.
pub fn market_cap_hierarchy(rows: &[MarketCapRow], theme: &Theme) -> (ChartSpec, ChartSpec) {
    let mut sectors: Vec<SectorNode> = Vec::new();
    for row in rows {
        let leaf = LeafNode {
            label: row.company.to_string(),
            value: row.market_cap,
        };
        match sectors.iter_mut().find(|s| s.label == row.sector) {
            Some(sector) => {
                sector.value += leaf.value;
                sector.leaves.push(leaf);
            }
            None => sectors.push(SectorNode {
                label: row.sector.to_string(),
                value: leaf.value,
                leaves: vec![leaf],
            }),
        }
    }

    let domain = rows.iter().fold([f64::MAX, f64::MIN], |[lo, hi], row| {
        [lo.min(row.market_cap), hi.max(row.market_cap)]
    });

    debug!(sectors = sectors.len(), leaves = rows.len(), "hierarchy built");

    let build = |kind: HierarchyKind| ChartSpec {
        traces: vec![Trace::Hierarchy {
            kind,
            sectors: sectors.clone(),
            gradient: theme.hierarchy_gradient.clone(),
            domain,
        }],
        layout: Layout {
            height: 450.0,
            ..Layout::default()
        },
    };

    (build(HierarchyKind::Treemap), build(HierarchyKind::Sunburst))
}

/// Purpose 3: one semi-transparent filled line per series, unified hover.
pub fn active_users_area(series: &[SeriesPoints], theme: &Theme) -> ChartSpec {
    let traces = series
        .iter()
        .enumerate()
        .map(|(i, s)| Trace::FilledLine {
            name: s.name.to_string(),
            points: s.points.clone(),
            color: theme.series[i % theme.series.len()],
            fill_alpha: theme.series_fill_alpha,
        })
        .collect();

    ChartSpec {
        traces,
        layout: Layout {
            y_axis: Axis {
                title: Some("MAU (Millions)".into()),
                grid: true,
                ..Axis::default()
            },
            hover: HoverMode::UnifiedX,
            show_legend: true,
            height: 430.0,
            ..Layout::default()
        },
    }
}

/// Purpose 4: choropleth keyed by ISO code, fixed [20, 100] color domain.
/// The projection is the only externally configurable option.
pub fn internet_choropleth(
    rows: &[GeoMetric],
    theme: &Theme,
    projection: Projection,
) -> ChartSpec {
    ChartSpec {
        traces: vec![Trace::Choropleth {
            regions: rows
                .iter()
                .map(|row| GeoValue {
                    iso: row.iso.to_string(),
                    name: row.country.to_string(),
                    value: row.percent,
                })
                .collect(),
            gradient: theme.map_gradient.clone(),
            domain: CHOROPLETH_DOMAIN,
        }],
        layout: Layout {
            projection: Some(projection),
            height: 480.0,
            ..Layout::default()
        },
    }
}

/// Purpose 5: bubble scatter on a log-x axis with a dotted least-squares
/// trend fitted in (log10 gdp, life expectancy) space.
pub fn gdp_life_bubble(rows: &[CorrelationPoint], theme: &Theme) -> ChartSpec {
    let max_population = rows
        .iter()
        .map(|r| r.population)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let mut traces: Vec<Trace> = Vec::new();
    for region in super::datasets::Region::ALL {
        let points: Vec<BubblePoint> = rows
            .iter()
            .filter(|r| r.region == region)
            .map(|r| BubblePoint {
                label: r.country.to_string(),
                x: r.gdp_per_capita,
                y: r.life_expectancy,
                size: r.population / max_population,
            })
            .collect();
        if points.is_empty() {
            continue;
        }
        traces.push(Trace::Bubble {
            group: region.label().to_string(),
            color: theme.region_palette[region as usize],
            points,
        });
    }

    // Fit in log space; straight between endpoints under the log-x axis.
    let log_gdp: Vec<f64> = rows.iter().map(|r| r.gdp_per_capita.log10()).collect();
    let life: Vec<f64> = rows.iter().map(|r| r.life_expectancy).collect();
    let (slope, intercept) = linear_fit(&log_gdp, &life);
    let x_min = rows
        .iter()
        .map(|r| r.gdp_per_capita)
        .fold(f64::INFINITY, f64::min);
    let x_max = rows
        .iter()
        .map(|r| r.gdp_per_capita)
        .fold(f64::NEG_INFINITY, f64::max);
    traces.push(Trace::TrendLine {
        name: "Trend".into(),
        start: [x_min, slope * x_min.log10() + intercept],
        end: [x_max, slope * x_max.log10() + intercept],
        color: theme.trend_line,
        alpha: theme.trend_alpha,
        in_legend: false,
        hoverable: false,
    });

    ChartSpec {
        traces,
        layout: Layout {
            x_axis: Axis {
                title: Some("GDP per Capita (USD, log scale)".into()),
                scale: AxisScale::Log10,
                grid: true,
                ..Axis::default()
            },
            y_axis: Axis {
                title: Some("Life Expectancy (years)".into()),
                range: Some([50.0, 90.0]),
                grid: true,
                ..Axis::default()
            },
            show_legend: true,
            height: 480.0,
            ..Layout::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datasets::{
        gdp_vs_life_expectancy, internet_penetration, language_popularity, monthly_active_users,
        tech_market_caps, SERIES_MONTHS,
    };

    #[test]
    fn test_bar_chart_is_sorted_with_single_argmax_highlight() {
        let rows = language_popularity().expect("generate");
        let spec = language_bar(&rows, &Theme::dark());
        let Trace::HorizontalBar {
            categories,
            values,
            highlight,
            ..
        } = &spec.traces[0]
        else {
            panic!("expected a horizontal bar trace");
        };
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1], "not ascending: {pair:?}");
        }
        let argmax = values
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
            .expect("non-empty");
        assert_eq!(*highlight, argmax);
        assert_eq!(categories[*highlight], "Python");
        assert_eq!(spec.layout.x_axis.range, Some([0.0, 110.0]));
    }

    #[test]
    fn test_hierarchy_views_share_leaves_and_sector_sums() {
        let rows = tech_market_caps().expect("generate");
        let (treemap, sunburst) = market_cap_hierarchy(&rows, &Theme::dark());

        let sectors_of = |spec: &ChartSpec| match &spec.traces[0] {
            Trace::Hierarchy { kind, sectors, .. } => (*kind, sectors.clone()),
            other => panic!("expected a hierarchy trace, got {other:?}"),
        };
        let (kind_a, sectors_a) = sectors_of(&treemap);
        let (kind_b, sectors_b) = sectors_of(&sunburst);
        assert_eq!(kind_a, HierarchyKind::Treemap);
        assert_eq!(kind_b, HierarchyKind::Sunburst);
        assert_eq!(sectors_a, sectors_b);

        for sector in &sectors_a {
            let sum: f64 = sector.leaves.iter().map(|l| l.value).sum();
            assert!((sector.value - sum).abs() < 1e-9, "{}", sector.label);
        }
        let leaves: usize = sectors_a.iter().map(|s| s.leaves.len()).sum();
        assert_eq!(leaves, rows.len());
    }

    #[test]
    fn test_area_chart_fills_and_unified_hover() {
        let series = monthly_active_users().expect("generate");
        let spec = active_users_area(&series, &Theme::dark());
        assert_eq!(spec.layout.hover, HoverMode::UnifiedX);
        assert_eq!(spec.traces.len(), 3);
        for trace in &spec.traces {
            let Trace::FilledLine {
                points, fill_alpha, ..
            } = trace
            else {
                panic!("expected a filled line");
            };
            assert_eq!(points.len(), SERIES_MONTHS);
            assert!(*fill_alpha > 0.0 && *fill_alpha < 1.0);
        }
    }

    #[test]
    fn test_choropleth_domain_is_fixed_regardless_of_data() {
        let rows = internet_penetration().expect("generate");
        let data_min = rows.iter().map(|r| r.percent).fold(f64::INFINITY, f64::min);
        let data_max = rows
            .iter()
            .map(|r| r.percent)
            .fold(f64::NEG_INFINITY, f64::max);
        // The data does not span the fixed domain, which is the point
        assert!(data_min > CHOROPLETH_DOMAIN[0]);
        assert!(data_max < CHOROPLETH_DOMAIN[1]);

        let spec = internet_choropleth(&rows, &Theme::dark(), Projection::Mercator);
        let Trace::Choropleth { domain, .. } = &spec.traces[0] else {
            panic!("expected a choropleth trace");
        };
        assert_eq!(*domain, [20.0, 100.0]);
        assert_eq!(spec.layout.projection, Some(Projection::Mercator));
    }

    #[test]
    fn test_bubble_chart_groups_trend_and_axes() {
        let rows = gdp_vs_life_expectancy().expect("generate");
        let spec = gdp_life_bubble(&rows, &Theme::dark());

        let bubble_count: usize = spec
            .traces
            .iter()
            .filter_map(|t| match t {
                Trace::Bubble { points, .. } => Some(points.len()),
                _ => None,
            })
            .sum();
        assert_eq!(bubble_count, rows.len());

        let Some(Trace::TrendLine {
            start,
            end,
            in_legend,
            hoverable,
            ..
        }) = spec.traces.last()
        else {
            panic!("expected the trend line last");
        };
        assert!(!in_legend && !hoverable);
        let slope = (end[1] - start[1]) / (end[0].log10() - start[0].log10());
        assert!(slope > 0.0, "trend slope should be positive, got {slope}");

        assert_eq!(spec.layout.x_axis.scale, AxisScale::Log10);
        assert_eq!(spec.layout.y_axis.range, Some([50.0, 90.0]));
    }
}
