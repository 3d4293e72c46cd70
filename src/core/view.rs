//! View dispatch: purpose in, fully composed view out.
//!
//! One synchronous pass per render cycle: generate the dataset, build the
//! figure(s), compute the metric tiles. Nothing is cached across cycles.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::charts;
use super::datasets::{generate, Dataset};
use super::error::ExplorerError;
use super::metrics::{compute_metrics, MetricTile};
use super::purpose::Purpose;
use super::spec::{ChartSpec, Projection};
use crate::theme::Theme;

/// Display options recognized by the builders. Projection applies to the
/// geo-spatial purpose only and defaults to natural earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub projection: Projection,
}

/// One chart plus its tab label (only the hierarchy purpose has several).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub label: &'static str,
    pub spec: ChartSpec,
}

/// Everything one render pass emits, in display order: tag and titles come
/// from the purpose, then figures, metric tiles and the insight note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub purpose: Purpose,
    pub figures: Vec<Figure>,
    pub tiles: Vec<MetricTile>,
    pub insight: &'static str,
}

impl ViewModel {
    /// Run the full generator -> builder -> metrics pipeline for a purpose.
    pub fn compose(
        purpose: Purpose,
        options: &ViewOptions,
        theme: &Theme,
    ) -> Result<Self, ExplorerError> {
        let dataset = generate(purpose)?;
        let figures = build_figures(&dataset, options, theme);
        let tiles = compute_metrics(&dataset)?;
        debug!(?purpose, figures = figures.len(), tiles = tiles.len(), "view composed");
        Ok(Self {
            purpose,
            figures,
            tiles,
            insight: purpose.insight(),
        })
    }
}

fn build_figures(dataset: &Dataset, options: &ViewOptions, theme: &Theme) -> Vec<Figure> {
    match dataset {
        Dataset::Comparison(rows) => vec![Figure {
            label: "Bar",
            spec: charts::language_bar(rows, theme),
        }],
        Dataset::PartOfWhole(rows) => {
            let (treemap, sunburst) = charts::market_cap_hierarchy(rows, theme);
            vec![
                Figure {
                    label: "Treemap",
                    spec: treemap,
                },
                Figure {
                    label: "Sunburst",
                    spec: sunburst,
                },
            ]
        }
        Dataset::TimeSeries(series) => vec![Figure {
            label: "Area",
            spec: charts::active_users_area(series, theme),
        }],
        Dataset::GeoSpatial(rows) => vec![Figure {
            label: "Map",
            spec: charts::internet_choropleth(rows, theme, options.projection),
        }],
        Dataset::Correlation(rows) => vec![Figure {
            label: "Bubble",
            spec: charts::gdp_life_bubble(rows, theme),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_purpose_composes() {
        let theme = Theme::dark();
        let options = ViewOptions::default();
        for purpose in Purpose::ALL {
            let view = ViewModel::compose(purpose, &options, &theme).expect("compose");
            assert_eq!(view.purpose, purpose);
            assert!(!view.figures.is_empty());
            assert!(!view.insight.is_empty());
        }
    }

    #[test]
    fn test_projection_option_reaches_the_geo_layout() {
        let theme = Theme::dark();
        let options = ViewOptions {
            projection: Projection::Mercator,
        };
        let view = ViewModel::compose(Purpose::GeoSpatial, &options, &theme).expect("compose");
        assert_eq!(
            view.figures[0].spec.layout.projection,
            Some(Projection::Mercator)
        );
    }

    #[test]
    fn test_invalid_projection_label_fails_fast() {
        let err = Projection::from_label("azimuthal").unwrap_err();
        assert!(matches!(err, ExplorerError::Configuration { .. }));
    }

    #[test]
    fn test_hierarchy_purpose_has_two_tabs() {
        let view = ViewModel::compose(
            Purpose::PartOfWhole,
            &ViewOptions::default(),
            &Theme::dark(),
        )
        .expect("compose");
        let labels: Vec<_> = view.figures.iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Treemap", "Sunburst"]);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let theme = Theme::dark();
        let options = ViewOptions::default();
        for purpose in Purpose::ALL {
            let a = ViewModel::compose(purpose, &options, &theme).expect("compose");
            let b = ViewModel::compose(purpose, &options, &theme).expect("compose");
            assert_eq!(a, b);
        }
    }
}
