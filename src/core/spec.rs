//! Declarative chart specifications.
//!
//! A [`ChartSpec`] is a list of typed traces plus a layout, fully serializable
//! and independent of any rendering engine. Builders produce these; the egui
//! layer (or the CLI JSON dump) consumes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ExplorerError;
use crate::theme::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trace {
    /// Sorted category bars; exactly one index is highlighted.
    HorizontalBar {
        categories: Vec<String>,
        values: Vec<f64>,
        /// Index of the visually distinguished bar.
        highlight: usize,
        accent: Rgb,
        base: Rgb,
    },
    /// Two-level hierarchy, rendered as nested rectangles or nested rings.
    Hierarchy {
        kind: HierarchyKind,
        sectors: Vec<SectorNode>,
        /// Low-to-high gradient applied over `domain` by leaf value.
        gradient: Vec<Rgb>,
        domain: [f64; 2],
    },
    /// One filled series line, x = date, y = value.
    FilledLine {
        name: String,
        points: Vec<(NaiveDate, f64)>,
        color: Rgb,
        /// Alpha of the fill down to the zero baseline.
        fill_alpha: f32,
    },
    /// Region values keyed by ISO-3166 alpha-3 code.
    Choropleth {
        regions: Vec<GeoValue>,
        gradient: Vec<Rgb>,
        /// Fixed color domain, independent of the data min/max.
        domain: [f64; 2],
    },
    /// One bubble group sharing a categorical color.
    Bubble {
        group: String,
        color: Rgb,
        points: Vec<BubblePoint>,
    },
    /// Fitted reference line, dotted, outside legend and hover.
    TrendLine {
        name: String,
        /// Endpoints in data space; straight under the layout's x scale.
        start: [f64; 2],
        end: [f64; 2],
        color: Rgb,
        alpha: f32,
        in_legend: bool,
        hoverable: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HierarchyKind {
    Treemap,
    Sunburst,
}

/// Inner hierarchy level; `value` is the sum of its leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorNode {
    pub label: String,
    pub value: f64,
    pub leaves: Vec<LeafNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoValue {
    pub iso: String,
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Marker area weight, relative to the largest point in the chart.
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub hover: HoverMode,
    pub show_legend: bool,
    /// Map projection, geo charts only.
    pub projection: Option<Projection>,
    pub height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            hover: HoverMode::Single,
            show_legend: false,
            projection: None,
            height: 430.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Option<String>,
    pub range: Option<[f64; 2]>,
    pub scale: AxisScale,
    pub grid: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    Log10,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMode {
    #[default]
    Single,
    /// All traces report their value at the hovered x.
    UnifiedX,
}

/// World map projection. The only externally configurable chart option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    #[default]
    NaturalEarth,
    Equirectangular,
    Orthographic,
    Mercator,
}

impl Projection {
    pub const ALL: [Projection; 4] = [
        Projection::NaturalEarth,
        Projection::Equirectangular,
        Projection::Orthographic,
        Projection::Mercator,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Projection::NaturalEarth => "natural earth",
            Projection::Equirectangular => "equirectangular",
            Projection::Orthographic => "orthographic",
            Projection::Mercator => "mercator",
        }
    }

    /// Parse a selector label. Anything outside the fixed domain is a
    /// configuration error, never a silent fallback.
    pub fn from_label(label: &str) -> Result<Self, ExplorerError> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| ExplorerError::Configuration {
                option: "projection",
                value: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_labels_round_trip() {
        for projection in Projection::ALL {
            assert_eq!(
                Projection::from_label(projection.label()).expect("parse"),
                projection
            );
        }
    }

    #[test]
    fn test_unknown_projection_is_a_configuration_error() {
        let err = Projection::from_label("globe").unwrap_err();
        match err {
            ExplorerError::Configuration { option, value } => {
                assert_eq!(option, "projection");
                assert_eq!(value, "globe");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_chart_spec_round_trips_through_json() {
        let spec = ChartSpec {
            traces: vec![Trace::HorizontalBar {
                categories: vec!["Ruby".into(), "Python".into()],
                values: vec![37.2, 94.3],
                highlight: 1,
                accent: Rgb::new(0x7c, 0x6a, 0xf7),
                base: Rgb::new(0x3a, 0x3a, 0x5c),
            }],
            layout: Layout {
                x_axis: Axis {
                    title: Some("Popularity Score".into()),
                    range: Some([0.0, 110.0]),
                    scale: AxisScale::Linear,
                    grid: true,
                },
                ..Layout::default()
            },
        };
        let json = serde_json::to_string(&spec).expect("serialize");
        let back: ChartSpec = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, spec);
    }
}
