//! The five fixed visualization purposes and their static page copy.

use serde::{Deserialize, Serialize};

/// One of the five scenarios the dashboard supports. The selector, the
/// dispatcher and the metrics panel are all keyed by this closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Purpose {
    #[default]
    Comparison,
    PartOfWhole,
    TimeSeries,
    GeoSpatial,
    Correlation,
}

impl Purpose {
    pub const ALL: [Purpose; 5] = [
        Purpose::Comparison,
        Purpose::PartOfWhole,
        Purpose::TimeSeries,
        Purpose::GeoSpatial,
        Purpose::Correlation,
    ];

    /// Label shown in the sidebar selector.
    pub fn selector_label(self) -> &'static str {
        match self {
            Purpose::Comparison => "1 · Comparing Categorical Values",
            Purpose::PartOfWhole => "2 · Part-of-a-Whole Relationships",
            Purpose::TimeSeries => "3 · Changes Over Time",
            Purpose::GeoSpatial => "4 · Geo-Spatial Data",
            Purpose::Correlation => "5 · Relationships & Correlations",
        }
    }

    /// Small monospace tag rendered above the page title.
    pub fn tag(self) -> &'static str {
        match self {
            Purpose::Comparison => "PURPOSE 01 · COMPARISON",
            Purpose::PartOfWhole => "PURPOSE 02 · HIERARCHY & PART-OF-WHOLE",
            Purpose::TimeSeries => "PURPOSE 03 · TIME SERIES",
            Purpose::GeoSpatial => "PURPOSE 04 · GEO-SPATIAL",
            Purpose::Correlation => "PURPOSE 05 · RELATIONSHIPS & CORRELATIONS",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Purpose::Comparison => "Comparing Categorical Values",
            Purpose::PartOfWhole => "Hierarchies & Part-of-a-Whole",
            Purpose::TimeSeries => "Changes Over Time",
            Purpose::GeoSpatial => "Mapping Geo-Spatial Data",
            Purpose::Correlation => "Charting Relationships & Correlations",
        }
    }

    pub fn chart_kind(self) -> &'static str {
        match self {
            Purpose::Comparison => "Horizontal Bar Chart",
            Purpose::PartOfWhole => "Treemap & Sunburst",
            Purpose::TimeSeries => "Multi-Line Area Chart",
            Purpose::GeoSpatial => "Choropleth Map",
            Purpose::Correlation => "Bubble Scatter Plot",
        }
    }

    pub fn dataset_caption(self) -> &'static str {
        match self {
            Purpose::Comparison => "Programming Language Popularity Index 2024",
            Purpose::PartOfWhole => "Global Tech Company Market Cap (USD Billions)",
            Purpose::TimeSeries => "Monthly Active Users (Millions), 2022-2024",
            Purpose::GeoSpatial => "Internet Penetration Rate by Country (%)",
            Purpose::Correlation => "Country GDP per Capita vs Life Expectancy (2024 est.)",
        }
    }

    /// Constant explanatory note, authored once per purpose.
    pub fn insight(self) -> &'static str {
        match self {
            Purpose::Comparison => {
                "Horizontal bar charts excel at comparing categorical values when labels are \
                 long or numerous. Sorting by value makes rank ordering immediately obvious, \
                 and highlighting the top item with a distinct colour draws the reader's eye."
            }
            Purpose::PartOfWhole => {
                "Treemaps show hierarchical data where area encodes magnitude, ideal for \
                 spotting dominant categories at a glance. Sunbursts add an explicit \
                 parent-child layer through concentric rings. Both reveal part-of-whole \
                 proportions within a two-level hierarchy."
            }
            Purpose::TimeSeries => {
                "Area charts work well for time series when you want to convey volume \
                 alongside trend. Semi-transparent fills preserve legibility when multiple \
                 series overlap, and unified hover tooltips let users compare values across \
                 series at any given date."
            }
            Purpose::GeoSpatial => {
                "Choropleth maps encode a continuous variable through colour intensity \
                 across geographic regions. They excel at revealing spatial patterns and \
                 regional disparities; sequential palettes work best for ratio data."
            }
            Purpose::Correlation => {
                "Scatter plots reveal the relationship between two continuous variables. \
                 Bubble size adds a third dimension and colour a fourth. A log scale on GDP \
                 linearises the relationship, and the dotted trendline confirms the \
                 direction without overpowering the data."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_labels_are_numbered_and_unique() {
        for (i, purpose) in Purpose::ALL.iter().enumerate() {
            let label = purpose.selector_label();
            assert!(label.starts_with(&format!("{}", i + 1)), "{label}");
        }
        let tags: std::collections::HashSet<_> = Purpose::ALL.iter().map(|p| p.tag()).collect();
        assert_eq!(tags.len(), 5);
    }
}
