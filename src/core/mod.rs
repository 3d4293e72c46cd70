//! Renderer-agnostic core: purposes, datasets, chart specs, metrics, dispatch.
//!
//! Everything in here compiles and runs without the GUI features, so the whole
//! data-to-visualization binding is testable headlessly.

mod charts;
mod datasets;
mod error;
mod metrics;
mod purpose;
mod rng;
mod spec;
mod view;

pub use charts::{
    active_users_area, gdp_life_bubble, internet_choropleth, language_bar, market_cap_hierarchy,
    CHOROPLETH_DOMAIN,
};
pub use datasets::{
    generate, gdp_vs_life_expectancy, internet_penetration, language_popularity,
    monthly_active_users, tech_market_caps, CategoryScore, CorrelationPoint, Dataset, GeoMetric,
    MarketCapRow, Region, SeriesPoints, SERIES_MONTHS,
};
pub use error::ExplorerError;
pub use metrics::{compute_metrics, linear_fit, pearson, MetricTile, YOY_LOOKBACK};
pub use purpose::Purpose;
pub use rng::SeededRng;
pub use spec::{
    Axis, AxisScale, BubblePoint, ChartSpec, GeoValue, HierarchyKind, HoverMode, Layout, LeafNode,
    Projection, SectorNode, Trace,
};
pub use view::{Figure, ViewModel, ViewOptions};
