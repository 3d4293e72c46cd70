//! The five purpose datasets and their generators.
//!
//! Purposes 1, 2 and 4 are literal constant tables. Purpose 3 is a seeded
//! cumulative random walk and purpose 5 randomizes only its population column;
//! both re-seed on every call so repeated generation is bit-identical.
//! Generators reject duplicate keys at construction.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::error::ExplorerError;
use super::purpose::Purpose;
use super::rng::SeededRng;

/// Months per series in the time-series dataset.
pub const SERIES_MONTHS: usize = 36;

/// Seed for the monthly-active-users random walk.
const MAU_SEED: u64 = 7;
/// Seed for the population column of the correlation dataset.
const POPULATION_SEED: u64 = 21;

// ============================================================================
// Entities
// ============================================================================

/// Purpose 1: one scored category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: f64,
}

/// Purpose 2: one leaf of the sector -> company hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketCapRow {
    pub sector: &'static str,
    pub company: &'static str,
    /// USD billions, never negative.
    pub market_cap: f64,
}

/// Purpose 3: one named series, one point per month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoints {
    pub name: &'static str,
    pub points: Vec<(NaiveDate, f64)>,
}

impl SeriesPoints {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }
}

/// Purpose 4: one country row keyed by ISO-3166 alpha-3 code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoMetric {
    pub country: &'static str,
    pub iso: &'static str,
    /// Percent in [0, 100].
    pub percent: f64,
}

/// Purpose 5: one country observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub country: &'static str,
    pub region: Region,
    pub gdp_per_capita: f64,
    pub life_expectancy: f64,
    /// Millions; sizes the marker, nothing else.
    pub population: f64,
}

/// World region, drives bubble color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Americas,
    Europe,
    Asia,
    Africa,
    Oceania,
    MiddleEast,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Americas,
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::Oceania,
        Region::MiddleEast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
            Region::MiddleEast => "Middle East",
        }
    }
}

/// One dataset per purpose; the dispatcher carries this sum type so a purpose
/// can never be paired with another purpose's data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Dataset {
    Comparison(Vec<CategoryScore>),
    PartOfWhole(Vec<MarketCapRow>),
    TimeSeries(Vec<SeriesPoints>),
    GeoSpatial(Vec<GeoMetric>),
    Correlation(Vec<CorrelationPoint>),
}

/// Build the dataset for a purpose. Re-seeds internally, so calling twice
/// returns identical bits.
pub fn generate(purpose: Purpose) -> Result<Dataset, ExplorerError> {
    match purpose {
        Purpose::Comparison => language_popularity().map(Dataset::Comparison),
        Purpose::PartOfWhole => tech_market_caps().map(Dataset::PartOfWhole),
        Purpose::TimeSeries => monthly_active_users().map(Dataset::TimeSeries),
        Purpose::GeoSpatial => internet_penetration().map(Dataset::GeoSpatial),
        Purpose::Correlation => gdp_vs_life_expectancy().map(Dataset::Correlation),
    }
}

fn ensure_unique<'a, I>(what: &'static str, keys: I) -> Result<(), ExplorerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ExplorerError::InvariantViolation {
                what,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Purpose 1: language popularity (constant table)
// ============================================================================

const LANGUAGES: [(&str, f64); 10] = [
    ("Python", 94.3),
    ("JavaScript", 88.1),
    ("TypeScript", 72.4),
    ("Rust", 65.9),
    ("Go", 61.2),
    ("Java", 58.7),
    ("C++", 55.3),
    ("Kotlin", 49.1),
    ("Swift", 43.8),
    ("Ruby", 37.2),
];

pub fn language_popularity() -> Result<Vec<CategoryScore>, ExplorerError> {
    ensure_unique("category", LANGUAGES.iter().map(|(name, _)| *name))?;
    Ok(LANGUAGES
        .iter()
        .map(|&(category, score)| CategoryScore { category, score })
        .collect())
}

// ============================================================================
// Purpose 2: tech market caps (constant table)
// ============================================================================

const MARKET_CAPS: [(&str, &str, f64); 10] = [
    ("Cloud", "Microsoft", 3100.0),
    ("Cloud", "Amazon", 1900.0),
    ("Cloud", "Google", 1800.0),
    ("Consumer", "Apple", 3400.0),
    ("Consumer", "Meta", 1300.0),
    ("Consumer", "Netflix", 280.0),
    ("Enterprise", "Salesforce", 320.0),
    ("Enterprise", "Oracle", 410.0),
    ("Semiconductor", "Nvidia", 2800.0),
    ("Semiconductor", "TSMC", 900.0),
];

pub fn tech_market_caps() -> Result<Vec<MarketCapRow>, ExplorerError> {
    // Company names are unique per sector; the table happens to keep them
    // globally unique too, which is what the hierarchy path needs.
    ensure_unique("company", MARKET_CAPS.iter().map(|(_, company, _)| *company))?;
    Ok(MARKET_CAPS
        .iter()
        .map(|&(sector, company, market_cap)| MarketCapRow {
            sector,
            company,
            market_cap,
        })
        .collect())
}

// ============================================================================
// Purpose 3: monthly active users (seeded random walk)
// ============================================================================

/// (name, increment mean, increment stddev, baseline offset)
const MAU_SERIES: [(&str, f64, f64, f64); 3] = [
    ("Product A", 4.0, 1.5, 50.0),
    ("Product B", 3.0, 2.0, 30.0),
    ("Product C", 1.5, 1.0, 15.0),
];

pub fn monthly_active_users() -> Result<Vec<SeriesPoints>, ExplorerError> {
    ensure_unique("series", MAU_SERIES.iter().map(|(name, ..)| *name))?;

    let start = NaiveDate::from_ymd_opt(2022, 1, 1).expect("fixed start month");
    let months: Vec<NaiveDate> = (0..SERIES_MONTHS as u32)
        .map(|i| start + Months::new(i))
        .collect();

    // One stream for all three series, drawn in series order.
    let mut rng = SeededRng::new(MAU_SEED);
    let series = MAU_SERIES
        .iter()
        .map(|&(name, mean, std_dev, offset)| {
            let mut running = 0.0;
            let points = months
                .iter()
                .map(|&date| {
                    running += rng.normal(mean, std_dev);
                    (date, running + offset)
                })
                .collect();
            SeriesPoints { name, points }
        })
        .collect::<Vec<_>>();

    debug!(series = series.len(), months = SERIES_MONTHS, "MAU walk generated");
    Ok(series)
}

// ============================================================================
// Purpose 4: internet penetration (constant table)
// ============================================================================

const INTERNET: [(&str, &str, f64); 35] = [
    ("United States", "USA", 92.0),
    ("United Kingdom", "GBR", 95.0),
    ("Germany", "DEU", 91.0),
    ("France", "FRA", 86.0),
    ("Japan", "JPN", 93.0),
    ("China", "CHN", 75.0),
    ("India", "IND", 52.0),
    ("Brazil", "BRA", 81.0),
    ("Nigeria", "NGA", 43.0),
    ("South Africa", "ZAF", 72.0),
    ("Australia", "AUS", 96.0),
    ("Canada", "CAN", 94.0),
    ("Russia", "RUS", 88.0),
    ("Mexico", "MEX", 78.0),
    ("Indonesia", "IDN", 77.0),
    ("Saudi Arabia", "SAU", 99.0),
    ("Argentina", "ARG", 85.0),
    ("Egypt", "EGY", 72.0),
    ("Pakistan", "PAK", 36.0),
    ("South Korea", "KOR", 98.0),
    ("Italy", "ITA", 85.0),
    ("Spain", "ESP", 94.0),
    ("Sweden", "SWE", 97.0),
    ("Norway", "NOR", 99.0),
    ("Finland", "FIN", 96.0),
    ("Kenya", "KEN", 40.0),
    ("Ethiopia", "ETH", 24.0),
    ("Ghana", "GHA", 61.0),
    ("Morocco", "MAR", 88.0),
    ("Tanzania", "TZA", 33.0),
    ("Netherlands", "NLD", 96.0),
    ("Switzerland", "CHE", 97.0),
    ("Austria", "AUT", 93.0),
    ("Belgium", "BEL", 92.0),
    ("Denmark", "DNK", 98.0),
];

pub fn internet_penetration() -> Result<Vec<GeoMetric>, ExplorerError> {
    ensure_unique("iso code", INTERNET.iter().map(|(_, iso, _)| *iso))?;
    for &(country, _, percent) in &INTERNET {
        if !(0.0..=100.0).contains(&percent) {
            return Err(ExplorerError::InvariantViolation {
                what: "percent out of range for",
                key: country.to_string(),
            });
        }
    }
    Ok(INTERNET
        .iter()
        .map(|&(country, iso, percent)| GeoMetric {
            country,
            iso,
            percent,
        })
        .collect())
}

// ============================================================================
// Purpose 5: GDP per capita vs life expectancy (constant + seeded population)
// ============================================================================

const GDP_LIFE: [(&str, Region, f64, f64); 30] = [
    ("USA", Region::Americas, 80_000.0, 78.0),
    ("Norway", Region::Europe, 106_000.0, 83.0),
    ("Switzerland", Region::Europe, 98_000.0, 84.0),
    ("Germany", Region::Europe, 54_000.0, 81.0),
    ("UK", Region::Europe, 47_000.0, 81.0),
    ("France", Region::Europe, 44_000.0, 82.0),
    ("Japan", Region::Asia, 38_000.0, 84.0),
    ("South Korea", Region::Asia, 36_000.0, 83.0),
    ("Australia", Region::Oceania, 65_000.0, 83.0),
    ("Canada", Region::Americas, 57_000.0, 82.0),
    ("Italy", Region::Europe, 37_000.0, 83.0),
    ("Spain", Region::Europe, 33_000.0, 83.0),
    ("Brazil", Region::Americas, 10_000.0, 75.0),
    ("China", Region::Asia, 12_000.0, 77.0),
    ("India", Region::Asia, 2_400.0, 70.0),
    ("Mexico", Region::Americas, 11_000.0, 75.0),
    ("Nigeria", Region::Africa, 2_100.0, 54.0),
    ("Ethiopia", Region::Africa, 1_000.0, 66.0),
    ("Pakistan", Region::Asia, 1_500.0, 67.0),
    ("Egypt", Region::Africa, 3_700.0, 72.0),
    ("Indonesia", Region::Asia, 4_600.0, 72.0),
    ("Turkey", Region::Europe, 12_000.0, 78.0),
    ("Argentina", Region::Americas, 13_000.0, 76.0),
    ("South Africa", Region::Africa, 6_500.0, 64.0),
    ("Saudi Arabia", Region::MiddleEast, 28_000.0, 76.0),
    ("Russia", Region::Europe, 15_000.0, 73.0),
    ("Poland", Region::Europe, 20_000.0, 77.0),
    ("Sweden", Region::Europe, 61_000.0, 82.0),
    ("Denmark", Region::Europe, 68_000.0, 82.0),
    ("Finland", Region::Europe, 55_000.0, 82.0),
];

pub fn gdp_vs_life_expectancy() -> Result<Vec<CorrelationPoint>, ExplorerError> {
    ensure_unique("country", GDP_LIFE.iter().map(|(name, ..)| *name))?;

    // Population is the only randomized column: millions, rough.
    let mut rng = SeededRng::new(POPULATION_SEED);
    Ok(GDP_LIFE
        .iter()
        .map(|&(country, region, gdp_per_capita, life_expectancy)| CorrelationPoint {
            country,
            region,
            gdp_per_capita,
            life_expectancy,
            population: f64::from(rng.uniform_u32(1, 140)) * 10.0,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic_for_all_purposes() {
        for purpose in Purpose::ALL {
            let a = generate(purpose).expect("generate");
            let b = generate(purpose).expect("generate");
            assert_eq!(a, b, "{purpose:?} not reproducible");
        }
    }

    #[test]
    fn test_mau_walk_shape() {
        let series = monthly_active_users().expect("generate");
        assert_eq!(series.len(), 3);
        for s in &series {
            assert_eq!(s.points.len(), SERIES_MONTHS);
            // Consecutive month starts, fixed origin
            assert_eq!(
                s.points[0].0,
                NaiveDate::from_ymd_opt(2022, 1, 1).expect("date")
            );
            for pair in s.points.windows(2) {
                assert_eq!(pair[0].0 + Months::new(1), pair[1].0);
            }
        }
        // Per-series offsets keep the walks separated at the start
        assert!(series[0].points[0].1 > series[1].points[0].1);
        assert!(series[1].points[0].1 > series[2].points[0].1);
    }

    #[test]
    fn test_internet_table_is_valid() {
        let rows = internet_penetration().expect("generate");
        assert_eq!(rows.len(), 35);
        for row in &rows {
            assert_eq!(row.iso.len(), 3, "{}", row.iso);
            assert!((0.0..=100.0).contains(&row.percent));
        }
    }

    #[test]
    fn test_population_is_seeded_and_scaled() {
        let a = gdp_vs_life_expectancy().expect("generate");
        let b = gdp_vs_life_expectancy().expect("generate");
        assert_eq!(a.len(), 30);
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.population, pb.population);
            assert!(pa.population >= 10.0 && pa.population <= 1400.0);
            assert_eq!(pa.population % 10.0, 0.0);
            assert!(pa.gdp_per_capita > 0.0 && pa.life_expectancy > 0.0);
        }
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let err = ensure_unique("iso code", ["USA", "GBR", "USA"]).unwrap_err();
        match err {
            ExplorerError::InvariantViolation { key, .. } => assert_eq!(key, "USA"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
