//! Built-in geography and world map projections for the choropleth.
//!
//! The renderer resolves ISO-3166 alpha-3 codes against this centroid table;
//! a code missing here cannot be placed on the map. Projections take degrees
//! and return abstract plot units with the prime meridian at x = 0.

use std::f64::consts::FRAC_PI_4;

use crate::core::Projection;

/// Mercator blows up at the poles; everything beyond this latitude clamps.
const MERCATOR_LAT_LIMIT: f64 = 85.0;

/// (iso alpha-3, lon, lat), rough national centroids.
const CENTROIDS: [(&str, f64, f64); 35] = [
    ("USA", -98.0, 39.0),
    ("GBR", -2.0, 54.0),
    ("DEU", 10.0, 51.0),
    ("FRA", 2.0, 46.0),
    ("JPN", 138.0, 36.0),
    ("CHN", 104.0, 35.0),
    ("IND", 79.0, 22.0),
    ("BRA", -53.0, -11.0),
    ("NGA", 8.0, 9.0),
    ("ZAF", 25.0, -29.0),
    ("AUS", 134.0, -25.0),
    ("CAN", -106.0, 56.0),
    ("RUS", 99.0, 60.0),
    ("MEX", -102.0, 24.0),
    ("IDN", 114.0, -2.0),
    ("SAU", 45.0, 24.0),
    ("ARG", -64.0, -34.0),
    ("EGY", 30.0, 26.0),
    ("PAK", 69.0, 30.0),
    ("KOR", 128.0, 36.0),
    ("ITA", 12.0, 42.0),
    ("ESP", -4.0, 40.0),
    ("SWE", 15.0, 62.0),
    ("NOR", 9.0, 61.0),
    ("FIN", 26.0, 64.0),
    ("KEN", 38.0, 0.0),
    ("ETH", 39.0, 8.0),
    ("GHA", -1.0, 8.0),
    ("MAR", -6.0, 32.0),
    ("TZA", 35.0, -6.0),
    ("NLD", 5.0, 52.0),
    ("CHE", 8.0, 47.0),
    ("AUT", 14.0, 47.0),
    ("BEL", 4.0, 50.0),
    ("DNK", 10.0, 56.0),
];

/// Look up a country centroid as (lon, lat) degrees.
pub fn centroid(iso: &str) -> Option<(f64, f64)> {
    CENTROIDS
        .iter()
        .find(|(code, ..)| *code == iso)
        .map(|&(_, lon, lat)| (lon, lat))
}

/// Project (lon, lat) degrees. `None` means the point is not visible under
/// this projection (the far hemisphere of the orthographic globe).
pub fn project(projection: Projection, lon_deg: f64, lat_deg: f64) -> Option<[f64; 2]> {
    let lon = lon_deg.to_radians();
    match projection {
        Projection::Equirectangular => {
            let lat = lat_deg.to_radians();
            Some([lon, lat])
        }
        Projection::Mercator => {
            let lat = lat_deg
                .clamp(-MERCATOR_LAT_LIMIT, MERCATOR_LAT_LIMIT)
                .to_radians();
            Some([lon, (FRAC_PI_4 + lat / 2.0).tan().ln()])
        }
        Projection::NaturalEarth => {
            // Polynomial approximation of the Natural Earth projection
            let p = lat_deg.to_radians();
            let p2 = p * p;
            let p4 = p2 * p2;
            let l = 0.870_700 - 0.131_979 * p2 - 0.013_791 * p4
                + p4 * p4 * (0.003_971 * p2 - 0.001_529 * p4);
            let d = p
                * (1.007_226 + p2 * (0.015_085 + p4 * (-0.044_475 + 0.028_874 * p2 - 0.005_916 * p4)));
            Some([l * lon, d])
        }
        Projection::Orthographic => {
            // Globe centered on (0, 0); the far hemisphere is hidden
            let lat = lat_deg.to_radians();
            if lat.cos() * lon.cos() < 0.0 {
                return None;
            }
            Some([lat.cos() * lon.sin(), lat.sin()])
        }
    }
}

/// Meridian and parallel polylines giving the map spatial context.
/// Lines split wherever the projection hides a segment.
pub fn graticule(projection: Projection) -> Vec<Vec<[f64; 2]>> {
    let mut lines = Vec::new();

    let mut push_sampled = |samples: &mut dyn Iterator<Item = (f64, f64)>| {
        let mut current: Vec<[f64; 2]> = Vec::new();
        for (lon, lat) in samples {
            match project(projection, lon, lat) {
                Some(point) => current.push(point),
                None => {
                    if current.len() > 1 {
                        lines.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                }
            }
        }
        if current.len() > 1 {
            lines.push(current);
        }
    };

    for meridian in (-180..=180).step_by(30) {
        let lon = f64::from(meridian);
        push_sampled(&mut (-80..=80).step_by(2).map(|lat| (lon, f64::from(lat))));
    }
    for parallel in (-60..=60).step_by(30) {
        let lat = f64::from(parallel);
        push_sampled(&mut (-180..=180).step_by(2).map(|lon| (f64::from(lon), lat)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::internet_penetration;

    #[test]
    fn test_every_dataset_iso_resolves() {
        for row in internet_penetration().expect("generate") {
            assert!(centroid(row.iso).is_some(), "missing centroid for {}", row.iso);
        }
    }

    #[test]
    fn test_origin_is_a_fixed_point_everywhere() {
        for projection in Projection::ALL {
            let [x, y] = project(projection, 0.0, 0.0).expect("origin visible");
            assert!(x.abs() < 1e-12 && y.abs() < 1e-12, "{projection:?}");
        }
    }

    #[test]
    fn test_projections_are_north_south_symmetric() {
        for projection in Projection::ALL {
            let up = project(projection, 30.0, 45.0).expect("visible");
            let down = project(projection, 30.0, -45.0).expect("visible");
            assert!((up[0] - down[0]).abs() < 1e-12, "{projection:?}");
            assert!((up[1] + down[1]).abs() < 1e-12, "{projection:?}");
        }
    }

    #[test]
    fn test_mercator_clamps_near_the_poles() {
        let near = project(Projection::Mercator, 0.0, 85.0).expect("visible");
        let beyond = project(Projection::Mercator, 0.0, 89.9).expect("visible");
        assert_eq!(near[1], beyond[1]);
        assert!(near[1].is_finite());
    }

    #[test]
    fn test_orthographic_hides_the_far_hemisphere() {
        assert!(project(Projection::Orthographic, 170.0, 0.0).is_none());
        assert!(project(Projection::Orthographic, 20.0, 10.0).is_some());
    }

    #[test]
    fn test_graticule_splits_hidden_segments() {
        // Full sphere visible: no splits beyond the line count itself
        let flat = graticule(Projection::Equirectangular);
        assert_eq!(flat.len(), 13 + 5);

        // Orthographic drops roughly half of each parallel
        let globe = graticule(Projection::Orthographic);
        assert!(!globe.is_empty());
        for line in &globe {
            for point in line {
                let r = (point[0] * point[0] + point[1] * point[1]).sqrt();
                assert!(r <= 1.0 + 1e-9);
            }
        }
    }
}
