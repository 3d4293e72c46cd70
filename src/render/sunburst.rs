//! Ring-sector layout for the sunburst view of the hierarchy trace.
//!
//! Inner ring: sectors. Outer ring: companies, nested inside their sector's
//! angular span. Angles are radians, measured clockwise from 12 o'clock so
//! the first sector starts at the top.

use std::f64::consts::TAU;

use crate::core::SectorNode;

/// One wedge of one ring.
#[derive(Debug, Clone)]
pub struct ArcSector {
    pub sector: usize,
    /// Leaf index within the sector; `None` on the inner ring.
    pub leaf: Option<usize>,
    pub start: f64,
    pub sweep: f64,
    pub value: f64,
}

impl ArcSector {
    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Angular layout of both rings. Sweeps are proportional to value and each
/// ring closes the full circle (leaves inherit their sector's span).
pub fn layout(sectors: &[SectorNode]) -> Vec<ArcSector> {
    let total: f64 = sectors.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut arcs = Vec::new();
    let mut angle = 0.0;
    for (si, sector) in sectors.iter().enumerate() {
        let sector_sweep = sector.value / total * TAU;
        arcs.push(ArcSector {
            sector: si,
            leaf: None,
            start: angle,
            sweep: sector_sweep,
            value: sector.value,
        });

        let mut leaf_angle = angle;
        for (li, leaf) in sector.leaves.iter().enumerate() {
            let leaf_sweep = if sector.value > 0.0 {
                leaf.value / sector.value * sector_sweep
            } else {
                0.0
            };
            arcs.push(ArcSector {
                sector: si,
                leaf: Some(li),
                start: leaf_angle,
                sweep: leaf_sweep,
                value: leaf.value,
            });
            leaf_angle += leaf_sweep;
        }

        angle += sector_sweep;
    }
    arcs
}

/// Polygon outline of a wedge between two radii, centered on the origin.
pub fn arc_polygon(arc: &ArcSector, r_inner: f64, r_outer: f64, steps: usize) -> Vec<[f64; 2]> {
    let steps = steps.max(2);
    let at = |angle: f64, radius: f64| {
        // Clockwise from 12 o'clock
        [radius * angle.sin(), radius * angle.cos()]
    };

    let mut points = Vec::with_capacity(2 * (steps + 1));
    for i in 0..=steps {
        let a = arc.start + arc.sweep * i as f64 / steps as f64;
        points.push(at(a, r_outer));
    }
    for i in (0..=steps).rev() {
        let a = arc.start + arc.sweep * i as f64 / steps as f64;
        points.push(at(a, r_inner));
    }
    points
}
