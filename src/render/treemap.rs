//! Squarified treemap layout for the two-level hierarchy trace.
//!
//! Sector rectangles tile the bounds exactly; each sector's leaves tile the
//! sector rectangle exactly. Aspect ratios follow the squarify heuristic
//! (rows accepted while the worst aspect ratio keeps improving).

use crate::core::SectorNode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    fn shorter_side(&self) -> f64 {
        self.w.min(self.h)
    }

    pub fn center(&self) -> [f64; 2] {
        [self.x + self.w / 2.0, self.y + self.h / 2.0]
    }

    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.x, self.y],
            [self.x + self.w, self.y],
            [self.x + self.w, self.y + self.h],
            [self.x, self.y + self.h],
        ]
    }
}

/// One laid-out company rectangle, indexed into the sector list.
#[derive(Debug, Clone)]
pub struct LeafRect {
    pub sector: usize,
    pub leaf: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct TreemapLayout {
    /// One rect per sector, in sector order.
    pub sector_rects: Vec<Rect>,
    pub leaves: Vec<LeafRect>,
}

/// Lay out the full two-level hierarchy inside `bounds`.
pub fn layout(sectors: &[SectorNode], bounds: Rect) -> TreemapLayout {
    let sector_values: Vec<f64> = sectors.iter().map(|s| s.value).collect();
    let sector_rects = squarify(&sector_values, bounds);

    let mut leaves = Vec::new();
    for (si, (sector, &rect)) in sectors.iter().zip(&sector_rects).enumerate() {
        let leaf_values: Vec<f64> = sector.leaves.iter().map(|l| l.value).collect();
        for (li, leaf_rect) in squarify(&leaf_values, rect).into_iter().enumerate() {
            leaves.push(LeafRect {
                sector: si,
                leaf: li,
                rect: leaf_rect,
            });
        }
    }

    TreemapLayout {
        sector_rects,
        leaves,
    }
}

/// Squarified partition of `bounds`, one rect per value, in input order.
pub fn squarify(values: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut rects = vec![Rect::new(bounds.x, bounds.y, 0.0, 0.0); values.len()];
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return rects;
    }
    let scale = bounds.area() / total;

    // Place larger items first, keep input-order indexing via `order`.
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut free = bounds;
    let mut row: Vec<(usize, f64)> = Vec::new();
    for &idx in &order {
        let area = values[idx] * scale;
        let side = free.shorter_side();
        let current: Vec<f64> = row.iter().map(|&(_, a)| a).collect();
        let mut candidate = current.clone();
        candidate.push(area);
        if row.is_empty() || worst_ratio(&candidate, side) <= worst_ratio(&current, side) {
            row.push((idx, area));
        } else {
            lay_row(&mut rects, &row, &mut free);
            row.clear();
            row.push((idx, area));
        }
    }
    if !row.is_empty() {
        lay_row(&mut rects, &row, &mut free);
    }
    rects
}

/// Worst aspect ratio a row of areas would have on a strip of length `side`.
fn worst_ratio(areas: &[f64], side: f64) -> f64 {
    let sum: f64 = areas.iter().sum();
    if sum <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    areas
        .iter()
        .map(|&a| {
            let r = side * side * a / (sum * sum);
            r.max(1.0 / r)
        })
        .fold(0.0, f64::max)
}

fn lay_row(rects: &mut [Rect], row: &[(usize, f64)], free: &mut Rect) {
    let sum: f64 = row.iter().map(|&(_, a)| a).sum();
    if free.w >= free.h {
        // Strip against the left edge, stacked top to bottom
        let strip_w = sum / free.h;
        let mut y = free.y;
        for &(idx, area) in row {
            let h = area / strip_w;
            rects[idx] = Rect::new(free.x, y, strip_w, h);
            y += h;
        }
        free.x += strip_w;
        free.w -= strip_w;
    } else {
        // Strip against the top edge, laid left to right
        let strip_h = sum / free.w;
        let mut x = free.x;
        for &(idx, area) in row {
            let w = area / strip_h;
            rects[idx] = Rect::new(x, free.y, w, strip_h);
            x += w;
        }
        free.y += strip_h;
        free.h -= strip_h;
    }
}
