// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Adaptive hexagonal aggregation over the unit square.
//!
//! Bin count is steered into `[min_bins, max_bins]` by adjusting the grid
//! resolution: too many bins halves the grid, too few adds 5 columns.

use ahash::AHashMap;
use log::warn;

use crate::geometry::Point2;

const SQRT_2: f64 = std::f64::consts::SQRT_2;
const MAX_ADAPT_ROUNDS: usize = 20;

/// One hexagonal cell: center, circumradius and the points that fell in it.
#[derive(Clone, Debug)]
pub struct Bin {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub points: Vec<Point2>,
}

impl Bin {
    #[inline]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Binner output. `grid_size` is 0 when the distinct-point short-circuit
/// produced one zero-radius bin per distinct point.
#[derive(Clone, Debug)]
pub struct Binning {
    pub bins: Vec<Bin>,
    pub grid_size: usize,
    pub radius: f64,
}

impl Binning {
    pub fn sites(&self) -> Vec<Point2> {
        self.bins.iter().map(Bin::center).collect()
    }

    /// Wraps pre-binned input: one zero-radius bin per distinct point.
    pub fn from_sites(points: &[Point2]) -> Self {
        let bins = group_by_identity(points)
            .into_iter()
            .map(|(center, members)| Bin {
                x: center.x,
                y: center.y,
                radius: 0.0,
                points: members,
            })
            .collect();
        Self {
            bins,
            grid_size: 0,
            radius: 0.0,
        }
    }
}

/// Adaptive hexagon binner, parametrized by grid bounds.
#[derive(Clone, Copy, Debug)]
pub struct HexBinner {
    pub start_grid_size: usize,
    pub min_bins: usize,
    pub max_bins: usize,
}

impl HexBinner {
    pub fn new(start_grid_size: usize, min_bins: usize, max_bins: usize) -> Self {
        Self {
            start_grid_size,
            min_bins,
            max_bins,
        }
    }

    pub fn bin(&self, points: &[Point2]) -> Binning {
        let distinct = group_by_identity(points);
        if distinct.len() < self.min_bins {
            // few enough distinct locations: one zero-radius bin per location
            let bins = distinct
                .into_iter()
                .map(|(center, members)| Bin {
                    x: center.x,
                    y: center.y,
                    radius: 0.0,
                    points: members,
                })
                .collect();
            return Binning {
                bins,
                grid_size: 0,
                radius: 0.0,
            };
        }

        let mut grid_size = self.start_grid_size.max(1);
        let mut current = hexbin(points, grid_size);
        for _ in 0..MAX_ADAPT_ROUNDS {
            if current.bins.len() > self.max_bins {
                grid_size = (grid_size / 2).max(1);
            } else if current.bins.len() < self.min_bins {
                grid_size += 5;
            } else {
                return current;
            }
            current = hexbin(points, grid_size);
        }
        if current.bins.len() < self.min_bins || current.bins.len() > self.max_bins {
            warn!(
                "hex binning did not converge after {} rounds: {} bins at grid size {} \
                 (wanted {}..={})",
                MAX_ADAPT_ROUNDS,
                current.bins.len(),
                grid_size,
                self.min_bins,
                self.max_bins
            );
        }
        current
    }
}

/// One hex-binning pass at a fixed grid size. Short diagonal is
/// 1 / grid_size, circumradius short / sqrt(2), assignment follows the
/// row-parity hex lattice with a nearest-center refinement.
fn hexbin(points: &[Point2], grid_size: usize) -> Binning {
    let short_diagonal = 1.0 / grid_size as f64;
    let radius = short_diagonal / SQRT_2;
    let dx = radius * 3.0_f64.sqrt();
    let dy = radius * 1.5;

    let mut cells: AHashMap<(i64, i64), Vec<Point2>> = AHashMap::new();
    for p in points {
        let py = p.y / dy;
        let mut pj = py.round();
        let px = p.x / dx - if row_is_odd(pj) { 0.5 } else { 0.0 };
        let mut pi = px.round();
        let py1 = py - pj;

        if py1.abs() * 3.0 > 1.0 {
            // point sits near a row boundary: test the diagonal neighbor
            let px1 = px - pi;
            let pi2 = pi + if px < pi { -0.5 } else { 0.5 };
            let pj2 = pj + if py < pj { -1.0 } else { 1.0 };
            let px2 = px - pi2;
            let py2 = py - pj2;
            if px1 * px1 + py1 * py1 > px2 * px2 + py2 * py2 {
                pi = pi2 + if row_is_odd(pj) { 0.5 } else { -0.5 };
                pj = pj2;
            }
        }
        cells.entry((pi as i64, pj as i64)).or_default().push(*p);
    }

    let mut bins: Vec<Bin> = cells
        .into_iter()
        .map(|((pi, pj), members)| {
            let offset = if pj.rem_euclid(2) == 1 { 0.5 } else { 0.0 };
            let cx = ((pi as f64 + offset) * dx).clamp(0.0, 1.0);
            let cy = (pj as f64 * dy).clamp(0.0, 1.0);
            Bin {
                x: cx,
                y: cy,
                radius,
                points: members,
            }
        })
        .collect();
    bins.sort_by(|a, b| a.center().lex_cmp(&b.center()));

    Binning {
        bins,
        grid_size,
        radius,
    }
}

#[inline]
fn row_is_odd(pj: f64) -> bool {
    (pj as i64).rem_euclid(2) == 1
}

/// Groups points by coordinate identity, deterministically ordered by
/// center.
fn group_by_identity(points: &[Point2]) -> Vec<(Point2, Vec<Point2>)> {
    let mut groups: AHashMap<Point2, Vec<Point2>> = AHashMap::new();
    for p in points {
        groups.entry(*p).or_default().push(*p);
    }
    let mut out: Vec<(Point2, Vec<Point2>)> = groups.into_iter().collect();
    out.sort_by(|a, b| a.0.lex_cmp(&b.0));
    out
}
