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

use ahash::{AHashMap, AHashSet};

use crate::geometry::Point2;
use crate::kernel::{are_collinear, in_circle, orient2d};
use crate::numeric::extent;

use super::{tri_edges, Edge, Triangulation};

pub const SQRT_3: f64 = 1.7320508075688772;

/// Incremental Bowyer-Watson Delaunay triangulator.
pub struct Delaunay;

impl Delaunay {
    /// Build the Delaunay triangulation of `sites`.
    ///
    /// Fewer than three sites, or sites on a single line, yield a
    /// triangulation flagged `collinear` with no triangles.
    pub fn build(sites: &[Point2]) -> Triangulation {
        if sites.len() < 3 || are_collinear(sites) {
            return Triangulation {
                sites: sites.to_vec(),
                triangles: Vec::new(),
                collinear: true,
            };
        }

        let mut points = sites.to_vec();

        // Super-triangle containing every site
        let Some((min_x, max_x)) = extent(points.iter().map(|p| p.x)) else {
            return Triangulation {
                sites: points,
                triangles: Vec::new(),
                collinear: true,
            };
        };
        let Some((min_y, max_y)) = extent(points.iter().map(|p| p.y)) else {
            return Triangulation {
                sites: points,
                triangles: Vec::new(),
                collinear: true,
            };
        };
        let delta = (max_x - min_x).max(max_y - min_y);
        let cx = (min_x + max_x) * 0.5;
        let cy = (min_y + max_y) * 0.5;
        let r = 64.0 * delta + 1.0;

        let s0 = points.len();
        points.push(Point2::new(cx, (cy + 2.0) * r));
        points.push(Point2::new(cx - SQRT_3 * r, cy - r));
        points.push(Point2::new(cx + SQRT_3 * r, cy - r));

        let mut triangles: Vec<[usize; 3]> = vec![[s0, s0 + 1, s0 + 2]];

        for pid in 0..s0 {
            Self::insert_point(pid, &points, &mut triangles);
        }

        // Drop super-triangle faces
        triangles.retain(|t| t[0] < s0 && t[1] < s0 && t[2] < s0);
        points.truncate(s0);

        let triangles = Self::finalize(&points, triangles);

        Triangulation {
            sites: points,
            triangles,
            collinear: false,
        }
    }

    /// Insert one point: carve out every triangle whose circumcircle
    /// contains it and re-triangulate the cavity boundary.
    fn insert_point(pid: usize, points: &[Point2], triangles: &mut Vec<[usize; 3]>) {
        let p = &points[pid];

        let mut bad_triangles = Vec::new();
        for (i, t) in triangles.iter().enumerate() {
            if Self::point_in_circumcircle(p, *t, points) {
                bad_triangles.push(i);
            }
        }
        if bad_triangles.is_empty() {
            return;
        }

        let mut edge_count: AHashMap<Edge, u32> = AHashMap::new();
        for &i in &bad_triangles {
            for edge in tri_edges(triangles[i]) {
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }

        // Cavity boundary edges appear exactly once; sorted for a
        // deterministic triangle stream
        let mut boundary: Vec<Edge> = edge_count
            .into_iter()
            .filter_map(|(edge, count)| if count == 1 { Some(edge) } else { None })
            .collect();
        boundary.sort_unstable();

        bad_triangles.sort_unstable();
        for &i in bad_triangles.iter().rev() {
            triangles.swap_remove(i);
        }

        for edge in boundary {
            let o = orient2d(&points[edge.0], &points[edge.1], p);
            // a point collinear with a cavity edge would make a zero-area face
            if o == 0.0 {
                continue;
            }
            let t = if o > 0.0 {
                [edge.0, edge.1, pid]
            } else {
                [edge.0, pid, edge.1]
            };
            triangles.push(t);
        }
    }

    fn point_in_circumcircle(p: &Point2, t: [usize; 3], points: &[Point2]) -> bool {
        let (a, b, c) = (t[0], t[1], t[2]);
        // incircle test assumes CCW ordering
        let (aa, bb, cc) = if orient2d(&points[a], &points[b], &points[c]) > 0.0 {
            (a, b, c)
        } else {
            (a, c, b)
        };
        in_circle(&points[aa], &points[bb], &points[cc], p)
    }

    /// Dedupe, drop degenerates, enforce CCW winding.
    fn finalize(points: &[Point2], triangles: Vec<[usize; 3]>) -> Vec<[usize; 3]> {
        let mut uniq: Vec<[usize; 3]> = Vec::with_capacity(triangles.len());
        let mut seen: AHashSet<(usize, usize, usize)> = AHashSet::new();

        for t in triangles {
            if t[0] == t[1] || t[1] == t[2] || t[0] == t[2] {
                continue;
            }
            let mut key = t;
            key.sort_unstable();
            if !seen.insert((key[0], key[1], key[2])) {
                continue;
            }
            let o = orient2d(&points[t[0]], &points[t[1]], &points[t[2]]);
            if o == 0.0 {
                continue;
            }
            if o < 0.0 {
                uniq.push([t[0], t[2], t[1]]);
            } else {
                uniq.push(t);
            }
        }
        uniq
    }
}
