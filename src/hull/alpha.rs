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

//! Alpha-shape boundary extraction over a Delaunay triangulation.
//!
//! The alpha complex keeps triangles whose circumradius is at most 1/alpha;
//! the shape boundary is the set of kept-triangle edges shared by exactly
//! one kept triangle. An alpha too small to keep anything backs off to an
//! edge-length cutoff that is relaxed until a boundary appears.

use ahash::AHashMap;

use crate::geometry::Point2;
use crate::graph::UnionFind;
use crate::kernel::circumradius2;
use crate::triangulation::{tri_edges, Edge, Triangulation};

const BACKOFF_STEP: f64 = 0.01;

/// Boundary rings of the alpha shape over the sites flagged in `keep`.
///
/// Each ring is one connected boundary component, ordered
/// counter-clockwise around its centroid. `alpha = 0` keeps every
/// triangle, which makes the boundary the convex hull of the kept sites.
pub fn alpha_hull(tri: &Triangulation, keep: &[bool], alpha: f64) -> Vec<Vec<Point2>> {
    let candidates: Vec<[usize; 3]> = tri
        .triangles
        .iter()
        .copied()
        .filter(|t| keep[t[0]] && keep[t[1]] && keep[t[2]])
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut boundary = if alpha > 0.0 {
        let radius = 1.0 / alpha;
        let r2 = radius * radius;
        boundary_edges(
            candidates
                .iter()
                .filter(|t| triangle_circumradius2(tri, *t) <= r2),
        )
    } else {
        boundary_edges(candidates.iter())
    };

    if boundary.is_empty() && alpha > 0.0 {
        boundary = backoff_boundary(tri, &candidates, alpha);
    }

    rings(tri, &boundary)
}

#[inline]
fn triangle_circumradius2(tri: &Triangulation, t: &[usize; 3]) -> f64 {
    circumradius2(&tri.sites[t[0]], &tri.sites[t[1]], &tri.sites[t[2]])
}

/// Edges belonging to exactly one of the given triangles, in sorted order.
fn boundary_edges<'a>(triangles: impl Iterator<Item = &'a [usize; 3]>) -> Vec<Edge> {
    let mut count: AHashMap<Edge, u32> = AHashMap::new();
    for t in triangles {
        for edge in tri_edges(*t) {
            *count.entry(edge).or_insert(0) += 1;
        }
    }
    let mut edges: Vec<Edge> = count
        .into_iter()
        .filter_map(|(edge, n)| if n == 1 { Some(edge) } else { None })
        .collect();
    edges.sort_unstable();
    edges
}

/// Back-off used when alpha keeps no triangle at all: take the edges on
/// the outer boundary of the candidate triangles (those appearing in
/// exactly one of them) and relax an edge-length cutoff from just under
/// 1/alpha until at least one such edge passes.
fn backoff_boundary(tri: &Triangulation, candidates: &[[usize; 3]], alpha: f64) -> Vec<Edge> {
    let once = boundary_edges(candidates.iter());
    if once.is_empty() {
        return Vec::new();
    }
    let length = |e: &Edge| tri.sites[e.0].distance_to(&tri.sites[e.1]);
    let max_len = once.iter().map(|e| length(e)).fold(0.0, f64::max);

    let mut threshold = 1.0 / alpha - BACKOFF_STEP;
    loop {
        let passing: Vec<Edge> = once
            .iter()
            .copied()
            .filter(|e| length(e) <= threshold)
            .collect();
        if !passing.is_empty() {
            return passing;
        }
        if threshold > max_len {
            return once;
        }
        threshold += BACKOFF_STEP;
    }
}

/// Partitions boundary edges into connected components by shared endpoint
/// and orders each component counter-clockwise around its centroid.
fn rings(tri: &Triangulation, boundary: &[Edge]) -> Vec<Vec<Point2>> {
    if boundary.is_empty() {
        return Vec::new();
    }

    let mut uf = UnionFind::new(tri.sites.len());
    for edge in boundary {
        uf.union(edge.0, edge.1);
    }

    let mut members: AHashMap<usize, Vec<usize>> = AHashMap::new();
    let mut seen = vec![false; tri.sites.len()];
    for edge in boundary {
        for v in [edge.0, edge.1] {
            if !seen[v] {
                seen[v] = true;
                members.entry(uf.find(v)).or_default().push(v);
            }
        }
    }

    let mut components: Vec<Vec<usize>> = members.into_values().collect();
    // deterministic component order: by smallest vertex index
    for comp in &mut components {
        comp.sort_unstable();
    }
    components.sort_by_key(|comp| comp[0]);

    components
        .into_iter()
        .map(|comp| {
            let n = comp.len() as f64;
            let cx = comp.iter().map(|&v| tri.sites[v].x).sum::<f64>() / n;
            let cy = comp.iter().map(|&v| tri.sites[v].y).sum::<f64>() / n;
            let mut ring: Vec<Point2> = comp.iter().map(|&v| tri.sites[v]).collect();
            ring.sort_by(|a, b| {
                let ta = (a.y - cy).atan2(a.x - cx);
                let tb = (b.y - cy).atan2(b.x - cx);
                ta.total_cmp(&tb).then_with(|| a.lex_cmp(b))
            });
            ring
        })
        .collect()
}
