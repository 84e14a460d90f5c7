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

use crate::geometry::Point2;
use crate::triangulation::Triangulation;

use super::alpha_hull;

/// Convex hull of the sites flagged in `keep`, counter-clockwise.
///
/// The hull is the alpha shape at alpha = 0 (the outer boundary of the
/// Delaunay triangulation). Collinear sites are returned as-is in
/// lexicographic order, as are degenerate site sets with no surviving
/// triangle.
pub fn convex_hull(tri: &Triangulation, keep: &[bool]) -> Vec<Point2> {
    if tri.collinear {
        return kept_sites_sorted(tri, keep);
    }
    match alpha_hull(tri, keep, 0.0).into_iter().next() {
        Some(ring) => ring,
        None => kept_sites_sorted(tri, keep),
    }
}

fn kept_sites_sorted(tri: &Triangulation, keep: &[bool]) -> Vec<Point2> {
    let mut sites: Vec<Point2> = tri
        .sites
        .iter()
        .zip(keep)
        .filter_map(|(site, &k)| k.then_some(*site))
        .collect();
    sites.sort_by(Point2::lex_cmp);
    sites
}
