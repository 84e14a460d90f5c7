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

pub mod delaunay;

pub use delaunay::Delaunay;

/// Undirected edge between two site indices, stored (min, max).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Edge(pub usize, pub usize);

impl Edge {
    #[inline]
    pub(crate) fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }
}

#[inline]
pub(crate) fn tri_edges(t: [usize; 3]) -> [Edge; 3] {
    [
        Edge::new(t[0], t[1]),
        Edge::new(t[1], t[2]),
        Edge::new(t[2], t[0]),
    ]
}

/// Triangulation of a site set: vertex-index triples into `sites`.
///
/// Collinear input produces no triangles and sets `collinear`; downstream
/// stages treat such a site set as a path along the line.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub sites: Vec<Point2>,
    pub triangles: Vec<[usize; 3]>,
    pub collinear: bool,
}

impl Triangulation {
    /// Coordinate triple per triangle.
    pub fn triangle_coordinates(&self) -> Vec<[Point2; 3]> {
        self.triangles
            .iter()
            .map(|t| [self.sites[t[0]], self.sites[t[1]], self.sites[t[2]]])
            .collect()
    }
}
