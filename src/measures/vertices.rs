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

//! Degree analysis of the pruned MST: V1 vertices, V2 corners and the
//! obtuse test used by Striated.

use smallvec::SmallVec;

use crate::geometry::Point2;
use crate::graph::Tree;

/// A degree-2 vertex together with its two neighbors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    pub vertex: Point2,
    pub a: Point2,
    pub b: Point2,
}

pub(crate) fn adjacency(tree: &Tree) -> Vec<SmallVec<[usize; 4]>> {
    let mut adj: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); tree.nodes.len()];
    for link in &tree.links {
        adj[link.source].push(link.target);
        adj[link.target].push(link.source);
    }
    adj
}

/// Nodes of degree exactly 1.
pub fn v1_vertices(tree: &Tree) -> Vec<Point2> {
    adjacency(tree)
        .iter()
        .enumerate()
        .filter(|(_, neighbors)| neighbors.len() == 1)
        .map(|(i, _)| tree.nodes[i])
        .collect()
}

/// Corners at nodes of degree exactly 2.
pub fn v2_corners(tree: &Tree) -> Vec<Corner> {
    adjacency(tree)
        .iter()
        .enumerate()
        .filter(|(_, neighbors)| neighbors.len() == 2)
        .map(|(i, neighbors)| Corner {
            vertex: tree.nodes[i],
            a: tree.nodes[neighbors[0]],
            b: tree.nodes[neighbors[1]],
        })
        .collect()
}

/// Interior angle at the corner vertex exceeds 135 degrees,
/// i.e. cos(theta) < -sqrt(2)/2.
pub fn is_obtuse(corner: &Corner) -> bool {
    let ux = corner.a.x - corner.vertex.x;
    let uy = corner.a.y - corner.vertex.y;
    let wx = corner.b.x - corner.vertex.x;
    let wy = corner.b.y - corner.vertex.y;
    let nu = (ux * ux + uy * uy).sqrt();
    let nw = (wx * wx + wy * wy).sqrt();
    if nu == 0.0 || nw == 0.0 {
        return false;
    }
    let cos = (ux * wx + uy * wy) / (nu * nw);
    cos < -std::f64::consts::FRAC_1_SQRT_2
}

pub fn obtuse_v2_corners(corners: &[Corner]) -> Vec<Corner> {
    corners.iter().copied().filter(|c| is_obtuse(c)).collect()
}
