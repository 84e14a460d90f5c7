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

//! Weighted graph over triangulation vertices and its minimum spanning tree.

use ahash::{AHashMap, AHashSet};

use crate::geometry::point_2::rounded_distance;
use crate::geometry::Point2;
use crate::triangulation::{tri_edges, Triangulation};

pub mod union_find;

pub use union_find::UnionFind;

/// Undirected weighted link between two node indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Graph induced by the triangulation: nodes deduplicated by coordinate
/// identity, links deduplicated as unordered pairs, weights Euclidean.
#[derive(Clone, Debug)]
pub struct Graph {
    pub nodes: Vec<Point2>,
    pub links: Vec<Link>,
}

/// A spanning tree (or forest) over a node set. The pruned "no-outlying"
/// tree reuses this representation.
#[derive(Clone, Debug)]
pub struct Tree {
    pub nodes: Vec<Point2>,
    pub links: Vec<Link>,
}

impl Graph {
    /// Builds the edge graph of a triangulation.
    ///
    /// Collinear site sets have no triangles; they become a path through
    /// the sites in lexicographic order.
    pub fn from_triangulation(tri: &Triangulation) -> Self {
        let mut nodes: Vec<Point2> = Vec::new();
        let mut index: AHashMap<Point2, usize> = AHashMap::new();
        let mut site_node: Vec<usize> = Vec::with_capacity(tri.sites.len());
        for site in &tri.sites {
            let id = *index.entry(*site).or_insert_with(|| {
                nodes.push(*site);
                nodes.len() - 1
            });
            site_node.push(id);
        }

        let mut links: Vec<Link> = Vec::new();
        let mut seen: AHashSet<(usize, usize)> = AHashSet::new();
        let mut push_link = |a: usize, b: usize, links: &mut Vec<Link>| {
            if a == b {
                return;
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                links.push(Link {
                    source: a,
                    target: b,
                    weight: rounded_distance(&nodes[a], &nodes[b]),
                });
            }
        };

        if tri.collinear {
            let mut order: Vec<usize> = (0..tri.sites.len()).collect();
            order.sort_by(|&a, &b| tri.sites[a].lex_cmp(&tri.sites[b]));
            for pair in order.windows(2) {
                push_link(site_node[pair[0]], site_node[pair[1]], &mut links);
            }
        } else {
            for t in &tri.triangles {
                for edge in tri_edges(*t) {
                    push_link(site_node[edge.0], site_node[edge.1], &mut links);
                }
            }
        }

        Self { nodes, links }
    }

    /// Kruskal MST: ascending weight, insertion order on ties, union-find
    /// to reject cycle edges. Returns a forest when the graph is
    /// disconnected.
    pub fn minimum_spanning_tree(&self) -> Tree {
        let mut order: Vec<usize> = (0..self.links.len()).collect();
        // stable sort keeps insertion order among equal weights
        order.sort_by(|&a, &b| self.links[a].weight.total_cmp(&self.links[b].weight));

        let mut uf = UnionFind::new(self.nodes.len());
        let mut chosen: Vec<Link> = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut components = self.nodes.len();

        for &li in &order {
            if components <= 1 {
                break;
            }
            let link = self.links[li];
            if uf.union(link.source, link.target) {
                chosen.push(link);
                components -= 1;
            }
        }

        Tree {
            nodes: self.nodes.clone(),
            links: chosen,
        }
    }
}

impl Tree {
    /// Node degrees under the current link set.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.nodes.len()];
        for link in &self.links {
            degrees[link.source] += 1;
            degrees[link.target] += 1;
        }
        degrees
    }

    pub fn total_weight(&self) -> f64 {
        self.links.iter().map(|l| l.weight).sum()
    }
}
