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

//! MST outlier pruning.
//!
//! Edges heavier than the Tukey fence Q3 + 1.5 IQR over the tree's edge
//! weights are removed; nodes this isolates are removed with them.

use crate::geometry::Point2;
use crate::graph::{Link, Tree};
use crate::numeric::quantiles;

/// Result of pruning an MST.
#[derive(Clone, Debug)]
pub struct Outlying {
    /// Removed weight over total weight, in [0, 1].
    pub score: f64,
    /// The edge-weight fence actually applied.
    pub upper_bound: f64,
    /// Removed links, indexed into the input tree's nodes.
    pub links: Vec<Link>,
    /// Nodes left without any incident link by the removal.
    pub points: Vec<Point2>,
    /// The no-outlying tree, nodes re-indexed.
    pub tree: Tree,
}

/// Prunes `tree` against `upper_bound`, or against Q3 + 1.5 IQR of its
/// edge weights when no override is given.
pub fn prune(tree: &Tree, upper_bound: Option<f64>) -> Outlying {
    let bound = upper_bound.unwrap_or_else(|| tukey_upper_fence(tree));

    let mut removed: Vec<Link> = Vec::new();
    let mut kept: Vec<Link> = Vec::new();
    for link in &tree.links {
        if link.weight > bound {
            removed.push(*link);
        } else {
            kept.push(*link);
        }
    }

    let total: f64 = tree.links.iter().map(|l| l.weight).sum();
    let removed_weight: f64 = removed.iter().map(|l| l.weight).sum();
    let score = if total > 0.0 {
        (removed_weight / total).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut degree_before = vec![0usize; tree.nodes.len()];
    for link in &tree.links {
        degree_before[link.source] += 1;
        degree_before[link.target] += 1;
    }
    let mut degree_after = vec![0usize; tree.nodes.len()];
    for link in &kept {
        degree_after[link.source] += 1;
        degree_after[link.target] += 1;
    }

    let mut isolated = vec![false; tree.nodes.len()];
    for link in &removed {
        for end in [link.source, link.target] {
            if degree_after[end] == 0 {
                isolated[end] = true;
            }
        }
    }
    let points: Vec<Point2> = (0..tree.nodes.len())
        .filter(|&i| isolated[i])
        .map(|i| tree.nodes[i])
        .collect();

    // Re-index the surviving nodes; a node is dropped only if the pruning
    // took its last link
    let mut remap = vec![usize::MAX; tree.nodes.len()];
    let mut new_nodes: Vec<Point2> = Vec::new();
    for i in 0..tree.nodes.len() {
        if degree_after[i] > 0 || degree_before[i] == 0 {
            remap[i] = new_nodes.len();
            new_nodes.push(tree.nodes[i]);
        }
    }
    let new_links: Vec<Link> = kept
        .iter()
        .map(|l| Link {
            source: remap[l.source],
            target: remap[l.target],
            weight: l.weight,
        })
        .collect();

    Outlying {
        score,
        upper_bound: bound,
        links: removed,
        points,
        tree: Tree {
            nodes: new_nodes,
            links: new_links,
        },
    }
}

/// Q3 + 1.5 IQR over the tree's edge weights; 0 for an edgeless tree.
pub fn tukey_upper_fence(tree: &Tree) -> f64 {
    if tree.links.is_empty() {
        return 0.0;
    }
    let mut weights: Vec<f64> = tree.links.iter().map(|l| l.weight).collect();
    let qs = quantiles(&mut weights, &[0.25, 0.75]);
    let iqr = qs[1] - qs[0];
    qs[1] + 1.5 * iqr
}
