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

//! Clumpy: the strongest cluster separation any single MST edge creates.
//!
//! Removing an edge splits the tree in two; the edge's score compares its
//! own weight against the heaviest edge inside the smaller side. Edges
//! whose smaller side holds no edge at all contribute 0 (a leaf edge
//! separates nothing).

use smallvec::SmallVec;

use crate::graph::Tree;

pub fn clumpy(tree: &Tree) -> f64 {
    let n = tree.nodes.len();
    if n == 0 || tree.links.is_empty() {
        return 0.0;
    }

    // adjacency carrying the link index so one link can be masked out
    let mut adj: Vec<SmallVec<[(usize, usize); 4]>> = vec![SmallVec::new(); n];
    for (li, link) in tree.links.iter().enumerate() {
        adj[link.source].push((link.target, li));
        adj[link.target].push((link.source, li));
    }

    let mut best = 0.0_f64;
    let mut membership = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();

    for (li, link) in tree.links.iter().enumerate() {
        if link.weight <= 0.0 {
            continue;
        }

        // component of each endpoint with this link removed; the tree may
        // be a forest, so both sides are walked explicitly
        let size_source = component(&adj, link.source, li, &mut membership, &mut stack);
        let side_nodes: Vec<usize> = std::mem::take(&mut stack);
        let size_target = component(&adj, link.target, li, &mut membership, &mut stack);
        let target_nodes: Vec<usize> = std::mem::take(&mut stack);

        let smaller: &[usize] = if size_source <= size_target {
            &side_nodes
        } else {
            &target_nodes
        };

        membership.iter_mut().for_each(|m| *m = false);
        for &v in smaller {
            membership[v] = true;
        }

        let mut heaviest: Option<f64> = None;
        for (other_li, other) in tree.links.iter().enumerate() {
            if other_li != li && membership[other.source] && membership[other.target] {
                heaviest = Some(heaviest.map_or(other.weight, |h: f64| h.max(other.weight)));
            }
        }

        if let Some(h) = heaviest {
            best = best.max(1.0 - h / link.weight);
        }

        membership.iter_mut().for_each(|m| *m = false);
    }

    best.clamp(0.0, 1.0)
}

/// Flood-fills the component containing `start` while ignoring link
/// `masked`. Visited nodes are collected into `out`; returns the size.
fn component(
    adj: &[SmallVec<[(usize, usize); 4]>],
    start: usize,
    masked: usize,
    visited: &mut [bool],
    out: &mut Vec<usize>,
) -> usize {
    visited.iter_mut().for_each(|m| *m = false);
    out.clear();
    visited[start] = true;
    out.push(start);
    let mut head = 0;
    while head < out.len() {
        let v = out[head];
        head += 1;
        for &(next, li) in &adj[v] {
            if li != masked && !visited[next] {
                visited[next] = true;
                out.push(next);
            }
        }
    }
    out.len()
}
