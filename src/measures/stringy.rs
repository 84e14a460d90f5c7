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

use crate::config::StringyFormula;
use crate::graph::Tree;

use super::vertices::adjacency;

/// How path-like the tree is.
///
/// The degree-two ratio v2 / (n - v1) is 1.0 for a simple path; the
/// leaf-branch ratio is (v1 - v3) / (n - v1 - v3). Both clamp to [0, 1]
/// and define a non-positive denominator as 0.
pub fn stringy(tree: &Tree, formula: StringyFormula) -> f64 {
    let n = tree.nodes.len();
    if n == 0 {
        return 0.0;
    }
    let mut v1 = 0usize;
    let mut v2 = 0usize;
    let mut v3 = 0usize;
    for neighbors in adjacency(tree) {
        match neighbors.len() {
            1 => v1 += 1,
            2 => v2 += 1,
            d if d >= 3 => v3 += 1,
            _ => {}
        }
    }

    match formula {
        StringyFormula::DegreeTwoRatio => {
            let denom = n as f64 - v1 as f64;
            if denom > 0.0 {
                (v2 as f64 / denom).clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
        StringyFormula::LeafBranchRatio => {
            let denom = n as f64 - v1 as f64 - v3 as f64;
            if denom > 0.0 {
                ((v1 as f64 - v3 as f64) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            }
        }
    }
}
