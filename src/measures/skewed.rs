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

use crate::config::SkewedFormula;
use crate::graph::Tree;
use crate::numeric::quantiles;

/// Skewness of the edge-weight distribution:
/// (q90 - q50) / (q90 - q10), optionally size-corrected.
pub fn skewed(tree: &Tree, formula: SkewedFormula) -> f64 {
    if tree.links.is_empty() {
        return 0.0;
    }
    let mut weights: Vec<f64> = tree.links.iter().map(|l| l.weight).collect();
    let qs = quantiles(&mut weights, &[0.1, 0.5, 0.9]);
    let (q10, q50, q90) = (qs[0], qs[1], qs[2]);

    let denom = q90 - q10;
    if denom <= 0.0 {
        return 0.0;
    }
    let raw = ((q90 - q50) / denom).clamp(0.0, 1.0);

    match formula {
        SkewedFormula::Raw => raw,
        SkewedFormula::SizeCorrected => {
            let t = tree.nodes.len() as f64 / 500.0;
            let w = 0.7 + 0.3 / (1.0 + t * t);
            (1.0 - w * (1.0 - raw)).clamp(0.0, 1.0)
        }
    }
}
