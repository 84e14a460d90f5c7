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

use crate::geometry::{polygon_area, polygon_perimeter, Point2};

/// Departure of the alpha hull from a disc:
/// 1 - sqrt(4 pi area) / perimeter. Degenerate hulls score 1.
pub fn skinny(alpha_rings: &[Vec<Point2>]) -> f64 {
    let area: f64 = alpha_rings.iter().map(|ring| polygon_area(ring)).sum();
    let perimeter: f64 = alpha_rings.iter().map(|ring| polygon_perimeter(ring)).sum();
    if area <= 0.0 || perimeter <= 0.0 {
        return 1.0;
    }
    (1.0 - (4.0 * std::f64::consts::PI * area).sqrt() / perimeter).clamp(0.0, 1.0)
}
