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
use crate::numeric::extent;

/// Maps points into the unit square by per-axis min/max scaling.
///
/// An axis with zero range collapses to 0.5 for every point.
pub fn normalize(points: &[Point2]) -> Vec<Point2> {
    let Some((min_x, max_x)) = extent(points.iter().map(|p| p.x)) else {
        return Vec::new();
    };
    let Some((min_y, max_y)) = extent(points.iter().map(|p| p.y)) else {
        return Vec::new();
    };
    let range_x = max_x - min_x;
    let range_y = max_y - min_y;

    points
        .iter()
        .map(|p| {
            let x = if range_x > 0.0 {
                (p.x - min_x) / range_x
            } else {
                0.5
            };
            let y = if range_y > 0.0 {
                (p.y - min_y) / range_y
            } else {
                0.5
            };
            Point2::new(x, y)
        })
        .collect()
}
