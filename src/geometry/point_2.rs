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

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Coordinate resolution for point identity and edge-weight rounding.
///
/// Two points are the same node iff both coordinates agree after rounding
/// to multiples of this value.
pub const EPS: f64 = 1e-10;

/// A 2-D point with finite coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Lexicographic order by x then y. Used for deterministic site ordering.
    #[inline]
    pub fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }

    /// Identity key: coordinates snapped to the EPS grid.
    #[inline]
    pub(crate) fn grid_key(&self) -> (i64, i64) {
        ((self.x / EPS).round() as i64, (self.y / EPS).round() as i64)
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        self.grid_key() == other.grid_key()
    }
}
impl Eq for Point2 {}

impl Hash for Point2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (kx, ky) = self.grid_key();
        state.write_i64(kx);
        state.write_i64(ky);
    }
}

/// Euclidean edge weight, rounded to the EPS grid for stable comparisons.
#[inline]
pub(crate) fn rounded_distance(a: &Point2, b: &Point2) -> f64 {
    (a.distance_to(b) / EPS).round() * EPS
}
