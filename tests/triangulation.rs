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

use scagnostics::kernel::{in_circle, orient2d};
use scagnostics::triangulation::Delaunay;
use scagnostics::Point2;

#[test]
fn square_triangulates_into_two_ccw_triangles() {
    let sites = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let tri = Delaunay::build(&sites);

    assert!(!tri.collinear);
    assert_eq!(tri.triangles.len(), 2);
    for t in &tri.triangles {
        assert!(t.iter().all(|&v| v < sites.len()));
        assert!(orient2d(&tri.sites[t[0]], &tri.sites[t[1]], &tri.sites[t[2]]) > 0.0);
    }
}

#[test]
fn collinear_sites_are_flagged_without_triangles() {
    let sites: Vec<Point2> = (0..6).map(|i| Point2::new(i as f64, 2.0 * i as f64)).collect();
    let tri = Delaunay::build(&sites);
    assert!(tri.collinear);
    assert!(tri.triangles.is_empty());
    assert_eq!(tri.sites.len(), 6);
}

#[test]
fn vertical_line_is_collinear() {
    let sites: Vec<Point2> = (0..5).map(|i| Point2::new(0.3, i as f64)).collect();
    assert!(Delaunay::build(&sites).collinear);
}

#[test]
fn grid_triangulation_has_expected_triangle_count() {
    // a triangulation of n points with h hull points has 2n - h - 2 faces
    let mut sites = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            sites.push(Point2::new(i as f64, j as f64));
        }
    }
    let tri = Delaunay::build(&sites);
    assert_eq!(tri.triangles.len(), 8);
}

#[test]
fn circumcircles_are_empty() {
    let sites: Vec<Point2> = (0..25)
        .map(|i| {
            let t = i as f64;
            Point2::new((t * 0.618_033_988_7).fract(), (t * 0.754_877_666_2).fract())
        })
        .collect();
    let tri = Delaunay::build(&sites);
    assert!(!tri.collinear);
    assert!(!tri.triangles.is_empty());

    for t in &tri.triangles {
        let (a, b, c) = (&tri.sites[t[0]], &tri.sites[t[1]], &tri.sites[t[2]]);
        for (i, p) in tri.sites.iter().enumerate() {
            if t.contains(&i) {
                continue;
            }
            assert!(!in_circle(a, b, c, p), "site {i} inside circumcircle of {t:?}");
        }
    }
}

#[test]
fn triangle_coordinates_match_indices() {
    let sites = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 1.5),
    ];
    let tri = Delaunay::build(&sites);
    let coords = tri.triangle_coordinates();
    assert_eq!(coords.len(), tri.triangles.len());
    for (t, c) in tri.triangles.iter().zip(&coords) {
        for k in 0..3 {
            assert_eq!(tri.sites[t[k]], c[k]);
        }
    }
}
