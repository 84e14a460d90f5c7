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

use approx::assert_abs_diff_eq;
use scagnostics::geometry::{polygon_area, polygon_perimeter};
use scagnostics::hull::{alpha_hull, convex_hull};
use scagnostics::triangulation::Delaunay;
use scagnostics::Point2;

fn grid_3x3() -> Vec<Point2> {
    let mut sites = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            sites.push(Point2::new(i as f64, j as f64));
        }
    }
    sites
}

#[test]
fn polygon_area_and_perimeter_of_unit_square() {
    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    assert_abs_diff_eq!(polygon_area(&square), 1.0);
    assert_abs_diff_eq!(polygon_perimeter(&square), 4.0);
}

#[test]
fn degenerate_rings_have_no_area() {
    let pair = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
    assert_eq!(polygon_area(&pair), 0.0);
    assert!(polygon_perimeter(&pair) > 0.0);
}

#[test]
fn convex_hull_of_grid_encloses_it() {
    let tri = Delaunay::build(&grid_3x3());
    let keep = vec![true; tri.sites.len()];
    let hull = convex_hull(&tri, &keep);

    // the grid boundary has 8 sites; all of them sit on the hull ring
    assert_eq!(hull.len(), 8);
    assert_abs_diff_eq!(polygon_area(&hull), 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon_perimeter(&hull), 8.0, epsilon = 1e-9);
}

#[test]
fn alpha_zero_reproduces_the_convex_hull() {
    let tri = Delaunay::build(&grid_3x3());
    let keep = vec![true; tri.sites.len()];
    let rings = alpha_hull(&tri, &keep, 0.0);

    assert_eq!(rings.len(), 1);
    assert_abs_diff_eq!(polygon_area(&rings[0]), 4.0, epsilon = 1e-9);
}

#[test]
fn alpha_area_never_exceeds_convex_area() {
    let tri = Delaunay::build(&grid_3x3());
    let keep = vec![true; tri.sites.len()];
    let hull_area = polygon_area(&convex_hull(&tri, &keep));

    for alpha in [0.25, 0.5, 1.0, 2.0, 4.0] {
        let rings = alpha_hull(&tri, &keep, alpha);
        let area: f64 = rings.iter().map(|r| polygon_area(r)).sum();
        assert!(
            area <= hull_area + 1e-9,
            "alpha {alpha}: {area} > {hull_area}"
        );
    }
}

#[test]
fn permissive_alpha_keeps_every_triangle() {
    // grid triangles have circumradius sqrt(2)/2, so 1/alpha = 2 keeps all
    let tri = Delaunay::build(&grid_3x3());
    let keep = vec![true; tri.sites.len()];
    let rings = alpha_hull(&tri, &keep, 0.5);
    let area: f64 = rings.iter().map(|r| polygon_area(r)).sum();
    assert_abs_diff_eq!(area, 4.0, epsilon = 1e-9);
}

#[test]
fn collinear_sites_fall_back_to_the_sorted_site_list() {
    let sites: Vec<Point2> = [3.0, 0.0, 2.0, 1.0]
        .iter()
        .map(|&t| Point2::new(t, t))
        .collect();
    let tri = Delaunay::build(&sites);
    let keep = vec![true; tri.sites.len()];

    let hull = convex_hull(&tri, &keep);
    assert_eq!(hull.len(), 4);
    for pair in hull.windows(2) {
        assert!(pair[0].lex_cmp(&pair[1]).is_lt());
    }
    assert!(alpha_hull(&tri, &keep, 1.0).is_empty());
}

#[test]
fn pruned_sites_are_excluded_from_the_hull() {
    let mut sites = grid_3x3();
    sites.push(Point2::new(10.0, 10.0));
    let tri = Delaunay::build(&sites);
    let mut keep = vec![true; tri.sites.len()];
    keep[9] = false;

    let hull = convex_hull(&tri, &keep);
    assert!(hull.iter().all(|p| *p != Point2::new(10.0, 10.0)));
    assert_abs_diff_eq!(polygon_area(&hull), 4.0, epsilon = 1e-9);
}
