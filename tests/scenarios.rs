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

//! End-to-end scenarios over archetypal point clouds.

use approx::assert_abs_diff_eq;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scagnostics::{scag, ScagError, ScagOptions, Scagnostics};

fn scores(result: &Scagnostics) -> [f64; 9] {
    [
        result.outlying_score,
        result.skewed_score,
        result.sparse_score,
        result.clumpy_score,
        result.striated_score,
        result.convex_score,
        result.skinny_score,
        result.stringy_score,
        result.monotonic_score,
    ]
}

fn assert_scores_in_unit_interval(result: &Scagnostics) {
    for (i, s) in scores(result).iter().enumerate() {
        assert!((0.0..=1.0).contains(s), "score {i} out of range: {s}");
    }
}

#[test]
fn line_is_monotonic_and_stringy() {
    let points: Vec<[f64; 2]> = (0..5).map(|i| [i as f64, i as f64]).collect();
    let result = scag(&points, &ScagOptions::default()).unwrap();

    assert_abs_diff_eq!(result.monotonic_score, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.stringy_score, 1.0, epsilon = 1e-9);
    // a zero-area hull scores 0
    assert_eq!(result.convex_score, 0.0);
    assert_eq!(result.outlying_score, 0.0);
    assert!(result.triangulation.collinear);
    assert_scores_in_unit_interval(&result);
}

#[test]
fn square_grid_is_even_and_convex() {
    let mut points = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            points.push([i as f64, j as f64]);
        }
    }
    let result = scag(&points, &ScagOptions::default()).unwrap();

    assert_eq!(result.outlying_score, 0.0);
    // all MST edges share one weight
    assert_eq!(result.skewed_score, 0.0);
    assert_eq!(result.clumpy_score, 0.0);
    assert!(result.convex_score > 0.99, "convex {}", result.convex_score);
    assert_scores_in_unit_interval(&result);
}

#[test]
fn bridged_clusters_are_clumpy() {
    // a tight group and a loose chain; the loose spacings widen the IQR
    // fence enough that the bridge edge survives pruning
    let mut points: Vec<[f64; 2]> = (0..20)
        .map(|i| [i as f64 * 0.01, i as f64 * 0.01])
        .collect();
    points.extend((0..20).map(|k| [2.0 + k as f64, 2.0 + k as f64]));
    let result = scag(&points, &ScagOptions::default()).unwrap();

    assert!(result.clumpy_score > 0.5, "clumpy {}", result.clumpy_score);
    assert_eq!(result.outlying_score, 0.0);
    assert_scores_in_unit_interval(&result);
}

#[test]
fn single_far_point_is_outlying() {
    let mut points: Vec<[f64; 2]> = (0..10)
        .map(|i| [(i % 3) as f64 * 0.1, (i / 3) as f64 * 0.1])
        .collect();
    points.push([100.0, 100.0]);
    let result = scag(&points, &ScagOptions::default()).unwrap();

    assert!(result.outlying_score > 0.0);
    assert_eq!(result.outlying_links.len(), 1);
    let heaviest = result
        .mst
        .links
        .iter()
        .map(|l| l.weight)
        .fold(0.0_f64, f64::max);
    assert_abs_diff_eq!(result.outlying_links[0].weight, heaviest, epsilon = 1e-12);
    assert_eq!(result.outlying_points.len(), 1);
    assert_abs_diff_eq!(result.outlying_points[0].x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.outlying_points[0].y, 1.0, epsilon = 1e-9);
    assert_scores_in_unit_interval(&result);
}

fn noisy_line(seed: u64) -> Vec<[f64; 2]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..50)
        .map(|i| {
            let x = i as f64 / 49.0;
            [x, x + rng.gen_range(-0.01..0.01)]
        })
        .collect()
}

#[test]
fn noisy_line_is_monotonic_stringy_and_skinny() {
    let result = scag(&noisy_line(7), &ScagOptions::default()).unwrap();

    assert!(
        result.monotonic_score > 0.9,
        "monotonic {}",
        result.monotonic_score
    );
    assert!(result.stringy_score > 0.8, "stringy {}", result.stringy_score);
    assert!(result.skinny_score > 0.5, "skinny {}", result.skinny_score);
    assert_scores_in_unit_interval(&result);
}

#[test]
fn circle_is_convex_but_not_monotonic() {
    let points: Vec<[f64; 2]> = (0..50)
        .map(|i| {
            let t = i as f64 / 50.0 * std::f64::consts::TAU;
            [t.cos(), t.sin()]
        })
        .collect();
    let result = scag(&points, &ScagOptions::default()).unwrap();

    assert!(result.convex_score > 0.6, "convex {}", result.convex_score);
    assert!(
        result.monotonic_score < 0.2,
        "monotonic {}",
        result.monotonic_score
    );
    assert!(
        result.skinny_score > 0.0 && result.skinny_score < 0.95,
        "skinny {}",
        result.skinny_score
    );
    assert_scores_in_unit_interval(&result);
}

#[test]
fn normalized_points_stay_in_the_unit_square() {
    let result = scag(&noisy_line(3), &ScagOptions::default()).unwrap();
    for p in &result.normalized_points {
        assert!((0.0..=1.0).contains(&p.x));
        assert!((0.0..=1.0).contains(&p.y));
    }
}

#[test]
fn shuffling_the_input_does_not_change_scores() {
    let points = noisy_line(11);
    let baseline = scag(&points, &ScagOptions::default()).unwrap();

    let mut shuffled = points.clone();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    let reordered = scag(&shuffled, &ScagOptions::default()).unwrap();

    for (a, b) in scores(&baseline).iter().zip(scores(&reordered)) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-9);
    }
}

#[test]
fn mst_connects_all_bins() {
    let result = scag(&noisy_line(5), &ScagOptions::default()).unwrap();
    assert_eq!(result.mst.links.len(), result.mst.nodes.len() - 1);
    for link in &result.mst.links {
        assert_ne!(link.source, link.target);
        assert!(link.weight > 0.0);
    }
}

#[test]
fn prebinned_and_prenormalized_inputs_skip_those_stages() {
    let points: Vec<[f64; 2]> = (0..8)
        .map(|i| [(i % 4) as f64 * 0.33, (i / 4) as f64 * 0.9])
        .collect();
    let options = ScagOptions {
        is_normalized: true,
        is_binned: true,
        ..ScagOptions::default()
    };
    let result = scag(&points, &options).unwrap();

    assert_eq!(result.bin_size, 0);
    assert_eq!(result.bins.len(), 8);
    for (p, q) in points.iter().zip(&result.normalized_points) {
        assert_eq!(p[0], q.x);
        assert_eq!(p[1], q.y);
    }
}

#[test]
fn too_few_points_fail_fast() {
    let err = scag(&[[0.0, 0.0], [1.0, 1.0]], &ScagOptions::default()).unwrap_err();
    assert_eq!(err, ScagError::InsufficientPoints { got: 2 });
}

#[test]
fn inverted_bin_bounds_are_rejected() {
    let options = ScagOptions {
        min_bins: 600,
        max_bins: 500,
        ..ScagOptions::default()
    };
    let err = scag(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], &options).unwrap_err();
    assert!(matches!(err, ScagError::InvalidOption { .. }));
}

#[test]
fn non_finite_points_are_rejected() {
    let err = scag(
        &[[0.0, 0.0], [1.0, f64::NAN], [0.0, 1.0]],
        &ScagOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ScagError::InvalidOption { .. }));
}

#[test]
fn outlying_upper_bound_override_is_honored() {
    let mut points: Vec<[f64; 2]> = (0..10)
        .map(|i| [(i % 3) as f64 * 0.1, (i / 3) as f64 * 0.1])
        .collect();
    points.push([100.0, 100.0]);
    let options = ScagOptions {
        outlying_upper_bound: Some(10.0),
        ..ScagOptions::default()
    };
    let result = scag(&points, &options).unwrap();
    assert_eq!(result.outlying_upper_bound, 10.0);
    assert_eq!(result.outlying_score, 0.0);
}
