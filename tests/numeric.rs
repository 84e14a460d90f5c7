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
use scagnostics::numeric::{extent, quantile, quantiles, quickselect};

fn scrambled(n: usize) -> Vec<f64> {
    // deterministic low-discrepancy permutation of 0..n
    (0..n).map(|i| ((i * 37 + 11) % n) as f64).collect()
}

#[test]
fn quickselect_places_every_order_statistic() {
    let data = scrambled(101);
    let mut sorted = data.clone();
    sorted.sort_by(f64::total_cmp);

    for k in [0, 1, 13, 50, 99, 100] {
        let mut arr = data.clone();
        quickselect(&mut arr, k);
        assert_eq!(arr[k], sorted[k]);
        assert!(arr[..k].iter().all(|&v| v <= arr[k]));
        assert!(arr[k + 1..].iter().all(|&v| v >= arr[k]));
    }
}

#[test]
fn quickselect_large_input_uses_subrange_recursion() {
    // above the 600-element cutoff
    let data = scrambled(5000);
    let mut sorted = data.clone();
    sorted.sort_by(f64::total_cmp);

    let mut arr = data.clone();
    quickselect(&mut arr, 2500);
    assert_eq!(arr[2500], sorted[2500]);
}

#[test]
fn quantile_endpoints() {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(quantile(&sorted, 0.0), 1.0);
    assert_eq!(quantile(&sorted, 1.0), 5.0);
}

#[test]
fn quantile_even_length_integer_index_averages() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert_abs_diff_eq!(quantile(&sorted, 0.5), 2.5);
    assert_abs_diff_eq!(quantile(&sorted, 0.25), 1.5);
    assert_abs_diff_eq!(quantile(&sorted, 0.75), 3.5);
}

#[test]
fn quantile_odd_length_takes_ceiling() {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(quantile(&sorted, 0.5), 3.0);
    assert_eq!(quantile(&sorted, 0.9), 5.0);
    assert_eq!(quantile(&sorted, 0.1), 1.0);
}

#[test]
fn multi_quantile_matches_single_quantile() {
    let data = scrambled(100);
    let mut sorted = data.clone();
    sorted.sort_by(f64::total_cmp);

    let ps = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
    let mut arr = data.clone();
    let got = quantiles(&mut arr, &ps);
    for (&p, &q) in ps.iter().zip(&got) {
        assert_abs_diff_eq!(q, quantile(&sorted, p));
    }
}

#[test]
fn quantiles_of_empty_are_zero() {
    let mut arr: Vec<f64> = Vec::new();
    assert_eq!(quantiles(&mut arr, &[0.25, 0.75]), vec![0.0, 0.0]);
}

#[test]
fn extent_finds_min_and_max() {
    assert_eq!(extent([3.0, -1.0, 7.0, 2.0]), Some((-1.0, 7.0)));
    assert_eq!(extent(std::iter::empty::<f64>()), None);
}
