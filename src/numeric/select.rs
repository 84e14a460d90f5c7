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

//! Selection and quantile primitives.
//!
//! `quickselect` is the Floyd-Rivest variant: above 600 elements it first
//! recurses on a sampled subrange around the target order statistic, then
//! partitions with the Hoare scheme. It mutates its input.

use std::collections::VecDeque;

use num_traits::Float;

/// Partially sorts `arr` so that `arr[k]` holds its k-th order statistic,
/// everything left of `k` is `<= arr[k]` and everything right is `>= arr[k]`.
pub fn quickselect<T: Float>(arr: &mut [T], k: usize) {
    if arr.is_empty() || k >= arr.len() {
        return;
    }
    select(arr, k as isize, 0, arr.len() as isize - 1);
}

fn select<T: Float>(arr: &mut [T], k: isize, mut left: isize, mut right: isize) {
    while right > left {
        if right - left > 600 {
            let n = (right - left + 1) as f64;
            let i = (k - left + 1) as f64;
            let z = n.ln();
            let s = 0.5 * (2.0 * z / 3.0).exp();
            let sign = if i - n / 2.0 < 0.0 { -1.0 } else { 1.0 };
            let sd = 0.5 * (z * s * (n - s) / n).sqrt() * sign;
            let new_left = left.max((k as f64 - i * s / n + sd).floor() as isize);
            let new_right = right.min((k as f64 + (n - i) * s / n + sd).floor() as isize);
            select(arr, k, new_left, new_right);
        }

        let t = arr[k as usize];
        let mut i = left;
        let mut j = right;

        arr.swap(left as usize, k as usize);
        if arr[right as usize] > t {
            arr.swap(right as usize, left as usize);
        }
        while i < j {
            arr.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
            while arr[i as usize] < t {
                i += 1;
            }
            while arr[j as usize] > t {
                j -= 1;
            }
        }

        if arr[left as usize] == t {
            arr.swap(left as usize, j as usize);
        } else {
            j += 1;
            arr.swap(j as usize, right as usize);
        }

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j - 1;
        }
    }
}

/// p-quantile of an ascending slice.
///
/// p = 0 and p = 1 return the endpoints. Otherwise let idx = n * p: an
/// integer idx on an even-length slice averages the two straddling
/// elements, anything else returns `sorted[ceil(idx) - 1]`.
pub fn quantile<T: Float>(sorted: &[T], p: f64) -> T {
    let n = sorted.len();
    if n == 0 {
        return T::zero();
    }
    if p <= 0.0 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let idx = n as f64 * p;
    if idx.fract() == 0.0 && n % 2 == 0 {
        let i = idx as usize;
        let two = T::one() + T::one();
        (sorted[i - 1] + sorted[i]) / two
    } else {
        sorted[idx.ceil() as usize - 1]
    }
}

/// Multi-quantile over unsorted data. Quickselects each order statistic the
/// requested probabilities need exactly once, working a deque of target
/// indices left to right so every pass narrows the remaining range.
/// Mutates `values` (partial sort).
pub fn quantiles<T: Float>(values: &mut [T], ps: &[f64]) -> Vec<T> {
    let n = values.len();
    if n == 0 {
        return vec![T::zero(); ps.len()];
    }

    let mut wanted: Vec<usize> = Vec::with_capacity(ps.len() * 2);
    for &p in ps {
        if p <= 0.0 {
            wanted.push(0);
        } else if p >= 1.0 {
            wanted.push(n - 1);
        } else {
            let idx = n as f64 * p;
            if idx.fract() == 0.0 && n % 2 == 0 {
                let i = idx as usize;
                wanted.push(i - 1);
                wanted.push(i);
            } else {
                wanted.push(idx.ceil() as usize - 1);
            }
        }
    }
    wanted.sort_unstable();
    wanted.dedup();

    let mut targets: VecDeque<usize> = wanted.into();
    let mut left = 0usize;
    while let Some(k) = targets.pop_front() {
        select(values, k as isize, left as isize, n as isize - 1);
        left = k;
    }

    // every index the rule touches is now an order statistic
    ps.iter().map(|&p| quantile(values, p)).collect()
}
