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

//! Scagnostics: scatter-plot diagnostics for 2-D point sets.
//!
//! Given a set of points, the [`scag`] entry point runs the full geometric
//! pipeline (normalization, hexagonal binning, Delaunay triangulation,
//! minimum spanning tree, outlier pruning, alpha and convex hulls) and
//! returns nine scalar measures in `[0, 1]` together with every
//! intermediate artifact.
//!
//! ```
//! use scagnostics::{scag, ScagOptions};
//!
//! let points: Vec<[f64; 2]> = (0..60)
//!     .map(|i| [i as f64, (i as f64).sin()])
//!     .collect();
//! let result = scag(&points, &ScagOptions::default()).unwrap();
//! assert!(result.monotonic_score >= 0.0 && result.monotonic_score <= 1.0);
//! ```

pub mod binning;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod hull;
pub mod kernel;
pub mod measures;
pub mod normalize;
pub mod numeric;
pub mod outlying;
pub mod pipeline;
pub mod triangulation;

pub use config::{BinType, ScagOptions, SkewedFormula, StringyFormula};
pub use error::ScagError;
pub use geometry::Point2;
pub use pipeline::{scag, Scagnostics};
