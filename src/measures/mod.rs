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

//! The nine scagnostic measures.
//!
//! Each measure is a pure function from the pruned MST (or its hulls) to a
//! scalar in `[0, 1]`. Scores that would divide by zero are 0, except
//! Skinny where a degenerate hull scores 1.

pub mod clumpy;
pub mod convex;
pub mod monotonic;
pub mod skewed;
pub mod skinny;
pub mod sparse;
pub mod striated;
pub mod stringy;
pub mod vertices;

pub use clumpy::clumpy;
pub use convex::convex;
pub use monotonic::monotonic;
pub use skewed::skewed;
pub use skinny::skinny;
pub use sparse::sparse;
pub use striated::striated;
pub use stringy::stringy;
pub use vertices::{is_obtuse, obtuse_v2_corners, v1_vertices, v2_corners, Corner};
