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

use crate::error::ScagError;

/// Spatial aggregation scheme. Only hexagonal binning is implemented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BinType {
    #[default]
    Hexagon,
}

/// Which Skewed formula to evaluate.
///
/// The raw form is the quantile ratio (q90 - q50) / (q90 - q10). The
/// size-corrected form applies Wilkinson's sample-size adjustment
/// `1 - w * (1 - raw)` with `w = 0.7 + 0.3 / (1 + t^2)`, `t = n / 500`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkewedFormula {
    #[default]
    Raw,
    SizeCorrected,
}

/// Which Stringy formula to evaluate.
///
/// `DegreeTwoRatio` is v2 / (n - v1): the share of interior path vertices,
/// 1.0 for a simple path. `LeafBranchRatio` is (v1 - v3) / (n - v1 - v3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringyFormula {
    #[default]
    DegreeTwoRatio,
    LeafBranchRatio,
}

/// Options record accepted by [`crate::scag`].
#[derive(Clone, Debug)]
pub struct ScagOptions {
    pub bin_type: BinType,
    /// Initial hex grid resolution for the adaptive binner.
    pub start_bin_grid_size: usize,
    /// Lower bound on the number of bins the adaptive loop aims for.
    pub min_bins: usize,
    /// Upper bound on the number of bins the adaptive loop aims for.
    pub max_bins: usize,
    /// Input is already in the unit square; skip normalization.
    pub is_normalized: bool,
    /// Input points are sites; skip binning.
    pub is_binned: bool,
    /// Overrides the IQR-derived outlier upper bound when set.
    pub outlying_upper_bound: Option<f64>,
    pub skewed_formula: SkewedFormula,
    pub stringy_formula: StringyFormula,
}

impl Default for ScagOptions {
    fn default() -> Self {
        Self {
            bin_type: BinType::Hexagon,
            start_bin_grid_size: 40,
            min_bins: 50,
            max_bins: 500,
            is_normalized: false,
            is_binned: false,
            outlying_upper_bound: None,
            skewed_formula: SkewedFormula::default(),
            stringy_formula: StringyFormula::default(),
        }
    }
}

impl ScagOptions {
    pub fn validate(&self) -> Result<(), ScagError> {
        if self.start_bin_grid_size == 0 {
            return Err(ScagError::InvalidOption {
                reason: "start_bin_grid_size must be positive".into(),
            });
        }
        if self.min_bins == 0 || self.max_bins == 0 {
            return Err(ScagError::InvalidOption {
                reason: "min_bins and max_bins must be positive".into(),
            });
        }
        if self.min_bins > self.max_bins {
            return Err(ScagError::InvalidOption {
                reason: format!(
                    "min_bins ({}) must not exceed max_bins ({})",
                    self.min_bins, self.max_bins
                ),
            });
        }
        if let Some(bound) = self.outlying_upper_bound {
            if !bound.is_finite() || bound < 0.0 {
                return Err(ScagError::InvalidOption {
                    reason: "outlying_upper_bound must be finite and non-negative".into(),
                });
            }
        }
        Ok(())
    }
}
