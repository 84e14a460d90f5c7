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

//! The scagnostics pipeline: points to nine scores plus every intermediate
//! geometric artifact.

use ahash::AHashSet;
use log::debug;

use crate::binning::{Bin, Binning, HexBinner};
use crate::config::{BinType, ScagOptions};
use crate::error::ScagError;
use crate::geometry::Point2;
use crate::graph::{Graph, Link, Tree};
use crate::hull::{alpha_hull, convex_hull};
use crate::measures::{
    clumpy, convex, monotonic, obtuse_v2_corners, skewed, skinny, sparse, striated, stringy,
    v1_vertices, v2_corners, Corner,
};
use crate::normalize::normalize;
use crate::outlying;
use crate::triangulation::{Delaunay, Triangulation};

/// Everything one scagnostics run produces.
#[derive(Clone, Debug)]
pub struct Scagnostics {
    pub normalized_points: Vec<Point2>,
    pub bins: Vec<Bin>,
    /// Hex grid resolution the binner settled on; 0 when the input was
    /// sparse enough for one bin per distinct point.
    pub bin_size: usize,
    pub bin_radius: f64,
    pub triangulation: Triangulation,
    pub graph: Graph,
    pub mst: Tree,
    pub outlying_score: f64,
    pub outlying_upper_bound: f64,
    /// Pruned MST links, indexed into `mst.nodes`.
    pub outlying_links: Vec<Link>,
    pub outlying_points: Vec<Point2>,
    pub no_outlying_tree: Tree,
    pub convex_hull: Vec<Point2>,
    pub alpha_hull: Vec<Vec<Point2>>,
    pub v1s: Vec<Point2>,
    pub v2_corners: Vec<Corner>,
    pub obtuse_v2_corners: Vec<Corner>,
    pub skewed_score: f64,
    pub sparse_score: f64,
    pub clumpy_score: f64,
    pub striated_score: f64,
    pub convex_score: f64,
    pub skinny_score: f64,
    pub stringy_score: f64,
    pub monotonic_score: f64,
}

impl Scagnostics {
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangulation.triangles
    }

    pub fn triangle_coordinates(&self) -> Vec<[Point2; 3]> {
        self.triangulation.triangle_coordinates()
    }
}

/// Runs the full pipeline over `points`.
///
/// Validation happens here; every stage past it is total. See
/// [`ScagOptions`] for the knobs.
pub fn scag(points: &[[f64; 2]], options: &ScagOptions) -> Result<Scagnostics, ScagError> {
    options.validate()?;
    if points.len() < 3 {
        return Err(ScagError::InsufficientPoints { got: points.len() });
    }
    if points.iter().any(|p| !p[0].is_finite() || !p[1].is_finite()) {
        return Err(ScagError::InvalidOption {
            reason: "point coordinates must be finite".into(),
        });
    }

    let raw: Vec<Point2> = points.iter().map(|&p| Point2::from(p)).collect();
    let normalized = if options.is_normalized {
        raw
    } else {
        normalize(&raw)
    };

    let binning = if options.is_binned {
        Binning::from_sites(&normalized)
    } else {
        match options.bin_type {
            BinType::Hexagon => {
                HexBinner::new(options.start_bin_grid_size, options.min_bins, options.max_bins)
                    .bin(&normalized)
            }
        }
    };
    let sites = binning.sites();
    debug!(
        "binned {} points into {} bins (grid size {})",
        normalized.len(),
        binning.bins.len(),
        binning.grid_size
    );

    let triangulation = Delaunay::build(&sites);
    let graph = Graph::from_triangulation(&triangulation);
    let mst = graph.minimum_spanning_tree();
    let pruned = outlying::prune(&mst, options.outlying_upper_bound);
    debug!(
        "mst: {} links, outlying bound {}, removed {}",
        mst.links.len(),
        pruned.upper_bound,
        pruned.links.len()
    );

    let survivors: AHashSet<Point2> = pruned.tree.nodes.iter().copied().collect();
    let keep: Vec<bool> = triangulation
        .sites
        .iter()
        .map(|s| survivors.contains(s))
        .collect();

    let alpha = if pruned.upper_bound > 0.0 {
        1.0 / pruned.upper_bound
    } else {
        0.0
    };
    let alpha_rings = alpha_hull(&triangulation, &keep, alpha);
    let hull = convex_hull(&triangulation, &keep);

    let v1s = v1_vertices(&pruned.tree);
    let corners = v2_corners(&pruned.tree);
    let obtuse = obtuse_v2_corners(&corners);

    Ok(Scagnostics {
        skewed_score: skewed(&pruned.tree, options.skewed_formula),
        sparse_score: sparse(&pruned.tree),
        clumpy_score: clumpy(&pruned.tree),
        striated_score: striated(&pruned.tree),
        convex_score: convex(&alpha_rings, &hull),
        skinny_score: skinny(&alpha_rings),
        stringy_score: stringy(&pruned.tree, options.stringy_formula),
        monotonic_score: monotonic(&pruned.tree),
        outlying_score: pruned.score,
        outlying_upper_bound: pruned.upper_bound,
        outlying_links: pruned.links,
        outlying_points: pruned.points,
        no_outlying_tree: pruned.tree,
        v1s,
        v2_corners: corners,
        obtuse_v2_corners: obtuse,
        convex_hull: hull,
        alpha_hull: alpha_rings,
        normalized_points: normalized,
        bins: binning.bins,
        bin_size: binning.grid_size,
        bin_radius: binning.radius,
        triangulation,
        graph,
        mst,
    })
}
