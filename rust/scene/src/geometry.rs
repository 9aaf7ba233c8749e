// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry payloads carried by shape nodes.
//!
//! Index buffers are 0-based with a `-1` sentinel terminating each
//! segment or face, the convention of strip-mode indexed line and face
//! sets in scene-graph formats.

use nalgebra::{Point2, Point3};

/// Geometry node content of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Lines(LineSet),
    Faces(IndexedFaceSet),
    Extrusion(Extrusion),
}

/// Line geometry: either a plain point strip (no indices) or a
/// strip-mode indexed line set.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSet {
    pub points: Vec<Point3<f64>>,
    /// 0-based indices into `points`, `-1` terminating each segment.
    /// `None` means one straight strip over all points in order.
    pub indices: Option<Vec<i32>>,
}

/// Indexed face geometry: coordinate list plus a flat index buffer with
/// `-1` after each face loop.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedFaceSet {
    pub coordinates: Vec<Point3<f64>>,
    pub indices: Vec<i32>,
}

/// Extrusion of a 2D cross-section along a two-point spine.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrusion {
    /// Cross-section in the spine's local XY plane. May be empty when
    /// the swept profile could not be harvested.
    pub cross_section: Vec<Point2<f64>>,
    /// Spine from origin to `direction * depth`.
    pub spine: [Point3<f64>; 2],
}

impl LineSet {
    /// Number of vertices referenced by this line set.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Split the index buffer on the `-1` sentinel into per-segment
    /// chains of point indices. Without an index buffer the whole point
    /// list is one chain.
    pub fn chains(&self) -> Vec<Vec<usize>> {
        match &self.indices {
            None => {
                if self.points.is_empty() {
                    Vec::new()
                } else {
                    vec![(0..self.points.len()).collect()]
                }
            }
            Some(indices) => {
                let mut chains = Vec::new();
                let mut current = Vec::new();
                for &idx in indices {
                    if idx < 0 {
                        if !current.is_empty() {
                            chains.push(std::mem::take(&mut current));
                        }
                    } else {
                        current.push(idx as usize);
                    }
                }
                if !current.is_empty() {
                    chains.push(current);
                }
                chains
            }
        }
    }
}
