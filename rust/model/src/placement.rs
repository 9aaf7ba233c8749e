// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object placements: absolute or local-relative position data.

use nalgebra::{Point3, Vector3};

use crate::model::PlacementId;

/// Placement of a product in space.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectPlacement {
    /// Placed directly in world coordinates.
    Absolute(Axis2Placement),
    /// Placed relative to another object's placement.
    Local(LocalPlacement),
}

/// Local placement: a nested axis placement plus an optional reference
/// to the placement it is relative to. The relative-to graph is
/// independent of the containment graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalPlacement {
    pub relative_to: Option<PlacementId>,
    pub placement: Axis2Placement,
}

/// Location plus optional axes (IfcAxis2Placement3D shape).
///
/// The axes are kept for future rotation support; the conversion engine
/// currently consumes the location only.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis2Placement {
    pub location: Point3<f64>,
    pub axis: Option<Vector3<f64>>,
    pub ref_direction: Option<Vector3<f64>>,
}

impl Axis2Placement {
    /// Axis placement at the given location with default axes.
    pub fn at(location: Point3<f64>) -> Self {
        Self {
            location,
            axis: None,
            ref_direction: None,
        }
    }
}

impl ObjectPlacement {
    /// Location of this placement, ignoring any relative-to chain.
    pub fn location(&self) -> Point3<f64> {
        match self {
            ObjectPlacement::Absolute(axis) => axis.location,
            ObjectPlacement::Local(local) => local.placement.location,
        }
    }

    /// The placement this one is declared relative to, if any.
    pub fn relative_to(&self) -> Option<PlacementId> {
        match self {
            ObjectPlacement::Absolute(_) => None,
            ObjectPlacement::Local(local) => local.relative_to,
        }
    }
}
