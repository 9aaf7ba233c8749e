// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric representations: the item variants the conversion engine
//! can materialize into shape nodes.
//!
//! Index lists follow the IFC convention and are 1-based; builders
//! translate them to 0-based on output.

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

/// Ordered list of representation items attached to a product.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Representation {
    pub items: Vec<RepresentationItem>,
}

impl Representation {
    pub fn new(items: Vec<RepresentationItem>) -> Self {
        Self { items }
    }
}

/// One geometric item of a representation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepresentationItem {
    /// Open or closed polyline over explicit points.
    Polyline { points: Vec<Point3<f64>> },
    /// Curve over a point list with optional per-segment index lists.
    /// Without segments it degrades to a straight polyline over the
    /// point list.
    IndexedPolyCurve {
        points: Vec<Point3<f64>>,
        segments: Vec<CurveSegment>,
    },
    /// Solid swept from a 2D profile along a direction.
    ExtrudedAreaSolid {
        swept_area: ProfileDef,
        direction: Vector3<f64>,
        depth: f64,
    },
    /// Pre-tessellated set of polygonal faces over a coordinate list.
    PolygonalFaceSet {
        coordinates: Vec<Point3<f64>>,
        faces: Vec<IndexedFace>,
        /// Optional point-name indirection: face indices index into this
        /// table, which in turn indexes the coordinate list. 1-based.
        pn_index: Option<Vec<u32>>,
    },
    /// Recognized item kind with no builder; carries the kind name for
    /// the warning.
    Unsupported(String),
}

/// One segment of an [`RepresentationItem::IndexedPolyCurve`],
/// carrying 1-based indices into the curve's point list.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveSegment {
    LineIndex(SmallVec<[u32; 8]>),
    ArcIndex(SmallVec<[u32; 3]>),
    /// Recognized segment kind with no builder.
    Unsupported(String),
}

/// Swept profile of an extruded area solid.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileDef {
    /// Profile bounded by an arbitrary closed curve, itself a
    /// representation item (polyline or indexed poly-curve).
    ArbitraryClosed { outer_curve: Box<RepresentationItem> },
    /// Recognized profile kind with no builder.
    Unsupported(String),
}

/// One face of a polygonal face set, as a 1-based coordinate index loop.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedFace {
    pub indices: SmallVec<[u32; 8]>,
}

impl IndexedFace {
    pub fn new(indices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }
}

/// Dispatch key for representation item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Polyline,
    IndexedPolyCurve,
    ExtrudedAreaSolid,
    PolygonalFaceSet,
    Unsupported,
}

impl RepresentationItem {
    /// Dispatch key of this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            RepresentationItem::Polyline { .. } => ItemKind::Polyline,
            RepresentationItem::IndexedPolyCurve { .. } => ItemKind::IndexedPolyCurve,
            RepresentationItem::ExtrudedAreaSolid { .. } => ItemKind::ExtrudedAreaSolid,
            RepresentationItem::PolygonalFaceSet { .. } => ItemKind::PolygonalFaceSet,
            RepresentationItem::Unsupported(_) => ItemKind::Unsupported,
        }
    }

    /// Human-readable kind name, for log messages.
    pub fn kind_name(&self) -> &str {
        match self {
            RepresentationItem::Polyline { .. } => "Polyline",
            RepresentationItem::IndexedPolyCurve { .. } => "IndexedPolyCurve",
            RepresentationItem::ExtrudedAreaSolid { .. } => "ExtrudedAreaSolid",
            RepresentationItem::PolygonalFaceSet { .. } => "PolygonalFaceSet",
            RepresentationItem::Unsupported(name) => name,
        }
    }
}
