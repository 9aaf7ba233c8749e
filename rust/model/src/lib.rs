// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Scenemap Model
//!
//! In-memory IFC object graph consumed by the scenemap conversion engine.
//!
//! This crate holds the *input* side of the conversion: projects, spatial
//! containment, object placements and geometric representations, already
//! resolved into an arena with stable ids. Parsing a STEP file into this
//! graph is a separate concern and lives outside this workspace.
//!
//! ## Overview
//!
//! - [`Model`]: arena of [`ObjectDefinition`]s and [`ObjectPlacement`]s
//!   plus file-header fields mirrored onto the scene root
//! - [`ObjectKind`]: capability-tagged variant payload carrying the
//!   kind-specific attributes (project / spatial element / element /
//!   plain product) instead of an inheritance chain
//! - [`RepresentationItem`]: the geometric item variants the engine can
//!   materialize (polylines, indexed poly-curves, extruded area solids,
//!   polygonal face sets)
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the model types

pub mod material;
pub mod model;
pub mod object;
pub mod placement;
pub mod representation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use material::Material;
pub use model::{Model, ObjectId, PlacementId};
pub use object::{ObjectDefinition, ObjectKind, ProductData};
pub use placement::{Axis2Placement, LocalPlacement, ObjectPlacement};
pub use representation::{
    CurveSegment, IndexedFace, ItemKind, ProfileDef, Representation, RepresentationItem,
};
