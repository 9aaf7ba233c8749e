// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry Item Builders - dynamic dispatch per representation item kind.
//!
//! Each sub-module handles one category of items:
//!
//! - `curves`: Polyline, IndexedPolyCurve (line geometry, strip-mode indices)
//! - `extrusion`: ExtrudedAreaSolid (cross-section harvested from the
//!   swept profile's boundary curve)
//! - `faceset`: PolygonalFaceSet (indexed face geometry)
//!
//! A builder produces zero or one geometry contribution; `None` means
//! "this item contributes nothing". Unsupported kinds are logged and
//! skipped, never raised.

mod curves;
mod extrusion;
mod faceset;

#[cfg(test)]
mod tests;

pub use curves::{IndexedPolyCurveBuilder, PolylineBuilder};
pub use extrusion::ExtrudedAreaSolidBuilder;
pub use faceset::PolygonalFaceSetBuilder;

use std::collections::HashMap;
use std::sync::Arc;

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use tracing::warn;

use ifc_scenemap_model::{ItemKind, Model, ObjectId, RepresentationItem};

use crate::appearance::AmbientAppearance;
use crate::geometry::Geometry;
use crate::graph::{NodeContent, NodeId, SceneGraph};
use crate::mapping::PlacementResolver;

/// Per-build state threaded explicitly through the recursion.
///
/// Created at the start of a `load`/`update` build and consumed at its
/// end; the mapping tables inside are never shared across builds.
pub struct BuildContext<'m> {
    pub model: &'m Model,
    pub graph: &'m mut SceneGraph,
    /// Base context for resolving relative resource references.
    pub base_context: &'m str,
    /// Factor from model length units to meters.
    pub scale: f64,
    /// Ambient "current appearance" slot (forward-propagating).
    pub appearance: AmbientAppearance,
    /// Placement bookkeeping consumed by the fix-up pass.
    pub resolver: PlacementResolver,
    /// Reverse index from produced shape nodes to originating objects.
    pub shape_index: FxHashMap<NodeId, ObjectId>,
    /// Object whose representation is currently being materialized.
    pub current_object: Option<ObjectId>,
}

impl<'m> BuildContext<'m> {
    pub fn new(model: &'m Model, graph: &'m mut SceneGraph, base_context: &'m str) -> Self {
        Self {
            model,
            graph,
            base_context,
            scale: model.length_unit_scale,
            appearance: AmbientAppearance::new(),
            resolver: PlacementResolver::new(),
            shape_index: FxHashMap::default(),
            current_object: None,
        }
    }
}

/// Geometry item builder trait.
/// Each builder handles one kind of representation item.
pub trait ItemBuilder {
    /// Build the item's geometry contribution, or `None` when the item
    /// contributes nothing. Never fails; problems are logged and the
    /// contribution degraded.
    fn build(
        &self,
        item: &RepresentationItem,
        router: &ItemRouter,
        ctx: &mut BuildContext,
    ) -> Option<Geometry>;

    /// Item kinds this builder handles.
    fn supported_kinds(&self) -> &'static [ItemKind];
}

/// Dispatch table routing representation items to their builders.
pub struct ItemRouter {
    builders: HashMap<ItemKind, Arc<dyn ItemBuilder>>,
}

impl ItemRouter {
    /// Create a router with the default builders registered.
    pub fn new() -> Self {
        let mut router = Self {
            builders: HashMap::new(),
        };
        router.register(Box::new(PolylineBuilder::new()));
        router.register(Box::new(IndexedPolyCurveBuilder::new()));
        router.register(Box::new(ExtrudedAreaSolidBuilder::new()));
        router.register(Box::new(PolygonalFaceSetBuilder::new()));
        router
    }

    /// Register an item builder for all kinds it supports.
    pub fn register(&mut self, builder: Box<dyn ItemBuilder>) {
        let builder_arc: Arc<dyn ItemBuilder> = Arc::from(builder);
        for kind in builder_arc.supported_kinds() {
            self.builders.insert(*kind, Arc::clone(&builder_arc));
        }
    }

    /// Build the geometry for one item without attaching anything to
    /// the graph. Also the entry point for build-and-harvest, where the
    /// result is discarded after its points are extracted.
    pub fn build_item(
        &self,
        item: &RepresentationItem,
        ctx: &mut BuildContext,
    ) -> Option<Geometry> {
        match self.builders.get(&item.kind()) {
            Some(builder) => builder.build(item, self, ctx),
            None => {
                warn!(
                    kind = item.kind_name(),
                    "unsupported representation item kind, skipping"
                );
                None
            }
        }
    }

    /// Build one item into a shape node attached under `parent`. The
    /// shape adopts the appearance active right now, not at its final
    /// tree position, and is entered into the reverse index.
    pub fn build_shape(
        &self,
        item: &RepresentationItem,
        parent: NodeId,
        ctx: &mut BuildContext,
    ) -> Option<NodeId> {
        let geometry = self.build_item(item, ctx)?;
        let shape = ctx.graph.insert(NodeContent::Shape {
            geometry: Some(geometry),
            appearance: ctx.appearance.current(),
        });
        ctx.graph.attach(parent, shape);
        if let Some(object) = ctx.current_object {
            ctx.shape_index.insert(shape, object);
        }
        Some(shape)
    }
}

impl Default for ItemRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy a point list, applying the unit scale.
pub(crate) fn scale_points(points: &[Point3<f64>], scale: f64) -> Vec<Point3<f64>> {
    if scale == 1.0 {
        points.to_vec()
    } else {
        points.iter().map(|p| Point3::from(p.coords * scale)).collect()
    }
}
