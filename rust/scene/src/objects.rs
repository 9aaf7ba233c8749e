// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object builders - recursive conversion of model objects into
//! transform nodes.
//!
//! One transform node per object, metadata mirrored from non-empty
//! attributes, the representation materialized under a group wrapper,
//! and every relation (decomposition, containment, voids) fanned out
//! under its own group wrapper. Placement bookkeeping is delegated to
//! the resolver as the recursion goes.

use nalgebra::Vector3;

use ifc_scenemap_model::{Model, ObjectDefinition, ObjectId, ObjectKind};

use crate::appearance::Appearance;
use crate::builders::{BuildContext, ItemRouter};
use crate::graph::{meta, NodeContent, NodeId, SceneGraph};

/// Recursive object-to-transform-node builder.
pub struct ObjectBuilder {
    router: ItemRouter,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self {
            router: ItemRouter::new(),
        }
    }

    /// The geometry item dispatch table.
    pub fn router(&self) -> &ItemRouter {
        &self.router
    }

    /// Build the subtree for one object and return its transform node,
    /// detached; the caller attaches it. `None` when the id is stale.
    pub fn build_object(&self, id: ObjectId, ctx: &mut BuildContext) -> Option<NodeId> {
        let object = ctx.model.object(id)?;

        let node = ctx.graph.insert(NodeContent::Transform {
            translation: Vector3::zeros(),
        });
        self.apply_placement(ctx.model, object, ctx.scale, ctx.graph, node);
        write_metadata(object, node, ctx.graph);

        if let Some(placement) = object.placement() {
            ctx.resolver.record(placement, node);
            if let Some(relative_to) = ctx
                .model
                .placement(placement)
                .and_then(|p| p.relative_to())
            {
                ctx.resolver.record_relative(node, relative_to);
            }
        }

        // Install the ambient appearance before descending; it is never
        // restored, so geometry inherits the nearest preceding object's
        // material.
        let appearance = match &object.material {
            Some(material) => Appearance::from_material(material, ctx.base_context),
            None => Appearance::unlit_default(),
        };
        ctx.appearance.install(appearance);

        if let Some(representation) = object.representation() {
            ctx.current_object = Some(id);
            let group = ctx.graph.insert(NodeContent::Group);
            ctx.graph.attach(node, group);
            for item in &representation.items {
                self.router.build_shape(item, group, ctx);
            }
        }

        self.build_relation_group(node, &object.decomposed_by, ctx);
        match &object.kind {
            ObjectKind::Spatial { contains, .. } => {
                self.build_relation_group(node, contains, ctx);
            }
            ObjectKind::Element { voided_by, .. } => {
                self.build_relation_group(node, voided_by, ctx);
            }
            ObjectKind::Project { .. } | ObjectKind::Product { .. } => {}
        }

        Some(node)
    }

    /// Refresh a transform node's translation from the object's current
    /// location data. Also the build path's initial placement.
    pub fn apply_placement(
        &self,
        model: &Model,
        object: &ObjectDefinition,
        scale: f64,
        graph: &mut SceneGraph,
        node: NodeId,
    ) {
        let translation = object
            .placement()
            .and_then(|id| model.placement(id))
            .map(|placement| placement.location().coords * scale)
            .unwrap_or_else(Vector3::zeros);
        graph.set_translation(node, translation);
    }

    /// Fan one relation's children out under a fresh group wrapper.
    /// Empty relations produce no wrapper.
    fn build_relation_group(&self, parent: NodeId, children: &[ObjectId], ctx: &mut BuildContext) {
        if children.is_empty() {
            return;
        }
        let group = ctx.graph.insert(NodeContent::Group);
        ctx.graph.attach(parent, group);
        for &child in children {
            if let Some(node) = self.build_object(child, ctx) {
                ctx.graph.attach(group, node);
            }
        }
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_metadata(object: &ObjectDefinition, node: NodeId, graph: &mut SceneGraph) {
    let Some(scene_node) = graph.node_mut(node) else {
        return;
    };
    scene_node.set_meta(meta::CLASS_NAME, &object.class_name);
    scene_node.set_meta(meta::NAME, &object.name);
    scene_node.set_meta(meta::DESCRIPTION, &object.description);
    scene_node.set_meta(meta::GLOBAL_ID, &object.guid);
    scene_node.set_meta(meta::OBJECT_TYPE, &object.object_type);
    match &object.kind {
        ObjectKind::Project { phase } => scene_node.set_meta(meta::PHASE, phase),
        ObjectKind::Spatial { long_name, .. } => scene_node.set_meta(meta::LONG_NAME, long_name),
        ObjectKind::Element { tag, .. } => scene_node.set_meta(meta::TAG, tag),
        ObjectKind::Product { .. } => {}
    }
}
