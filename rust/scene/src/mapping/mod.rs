// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mapping facade - orchestrates full builds and owns the produced root.
//!
//! Not reentrant: concurrent `load`/`update` on one instance, or model
//! mutation during a build, must be prevented by the caller.

mod placement;


pub use placement::PlacementResolver;

use rustc_hash::FxHashMap;
use tracing::debug;

use ifc_scenemap_model::{Model, ObjectId};

use crate::builders::BuildContext;
use crate::error::{Error, Result};
use crate::graph::{meta, NodeContent, NodeId, SceneGraph};
use crate::objects::ObjectBuilder;

/// Owns the scene graph produced from a model and keeps the reverse
/// lookup from shape nodes to their originating objects.
///
/// `load` runs one full build and stores the result; `update` rebuilds
/// into a temporary root and swaps only the children into the persisted
/// root, so external holders of the root handle never see it change.
pub struct SceneMapping {
    builder: ObjectBuilder,
    graph: SceneGraph,
    root: Option<NodeId>,
    shape_index: FxHashMap<NodeId, ObjectId>,
    base_context: String,
}

impl SceneMapping {
    pub fn new() -> Self {
        Self {
            builder: ObjectBuilder::new(),
            graph: SceneGraph::new(),
            root: None,
            shape_index: FxHashMap::default(),
            base_context: String::new(),
        }
    }

    /// Run one full build, discarding any previous result, and return
    /// the new root. All builder-level problems degrade to warnings, so
    /// this always produces a (possibly partial) scene graph.
    pub fn load(&mut self, model: &Model, base_context: &str) -> NodeId {
        self.base_context = base_context.to_string();
        if let Some(old_root) = self.root.take() {
            self.graph.remove_subtree(old_root);
        }
        self.shape_index.clear();

        let (root, shape_index) = self.build(model);
        self.root = Some(root);
        self.shape_index = shape_index;
        debug!(nodes = self.graph.len(), "load complete");
        root
    }

    /// Rebuild from the model and swap the result's children into the
    /// persisted root, preserving its identity. The temporary root and
    /// its mapping tables are discarded. Requires a prior [`load`].
    ///
    /// All descendants are new nodes even where content is unchanged;
    /// the observable tree shape equals a fresh `load` of the same
    /// model.
    ///
    /// [`load`]: SceneMapping::load
    pub fn update(&mut self, model: &Model) -> Result<NodeId> {
        let root = self.root.ok_or(Error::NotLoaded)?;

        let (temp_root, shape_index) = self.build(model);

        for child in self.graph.take_children(root) {
            self.graph.remove_subtree(child);
        }
        for child in self.graph.take_children(temp_root) {
            self.graph.attach(root, child);
        }
        self.graph.remove_subtree(temp_root);
        Self::write_root_metadata(&mut self.graph, root, model);

        self.shape_index = shape_index;
        debug!(nodes = self.graph.len(), "update complete");
        Ok(root)
    }

    /// Reverse lookup from a shape node to the model object whose
    /// representation produced it. `None` for unknown or non-shape
    /// nodes.
    pub fn node_to_product(&self, node: NodeId) -> Option<ObjectId> {
        self.shape_index.get(&node).copied()
    }

    /// The produced scene graph.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The persisted root node, present after a successful load.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Base context used to resolve relative resource references.
    pub fn base_context(&self) -> &str {
        &self.base_context
    }

    /// One full build pass: recursive object build, then the placement
    /// fix-up over everything it produced. Returns the build's root and
    /// the reverse shape index; the placement tables die here.
    fn build(&mut self, model: &Model) -> (NodeId, FxHashMap<NodeId, ObjectId>) {
        let mut ctx = BuildContext::new(model, &mut self.graph, &self.base_context);
        let build_root = ctx.graph.insert(NodeContent::Root);

        if let Some(project) = model.root() {
            if let Some(node) = self.builder.build_object(project, &mut ctx) {
                ctx.graph.attach(build_root, node);
            }
        }

        let BuildContext {
            resolver,
            shape_index,
            ..
        } = ctx;
        resolver.fix_up(&mut self.graph);
        Self::write_root_metadata(&mut self.graph, build_root, model);

        (build_root, shape_index)
    }

    fn write_root_metadata(graph: &mut SceneGraph, root: NodeId, model: &Model) {
        if let Some(node) = graph.node_mut(root) {
            node.set_meta(meta::SCHEMA_IDENTIFIER, &model.schema_identifier);
            node.set_meta(meta::ORIGINATING_SYSTEM, &model.originating_system);
        }
    }
}

impl Default for SceneMapping {
    fn default() -> Self {
        Self::new()
    }
}
