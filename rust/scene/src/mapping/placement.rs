// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement resolver - reconciles scene-graph nesting with
//! placement-relative semantics.
//!
//! The model's placement graph is independent of its containment graph,
//! and the recursive build only has the containment structure in hand.
//! During the build the resolver records which transform node each
//! placement produced and which placement each child wants to be nested
//! under; once all placements are known, `fix_up` rewrites the
//! parent/child edges.

use rustc_hash::FxHashMap;

use ifc_scenemap_model::PlacementId;

use crate::graph::{NodeId, SceneGraph};

/// Per-build placement bookkeeping. Created at the start of a build and
/// consumed by [`PlacementResolver::fix_up`]; never shared across builds.
#[derive(Debug, Default)]
pub struct PlacementResolver {
    /// Placement to the transform node created for the object owning it.
    /// At most one node per placement within a single build.
    placement_to_node: FxHashMap<PlacementId, NodeId>,
    /// Children whose placement declares a relative-to target, paired
    /// with that target placement.
    pending: Vec<(NodeId, PlacementId)>,
}

impl PlacementResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a placement with the transform node that owns it.
    /// Called once per placed object during the main build.
    pub fn record(&mut self, placement: PlacementId, node: NodeId) {
        self.placement_to_node.insert(placement, node);
    }

    /// Remember that `node` should ultimately be nested under whatever
    /// transform node `relative_to` resolves to.
    pub fn record_relative(&mut self, node: NodeId, relative_to: PlacementId) {
        self.pending.push((node, relative_to));
    }

    /// Rewrite parent/child edges so each recorded child hangs under
    /// the transform node of its target placement. Run exactly once
    /// after the full recursive build; consumes the tables.
    ///
    /// Skipped (placement left as built): target placement never
    /// recorded, or the child has no transform ancestor. Reparenting
    /// moves the node's whole subtree and metadata unchanged; the arena
    /// handle keeps the child alive across the detach/reattach.
    pub fn fix_up(self, graph: &mut SceneGraph) {
        for (child, target) in self.pending {
            let Some(&new_parent) = self.placement_to_node.get(&target) else {
                continue;
            };
            let Some(old_parent) = graph.nearest_transform_ancestor(child) else {
                continue;
            };
            if old_parent == new_parent {
                continue;
            }
            graph.detach(child);
            graph.attach(new_parent, child);
        }
    }
}
