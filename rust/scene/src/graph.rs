// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene graph arena.
//!
//! Nodes live in a slotmap and are referenced by stable [`NodeId`]
//! handles, so detaching a node during the placement fix-up never frees
//! it; the handle itself is the keep-alive guard.

use std::sync::Arc;

use nalgebra::Vector3;
use slotmap::SlotMap;

use crate::appearance::Appearance;
use crate::geometry::Geometry;

slotmap::new_key_type! {
    /// Stable handle to a [`SceneNode`] inside a [`SceneGraph`].
    pub struct NodeId;
}

/// Metadata keys attached to scene nodes. Values are only written when
/// the source attribute is non-empty.
pub mod meta {
    pub const CLASS_NAME: &str = "ClassName";
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const GLOBAL_ID: &str = "GlobalId";
    pub const OBJECT_TYPE: &str = "ObjectType";
    pub const TAG: &str = "Tag";
    pub const LONG_NAME: &str = "LongName";
    pub const PHASE: &str = "Phase";
    /// Root-only: schema identifier of the source model.
    pub const SCHEMA_IDENTIFIER: &str = "SchemaIdentifier";
    /// Root-only: originating system of the source model.
    pub const ORIGINATING_SYSTEM: &str = "OriginatingSystem";
}

/// Content variant of a scene node.
#[derive(Debug, Clone)]
pub enum NodeContent {
    /// The stable container owned by the mapping facade.
    Root,
    /// One per model object; carries the placement-derived translation.
    Transform { translation: Vector3<f64> },
    /// Purely structural wrapper for representation lists and relation
    /// fan-out; carries no transform.
    Group,
    /// Leaf pairing geometry with the appearance active at build time.
    Shape {
        geometry: Option<Geometry>,
        appearance: Arc<Appearance>,
    },
}

/// One node of the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    metadata: Vec<(&'static str, String)>,
    pub content: NodeContent,
}

impl SceneNode {
    fn new(content: NodeContent) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            metadata: Vec::new(),
            content,
        }
    }

    /// Structural parent, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Structural children in build order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// All metadata entries in insertion order.
    pub fn metadata(&self) -> &[(&'static str, String)] {
        &self.metadata
    }

    /// Metadata value for a key, if present.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Write a metadata entry, replacing an existing key. An empty
    /// value removes the key instead, so refreshed nodes never keep a
    /// stale entry for an attribute that became empty.
    pub fn set_meta(&mut self, key: &'static str, value: &str) {
        if value.is_empty() {
            self.metadata.retain(|(k, _)| *k != key);
            return;
        }
        if let Some(entry) = self.metadata.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value.to_string();
        } else {
            self.metadata.push((key, value.to_string()));
        }
    }

    /// Whether this node is a transform node.
    pub fn is_transform(&self) -> bool {
        matches!(self.content, NodeContent::Transform { .. })
    }

    /// Translation of a transform node.
    pub fn translation(&self) -> Option<Vector3<f64>> {
        match self.content {
            NodeContent::Transform { translation } => Some(translation),
            _ => None,
        }
    }
}

/// Arena of scene nodes with parent/child edges.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Insert a detached node and return its handle.
    pub fn insert(&mut self, content: NodeContent) -> NodeId {
        self.nodes.insert(SceneNode::new(content))
    }

    /// Look up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// Mutable node access.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` under `parent`, appending to the child list.
    /// Detaches from any previous parent first, keeping the
    /// single-parent invariant; both sides stay in sync.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Detach `child` from its parent, leaving it alive in the arena.
    pub fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.nodes.get(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|&c| c != child);
        }
        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = None;
        }
    }

    /// Remove a node and its whole subtree from the arena.
    pub fn remove_subtree(&mut self, id: NodeId) {
        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
        }
    }

    /// Detach and return the children of `parent` in order.
    pub fn take_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let children = match self.nodes.get_mut(parent) {
            Some(node) => std::mem::take(&mut node.children),
            None => return Vec::new(),
        };
        for &child in &children {
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = None;
            }
        }
        children
    }

    /// Nearest transform ancestor, walking from the node's *direct*
    /// structural parent upward through purely structural wrappers.
    pub fn nearest_transform_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.get(id)?.parent;
        while let Some(ancestor) = current {
            let node = self.nodes.get(ancestor)?;
            if node.is_transform() {
                return Some(ancestor);
            }
            current = node.parent;
        }
        None
    }

    /// Overwrite the translation of a transform node. Used by the
    /// update path to refresh a node in place from new location data.
    pub fn set_translation(&mut self, id: NodeId, translation: Vector3<f64>) {
        if let Some(node) = self.nodes.get_mut(id) {
            if let NodeContent::Transform {
                translation: ref mut t,
            } = node.content
            {
                *t = translation;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_keeps_single_parent() {
        let mut graph = SceneGraph::new();
        let a = graph.insert(NodeContent::Group);
        let b = graph.insert(NodeContent::Group);
        let child = graph.insert(NodeContent::Group);

        graph.attach(a, child);
        graph.attach(b, child);

        assert_eq!(graph.node(child).unwrap().parent(), Some(b));
        assert!(graph.node(a).unwrap().children().is_empty());
        assert_eq!(graph.node(b).unwrap().children(), &[child]);
    }

    #[test]
    fn detach_keeps_node_alive() {
        let mut graph = SceneGraph::new();
        let parent = graph.insert(NodeContent::Group);
        let child = graph.insert(NodeContent::Transform {
            translation: Vector3::new(1.0, 2.0, 3.0),
        });

        graph.attach(parent, child);
        graph.detach(child);

        let node = graph.node(child).expect("detached node must stay alive");
        assert_eq!(node.parent(), None);
        assert_eq!(node.translation(), Some(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn nearest_transform_ancestor_skips_groups() {
        let mut graph = SceneGraph::new();
        let transform = graph.insert(NodeContent::Transform {
            translation: Vector3::zeros(),
        });
        let wrapper = graph.insert(NodeContent::Group);
        let inner = graph.insert(NodeContent::Group);
        let leaf = graph.insert(NodeContent::Group);

        graph.attach(transform, wrapper);
        graph.attach(wrapper, inner);
        graph.attach(inner, leaf);

        assert_eq!(graph.nearest_transform_ancestor(leaf), Some(transform));
        assert_eq!(graph.nearest_transform_ancestor(transform), None);
    }

    #[test]
    fn empty_metadata_values_are_omitted() {
        let mut graph = SceneGraph::new();
        let id = graph.insert(NodeContent::Group);
        let node = graph.node_mut(id).unwrap();
        node.set_meta(meta::NAME, "Wall-01");
        node.set_meta(meta::DESCRIPTION, "");

        assert_eq!(node.meta(meta::NAME), Some("Wall-01"));
        assert_eq!(node.meta(meta::DESCRIPTION), None);
        assert_eq!(node.metadata().len(), 1);
    }

    #[test]
    fn empty_metadata_value_removes_existing_key() {
        let mut graph = SceneGraph::new();
        let id = graph.insert(NodeContent::Group);
        let node = graph.node_mut(id).unwrap();
        node.set_meta(meta::NAME, "Wall-01");
        node.set_meta(meta::NAME, "");

        assert_eq!(node.meta(meta::NAME), None);
        assert!(node.metadata().is_empty());
    }

    #[test]
    fn remove_subtree_frees_descendants() {
        let mut graph = SceneGraph::new();
        let root = graph.insert(NodeContent::Root);
        let group = graph.insert(NodeContent::Group);
        let leaf = graph.insert(NodeContent::Group);
        graph.attach(root, group);
        graph.attach(group, leaf);

        graph.remove_subtree(group);

        assert_eq!(graph.len(), 1);
        assert!(graph.node(root).unwrap().children().is_empty());
        assert!(graph.node(leaf).is_none());
    }
}
