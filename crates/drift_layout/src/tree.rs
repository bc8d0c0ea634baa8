//! Layout tree management

use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;

use crate::error::LayoutError;

new_key_type! {
    pub struct LayoutNodeId;
}

/// Maps between Drift node IDs and Taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree,
    node_map: SlotMap<LayoutNodeId, NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            node_map: SlotMap::with_key(),
        }
    }

    /// Create a new layout node with the given style
    pub fn create_node(&mut self, style: Style) -> Result<LayoutNodeId, LayoutError> {
        let taffy_node = self.taffy.new_leaf(style)?;
        Ok(self.node_map.insert(taffy_node))
    }

    pub fn contains(&self, id: LayoutNodeId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Replace the style for a node. Taffy only marks this node and its
    /// ancestors dirty, so siblings keep their cached layout.
    pub fn set_style(&mut self, id: LayoutNodeId, style: Style) -> Result<(), LayoutError> {
        let taffy_node = self.taffy_node(id)?;
        self.taffy.set_style(taffy_node, style)?;
        Ok(())
    }

    pub fn style(&self, id: LayoutNodeId) -> Result<&Style, LayoutError> {
        let taffy_node = self.taffy_node(id)?;
        Ok(self.taffy.style(taffy_node)?)
    }

    /// Add a child to a parent node
    pub fn add_child(
        &mut self,
        parent: LayoutNodeId,
        child: LayoutNodeId,
    ) -> Result<(), LayoutError> {
        let parent_node = self.taffy_node(parent)?;
        let child_node = self.taffy_node(child)?;
        self.taffy.add_child(parent_node, child_node)?;
        Ok(())
    }

    pub fn child_count(&self, parent: LayoutNodeId) -> usize {
        self.node_map
            .get(parent)
            .map_or(0, |&taffy_node| self.taffy.child_count(taffy_node))
    }

    /// Compute layout for a tree rooted at the given node
    pub fn compute_layout(
        &mut self,
        root: LayoutNodeId,
        available_space: Size<AvailableSpace>,
    ) -> Result<(), LayoutError> {
        let taffy_node = self.taffy_node(root)?;
        self.taffy.compute_layout(taffy_node, available_space)?;
        Ok(())
    }

    /// Get the computed frame of a node, relative to its parent
    pub fn frame(&self, id: LayoutNodeId) -> Option<drift_core::Rect> {
        self.node_map
            .get(id)
            .and_then(|&taffy_node| self.taffy.layout(taffy_node).ok())
            .map(|layout| {
                drift_core::Rect::new(
                    layout.location.x,
                    layout.location.y,
                    layout.size.width,
                    layout.size.height,
                )
            })
    }

    fn taffy_node(&self, id: LayoutNodeId) -> Result<NodeId, LayoutError> {
        self.node_map
            .get(id)
            .copied()
            .ok_or(LayoutError::UnknownNode(id))
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}
