// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frozen geometry snapshots.
//!
//! [`DocumentSnapshot`] stores the measured geometry of a handful of elements
//! and implements [`Measure`] over it. Backends that measure once per
//! positioning request can copy live values into a snapshot; tests build
//! snapshots by hand.

use alloc::vec::Vec;

use kurbo::{Insets, Rect, Size, Vec2};

use crate::measure::{Measure, NodeId, PositionScheme};

/// Measured geometry of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeGeometry {
    /// Border box in viewport coordinates.
    pub bounding_rect: Rect,
    /// Layout size (`offsetWidth`, `offsetHeight`).
    pub offset_size: Size,
    /// Computed `position` scheme.
    pub position: PositionScheme,
    /// Computed margins.
    pub margin: Insets,
    /// Left and top border widths.
    pub client_offset: Vec2,
    /// Layout offset parent.
    pub offset_parent: Option<NodeId>,
}

impl NodeGeometry {
    /// Creates a static, margin-less element whose layout size matches `rect`.
    #[must_use]
    pub fn new(bounding_rect: Rect) -> Self {
        Self {
            bounding_rect,
            offset_size: bounding_rect.size(),
            position: PositionScheme::Static,
            margin: Insets::ZERO,
            client_offset: Vec2::ZERO,
            offset_parent: None,
        }
    }

    /// Sets the layout size.
    #[must_use]
    pub fn with_offset_size(mut self, size: Size) -> Self {
        self.offset_size = size;
        self
    }

    /// Sets the `position` scheme.
    #[must_use]
    pub fn with_position(mut self, position: PositionScheme) -> Self {
        self.position = position;
        self
    }

    /// Sets the margins.
    #[must_use]
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the border offset.
    #[must_use]
    pub fn with_client_offset(mut self, offset: Vec2) -> Self {
        self.client_offset = offset;
        self
    }

    /// Sets the offset parent.
    #[must_use]
    pub fn with_offset_parent(mut self, parent: NodeId) -> Self {
        self.offset_parent = Some(parent);
        self
    }
}

/// An in-memory [`Measure`] implementation.
///
/// Node `0` is always the document root; it covers the viewport and has no
/// parent. Nodes that were never inserted measure as detached elements.
#[derive(Clone, Debug)]
pub struct DocumentSnapshot {
    viewport: Size,
    scroll: Vec2,
    nodes: Vec<NodeGeometry>,
}

impl DocumentSnapshot {
    /// Creates a snapshot containing only the root element.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            scroll: Vec2::ZERO,
            nodes: alloc::vec![NodeGeometry::new(viewport.to_rect())],
        }
    }

    /// Sets the scroll offset.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Sets the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Adds an element and returns its handle.
    pub fn insert(&mut self, geometry: NodeGeometry) -> NodeId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "snapshots hold far fewer than u32::MAX nodes"
        )]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(geometry);
        id
    }

    /// Returns the geometry of an element, if it exists.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeGeometry> {
        self.nodes.get(id.0 as usize)
    }

    /// Returns mutable geometry of an element, if it exists.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeGeometry> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of elements, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Measure for DocumentSnapshot {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.node(node).map_or(Rect::ZERO, |g| g.bounding_rect)
    }

    fn offset_size(&self, node: NodeId) -> Size {
        self.node(node).map_or(Size::ZERO, |g| g.offset_size)
    }

    fn position_scheme(&self, node: NodeId) -> PositionScheme {
        self.node(node).map_or(PositionScheme::Static, |g| g.position)
    }

    fn margin(&self, node: NodeId) -> Insets {
        self.node(node).map_or(Insets::ZERO, |g| g.margin)
    }

    fn client_offset(&self, node: NodeId) -> Vec2 {
        self.node(node).map_or(Vec2::ZERO, |g| g.client_offset)
    }

    fn offset_parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|g| g.offset_parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_covers_viewport() {
        let d = DocumentSnapshot::new(Size::new(1024.0, 768.0));
        assert_eq!(d.root(), NodeId(0));
        assert_eq!(d.bounding_rect(d.root()), Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_eq!(d.offset_parent(d.root()), None);
        assert_eq!(d.len(), 1);
        assert!(!d.is_empty());
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut d = DocumentSnapshot::new(Size::new(100.0, 100.0));
        let a = d.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 1.0, 1.0)));
        let b = d.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 2.0, 2.0)));
        assert_eq!(a, NodeId(1));
        assert_eq!(b, NodeId(2));
        assert_eq!(d.offset_size(b), Size::new(2.0, 2.0));
    }

    #[test]
    fn unknown_nodes_measure_as_detached() {
        let d = DocumentSnapshot::new(Size::new(100.0, 100.0));
        let ghost = NodeId(42);
        assert_eq!(d.bounding_rect(ghost), Rect::ZERO);
        assert_eq!(d.offset_size(ghost), Size::ZERO);
        assert_eq!(d.position_scheme(ghost), PositionScheme::Static);
        assert_eq!(d.margin(ghost), Insets::ZERO);
        assert_eq!(d.offset_parent(ghost), None);
    }

    #[test]
    fn builders_set_fields() {
        let g = NodeGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_position(PositionScheme::Absolute)
            .with_margin(Insets::uniform(4.0))
            .with_client_offset(Vec2::new(1.0, 2.0))
            .with_offset_parent(NodeId(3))
            .with_offset_size(Size::new(12.0, 12.0));
        assert_eq!(g.position, PositionScheme::Absolute);
        assert_eq!(g.margin, Insets::uniform(4.0));
        assert_eq!(g.client_offset, Vec2::new(1.0, 2.0));
        assert_eq!(g.offset_parent, Some(NodeId(3)));
        assert_eq!(g.offset_size, Size::new(12.0, 12.0));
    }
}
