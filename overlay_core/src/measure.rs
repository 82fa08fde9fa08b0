// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement of laid-out elements.
//!
//! The positioning engine never reads a DOM directly. Instead, backends
//! implement [`Measure`], a read-only view of the current layout, and the
//! engine derives [`ElementBox`]es from it with two primitives:
//!
//! - [`offset`]: the element's box in document coordinates, including the
//!   scroll offset.
//! - [`position`]: the element's box relative to its nearest positioned
//!   ancestor (the containing block an absolutely positioned sibling would
//!   use).
//!
//! Both take a `round` flag. Rounding is off for precise arithmetic and on
//! when the result is written back into styles.

use core::fmt;

use kurbo::{Insets, Rect, Size, Vec2};

use crate::geometry::ElementBox;

/// An opaque reference to an element known to a [`Measure`] implementation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// The CSS `position` scheme of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionScheme {
    /// `position: static` (the initial value).
    #[default]
    Static,
    /// `position: relative`.
    Relative,
    /// `position: absolute`.
    Absolute,
    /// `position: fixed`.
    Fixed,
    /// `position: sticky`.
    Sticky,
}

impl PositionScheme {
    /// Parses a computed `position` value.
    ///
    /// Empty or unrecognized values map to [`Static`](Self::Static), which is
    /// what browsers report for elements without a computed style.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "relative" => Self::Relative,
            "absolute" => Self::Absolute,
            "fixed" => Self::Fixed,
            "sticky" => Self::Sticky,
            _ => Self::Static,
        }
    }

    /// Whether elements with this scheme are skipped when looking for a
    /// containing block.
    #[inline]
    #[must_use]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

/// Read-only view of a laid-out document.
///
/// All rects are in viewport (client) coordinates, matching
/// `getBoundingClientRect()`. Implementations must return degenerate values
/// (zero rects and sizes, no parent) for elements that are detached or not
/// rendered rather than failing.
pub trait Measure {
    /// The document root element (`<html>`).
    fn root(&self) -> NodeId;

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// How far the document is scrolled (`pageXOffset`, `pageYOffset`).
    fn scroll_offset(&self) -> Vec2;

    /// The element's border box in viewport coordinates.
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// The element's layout size (`offsetWidth`, `offsetHeight`).
    fn offset_size(&self, node: NodeId) -> Size;

    /// The element's computed `position` scheme.
    fn position_scheme(&self, node: NodeId) -> PositionScheme;

    /// The element's computed margins.
    fn margin(&self, node: NodeId) -> Insets;

    /// Width of the element's left and top borders (`clientLeft`,
    /// `clientTop`).
    fn client_offset(&self, node: NodeId) -> Vec2;

    /// The element's layout offset parent, if any.
    fn offset_parent(&self, node: NodeId) -> Option<NodeId>;
}

/// Returns the size of `node`, preferring the bounding rect and falling back
/// to the layout size when the rect is empty on an axis.
#[must_use]
pub fn measured_size<M: Measure + ?Sized>(doc: &M, node: NodeId) -> Size {
    let rect = doc.bounding_rect(node);
    let fallback = doc.offset_size(node);
    Size::new(
        if rect.width() != 0.0 {
            rect.width()
        } else {
            fallback.width
        },
        if rect.height() != 0.0 {
            rect.height()
        } else {
            fallback.height
        },
    )
}

/// Returns the box of `node` in document coordinates.
///
/// This is the viewport rect shifted by the current scroll offset, minus the
/// root element's border.
#[must_use]
pub fn offset<M: Measure + ?Sized>(doc: &M, node: NodeId, round: bool) -> ElementBox {
    let rect = doc.bounding_rect(node);
    let size = measured_size(doc, node);
    let shift = doc.scroll_offset() - doc.client_offset(doc.root());

    let b = ElementBox {
        top: rect.y0 + shift.y,
        left: rect.x0 + shift.x,
        width: size.width,
        height: size.height,
        right: rect.x1 + shift.x,
        bottom: rect.y1 + shift.y,
    };
    if round { b.round() } else { b }
}

/// Returns the box of `node` relative to its nearest positioned ancestor.
///
/// Fixed elements are already positioned against the viewport, so their
/// bounding rect is returned as-is.
#[must_use]
pub fn position<M: Measure + ?Sized>(doc: &M, node: NodeId, round: bool) -> ElementBox {
    let b = if doc.position_scheme(node) == PositionScheme::Fixed {
        let rect = doc.bounding_rect(node);
        let size = measured_size(doc, node);
        ElementBox {
            width: size.width,
            height: size.height,
            ..ElementBox::from_rect(rect)
        }
    } else {
        let ancestor = positioned_ancestor(doc, node);
        let mut origin = if ancestor == doc.root() {
            Vec2::ZERO
        } else {
            offset(doc, ancestor, false).origin().to_vec2()
        };
        origin += doc.client_offset(ancestor);
        offset(doc, node, false).translate(-origin)
    };
    if round { b.round() } else { b }
}

/// Upper bound on offset-parent hops before a chain is treated as cyclic.
pub const MAX_ANCESTOR_DEPTH: usize = 1024;

/// Walks the offset-parent chain of `node` to the first non-static ancestor,
/// falling back to the document root.
///
/// Chains longer than [`MAX_ANCESTOR_DEPTH`] (only possible when a
/// [`Measure`] reports a cycle) also resolve to the root.
#[must_use]
pub fn positioned_ancestor<M: Measure + ?Sized>(doc: &M, node: NodeId) -> NodeId {
    let root = doc.root();
    let mut current = doc.offset_parent(node).unwrap_or(root);
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if current == root || !doc.position_scheme(current).is_static() {
            return current;
        }
        match doc.offset_parent(current) {
            Some(next) => current = next,
            None => return root,
        }
    }
    root
}
