// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element boxes.
//!
//! [`ElementBox`] mirrors the shape of a DOM client rect: the four edges plus
//! an explicit width and height. The size is stored separately from the edges
//! because measurement may fall back to layout sizes (`offsetWidth`) when the
//! bounding rect of an element is empty.

use kurbo::{Point, Rect, Size, Vec2};

/// The measured box of a rendered element.
///
/// Boxes are ephemeral: they are computed from live geometry for a single
/// positioning request and then discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width of the element.
    pub width: f64,
    /// Height of the element.
    pub height: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl ElementBox {
    /// The degenerate box of an element that is not rendered.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        width: 0.0,
        height: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Creates a box from its edges, deriving width and height.
    #[inline]
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            left: rect.x0,
            width: rect.width(),
            height: rect.height(),
            right: rect.x1,
            bottom: rect.y1,
        }
    }

    /// Creates a box from its top-left corner and size.
    #[inline]
    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            top: origin.y,
            left: origin.x,
            width: size.width,
            height: size.height,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    /// Returns the edges as a [`Rect`].
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }

    /// Returns the stored width and height.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the top-left corner.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the center point, using the stored size.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Moves every edge by `delta`, keeping the size.
    #[inline]
    #[must_use]
    pub fn translate(self, delta: Vec2) -> Self {
        Self {
            top: self.top + delta.y,
            left: self.left + delta.x,
            width: self.width,
            height: self.height,
            right: self.right + delta.x,
            bottom: self.bottom + delta.y,
        }
    }

    /// Rounds every field to the nearest integer.
    ///
    /// Fractional pixel offsets make some renderers jitter, so callers that
    /// write the result straight into styles usually want this.
    #[must_use]
    pub fn round(self) -> Self {
        let edges = self.rect().round();
        let size = self.size().round();
        Self {
            top: edges.y0,
            left: edges.x0,
            width: size.width,
            height: size.height,
            right: edges.x1,
            bottom: edges.y1,
        }
    }

    /// Whether the box has no area at all (not rendered or detached).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Is every field [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

impl From<Rect> for ElementBox {
    #[inline]
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
