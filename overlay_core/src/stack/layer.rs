// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer indices and the z-index contract.
//!
//! Every open window occupies one [`Layer`]. Layers are dense: with `n`
//! windows open, they are exactly `0..n` in open order. A window and its
//! backdrop take two consecutive z-index slots above [`BASE_Z_INDEX`], so
//! each backdrop sits directly beneath its own window and above every
//! earlier window.

use core::fmt;

/// The z-index of the backdrop of the first window minus one.
pub const BASE_Z_INDEX: i32 = 1050;

/// Stacking position of an open window (0 = bottom-most).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layer(pub u32);

impl Layer {
    /// The bottom-most layer.
    pub const BOTTOM: Self = Self(0);

    /// Returns the raw layer index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// z-index of a window on this layer: `BASE_Z_INDEX + 2 * layer`.
    #[must_use]
    pub fn z_index(self) -> i32 {
        let layer = i32::try_from(self.0).unwrap_or(i32::MAX);
        BASE_Z_INDEX.saturating_add(layer.saturating_mul(2))
    }

    /// z-index of the backdrop beneath a window on this layer:
    /// `BASE_Z_INDEX + 2 * layer - 1`.
    #[must_use]
    pub fn backdrop_z_index(self) -> i32 {
        self.z_index().saturating_sub(1)
    }

    /// Top margin of the window, in `rem`, so stacked dialogs stay visibly
    /// offset from one another.
    #[must_use]
    pub fn top_margin_rem(self) -> f64 {
        f64::from(self.0)
    }

    /// All style values a window and its backdrop derive from this layer.
    #[must_use]
    pub fn style(self) -> LayerStyle {
        LayerStyle {
            z_index: self.z_index(),
            backdrop_z_index: self.backdrop_z_index(),
            top_margin_rem: self.top_margin_rem(),
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer({})", self.0)
    }
}

/// Style values for a window and its backdrop on one [`Layer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// z-index of the window element.
    pub z_index: i32,
    /// z-index of the backdrop element.
    pub backdrop_z_index: i32,
    /// `margin-top` of the window element, in `rem`.
    pub top_margin_rem: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_layer() {
        assert_eq!(Layer::BOTTOM.z_index(), 1050);
        assert_eq!(Layer::BOTTOM.backdrop_z_index(), 1049);
        assert_eq!(Layer::BOTTOM.top_margin_rem(), 0.0);
    }

    #[test]
    fn third_layer_formula() {
        let style = Layer(3).style();
        assert_eq!(style.z_index, BASE_Z_INDEX + 6);
        assert_eq!(style.backdrop_z_index, BASE_Z_INDEX + 5);
        assert_eq!(style.z_index, 1056);
        assert_eq!(style.backdrop_z_index, 1055);
        assert_eq!(style.top_margin_rem, 3.0);
    }

    #[test]
    fn backdrop_sits_between_windows() {
        for l in 1..20 {
            let below = Layer(l - 1);
            let here = Layer(l);
            assert!(here.backdrop_z_index() > below.z_index());
            assert!(here.backdrop_z_index() < here.z_index());
        }
    }

    #[test]
    fn huge_layers_saturate() {
        assert_eq!(Layer(u32::MAX).z_index(), i32::MAX);
    }
}
