// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window and content identity types.

use core::fmt;

/// A handle to a window in an [`OverlayStack`](super::OverlayStack).
///
/// Contains both a slot index and a generation counter so that a handle to a
/// closed window stays closed even after its slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId {
    /// Slot index into the stack's arrays.
    pub(crate) idx: u32,
    /// Generation counter; must match the stack's generation for this slot.
    pub(crate) generation: u32,
}

impl WindowId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowId({}@gen{})", self.idx, self.generation)
    }
}

/// An opaque reference to the body of a window.
///
/// Content (markup, a component, a template) is created and rendered by the
/// container; the stack only carries the handle through.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub u32);

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({})", self.0)
    }
}
