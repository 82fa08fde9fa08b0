// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered iteration over open windows.

use super::id::WindowId;
use super::layer::Layer;

/// An iterator over open windows, bottom-most first.
///
/// Created by [`OverlayStack::windows`](super::OverlayStack::windows) and
/// handed to [`Container::window_closed`](crate::backend::Container::window_closed).
/// It is a read-only snapshot; the stack cannot be mutated while it lives.
#[derive(Clone, Debug)]
pub struct Layers<'a> {
    order: &'a [u32],
    generation: &'a [u32],
    layer: &'a [u32],
    pos: usize,
}

impl<'a> Layers<'a> {
    pub(crate) fn new(order: &'a [u32], generation: &'a [u32], layer: &'a [u32]) -> Self {
        Self {
            order,
            generation,
            layer,
            pos: 0,
        }
    }
}

impl Iterator for Layers<'_> {
    type Item = (WindowId, Layer);

    fn next(&mut self) -> Option<(WindowId, Layer)> {
        let &idx = self.order.get(self.pos)?;
        self.pos += 1;
        Some((
            WindowId {
                idx,
                generation: self.generation[idx as usize],
            },
            Layer(self.layer[idx as usize]),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.order.len() - self.pos;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Layers<'_> {}
