// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change records drained from the stack.

use alloc::vec::Vec;

use super::id::{ContentId, WindowId};
use super::layer::Layer;
use super::window::WindowOutcome;

/// A window finished opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowOpened {
    /// The new window.
    pub window: WindowId,
    /// Its content handle.
    pub content: ContentId,
    /// The layer it was assigned.
    pub layer: Layer,
}

/// A window left the `Open` state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowDismissed {
    /// The window.
    pub window: WindowId,
    /// How it finished.
    pub outcome: WindowOutcome,
}

/// A window moved to a different layer after another one closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerAssigned {
    /// The window.
    pub window: WindowId,
    /// Its layer before renumbering.
    pub previous: Layer,
    /// Its layer after renumbering.
    pub layer: Layer,
}

/// A window reached `Closed` and left the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowClosed {
    /// The window.
    pub window: WindowId,
    /// Number of windows still open.
    pub remaining: u32,
}

/// One entry of a [`StackChanges`] record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackEvent {
    /// See [`WindowOpened`].
    Opened(WindowOpened),
    /// See [`WindowDismissed`].
    Dismissed(WindowDismissed),
    /// See [`LayerAssigned`].
    LayerAssigned(LayerAssigned),
    /// See [`WindowClosed`].
    Closed(WindowClosed),
}

/// Everything that happened to the stack since the last
/// [`take_changes`](super::OverlayStack::take_changes), in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackChanges {
    /// Events, oldest first.
    pub events: Vec<StackEvent>,
}

impl StackChanges {
    /// Whether nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Windows that finished opening.
    pub fn opened(&self) -> impl Iterator<Item = &WindowOpened> + '_ {
        self.events.iter().filter_map(|e| match e {
            StackEvent::Opened(o) => Some(o),
            _ => None,
        })
    }

    /// Windows that were dismissed or closed by the user or the application.
    pub fn dismissals(&self) -> impl Iterator<Item = &WindowDismissed> + '_ {
        self.events.iter().filter_map(|e| match e {
            StackEvent::Dismissed(d) => Some(d),
            _ => None,
        })
    }

    /// Windows whose layer changed.
    pub fn relayered(&self) -> impl Iterator<Item = &LayerAssigned> + '_ {
        self.events.iter().filter_map(|e| match e {
            StackEvent::LayerAssigned(l) => Some(l),
            _ => None,
        })
    }

    /// Windows that left the stack.
    pub fn closed(&self) -> impl Iterator<Item = &WindowClosed> + '_ {
        self.events.iter().filter_map(|e| match e {
            StackEvent::Closed(c) => Some(c),
            _ => None,
        })
    }

    pub(crate) fn push(&mut self, event: StackEvent) {
        self.events.push(event);
    }
}
