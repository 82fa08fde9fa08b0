// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays window storage with allocation, ordering and lifecycle
//! management.

use alloc::vec::Vec;

use crate::backend::{Container, FocusTarget};
use crate::error::NoContainerError;
use crate::measure::NodeId;

use super::changes::{
    LayerAssigned, StackChanges, StackEvent, WindowClosed, WindowDismissed, WindowOpened,
};
use super::id::{ContentId, WindowId};
use super::layer::Layer;
use super::traverse::Layers;
use super::window::{
    Backdrop, ClickTarget, DismissReason, OverlayOptions, WindowOutcome, WindowState,
};

/// The ordered registry of open overlay windows.
///
/// Windows are addressed by [`WindowId`] handles. Internally each window
/// occupies a slot in parallel arrays; closed slots are recycled via a free
/// list and generation counters keep handles to closed windows inert.
///
/// The stack is the only writer of layer indices. Layers are renumbered
/// eagerly on every close so that, at every point a caller can observe,
/// the open windows hold layers `0..len()` in open order.
#[derive(Debug)]
pub struct OverlayStack<C> {
    container: Option<C>,

    // -- Per-window properties --
    state: Vec<WindowState>,
    content: Vec<ContentId>,
    options: Vec<OverlayOptions>,
    outcome: Vec<Option<WindowOutcome>>,
    restore_focus: Vec<Option<NodeId>>,
    layer: Vec<u32>,

    // -- Allocation --
    generation: Vec<u32>,
    free_list: Vec<u32>,
    len: u32,

    // -- Ordering (slot indices, bottom-most first) --
    order: Vec<u32>,

    // -- Change tracking --
    changes: StackChanges,
}

impl<C> Default for OverlayStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OverlayStack<C> {
    /// Creates an empty stack with no container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: None,
            state: Vec::new(),
            content: Vec::new(),
            options: Vec::new(),
            outcome: Vec::new(),
            restore_focus: Vec::new(),
            layer: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            order: Vec::new(),
            changes: StackChanges::default(),
        }
    }

    // -- Container binding --

    /// Binds the container that instantiates windows, returning the one it
    /// replaces.
    pub fn register_container(&mut self, container: C) -> Option<C> {
        self.container.replace(container)
    }

    /// Returns the bound container.
    #[must_use]
    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    /// Returns the bound container mutably.
    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    // -- Snapshot reads --

    /// Number of windows that have not reached `Closed`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no window is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The top-most window.
    #[must_use]
    pub fn top(&self) -> Option<WindowId> {
        self.order.last().map(|&idx| self.id_at(idx))
    }

    /// Open windows with their layers, bottom-most first.
    #[must_use]
    pub fn windows(&self) -> Layers<'_> {
        Layers::new(&self.order, &self.generation, &self.layer)
    }

    /// Whether the handle refers to a window that has not reached `Closed`.
    #[must_use]
    pub fn is_alive(&self, id: WindowId) -> bool {
        self.slot(id).is_some()
    }

    /// The lifecycle state of a window. Handles to closed windows report
    /// [`WindowState::Closed`].
    #[must_use]
    pub fn state(&self, id: WindowId) -> WindowState {
        self.slot(id).map_or(WindowState::Closed, |s| self.state[s])
    }

    /// The layer of a live window.
    #[must_use]
    pub fn layer(&self, id: WindowId) -> Option<Layer> {
        self.slot(id).map(|s| Layer(self.layer[s]))
    }

    /// How a window finished, once it was dismissed or closed.
    #[must_use]
    pub fn outcome(&self, id: WindowId) -> Option<WindowOutcome> {
        self.slot(id).and_then(|s| self.outcome[s])
    }

    /// The options a live window was opened with.
    #[must_use]
    pub fn options(&self, id: WindowId) -> Option<OverlayOptions> {
        self.slot(id).map(|s| self.options[s])
    }

    /// The content handle of a live window.
    #[must_use]
    pub fn content(&self, id: WindowId) -> Option<ContentId> {
        self.slot(id).map(|s| self.content[s])
    }

    /// Drains the change record accumulated since the last call.
    pub fn take_changes(&mut self) -> StackChanges {
        core::mem::take(&mut self.changes)
    }

    // -- Dismissal (Open → Closing) --

    /// Dismisses an open window with `reason`.
    ///
    /// Returns `false` (and does nothing) if the window is not `Open`.
    pub fn dismiss(&mut self, id: WindowId, reason: DismissReason) -> bool {
        self.finish(id, WindowOutcome::Dismissed(reason))
    }

    /// Completes an open window normally.
    ///
    /// Returns `false` (and does nothing) if the window is not `Open`.
    pub fn close(&mut self, id: WindowId) -> bool {
        self.finish(id, WindowOutcome::Closed)
    }

    /// Routes a pointer click on a window's element.
    ///
    /// Only clicks outside the dialog content, on a window whose backdrop is
    /// [`Backdrop::Dismissible`], dismiss it.
    pub fn handle_click(&mut self, id: WindowId, target: ClickTarget) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        if target != ClickTarget::Backdrop || self.options[slot].backdrop != Backdrop::Dismissible
        {
            return false;
        }
        self.dismiss(id, DismissReason::BackdropClick)
    }

    /// Routes an escape key press on a window's element.
    ///
    /// `already_handled` is set when a nested handler consumed the event
    /// (`defaultPrevented`); such presses never dismiss.
    pub fn handle_escape(&mut self, id: WindowId, already_handled: bool) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        if !self.options[slot].keyboard || already_handled {
            return false;
        }
        self.dismiss(id, DismissReason::Esc)
    }

    // -- Internal helpers --

    fn finish(&mut self, id: WindowId, outcome: WindowOutcome) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        if self.state[slot] != WindowState::Open {
            return false;
        }
        self.state[slot] = WindowState::Closing;
        self.outcome[slot] = Some(outcome);
        self.changes
            .push(StackEvent::Dismissed(WindowDismissed { window: id, outcome }));
        true
    }

    /// Returns the slot of a live handle.
    fn slot(&self, id: WindowId) -> Option<usize> {
        let slot = id.idx as usize;
        (id.idx < self.len
            && self.generation[slot] == id.generation
            && self.state[slot] != WindowState::Closed)
            .then_some(slot)
    }

    fn id_at(&self, idx: u32) -> WindowId {
        WindowId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Reserves a slot for a new window on top of the stack.
    fn allocate(&mut self, content: ContentId, options: OverlayOptions) -> u32 {
        let layer = u32::try_from(self.order.len()).unwrap_or(u32::MAX);
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot; its generation was bumped when it closed.
            let slot = idx as usize;
            self.state[slot] = WindowState::Opening;
            self.content[slot] = content;
            self.options[slot] = options;
            self.outcome[slot] = None;
            self.restore_focus[slot] = None;
            self.layer[slot] = layer;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.state.push(WindowState::Opening);
            self.content.push(content);
            self.options.push(options);
            self.outcome.push(None);
            self.restore_focus.push(None);
            self.layer.push(layer);
            self.generation.push(0);
            idx
        };
        self.order.push(idx);
        idx
    }

    /// Rewrites layer indices so they match positions in `order`.
    fn relayer(&mut self) {
        for (pos, &idx) in self.order.iter().enumerate() {
            let layer = u32::try_from(pos).unwrap_or(u32::MAX);
            let slot = idx as usize;
            let previous = self.layer[slot];
            if previous != layer {
                self.layer[slot] = layer;
                self.changes.push(StackEvent::LayerAssigned(LayerAssigned {
                    window: WindowId {
                        idx,
                        generation: self.generation[slot],
                    },
                    previous: Layer(previous),
                    layer: Layer(layer),
                }));
            }
        }
    }
}

impl<C: Container> OverlayStack<C> {
    /// Opens a window on top of the stack.
    ///
    /// The window gets the next layer (the current open count) and is
    /// instantiated by the registered container. Focus moves into the new
    /// window unless it already holds it.
    ///
    /// # Errors
    ///
    /// Returns [`NoContainerError`] if no container was registered. No window
    /// is created in that case.
    pub fn open(
        &mut self,
        content: ContentId,
        options: OverlayOptions,
    ) -> Result<WindowId, NoContainerError> {
        if self.container.is_none() {
            return Err(NoContainerError);
        }

        let idx = self.allocate(content, options);
        let slot = idx as usize;
        let id = self.id_at(idx);
        let layer = Layer(self.layer[slot]);

        if let Some(container) = self.container.as_mut() {
            if let Some(focus) = container.focus_host() {
                self.restore_focus[slot] = focus.active_element();
            }

            container.open(id, content, &options, layer);

            if let Some(focus) = container.focus_host() {
                if self.order.len() == 1 {
                    focus.set_modal_open(true);
                }
                if !focus.window_contains_focus(id) {
                    focus.focus(FocusTarget::Window(id));
                }
            }
        }

        self.state[slot] = WindowState::Open;
        self.changes.push(StackEvent::Opened(WindowOpened {
            window: id,
            content,
            layer,
        }));
        Ok(id)
    }

    /// Finalizes a window: `Closing → Closed` (or straight from `Open` when
    /// the window is torn down without a dismissal).
    ///
    /// Remaining windows are renumbered, focus is restored to the element
    /// that held it before the window opened (or the body, if that element
    /// is gone) and the container is told to remove the window.
    ///
    /// Returns `false` and does nothing if the window already closed.
    pub fn window_closed(&mut self, id: WindowId) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        let Some(pos) = self.order.iter().position(|&idx| idx == id.idx) else {
            return false;
        };

        self.order.remove(pos);
        self.state[slot] = WindowState::Closed;
        // Bump generation so the closed handle stays inert after slot reuse.
        self.generation[slot] = self.generation[slot].wrapping_add(1);
        self.free_list.push(id.idx);
        self.relayer();

        let restore = self.restore_focus[slot].take();
        if let Some(container) = self.container.as_mut() {
            if let Some(focus) = container.focus_host() {
                let target = match restore {
                    Some(node) if focus.is_attached(node) => FocusTarget::Node(node),
                    _ => FocusTarget::Body,
                };
                focus.focus(target);
                if let Some(node) = restore {
                    focus.release(node);
                }
                if self.order.is_empty() {
                    focus.set_modal_open(false);
                }
            }
            container.window_closed(id, Layers::new(&self.order, &self.generation, &self.layer));
        }

        self.changes.push(StackEvent::Closed(WindowClosed {
            window: id,
            remaining: u32::try_from(self.order.len()).unwrap_or(u32::MAX),
        }));
        true
    }

    /// Finalizes the top-most window, returning its handle.
    pub fn top_window_closed(&mut self) -> Option<WindowId> {
        let top = self.top()?;
        self.window_closed(top).then_some(top)
    }
}
