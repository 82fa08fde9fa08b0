// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for rendering integrations.
//!
//! `overlay_core` never creates elements itself. A rendering layer provides:
//!
//! - **Measurement**: An implementation of [`Measure`](crate::measure::Measure)
//!   that reads live geometry (or a [`DocumentSnapshot`]).
//!
//! - **Container**: Implements [`Container`] to physically create and remove
//!   window and backdrop elements when the [`OverlayStack`] asks it to.
//!
//! - **Focus**: Optionally implements [`FocusHost`] so the stack can move
//!   focus into new windows and restore it when they close.
//!
//! # Crate boundaries
//!
//! `overlay_core` owns the geometry, the stack registry and this contract
//! module. Backend crates depend on `overlay_core` and provide DOM (or other
//! toolkit) glue. Application code depends on both and routes input events
//! (clicks, key presses) to the stack.
//!
//! [`DocumentSnapshot`]: crate::snapshot::DocumentSnapshot
//! [`OverlayStack`]: crate::stack::OverlayStack

use crate::measure::NodeId;
use crate::stack::{ContentId, Layer, Layers, OverlayOptions, WindowId};

/// Creates and removes the render artifacts of overlay windows.
///
/// Exactly one container is bound to an [`OverlayStack`] at a time. Test
/// doubles implement this trait to record calls.
///
/// # Event loop pseudocode
///
/// ```rust,ignore
/// stack.register_container(DomContainer::new(document, root));
/// let window = stack.open(content, OverlayOptions::default())?;
///
/// // Input routing: the application forwards DOM events.
/// on_click(|target| stack.handle_click(window, target));
/// on_keyup_escape(|handled| stack.handle_escape(window, handled));
///
/// // Once a window is dismissed, tear it down.
/// for d in stack.take_changes().dismissals() {
///     stack.window_closed(d.window);
/// }
/// ```
///
/// [`OverlayStack`]: crate::stack::OverlayStack
pub trait Container {
    /// Instantiates `window` showing `content` on `layer`.
    ///
    /// Called while the window is in the `Opening` state.
    fn open(&mut self, window: WindowId, content: ContentId, options: &OverlayOptions, layer: Layer);

    /// Removes the artifacts of `window`.
    ///
    /// `remaining` lists the windows still open, with their renumbered
    /// layers, so the container can update z-indices.
    fn window_closed(&mut self, window: WindowId, remaining: Layers<'_>);

    /// Returns the focus host, if this container manages focus.
    fn focus_host(&mut self) -> Option<&mut dyn FocusHost> {
        None
    }
}

/// Something that can receive focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// A previously focused element.
    Node(NodeId),
    /// The element of an overlay window.
    Window(WindowId),
    /// The document body.
    Body,
}

/// Focus management for the document hosting the windows.
pub trait FocusHost {
    /// Captures the element that currently has focus, if any.
    ///
    /// The returned handle is passed back to [`is_attached`](Self::is_attached),
    /// [`focus`](Self::focus) and finally [`release`](Self::release) when the
    /// window that captured it closes.
    fn active_element(&mut self) -> Option<NodeId>;

    /// Whether `node` is still attached to the document.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Whether focus is already inside `window` (e.g. an autofocused field).
    fn window_contains_focus(&self, window: WindowId) -> bool {
        _ = window;
        false
    }

    /// Moves focus to `target`.
    fn focus(&mut self, target: FocusTarget);

    /// Drops a handle returned by [`active_element`](Self::active_element).
    ///
    /// Called once per captured handle, after focus has been restored.
    fn release(&mut self, node: NodeId) {
        _ = node;
    }

    /// Flags the document as having at least one open modal window.
    fn set_modal_open(&mut self, open: bool) {
        _ = open;
    }
}
