// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for positioning and the overlay stack.
//!
//! This module provides a [`TraceSink`] trait with per-event methods. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Stack events are not emitted while the stack mutates. Drain them with
//! [`OverlayStack::take_changes`] and replay the record with
//! [`Tracer::stack_changes`].
//!
//! [`OverlayStack::take_changes`]: crate::stack::OverlayStack::take_changes

use crate::measure::NodeId;
use crate::placement::Placement;
use crate::stack::{
    LayerAssigned, StackChanges, StackEvent, WindowClosed, WindowDismissed, WindowOpened,
};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per positioning request with the placement that was used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementEvent {
    /// The placement applied to the target.
    pub placement: Placement,
    /// Whether it fits the viewport. `false` means every candidate
    /// overflowed and the first one was used anyway.
    pub fits: bool,
    /// Number of resolved candidates.
    pub candidates: u32,
    /// Final top coordinate.
    pub top: f64,
    /// Final left coordinate.
    pub left: f64,
}

/// Which element of a positioning request measured as zero-size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryRole {
    /// The element the overlay is anchored to.
    Host,
    /// The overlay being placed.
    Target,
}

/// Emitted when a host or target has no rendered size (hidden or detached).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateGeometryEvent {
    /// The element that measured as zero-size.
    pub node: NodeId,
    /// Its role in the request.
    pub role: GeometryRole,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a window finished opening.
    fn on_window_opened(&mut self, e: &WindowOpened) {
        _ = e;
    }

    /// Called when a window was dismissed or closed.
    fn on_window_dismissed(&mut self, e: &WindowDismissed) {
        _ = e;
    }

    /// Called when a window moved to a new layer.
    fn on_layer_assigned(&mut self, e: &LayerAssigned) {
        _ = e;
    }

    /// Called when a window left the stack.
    fn on_window_closed(&mut self, e: &WindowClosed) {
        _ = e;
    }

    /// Called when a positioning request resolved a placement.
    fn on_placement(&mut self, e: &PlacementEvent) {
        _ = e;
    }

    /// Called when an element measured as zero-size.
    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`WindowOpened`] event.
    #[inline]
    pub fn window_opened(&mut self, e: &WindowOpened) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_window_opened(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`WindowDismissed`] event.
    #[inline]
    pub fn window_dismissed(&mut self, e: &WindowDismissed) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_window_dismissed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerAssigned`] event.
    #[inline]
    pub fn layer_assigned(&mut self, e: &LayerAssigned) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_assigned(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`WindowClosed`] event.
    #[inline]
    pub fn window_closed(&mut self, e: &WindowClosed) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_window_closed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PlacementEvent`].
    #[inline]
    pub fn placement(&mut self, e: &PlacementEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_placement(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DegenerateGeometryEvent`].
    #[inline]
    pub fn degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_degenerate_geometry(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Replays a drained change record, in order.
    pub fn stack_changes(&mut self, changes: &StackChanges) {
        for event in &changes.events {
            match event {
                StackEvent::Opened(e) => self.window_opened(e),
                StackEvent::Dismissed(e) => self.window_dismissed(e),
                StackEvent::LayerAssigned(e) => self.layer_assigned(e),
                StackEvent::Closed(e) => self.window_closed(e),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_placement() -> PlacementEvent {
        PlacementEvent {
            placement: Placement::Top,
            fits: true,
            candidates: 1,
            top: 280.0,
            left: 420.0,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_placement(&sample_placement());
        sink.on_degenerate_geometry(&DegenerateGeometryEvent {
            node: NodeId(1),
            role: GeometryRole::Target,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.placement(&sample_placement());
        tracer.stack_changes(&StackChanges::default());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        use crate::stack::{ContentId, OverlayOptions, OverlayStack};

        #[derive(Default)]
        struct RecordingSink {
            opened: Vec<u32>,
            closed: Vec<u32>,
            placements: Vec<Placement>,
        }
        impl TraceSink for RecordingSink {
            fn on_window_opened(&mut self, e: &WindowOpened) {
                self.opened.push(e.content.0);
            }
            fn on_window_closed(&mut self, e: &WindowClosed) {
                self.closed.push(e.remaining);
            }
            fn on_placement(&mut self, e: &PlacementEvent) {
                self.placements.push(e.placement);
            }
        }

        struct Bare;
        impl crate::backend::Container for Bare {
            fn open(
                &mut self,
                _: crate::stack::WindowId,
                _: ContentId,
                _: &OverlayOptions,
                _: crate::stack::Layer,
            ) {
            }
            fn window_closed(&mut self, _: crate::stack::WindowId, _: crate::stack::Layers<'_>) {}
        }

        let mut stack = OverlayStack::new();
        stack.register_container(Bare);
        let a = stack
            .open(ContentId(4), OverlayOptions::default())
            .expect("container is registered");
        stack
            .open(ContentId(5), OverlayOptions::default())
            .expect("container is registered");
        assert!(stack.window_closed(a));

        let mut sink = RecordingSink::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.stack_changes(&stack.take_changes());
        tracer.placement(&sample_placement());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.opened, &[4, 5]);
        assert_eq!(sink.closed, &[1]);
        assert_eq!(sink.placements, &[Placement::Top]);
    }
}
