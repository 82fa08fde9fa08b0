// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] by appending every event to a
//! `Vec<RecordedEvent>`. Overlay sessions produce a handful of events per
//! user interaction, so events are kept as values rather than encoded.
//! Use [`json::export`](crate::json::export) to persist a recording.

use overlay_core::stack::{LayerAssigned, WindowClosed, WindowDismissed, WindowOpened};
use overlay_core::trace::{DegenerateGeometryEvent, PlacementEvent, TraceSink};

/// A single recorded event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_window_opened`].
    WindowOpened(WindowOpened),
    /// See [`TraceSink::on_window_dismissed`].
    WindowDismissed(WindowDismissed),
    /// See [`TraceSink::on_layer_assigned`].
    LayerAssigned(LayerAssigned),
    /// See [`TraceSink::on_window_closed`].
    WindowClosed(WindowClosed),
    /// See [`TraceSink::on_placement`].
    Placement(PlacementEvent),
    /// See [`TraceSink::on_degenerate_geometry`].
    DegenerateGeometry(DegenerateGeometryEvent),
}

impl RecordedEvent {
    /// Short event name, as used in exports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WindowOpened(_) => "WindowOpened",
            Self::WindowDismissed(_) => "WindowDismissed",
            Self::LayerAssigned(_) => "LayerAssigned",
            Self::WindowClosed(_) => "WindowClosed",
            Self::Placement(_) => "Placement",
            Self::DegenerateGeometry(_) => "DegenerateGeometry",
        }
    }
}

/// A [`TraceSink`] that records events in arrival order.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_window_opened(&mut self, e: &WindowOpened) {
        self.events.push(RecordedEvent::WindowOpened(*e));
    }

    fn on_window_dismissed(&mut self, e: &WindowDismissed) {
        self.events.push(RecordedEvent::WindowDismissed(*e));
    }

    fn on_layer_assigned(&mut self, e: &LayerAssigned) {
        self.events.push(RecordedEvent::LayerAssigned(*e));
    }

    fn on_window_closed(&mut self, e: &WindowClosed) {
        self.events.push(RecordedEvent::WindowClosed(*e));
    }

    fn on_placement(&mut self, e: &PlacementEvent) {
        self.events.push(RecordedEvent::Placement(*e));
    }

    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        self.events.push(RecordedEvent::DegenerateGeometry(*e));
    }
}

#[cfg(test)]
mod tests {
    use overlay_core::measure::NodeId;
    use overlay_core::placement::Placement;
    use overlay_core::trace::GeometryRole;

    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_degenerate_geometry(&DegenerateGeometryEvent {
            node: NodeId(3),
            role: GeometryRole::Host,
        });
        rec.on_placement(&PlacementEvent {
            placement: Placement::Left,
            fits: false,
            candidates: 2,
            top: 0.0,
            left: -60.0,
        });

        let names: Vec<_> = rec.events().iter().map(RecordedEvent::name).collect();
        assert_eq!(names, ["DegenerateGeometry", "Placement"]);
        assert_eq!(rec.len(), 2);

        rec.clear();
        assert!(rec.is_empty());
    }
}
