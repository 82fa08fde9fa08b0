// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough that exercises the tracing and diagnostics pipeline.
//!
//! Positions a tooltip against a button in a synthetic document, then opens,
//! dismisses and closes a few windows on an [`OverlayStack`]. Every event is
//! printed through a [`PrettyPrintSink`](overlay_debug::pretty::PrettyPrintSink)
//! and recorded by a [`RecorderSink`](overlay_debug::recorder::RecorderSink),
//! and the recording is exported as JSON to stdout at the end.

use kurbo::{Rect, Size};
use overlay_core::backend::Container;
use overlay_core::position::position_elements_traced;
use overlay_core::snapshot::{DocumentSnapshot, NodeGeometry};
use overlay_core::stack::{
    Backdrop, ClickTarget, ContentId, DismissReason, Layer, Layers, OverlayOptions, OverlayStack,
    WindowId,
};
use overlay_core::trace::{TraceSink, Tracer};

use overlay_debug::json;
use overlay_debug::pretty::PrettyPrintSink;
use overlay_debug::recorder::RecorderSink;

/// Forwards every event to two sinks.
#[derive(Debug)]
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_window_opened(&mut self, e: &overlay_core::stack::WindowOpened) {
        self.pretty.on_window_opened(e);
        self.recorder.on_window_opened(e);
    }

    fn on_window_dismissed(&mut self, e: &overlay_core::stack::WindowDismissed) {
        self.pretty.on_window_dismissed(e);
        self.recorder.on_window_dismissed(e);
    }

    fn on_layer_assigned(&mut self, e: &overlay_core::stack::LayerAssigned) {
        self.pretty.on_layer_assigned(e);
        self.recorder.on_layer_assigned(e);
    }

    fn on_window_closed(&mut self, e: &overlay_core::stack::WindowClosed) {
        self.pretty.on_window_closed(e);
        self.recorder.on_window_closed(e);
    }

    fn on_placement(&mut self, e: &overlay_core::trace::PlacementEvent) {
        self.pretty.on_placement(e);
        self.recorder.on_placement(e);
    }

    fn on_degenerate_geometry(&mut self, e: &overlay_core::trace::DegenerateGeometryEvent) {
        self.pretty.on_degenerate_geometry(e);
        self.recorder.on_degenerate_geometry(e);
    }
}

/// A container that only prints what it is asked to do.
#[derive(Debug, Default)]
struct LogContainer;

impl Container for LogContainer {
    fn open(&mut self, window: WindowId, content: ContentId, _: &OverlayOptions, layer: Layer) {
        let style = layer.style();
        eprintln!(
            "container: open {window:?} content={} z={} backdrop_z={}",
            content.0, style.z_index, style.backdrop_z_index
        );
    }

    fn window_closed(&mut self, window: WindowId, remaining: Layers<'_>) {
        let remaining: Vec<_> = remaining.collect();
        eprintln!("container: close {window:?} remaining={remaining:?}");
    }
}

fn main() {
    let mut pretty = PrettyPrintSink::stderr();
    let mut recorder = RecorderSink::new();

    // -- positioning -------------------------------------------------------
    let mut doc = DocumentSnapshot::new(Size::new(800.0, 600.0));
    let button = doc.insert(NodeGeometry::new(Rect::new(20.0, 20.0, 120.0, 50.0)));
    let tooltip = doc.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 160.0, 40.0)));
    let ghost = doc.insert(NodeGeometry::new(Rect::ZERO));

    {
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        for request in ["top", "top auto", "auto", "left-top right"] {
            let request = match request.parse() {
                Ok(request) => request,
                Err(err) => {
                    eprintln!("bad placement request: {err}");
                    continue;
                }
            };
            let placed =
                position_elements_traced(&doc, button, tooltip, &request, true, &mut tracer);
            eprintln!(
                "tooltip -> {} at ({}, {}) fits={}",
                placed.placement, placed.coordinates.top, placed.coordinates.left, placed.fits
            );
        }
        let request = "bottom".parse().unwrap_or_default();
        position_elements_traced(&doc, ghost, tooltip, &request, true, &mut tracer);
    }

    // -- window stack ------------------------------------------------------
    let mut stack = OverlayStack::new();
    stack.register_container(LogContainer);

    let opened: Vec<WindowId> = [
        OverlayOptions::default(),
        OverlayOptions::default().with_backdrop(Backdrop::Static),
        OverlayOptions::default().with_keyboard(false),
    ]
    .into_iter()
    .enumerate()
    .filter_map(|(i, options)| {
        let content = ContentId(u32::try_from(i).unwrap_or(u32::MAX));
        stack.open(content, options).ok()
    })
    .collect();

    if let [first, second, third] = opened[..] {
        // Ignored: the top window has keyboard dismissal off.
        stack.handle_escape(third, false);
        // Ignored: static backdrop.
        stack.handle_click(second, ClickTarget::Backdrop);
        stack.handle_click(first, ClickTarget::Backdrop);
        stack.dismiss(third, DismissReason::Programmatic);
        stack.close(second);
    }

    let mut closing: Vec<WindowId> = Vec::new();
    loop {
        let changes = stack.take_changes();
        if changes.is_empty() {
            break;
        }
        closing.extend(changes.dismissals().map(|d| d.window));
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        Tracer::new(&mut tee).stack_changes(&changes);
        for window in closing.drain(..) {
            stack.window_closed(window);
        }
    }

    // -- export ------------------------------------------------------------
    eprintln!("recorded {} events", recorder.len());
    let mut stdout = std::io::stdout();
    if let Err(err) = json::export(recorder.events(), &mut stdout) {
        eprintln!("failed to export recording: {err}");
    }
}
