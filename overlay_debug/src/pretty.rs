// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use overlay_core::stack::{
    DismissReason, LayerAssigned, WindowClosed, WindowDismissed, WindowOpened, WindowOutcome,
};
use overlay_core::trace::{DegenerateGeometryEvent, GeometryRole, PlacementEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn outcome_name(outcome: WindowOutcome) -> &'static str {
    match outcome {
        WindowOutcome::Closed => "closed",
        WindowOutcome::Dismissed(DismissReason::BackdropClick) => "dismissed:backdrop",
        WindowOutcome::Dismissed(DismissReason::Esc) => "dismissed:esc",
        WindowOutcome::Dismissed(DismissReason::Programmatic) => "dismissed:programmatic",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_window_opened(&mut self, e: &WindowOpened) {
        let style = e.layer.style();
        let _ = writeln!(
            self.writer,
            "[open] window={} content={} layer={} z={} backdrop-z={}",
            e.window.index(),
            e.content.0,
            e.layer.index(),
            style.z_index,
            style.backdrop_z_index,
        );
    }

    fn on_window_dismissed(&mut self, e: &WindowDismissed) {
        let _ = writeln!(
            self.writer,
            "[dismiss] window={} {}",
            e.window.index(),
            outcome_name(e.outcome),
        );
    }

    fn on_layer_assigned(&mut self, e: &LayerAssigned) {
        let _ = writeln!(
            self.writer,
            "[relayer] window={} layer={}→{}",
            e.window.index(),
            e.previous.index(),
            e.layer.index(),
        );
    }

    fn on_window_closed(&mut self, e: &WindowClosed) {
        let _ = writeln!(
            self.writer,
            "[close] window={} remaining={}",
            e.window.index(),
            e.remaining,
        );
    }

    fn on_placement(&mut self, e: &PlacementEvent) {
        let fit = if e.fits { "fits" } else { "OVERFLOW" };
        let _ = writeln!(
            self.writer,
            "[place] {} top={} left={} candidates={} {fit}",
            e.placement, e.top, e.left, e.candidates,
        );
    }

    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        let role = match e.role {
            GeometryRole::Host => "host",
            GeometryRole::Target => "target",
        };
        let _ = writeln!(
            self.writer,
            "[degenerate] {role} node={} has no size",
            e.node.0
        );
    }
}

#[cfg(test)]
mod tests {
    use overlay_core::placement::Placement;
    use overlay_core::stack::{ContentId, Layer};

    use super::*;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_placement() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_placement(&PlacementEvent {
            placement: Placement::TopLeft,
            fits: false,
            candidates: 3,
            top: -20.0,
            left: 4.0,
        });
        let output = output(sink);
        assert!(output.contains("[place] top-left"), "got: {output}");
        assert!(output.contains("OVERFLOW"), "got: {output}");
    }

    #[test]
    fn pretty_print_stack_events() {
        use overlay_core::backend::Container;
        use overlay_core::stack::{Layers, OverlayOptions, OverlayStack, WindowId};
        use overlay_core::trace::Tracer;

        struct Bare;
        impl Container for Bare {
            fn open(&mut self, _: WindowId, _: ContentId, _: &OverlayOptions, _: Layer) {}
            fn window_closed(&mut self, _: WindowId, _: Layers<'_>) {}
        }

        let mut stack = OverlayStack::new();
        stack.register_container(Bare);
        let a = stack.open(ContentId(7), OverlayOptions::default()).unwrap();
        stack.open(ContentId(8), OverlayOptions::default()).unwrap();
        stack.dismiss(a, DismissReason::Esc);
        stack.window_closed(a);

        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        Tracer::new(&mut sink).stack_changes(&stack.take_changes());
        let output = output(sink);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5, "got: {output}");
        assert!(lines[0].contains("z=1050 backdrop-z=1049"), "got: {output}");
        assert!(lines[1].contains("z=1052 backdrop-z=1051"), "got: {output}");
        assert!(lines[2].contains("dismissed:esc"), "got: {output}");
        assert!(lines[3].starts_with("[relayer]"), "got: {output}");
        assert!(lines[4].contains("remaining=1"), "got: {output}");
    }
}
