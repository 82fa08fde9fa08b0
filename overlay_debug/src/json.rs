// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](super::recorder::RecorderSink)
//! as a JSON array. Every object has an `"event"` name plus the event's
//! fields; windows are written as `{"index", "generation"}` pairs.

use std::io::{self, Write};

use serde_json::{Value, json};

use overlay_core::stack::{WindowId, WindowOutcome};
use overlay_core::trace::GeometryRole;

use crate::recorder::RecordedEvent;

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer_pretty(writer, &values)?;
    Ok(())
}

fn window(id: WindowId) -> Value {
    json!({
        "index": id.index(),
        "generation": id.generation(),
    })
}

fn outcome(outcome: WindowOutcome) -> Value {
    match outcome {
        WindowOutcome::Closed => json!({ "kind": "closed" }),
        WindowOutcome::Dismissed(reason) => json!({
            "kind": "dismissed",
            "reason": format!("{reason:?}"),
        }),
    }
}

fn to_value(recorded: &RecordedEvent) -> Value {
    let name = recorded.name();
    match recorded {
        RecordedEvent::WindowOpened(e) => {
            let style = e.layer.style();
            json!({
                "event": name,
                "window": window(e.window),
                "content": e.content.0,
                "layer": e.layer.index(),
                "z_index": style.z_index,
                "backdrop_z_index": style.backdrop_z_index,
            })
        }
        RecordedEvent::WindowDismissed(e) => json!({
            "event": name,
            "window": window(e.window),
            "outcome": outcome(e.outcome),
        }),
        RecordedEvent::LayerAssigned(e) => json!({
            "event": name,
            "window": window(e.window),
            "previous": e.previous.index(),
            "layer": e.layer.index(),
        }),
        RecordedEvent::WindowClosed(e) => json!({
            "event": name,
            "window": window(e.window),
            "remaining": e.remaining,
        }),
        RecordedEvent::Placement(e) => json!({
            "event": name,
            "placement": e.placement.as_str(),
            "fits": e.fits,
            "candidates": e.candidates,
            "top": e.top,
            "left": e.left,
        }),
        RecordedEvent::DegenerateGeometry(e) => {
            let role = match e.role {
                GeometryRole::Host => "host",
                GeometryRole::Target => "target",
            };
            json!({
                "event": name,
                "node": e.node.0,
                "role": role,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use overlay_core::measure::NodeId;
    use overlay_core::placement::Placement;
    use overlay_core::trace::{DegenerateGeometryEvent, PlacementEvent, TraceSink};

    use super::*;
    use crate::recorder::RecorderSink;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_degenerate_geometry(&DegenerateGeometryEvent {
            node: NodeId(5),
            role: GeometryRole::Target,
        });
        rec.on_placement(&PlacementEvent {
            placement: Placement::BottomRight,
            fits: true,
            candidates: 12,
            top: 340.0,
            left: 440.0,
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["event"], "DegenerateGeometry");
        assert_eq!(parsed[0]["role"], "target");
        assert_eq!(parsed[0]["node"], 5);

        assert_eq!(parsed[1]["event"], "Placement");
        assert_eq!(parsed[1]["placement"], "bottom-right");
        assert_eq!(parsed[1]["fits"], true);
        assert_eq!(parsed[1]["top"], 340.0);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
