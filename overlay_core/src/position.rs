// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution and target positioning.
//!
//! A positioning request runs in three steps:
//!
//! 1. The [`PlacementRequest`] is resolved into an ordered candidate list
//!    ([`resolve_candidates`]). `auto` entries expand to every directional
//!    placement, ranked by the room around the host.
//! 2. The directional placements whose target box fits inside the viewport
//!    are computed ([`available_placements`]).
//! 3. The first candidate that fits wins; if none does, the first candidate
//!    is used anyway. The target box for the winner is then computed in the
//!    requested reference frame and rounded.
//!
//! Fitting always happens in viewport coordinates. `append_to_body` only
//! changes the frame of the returned coordinates: document coordinates (the
//! target is a child of `<body>`) or coordinates relative to the host's
//! nearest positioned ancestor (the target is a sibling of the host).

use alloc::vec::Vec;

use kurbo::{Insets, Point, Size};

use crate::geometry::ElementBox;
use crate::measure::{Measure, NodeId, measured_size, offset, position};
use crate::placement::{Alignment, Placement, PlacementRequest, Side};
use crate::trace::{DegenerateGeometryEvent, GeometryRole, PlacementEvent, Tracer};

/// Final coordinates of a positioned target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    /// Value for the `top` style property.
    pub top: f64,
    /// Value for the `left` style property.
    pub left: f64,
}

impl Coordinates {
    /// Returns the coordinates as a point (`x = left`, `y = top`).
    #[inline]
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// The result of [`position_elements`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Positioned {
    /// Where the target goes.
    pub coordinates: Coordinates,
    /// The placement that was used.
    pub placement: Placement,
    /// Whether `placement` fits the viewport. `false` when no candidate fit
    /// and the first one was applied as a best effort.
    pub fits: bool,
}

/// Places a target of `size` against `host`.
///
/// `margin` is the target's own margin; placements above or left of the host
/// keep the target's bottom or right margin clear of it. [`Placement::Auto`]
/// is placed as [`Placement::Top`].
#[must_use]
pub fn place(host: &ElementBox, size: Size, margin: Insets, placement: Placement) -> ElementBox {
    let alignment = placement.alignment();
    let across_x = align(host.left, host.width, size.width, alignment);
    let across_y = align(host.top, host.height, size.height, alignment);

    let (left, top) = match placement.side().unwrap_or(Side::Top) {
        Side::Top => (across_x, host.top - (size.height + margin.y1)),
        Side::Bottom => (across_x, host.top + host.height),
        Side::Left => (host.left - (size.width + margin.x1), across_y),
        Side::Right => (host.left + host.width, across_y),
    };
    ElementBox::from_origin_size(Point::new(left, top), size)
}

fn align(start: f64, extent: f64, size: f64, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Start => start,
        Alignment::End => start + extent - size,
        Alignment::Center => start + extent / 2.0 - size / 2.0,
    }
}

/// Computes the box of `target` placed against `host` in the result frame.
///
/// With `append_to_body` the host is measured in document coordinates,
/// otherwise relative to its nearest positioned ancestor. The box is not
/// rounded.
#[must_use]
pub fn target_box<M: Measure + ?Sized>(
    doc: &M,
    host: NodeId,
    target: NodeId,
    placement: Placement,
    append_to_body: bool,
) -> ElementBox {
    let host_box = if append_to_body {
        offset(doc, host, false)
    } else {
        position(doc, host, false)
    };
    place(
        &host_box,
        measured_size(doc, target),
        doc.margin(target),
        placement,
    )
}

/// Box of `target` placed against `host`, in viewport coordinates.
fn viewport_box<M: Measure + ?Sized>(
    doc: &M,
    host: NodeId,
    target: NodeId,
    placement: Placement,
) -> ElementBox {
    let size = measured_size(doc, host);
    let host_box = ElementBox {
        width: size.width,
        height: size.height,
        ..ElementBox::from_rect(doc.bounding_rect(host))
    };
    place(
        &host_box,
        measured_size(doc, target),
        doc.margin(target),
        placement,
    )
}

fn fits_viewport(b: &ElementBox, viewport: Size) -> bool {
    b.left >= 0.0 && b.top >= 0.0 && b.right <= viewport.width && b.bottom <= viewport.height
}

/// Returns the directional placements whose target box lies fully inside
/// the viewport, in [`Placement::DIRECTIONAL`] order.
#[must_use]
pub fn available_placements<M: Measure + ?Sized>(
    doc: &M,
    host: NodeId,
    target: NodeId,
) -> Vec<Placement> {
    let viewport = doc.viewport_size();
    Placement::DIRECTIONAL
        .into_iter()
        .filter(|&p| fits_viewport(&viewport_box(doc, host, target, p), viewport))
        .collect()
}

/// Ranks every directional placement by the room around `host`.
///
/// Sides are ordered by available viewport space, most room first (ties
/// keep `top, bottom, left, right` order). The centered placement of each
/// side comes first, followed by the edge-aligned variants side by side.
#[must_use]
pub fn auto_placements<M: Measure + ?Sized>(doc: &M, host: NodeId) -> [Placement; 12] {
    let rect = doc.bounding_rect(host);
    let viewport = doc.viewport_size();
    let room = |side: Side| match side {
        Side::Top => rect.y0,
        Side::Bottom => viewport.height - rect.y1,
        Side::Left => rect.x0,
        Side::Right => viewport.width - rect.x1,
    };

    let mut sides = Side::ALL;
    sides.sort_by(|a, b| room(*b).total_cmp(&room(*a)));

    let mut out = [Placement::Auto; 12];
    for (i, &side) in sides.iter().enumerate() {
        out[i] = Placement::from_parts(side, Alignment::Center);
        out[4 + 2 * i] = Placement::from_parts(side, Alignment::Start);
        out[5 + 2 * i] = Placement::from_parts(side, Alignment::End);
    }
    out
}

/// Expands a request into its ordered candidate list.
///
/// Explicit placements are kept in order. Each `auto` entry expands in place
/// to [`auto_placements`], skipping placements the request names explicitly.
/// An empty request behaves as `auto`. The result has no duplicates and is
/// never empty.
#[must_use]
pub fn resolve_candidates<M: Measure + ?Sized>(
    doc: &M,
    host: NodeId,
    request: &PlacementRequest,
) -> Vec<Placement> {
    if request.is_empty() {
        return auto_placements(doc, host).to_vec();
    }

    let requested = request.candidates();
    let mut out = Vec::with_capacity(Placement::DIRECTIONAL.len());
    for &p in requested {
        if p == Placement::Auto {
            for q in auto_placements(doc, host) {
                if !requested.contains(&q) && !out.contains(&q) {
                    out.push(q);
                }
            }
        } else if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Positions `target` against `host`.
///
/// See the [module docs](self) for the algorithm. The returned coordinates
/// are rounded. Zero-size elements are not an error: their boxes propagate
/// through the arithmetic and some placement is always returned.
#[must_use]
pub fn position_elements<M: Measure + ?Sized>(
    doc: &M,
    host: NodeId,
    target: NodeId,
    request: &PlacementRequest,
    append_to_body: bool,
) -> Positioned {
    position_elements_traced(
        doc,
        host,
        target,
        request,
        append_to_body,
        &mut Tracer::none(),
    )
}

/// [`position_elements`], reporting the outcome to `tracer`.
///
/// Emits a [`DegenerateGeometryEvent`] for every zero-size element and one
/// [`PlacementEvent`] with the result.
pub fn position_elements_traced<M: Measure + ?Sized>(
    doc: &M,
    host: NodeId,
    target: NodeId,
    request: &PlacementRequest,
    append_to_body: bool,
    tracer: &mut Tracer<'_>,
) -> Positioned {
    for (node, role) in [(host, GeometryRole::Host), (target, GeometryRole::Target)] {
        if measured_size(doc, node) == Size::ZERO {
            tracer.degenerate_geometry(&DegenerateGeometryEvent { node, role });
        }
    }

    let candidates = resolve_candidates(doc, host, request);
    let available = available_placements(doc, host, target);
    let (placement, fits) = match candidates.iter().find(|p| available.contains(*p)) {
        Some(&p) => (p, true),
        None => (
            candidates.first().copied().unwrap_or(Placement::Top),
            false,
        ),
    };

    let b = target_box(doc, host, target, placement, append_to_body).round();
    tracer.placement(&PlacementEvent {
        placement,
        fits,
        candidates: u32::try_from(candidates.len()).unwrap_or(u32::MAX),
        top: b.top,
        left: b.left,
    });

    Positioned {
        coordinates: Coordinates {
            top: b.top,
            left: b.left,
        },
        placement,
        fits,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Rect, Vec2};

    use super::*;
    use crate::measure::PositionScheme;
    use crate::snapshot::{DocumentSnapshot, NodeGeometry};

    const VIEWPORT: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    /// A 100×40 host at (400, 300) and a 60×20 target.
    fn centered() -> (DocumentSnapshot, NodeId, NodeId) {
        let mut doc = DocumentSnapshot::new(VIEWPORT);
        let host = doc.insert(NodeGeometry::new(Rect::new(400.0, 300.0, 500.0, 340.0)));
        let target = doc.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 60.0, 20.0)));
        (doc, host, target)
    }

    fn doc_with_host(host_rect: Rect) -> (DocumentSnapshot, NodeId, NodeId) {
        let mut doc = DocumentSnapshot::new(VIEWPORT);
        let host = doc.insert(NodeGeometry::new(host_rect));
        let target = doc.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 60.0, 20.0)));
        (doc, host, target)
    }

    fn at(doc: &DocumentSnapshot, host: NodeId, target: NodeId, p: Placement) -> Coordinates {
        position_elements(doc, host, target, &p.into(), true).coordinates
    }

    #[test]
    fn primary_placements() {
        let (doc, host, target) = centered();
        assert_eq!(at(&doc, host, target, Placement::Top), Coordinates { top: 280.0, left: 420.0 });
        assert_eq!(
            at(&doc, host, target, Placement::Bottom),
            Coordinates { top: 340.0, left: 420.0 }
        );
        assert_eq!(at(&doc, host, target, Placement::Left), Coordinates { top: 310.0, left: 340.0 });
        assert_eq!(
            at(&doc, host, target, Placement::Right),
            Coordinates { top: 310.0, left: 500.0 }
        );
    }

    #[test]
    fn secondary_placements_align_edges() {
        let (doc, host, target) = centered();
        assert_eq!(at(&doc, host, target, Placement::TopLeft).left, 400.0);
        assert_eq!(at(&doc, host, target, Placement::TopRight).left, 440.0);
        assert_eq!(at(&doc, host, target, Placement::BottomRight).left, 440.0);
        assert_eq!(at(&doc, host, target, Placement::LeftTop).top, 300.0);
        assert_eq!(at(&doc, host, target, Placement::LeftBottom).top, 320.0);
        assert_eq!(at(&doc, host, target, Placement::RightBottom).top, 320.0);
        assert_eq!(at(&doc, host, target, Placement::RightTop).left, 500.0);
    }

    #[test]
    fn target_margin_keeps_gap_above_and_left() {
        let (mut doc, host, target) = centered();
        if let Some(g) = doc.node_mut(target) {
            g.margin = Insets::new(0.0, 0.0, 7.0, 5.0);
        }
        assert_eq!(at(&doc, host, target, Placement::Top).top, 275.0);
        assert_eq!(at(&doc, host, target, Placement::Left).left, 333.0);
        // Bottom and right are unaffected.
        assert_eq!(at(&doc, host, target, Placement::Bottom).top, 340.0);
        assert_eq!(at(&doc, host, target, Placement::Right).left, 500.0);
    }

    #[test]
    fn first_fitting_candidate_wins() {
        let (doc, host, target) = doc_with_host(Rect::new(400.0, 10.0, 500.0, 50.0));
        let request = PlacementRequest::from([Placement::Top, Placement::Bottom]);
        let result = position_elements(&doc, host, target, &request, true);
        assert_eq!(result.placement, Placement::Bottom);
        assert!(result.fits);
        assert_eq!(result.coordinates.top, 50.0);
    }

    #[test]
    fn falls_back_to_first_candidate_when_nothing_fits() {
        let mut doc = DocumentSnapshot::new(Size::new(100.0, 50.0));
        let host = doc.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 20.0, 10.0)));
        let target = doc.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 60.0, 20.0)));
        let request = PlacementRequest::from([Placement::Top, Placement::Left]);

        let result = position_elements(&doc, host, target, &request, true);
        assert_eq!(result.placement, Placement::Top);
        assert!(!result.fits);
        assert_eq!(result.coordinates, Coordinates { top: -20.0, left: -20.0 });
    }

    #[test]
    fn auto_ranks_sides_by_room() {
        let (doc, host, target) = doc_with_host(Rect::new(10.0, 10.0, 60.0, 30.0));
        assert_eq!(
            auto_placements(&doc, host),
            [
                Placement::Right,
                Placement::Bottom,
                Placement::Top,
                Placement::Left,
                Placement::RightTop,
                Placement::RightBottom,
                Placement::BottomLeft,
                Placement::BottomRight,
                Placement::TopLeft,
                Placement::TopRight,
                Placement::LeftTop,
                Placement::LeftBottom,
            ]
        );
        let result = position_elements(&doc, host, target, &PlacementRequest::auto(), true);
        assert_eq!(result.placement, Placement::Right);
        assert_eq!(result.coordinates, Coordinates { top: 10.0, left: 60.0 });
    }

    #[test]
    fn empty_request_behaves_as_auto() {
        let (doc, host, _) = centered();
        let empty = PlacementRequest::new(Vec::new());
        assert_eq!(
            resolve_candidates(&doc, host, &empty),
            auto_placements(&doc, host).to_vec()
        );
    }

    #[test]
    fn auto_skips_explicit_placements() {
        let (doc, host, _) = doc_with_host(Rect::new(10.0, 10.0, 60.0, 30.0));
        let request: PlacementRequest = "top auto left-top".parse().expect("valid request");
        let resolved = resolve_candidates(&doc, host, &request);
        assert_eq!(resolved.len(), 12);
        assert_eq!(
            &resolved[..4],
            &[
                Placement::Top,
                Placement::Right,
                Placement::Bottom,
                Placement::Left
            ]
        );
        assert_eq!(resolved.last(), Some(&Placement::LeftTop));
        for p in Placement::DIRECTIONAL {
            assert_eq!(resolved.iter().filter(|&&q| q == p).count(), 1, "{p}");
        }
    }

    #[test]
    fn explicit_duplicates_collapse() {
        let (doc, host, _) = centered();
        let request = PlacementRequest::from([Placement::Left, Placement::Left, Placement::Top]);
        assert_eq!(
            resolve_candidates(&doc, host, &request),
            vec![Placement::Left, Placement::Top]
        );
    }

    #[test]
    fn append_to_body_changes_only_the_frame() {
        let mut doc = DocumentSnapshot::new(VIEWPORT);
        doc.set_scroll(Vec2::new(0.0, 200.0));
        let container = doc.insert(
            NodeGeometry::new(Rect::new(100.0, 50.0, 600.0, 450.0))
                .with_position(PositionScheme::Absolute),
        );
        let host = doc.insert(
            NodeGeometry::new(Rect::new(400.0, 300.0, 500.0, 340.0)).with_offset_parent(container),
        );
        let target = doc.insert(NodeGeometry::new(Rect::new(0.0, 0.0, 60.0, 20.0)));
        let request = PlacementRequest::from(Placement::Top);

        let body = position_elements(&doc, host, target, &request, true);
        assert_eq!(body.coordinates, Coordinates { top: 480.0, left: 420.0 });

        let local = position_elements(&doc, host, target, &request, false);
        assert_eq!(local.coordinates, Coordinates { top: 230.0, left: 320.0 });

        assert_eq!(body.placement, local.placement);
        assert_eq!(body.fits, local.fits);
    }

    #[test]
    fn result_is_rounded() {
        let (doc, host, target) = doc_with_host(Rect::new(400.4, 300.6, 500.4, 340.6));
        let c = at(&doc, host, target, Placement::Top);
        assert_eq!(c, Coordinates { top: 281.0, left: 420.0 });
    }

    #[test]
    fn degenerate_target_still_places() {
        let (doc, host, _) = centered();
        let detached = NodeId(99);
        let result = position_elements(&doc, host, detached, &Placement::Top.into(), true);
        assert_eq!(result.placement, Placement::Top);
        assert_eq!(result.coordinates, Coordinates { top: 300.0, left: 450.0 });
    }

    #[test]
    fn available_placements_in_open_space() {
        let (doc, host, target) = centered();
        assert_eq!(
            available_placements(&doc, host, target),
            Placement::DIRECTIONAL.to_vec()
        );
    }

    #[test]
    fn available_placements_near_corner() {
        let (doc, host, target) = doc_with_host(Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(
            available_placements(&doc, host, target),
            vec![
                Placement::Right,
                Placement::BottomLeft,
                Placement::RightTop,
                Placement::RightBottom,
            ]
        );
    }

    #[test]
    fn available_placements_never_overflow() {
        for x in [0.0, 15.0, 250.0, 470.0, 900.0, 960.0] {
            for y in [0.0, 5.0, 390.0, 770.0, 790.0] {
                let (doc, host, target) = doc_with_host(Rect::new(x, y, x + 40.0, y + 10.0));
                for p in available_placements(&doc, host, target) {
                    let b = viewport_box(&doc, host, target, p);
                    assert!(b.top >= 0.0 && b.left >= 0.0, "{p} at ({x}, {y})");
                    assert!(b.right <= VIEWPORT.width && b.bottom <= VIEWPORT.height);
                }
            }
        }
    }

    #[test]
    fn chosen_placement_is_a_candidate() {
        let requests: [PlacementRequest; 4] = [
            PlacementRequest::auto(),
            Placement::LeftBottom.into(),
            PlacementRequest::from([Placement::Right, Placement::TopLeft]),
            PlacementRequest::from([Placement::BottomRight, Placement::Auto]),
        ];
        for x in [0.0, 300.0, 980.0] {
            for y in [0.0, 400.0, 790.0] {
                let (doc, host, target) = doc_with_host(Rect::new(x, y, x + 20.0, y + 10.0));
                for request in &requests {
                    let result = position_elements(&doc, host, target, request, true);
                    assert!(resolve_candidates(&doc, host, request).contains(&result.placement));
                }
            }
        }
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traced_positioning_reports_degenerate_geometry() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Sink {
            degenerate: Vec<GeometryRole>,
            placements: Vec<PlacementEvent>,
        }
        impl TraceSink for Sink {
            fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
                self.degenerate.push(e.role);
            }
            fn on_placement(&mut self, e: &PlacementEvent) {
                self.placements.push(*e);
            }
        }

        let (doc, host, _) = centered();
        let mut sink = Sink::default();
        let mut tracer = Tracer::new(&mut sink);
        let result = position_elements_traced(
            &doc,
            host,
            NodeId(42),
            &Placement::Bottom.into(),
            true,
            &mut tracer,
        );
        drop(tracer);

        assert_eq!(sink.degenerate, vec![GeometryRole::Target]);
        assert_eq!(sink.placements.len(), 1);
        assert_eq!(sink.placements[0].placement, result.placement);
        assert_eq!(sink.placements[0].candidates, 1);
        assert!(sink.placements[0].fits);
    }
}
