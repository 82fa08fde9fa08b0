// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element positioning and overlay stacking.
//!
//! `overlay_core` computes where a floating element (popup, tooltip, modal
//! window) should appear relative to a host element, and keeps the set of
//! open overlay windows stacked in a consistent z-order. It is `no_std`
//! compatible (with `alloc`) and never touches a concrete rendering
//! technology: geometry is read through the [`Measure`](measure::Measure)
//! trait and windows are instantiated through the
//! [`Container`](backend::Container) trait.
//!
//! # Architecture
//!
//! ```text
//!   Measure (live DOM or DocumentSnapshot)
//!       │
//!       ▼
//!   offset() / position() ──► ElementBox
//!       │
//!       ▼
//!   position_elements(request) ──► Positioned { coordinates, placement }
//!
//!   OverlayStack::open() ──► Container::open(window, content, layer)
//!       │
//!       ▼
//!   click / escape / dismiss ──► Closing
//!       │
//!       ▼
//!   OverlayStack::window_closed() ──► relayer ──► Container::window_closed()
//!       │
//!       ▼
//!   take_changes() ──► StackChanges ──► Tracer::stack_changes()
//! ```
//!
//! **[`geometry`]**: [`ElementBox`](geometry::ElementBox), the
//! `{top, left, width, height, right, bottom}` box every measurement yields.
//!
//! **[`measure`]**: The [`Measure`](measure::Measure) trait plus the
//! [`offset`](measure::offset) and [`position`](measure::position)
//! measurement primitives.
//!
//! **[`snapshot`]**: [`DocumentSnapshot`](snapshot::DocumentSnapshot), a
//! frozen in-memory geometry snapshot implementing `Measure`.
//!
//! **[`placement`]**: [`Placement`](placement::Placement) values and
//! ordered [`PlacementRequest`](placement::PlacementRequest)s.
//!
//! **[`position`]**: Candidate resolution, viewport fitting and the
//! [`position_elements`](position::position_elements) entry point.
//!
//! **[`stack`]**: [`OverlayStack`](stack::OverlayStack), the ordered
//! registry of open windows and sole writer of their layer indices.
//!
//! **[`backend`]**: The [`Container`](backend::Container) and
//! [`FocusHost`](backend::FocusHost) traits that rendering layers implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod placement;
pub mod position;
pub mod snapshot;
pub mod stack;
pub mod trace;
