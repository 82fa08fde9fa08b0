// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay window stack.
//!
//! [`OverlayStack`] keeps the ordered set of open windows and assigns each a
//! [`Layer`]. Layers are dense: with `n` windows open they are exactly
//! `0..n`, in open order. A window's layer determines its z-index and that of
//! its backdrop (see [`Layer::style`]) so later windows always paint above
//! earlier ones, and every backdrop sits directly below its own window.
//!
//! Windows move through [`WindowState`]s:
//!
//! ```text
//! Opening ──► Open ──► Closing ──► Closed
//!              │                     ▲
//!              └─────────────────────┘  (torn down without dismissal)
//! ```
//!
//! Dismissal (backdrop click, escape key, or an explicit call) moves a window
//! to `Closing`. The application then calls
//! [`window_closed`](OverlayStack::window_closed) once its render artifacts
//! are gone, which renumbers the remaining windows and restores focus.

mod changes;
mod id;
mod layer;
mod store;
mod traverse;
mod window;

pub use changes::{
    LayerAssigned, StackChanges, StackEvent, WindowClosed, WindowDismissed, WindowOpened,
};
pub use id::{ContentId, WindowId};
pub use layer::{BASE_Z_INDEX, Layer, LayerStyle};
pub use store::OverlayStack;
pub use traverse::Layers;
pub use window::{
    Backdrop, ClickTarget, DialogSize, DismissReason, OverlayOptions, WindowOutcome, WindowState,
};
