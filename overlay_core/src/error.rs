// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Geometry never fails: degenerate or off-screen elements still produce a
//! placement. The only fallible operations are opening a window without a
//! container and parsing placement strings.

use alloc::string::String;

use thiserror::Error;

/// Returned by [`OverlayStack::open`](crate::stack::OverlayStack::open) when no
/// container has been registered.
///
/// This is an integration mistake, not a runtime condition: register a
/// container before opening any window.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("missing overlay container: call `register_container` before opening windows")]
pub struct NoContainerError;

/// Returned when a string does not name a [`Placement`](crate::placement::Placement).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown placement `{input}`")]
pub struct ParsePlacementError {
    /// The rejected input.
    pub input: String,
}
