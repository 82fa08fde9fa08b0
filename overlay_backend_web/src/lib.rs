// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for overlay.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomDocument`]: live DOM measurement (`getBoundingClientRect`,
//!   computed styles, offset parents)
//! - [`DomContainer`]: window and backdrop element management, plus focus
//!   capture and restoration
//! - [`apply_position`] / [`apply_layer`]: write positioning results and
//!   layer styles into inline styles
//!
//! DOM failures are logged with `tracing` and otherwise ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! let document = Rc::new(DomDocument::global().ok_or("no document")?);
//! let host = document.register(&button);
//! let target = document.register(&tooltip);
//! let placed = position_elements(&*document, host, target, &"top auto".parse()?, true);
//! apply_position(&tooltip, &placed);
//!
//! let body = document.document().body().ok_or("no body")?;
//! let mut stack = OverlayStack::new();
//! stack.register_container(DomContainer::new(document.clone(), body.into(), render));
//! let window = stack.open(ContentId(0), OverlayOptions::default())?;
//! ```

#![no_std]

extern crate alloc;

mod container;
mod document;
mod style;

pub use container::{ContentRenderer, DomContainer};
pub use document::DomDocument;
pub use overlay_core::backend::{Container, FocusHost};
pub use style::{apply_layer, apply_position};
