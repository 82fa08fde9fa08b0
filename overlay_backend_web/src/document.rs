// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live DOM measurement.
//!
//! [`DomDocument`] implements [`Measure`] over the browser document. Elements
//! are registered to obtain [`NodeId`]s; node `0` is always the document
//! element (`<html>`). Offset parents discovered during measurement are
//! registered on the fly, which is why the registry sits behind a
//! `RefCell`.

use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Insets, Rect, Size, Vec2};
use overlay_core::measure::{Measure, NodeId, PositionScheme};
use wasm_bindgen::JsCast as _;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

use crate::style::parse_px;

/// A [`Measure`] implementation backed by the live DOM.
pub struct DomDocument {
    window: Window,
    document: Document,
    nodes: RefCell<Vec<Element>>,
}

impl core::fmt::Debug for DomDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomDocument")
            .field("nodes_len", &self.nodes.borrow().len())
            .finish_non_exhaustive()
    }
}

impl DomDocument {
    /// Wraps the document of `window`.
    ///
    /// Returns `None` if the window has no document or the document has no
    /// root element.
    #[must_use]
    pub fn new(window: Window) -> Option<Self> {
        let document = window.document()?;
        let root = document.document_element()?;
        Some(Self {
            window,
            document,
            nodes: RefCell::new(vec![root]),
        })
    }

    /// Wraps the global `window`.
    #[must_use]
    pub fn global() -> Option<Self> {
        Self::new(web_sys::window()?)
    }

    /// The wrapped document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the handle of `el`, registering it on first use.
    pub fn register(&self, el: &Element) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let idx = match nodes.iter().position(|n| n == el) {
            Some(idx) => idx,
            None => {
                nodes.push(el.clone());
                nodes.len() - 1
            }
        };
        NodeId(u32::try_from(idx).unwrap_or(u32::MAX))
    }

    /// Returns the element behind a handle.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<Element> {
        self.nodes.borrow().get(node.0 as usize).cloned()
    }

    fn html(&self, node: NodeId) -> Option<HtmlElement> {
        self.element(node)?.dyn_into::<HtmlElement>().ok()
    }

    fn computed_style(&self, node: NodeId) -> Option<CssStyleDeclaration> {
        let el = self.element(node)?;
        match self.window.get_computed_style(&el) {
            Ok(style) => style,
            Err(err) => {
                tracing::warn!(?err, ?node, "getComputedStyle failed");
                None
            }
        }
    }

    fn style_value(style: &CssStyleDeclaration, property: &str) -> f64 {
        style
            .get_property_value(property)
            .map(|v| parse_px(&v))
            .unwrap_or(0.0)
    }

    fn window_length(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
}

impl Measure for DomDocument {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn viewport_size(&self) -> Size {
        Size::new(
            Self::window_length(self.window.inner_width()),
            Self::window_length(self.window.inner_height()),
        )
    }

    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(
            self.window.page_x_offset().unwrap_or(0.0),
            self.window.page_y_offset().unwrap_or(0.0),
        )
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.element(node).map_or(Rect::ZERO, |el| {
            let r = el.get_bounding_client_rect();
            Rect::new(r.left(), r.top(), r.right(), r.bottom())
        })
    }

    fn offset_size(&self, node: NodeId) -> Size {
        self.html(node).map_or(Size::ZERO, |el| {
            Size::new(f64::from(el.offset_width()), f64::from(el.offset_height()))
        })
    }

    fn position_scheme(&self, node: NodeId) -> PositionScheme {
        self.computed_style(node)
            .and_then(|s| s.get_property_value("position").ok())
            .map_or(PositionScheme::Static, |v| PositionScheme::from_css(&v))
    }

    fn margin(&self, node: NodeId) -> Insets {
        self.computed_style(node).map_or(Insets::ZERO, |s| {
            Insets::new(
                Self::style_value(&s, "margin-left"),
                Self::style_value(&s, "margin-top"),
                Self::style_value(&s, "margin-right"),
                Self::style_value(&s, "margin-bottom"),
            )
        })
    }

    fn client_offset(&self, node: NodeId) -> Vec2 {
        self.element(node).map_or(Vec2::ZERO, |el| {
            Vec2::new(f64::from(el.client_left()), f64::from(el.client_top()))
        })
    }

    fn offset_parent(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.html(node)?.offset_parent()?;
        Some(self.register(&parent))
    }
}
