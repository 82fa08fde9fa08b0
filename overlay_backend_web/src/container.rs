// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM window container.
//!
//! Creates the backdrop and window elements of each overlay window inside a
//! host element (usually `<body>`) and removes them when the stack reports
//! the window closed. Each window is rendered as
//!
//! ```text
//! div.modal-backdrop.fade.in          (z = backdrop z-index, if rendered)
//! div.modal.fade.in[role=dialog]      (z = window z-index, margin-top = layer rem)
//!   div.modal-dialog[.modal-sm|.modal-lg]
//!     div.modal-content               (filled by the content renderer)
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use overlay_core::backend::{Container, FocusHost, FocusTarget};
use overlay_core::measure::NodeId;
use overlay_core::stack::{ClickTarget, ContentId, Layer, Layers, OverlayOptions, WindowId};
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement, Node};

use crate::document::DomDocument;
use crate::style::{apply_layer, dialog_class, set_style};

/// Fills the content element of a new window.
pub type ContentRenderer = Box<dyn FnMut(ContentId, &Element)>;

struct WindowElements {
    generation: u32,
    window: HtmlElement,
    content: Option<HtmlElement>,
    backdrop: Option<HtmlElement>,
}

/// Focus-restore targets captured on open, in recycled slots.
///
/// Kept apart from the [`DomDocument`] registry so that elements of closed
/// windows are dropped as soon as the stack releases them.
#[derive(Debug)]
struct CapturedNodes<T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
}

impl<T> CapturedNodes<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    fn capture(&mut self, value: T) -> NodeId {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(value);
            return NodeId(idx);
        }
        self.slots.push(Some(value));
        NodeId(u32::try_from(self.slots.len() - 1).unwrap_or(u32::MAX))
    }

    fn get(&self, node: NodeId) -> Option<&T> {
        self.slots.get(node.0 as usize)?.as_ref()
    }

    fn release(&mut self, node: NodeId) -> Option<T> {
        let value = self.slots.get_mut(node.0 as usize)?.take()?;
        self.free.push(node.0);
        Some(value)
    }

    fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

/// Content clicks never dismiss; anything else inside the window counts as
/// a backdrop click. Clicks on unknown windows are treated as content.
fn classify_click(inside_content: Option<bool>) -> ClickTarget {
    match inside_content {
        Some(false) => ClickTarget::Backdrop,
        Some(true) | None => ClickTarget::Content,
    }
}

/// A [`Container`] that renders windows as DOM elements.
///
/// Also implements [`FocusHost`]: focus moves to the window element on open
/// and back to the previously focused element on close, and `<body>` gets
/// the `modal-open` class while any window is open.
pub struct DomContainer {
    document: Rc<DomDocument>,
    host: Element,
    render: ContentRenderer,
    windows: Vec<Option<WindowElements>>,
    captured: CapturedNodes<Element>,
}

impl core::fmt::Debug for DomContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomContainer")
            .field("host", &"Element")
            .field("windows_len", &self.windows.iter().flatten().count())
            .field("captured_len", &self.captured.len())
            .finish_non_exhaustive()
    }
}

impl DomContainer {
    /// Creates a container that appends windows to `host`.
    ///
    /// `render` is called once per window with its content handle and the
    /// empty `.modal-content` element.
    #[must_use]
    pub fn new(
        document: Rc<DomDocument>,
        host: Element,
        render: impl FnMut(ContentId, &Element) + 'static,
    ) -> Self {
        Self {
            document,
            host,
            render: Box::new(render),
            windows: Vec::new(),
            captured: CapturedNodes::new(),
        }
    }

    /// The document this container measures and focuses through.
    #[must_use]
    pub fn document(&self) -> &Rc<DomDocument> {
        &self.document
    }

    /// Returns the window element of a live window.
    #[must_use]
    pub fn window_element(&self, window: WindowId) -> Option<&HtmlElement> {
        self.entry(window).map(|e| &e.window)
    }

    /// Returns the backdrop element of a live window, if it has one.
    #[must_use]
    pub fn backdrop_element(&self, window: WindowId) -> Option<&HtmlElement> {
        self.entry(window).and_then(|e| e.backdrop.as_ref())
    }

    /// Classifies a click on a window for
    /// [`OverlayStack::handle_click`](overlay_core::stack::OverlayStack::handle_click).
    ///
    /// Clicks inside `.modal-content` are content clicks. Clicks anywhere
    /// else in the window (the surrounding area or the `.modal-dialog`
    /// wrapper) count as backdrop clicks.
    #[must_use]
    pub fn click_target(&self, window: WindowId, target: &Element) -> ClickTarget {
        let target: &Node = target;
        let inside_content = self.entry(window).map(|e| {
            e.content
                .as_ref()
                .is_some_and(|content| content.contains(Some(target)))
        });
        classify_click(inside_content)
    }

    fn entry(&self, window: WindowId) -> Option<&WindowElements> {
        self.windows
            .get(window.index() as usize)?
            .as_ref()
            .filter(|e| e.generation == window.generation())
    }

    fn take_entry(&mut self, window: WindowId) -> Option<WindowElements> {
        let slot = self.windows.get_mut(window.index() as usize)?;
        if slot.as_ref()?.generation != window.generation() {
            return None;
        }
        slot.take()
    }

    fn put_entry(&mut self, window: WindowId, entry: WindowElements) {
        let slot = window.index() as usize;
        if self.windows.len() <= slot {
            self.windows.resize_with(slot + 1, || None);
        }
        self.windows[slot] = Some(entry);
    }

    fn create_div(&self, class: &str) -> Option<HtmlElement> {
        match self.document.document().create_element("div") {
            Ok(el) => {
                el.set_class_name(class);
                Some(el.unchecked_into())
            }
            Err(err) => {
                tracing::warn!(?err, class, "failed to create element");
                None
            }
        }
    }

    fn append(parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            tracing::warn!(?err, "failed to append element");
        }
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.document().body()
    }
}

impl Container for DomContainer {
    fn open(&mut self, window: WindowId, content: ContentId, options: &OverlayOptions, layer: Layer) {
        let backdrop = if options.backdrop.is_rendered() {
            self.create_div("modal-backdrop fade in")
        } else {
            None
        };
        let Some(window_el) = self.create_div("modal fade in") else {
            return;
        };
        for (name, value) in [("role", "dialog"), ("tabindex", "-1")] {
            if let Err(err) = window_el.set_attribute(name, value) {
                tracing::warn!(?err, name, "failed to set attribute");
            }
        }
        set_style(&window_el, "display", "block");

        let dialog = self.create_div(&dialog_class(options));
        let content_el = match (&dialog, self.create_div("modal-content")) {
            (Some(dialog), Some(content_el)) => {
                (self.render)(content, &content_el);
                Self::append(dialog, &content_el);
                Self::append(&window_el, dialog);
                Some(content_el)
            }
            _ => None,
        };

        apply_layer(&window_el, backdrop.as_ref(), layer);
        if let Some(backdrop) = &backdrop {
            Self::append(&self.host, backdrop);
        }
        Self::append(&self.host, &window_el);

        self.put_entry(
            window,
            WindowElements {
                generation: window.generation(),
                window: window_el,
                content: content_el,
                backdrop,
            },
        );
    }

    fn window_closed(&mut self, window: WindowId, remaining: Layers<'_>) {
        if let Some(entry) = self.take_entry(window) {
            entry.window.remove();
            if let Some(backdrop) = entry.backdrop {
                backdrop.remove();
            }
        }
        for (id, layer) in remaining {
            if let Some(entry) = self.entry(id) {
                apply_layer(&entry.window, entry.backdrop.as_ref(), layer);
            }
        }
    }

    fn focus_host(&mut self) -> Option<&mut dyn FocusHost> {
        Some(self)
    }
}

impl FocusHost for DomContainer {
    fn active_element(&mut self) -> Option<NodeId> {
        let active = self.document.document().active_element()?;
        Some(self.captured.capture(active))
    }

    fn is_attached(&self, node: NodeId) -> bool {
        match (self.body(), self.captured.get(node)) {
            (Some(body), Some(el)) => {
                let node: &Node = el;
                body.contains(Some(node))
            }
            _ => false,
        }
    }

    fn window_contains_focus(&self, window: WindowId) -> bool {
        let Some(active) = self.document.document().active_element() else {
            return false;
        };
        let active: &Node = &active;
        self.window_element(window)
            .is_some_and(|el| el.contains(Some(active)))
    }

    fn focus(&mut self, target: FocusTarget) {
        let el = match target {
            FocusTarget::Node(node) => self
                .captured
                .get(node)
                .and_then(|el| el.dyn_ref::<HtmlElement>())
                .cloned(),
            FocusTarget::Window(window) => self.window_element(window).cloned(),
            FocusTarget::Body => self.body(),
        };
        match el {
            Some(el) => {
                if let Err(err) = el.focus() {
                    tracing::warn!(?err, ?target, "failed to move focus");
                }
            }
            None => tracing::warn!(?target, "focus target is not an HTML element"),
        }
    }

    fn release(&mut self, node: NodeId) {
        if self.captured.release(node).is_none() {
            tracing::warn!(?node, "released an unknown focus handle");
        }
    }

    fn set_modal_open(&mut self, open: bool) {
        let Some(body) = self.body() else {
            return;
        };
        if let Err(err) = body.class_list().toggle_with_force("modal-open", open) {
            tracing::warn!(?err, open, "failed to toggle modal-open");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_outside_content_are_backdrop_clicks() {
        // The `.modal` element itself and the `.modal-dialog` wrapper both
        // lie outside `.modal-content`.
        assert_eq!(classify_click(Some(false)), ClickTarget::Backdrop);
    }

    #[test]
    fn clicks_inside_content_are_content_clicks() {
        assert_eq!(classify_click(Some(true)), ClickTarget::Content);
    }

    #[test]
    fn clicks_on_unknown_windows_never_dismiss() {
        assert_eq!(classify_click(None), ClickTarget::Content);
    }

    #[test]
    fn released_nodes_are_dropped() {
        let mut nodes = CapturedNodes::new();
        let a = nodes.capture("a");
        let b = nodes.capture("b");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes.get(a), Some(&"a"));

        assert_eq!(nodes.release(b), Some("b"));
        assert_eq!(nodes.get(b), None);
        assert_eq!(nodes.release(b), None);
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn capture_release_cycles_do_not_grow() {
        let mut nodes = CapturedNodes::new();
        let outer = nodes.capture(0_u32);
        for i in 1..100 {
            let inner = nodes.capture(i);
            assert_eq!(nodes.release(inner), Some(i));
        }
        assert_eq!(nodes.slots.len(), 2);
        assert_eq!(nodes.release(outer), Some(0));
        assert_eq!(nodes.len(), 0);
    }
}
