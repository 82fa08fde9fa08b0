// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing engine results into element styles.

use alloc::format;
use alloc::string::String;

use overlay_core::position::Positioned;
use overlay_core::stack::{Layer, OverlayOptions};
use web_sys::HtmlElement;

/// Sets one inline style property, logging failures.
pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        tracing::warn!(?err, property, value, "failed to set style property");
    }
}

/// Writes the coordinates of a positioning result into `top` and `left`.
///
/// The target is expected to be absolutely positioned in the frame the
/// result was computed for (document body or the host's positioned
/// ancestor).
pub fn apply_position(el: &HtmlElement, positioned: &Positioned) {
    set_style(el, "top", &format!("{}px", positioned.coordinates.top));
    set_style(el, "left", &format!("{}px", positioned.coordinates.left));
}

/// Writes the z-indices and top margin of `layer`.
///
/// Called when a window opens and again whenever it is renumbered.
pub fn apply_layer(window: &HtmlElement, backdrop: Option<&HtmlElement>, layer: Layer) {
    let style = layer.style();
    set_style(window, "z-index", &format!("{}", style.z_index));
    set_style(window, "margin-top", &format!("{}rem", style.top_margin_rem));
    if let Some(backdrop) = backdrop {
        set_style(backdrop, "z-index", &format!("{}", style.backdrop_z_index));
    }
}

/// Class list of the dialog element for the given options.
pub(crate) fn dialog_class(options: &OverlayOptions) -> String {
    match options.size {
        Some(size) => format!("modal-dialog {}", size.css_class()),
        None => String::from("modal-dialog"),
    }
}

/// Parses a computed CSS length such as `"12.5px"`.
///
/// Anything that is not a plain pixel length (`auto`, percentages, empty
/// strings) reads as `0`.
pub(crate) fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|n| n.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use overlay_core::stack::DialogSize;

    use super::*;

    #[test]
    fn parses_pixel_lengths() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px(" 0.5px "), 0.5);
        assert_eq!(parse_px("-3px"), -3.0);
    }

    #[test]
    fn non_pixel_lengths_read_as_zero() {
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px("10%"), 0.0);
        assert_eq!(parse_px("NaNpx"), 0.0);
    }

    #[test]
    fn dialog_class_includes_size() {
        assert_eq!(dialog_class(&OverlayOptions::default()), "modal-dialog");
        assert_eq!(
            dialog_class(&OverlayOptions::default().with_size(DialogSize::Small)),
            "modal-dialog modal-sm"
        );
    }
}
