// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-window options, lifecycle states and outcomes.

/// How a window's backdrop behaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backdrop {
    /// No backdrop is rendered.
    Disabled,
    /// A backdrop is rendered but clicks on it are ignored.
    Static,
    /// A backdrop is rendered and clicking it dismisses the window.
    #[default]
    Dismissible,
}

impl Backdrop {
    /// Whether a backdrop element is rendered at all.
    #[inline]
    #[must_use]
    pub const fn is_rendered(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Preset dialog widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialogSize {
    /// A narrow dialog.
    Small,
    /// A wide dialog.
    Large,
}

impl DialogSize {
    /// The CSS class that selects this size on the dialog element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Small => "modal-sm",
            Self::Large => "modal-lg",
        }
    }
}

/// Options passed to [`OverlayStack::open`](super::OverlayStack::open).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayOptions {
    /// Backdrop mode.
    pub backdrop: Backdrop,
    /// Whether the escape key dismisses the window.
    pub keyboard: bool,
    /// Preset width, or `None` for the default width.
    pub size: Option<DialogSize>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            backdrop: Backdrop::Dismissible,
            keyboard: true,
            size: None,
        }
    }
}

impl OverlayOptions {
    /// Sets the backdrop mode.
    #[must_use]
    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Enables or disables escape-key dismissal.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Sets the preset width.
    #[must_use]
    pub fn with_size(mut self, size: DialogSize) -> Self {
        self.size = Some(size);
        self
    }
}

/// Lifecycle state of a window.
///
/// Transitions only move forward:
/// `Opening → Open → Closing → Closed`. `Closed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowState {
    /// The container is instantiating the window.
    Opening,
    /// The window is shown and accepts dismissal.
    Open,
    /// The window was dismissed or closed; its render artifacts are being
    /// torn down.
    Closing,
    /// The window is gone.
    Closed,
}

/// Why a window was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// The backdrop was clicked.
    BackdropClick,
    /// The escape key was pressed.
    Esc,
    /// The application dismissed the window.
    Programmatic,
}

/// How a window finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowOutcome {
    /// The window completed normally.
    Closed,
    /// The window was dismissed.
    Dismissed(DismissReason),
}

/// Where a pointer click landed within a window's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// Anywhere in the window outside the dialog content.
    Backdrop,
    /// Inside the dialog content.
    Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = OverlayOptions::default();
        assert_eq!(o.backdrop, Backdrop::Dismissible);
        assert!(o.keyboard);
        assert_eq!(o.size, None);
    }

    #[test]
    fn builders() {
        let o = OverlayOptions::default()
            .with_backdrop(Backdrop::Static)
            .with_keyboard(false)
            .with_size(DialogSize::Large);
        assert_eq!(o.backdrop, Backdrop::Static);
        assert!(!o.keyboard);
        assert_eq!(o.size.map(DialogSize::css_class), Some("modal-lg"));
    }

    #[test]
    fn only_disabled_backdrop_is_not_rendered() {
        assert!(!Backdrop::Disabled.is_rendered());
        assert!(Backdrop::Static.is_rendered());
        assert!(Backdrop::Dismissible.is_rendered());
    }
}
