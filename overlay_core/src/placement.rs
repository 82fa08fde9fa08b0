// Copyright 2026 the Overlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement preferences.
//!
//! A [`Placement`] names the side of the host a target should appear on
//! (the *primary* side) and how it lines up along the other axis (the
//! *secondary* alignment). `top-left` stacks the target above the host with
//! left edges aligned; plain `top` centers it horizontally.
//!
//! A [`PlacementRequest`] is an ordered list of placements to try. The
//! special value [`Placement::Auto`] stands for "every directional placement,
//! best first".

use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ParsePlacementError;

/// The side of the host a target is stacked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the host.
    Top,
    /// Below the host.
    Bottom,
    /// Left of the host.
    Left,
    /// Right of the host.
    Right,
}

impl Side {
    /// All sides, in their default ranking order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Whether the target is stacked along the vertical axis.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment along the axis perpendicular to the stacking direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Centered on the host.
    Center,
    /// Aligned with the host's left edge (for top/bottom) or top edge (for
    /// left/right).
    Start,
    /// Aligned with the host's right edge (for top/bottom) or bottom edge
    /// (for left/right).
    End,
}

/// Where a target element should appear relative to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Try every directional placement, best first.
    Auto,
    /// Above, centered.
    Top,
    /// Below, centered.
    Bottom,
    /// Left, centered.
    Left,
    /// Right, centered.
    Right,
    /// Above, left edges aligned.
    TopLeft,
    /// Above, right edges aligned.
    TopRight,
    /// Below, left edges aligned.
    BottomLeft,
    /// Below, right edges aligned.
    BottomRight,
    /// Left, top edges aligned.
    LeftTop,
    /// Left, bottom edges aligned.
    LeftBottom,
    /// Right, top edges aligned.
    RightTop,
    /// Right, bottom edges aligned.
    RightBottom,
}

impl Placement {
    /// Every placement except [`Auto`](Self::Auto): the centered primaries
    /// first, then the edge-aligned variants.
    pub const DIRECTIONAL: [Self; 12] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Combines a side and an alignment.
    #[must_use]
    pub const fn from_parts(side: Side, alignment: Alignment) -> Self {
        match (side, alignment) {
            (Side::Top, Alignment::Center) => Self::Top,
            (Side::Top, Alignment::Start) => Self::TopLeft,
            (Side::Top, Alignment::End) => Self::TopRight,
            (Side::Bottom, Alignment::Center) => Self::Bottom,
            (Side::Bottom, Alignment::Start) => Self::BottomLeft,
            (Side::Bottom, Alignment::End) => Self::BottomRight,
            (Side::Left, Alignment::Center) => Self::Left,
            (Side::Left, Alignment::Start) => Self::LeftTop,
            (Side::Left, Alignment::End) => Self::LeftBottom,
            (Side::Right, Alignment::Center) => Self::Right,
            (Side::Right, Alignment::Start) => Self::RightTop,
            (Side::Right, Alignment::End) => Self::RightBottom,
        }
    }

    /// The primary side, or `None` for [`Auto`](Self::Auto).
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Auto => None,
            Self::Top | Self::TopLeft | Self::TopRight => Some(Side::Top),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(Side::Bottom),
            Self::Left | Self::LeftTop | Self::LeftBottom => Some(Side::Left),
            Self::Right | Self::RightTop | Self::RightBottom => Some(Side::Right),
        }
    }

    /// The secondary alignment ([`Center`](Alignment::Center) for the plain
    /// sides and for [`Auto`](Self::Auto)).
    #[must_use]
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => Alignment::Start,
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                Alignment::End
            }
            _ => Alignment::Center,
        }
    }

    /// The kebab-case name (`"top-left"`, `"auto"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "auto" {
            return Ok(Self::Auto);
        }
        Self::DIRECTIONAL
            .into_iter()
            .find(|p| p.as_str() == trimmed)
            .ok_or_else(|| ParsePlacementError {
                input: s.to_owned(),
            })
    }
}

/// An ordered list of placements to try.
///
/// An empty request behaves like a lone [`Placement::Auto`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlacementRequest {
    candidates: Vec<Placement>,
}

impl PlacementRequest {
    /// Creates a request from placements in preference order.
    #[must_use]
    pub fn new(candidates: impl IntoIterator<Item = Placement>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// A request for the best available placement.
    #[must_use]
    pub fn auto() -> Self {
        Self::new([Placement::Auto])
    }

    /// The placements as given, `auto` entries unexpanded.
    #[must_use]
    pub fn candidates(&self) -> &[Placement] {
        &self.candidates
    }

    /// Whether the request contains no explicit placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether any entry is [`Placement::Auto`], or the request is empty.
    #[must_use]
    pub fn has_auto(&self) -> bool {
        self.candidates.is_empty() || self.candidates.contains(&Placement::Auto)
    }
}

impl From<Placement> for PlacementRequest {
    fn from(placement: Placement) -> Self {
        Self::new([placement])
    }
}

impl From<&[Placement]> for PlacementRequest {
    fn from(candidates: &[Placement]) -> Self {
        Self::new(candidates.iter().copied())
    }
}

impl<const N: usize> From<[Placement; N]> for PlacementRequest {
    fn from(candidates: [Placement; N]) -> Self {
        Self::new(candidates)
    }
}

impl FromStr for PlacementRequest {
    type Err = ParsePlacementError;

    /// Parses a whitespace-separated list such as `"top-left bottom auto"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Placement::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(|candidates| Self { candidates })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Placement::DIRECTIONAL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p));
            assert_eq!(p.to_string(), p.as_str());
        }
        assert_eq!("auto".parse::<Placement>(), Ok(Placement::Auto));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "middle".parse::<Placement>().unwrap_err();
        assert_eq!(err.input, "middle");
        assert_eq!(err.to_string(), "unknown placement `middle`");
    }

    #[test]
    fn parts_recombine() {
        for p in Placement::DIRECTIONAL {
            let side = p.side().expect("directional placements have a side");
            assert_eq!(Placement::from_parts(side, p.alignment()), p);
        }
        assert_eq!(Placement::Auto.side(), None);
    }

    #[test]
    fn secondary_alignment() {
        assert_eq!(Placement::TopLeft.alignment(), Alignment::Start);
        assert_eq!(Placement::LeftBottom.alignment(), Alignment::End);
        assert_eq!(Placement::Right.alignment(), Alignment::Center);
        assert!(Side::Bottom.is_vertical());
        assert!(!Side::Left.is_vertical());
    }

    #[test]
    fn request_parses_space_separated_list() {
        let req: PlacementRequest = "top-left  bottom auto".parse().unwrap();
        assert_eq!(
            req.candidates(),
            &[Placement::TopLeft, Placement::Bottom, Placement::Auto]
        );
        assert!(req.has_auto());
        assert!("top sideways".parse::<PlacementRequest>().is_err());
    }

    #[test]
    fn empty_request_means_auto() {
        let req: PlacementRequest = "".parse().unwrap();
        assert!(req.is_empty());
        assert!(req.has_auto());
        assert!(!PlacementRequest::from(Placement::Left).has_auto());
    }

    #[test]
    fn request_conversions() {
        let from_array = PlacementRequest::from([Placement::Top, Placement::Right]);
        let from_slice = PlacementRequest::from(&[Placement::Top, Placement::Right][..]);
        assert_eq!(from_array, from_slice);
        assert_eq!(
            PlacementRequest::auto().candidates().to_vec(),
            vec![Placement::Auto]
        );
    }
}
