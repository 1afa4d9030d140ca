//! Resize handles: anchors, edge flags, placement, and hit-testing.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::geometry::{Geometry, Point};

/// One of the eight resize handles drawn around a selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// All anchors, clockwise from north.
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Hit-test priority: corners before edge midpoints.
    const PICK_ORDER: [Self; 8] = [Self::Nw, Self::Ne, Self::Se, Self::Sw, Self::N, Self::E, Self::S, Self::W];

    /// Short token used by hosts (`"n"`, `"ne"`, ...).
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// CSS cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }

    /// Whether this anchor sits on a corner (moves two edges).
    #[must_use]
    pub fn is_corner(self) -> bool {
        matches!(self, Self::Ne | Self::Se | Self::Sw | Self::Nw)
    }
}

impl fmt::Display for ResizeAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Rejected handle token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize direction: {0:?}")]
pub struct ParseAnchorError(pub String);

impl FromStr for ResizeAnchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Self::N),
            "ne" => Ok(Self::Ne),
            "e" => Ok(Self::E),
            "se" => Ok(Self::Se),
            "s" => Ok(Self::S),
            "sw" => Ok(Self::Sw),
            "w" => Ok(Self::W),
            "nw" => Ok(Self::Nw),
            other => Err(ParseAnchorError(other.to_string())),
        }
    }
}

/// Set of element edges moved by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges(u8);

impl Edges {
    pub const NONE: Self = Self(0);
    pub const N: Self = Self(1);
    pub const S: Self = Self(1 << 1);
    pub const E: Self = Self(1 << 2);
    pub const W: Self = Self(1 << 3);

    /// True when every edge in `other` is also in `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Lenient token parse for host input.
    ///
    /// Unknown tokens yield [`Edges::NONE`], which leaves every axis unchanged.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.parse::<ResizeAnchor>() {
            Ok(anchor) => anchor.into(),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring resize direction");
                Self::NONE
            }
        }
    }
}

impl BitOr for Edges {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl From<ResizeAnchor> for Edges {
    fn from(anchor: ResizeAnchor) -> Self {
        match anchor {
            ResizeAnchor::N => Self::N,
            ResizeAnchor::Ne => Self::N | Self::E,
            ResizeAnchor::E => Self::E,
            ResizeAnchor::Se => Self::S | Self::E,
            ResizeAnchor::S => Self::S,
            ResizeAnchor::Sw => Self::S | Self::W,
            ResizeAnchor::W => Self::W,
            ResizeAnchor::Nw => Self::N | Self::W,
        }
    }
}

/// Logical position of each handle on the bounding box of `geometry`.
#[must_use]
pub fn handle_positions(geometry: &Geometry) -> [(ResizeAnchor, Point); 8] {
    let cx = geometry.left + geometry.width / 2.0;
    let cy = geometry.top + geometry.height / 2.0;
    let (l, t, r, b) = (geometry.left, geometry.top, geometry.right(), geometry.bottom());
    ResizeAnchor::ALL.map(|anchor| {
        let pt = match anchor {
            ResizeAnchor::N => Point::new(cx, t),
            ResizeAnchor::Ne => Point::new(r, t),
            ResizeAnchor::E => Point::new(r, cy),
            ResizeAnchor::Se => Point::new(r, b),
            ResizeAnchor::S => Point::new(cx, b),
            ResizeAnchor::Sw => Point::new(l, b),
            ResizeAnchor::W => Point::new(l, cy),
            ResizeAnchor::Nw => Point::new(l, t),
        };
        (anchor, pt)
    })
}

/// The handle nearest to `pt` within `radius`, if any. Corners win ties.
#[must_use]
pub fn handle_at(geometry: &Geometry, pt: Point, radius: f64) -> Option<ResizeAnchor> {
    let positions = handle_positions(geometry);
    let mut best: Option<(ResizeAnchor, f64)> = None;
    for anchor in ResizeAnchor::PICK_ORDER {
        let Some((_, hp)) = positions.iter().find(|(a, _)| *a == anchor) else {
            continue;
        };
        let dist = (pt.x - hp.x).hypot(pt.y - hp.y);
        if dist > radius {
            continue;
        }
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((anchor, dist));
        }
    }
    best.map(|(anchor, _)| anchor)
}
