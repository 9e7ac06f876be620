//! Scroll state flags.
//!
//! A [`ScrollState`] is one of the flags describing what a scrollable view is
//! currently doing. Flags can be combined in a [`ScrollStates`] set, which is
//! backed by a bitmask:
//!
//! | Flag             | Bit |
//! |------------------|-----|
//! | `BouncingTop`    | 0   |
//! | `BouncingBottom` | 1   |
//! | `ScrollingUp`    | 2   |
//! | `ScrollingDown`  | 3   |
//! | `Unknown`        | 10  |
//!
//! [`BOUNCING`] and [`SCROLLING`] are unions of the two bouncing (resp.
//! scrolling) flags. They are sets, not flags: a classifier never reports
//! them directly.
use enumset::{enum_set, EnumSet, EnumSetType};
use std::fmt;
use std::str::FromStr;

/// A set of scroll flags.
pub type ScrollStates = EnumSet<ScrollState>;

/// Both edge-overscroll flags.
pub const BOUNCING: ScrollStates =
    enum_set!(ScrollState::BouncingTop | ScrollState::BouncingBottom);

/// Both directional motion flags.
pub const SCROLLING: ScrollStates =
    enum_set!(ScrollState::ScrollingUp | ScrollState::ScrollingDown);

/// State of a scrollable view.
///
/// The discriminant of each variant is its bit position in [`ScrollStates`].
#[allow(clippy::derived_hash_with_manual_eq)] // We do derive it through EnumSetType
#[derive(EnumSetType, Debug, Hash)]
pub enum ScrollState {
    /// The view is pulled past its top edge.
    BouncingTop = 0,

    /// The view is pulled past its bottom edge.
    BouncingBottom = 1,

    /// The pan gesture moves with a positive vertical velocity.
    ScrollingUp = 2,

    /// The pan gesture moves with a negative vertical velocity.
    ScrollingDown = 3,

    /// None of the other flags apply.
    Unknown = 10,
}

impl ScrollState {
    /// All flags, in classification priority order.
    pub const ALL: [ScrollState; 5] = [
        ScrollState::BouncingTop,
        ScrollState::BouncingBottom,
        ScrollState::ScrollingUp,
        ScrollState::ScrollingDown,
        ScrollState::Unknown,
    ];

    /// Returns `true` if this is `BouncingTop` or `BouncingBottom`.
    pub fn is_bouncing(self) -> bool {
        BOUNCING.contains(self)
    }

    /// Returns `true` if this is `ScrollingUp` or `ScrollingDown`.
    pub fn is_scrolling(self) -> bool {
        SCROLLING.contains(self)
    }

    /// Returns the raw bitmask value of this single flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scroll_state::ScrollState;
    /// assert_eq!(ScrollState::ScrollingUp.bits(), 4);
    /// assert_eq!(ScrollState::Unknown.bits(), 1 << 10);
    /// ```
    pub fn bits(self) -> u16 {
        EnumSet::only(self).as_u16()
    }

    /// Returns the snake_case name of this flag.
    pub fn name(self) -> &'static str {
        match self {
            ScrollState::BouncingTop => "bouncing_top",
            ScrollState::BouncingBottom => "bouncing_bottom",
            ScrollState::ScrollingUp => "scrolling_up",
            ScrollState::ScrollingDown => "scrolling_down",
            ScrollState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized state name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStateError(String);

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scroll state: `{}`", self.0)
    }
}

impl std::error::Error for ParseStateError {}

impl FromStr for ScrollState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "BouncingTop" | "bouncing_top" => ScrollState::BouncingTop,
            "BouncingBottom" | "bouncing_bottom" => ScrollState::BouncingBottom,
            "ScrollingUp" | "scrolling_up" => ScrollState::ScrollingUp,
            "ScrollingDown" | "scrolling_down" => ScrollState::ScrollingDown,
            "Unknown" | "unknown" => ScrollState::Unknown,
            _ => return Err(ParseStateError(s.to_string())),
        })
    }
}
