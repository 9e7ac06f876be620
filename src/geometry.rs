//! Classification of a scrollable view's geometry.
//!
//! This module defines:
//!
//! * [`ScrollGeometry`]: a trait for anything able to report the current
//!   geometry and pan velocity of a scrollable view. All the classification
//!   predicates are provided methods on this trait.
//! * [`classify`]: a free function returning the single [`ScrollState`] of a
//!   geometry.
//! * [`impl_scroll_geometry!`]: implements `ScrollGeometry` for a type
//!   embedding a [`Snapshot`](crate::Snapshot).
//!
//! All coordinates follow the host toolkit: offsets grow downward into the
//! content, and the velocity is measured relative to the view's parent.
use crate::state::{ScrollState, ScrollStates};
use crate::{Insets, Vec2f};

/// Describes something whose scroll state can be classified.
///
/// Implementors only provide the raw measurements; every predicate is
/// computed from them on each call, nothing is cached.
///
/// # Examples
///
/// ```rust
/// use scroll_state::{Insets, ScrollGeometry, ScrollState, Vec2f};
///
/// struct Pulled;
///
/// impl ScrollGeometry for Pulled {
///     fn content_offset(&self) -> Vec2f { Vec2f::new(0.0, -10.0) }
///     fn content_inset(&self) -> Insets { Insets::top(5.0) }
///     fn content_size(&self) -> Vec2f { Vec2f::new(320.0, 1000.0) }
///     fn frame_size(&self) -> Vec2f { Vec2f::new(320.0, 600.0) }
///     fn velocity(&self) -> Vec2f { Vec2f::zero() }
/// }
///
/// assert!(Pulled.is_bouncing_top());
/// assert_eq!(Pulled.state(), ScrollState::BouncingTop);
/// ```
pub trait ScrollGeometry {
    /// Current content offset.
    fn content_offset(&self) -> Vec2f;

    /// Inset around the content.
    fn content_inset(&self) -> Insets;

    /// Total size of the content.
    fn content_size(&self) -> Vec2f;

    /// Size of the visible frame.
    fn frame_size(&self) -> Vec2f;

    /// Current pan velocity, relative to the view's parent.
    fn velocity(&self) -> Vec2f;

    /// Largest vertical offset that does not go past the bottom edge.
    fn offset_bottom_limit(&self) -> f64 {
        self.content_size().y - self.frame_size().y
    }

    /// Returns `true` if the view is pulled past its top edge.
    fn is_bouncing_top(&self) -> bool {
        self.content_offset().y <= -self.content_inset().top
    }

    /// Returns `true` if the view is pulled past its bottom edge.
    fn is_bouncing_bottom(&self) -> bool {
        self.content_offset().y >= self.offset_bottom_limit()
    }

    /// Returns `true` if the view is pulled past either vertical edge.
    fn is_bouncing(&self) -> bool {
        self.is_bouncing_top() || self.is_bouncing_bottom()
    }

    /// Returns `true` if the vertical velocity is strictly positive.
    ///
    /// A positive velocity is reported as scrolling *up*. This follows the
    /// host toolkit's axis orientation and must not be flipped.
    fn is_scrolling_up(&self) -> bool {
        self.velocity().y > 0.0
    }

    /// Returns `true` if the vertical velocity is strictly negative.
    fn is_scrolling_down(&self) -> bool {
        self.velocity().y < 0.0
    }

    /// Returns `true` if the view has any vertical velocity.
    fn is_scrolling(&self) -> bool {
        self.is_scrolling_up() || self.is_scrolling_down()
    }

    /// Returns the current state of the view.
    ///
    /// Checks are made in order: `BouncingTop`, `BouncingBottom`,
    /// `ScrollingUp`, `ScrollingDown`. The first one to hold wins; if none
    /// does, `Unknown` is returned.
    fn state(&self) -> ScrollState {
        if self.is_bouncing_top() {
            ScrollState::BouncingTop
        } else if self.is_bouncing_bottom() {
            ScrollState::BouncingBottom
        } else if self.is_scrolling_up() {
            ScrollState::ScrollingUp
        } else if self.is_scrolling_down() {
            ScrollState::ScrollingDown
        } else {
            ScrollState::Unknown
        }
    }

    /// Returns every flag that currently holds.
    ///
    /// Unlike [`state()`](ScrollGeometry::state), this does not stop at the
    /// first match. The result is `{Unknown}` if nothing holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scroll_state::{Insets, ScrollGeometry, ScrollState, Snapshot};
    ///
    /// let snapshot = Snapshot::new()
    ///     .content_offset((0.0, -10.0))
    ///     .content_inset(Insets::top(5.0))
    ///     .content_size((320.0, 1000.0))
    ///     .frame_size((320.0, 600.0))
    ///     .velocity((0.0, 50.0));
    ///
    /// assert_eq!(snapshot.state(), ScrollState::BouncingTop);
    /// assert_eq!(
    ///     snapshot.flags(),
    ///     ScrollState::BouncingTop | ScrollState::ScrollingUp
    /// );
    /// ```
    fn flags(&self) -> ScrollStates {
        let mut flags = ScrollStates::new();

        if self.is_bouncing_top() {
            flags.insert(ScrollState::BouncingTop);
        }
        if self.is_bouncing_bottom() {
            flags.insert(ScrollState::BouncingBottom);
        }
        if self.is_scrolling_up() {
            flags.insert(ScrollState::ScrollingUp);
        }
        if self.is_scrolling_down() {
            flags.insert(ScrollState::ScrollingDown);
        }

        if flags.is_empty() {
            flags.insert(ScrollState::Unknown);
        }

        flags
    }
}

impl<T: ScrollGeometry + ?Sized> ScrollGeometry for &T {
    fn content_offset(&self) -> Vec2f {
        (**self).content_offset()
    }

    fn content_inset(&self) -> Insets {
        (**self).content_inset()
    }

    fn content_size(&self) -> Vec2f {
        (**self).content_size()
    }

    fn frame_size(&self) -> Vec2f {
        (**self).frame_size()
    }

    fn velocity(&self) -> Vec2f {
        (**self).velocity()
    }
}

/// Returns the current state of `geometry`.
///
/// Same as calling [`ScrollGeometry::state`].
pub fn classify<G: ScrollGeometry + ?Sized>(geometry: &G) -> ScrollState {
    geometry.state()
}

/// Implements the `ScrollGeometry` trait for a type embedding a `Snapshot`.
///
/// # Examples
///
/// ```rust
/// use scroll_state::{ScrollGeometry, ScrollState, Snapshot};
///
/// struct FeedView {
///     title: String,
///     geometry: Snapshot,
/// }
///
/// scroll_state::impl_scroll_geometry!(FeedView::geometry);
///
/// let view = FeedView {
///     title: "Feed".into(),
///     geometry: Snapshot::new()
///         .content_offset((0.0, 1.0))
///         .content_size((0.0, 10.0))
///         .velocity((0.0, -3.0)),
/// };
///
/// assert_eq!(view.title, "Feed");
/// assert_eq!(view.state(), ScrollState::ScrollingDown);
/// ```
#[macro_export]
macro_rules! impl_scroll_geometry {
    ($class:ident :: $field:ident) => {
        $crate::impl_scroll_geometry!(@body $class, $field, []);
    };
    ($class:ident < $($args:tt),* > :: $field:ident) => {
        $crate::impl_scroll_geometry!(@body $class<$($args),*>, $field, [$($args),*]);
    };
    (@body $ty:ty, $field:ident, [$($args:tt),*]) => {
        impl <$( $args ),* > $crate::ScrollGeometry for $ty {
            fn content_offset(&self) -> $crate::Vec2f {
                $crate::ScrollGeometry::content_offset(&self.$field)
            }
            fn content_inset(&self) -> $crate::Insets {
                $crate::ScrollGeometry::content_inset(&self.$field)
            }
            fn content_size(&self) -> $crate::Vec2f {
                $crate::ScrollGeometry::content_size(&self.$field)
            }
            fn frame_size(&self) -> $crate::Vec2f {
                $crate::ScrollGeometry::frame_size(&self.$field)
            }
            fn velocity(&self) -> $crate::Vec2f {
                $crate::ScrollGeometry::velocity(&self.$field)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BOUNCING, SCROLLING};
    use crate::Snapshot;

    fn within_bounds() -> Snapshot {
        Snapshot::new()
            .content_offset((0.0, 100.0))
            .content_size((320.0, 1000.0))
            .frame_size((320.0, 600.0))
    }

    #[test]
    fn test_bouncing_top() {
        let snapshot = Snapshot::new()
            .content_offset((0.0, -10.0))
            .content_inset(Insets::top(5.0))
            .content_size((320.0, 1000.0))
            .frame_size((320.0, 600.0));

        assert!(snapshot.is_bouncing_top());
        assert!(snapshot.is_bouncing());
        assert_eq!(snapshot.state(), ScrollState::BouncingTop);
    }

    #[test]
    fn test_bouncing_top_boundary() {
        for (y, top, expected) in [
            (-5.0, 5.0, true),
            (-4.9, 5.0, false),
            (0.0, 0.0, true),
            (0.1, 0.0, false),
            (-20.0, 5.0, true),
        ] {
            let snapshot = within_bounds()
                .content_offset((0.0, y))
                .content_inset(Insets::top(top));
            assert_eq!(snapshot.is_bouncing_top(), expected, "y={y} top={top}");
        }
    }

    #[test]
    fn test_bouncing_bottom() {
        let snapshot = within_bounds().content_offset((0.0, 450.0));

        assert_eq!(snapshot.offset_bottom_limit(), 400.0);
        assert!(!snapshot.is_bouncing_top());
        assert!(snapshot.is_bouncing_bottom());
        assert_eq!(snapshot.state(), ScrollState::BouncingBottom);

        // The limit itself counts as bouncing.
        let at_limit = within_bounds().content_offset((0.0, 400.0));
        assert!(at_limit.is_bouncing_bottom());

        let below = within_bounds().content_offset((0.0, 399.5));
        assert!(!below.is_bouncing_bottom());
    }

    #[test]
    fn test_scrolling_up() {
        let snapshot = within_bounds().velocity((0.0, 50.0));

        assert!(!snapshot.is_bouncing());
        assert!(snapshot.is_scrolling_up());
        assert!(!snapshot.is_scrolling_down());
        assert_eq!(snapshot.state(), ScrollState::ScrollingUp);
    }

    #[test]
    fn test_scrolling_down() {
        let snapshot = within_bounds().velocity((0.0, -0.5));

        assert!(snapshot.is_scrolling_down());
        assert!(snapshot.is_scrolling());
        assert_eq!(snapshot.state(), ScrollState::ScrollingDown);
    }

    #[test]
    fn test_unknown() {
        let snapshot = within_bounds();

        assert!(!snapshot.is_scrolling_up());
        assert!(!snapshot.is_scrolling_down());
        assert!(!snapshot.is_scrolling());
        assert_eq!(snapshot.state(), ScrollState::Unknown);
        assert_eq!(snapshot.flags(), ScrollStates::only(ScrollState::Unknown));
    }

    #[test]
    fn test_horizontal_velocity_ignored() {
        let snapshot = within_bounds().velocity((120.0, 0.0));
        assert!(!snapshot.is_scrolling());
        assert_eq!(snapshot.state(), ScrollState::Unknown);
    }

    #[test]
    fn test_bouncing_wins_over_scrolling() {
        let top = within_bounds()
            .content_offset((0.0, -1.0))
            .velocity((0.0, -30.0));
        assert_eq!(top.state(), ScrollState::BouncingTop);

        let bottom = within_bounds()
            .content_offset((0.0, 500.0))
            .velocity((0.0, 30.0));
        assert_eq!(bottom.state(), ScrollState::BouncingBottom);
    }

    #[test]
    fn test_top_checked_before_bottom() {
        // Content shorter than the frame: both edges are past at offset 0.
        let snapshot = Snapshot::new()
            .content_size((320.0, 100.0))
            .frame_size((320.0, 600.0));

        assert!(snapshot.is_bouncing_top());
        assert!(snapshot.is_bouncing_bottom());
        assert_eq!(snapshot.state(), ScrollState::BouncingTop);
        assert_eq!(snapshot.flags(), BOUNCING);
    }

    #[test]
    fn test_state_is_single_flag() {
        let offsets = [-50.0, -5.0, 0.0, 100.0, 400.0, 900.0];
        let velocities = [-10.0, 0.0, 10.0];

        for &y in &offsets {
            for &v in &velocities {
                let snapshot = within_bounds()
                    .content_offset((0.0, y))
                    .content_inset(Insets::top(5.0))
                    .velocity((0.0, v));
                let state = snapshot.state();

                assert_eq!(state, snapshot.state());
                assert_eq!(
                    snapshot.is_bouncing(),
                    snapshot.is_bouncing_top() || snapshot.is_bouncing_bottom()
                );
                assert_eq!(
                    snapshot.is_scrolling(),
                    snapshot.is_scrolling_up() || snapshot.is_scrolling_down()
                );

                let flags = snapshot.flags();
                if state == ScrollState::Unknown {
                    assert_eq!(flags, ScrollStates::only(ScrollState::Unknown));
                } else {
                    assert!(flags.contains(state));
                    assert!(!flags.contains(ScrollState::Unknown));
                }
                assert!(flags.intersection(SCROLLING).len() <= 1);
            }
        }
    }

    #[test]
    fn test_nan_is_unknown() {
        let snapshot = Snapshot::new()
            .content_offset((0.0, f64::NAN))
            .velocity((0.0, f64::NAN));
        assert_eq!(classify(&snapshot), ScrollState::Unknown);
    }

    #[test]
    fn test_by_reference() {
        let snapshot = within_bounds().velocity((0.0, 1.0));
        let by_ref: &dyn ScrollGeometry = &snapshot;
        assert_eq!(classify(by_ref), ScrollState::ScrollingUp);
        assert_eq!(classify(&&snapshot), ScrollState::ScrollingUp);
    }

    struct Wrapper {
        core: Snapshot,
    }

    crate::impl_scroll_geometry!(Wrapper::core);

    #[test]
    fn test_macro() {
        let wrapper = Wrapper {
            core: within_bounds().content_offset((0.0, 401.0)),
        };
        assert_eq!(wrapper.state(), ScrollState::BouncingBottom);
    }
}
