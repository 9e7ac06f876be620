use crate::{ScrollGeometry, ScrollState};

/// A change of scroll state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Previous state, or `None` on the first observation.
    pub from: Option<ScrollState>,

    /// New state.
    pub to: ScrollState,
}

/// Remembers the last observed state of a view and reports changes.
///
/// Feed it from every scroll event; it only returns something when the
/// classified state differs from the previous one.
///
/// # Examples
///
/// ```rust
/// use scroll_state::{ScrollState, Snapshot, StateTracker};
///
/// let mut tracker = StateTracker::new();
/// let snapshot = Snapshot::new()
///     .content_offset((0.0, 100.0))
///     .content_size((0.0, 1000.0))
///     .frame_size((0.0, 600.0));
///
/// let first = tracker.update(&snapshot).unwrap();
/// assert_eq!(first.to, ScrollState::Unknown);
///
/// // Same state: nothing to report.
/// assert_eq!(tracker.update(&snapshot), None);
///
/// let moving = snapshot.velocity((0.0, 40.0));
/// let change = tracker.update(&moving).unwrap();
/// assert_eq!(change.from, Some(ScrollState::Unknown));
/// assert_eq!(change.to, ScrollState::ScrollingUp);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StateTracker {
    current: Option<ScrollState>,
}

impl StateTracker {
    /// Creates a new tracker with no observed state.
    pub fn new() -> Self {
        StateTracker { current: None }
    }

    /// Returns the last observed state, if any.
    pub fn current(&self) -> Option<ScrollState> {
        self.current
    }

    /// Forgets the last observed state.
    ///
    /// The next call to `update` will always report a transition.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Classifies `geometry` and returns the transition, if the state changed.
    pub fn update<G: ScrollGeometry + ?Sized>(&mut self, geometry: &G) -> Option<Transition> {
        let to = geometry.state();

        if self.current == Some(to) {
            return None;
        }

        let from = self.current.replace(to);
        match from {
            Some(from) => log::debug!("Scroll state changed: {} -> {}", from, to),
            None => log::debug!("Initial scroll state: {}", to),
        }

        Some(Transition { from, to })
    }
}
