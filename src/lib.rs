//! # scroll-state
//!
//! Detects what a scrollable view is doing: pulled past its top or bottom
//! edge ("bouncing"), or moving up or down ("scrolling").
//!
//! The state is computed on demand from a few measurements every scroll view
//! toolkit maintains: content offset, content inset, content size, frame size
//! and pan velocity. Anything able to report them can implement
//! [`ScrollGeometry`] and get the predicates for free; [`Snapshot`] is a
//! ready-made implementation.
//!
//! ## Examples
//!
//! ```rust
//! use scroll_state::{ScrollGeometry, ScrollState, Snapshot};
//!
//! let snapshot = Snapshot::new()
//!     .content_offset((0.0, 450.0))
//!     .content_size((320.0, 1000.0))
//!     .frame_size((320.0, 600.0));
//!
//! assert!(snapshot.is_bouncing_bottom());
//! assert_eq!(snapshot.state(), ScrollState::BouncingBottom);
//! ```
#![deny(missing_docs)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

#[macro_use]
pub mod geometry;

pub mod logger;
pub mod snapshot;
pub mod state;

mod insets;
mod tracker;
mod xy;

pub use self::geometry::{classify, ScrollGeometry};
pub use self::insets::Insets;
pub use self::snapshot::Snapshot;
pub use self::state::{ParseStateError, ScrollState, ScrollStates, BOUNCING, SCROLLING};
pub use self::tracker::{StateTracker, Transition};
pub use self::xy::{Vec2f, XY};
