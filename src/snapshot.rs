//! Owned geometry snapshots.
//!
//! A [`Snapshot`] captures the measurements of a scrollable view at one
//! point in time. It implements [`ScrollGeometry`], so it can be classified
//! directly, and is cheap to copy around between event callbacks.
//!
//! ## Loading snapshots from toml
//!
//! This requires the `toml` feature to be enabled.
//!
//! ```toml
//! [dependencies]
//! scroll-state = { version = "*", features = ["toml"] }
//! ```
//!
//! Every key is optional and defaults to zero. Values can be integers or
//! floats:
//!
//! ```toml
//! content_offset = { x = 0, y = -10 }
//! content_inset  = { top = 5, bottom = 0, left = 0, right = 0 }
//! content_size   = { x = 320, y = 1000 }
//! frame_size     = { x = 320, y = 600 }
//! velocity       = { x = 0, y = 50 }
//! ```
use crate::{Insets, ScrollGeometry, Vec2f};

#[cfg(feature = "toml")]
use std::fs::File;
#[cfg(feature = "toml")]
use std::io::{self, Read};
#[cfg(feature = "toml")]
use std::path::Path;

/// Measurements of a scrollable view at one point in time.
///
/// # Examples
///
/// ```rust
/// use scroll_state::{ScrollGeometry, ScrollState, Snapshot};
///
/// let snapshot = Snapshot::new()
///     .content_offset((0.0, 100.0))
///     .content_size((320.0, 1000.0))
///     .frame_size((320.0, 600.0))
///     .velocity((0.0, 50.0));
///
/// assert_eq!(snapshot.state(), ScrollState::ScrollingUp);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Snapshot {
    /// Offset of the visible area into the content.
    pub content_offset: Vec2f,

    /// Extra space around the content.
    pub content_inset: Insets,

    /// Size of the whole content.
    pub content_size: Vec2f,

    /// Size of the visible frame.
    pub frame_size: Vec2f,

    /// Pan velocity, relative to the view's parent.
    pub velocity: Vec2f,
}

impl Snapshot {
    /// Creates a new snapshot with every measurement set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the measurements of any `ScrollGeometry`.
    pub fn capture<G: ScrollGeometry + ?Sized>(geometry: &G) -> Self {
        Snapshot {
            content_offset: geometry.content_offset(),
            content_inset: geometry.content_inset(),
            content_size: geometry.content_size(),
            frame_size: geometry.frame_size(),
            velocity: geometry.velocity(),
        }
    }

    /// Sets the content offset.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn content_offset<V: Into<Vec2f>>(mut self, offset: V) -> Self {
        self.content_offset = offset.into();
        self
    }

    /// Sets the content inset.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn content_inset(mut self, inset: Insets) -> Self {
        self.content_inset = inset;
        self
    }

    /// Sets the content size.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn content_size<V: Into<Vec2f>>(mut self, size: V) -> Self {
        self.content_size = size.into();
        self
    }

    /// Sets the frame size.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn frame_size<V: Into<Vec2f>>(mut self, size: V) -> Self {
        self.frame_size = size.into();
        self
    }

    /// Sets the pan velocity.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn velocity<V: Into<Vec2f>>(mut self, velocity: V) -> Self {
        self.velocity = velocity.into();
        self
    }

    #[cfg(feature = "toml")]
    #[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
    /// Load values from an already parsed toml [`Table`], overwriting previous values.
    ///
    /// Values with an unexpected type are ignored.
    ///
    /// [`Table`]: https://docs.rs/toml/latest/toml/type.Table.html
    pub fn load_toml(&mut self, table: &toml::value::Table) {
        if let Some(value) = table.get("content_offset") {
            load_vec(&mut self.content_offset, "content_offset", value);
        }

        if let Some(value) = table.get("content_inset") {
            load_insets(&mut self.content_inset, value);
        }

        if let Some(value) = table.get("content_size") {
            load_vec(&mut self.content_size, "content_size", value);
        }

        if let Some(value) = table.get("frame_size") {
            load_vec(&mut self.frame_size, "frame_size", value);
        }

        if let Some(value) = table.get("velocity") {
            load_vec(&mut self.velocity, "velocity", value);
        }
    }
}

impl ScrollGeometry for Snapshot {
    fn content_offset(&self) -> Vec2f {
        self.content_offset
    }

    fn content_inset(&self) -> Insets {
        self.content_inset
    }

    fn content_size(&self) -> Vec2f {
        self.content_size
    }

    fn frame_size(&self) -> Vec2f {
        self.frame_size
    }

    fn velocity(&self) -> Vec2f {
        self.velocity
    }
}

#[cfg(feature = "toml")]
fn as_number(value: &toml::Value) -> Option<f64> {
    match *value {
        toml::Value::Float(f) => Some(f),
        toml::Value::Integer(i) => Some(i as f64),
        _ => None,
    }
}

/// Overwrites the fields of `target` found in `value`.
#[cfg(feature = "toml")]
fn load_fields(target: &mut [(&str, &mut f64)], key: &str, value: &toml::Value) {
    let table = match value.as_table() {
        Some(table) => table,
        None => {
            log::warn!("Ignoring `{}`: expected a table, found {}", key, value.type_str());
            return;
        }
    };

    for (name, field) in target.iter_mut() {
        match table.get(*name) {
            None => (),
            Some(v) => match as_number(v) {
                Some(n) => **field = n,
                None => log::warn!("Ignoring `{}.{}`: not a number", key, name),
            },
        }
    }
}

#[cfg(feature = "toml")]
fn load_vec(target: &mut Vec2f, key: &str, value: &toml::Value) {
    load_fields(&mut [("x", &mut target.x), ("y", &mut target.y)], key, value);
}

#[cfg(feature = "toml")]
fn load_insets(target: &mut Insets, value: &toml::Value) {
    load_fields(
        &mut [
            ("left", &mut target.left),
            ("right", &mut target.right),
            ("top", &mut target.top),
            ("bottom", &mut target.bottom),
        ],
        "content_inset",
        value,
    );
}

/// Possible error returned when loading a snapshot.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
#[derive(Debug)]
pub enum Error {
    /// An error occurred when reading the file.
    Io(io::Error),

    /// An error occurred when parsing the toml content.
    Parse(toml::de::Error),
}

#[cfg(feature = "toml")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "could not read snapshot: {}", err),
            Error::Parse(err) => write!(f, "could not parse snapshot: {}", err),
        }
    }
}

#[cfg(feature = "toml")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

#[cfg(feature = "toml")]
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err)
    }
}

/// Loads a snapshot from file.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
pub fn load_snapshot_file<P: AsRef<Path>>(filename: P) -> Result<Snapshot, Error> {
    let content = {
        let mut content = String::new();
        let mut file = File::open(filename)?;
        file.read_to_string(&mut content)?;
        content
    };

    load_toml(&content)
}

/// Loads a snapshot from a toml string.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
pub fn load_toml(content: &str) -> Result<Snapshot, Error> {
    let table = toml::de::from_str(content)?;

    let mut snapshot = Snapshot::default();
    snapshot.load_toml(&table);

    log::debug!("Loaded snapshot: {:?}", snapshot);

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScrollState;

    #[test]
    fn test_capture() {
        let snapshot = Snapshot::new()
            .content_offset((0.0, 12.0))
            .content_inset(Insets::tb(4.0, 8.0))
            .content_size((100.0, 500.0))
            .frame_size((100.0, 200.0))
            .velocity((1.0, -2.0));

        let by_ref: &dyn ScrollGeometry = &snapshot;
        assert_eq!(Snapshot::capture(by_ref), snapshot);
    }

    #[test]
    fn test_default_is_zero() {
        let snapshot = Snapshot::new();
        assert_eq!(snapshot.content_offset, Vec2f::zero());
        assert_eq!(snapshot.content_inset, Insets::zeroes());
        // Zero offset with zero inset sits on the top edge.
        assert_eq!(snapshot.state(), ScrollState::BouncingTop);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_load_toml() {
        let snapshot = load_toml(
            r#"
            content_offset = { x = 0, y = 450 }
            content_inset = { top = 5.5 }
            content_size = { x = 320, y = 1000 }
            frame_size = { x = 320, y = 600.0 }
            velocity = { y = -12 }
            "#,
        )
        .unwrap();

        assert_eq!(snapshot.content_offset, Vec2f::new(0.0, 450.0));
        assert_eq!(snapshot.content_inset, Insets::top(5.5));
        assert_eq!(snapshot.frame_size, Vec2f::new(320.0, 600.0));
        assert_eq!(snapshot.velocity, Vec2f::new(0.0, -12.0));
        assert_eq!(snapshot.state(), ScrollState::BouncingBottom);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_load_toml_skips_bad_values() {
        let snapshot = load_toml(
            r#"
            content_offset = "far away"
            velocity = { x = 3, y = "fast" }
            "#,
        )
        .unwrap();

        assert_eq!(snapshot.content_offset, Vec2f::zero());
        assert_eq!(snapshot.velocity, Vec2f::new(3.0, 0.0));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_load_toml_syntax_error() {
        assert!(matches!(load_toml("velocity = {"), Err(Error::Parse(_))));
        assert!(matches!(
            load_snapshot_file("/nonexistent/snapshot.toml"),
            Err(Error::Io(_))
        ));
    }
}
