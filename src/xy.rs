/// A generic structure with a value for each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XY<T> {
    /// X-axis value
    pub x: T,
    /// Y-axis value
    pub y: T,
}

/// A two-dimensional vector of floating point coordinates.
///
/// Offsets, sizes and velocities all use this type.
pub type Vec2f = XY<f64>;

impl<T> XY<T> {
    /// Creates a new `XY` from the given values.
    pub fn new(x: T, y: T) -> Self {
        XY { x, y }
    }
}

impl XY<f64> {
    /// Returns a vector with both components set to zero.
    pub fn zero() -> Self {
        XY::new(0.0, 0.0)
    }
}

impl<T> From<(T, T)> for XY<T> {
    fn from((x, y): (T, T)) -> Self {
        XY::new(x, y)
    }
}
