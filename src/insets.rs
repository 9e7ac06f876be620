/// Content inset on each side of a scrollable view.
///
/// The inset is extra scrollable space added around the content. A positive
/// `top` inset lets the content offset go down to `-top` before the view is
/// considered past its top edge.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Insets {
    /// Left inset
    pub left: f64,
    /// Right inset
    pub right: f64,
    /// Top inset
    pub top: f64,
    /// Bottom inset
    pub bottom: f64,
}

impl Insets {
    /// Creates a new `Insets` object with zero insets.
    pub fn zeroes() -> Self {
        Self::lrtb(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a new `Insets` object from the Left, Right, Top, Bottom fields.
    pub fn lrtb(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Insets {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates a new `Insets` object from the Top and Bottom fields.
    ///
    /// Left and Right will be 0.
    pub fn tb(top: f64, bottom: f64) -> Self {
        Self::lrtb(0.0, 0.0, top, bottom)
    }

    /// Creates a new `Insets` object with only a top inset.
    pub fn top(top: f64) -> Self {
        Self::tb(top, 0.0)
    }
}
