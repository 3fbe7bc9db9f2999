//! Rectangle types.
//!
//! [`Rect`] is used for the face bounding boxes reported by detectors, which live in a normalized,
//! bottom-left-origin coordinate space. The type itself is origin-agnostic; the axis convention is
//! determined by whatever produced the coordinates.

use std::fmt;

/// An axis-aligned rectangle with `f32` origin and size.
///
/// Rectangles are allowed to have zero height and/or width. Negative dimensions are not allowed.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle extending from an origin corner point.
    ///
    /// # Panics
    ///
    /// This method will panic if `width` or `height` is negative.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(width >= 0.0, "width={}", width);
        assert!(height >= 0.0, "height={}", height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from two opposing corner points.
    pub fn from_corners(a: [f32; 2], b: [f32; 2]) -> Self {
        let x_min = a[0].min(b[0]);
        let y_min = a[1].min(b[1]);
        Self::from_origin(x_min, y_min, (a[0] - b[0]).abs(), (a[1] - b[1]).abs())
    }

    /// Computes the (axis-aligned) bounding rectangle that encompasses `points`.
    ///
    /// Returns [`None`] if `points` is an empty iterator.
    pub fn bounding<I: IntoIterator<Item = [f32; 2]>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();

        let [x, y] = iter.next()?;
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (x, x, y, y);

        for [x, y] in iter {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        Some(Self::from_corners([x_min, y_min], [x_max, y_max]))
    }

    /// Returns the X coordinate of the rectangle's origin corner.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the Y coordinate of the rectangle's origin corner.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the area covered by `self`.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect @ ({},{})/{}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
