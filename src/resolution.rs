//! Types for representing image resolutions.

use std::fmt;

/// Resolution (`width x height`) of an image, overlay canvas, or display.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// 1080p resolution: `1920x1080`
    pub const RES_1080P: Self = Self {
        width: 1920,
        height: 1080,
    };

    /// 720p resolution: `1280x720`
    pub const RES_720P: Self = Self {
        width: 1280,
        height: 720,
    };

    /// Creates a new [`Resolution`] of `width x height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width of this [`Resolution`].
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this [`Resolution`].
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Computes the [`AspectRatio`] of this [`Resolution`].
    ///
    /// If `self` has a width or height of 0, `None` is returned.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        AspectRatio::new(self.width, self.height)
    }

    /// Scales `self` to fill or fit `bounds`, preserving aspect ratio.
    ///
    /// Both dimensions are multiplied by the same scalar. With [`ScaleMode::Fill`] the result
    /// covers `bounds` completely and may exceed it on one axis; with [`ScaleMode::Fit`] the
    /// result lies completely inside `bounds` and may fall short on one axis.
    ///
    /// If `self` or `bounds` has a zero dimension, `self` is returned unchanged.
    pub fn scaled_to(&self, bounds: Resolution, mode: ScaleMode) -> Resolution {
        let (image_ratio, bounds_ratio) = match (self.aspect_ratio(), bounds.aspect_ratio()) {
            (Some(image), Some(bounds)) => (image.as_f32(), bounds.as_f32()),
            _ => return *self,
        };

        let width_scale = bounds.width as f32 / self.width as f32;
        let height_scale = bounds.height as f32 / self.height as f32;
        let scale = match mode {
            ScaleMode::Fill => {
                if bounds_ratio > image_ratio {
                    width_scale
                } else {
                    height_scale
                }
            }
            ScaleMode::Fit => {
                if bounds_ratio > image_ratio {
                    height_scale
                } else {
                    width_scale
                }
            }
        };

        let scaled = Resolution::new(
            (self.width as f32 * scale).round() as u32,
            (self.height as f32 * scale).round() as u32,
        );
        log::trace!(
            "scale {} to {:?} bounds {} -> {}",
            self,
            mode,
            bounds,
            scaled
        );
        scaled
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Policy for scaling an image into a bounding area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Cover the bounds completely; the image may overflow on one axis and get cropped.
    Fill,
    /// Contain the image inside the bounds completely; one axis may be letterboxed.
    Fit,
}

/// Ratio of a width to a height of an image.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct AspectRatio {
    // Invariant: `width` and `height` are nonzero and as small as possible (ie. their GCD is 1).
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Creates the aspect ratio representing `width:height`.
    ///
    /// If either `width` or `height` is `0`, returns `None`.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let gcd = gcd(width, height);
        Some(Self {
            width: width / gcd,
            height: height / gcd,
        })
    }

    /// Returns the `f32` corresponding to this ratio.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl fmt::Debug for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b > 0 {
        let t = b;
        b = a % b;
        a = t;
    }

    a
}
