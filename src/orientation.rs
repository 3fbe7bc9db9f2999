//! Capture-device orientation as a capability.
//!
//! Detectors want to know how the capture device is rotated so they can search for upright faces.
//! The actual lookup is ambient platform state owned by the camera collaborator; this module only
//! defines the vocabulary and the trait the collaborator implements.

/// Rotation of the capture device relative to its natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Up,
    UpsideDown,
    /// Rotated 90° counterclockwise.
    RotatedLeft,
    /// Rotated 90° clockwise.
    RotatedRight,
}

impl Orientation {
    /// Returns the EXIF orientation code detectors expect as their orientation hint.
    pub fn exif_code(&self) -> u32 {
        match self {
            Self::Up => 1,
            Self::UpsideDown => 3,
            Self::RotatedLeft => 8,
            Self::RotatedRight => 6,
        }
    }
}

/// Supplies the current capture orientation.
///
/// Implemented by the camera collaborator against whatever platform state it has access to. A
/// plain [`Orientation`] implements this too, for still images and tests where the orientation is
/// fixed.
pub trait OrientationSource {
    fn current_orientation(&self) -> Orientation;
}

impl OrientationSource for Orientation {
    fn current_orientation(&self) -> Orientation {
        *self
    }
}
