//! Named landmark regions outlining facial features.
//!
//! Detectors report landmarks grouped by facial feature. Each group is an ordered point sequence
//! in *face-local* normalized coordinates: `[0,1]` relative to the face's bounding box, with the
//! origin at the bottom-left (the convention of the detectors this crate was written against).

/// The facial feature a [`LandmarkRegion`] outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    FaceContour,
    LeftEyebrow,
    RightEyebrow,
    LeftEye,
    RightEye,
    OuterLips,
    InnerLips,
    Nose,
    NoseCrest,
    MedianLine,
    LeftPupil,
    RightPupil,
}

impl RegionKind {
    /// Returns whether this feature outlines a closed shape.
    ///
    /// Closed regions are drawn by connecting the last point back to the first. Open regions
    /// (eyebrows, face contour, nose crest, median line) are stroked as-is.
    pub fn is_closed(&self) -> bool {
        match self {
            Self::LeftEye
            | Self::RightEye
            | Self::OuterLips
            | Self::InnerLips
            | Self::Nose
            | Self::LeftPupil
            | Self::RightPupil => true,
            Self::FaceContour
            | Self::LeftEyebrow
            | Self::RightEyebrow
            | Self::NoseCrest
            | Self::MedianLine => false,
        }
    }
}

/// An ordered sequence of points outlining one facial feature.
///
/// Points are in face-local normalized coordinates (bottom-left origin). The sequence is immutable
/// once built. A region with fewer than 2 points carries no drawable outline and is skipped by
/// path construction.
#[derive(Debug, Clone)]
pub struct LandmarkRegion {
    kind: RegionKind,
    points: Box<[[f32; 2]]>,
}

impl LandmarkRegion {
    /// Creates a region of `kind` from points in face-local normalized coordinates.
    pub fn new(kind: RegionKind, points: impl Into<Vec<[f32; 2]>>) -> Self {
        Self {
            kind,
            points: points.into().into_boxed_slice(),
        }
    }

    #[inline]
    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_policy() {
        for kind in [
            RegionKind::LeftEye,
            RegionKind::RightEye,
            RegionKind::OuterLips,
            RegionKind::InnerLips,
            RegionKind::Nose,
            RegionKind::LeftPupil,
            RegionKind::RightPupil,
        ] {
            assert!(kind.is_closed(), "{kind:?} should be closed");
        }
        for kind in [
            RegionKind::FaceContour,
            RegionKind::LeftEyebrow,
            RegionKind::RightEyebrow,
            RegionKind::NoseCrest,
            RegionKind::MedianLine,
        ] {
            assert!(!kind.is_closed(), "{kind:?} should be open");
        }
    }

    #[test]
    fn test_region() {
        let region = LandmarkRegion::new(RegionKind::LeftEye, vec![[0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(region.kind(), RegionKind::LeftEye);
        assert_eq!(region.len(), 2);
        assert_eq!(region.points(), &[[0.0, 0.0], [1.0, 1.0]]);

        let empty = LandmarkRegion::new(RegionKind::Nose, Vec::new());
        assert!(empty.is_empty());
    }
}
