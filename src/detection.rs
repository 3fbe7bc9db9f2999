//! Face detection results and main-face selection.
//!
//! The detector itself is an external collaborator: given an image and an orientation hint, it
//! returns zero or more [`FaceDetection`]s. This module only defines the result type and the
//! policy for picking the face to overlay when several are reported.

use crate::landmark::LandmarkRegion;
use crate::num::TotalF32;
use crate::rect::Rect;

/// A detected face.
///
/// Consists of the face's bounding box (normalized to the source image, bottom-left origin) and a
/// possibly empty set of [`LandmarkRegion`]s. Produced fresh per detection call and immutable once
/// built.
#[derive(Debug, Clone)]
pub struct FaceDetection {
    bounding_box: Rect,
    regions: Vec<LandmarkRegion>,
}

impl FaceDetection {
    /// Creates a detection without landmark data.
    pub fn new(bounding_box: Rect) -> Self {
        Self {
            bounding_box,
            regions: Vec::new(),
        }
    }

    /// Creates a detection with the given landmark regions.
    pub fn with_regions(bounding_box: Rect, regions: Vec<LandmarkRegion>) -> Self {
        Self {
            bounding_box,
            regions,
        }
    }

    /// Returns the face's bounding box, normalized to the source image (bottom-left origin).
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Returns the landmark regions reported for this face.
    #[inline]
    pub fn regions(&self) -> &[LandmarkRegion] {
        &self.regions
    }
}

/// Selects the *main* face among a detector's results: the one with the largest bounding box area.
///
/// Returns [`None`] if `faces` is empty. When several faces share the maximal area, the first one
/// in iteration order wins, so the result is deterministic for a given input sequence.
pub fn main_face<'a, I>(faces: I) -> Option<&'a FaceDetection>
where
    I: IntoIterator<Item = &'a FaceDetection>,
{
    let mut best: Option<&FaceDetection> = None;
    for face in faces {
        let area = TotalF32(face.bounding_box().area());
        match best {
            Some(b) if area <= TotalF32(b.bounding_box().area()) => {}
            _ => best = Some(face),
        }
    }
    if let Some(face) = best {
        log::trace!("main face: {:?}", face.bounding_box());
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_with_area(area: f32) -> FaceDetection {
        FaceDetection::new(Rect::from_origin(0.0, 0.0, area, 1.0))
    }

    #[test]
    fn test_main_face_empty() {
        assert!(main_face([].iter()).is_none());
    }

    #[test]
    fn test_main_face_largest() {
        let faces = [
            face_with_area(0.1),
            face_with_area(0.5),
            face_with_area(0.3),
        ];
        let main = main_face(&faces).unwrap();
        assert_eq!(main.bounding_box().area(), 0.5);
    }

    #[test]
    fn test_main_face_tie_break() {
        let first = FaceDetection::new(Rect::from_origin(0.1, 0.1, 0.5, 0.5));
        let second = FaceDetection::new(Rect::from_origin(0.4, 0.4, 0.5, 0.5));
        let faces = [first.clone(), second];

        let main = main_face(&faces).unwrap();
        assert_eq!(main.bounding_box(), first.bounding_box());
    }

    #[test]
    fn test_main_face_single() {
        let faces = [face_with_area(0.0)];
        assert!(main_face(&faces).is_some());
    }
}
