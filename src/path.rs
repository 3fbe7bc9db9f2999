//! Converts landmark regions to drawable paths in canvas pixel coordinates.
//!
//! Landmark points arrive in face-local normalized coordinates with a bottom-left origin, while
//! renderers expect top-left-origin pixel coordinates. The conversion is an affine transform
//! anchored to the face's bounding box; two variants exist depending on what the overlay is drawn
//! onto (see [`OverlayMode`]).

use nalgebra::{vector, Vector2};

use crate::detection::FaceDetection;
use crate::landmark::LandmarkRegion;
use crate::rect::Rect;
use crate::resolution::Resolution;

/// Where the overlay is rendered, which decides the landmark transform to use.
///
/// The two variants differ deliberately and must not be merged: a live camera preview is mirrored
/// for the user, a still image is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    /// Overlay stroked over the full (mirrored) camera frame.
    ///
    /// Landmark offsets are inverted on both axes: the Y inversion converts the bottom-left
    /// origin to top-left, the X inversion matches the mirrored front-camera preview.
    FullFrame,
    /// Overlay stroked onto an independently sized canvas showing a still image.
    ///
    /// Only the Y axis is inverted; X keeps the image's orientation.
    Canvas,
}

/// An affine `translate + scale` map from face-local normalized coordinates to canvas pixels.
struct PointTransform {
    translation: Vector2<f32>,
    scale: Vector2<f32>,
}

impl PointTransform {
    fn new(mode: OverlayMode, bbox: Rect, canvas: Resolution) -> Self {
        let canvas = vector![canvas.width() as f32, canvas.height() as f32];
        match mode {
            OverlayMode::FullFrame => Self {
                translation: canvas.component_mul(&vector![1.0 - bbox.x(), 1.0 - bbox.y()]),
                scale: -canvas.component_mul(&vector![bbox.width(), bbox.height()]),
            },
            OverlayMode::Canvas => Self {
                translation: canvas.component_mul(&vector![bbox.x(), 1.0 - bbox.y()]),
                scale: canvas.component_mul(&vector![bbox.width(), -bbox.height()]),
            },
        }
    }

    fn apply(&self, [x, y]: [f32; 2]) -> [f32; 2] {
        let out = self.translation + self.scale.component_mul(&vector![x, y]);
        [out.x, out.y]
    }
}

/// One polyline of a [`DrawablePath`], in canvas pixel coordinates.
#[derive(Debug, Clone)]
pub struct SubPath {
    points: Vec<[f32; 2]>,
    closed: bool,
}

impl SubPath {
    /// Returns the polyline's points, connected in order by the renderer.
    #[inline]
    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// Returns whether the renderer should connect the last point back to the first.
    #[inline]
    pub fn closed(&self) -> bool {
        self.closed
    }
}

/// An ordered sequence of polylines in canvas pixel coordinates.
///
/// Produced by [`build_path`] and consumed once by a renderer, which strokes each sub-path with a
/// line width and color of its choosing. Never empty.
#[derive(Debug, Clone)]
pub struct DrawablePath {
    sub_paths: Vec<SubPath>,
}

impl DrawablePath {
    #[inline]
    pub fn sub_paths(&self) -> &[SubPath] {
        &self.sub_paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubPath> {
        self.sub_paths.iter()
    }
}

/// Builds the drawable overlay path for `face` on a canvas of the given size.
///
/// Every landmark region with at least 2 points contributes one sub-path; regions with fewer
/// points carry no drawable outline and are skipped. Open regions (eyebrows, face contour) come
/// before closed ones (eyes, lips, nose) so that closed shapes are stroked on top; within each
/// group the face's region order is kept.
///
/// Returns [`None`] if the face has no landmark regions, or if no region yields a sub-path.
pub fn build_path(
    face: &FaceDetection,
    canvas: Resolution,
    mode: OverlayMode,
) -> Option<DrawablePath> {
    let transform = PointTransform::new(mode, face.bounding_box(), canvas);

    let mut sub_paths = Vec::with_capacity(face.regions().len());
    let (open, closed): (Vec<_>, Vec<_>) = face
        .regions()
        .iter()
        .partition(|region| !region.kind().is_closed());
    for region in open.into_iter().chain(closed) {
        sub_paths.extend(sub_path(region, &transform));
    }

    if sub_paths.is_empty() {
        log::trace!(
            "no drawable landmark regions for face at {:?}",
            face.bounding_box()
        );
        return None;
    }

    Some(DrawablePath { sub_paths })
}

fn sub_path(region: &LandmarkRegion, transform: &PointTransform) -> Option<SubPath> {
    // A lone point (eg. a pupil) has no outline to stroke.
    if region.len() < 2 {
        return None;
    }

    Some(SubPath {
        points: region
            .points()
            .iter()
            .map(|&pt| transform.apply(pt))
            .collect(),
        closed: region.kind().is_closed(),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::landmark::RegionKind;

    use super::*;

    fn canvas() -> Resolution {
        Resolution::new(100, 100)
    }

    fn centered_bbox() -> Rect {
        Rect::from_origin(0.25, 0.25, 0.5, 0.5)
    }

    #[test]
    fn test_no_landmarks() {
        let face = FaceDetection::new(centered_bbox());
        assert!(build_path(&face, canvas(), OverlayMode::Canvas).is_none());
        assert!(build_path(&face, canvas(), OverlayMode::FullFrame).is_none());
    }

    #[test]
    fn test_degenerate_regions_skipped() {
        // A 1-point and an empty region yield nothing at all.
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![
                LandmarkRegion::new(RegionKind::LeftPupil, vec![[0.3, 0.6]]),
                LandmarkRegion::new(RegionKind::RightPupil, Vec::new()),
            ],
        );
        assert!(build_path(&face, canvas(), OverlayMode::Canvas).is_none());

        // Next to a drawable region they are skipped silently.
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![
                LandmarkRegion::new(RegionKind::LeftPupil, vec![[0.3, 0.6]]),
                LandmarkRegion::new(RegionKind::LeftEye, vec![[0.2, 0.6], [0.4, 0.6]]),
            ],
        );
        let path = build_path(&face, canvas(), OverlayMode::Canvas).unwrap();
        assert_eq!(path.sub_paths().len(), 1);
    }

    #[test]
    fn test_closed_region() {
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![LandmarkRegion::new(
                RegionKind::LeftEye,
                vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
            )],
        );
        let path = build_path(&face, canvas(), OverlayMode::Canvas).unwrap();
        let sub = &path.sub_paths()[0];
        assert_eq!(sub.points().len(), 3);
        assert!(sub.closed());
    }

    #[test]
    fn test_open_region() {
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![LandmarkRegion::new(
                RegionKind::LeftEyebrow,
                vec![[0.0, 0.8], [0.5, 0.9], [1.0, 0.8]],
            )],
        );
        let path = build_path(&face, canvas(), OverlayMode::Canvas).unwrap();
        assert!(!path.sub_paths()[0].closed());
    }

    #[test]
    fn test_canvas_transform() {
        // bbox (0.25, 0.25) + 0.5x0.5 on a 100x100 canvas. The bottom-left corner of the face
        // box lands at pixel (25, 75), the top-right corner at (75, 25).
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![LandmarkRegion::new(
                RegionKind::LeftEye,
                vec![[0.0, 0.0], [1.0, 1.0], [0.5, 0.5]],
            )],
        );
        let path = build_path(&face, canvas(), OverlayMode::Canvas).unwrap();
        let points = path.sub_paths()[0].points();
        assert_relative_eq!(points[0][0], 25.0);
        assert_relative_eq!(points[0][1], 75.0);
        assert_relative_eq!(points[1][0], 75.0);
        assert_relative_eq!(points[1][1], 25.0);
        assert_relative_eq!(points[2][0], 50.0);
        assert_relative_eq!(points[2][1], 50.0);
    }

    #[test]
    fn test_full_frame_transform() {
        // Same face, mirrored preview: X is inverted as well, so the face-local origin lands at
        // (75, 75) and the top-right corner at (25, 25).
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![LandmarkRegion::new(
                RegionKind::LeftEye,
                vec![[0.0, 0.0], [1.0, 1.0]],
            )],
        );
        let path = build_path(&face, canvas(), OverlayMode::FullFrame).unwrap();
        let points = path.sub_paths()[0].points();
        assert_relative_eq!(points[0][0], 75.0);
        assert_relative_eq!(points[0][1], 75.0);
        assert_relative_eq!(points[1][0], 25.0);
        assert_relative_eq!(points[1][1], 25.0);
    }

    #[test]
    fn test_draw_order() {
        // Closed regions are listed first here, but open ones must be stroked first.
        let face = FaceDetection::with_regions(
            centered_bbox(),
            vec![
                LandmarkRegion::new(RegionKind::LeftEye, vec![[0.2, 0.6], [0.4, 0.6]]),
                LandmarkRegion::new(RegionKind::OuterLips, vec![[0.3, 0.2], [0.7, 0.2]]),
                LandmarkRegion::new(RegionKind::FaceContour, vec![[0.0, 0.9], [0.0, 0.1]]),
                LandmarkRegion::new(RegionKind::RightEyebrow, vec![[0.6, 0.8], [0.8, 0.8]]),
            ],
        );
        let path = build_path(&face, canvas(), OverlayMode::Canvas).unwrap();
        let closed: Vec<bool> = path.iter().map(|sub| sub.closed()).collect();
        assert_eq!(closed, vec![false, false, true, true]);
    }

    #[test]
    fn test_non_square_canvas() {
        let face = FaceDetection::with_regions(
            Rect::from_origin(0.0, 0.0, 1.0, 1.0),
            vec![LandmarkRegion::new(
                RegionKind::Nose,
                vec![[0.5, 0.5], [1.0, 0.0]],
            )],
        );
        let path = build_path(&face, Resolution::new(200, 100), OverlayMode::Canvas).unwrap();
        let points = path.sub_paths()[0].points();
        assert_relative_eq!(points[0][0], 100.0);
        assert_relative_eq!(points[0][1], 50.0);
        assert_relative_eq!(points[1][0], 200.0);
        assert_relative_eq!(points[1][1], 100.0);
    }
}
