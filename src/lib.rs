//! Face landmark overlay geometry.
//!
//! This crate turns the output of a face detector (a normalized bounding box plus named landmark
//! point sequences) into polyline paths that can be stroked on top of a camera frame or a still
//! image. It also picks the largest face when the detector reports several, and computes overlay
//! canvas sizes for aspect-preserving Fill/Fit scaling.
//!
//! # 2D Coordinates
//!
//! Detectors report coordinates in a normalized, *bottom-left-origin* space: the face bounding box
//! is relative to the source image, and landmark points are relative to the bounding box, all in
//! `[0,1]`. Drawable paths use *top-left-origin* canvas pixel coordinates, matching what
//! rasterizers and window systems expect. The [`path`] module performs the conversion.
//!
//! Everything in here is pure and synchronous: no I/O, no shared state, callable from any thread.
//! The detector, camera capture, and rendering are external collaborators.

use log::LevelFilter;

pub mod detection;
pub mod landmark;
pub mod num;
pub mod orientation;
pub mod path;
pub mod rect;
pub mod resolution;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and facemark will log at *trace*
/// level. Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
