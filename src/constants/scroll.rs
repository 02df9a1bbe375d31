//! Scroll model constants.

/// Pixels of scroll per wheel line (LineDelta unit)
pub const SCROLL_LINE_HEIGHT: f32 = 48.0;
/// Smoothing factor between target and applied scroll (lower = snappier, 0 = immediate)
pub const SCROLL_SCRUB_SMOOTHING: f32 = 0.72;
/// Distance below which applied scroll snaps to the target
pub const SCROLL_SNAP_THRESHOLD: f32 = 0.5;
/// Duration of the eased glide when a nav link is clicked
pub const NAV_GLIDE_DURATION: f32 = 0.8;
