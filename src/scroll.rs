//! Scroll model: raw wheel input, scrub smoothing, pin regions.
//!
//! Wheel deltas accumulate into a target offset; the applied offset chases
//! the target with exponential smoothing so scrubbed animations trail the
//! wheel slightly instead of stepping. Pin regions convert the applied
//! offset into normalized progress for scroll-linked animation.

use crate::constants::*;
use crate::tween::Ease;

/// A stretch of scroll distance over which progress advances 0 to 1.
/// The pinned section holds its place on screen for the whole stretch.
#[derive(Debug, Clone, Copy)]
pub struct PinRegion {
    pub start: f32,
    pub distance: f32,
}

impl PinRegion {
    pub fn new(start: f32, distance: f32) -> Self {
        Self { start, distance }
    }

    /// Normalized progress of `scroll` through this region, clamped to [0,1].
    /// Degenerate regions (zero distance) report 0 before the start and 1 after.
    pub fn progress(&self, scroll: f32) -> f32 {
        if self.distance <= 0.0 {
            return if scroll < self.start { 0.0 } else { 1.0 };
        }
        ((scroll - self.start) / self.distance).clamp(0.0, 1.0)
    }
}

/// An in-flight eased jump of the scroll target (nav link click)
#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Glide {
    fn value(&self) -> f32 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * Ease::QuadInOut.apply(t)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Page scroll state. `target` moves with input, `applied` trails it.
pub struct ScrollState {
    target: f32,
    applied: f32,
    max: f32,
    glide: Option<Glide>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            target: 0.0,
            applied: 0.0,
            max: 0.0,
            glide: None,
        }
    }

    /// Update the scrollable extent (page height minus viewport).
    /// Existing positions are re-clamped; no animation state resets.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.clamp(0.0, self.max);
        self.applied = self.applied.clamp(0.0, self.max);
    }

    /// Apply a wheel delta in pixels (positive scrolls down).
    /// User input interrupts any glide in progress.
    pub fn add_wheel(&mut self, delta: f32) {
        self.glide = None;
        self.target = (self.target + delta).clamp(0.0, self.max);
    }

    /// Ease the target toward a destination over a fixed duration
    pub fn glide_to(&mut self, to: f32, duration: f32) {
        self.glide = Some(Glide {
            from: self.target,
            to: to.clamp(0.0, self.max),
            elapsed: 0.0,
            duration,
        });
    }

    /// Advance glide and scrub smoothing; returns the applied offset.
    ///
    /// A smoothing constant of 0 collapses to immediate application
    /// (`0^x = 0`, so the blend factor is 1).
    pub fn update(&mut self, dt: f32) -> f32 {
        if let Some(glide) = &mut self.glide {
            glide.elapsed += dt;
            self.target = glide.value();
            if glide.is_finished() {
                self.glide = None;
            }
        }

        let blend = 1.0 - SCROLL_SCRUB_SMOOTHING.powf(dt * 60.0);
        self.applied += (self.target - self.applied) * blend;
        if (self.target - self.applied).abs() < SCROLL_SNAP_THRESHOLD {
            self.applied = self.target;
        }
        self.applied
    }

    pub fn applied(&self) -> f32 {
        self.applied
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
