//! Pointer and wheel input handling.
//!
//! Keeps the latest pointer position so animation systems receive it as
//! explicit input, and normalizes wheel deltas into page-scroll pixels.

use glam::Vec2;
use winit::event::MouseScrollDelta;

use crate::constants::SCROLL_LINE_HEIGHT;

/// Input state tracking
pub struct InputState {
    /// Latest pointer position, physical pixels
    pub pointer_pos: Vec2,
}

impl InputState {
    /// Start with the pointer assumed at the viewport center so the
    /// follow orb has a sensible target before the first move event
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pointer_pos: viewport * 0.5,
        }
    }
}

/// Convert a winit wheel delta to page-scroll pixels.
/// Wheel up (positive y) scrolls the page up, so the sign flips.
pub fn wheel_delta_px(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * SCROLL_LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_up_scrolls_page_up() {
        let delta = wheel_delta_px(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert!(delta < 0.0);
    }

    #[test]
    fn test_line_delta_scales_by_line_height() {
        let delta = wheel_delta_px(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert_eq!(delta, 2.0 * SCROLL_LINE_HEIGHT);
    }
}
