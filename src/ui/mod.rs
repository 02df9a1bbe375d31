//! Page rendering using egui.
//!
//! The page is painted, not laid out with widgets: each frame the draw
//! functions read the animated visual-state components and paint the
//! sections at their scrolled positions. Only the nav bar is widget-based.

pub mod nav;
pub mod sections;
pub mod style;

pub use nav::draw_nav;
pub use sections::draw_page;

use crate::content::SectionId;

/// Actions the UI wants to perform (returned to the frame loop)
#[derive(Default)]
pub struct UiActions {
    /// Nav link clicked: glide the scroll position to this section
    pub scroll_to: Option<SectionId>,
}
