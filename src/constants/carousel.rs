//! Feature-card carousel constants.

/// Scroll distance the features section stays pinned, in viewport heights
pub const CAROUSEL_PIN_DISTANCE_VH: f32 = 3.0;
/// Number of equal progress partitions used to derive the current card index
pub const CAROUSEL_SEGMENT_COUNT: usize = 2;
/// Duration of one card slide transition (timeline seconds, scrubbed by scroll)
pub const CARD_TRANSITION_DURATION: f32 = 1.0;
/// Pause before, between, and after card transitions (timeline seconds)
pub const CARD_TRANSITION_PAUSE: f32 = 0.5;
/// Horizontal offset of off-screen cards, percent of the card container width
pub const CARD_OFFSCREEN_PERCENT: f32 = 100.0;
/// Stacking priority of card 0; later cards stack beneath it
pub const CARD_STACK_BASE: i32 = 10;

/// Heading reveal duration in seconds
pub const HEADING_DURATION: f32 = 0.5;
/// Delay of the right heading behind the left one
pub const HEADING_STAGGER: f32 = 0.2;
/// Heading start displacement from rest, px (left above, right below)
pub const HEADING_START_OFFSET: f32 = 100.0;
/// Heading start displacement on compact viewports, px
pub const HEADING_START_OFFSET_COMPACT: f32 = 50.0;
/// Duration of the eased heading reset (only used with `HeadingExit::Eased`)
pub const HEADING_EXIT_DURATION: f32 = 0.25;
