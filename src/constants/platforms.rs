//! Cross-platform section constants.

/// Heading reveal duration
pub const PLATFORM_HEADING_DURATION: f32 = 1.5;
/// Delay of the tagline reveal behind the heading
pub const PLATFORM_TAGLINE_DELAY: f32 = 0.5;
/// Vertical displacement of heading and tagline before they reveal, px
pub const PLATFORM_REVEAL_OFFSET: f32 = 50.0;
/// Fraction of the viewport height the section top must cross to trigger the reveal
pub const PLATFORM_TRIGGER_FRACTION: f32 = 0.5;
