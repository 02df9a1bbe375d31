//! Hero section constants.

/// Delay between consecutive letter reveals (typing effect)
pub const LETTER_STAGGER: f32 = 0.1;
/// Duration of a single letter reveal
pub const LETTER_DURATION: f32 = 0.5;
/// Vertical displacement of a letter before it reveals, px
pub const LETTER_START_OFFSET: f32 = 40.0;
/// Tagline reveal duration
pub const TAGLINE_DURATION: f32 = 1.5;
/// Vertical displacement of the tagline before it reveals, px
pub const TAGLINE_START_OFFSET: f32 = 50.0;

/// Per-frame smoothing of the pointer-following orb (lower = tighter follow)
pub const ORB_FOLLOW_SMOOTHING: f32 = 0.80;
/// Radius of the pointer-following orb, px
pub const ORB_RADIUS: f32 = 90.0;

/// Radius of the scroll-parallax orb, px
pub const PARALLAX_ORB_RADIUS: f32 = 140.0;
/// Horizontal drift of the parallax orb across the hero section, px
pub const PARALLAX_ORB_DRIFT_X: f32 = 50.0;
/// Vertical drift of the parallax orb across the hero section, px
pub const PARALLAX_ORB_DRIFT_Y: f32 = 100.0;

/// Showcase panel displacement before it settles, px
pub const SHOWCASE_START_OFFSET: f32 = 80.0;
/// Showcase panel opacity before it settles
pub const SHOWCASE_START_OPACITY: f32 = 0.35;
/// Showcase panel scale before it settles
pub const SHOWCASE_START_SCALE: f32 = 0.95;
