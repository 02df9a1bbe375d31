use glam::Vec2;
use hecs::Entity;

/// Opacity component - 0.0 fully transparent, 1.0 fully opaque
#[derive(Debug, Clone, Copy)]
pub struct Opacity(pub f32);

/// Pixel offset from an element's rest position
#[derive(Debug, Clone, Copy)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Horizontal slide as a percentage of the element's container width.
/// 0 is centered, 100 is fully off-screen right, -100 fully off-screen left.
#[derive(Debug, Clone, Copy)]
pub struct SlidePercent(pub f32);

/// Uniform scale factor, 1.0 is natural size
#[derive(Debug, Clone, Copy)]
pub struct Scale(pub f32);

/// Stacking priority - higher draws on top
#[derive(Debug, Clone, Copy)]
pub struct StackOrder(pub i32);

/// Ready-to-animate flag. Elements spawn hidden and are only revealed
/// once their initial visual state is set, so nothing flashes unstyled.
#[derive(Debug, Clone, Copy)]
pub struct Visible(pub bool);

/// Which side of a card a heading decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingSide {
    Left,
    Right,
}

/// Card decoration heading. Hidden headings sit displaced from their rest
/// position; the sign of `start_offset` encodes the direction (left heading
/// above rest, right heading below).
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub side: HeadingSide,
    pub start_offset: f32,
}

impl Heading {
    pub fn new(side: HeadingSide, magnitude: f32) -> Self {
        let start_offset = match side {
            HeadingSide::Left => -magnitude,
            HeadingSide::Right => magnitude,
        };
        Self { side, start_offset }
    }
}

/// Feature card panel. Headings are optional - a card authored without one
/// simply has no decoration on that side.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub index: usize,
    pub heading_left: Option<Entity>,
    pub heading_right: Option<Entity>,
}

/// Single hero-title letter
#[derive(Debug, Clone, Copy)]
pub struct Letter {
    pub index: usize,
    pub ch: char,
}

/// Hero tagline marker
#[derive(Debug, Clone, Copy)]
pub struct Tagline;

/// Pointer-following decorative orb. Tracks its own screen position; the
/// pointer target is passed in each frame rather than read from shared state.
#[derive(Debug, Clone, Copy)]
pub struct FollowOrb {
    pub pos: Vec2,
}

/// Decorative orb that drifts with scroll across the hero section
#[derive(Debug, Clone, Copy)]
pub struct ParallaxOrb;

/// Background showcase panel that settles into place as the features
/// section approaches
#[derive(Debug, Clone, Copy)]
pub struct ShowcasePanel;

/// Platforms section heading marker
#[derive(Debug, Clone, Copy)]
pub struct PlatformHeading;

/// Platforms section tagline marker
#[derive(Debug, Clone, Copy)]
pub struct PlatformTagline;
