//! Stage world and page layout.
//!
//! The stage owns two things: the `hecs` world of page elements (spawned
//! once from the content manifest) and the pixel geometry of the page
//! sections, derived from the viewport size and recomputed on resize.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::*;
use crate::constants::*;
use crate::content::{PageContent, SectionId};
use crate::scroll::PinRegion;

/// Vertical extent of one page section, in page-space pixels
#[derive(Debug, Clone, Copy)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Pixel geometry of the page for a given viewport size
#[derive(Debug, Clone, Copy)]
pub struct StageLayout {
    pub viewport: Vec2,
    pub hero: SectionRect,
    pub features: SectionRect,
    /// Scroll stretch over which the features section stays pinned
    pub features_pin: PinRegion,
    pub platforms: SectionRect,
    pub total_height: f32,
}

impl StageLayout {
    pub fn new(viewport: Vec2, pin_distance_vh: f32) -> Self {
        let vh = viewport.y;
        let hero = SectionRect {
            top: 0.0,
            height: SECTION_HERO_VH * vh,
        };
        let pin_distance = pin_distance_vh * vh;
        let features = SectionRect {
            top: hero.bottom(),
            height: vh,
        };
        let features_pin = PinRegion::new(features.top, pin_distance);
        let platforms = SectionRect {
            top: features.bottom() + pin_distance,
            height: SECTION_PLATFORMS_VH * vh,
        };
        Self {
            viewport,
            hero,
            features,
            features_pin,
            platforms,
            total_height: platforms.bottom(),
        }
    }

    /// Largest valid scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.total_height - self.viewport.y).max(0.0)
    }

    /// Page-space top of a nav anchor
    pub fn section_top(&self, id: SectionId) -> f32 {
        match id {
            SectionId::Hero => self.hero.top,
            SectionId::Features => self.features.top,
            SectionId::Platforms => self.platforms.top,
        }
    }

    /// Screen-space top of the features section under pinning: the section
    /// scrolls in, holds at the top of the viewport for the pin distance,
    /// then scrolls away.
    pub fn features_screen_top(&self, scroll: f32) -> f32 {
        let incoming = self.features.top - scroll;
        let released = self.features.top + self.features_pin.distance - scroll;
        if incoming > 0.0 {
            incoming
        } else if released > 0.0 {
            0.0
        } else {
            released
        }
    }

    /// Scroll stretch of the showcase settle: from the features section
    /// entering the bottom of the viewport until it reaches the top.
    pub fn showcase_pin(&self) -> PinRegion {
        PinRegion::new(self.features.top - self.viewport.y, self.viewport.y)
    }

    /// Scroll stretch of the hero parallax: the hero section's own height
    pub fn hero_pin(&self) -> PinRegion {
        PinRegion::new(self.hero.top, self.hero.height)
    }
}

/// Heading start displacement for a viewport width. Compact viewports use
/// a smaller displacement so headings do not start outside their card.
pub fn heading_start_magnitude(viewport_width: f32) -> f32 {
    if viewport_width > COMPACT_BREAKPOINT {
        HEADING_START_OFFSET
    } else {
        HEADING_START_OFFSET_COMPACT
    }
}

/// Handles to the spawned page elements
pub struct Stage {
    pub letters: Vec<Entity>,
    pub tagline: Entity,
    pub follow_orb: Entity,
    pub parallax_orb: Entity,
    pub showcase: Entity,
    pub cards: Vec<Entity>,
    pub platform_heading: Entity,
    pub platform_tagline: Entity,
}

impl Stage {
    /// Spawn every page element in its pre-reveal state. Cards spawn with
    /// the visibility flag off; the carousel controller flips it once their
    /// initial positions are set.
    pub fn build(world: &mut World, content: &PageContent, viewport: Vec2) -> Self {
        let letters = content
            .hero
            .title
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .enumerate()
            .map(|(index, ch)| {
                world.spawn((
                    Letter { index, ch },
                    Opacity(0.0),
                    Offset::new(0.0, LETTER_START_OFFSET),
                ))
            })
            .collect();

        let tagline = world.spawn((
            Tagline,
            Opacity(0.0),
            Offset::new(0.0, -TAGLINE_START_OFFSET),
        ));

        let follow_orb = world.spawn((FollowOrb {
            pos: viewport * 0.5,
        },));
        let parallax_orb = world.spawn((ParallaxOrb, Offset::zero()));

        let showcase = world.spawn((
            ShowcasePanel,
            Opacity(SHOWCASE_START_OPACITY),
            Offset::new(0.0, SHOWCASE_START_OFFSET),
            Scale(SHOWCASE_START_SCALE),
        ));

        let magnitude = heading_start_magnitude(viewport.x);
        let cards = content
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let heading_left = card
                    .heading_left
                    .as_ref()
                    .map(|_| spawn_heading(world, HeadingSide::Left, magnitude));
                let heading_right = card
                    .heading_right
                    .as_ref()
                    .map(|_| spawn_heading(world, HeadingSide::Right, magnitude));
                world.spawn((
                    Card {
                        index,
                        heading_left,
                        heading_right,
                    },
                    SlidePercent(CARD_OFFSCREEN_PERCENT),
                    Opacity(0.0),
                    StackOrder(CARD_STACK_BASE - index as i32),
                    Visible(false),
                ))
            })
            .collect();

        let platform_heading = world.spawn((
            PlatformHeading,
            Opacity(0.0),
            Offset::new(0.0, -PLATFORM_REVEAL_OFFSET),
        ));
        let platform_tagline = world.spawn((
            PlatformTagline,
            Opacity(0.0),
            Offset::new(0.0, -PLATFORM_REVEAL_OFFSET),
        ));

        Self {
            letters,
            tagline,
            follow_orb,
            parallax_orb,
            showcase,
            cards,
            platform_heading,
            platform_tagline,
        }
    }
}

fn spawn_heading(world: &mut World, side: HeadingSide, magnitude: f32) -> Entity {
    let heading = Heading::new(side, magnitude);
    let offset = Offset::new(0.0, heading.start_offset);
    world.spawn((heading, Opacity(0.0), offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CardContent, HeroContent, PlatformsContent};

    fn test_content(card_count: usize) -> PageContent {
        PageContent {
            hero: HeroContent {
                title: "NOVA".to_string(),
                tagline: "tagline".to_string(),
            },
            cards: (0..card_count)
                .map(|i| CardContent {
                    title: format!("card {i}"),
                    body: "body".to_string(),
                    heading_left: Some("left".to_string()),
                    heading_right: Some("right".to_string()),
                })
                .collect(),
            platforms: PlatformsContent {
                heading: "heading".to_string(),
                tagline: "tagline".to_string(),
            },
            nav: Vec::new(),
        }
    }

    #[test]
    fn test_layout_section_order() {
        let layout = StageLayout::new(Vec2::new(1280.0, 720.0), 3.0);
        assert_eq!(layout.hero.top, 0.0);
        assert_eq!(layout.features.top, 720.0);
        // Platforms start after the features section plus its pin distance
        assert_eq!(layout.platforms.top, 720.0 + 720.0 + 3.0 * 720.0);
        assert_eq!(layout.total_height, layout.platforms.bottom());
    }

    #[test]
    fn test_layout_max_scroll() {
        let layout = StageLayout::new(Vec2::new(1280.0, 720.0), 3.0);
        assert_eq!(layout.max_scroll(), layout.total_height - 720.0);
    }

    #[test]
    fn test_features_screen_top_pins_and_releases() {
        let layout = StageLayout::new(Vec2::new(1280.0, 720.0), 3.0);
        let pin_start = layout.features.top;
        let pin_end = pin_start + layout.features_pin.distance;

        // Scrolling in: section approaches the top of the viewport
        assert_eq!(layout.features_screen_top(0.0), pin_start);
        assert_eq!(layout.features_screen_top(pin_start - 100.0), 100.0);
        // Pinned: held at the viewport top for the whole pin distance
        assert_eq!(layout.features_screen_top(pin_start), 0.0);
        assert_eq!(layout.features_screen_top(pin_start + 1000.0), 0.0);
        assert_eq!(layout.features_screen_top(pin_end), 0.0);
        // Released: scrolls away
        assert_eq!(layout.features_screen_top(pin_end + 50.0), -50.0);
    }

    #[test]
    fn test_heading_magnitude_breakpoint() {
        assert_eq!(heading_start_magnitude(1280.0), HEADING_START_OFFSET);
        assert_eq!(heading_start_magnitude(600.0), HEADING_START_OFFSET_COMPACT);
    }

    #[test]
    fn test_build_spawns_expected_elements() {
        let mut world = World::new();
        let content = test_content(3);
        let stage = Stage::build(&mut world, &content, Vec2::new(1280.0, 720.0));

        assert_eq!(stage.letters.len(), 4); // N, O, V, A
        assert_eq!(stage.cards.len(), 3);
        for &card_entity in &stage.cards {
            let card = world.get::<&Card>(card_entity).unwrap();
            assert!(card.heading_left.is_some());
            assert!(card.heading_right.is_some());
            // Cards spawn hidden until the carousel positions them
            assert!(!world.get::<&Visible>(card_entity).unwrap().0);
        }
    }

    #[test]
    fn test_build_skips_missing_headings() {
        let mut world = World::new();
        let mut content = test_content(1);
        content.cards[0].heading_right = None;
        let stage = Stage::build(&mut world, &content, Vec2::new(1280.0, 720.0));

        let card = world.get::<&Card>(stage.cards[0]).unwrap();
        assert!(card.heading_left.is_some());
        assert!(card.heading_right.is_none());
    }

    #[test]
    fn test_heading_sides_displace_in_opposite_directions() {
        let mut world = World::new();
        let stage = Stage::build(&mut world, &test_content(1), Vec2::new(1280.0, 720.0));
        let card = world.get::<&Card>(stage.cards[0]).unwrap();
        let left = world
            .get::<&Heading>(card.heading_left.unwrap())
            .unwrap()
            .start_offset;
        let right = world
            .get::<&Heading>(card.heading_right.unwrap())
            .unwrap()
            .start_offset;
        assert!(left < 0.0);
        assert!(right > 0.0);
        assert_eq!(left, -right);
    }
}
