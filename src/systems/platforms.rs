//! Cross-platform section reveal.
//!
//! The heading and tagline slide/fade in when the section top crosses the
//! viewport midpoint, and the same timeline plays in reverse when the
//! section leaves again, however many times the user scrolls past.

use hecs::World;

use crate::constants::*;
use crate::stage::{Stage, StageLayout};
use crate::tween::{Channel, Ease, Timeline, TimelinePlayer};

pub struct PlatformsReveal {
    player: TimelinePlayer,
}

impl PlatformsReveal {
    pub fn new(stage: &Stage) -> Self {
        let mut tl = Timeline::new();
        tl.tween(
            stage.platform_heading,
            Channel::OffsetY,
            -PLATFORM_REVEAL_OFFSET,
            0.0,
            PLATFORM_HEADING_DURATION,
            Ease::CubicOut,
        )
        .also(
            stage.platform_heading,
            Channel::Opacity,
            0.0,
            1.0,
            PLATFORM_HEADING_DURATION,
            Ease::CubicOut,
        )
        .pause(PLATFORM_TAGLINE_DELAY)
        .tween(
            stage.platform_tagline,
            Channel::OffsetY,
            -PLATFORM_REVEAL_OFFSET,
            0.0,
            PLATFORM_HEADING_DURATION,
            Ease::CubicOut,
        )
        .also(
            stage.platform_tagline,
            Channel::Opacity,
            0.0,
            1.0,
            PLATFORM_HEADING_DURATION,
            Ease::CubicOut,
        );

        Self {
            player: TimelinePlayer::new(tl),
        }
    }

    /// Pick a playback direction from the section's viewport position,
    /// then advance the reveal in that direction.
    pub fn update(&mut self, world: &mut World, layout: &StageLayout, scroll: f32, dt: f32) {
        puffin::profile_function!();
        let trigger_line = scroll + layout.viewport.y * PLATFORM_TRIGGER_FRACTION;
        if layout.platforms.top <= trigger_line {
            self.player.play_forward();
        } else {
            self.player.play_reverse();
        }
        self.player.advance(world, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HeroContent, PageContent, PlatformsContent};
    use crate::tween::read_channel;
    use glam::Vec2;

    fn test_stage(world: &mut World) -> (Stage, StageLayout) {
        let content = PageContent {
            hero: HeroContent {
                title: "X".to_string(),
                tagline: "t".to_string(),
            },
            cards: Vec::new(),
            platforms: PlatformsContent {
                heading: "h".to_string(),
                tagline: "t".to_string(),
            },
            nav: Vec::new(),
        };
        let viewport = Vec2::new(1280.0, 720.0);
        let stage = Stage::build(world, &content, viewport);
        let layout = StageLayout::new(viewport, CAROUSEL_PIN_DISTANCE_VH);
        (stage, layout)
    }

    #[test]
    fn test_reveal_plays_when_section_crosses_midpoint() {
        let mut world = World::new();
        let (stage, layout) = test_stage(&mut world);
        let mut reveal = PlatformsReveal::new(&stage);

        let in_view = layout.platforms.top - layout.viewport.y * 0.25;
        for _ in 0..300 {
            reveal.update(&mut world, &layout, in_view, 1.0 / 60.0);
        }

        assert_eq!(
            read_channel(&world, stage.platform_heading, Channel::Opacity).unwrap(),
            1.0
        );
        assert_eq!(
            read_channel(&world, stage.platform_tagline, Channel::Opacity).unwrap(),
            1.0
        );
        assert_eq!(
            read_channel(&world, stage.platform_heading, Channel::OffsetY).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_heading_leads_tagline() {
        let mut world = World::new();
        let (stage, layout) = test_stage(&mut world);
        let mut reveal = PlatformsReveal::new(&stage);

        let in_view = layout.platforms.top;
        for _ in 0..30 {
            reveal.update(&mut world, &layout, in_view, 1.0 / 60.0);
        }
        let heading = read_channel(&world, stage.platform_heading, Channel::Opacity).unwrap();
        let tagline = read_channel(&world, stage.platform_tagline, Channel::Opacity).unwrap();
        assert!(heading > tagline);
    }

    #[test]
    fn test_reveal_reverses_when_section_leaves() {
        let mut world = World::new();
        let (stage, layout) = test_stage(&mut world);
        let mut reveal = PlatformsReveal::new(&stage);

        let in_view = layout.platforms.top;
        for _ in 0..300 {
            reveal.update(&mut world, &layout, in_view, 1.0 / 60.0);
        }
        // Scroll back out: the same timeline rewinds to hidden
        for _ in 0..300 {
            reveal.update(&mut world, &layout, 0.0, 1.0 / 60.0);
        }

        assert_eq!(
            read_channel(&world, stage.platform_heading, Channel::Opacity).unwrap(),
            0.0
        );
        assert_eq!(
            read_channel(&world, stage.platform_heading, Channel::OffsetY).unwrap(),
            -PLATFORM_REVEAL_OFFSET
        );
    }
}
