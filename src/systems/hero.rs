//! Hero section animation.
//!
//! Two independent pieces: a clock-driven intro timeline (letters reveal
//! with a typing stagger, then the tagline) and scroll-scrubbed decoration
//! timelines (parallax orb drift, showcase panel settle). The intro plays
//! once at startup; the scrubbed timelines sample whatever the scroll
//! position says, every frame.

use hecs::World;

use crate::constants::*;
use crate::scroll::PinRegion;
use crate::stage::{Stage, StageLayout};
use crate::tween::{Channel, Ease, Timeline, TimelinePlayer};

/// Clock-driven hero intro
pub struct HeroIntro {
    player: TimelinePlayer,
}

impl HeroIntro {
    pub fn new(stage: &Stage) -> Self {
        let mut tl = Timeline::new();
        for (i, &letter) in stage.letters.iter().enumerate() {
            let at = i as f32 * LETTER_STAGGER;
            tl.tween_at(
                at,
                letter,
                Channel::OffsetY,
                LETTER_START_OFFSET,
                0.0,
                LETTER_DURATION,
                Ease::CubicOut,
            )
            .also(letter, Channel::Opacity, 0.0, 1.0, LETTER_DURATION, Ease::CubicOut);
        }
        // Tagline follows once the last letter has finished
        let tagline_at = tl.duration();
        tl.tween_at(
            tagline_at,
            stage.tagline,
            Channel::OffsetY,
            -TAGLINE_START_OFFSET,
            0.0,
            TAGLINE_DURATION,
            Ease::CubicOut,
        )
        .also(stage.tagline, Channel::Opacity, 0.0, 1.0, TAGLINE_DURATION, Ease::CubicOut);

        Self {
            player: TimelinePlayer::new(tl),
        }
    }

    pub fn update(&mut self, world: &mut World, dt: f32) {
        puffin::profile_function!();
        self.player.advance(world, dt);
    }

    pub fn is_finished(&self) -> bool {
        self.player.is_finished()
    }
}

/// Scroll-scrubbed hero decorations
pub struct HeroScrub {
    parallax: Timeline,
    parallax_pin: PinRegion,
    showcase: Timeline,
    showcase_pin: PinRegion,
}

impl HeroScrub {
    pub fn new(stage: &Stage, layout: &StageLayout) -> Self {
        let mut parallax = Timeline::new();
        parallax
            .tween(
                stage.parallax_orb,
                Channel::OffsetY,
                0.0,
                PARALLAX_ORB_DRIFT_Y,
                1.0,
                Ease::Linear,
            )
            .also(
                stage.parallax_orb,
                Channel::OffsetX,
                0.0,
                PARALLAX_ORB_DRIFT_X,
                1.0,
                Ease::Linear,
            );

        let mut showcase = Timeline::new();
        showcase
            .tween(
                stage.showcase,
                Channel::OffsetY,
                SHOWCASE_START_OFFSET,
                0.0,
                1.0,
                Ease::Linear,
            )
            .also(stage.showcase, Channel::Opacity, SHOWCASE_START_OPACITY, 1.0, 1.0, Ease::Linear)
            .also(stage.showcase, Channel::Scale, SHOWCASE_START_SCALE, 1.0, 1.0, Ease::Linear);

        Self {
            parallax,
            parallax_pin: layout.hero_pin(),
            showcase,
            showcase_pin: layout.showcase_pin(),
        }
    }

    /// Re-derive pin geometry after a resize; timelines are untouched
    pub fn relayout(&mut self, layout: &StageLayout) {
        self.parallax_pin = layout.hero_pin();
        self.showcase_pin = layout.showcase_pin();
    }

    pub fn update(&mut self, world: &mut World, scroll: f32) {
        puffin::profile_function!();
        let p = self.parallax_pin.progress(scroll);
        self.parallax.sample(world, p * self.parallax.duration());
        let p = self.showcase_pin.progress(scroll);
        self.showcase.sample(world, p * self.showcase.duration());
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
                title: "NOVA".to_string(),
                tagline: "tag".to_string(),
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
    fn test_intro_reveals_letters_then_tagline() {
        let mut world = World::new();
        let (stage, _) = test_stage(&mut world);
        let mut intro = HeroIntro::new(&stage);

        for _ in 0..200 {
            intro.update(&mut world, 1.0 / 60.0);
        }
        assert!(intro.is_finished());
        for &letter in &stage.letters {
            assert_eq!(read_channel(&world, letter, Channel::Opacity).unwrap(), 1.0);
            assert_eq!(read_channel(&world, letter, Channel::OffsetY).unwrap(), 0.0);
        }
        assert_eq!(read_channel(&world, stage.tagline, Channel::Opacity).unwrap(), 1.0);
    }

    #[test]
    fn test_letters_reveal_in_stagger_order() {
        let mut world = World::new();
        let (stage, _) = test_stage(&mut world);
        let mut intro = HeroIntro::new(&stage);

        // Partway in, earlier letters are further along than later ones
        for _ in 0..4 {
            intro.update(&mut world, LETTER_STAGGER / 2.0);
        }
        let first = read_channel(&world, stage.letters[0], Channel::Opacity).unwrap();
        let last = read_channel(&world, stage.letters[3], Channel::Opacity).unwrap();
        assert!(first > last);
    }

    #[test]
    fn test_tagline_waits_for_letters() {
        let mut world = World::new();
        let (stage, _) = test_stage(&mut world);
        let mut intro = HeroIntro::new(&stage);

        let letters_end = 3.0 * LETTER_STAGGER + LETTER_DURATION;
        intro.update(&mut world, letters_end - 0.05);
        assert_eq!(read_channel(&world, stage.tagline, Channel::Opacity).unwrap(), 0.0);
    }

    #[test]
    fn test_scrub_settles_showcase_at_features_top() {
        let mut world = World::new();
        let (stage, layout) = test_stage(&mut world);
        let mut scrub = HeroScrub::new(&stage, &layout);

        scrub.update(&mut world, 0.0);
        assert_eq!(
            read_channel(&world, stage.showcase, Channel::OffsetY).unwrap(),
            SHOWCASE_START_OFFSET
        );

        scrub.update(&mut world, layout.features.top);
        assert_eq!(read_channel(&world, stage.showcase, Channel::OffsetY).unwrap(), 0.0);
        assert_eq!(read_channel(&world, stage.showcase, Channel::Opacity).unwrap(), 1.0);
        assert_eq!(read_channel(&world, stage.showcase, Channel::Scale).unwrap(), 1.0);
    }

    #[test]
    fn test_scrub_is_symmetric_in_scroll() {
        let mut world = World::new();
        let (stage, layout) = test_stage(&mut world);
        let mut scrub = HeroScrub::new(&stage, &layout);

        scrub.update(&mut world, layout.features.top);
        scrub.update(&mut world, 0.0);
        assert_eq!(
            read_channel(&world, stage.showcase, Channel::OffsetY).unwrap(),
            SHOWCASE_START_OFFSET
        );
        assert_eq!(
            read_channel(&world, stage.parallax_orb, Channel::OffsetY).unwrap(),
            0.0
        );
    }
}
