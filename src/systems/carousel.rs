//! Scroll-driven feature-card carousel.
//!
//! One progress signal (position within the pinned scroll stretch) drives
//! everything here. The slide transitions come from a statically built
//! timeline sampled at `progress * duration`, so they are smooth and
//! proportional to scroll. The heading decorations are a per-card
//! two-state machine keyed to the discrete card index derived from the
//! same progress value; a previous-index guard keeps re-dispatch off the
//! scroll tick hot path. Because both read the same progress, the card
//! sliding into view is always the card whose headings reveal.

use hecs::{Entity, World};

use crate::components::{Card, Heading, Opacity, SlidePercent, StackOrder, Visible};
use crate::constants::*;
use crate::scroll::PinRegion;
use crate::stage::heading_start_magnitude;
use crate::tween::{write_channel, Channel, Ease, Timeline, Tweener};

/// How a card's headings leave when the card stops being current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingExit {
    /// Snap back to the hidden state
    Instant,
    /// Short eased return to the hidden state
    Eased,
}

/// Carousel tuning. Defaults mirror the page constants; tests override
/// fields freely.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Number of equal progress partitions used to derive the card index.
    /// Explicit rather than inferred from the card count; the two need not
    /// agree.
    pub segment_count: usize,
    /// Pin distance in viewport heights
    pub pin_distance_vh: f32,
    /// Card slide duration, timeline seconds
    pub transition_duration: f32,
    /// Pause before, between, and after slides, timeline seconds
    pub pause_duration: f32,
    /// Heading reveal duration
    pub heading_duration: f32,
    /// Delay of the right heading behind the left
    pub heading_stagger: f32,
    pub heading_exit: HeadingExit,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            segment_count: CAROUSEL_SEGMENT_COUNT,
            pin_distance_vh: CAROUSEL_PIN_DISTANCE_VH,
            transition_duration: CARD_TRANSITION_DURATION,
            pause_duration: CARD_TRANSITION_PAUSE,
            heading_duration: HEADING_DURATION,
            heading_stagger: HEADING_STAGGER,
            heading_exit: HeadingExit::Instant,
        }
    }
}

/// Map pin progress to the current card index.
///
/// [0,1] is partitioned into `segment_count` equal segments; a progress
/// value exactly on a boundary belongs to the segment it enters (floor
/// semantics), and the result is clamped so `progress == 1.0` stays in
/// range. Pure in `progress`: scrolling back through a value yields the
/// same index it did on the way forward.
pub fn index_for_progress(progress: f32, segment_count: usize, card_count: usize) -> usize {
    if card_count == 0 || segment_count == 0 {
        return 0;
    }
    let raw = (progress.clamp(0.0, 1.0) * segment_count as f32).floor() as usize;
    raw.min(card_count - 1)
}

/// Controller for the pinned feature-card carousel
pub struct Carousel {
    cards: Vec<Entity>,
    config: CarouselConfig,
    pin: PinRegion,
    timeline: Timeline,
    /// Last dispatched index; `None` until the first update
    previous_index: Option<usize>,
}

impl Carousel {
    /// Bind the controller to a card list and pin region.
    ///
    /// Returns `None` for an empty card list: no pin is taken, no timeline
    /// is built, and the section simply does not animate.
    pub fn new(
        world: &mut World,
        cards: &[Entity],
        pin: PinRegion,
        config: CarouselConfig,
    ) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        init_cards(world, cards);
        let timeline = build_transition_timeline(cards, &config);
        Some(Self {
            cards: cards.to_vec(),
            config,
            pin,
            timeline,
            previous_index: None,
        })
    }

    /// Index dispatched by the most recent update
    pub fn current_index(&self) -> Option<usize> {
        self.previous_index
    }

    pub fn pin(&self) -> PinRegion {
        self.pin
    }

    /// Rebind the pin region (scroll geometry changed, e.g. on resize)
    pub fn set_pin(&mut self, pin: PinRegion) {
        self.pin = pin;
    }

    /// Per-frame update from the applied scroll offset. Samples the slide
    /// timeline at the scrubbed position, then re-derives the card index
    /// and dispatches heading animations if it changed. Runs to completion
    /// within the frame; there is no overlapping dispatch.
    pub fn update(&mut self, world: &mut World, tweener: &mut Tweener, scroll: f32) {
        puffin::profile_function!();

        let progress = self.pin.progress(scroll);
        self.timeline
            .sample(world, progress * self.timeline.duration());

        let index = index_for_progress(progress, self.config.segment_count, self.cards.len());
        if self.previous_index == Some(index) {
            return;
        }
        self.previous_index = Some(index);
        self.dispatch_headings(world, tweener, index);
    }

    /// Reveal the current card's headings, hide everyone else's.
    /// Cards missing a heading on one side skip that side only.
    fn dispatch_headings(&self, world: &mut World, tweener: &mut Tweener, current: usize) {
        for (i, &card_entity) in self.cards.iter().enumerate() {
            let Ok(card) = world.get::<&Card>(card_entity).map(|c| *c) else {
                continue;
            };
            let pair = [
                (card.heading_left, 0.0),
                (card.heading_right, self.config.heading_stagger),
            ];
            for (heading, delay) in pair {
                let Some(heading) = heading else {
                    continue;
                };
                if i == current {
                    self.reveal_heading(world, tweener, heading, delay);
                } else {
                    self.hide_heading(world, tweener, heading);
                }
            }
        }
    }

    fn reveal_heading(&self, world: &World, tweener: &mut Tweener, heading: Entity, delay: f32) {
        let duration = self.config.heading_duration;
        tweener.to(world, heading, Channel::OffsetY, 0.0, duration, delay, Ease::QuadOut);
        tweener.to(world, heading, Channel::Opacity, 1.0, duration, delay, Ease::QuadOut);
    }

    fn hide_heading(&self, world: &mut World, tweener: &mut Tweener, heading: Entity) {
        let Ok(start_offset) = world.get::<&Heading>(heading).map(|h| h.start_offset) else {
            return;
        };
        match self.config.heading_exit {
            HeadingExit::Instant => {
                tweener.set(world, heading, Channel::OffsetY, start_offset);
                tweener.set(world, heading, Channel::Opacity, 0.0);
            }
            HeadingExit::Eased => {
                let duration = HEADING_EXIT_DURATION;
                tweener.to(world, heading, Channel::OffsetY, start_offset, duration, 0.0, Ease::QuadOut);
                tweener.to(world, heading, Channel::Opacity, 0.0, duration, 0.0, Ease::QuadOut);
            }
        }
    }

    /// Re-normalize heading rest displacement after a viewport resize.
    /// Hidden headings are re-seated at the new displacement; the current
    /// card's headings keep their offset and opacity untouched, so a
    /// revealed card does not blink on resize. Initialization does not
    /// re-run.
    pub fn resize(&mut self, world: &mut World, viewport_width: f32) {
        let magnitude = heading_start_magnitude(viewport_width);
        let current = self.previous_index;
        for (i, &card_entity) in self.cards.iter().enumerate() {
            let Ok(card) = world.get::<&Card>(card_entity).map(|c| *c) else {
                continue;
            };
            for heading in [card.heading_left, card.heading_right] {
                let Some(heading) = heading else {
                    continue;
                };
                let Ok(start_offset) = world.get::<&mut Heading>(heading).map(|mut h| {
                    let side = h.side;
                    *h = Heading::new(side, magnitude);
                    h.start_offset
                }) else {
                    continue;
                };
                if current != Some(i) {
                    write_channel(world, heading, Channel::OffsetY, start_offset);
                }
            }
        }
    }

    /// Release the controller: cancel every pending card and heading tween
    /// so no animation callback outlives the section. The pin binding dies
    /// with the controller value.
    pub fn teardown(&mut self, world: &World, tweener: &mut Tweener) {
        for &card_entity in &self.cards {
            tweener.cancel_target(card_entity);
            if let Ok(card) = world.get::<&Card>(card_entity).map(|c| *c) {
                for heading in [card.heading_left, card.heading_right].into_iter().flatten() {
                    tweener.cancel_target(heading);
                }
            }
        }
        self.previous_index = None;
    }
}

/// Deterministic initial state: card 0 centered and opaque, every other
/// card transparent and off-screen right, stacking priority descending so
/// waiting cards never occlude the active one. The visibility flag flips
/// on only after positions are written; nothing is drawn unpositioned.
fn init_cards(world: &mut World, cards: &[Entity]) {
    for (i, &card_entity) in cards.iter().enumerate() {
        let (slide, opacity) = if i == 0 {
            (0.0, 1.0)
        } else {
            (CARD_OFFSCREEN_PERCENT, 0.0)
        };
        if let Ok(mut c) = world.get::<&mut SlidePercent>(card_entity) {
            c.0 = slide;
        }
        if let Ok(mut c) = world.get::<&mut Opacity>(card_entity) {
            c.0 = opacity;
        }
        if let Ok(mut c) = world.get::<&mut StackOrder>(card_entity) {
            c.0 = CARD_STACK_BASE - i as i32;
        }
        if let Ok(mut c) = world.get::<&mut Visible>(card_entity) {
            c.0 = true;
        }
    }
}

/// Build the slide timeline: an opening pause, then for each card after
/// the first a paired transition (previous card out left, next card in
/// from the right) followed by a pause. Scrubbed against pin progress by
/// the update loop; never rebuilt per tick.
fn build_transition_timeline(cards: &[Entity], config: &CarouselConfig) -> Timeline {
    let mut tl = Timeline::new();
    tl.pause(config.pause_duration);
    for i in 1..cards.len() {
        tl.tween(
            cards[i - 1],
            Channel::SlidePercent,
            0.0,
            -CARD_OFFSCREEN_PERCENT,
            config.transition_duration,
            Ease::QuadInOut,
        )
        .also(cards[i - 1], Channel::Opacity, 1.0, 0.0, config.transition_duration, Ease::QuadInOut)
        .also(
            cards[i],
            Channel::SlidePercent,
            CARD_OFFSCREEN_PERCENT,
            0.0,
            config.transition_duration,
            Ease::QuadInOut,
        )
        .also(cards[i], Channel::Opacity, 0.0, 1.0, config.transition_duration, Ease::QuadInOut)
        .pause(config.pause_duration);
    }
    tl
}
