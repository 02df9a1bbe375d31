//! Time-based animation engine for stage elements.
//!
//! Two mechanisms live here:
//! - `Tweener`: a set of in-flight tweens advanced by wall-clock time.
//!   Starting a tween on a (target, channel) pair retargets any tween
//!   already running there.
//! - `Timeline`: an ordered set of spans built once and sampled at an
//!   absolute time. Sampling is a pure function of the time value, which
//!   makes a timeline equally usable scrubbed from scroll progress or
//!   played forward/reverse from a clock (`TimelinePlayer`).

use std::collections::HashMap;

use hecs::{Entity, World};

use crate::components::{Offset, Opacity, Scale, SlidePercent};

/// Easing curves used across the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadOut,
    CubicOut,
    QuadInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Animatable scalar property of a stage element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Opacity,
    OffsetX,
    OffsetY,
    SlidePercent,
    Scale,
}

/// Read a channel value. `None` if the element lacks the component.
pub fn read_channel(world: &World, target: Entity, channel: Channel) -> Option<f32> {
    match channel {
        Channel::Opacity => world.get::<&Opacity>(target).ok().map(|c| c.0),
        Channel::OffsetX => world.get::<&Offset>(target).ok().map(|c| c.x),
        Channel::OffsetY => world.get::<&Offset>(target).ok().map(|c| c.y),
        Channel::SlidePercent => world.get::<&SlidePercent>(target).ok().map(|c| c.0),
        Channel::Scale => world.get::<&Scale>(target).ok().map(|c| c.0),
    }
}

/// Write a channel value. Elements missing the component are skipped
/// silently; animation simply does not occur for them.
pub fn write_channel(world: &mut World, target: Entity, channel: Channel, value: f32) {
    match channel {
        Channel::Opacity => {
            if let Ok(mut c) = world.get::<&mut Opacity>(target) {
                c.0 = value;
            }
        }
        Channel::OffsetX => {
            if let Ok(mut c) = world.get::<&mut Offset>(target) {
                c.x = value;
            }
        }
        Channel::OffsetY => {
            if let Ok(mut c) = world.get::<&mut Offset>(target) {
                c.y = value;
            }
        }
        Channel::SlidePercent => {
            if let Ok(mut c) = world.get::<&mut SlidePercent>(target) {
                c.0 = value;
            }
        }
        Channel::Scale => {
            if let Ok(mut c) = world.get::<&mut Scale>(target) {
                c.0 = value;
            }
        }
    }
}

/// One in-flight animation
#[derive(Debug, Clone, Copy)]
struct Tween {
    target: Entity,
    channel: Channel,
    from: f32,
    to: f32,
    delay: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
}

impl Tween {
    fn value(&self) -> f32 {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

/// Active tween set. Owned by the frame loop; controllers start tweens,
/// `update` advances and applies them.
#[derive(Default)]
pub struct Tweener {
    tweens: Vec<Tween>,
}

impl Tweener {
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    /// Start a tween from the element's current value. Replaces any tween
    /// already running on the same (target, channel). No-op if the element
    /// lacks the channel's component.
    pub fn to(
        &mut self,
        world: &World,
        target: Entity,
        channel: Channel,
        to: f32,
        duration: f32,
        delay: f32,
        ease: Ease,
    ) {
        let Some(from) = read_channel(world, target, channel) else {
            return;
        };
        self.cancel_channel(target, channel);
        self.tweens.push(Tween {
            target,
            channel,
            from,
            to,
            delay,
            duration,
            ease,
            elapsed: 0.0,
        });
    }

    /// Set a channel immediately, cancelling any tween running on it.
    pub fn set(&mut self, world: &mut World, target: Entity, channel: Channel, value: f32) {
        self.cancel_channel(target, channel);
        write_channel(world, target, channel, value);
    }

    /// Advance all tweens and apply their values. Finished tweens write
    /// their end value exactly before removal.
    pub fn update(&mut self, world: &mut World, dt: f32) {
        for tween in &mut self.tweens {
            tween.elapsed += dt;
        }
        let mut writes: Vec<(Entity, Channel, f32)> = Vec::with_capacity(self.tweens.len());
        for tween in &self.tweens {
            if tween.elapsed >= tween.delay {
                writes.push((tween.target, tween.channel, tween.value()));
            }
        }
        for (target, channel, value) in writes {
            write_channel(world, target, channel, value);
        }
        self.tweens.retain(|t| !t.is_finished());
    }

    /// Drop every tween targeting the given element
    pub fn cancel_target(&mut self, target: Entity) {
        self.tweens.retain(|t| t.target != target);
    }

    fn cancel_channel(&mut self, target: Entity, channel: Channel) {
        self.tweens
            .retain(|t| !(t.target == target && t.channel == channel));
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

/// A positioned segment of a timeline
#[derive(Debug, Clone, Copy)]
struct Span {
    start: f32,
    duration: f32,
    target: Entity,
    channel: Channel,
    from: f32,
    to: f32,
    ease: Ease,
}

impl Span {
    fn value_at(&self, t: f32) -> f32 {
        let local = if self.duration <= 0.0 {
            1.0
        } else {
            ((t - self.start) / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.apply(local)
    }
}

/// Statically built animation timeline sampled at an absolute time.
///
/// Build order follows reading order: `tween` appends after everything
/// added so far, `also` starts together with the most recently added span,
/// `pause` inserts dead time, `tween_at` places a span at an explicit time.
#[derive(Default)]
pub struct Timeline {
    spans: Vec<Span>,
    cursor: f32,
    last_start: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert dead time at the current end of the timeline
    pub fn pause(&mut self, duration: f32) -> &mut Self {
        self.cursor += duration;
        self
    }

    /// Append a span at the current end of the timeline
    pub fn tween(
        &mut self,
        target: Entity,
        channel: Channel,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        let start = self.cursor;
        self.insert(Span {
            start,
            duration,
            target,
            channel,
            from,
            to,
            ease,
        });
        self.last_start = start;
        self.cursor = start + duration;
        self
    }

    /// Add a span starting together with the most recently added one
    pub fn also(
        &mut self,
        target: Entity,
        channel: Channel,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        let start = self.last_start;
        self.insert(Span {
            start,
            duration,
            target,
            channel,
            from,
            to,
            ease,
        });
        self.cursor = self.cursor.max(start + duration);
        self
    }

    /// Place a span at an explicit time without moving the append cursor
    /// past it (beyond extending the total duration)
    pub fn tween_at(
        &mut self,
        at: f32,
        target: Entity,
        channel: Channel,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        self.insert(Span {
            start: at,
            duration,
            target,
            channel,
            from,
            to,
            ease,
        });
        self.last_start = at;
        self.cursor = self.cursor.max(at + duration);
        self
    }

    /// Total duration, including trailing pauses
    pub fn duration(&self) -> f32 {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    // Spans are kept sorted by start so sampling can resolve overlapping
    // spans on the same channel in chronological order.
    fn insert(&mut self, span: Span) {
        let at = self
            .spans
            .partition_point(|existing| existing.start <= span.start);
        self.spans.insert(at, span);
    }

    /// Sample the timeline at time `t`, writing every animated channel.
    ///
    /// For each (target, channel) the value is taken from the latest span
    /// that has started by `t`; before any span starts, the earliest span's
    /// `from` value applies. The result depends only on `t`, so scrubbing
    /// backward restores earlier states exactly.
    pub fn sample(&self, world: &mut World, t: f32) {
        let mut writes: HashMap<(Entity, Channel), f32> = HashMap::new();
        for span in &self.spans {
            let key = (span.target, span.channel);
            if span.start <= t {
                writes.insert(key, span.value_at(t));
            } else {
                writes.entry(key).or_insert(span.from);
            }
        }
        for ((target, channel), value) in writes {
            write_channel(world, target, channel, value);
        }
    }
}

/// Playback direction for clock-driven timelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Plays a timeline against wall-clock time, in either direction.
/// Used for the hero intro and the platforms reveal; scroll-scrubbed
/// timelines sample directly instead.
pub struct TimelinePlayer {
    timeline: Timeline,
    time: f32,
    direction: PlayDirection,
}

impl TimelinePlayer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            time: 0.0,
            direction: PlayDirection::Forward,
        }
    }

    pub fn play_forward(&mut self) {
        self.direction = PlayDirection::Forward;
    }

    pub fn play_reverse(&mut self) {
        self.direction = PlayDirection::Reverse;
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_finished(&self) -> bool {
        match self.direction {
            PlayDirection::Forward => self.time >= self.timeline.duration(),
            PlayDirection::Reverse => self.time <= 0.0,
        }
    }

    /// Advance playback and apply the sampled state. Settled players
    /// (at either end, not moving) skip the write entirely.
    pub fn advance(&mut self, world: &mut World, dt: f32) {
        let next = match self.direction {
            PlayDirection::Forward => (self.time + dt).min(self.timeline.duration()),
            PlayDirection::Reverse => (self.time - dt).max(0.0),
        };
        if next != self.time {
            self.time = next;
            self.timeline.sample(world, self.time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_panel(world: &mut World) -> Entity {
        world.spawn((Opacity(0.0), Offset::zero(), SlidePercent(100.0)))
    }

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::QuadOut, Ease::CubicOut, Ease::QuadInOut] {
            assert!((ease.apply(0.0) - 0.0).abs() < 1e-6);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut world = World::new();
        let panel = spawn_panel(&mut world);
        let mut tweener = Tweener::new();

        tweener.to(&world, panel, Channel::Opacity, 1.0, 0.5, 0.0, Ease::QuadOut);
        for _ in 0..10 {
            tweener.update(&mut world, 0.1);
        }

        assert!(tweener.is_empty());
        let opacity = read_channel(&world, panel, Channel::Opacity).unwrap();
        assert!((opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tween_retarget_replaces_in_flight() {
        let mut world = World::new();
        let panel = spawn_panel(&mut world);
        let mut tweener = Tweener::new();

        tweener.to(&world, panel, Channel::Opacity, 1.0, 1.0, 0.0, Ease::Linear);
        tweener.update(&mut world, 0.5);
        tweener.to(&world, panel, Channel::Opacity, 0.0, 1.0, 0.0, Ease::Linear);

        assert_eq!(tweener.len(), 1);
        // The replacement starts from the mid-flight value, not the original
        for _ in 0..20 {
            tweener.update(&mut world, 0.1);
        }
        let opacity = read_channel(&world, panel, Channel::Opacity).unwrap();
        assert!((opacity - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_cancels_tween() {
        let mut world = World::new();
        let panel = spawn_panel(&mut world);
        let mut tweener = Tweener::new();

        tweener.to(&world, panel, Channel::Opacity, 1.0, 1.0, 0.0, Ease::Linear);
        tweener.set(&mut world, panel, Channel::Opacity, 0.25);

        assert!(tweener.is_empty());
        let opacity = read_channel(&world, panel, Channel::Opacity).unwrap();
        assert!((opacity - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_tween_missing_component_is_noop() {
        let mut world = World::new();
        let bare = world.spawn((Opacity(0.0),));
        let mut tweener = Tweener::new();

        tweener.to(&world, bare, Channel::SlidePercent, 0.0, 1.0, 0.0, Ease::Linear);
        assert!(tweener.is_empty());
    }

    #[test]
    fn test_delay_defers_first_write() {
        let mut world = World::new();
        let panel = spawn_panel(&mut world);
        let mut tweener = Tweener::new();

        tweener.to(&world, panel, Channel::Opacity, 1.0, 0.2, 0.5, Ease::Linear);
        tweener.update(&mut world, 0.3);

        // Still in the delay window: value untouched
        let opacity = read_channel(&world, panel, Channel::Opacity).unwrap();
        assert!((opacity - 0.0).abs() < 1e-6);
    }

    fn slide_timeline(world: &mut World) -> (Timeline, Entity, Entity) {
        let a = spawn_panel(world);
        let b = spawn_panel(world);
        write_channel(world, a, Channel::SlidePercent, 0.0);

        let mut tl = Timeline::new();
        tl.pause(0.5)
            .tween(a, Channel::SlidePercent, 0.0, -100.0, 1.0, Ease::QuadInOut)
            .also(b, Channel::SlidePercent, 100.0, 0.0, 1.0, Ease::QuadInOut)
            .pause(0.5);
        (tl, a, b)
    }

    #[test]
    fn test_timeline_duration_includes_pauses() {
        let mut world = World::new();
        let (tl, _, _) = slide_timeline(&mut world);
        assert!((tl.duration() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_timeline_sample_endpoints() {
        let mut world = World::new();
        let (tl, a, b) = slide_timeline(&mut world);

        tl.sample(&mut world, 0.0);
        assert!((read_channel(&world, a, Channel::SlidePercent).unwrap() - 0.0).abs() < 1e-6);
        assert!((read_channel(&world, b, Channel::SlidePercent).unwrap() - 100.0).abs() < 1e-6);

        tl.sample(&mut world, 2.0);
        assert!((read_channel(&world, a, Channel::SlidePercent).unwrap() + 100.0).abs() < 1e-6);
        assert!((read_channel(&world, b, Channel::SlidePercent).unwrap() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_timeline_also_spans_move_together() {
        let mut world = World::new();
        let (tl, a, b) = slide_timeline(&mut world);

        // Halfway through the paired transition (QuadInOut(0.5) = 0.5)
        tl.sample(&mut world, 1.0);
        assert!((read_channel(&world, a, Channel::SlidePercent).unwrap() + 50.0).abs() < 1e-4);
        assert!((read_channel(&world, b, Channel::SlidePercent).unwrap() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_timeline_scrub_back_restores_state() {
        let mut world = World::new();
        let (tl, a, b) = slide_timeline(&mut world);

        tl.sample(&mut world, 2.0);
        tl.sample(&mut world, 0.0);

        assert!((read_channel(&world, a, Channel::SlidePercent).unwrap() - 0.0).abs() < 1e-6);
        assert!((read_channel(&world, b, Channel::SlidePercent).unwrap() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_timeline_later_span_wins_after_start() {
        let mut world = World::new();
        let a = spawn_panel(&mut world);

        // Same channel animated twice: in at t=0..1, out at t=2..3
        let mut tl = Timeline::new();
        tl.tween(a, Channel::SlidePercent, 100.0, 0.0, 1.0, Ease::Linear)
            .pause(1.0)
            .tween(a, Channel::SlidePercent, 0.0, -100.0, 1.0, Ease::Linear);

        tl.sample(&mut world, 1.5);
        // Between spans: first span's end value holds
        assert!((read_channel(&world, a, Channel::SlidePercent).unwrap() - 0.0).abs() < 1e-6);

        tl.sample(&mut world, 2.5);
        assert!((read_channel(&world, a, Channel::SlidePercent).unwrap() + 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_player_forward_then_reverse() {
        let mut world = World::new();
        let a = spawn_panel(&mut world);

        let mut tl = Timeline::new();
        tl.tween(a, Channel::Opacity, 0.0, 1.0, 1.0, Ease::Linear);
        let mut player = TimelinePlayer::new(tl);

        for _ in 0..12 {
            player.advance(&mut world, 0.1);
        }
        assert!(player.is_finished());
        assert!((read_channel(&world, a, Channel::Opacity).unwrap() - 1.0).abs() < 1e-6);

        player.play_reverse();
        for _ in 0..12 {
            player.advance(&mut world, 0.1);
        }
        assert!((read_channel(&world, a, Channel::Opacity).unwrap() - 0.0).abs() < 1e-6);
    }
}
