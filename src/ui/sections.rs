//! Painter-driven rendering of the page sections.
//!
//! Geometry arrives in physical pixels (layout, scroll, pointer) and is
//! divided by egui's pixels-per-point at draw time. Animated offsets are
//! already logical points and are applied after the conversion.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    Card, FollowOrb, Offset, Opacity, ParallaxOrb, Scale, SlidePercent, StackOrder, Visible,
};
use crate::constants::*;
use crate::content::PageContent;
use crate::stage::{Stage, StageLayout};
use crate::ui::style::colors;

/// Apply an animated opacity to a palette color
fn fade(color: egui::Color32, opacity: f32) -> egui::Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Animated opacity and offset of an element, with defaults for elements
/// that lack either component
fn visual(world: &World, entity: Entity) -> (f32, Vec2) {
    let opacity = world.get::<&Opacity>(entity).map(|o| o.0).unwrap_or(1.0);
    let offset = world
        .get::<&Offset>(entity)
        .map(|o| Vec2::new(o.x, o.y))
        .unwrap_or(Vec2::ZERO);
    (opacity, offset)
}

/// Draw the whole page at the current scroll position
pub fn draw_page(
    ctx: &egui::Context,
    world: &World,
    stage: &Stage,
    content: &PageContent,
    layout: &StageLayout,
    scroll: f32,
) {
    puffin::profile_function!();
    draw_orbs(ctx, world, stage, layout, scroll);
    draw_showcase(ctx, world, stage, layout, scroll);
    draw_hero_text(ctx, world, stage, content, layout, scroll);
    draw_feature_cards(ctx, world, stage, content, layout, scroll);
    draw_platforms(ctx, world, stage, content, layout, scroll);
}

/// Soft three-ring glow used by both orbs
fn glow(painter: &egui::Painter, center: egui::Pos2, radius: f32, opacity: f32) {
    painter.circle_filled(center, radius, fade(colors::ACCENT_SOFT, 0.10 * opacity));
    painter.circle_filled(center, radius * 0.66, fade(colors::ACCENT, 0.16 * opacity));
    painter.circle_filled(center, radius * 0.38, fade(colors::ACCENT, 0.28 * opacity));
}

fn draw_orbs(ctx: &egui::Context, world: &World, stage: &Stage, layout: &StageLayout, scroll: f32) {
    // Orbs live in the hero section; stop drawing once it has scrolled away
    if scroll >= layout.hero.bottom() {
        return;
    }
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("orbs"),
    ));
    let ppp = ctx.pixels_per_point();

    if let Ok(orb) = world.get::<&FollowOrb>(stage.follow_orb) {
        let center = egui::pos2(orb.pos.x / ppp, orb.pos.y / ppp);
        glow(&painter, center, ORB_RADIUS, 1.0);
    }

    if world.get::<&ParallaxOrb>(stage.parallax_orb).is_ok() {
        let (_, offset) = visual(world, stage.parallax_orb);
        let base_x = layout.viewport.x * 0.74 / ppp;
        let base_y = (layout.hero.top - scroll + layout.hero.height * 0.30) / ppp;
        let center = egui::pos2(base_x + offset.x, base_y + offset.y);
        glow(&painter, center, PARALLAX_ORB_RADIUS, 0.7);
    }
}

fn draw_showcase(
    ctx: &egui::Context,
    world: &World,
    stage: &Stage,
    layout: &StageLayout,
    scroll: f32,
) {
    let ppp = ctx.pixels_per_point();
    let vw = layout.viewport.x / ppp;
    let vh = layout.viewport.y / ppp;
    let top = layout.features_screen_top(scroll) / ppp;
    if top >= vh || top + vh <= 0.0 {
        return;
    }

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("showcase"),
    ));
    let (opacity, offset) = visual(world, stage.showcase);
    let scale = world.get::<&Scale>(stage.showcase).map(|s| s.0).unwrap_or(1.0);

    let size = egui::vec2(vw * 0.82, vh * 0.62) * scale;
    let center = egui::pos2(vw * 0.5, top + vh * 0.5 + offset.y);
    let rect = egui::Rect::from_center_size(center, size);

    painter.rect(
        rect,
        egui::Rounding::same(12.0),
        fade(colors::SHOWCASE_BG, opacity),
        egui::Stroke::new(1.0, fade(colors::PANEL_BORDER, opacity)),
    );
    // Skeleton bars suggesting a product shot
    let bar_w = rect.width() * 0.5;
    for i in 0..3 {
        let y = rect.top() + rect.height() * (0.2 + 0.12 * i as f32);
        let bar = egui::Rect::from_min_size(
            egui::pos2(rect.left() + rect.width() * 0.08, y),
            egui::vec2(bar_w / (i + 1) as f32, 10.0),
        );
        painter.rect(
            bar,
            egui::Rounding::same(4.0),
            fade(colors::PANEL_BORDER, opacity * 0.8),
            egui::Stroke::NONE,
        );
    }
}

fn draw_hero_text(
    ctx: &egui::Context,
    world: &World,
    stage: &Stage,
    content: &PageContent,
    layout: &StageLayout,
    scroll: f32,
) {
    if scroll >= layout.hero.bottom() {
        return;
    }
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("hero_text"),
    ));
    let ppp = ctx.pixels_per_point();
    let vw = layout.viewport.x / ppp;
    let hero_top = (layout.hero.top - scroll) / ppp;
    let hero_h = layout.hero.height / ppp;

    // Letters are positioned individually so each can carry its own
    // offset and opacity during the typing reveal
    let title_font = egui::FontId::proportional(88.0);
    let tracking = 6.0;
    let widths: Vec<f32> = stage
        .letters
        .iter()
        .filter_map(|&e| world.get::<&crate::components::Letter>(e).ok().map(|l| l.ch))
        .map(|ch| ctx.fonts(|f| f.glyph_width(&title_font, ch)))
        .collect();
    let total: f32 = widths.iter().sum::<f32>() + tracking * widths.len().saturating_sub(1) as f32;

    let mut x = vw * 0.5 - total * 0.5;
    let baseline_y = hero_top + hero_h * 0.38;
    for (i, &letter_entity) in stage.letters.iter().enumerate() {
        let Ok(letter) = world.get::<&crate::components::Letter>(letter_entity).map(|l| *l) else {
            continue;
        };
        let width = widths.get(i).copied().unwrap_or(0.0);
        let (opacity, offset) = visual(world, letter_entity);
        if opacity > 0.0 {
            painter.text(
                egui::pos2(x + width * 0.5 + offset.x, baseline_y + offset.y),
                egui::Align2::CENTER_CENTER,
                letter.ch,
                title_font.clone(),
                fade(colors::TEXT_PRIMARY, opacity),
            );
        }
        x += width + tracking;
    }

    let (opacity, offset) = visual(world, stage.tagline);
    if opacity > 0.0 {
        painter.text(
            egui::pos2(vw * 0.5 + offset.x, hero_top + hero_h * 0.54 + offset.y),
            egui::Align2::CENTER_CENTER,
            &content.hero.tagline,
            egui::FontId::proportional(22.0),
            fade(colors::TEXT_MUTED, opacity),
        );
    }
}

fn draw_feature_cards(
    ctx: &egui::Context,
    world: &World,
    stage: &Stage,
    content: &PageContent,
    layout: &StageLayout,
    scroll: f32,
) {
    let ppp = ctx.pixels_per_point();
    let vw = layout.viewport.x / ppp;
    let vh = layout.viewport.y / ppp;
    let top = layout.features_screen_top(scroll) / ppp;
    if top >= vh || top + vh <= 0.0 {
        return;
    }

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("feature_cards"),
    ));

    let container_w = (vw * 0.72).min(880.0);
    let container_h = vh * 0.52;
    let container_center = egui::pos2(vw * 0.5, top + vh * 0.5);

    // Paint lowest stacking priority first so the active card lands on top
    let mut order: Vec<(i32, Entity)> = stage
        .cards
        .iter()
        .map(|&e| {
            let stack = world.get::<&StackOrder>(e).map(|s| s.0).unwrap_or(0);
            (stack, e)
        })
        .collect();
    order.sort_by_key(|&(stack, _)| stack);

    for (_, card_entity) in order {
        // Hidden until the carousel has positioned it
        if !world.get::<&Visible>(card_entity).map(|v| v.0).unwrap_or(false) {
            continue;
        }
        let Ok(card) = world.get::<&Card>(card_entity).map(|c| *c) else {
            continue;
        };
        let Some(card_content) = content.cards.get(card.index) else {
            continue;
        };
        let opacity = world.get::<&Opacity>(card_entity).map(|o| o.0).unwrap_or(1.0);
        if opacity <= 0.001 {
            continue;
        }
        let slide = world
            .get::<&SlidePercent>(card_entity)
            .map(|s| s.0)
            .unwrap_or(0.0);
        let dx = slide / 100.0 * container_w;
        let rect = egui::Rect::from_center_size(
            egui::pos2(container_center.x + dx, container_center.y),
            egui::vec2(container_w, container_h),
        );

        painter.rect(
            rect,
            egui::Rounding::same(10.0),
            fade(colors::CARD_BG, opacity),
            egui::Stroke::new(1.0, fade(colors::CARD_BORDER, opacity)),
        );
        painter.text(
            egui::pos2(rect.center().x, rect.top() + container_h * 0.22),
            egui::Align2::CENTER_CENTER,
            &card_content.title,
            egui::FontId::proportional(40.0),
            fade(colors::TEXT_PRIMARY, opacity),
        );
        let body_width = container_w - 96.0;
        let galley = painter.layout(
            card_content.body.clone(),
            egui::FontId::proportional(17.0),
            fade(colors::TEXT_MUTED, opacity),
            body_width,
        );
        let body_pos = egui::pos2(rect.center().x - galley.rect.width() * 0.5, rect.top() + container_h * 0.42);
        painter.galley(body_pos, galley, fade(colors::TEXT_MUTED, opacity));

        draw_heading(
            &painter, world, card.heading_left, card_content.heading_left.as_deref(),
            egui::pos2(rect.left() + 12.0, rect.top() - 18.0),
            egui::Align2::LEFT_BOTTOM,
        );
        draw_heading(
            &painter, world, card.heading_right, card_content.heading_right.as_deref(),
            egui::pos2(rect.right() - 12.0, rect.bottom() + 18.0),
            egui::Align2::RIGHT_TOP,
        );
    }
}

fn draw_heading(
    painter: &egui::Painter,
    world: &World,
    heading: Option<Entity>,
    text: Option<&str>,
    anchor: egui::Pos2,
    align: egui::Align2,
) {
    let (Some(heading), Some(text)) = (heading, text) else {
        return;
    };
    let (opacity, offset) = visual(world, heading);
    if opacity <= 0.001 {
        return;
    }
    painter.text(
        egui::pos2(anchor.x + offset.x, anchor.y + offset.y),
        align,
        text,
        egui::FontId::proportional(30.0),
        fade(colors::ACCENT, opacity),
    );
}

fn draw_platforms(
    ctx: &egui::Context,
    world: &World,
    stage: &Stage,
    content: &PageContent,
    layout: &StageLayout,
    scroll: f32,
) {
    let ppp = ctx.pixels_per_point();
    let vw = layout.viewport.x / ppp;
    let vh = layout.viewport.y / ppp;
    let top = (layout.platforms.top - scroll) / ppp;
    if top >= vh || top + layout.platforms.height / ppp <= 0.0 {
        return;
    }

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("platforms"),
    ));

    let (opacity, offset) = visual(world, stage.platform_heading);
    if opacity > 0.0 {
        painter.text(
            egui::pos2(vw * 0.5 + offset.x, top + vh * 0.38 + offset.y),
            egui::Align2::CENTER_CENTER,
            &content.platforms.heading,
            egui::FontId::proportional(52.0),
            fade(colors::TEXT_PRIMARY, opacity),
        );
    }

    let (opacity, offset) = visual(world, stage.platform_tagline);
    if opacity > 0.0 {
        painter.text(
            egui::pos2(vw * 0.5 + offset.x, top + vh * 0.50 + offset.y),
            egui::Align2::CENTER_CENTER,
            &content.platforms.tagline,
            egui::FontId::proportional(21.0),
            fade(colors::TEXT_MUTED, opacity),
        );
    }
}
