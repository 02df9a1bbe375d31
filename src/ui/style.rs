//! Midnight landing-page styling for egui.
//!
//! Flat translucent panels over a dark backdrop, soft borders, a single
//! violet accent shared by the orbs and interactive elements.

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Landing color palette
pub mod colors {
    use egui::Color32;

    // Page backdrop
    pub const PAGE_BG: Color32 = Color32::from_rgb(10, 12, 24);

    // Panels and cards
    pub const PANEL_BG: Color32 = Color32::from_rgb(18, 21, 40);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(46, 52, 86);
    pub const CARD_BG: Color32 = Color32::from_rgb(24, 28, 52);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(70, 76, 120);

    // Interactive elements
    pub const BUTTON_BG: Color32 = Color32::from_rgb(26, 30, 56);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(38, 44, 78);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(52, 58, 98);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 230, 244);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 155, 185);

    // Accent (orbs, highlights, nav hover)
    pub const ACCENT: Color32 = Color32::from_rgb(140, 110, 245);
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(90, 80, 180);

    // Showcase panel
    pub const SHOWCASE_BG: Color32 = Color32::from_rgb(14, 16, 32);
}

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the landing-page visuals
pub fn landing_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::same(6.0);
    visuals.menu_rounding = Rounding::same(6.0);

    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);

    visuals.panel_fill = colors::PANEL_BG;
    visuals.extreme_bg_color = colors::PAGE_BG;
    visuals.faint_bg_color = colors::CARD_BG;

    visuals.widgets = landing_widgets();

    visuals.selection.bg_fill = colors::ACCENT_SOFT;
    visuals.selection.stroke = Stroke::new(1.0, colors::ACCENT);

    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

/// Widget visuals for the landing theme
fn landing_widgets() -> Widgets {
    Widgets {
        noninteractive: WidgetVisuals {
            bg_fill: colors::PANEL_BG,
            weak_bg_fill: colors::PANEL_BG,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER),
            rounding: Rounding::same(4.0),
            fg_stroke: Stroke::new(1.0, colors::TEXT_MUTED),
            expansion: 0.0,
        },
        inactive: WidgetVisuals {
            bg_fill: colors::BUTTON_BG,
            weak_bg_fill: colors::BUTTON_BG,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER),
            rounding: Rounding::same(4.0),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        hovered: WidgetVisuals {
            bg_fill: colors::BUTTON_HOVER,
            weak_bg_fill: colors::BUTTON_HOVER,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::ACCENT),
            rounding: Rounding::same(4.0),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        active: WidgetVisuals {
            bg_fill: colors::BUTTON_ACTIVE,
            weak_bg_fill: colors::BUTTON_ACTIVE,
            bg_stroke: Stroke::new(2.0, colors::ACCENT),
            rounding: Rounding::same(4.0),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
        open: WidgetVisuals {
            bg_fill: colors::BUTTON_ACTIVE,
            weak_bg_fill: colors::BUTTON_ACTIVE,
            bg_stroke: Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER),
            rounding: Rounding::same(4.0),
            fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
            expansion: 0.0,
        },
    }
}

/// Create the nav bar frame
pub fn nav_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::symmetric(16.0, 8.0))
}

/// Create the landing-page style
pub fn landing_style() -> Style {
    let mut style = Style::default();
    style.visuals = landing_visuals();
    style.interaction.tooltip_delay = 0.0;
    style
}
