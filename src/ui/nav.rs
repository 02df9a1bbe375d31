//! Top navigation bar.

use crate::content::PageContent;
use crate::ui::{style, UiActions};

/// Draw the fixed nav bar. Link clicks become scroll-to-section actions;
/// the frame loop turns them into an eased scroll glide.
pub fn draw_nav(ctx: &egui::Context, content: &PageContent, actions: &mut UiActions) {
    egui::TopBottomPanel::top("nav")
        .frame(style::nav_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&content.hero.title)
                        .color(style::colors::ACCENT)
                        .strong()
                        .size(18.0),
                );
                ui.add_space(24.0);
                for link in &content.nav {
                    if ui.button(&link.label).clicked() {
                        actions.scroll_to = Some(link.section);
                    }
                }
            });
        });
}
