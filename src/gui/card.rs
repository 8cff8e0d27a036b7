use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    settings::CardLabels,
    theme::Theme,
};
use crate::{
    core::AssetBase,
    traversal::CardView,
};

const IMAGE_MAX_HEIGHT: f32 = 240.0;

/// The clickable card. Only one face is drawn at a time; clicking anywhere on it queues a flip.
pub struct FlipCard;

impl FlipCard {
    pub fn show(
        ui: &mut egui::Ui,
        view: &CardView<'_>,
        labels: &CardLabels,
        assets: &AssetBase,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        let ctx = ui.ctx().clone();
        let fill = if view.flipped { theme.back_fill(&ctx) } else { theme.front_fill(&ctx) };

        let response = egui::Frame::group(ui.style())
            .fill(fill)
            .stroke(theme.card_stroke(&ctx, view.flipped))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), 320.0));
                ui.vertical_centered(|ui| {
                    if view.flipped {
                        Self::back_face(ui, view, labels, theme);
                    } else {
                        Self::front_face(ui, view, labels, assets, theme);
                    }
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            actions.push(UiAction::Flip);
        }
    }

    fn front_face(
        ui: &mut egui::Ui,
        view: &CardView<'_>,
        labels: &CardLabels,
        assets: &AssetBase,
        theme: &Theme,
    ) {
        ui.label(theme.face_label(ui.ctx(), &labels.front));
        ui.add_space(8.0);

        if let Some(image) = assets.resolve(&view.entry.image_path) {
            ui.add(
                egui::Image::new(image.to_uri())
                    .max_height(IMAGE_MAX_HEIGHT)
                    .maintain_aspect_ratio(true),
            );
            ui.add_space(8.0);
        }

        ui.label(theme.caption(ui.ctx(), &view.entry.caption));
    }

    fn back_face(ui: &mut egui::Ui, view: &CardView<'_>, labels: &CardLabels, theme: &Theme) {
        ui.label(theme.face_label(ui.ctx(), &labels.back));
        ui.add_space(40.0);
        ui.label(theme.meaning(ui.ctx(), &view.entry.meaning));
    }
}
