use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::traversal::CardView;

pub struct NavBar;

impl NavBar {
    pub fn show(ui: &mut egui::Ui, view: &CardView<'_>, theme: &Theme, actions: &mut ActionQueue) {
        ui.horizontal(|ui| {
            if ui.add_enabled(view.previous_enabled, egui::Button::new("◀ Previous")).clicked() {
                actions.push(UiAction::Retreat);
            }

            ui.add_space(12.0);
            ui.label(theme.indicator(ui.ctx(), &view.indicator, view.direction.is_reverse()));
            ui.add_space(12.0);

            if ui.add_enabled(view.next_enabled, egui::Button::new("Next ▶")).clicked() {
                actions.push(UiAction::Advance);
            }
        });
    }

    /// Arrow keys navigate, space flips unless a widget has keyboard focus.
    pub fn handle_keys(ctx: &egui::Context, actions: &mut ActionQueue) {
        let focused = ctx.memory(|memory| memory.focused().is_some());
        ctx.input(|input| {
            if input.key_pressed(egui::Key::ArrowLeft) {
                actions.push(UiAction::Retreat);
            }
            if input.key_pressed(egui::Key::ArrowRight) {
                actions.push(UiAction::Advance);
            }
            if !focused && input.key_pressed(egui::Key::Space) {
                actions.push(UiAction::Flip);
            }
        });
    }
}
