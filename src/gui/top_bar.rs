use eframe::egui::{
    self,
    containers,
};
use rfd::FileDialog;

use super::actions::{
    ActionQueue,
    UiAction,
};
use crate::deck::DeckSource;

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, deck_name: Option<&str>, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Open Deck...").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Tab-separated decks", &["tsv", "txt"])
                            .pick_file()
                        {
                            actions.push(UiAction::OpenDeck(DeckSource::Local(path)));
                        }
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                if let Some(name) = deck_name {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(name);
                    });
                }
            });
        });
    }
}
