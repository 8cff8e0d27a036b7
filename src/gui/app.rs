use eframe::egui;
use tracing::{
    error,
    info,
    warn,
};

use super::{
    actions::ActionQueue,
    card::FlipCard,
    message_overlay::LoadingOverlay,
    nav_bar::NavBar,
    settings::{
        CardLabels,
        ViewerSettings,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    audio::PlaybackPort,
    core::{
        TaskManager,
        TaskResult,
    },
    deck::DeckSource,
    persistence::save_json,
    traversal::{
        Command,
        Controller,
    },
};

pub type BoxedPlayback = Box<dyn PlaybackPort>;

pub struct FlipdeckApp {
    // Traversal
    controller: Controller<BoxedPlayback>,
    source: Option<DeckSource>,

    // Configuration
    settings: ViewerSettings,
    labels: CardLabels,

    // UI State
    theme: Theme,
    overlay: LoadingOverlay,
    actions: ActionQueue,

    task_manager: TaskManager,
}

impl FlipdeckApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: ViewerSettings,
        labels: CardLabels,
        player: BoxedPlayback,
        task_manager: TaskManager,
        initial_deck: Option<DeckSource>,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.25);

        let controller = Controller::new(player).with_reversed_marker(&labels.reversed_marker);

        let mut app = Self {
            controller,
            source: None,
            settings,
            labels,
            theme,
            overlay: LoadingOverlay::default(),
            actions: ActionQueue::new(),
            task_manager,
        };

        if let Some(source) = initial_deck {
            app.open_deck(source);
        }

        app
    }

    fn open_deck(&mut self, source: DeckSource) {
        info!(source = %source, "Opening deck");
        self.overlay.begin(format!("Loading {}...", source.display_name()));
        self.task_manager.load_deck(source);
    }

    fn handle_task_results(&mut self) {
        for result in self.task_manager.poll_results() {
            match result {
                TaskResult::LoadingMessage(message) => {
                    if self.overlay.is_active() {
                        self.overlay.begin(message);
                    }
                }
                TaskResult::DeckLoaded { source, result } => {
                    self.overlay.finish();
                    // Failures are logged by the task; the viewer stays as it was
                    if let Ok(deck) = result {
                        if deck.is_empty() {
                            warn!(source = %source, "Deck has no usable rows");
                        }
                        self.controller.dispatch(Command::Load(deck));
                        self.settings.last_deck = Some(source.to_string());
                        self.source = Some(source);
                        self.save_settings();
                    }
                }
            }
        }
    }

    /// Returns whether anything visible changed.
    fn handle_actions(&mut self) -> bool {
        let outcome = self.actions.dispatch(&mut self.controller);
        let repaint = outcome.needs_repaint();
        for source in outcome.open_requests {
            self.open_deck(source);
        }
        repaint
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            error!("Failed to save settings: {e}");
        }
    }
}

impl eframe::App for FlipdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_task_results();

        let deck_name = self.source.as_ref().map(DeckSource::display_name);
        TopBar::show(ctx, deck_name.as_deref(), &mut self.actions);

        egui::CentralPanel::default().show(ctx, |ui| match self.controller.view() {
            Some(view) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    FlipCard::show(
                        ui,
                        &view,
                        &self.labels,
                        self.controller.deck().asset_base(),
                        &self.theme,
                        &mut self.actions,
                    );
                    ui.add_space(16.0);
                    NavBar::show(ui, &view, &self.theme, &mut self.actions);
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("No cards loaded");
                });
            }
        });

        if !self.overlay.is_active() {
            NavBar::handle_keys(ctx, &mut self.actions);
        }
        self.overlay.show(ctx, &self.theme);

        self.sync_theme_preference(ctx);

        let fetching_clip = self.controller.poll_playback();
        if self.handle_actions() {
            ctx.request_repaint();
        } else if self.overlay.is_active() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else if fetching_clip {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
