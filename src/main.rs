use clap::Parser;
use eframe::egui;
use flipdeck::{
    audio::{
        RodioPlayback,
        SilentPlayback,
    },
    cli::Cli,
    core::TaskManager,
    gui::{
        settings::{
            ViewerSettings,
            SETTINGS_FILE,
        },
        BoxedPlayback,
        FlipdeckApp,
    },
    persistence::load_json_or_default,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn build_player(mute: bool, volume: f32) -> BoxedPlayback {
    if mute {
        return Box::new(SilentPlayback);
    }

    match RodioPlayback::try_new(volume) {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("No audio output available, continuing without sound: {e}");
            Box::new(SilentPlayback)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = load_json_or_default::<ViewerSettings>(SETTINGS_FILE);
    let labels = cli.labels(&settings);
    let volume = cli.volume(&settings);
    let initial_deck = cli.deck_source(&settings);
    let task_manager = TaskManager::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("flipdeck")
            .with_inner_size([560.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "flipdeck",
        options,
        Box::new(move |cc| {
            let player = build_player(cli.mute, volume);
            Ok(Box::new(FlipdeckApp::new(cc, settings, labels, player, task_manager, initial_deck)))
        }),
    )?;

    Ok(())
}
