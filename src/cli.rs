use clap::Parser;

use crate::{
    deck::DeckSource,
    gui::settings::{
        CardLabels,
        ViewerSettings,
    },
};

pub const DEFAULT_DECK: &str = "frases.tsv";

/// Flashcard viewer for tab-separated language-pair decks.
#[derive(Parser, Debug)]
#[command(name = "flipdeck", version, about)]
pub struct Cli {
    /// Deck to open: a local TSV path or an http(s) URL
    pub deck: Option<String>,

    /// Title shown on the front face
    #[arg(long)]
    pub front_label: Option<String>,

    /// Title shown on the back face
    #[arg(long)]
    pub back_label: Option<String>,

    /// Suffix shown next to the position during the reverse pass
    #[arg(long)]
    pub reversed_marker: Option<String>,

    /// Playback volume between 0 and 1
    #[arg(long, value_parser = parse_volume)]
    pub volume: Option<f32>,

    /// Never play audio
    #[arg(long)]
    pub mute: bool,
}

fn parse_volume(value: &str) -> Result<f32, String> {
    let volume: f32 = value.parse().map_err(|e| format!("{value}: {e}"))?;
    if !(0.0..=1.0).contains(&volume) {
        return Err(format!("{volume} is not between 0 and 1"));
    }
    Ok(volume)
}

impl Cli {
    /// Labels for this session; flags win over stored settings but are never saved.
    pub fn labels(&self, settings: &ViewerSettings) -> CardLabels {
        let stored = &settings.labels;
        CardLabels {
            front: self.front_label.clone().unwrap_or_else(|| stored.front.clone()),
            back: self.back_label.clone().unwrap_or_else(|| stored.back.clone()),
            reversed_marker: self
                .reversed_marker
                .clone()
                .unwrap_or_else(|| stored.reversed_marker.clone()),
        }
    }

    pub fn volume(&self, settings: &ViewerSettings) -> f32 {
        self.volume.unwrap_or(settings.volume)
    }

    /// Explicit argument, then the last opened deck, then the default file name.
    pub fn deck_source(&self, settings: &ViewerSettings) -> Option<DeckSource> {
        let raw = self
            .deck
            .as_deref()
            .or(settings.last_deck.as_deref())
            .unwrap_or(DEFAULT_DECK);

        match DeckSource::parse(raw) {
            Ok(source) => Some(source),
            Err(e) => {
                tracing::error!("Ignoring deck source: {e}");
                None
            }
        }
    }
}
