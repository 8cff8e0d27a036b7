use std::{
    fmt,
    path::PathBuf,
};

use reqwest::Url;
use tracing::info;

use super::parse_deck;
use crate::core::{
    http,
    models::is_remote,
    AssetBase,
    Deck,
    FlipdeckError,
};

/// Where a deck's TSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    Local(PathBuf),
    Remote(Url),
}

impl DeckSource {
    pub fn parse(source: &str) -> Result<Self, FlipdeckError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(FlipdeckError::InvalidSource("empty deck source".to_string()));
        }

        if is_remote(source) {
            let url = Url::parse(source)
                .map_err(|e| FlipdeckError::InvalidSource(format!("{source}: {e}")))?;
            Ok(DeckSource::Remote(url))
        } else {
            Ok(DeckSource::Local(PathBuf::from(source)))
        }
    }

    pub fn asset_base(&self) -> AssetBase {
        match self {
            DeckSource::Local(path) => AssetBase::for_file(path),
            DeckSource::Remote(url) => AssetBase::Url(url.clone()),
        }
    }

    /// Short name for window titles and logs.
    pub fn display_name(&self) -> String {
        match self {
            DeckSource::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            DeckSource::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty())
                .unwrap_or(url.as_str())
                .to_string(),
        }
    }
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::Local(path) => write!(f, "{}", path.display()),
            DeckSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

pub async fn read_source(source: &DeckSource) -> Result<String, FlipdeckError> {
    match source {
        DeckSource::Local(path) => Ok(tokio::fs::read_to_string(path).await?),
        DeckSource::Remote(url) => {
            let client = http::http_client()?;
            http::fetch_text(&client, url).await
        }
    }
}

pub async fn load_deck(source: &DeckSource) -> Result<Deck, FlipdeckError> {
    let text = read_source(source).await?;
    let deck = parse_deck(&text).with_asset_base(source.asset_base());
    info!(source = %source, entries = deck.len(), "Deck loaded");
    Ok(deck)
}
