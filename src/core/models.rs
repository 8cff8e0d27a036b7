use std::path::{
    Path,
    PathBuf,
};

use reqwest::Url;

/// One flashcard: the caption shown on the front, its meaning on the back, and the
/// relative paths of the clip and picture that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub caption: String,
    pub meaning: String,
    pub audio_path: String,
    pub image_path: String,
}

impl Entry {
    pub fn new(
        caption: impl Into<String>,
        meaning: impl Into<String>,
        audio_path: impl Into<String>,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            caption: caption.into(),
            meaning: meaning.into(),
            audio_path: audio_path.into(),
            image_path: image_path.into(),
        }
    }
}

/// Where relative asset paths of a deck are anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetBase {
    Directory(PathBuf),
    Url(Url),
}

impl Default for AssetBase {
    fn default() -> Self {
        AssetBase::Directory(PathBuf::from("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    Path(PathBuf),
    Url(Url),
}

impl AssetLocation {
    /// URI understood by the egui image loaders.
    pub fn to_uri(&self) -> String {
        match self {
            AssetLocation::Path(path) => format!("file://{}", path.display()),
            AssetLocation::Url(url) => url.to_string(),
        }
    }
}

pub(crate) fn is_remote(path: &str) -> bool {
    let scheme = path.split_once("://").map(|(scheme, _)| scheme.to_ascii_lowercase());
    matches!(scheme.as_deref(), Some("http" | "https"))
}

impl AssetBase {
    pub fn for_file(path: &Path) -> Self {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                AssetBase::Directory(parent.to_path_buf())
            }
            _ => AssetBase::default(),
        }
    }

    pub fn resolve(&self, path: &str) -> Option<AssetLocation> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }

        if is_remote(path) {
            return Url::parse(path).ok().map(AssetLocation::Url);
        }

        match self {
            AssetBase::Directory(dir) => Some(AssetLocation::Path(dir.join(path))),
            AssetBase::Url(base) => base.join(path).ok().map(AssetLocation::Url),
        }
    }
}

/// Ordered, immutable collection of entries in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    entries: Vec<Entry>,
    asset_base: AssetBase,
}

impl Deck {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries, asset_base: AssetBase::default() }
    }

    pub fn with_asset_base(mut self, asset_base: AssetBase) -> Self {
        self.asset_base = asset_base;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn asset_base(&self) -> &AssetBase {
        &self.asset_base
    }
}
