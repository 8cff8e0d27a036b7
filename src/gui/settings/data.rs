use serde::{
    Deserialize,
    Serialize,
};

use crate::traversal::DEFAULT_REVERSED_MARKER;

pub const SETTINGS_FILE: &str = "settings.json";

/// Static titles of the two faces and the marker appended to the position indicator
/// during the reverse pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLabels {
    pub front: String,
    pub back: String,
    pub reversed_marker: String,
}

impl Default for CardLabels {
    fn default() -> Self {
        Self {
            front: "Português".to_string(),
            back: "English".to_string(),
            reversed_marker: DEFAULT_REVERSED_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub labels: CardLabels,
    pub volume: f32,
    pub dark_mode: bool,
    pub last_deck: Option<String>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self { labels: CardLabels::default(), volume: 1.0, dark_mode: true, last_deck: None }
    }
}
