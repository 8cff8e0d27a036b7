pub mod data;

pub use data::{
    CardLabels,
    ViewerSettings,
    SETTINGS_FILE,
};
