pub mod actions;
pub mod app;
pub mod card;
pub mod message_overlay;
pub mod nav_bar;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::{
    BoxedPlayback,
    FlipdeckApp,
};
