pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::FlipdeckError;
pub use models::{
    AssetBase,
    AssetLocation,
    Deck,
    Entry,
};
pub use tasks::{
    TaskManager,
    TaskResult,
};
