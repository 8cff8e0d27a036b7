pub mod audio;
pub mod cli;
pub mod core;
pub mod deck;
pub mod gui;
pub mod persistence;
pub mod traversal;

pub use crate::core::{
    Deck,
    Entry,
    FlipdeckError,
};
