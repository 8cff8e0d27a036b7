use crate::{
    core::Deck,
    deck::DeckSource,
};

pub type DeckLoadResult = Result<Deck, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    LoadingMessage(String),
    DeckLoaded { source: DeckSource, result: DeckLoadResult },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::LoadingMessage(_) => "loading_message",
            TaskResult::DeckLoaded { .. } => "deck_loaded",
        }
    }
}
