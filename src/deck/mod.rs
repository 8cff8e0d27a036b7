pub mod parser;
pub mod source;

pub use parser::parse_deck;
pub use source::{
    load_deck,
    DeckSource,
};
