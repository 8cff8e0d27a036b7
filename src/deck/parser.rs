use crate::core::{
    Deck,
    Entry,
};

const FIELD_SEPARATOR: char = '\t';
const MIN_FIELDS: usize = 4;

/// Parses tab-separated rows into a deck. Columns are caption, meaning, audio path and
/// image path; anything past the fourth column is ignored and shorter rows are skipped.
pub fn parse_deck(text: &str) -> Deck {
    Deck::new(text.split('\n').filter_map(parse_row).collect())
}

fn parse_row(line: &str) -> Option<Entry> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(Entry::new(fields[0].trim(), fields[1].trim(), fields[2].trim(), fields[3].trim()))
}
