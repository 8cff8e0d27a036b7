use crate::core::{
    Deck,
    Entry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// First pass: every card opens on its front face.
    #[default]
    Forward,
    /// Second pass: every card opens on its back face and plays its clip.
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalState {
    pub position: usize,
    pub direction: Direction,
    pub flipped: bool,
}

impl TraversalState {
    pub fn new(position: usize, direction: Direction, flipped: bool) -> Self {
        Self { position, direction, flipped }
    }
}

/// The only ways into the controller.
#[derive(Debug, Clone)]
pub enum Command {
    Load(Deck),
    Advance,
    Retreat,
    Flip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Ignored,
}

impl Transition {
    pub fn changed(self) -> bool {
        self == Transition::Changed
    }
}

/// Everything a host needs to draw the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub entry: &'a Entry,
    pub position: usize,
    pub total: usize,
    pub direction: Direction,
    pub flipped: bool,
    pub indicator: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}
