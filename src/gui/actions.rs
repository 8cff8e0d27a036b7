use crate::{
    audio::PlaybackPort,
    deck::DeckSource,
    traversal::{
        Command,
        Controller,
    },
};

// A simple ui action queue so widgets never need the controller mutably
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    // Traversal
    Advance,
    Retreat,
    Flip,

    // Deck
    OpenDeck(DeckSource),
}

impl UiAction {
    /// Navigation actions map one-to-one onto controller commands; deck opening goes through
    /// the task manager first.
    pub fn as_command(&self) -> Option<Command> {
        match self {
            UiAction::Advance => Some(Command::Advance),
            UiAction::Retreat => Some(Command::Retreat),
            UiAction::Flip => Some(Command::Flip),
            UiAction::OpenDeck(_) => None,
        }
    }
}

/// What a frame's worth of actions did to the viewer.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub changed: bool,
    pub open_requests: Vec<DeckSource>,
}

impl DispatchOutcome {
    pub fn needs_repaint(&self) -> bool {
        self.changed || !self.open_requests.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Feeds navigation actions to the controller in order; deck requests are handed back.
    pub fn dispatch<P: PlaybackPort>(&mut self, controller: &mut Controller<P>) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        for action in self.actions.drain(..) {
            match action {
                UiAction::OpenDeck(source) => outcome.open_requests.push(source),
                other => {
                    if let Some(command) = other.as_command() {
                        outcome.changed |= controller.dispatch(command).changed();
                    }
                }
            }
        }
        outcome
    }
}
