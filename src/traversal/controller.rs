use tracing::{
    debug,
    warn,
};

use super::{
    CardView,
    Command,
    Direction,
    Transition,
    TraversalState,
};
use crate::{
    audio::PlaybackPort,
    core::Deck,
};

pub const DEFAULT_REVERSED_MARKER: &str = "Reversed";

/// Owns the deck, the traversal state and the audio handle.
///
/// The deck is walked twice: forward with cards opening on the front, then, once the end is
/// passed, again from the start with cards opening on the back and their clip playing. Only the
/// two extremes of that double pass refuse to move; every other boundary wraps into the other
/// direction.
pub struct Controller<P: PlaybackPort> {
    deck: Deck,
    state: TraversalState,
    player: P,
    reversed_marker: String,
}

impl<P: PlaybackPort> Controller<P> {
    pub fn new(player: P) -> Self {
        Self {
            deck: Deck::default(),
            state: TraversalState::default(),
            player,
            reversed_marker: DEFAULT_REVERSED_MARKER.to_string(),
        }
    }

    pub fn with_reversed_marker(mut self, marker: impl Into<String>) -> Self {
        self.reversed_marker = marker.into();
        self
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn dispatch(&mut self, command: Command) -> Transition {
        match command {
            Command::Load(deck) => self.load(deck),
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::Flip => self.flip(),
        }
    }

    fn load(&mut self, deck: Deck) -> Transition {
        self.player.stop();
        self.player.set_asset_base(deck.asset_base());
        self.deck = deck;
        self.state = TraversalState::default();
        self.render();
        Transition::Changed
    }

    fn advance(&mut self) -> Transition {
        let Some(last) = self.last_index() else {
            return Transition::Ignored;
        };

        if self.state.position < last {
            self.state.position += 1;
        } else if self.state.direction == Direction::Forward {
            debug!("End of forward pass, reversing");
            self.state.direction = Direction::Reverse;
            self.state.position = 0;
        } else {
            return Transition::Ignored;
        }

        self.render();
        Transition::Changed
    }

    fn retreat(&mut self) -> Transition {
        let Some(last) = self.last_index() else {
            return Transition::Ignored;
        };

        if self.state.position > 0 {
            self.state.position -= 1;
        } else if self.state.direction == Direction::Reverse {
            debug!("Start of reverse pass, back to forward");
            self.state.direction = Direction::Forward;
            self.state.position = last;
        } else {
            return Transition::Ignored;
        }

        self.render();
        Transition::Changed
    }

    fn flip(&mut self) -> Transition {
        if self.deck.is_empty() {
            return Transition::Ignored;
        }

        self.state.flipped = !self.state.flipped;
        if self.state.flipped {
            self.play_current();
        } else {
            self.player.stop();
        }
        Transition::Changed
    }

    fn render(&mut self) {
        if self.deck.is_empty() {
            return;
        }

        match self.state.direction {
            Direction::Forward => self.state.flipped = false,
            Direction::Reverse => {
                self.state.flipped = true;
                self.play_current();
            }
        }
    }

    /// Stops whatever is in flight, then starts the current entry's clip. Entries without a
    /// clip leave the current one playing.
    fn play_current(&mut self) {
        let Some(entry) = self.deck.get(self.state.position) else {
            return;
        };
        if entry.audio_path.is_empty() {
            return;
        }

        self.player.stop();
        self.player.load(&entry.audio_path);
        if let Err(e) = self.player.play() {
            warn!(clip = %entry.audio_path, "Audio not loaded or blocked: {e}");
        }
    }

    /// Drives the player's background work; true while a clip is still being fetched.
    pub fn poll_playback(&mut self) -> bool {
        self.player.poll()
    }

    fn last_index(&self) -> Option<usize> {
        self.deck.len().checked_sub(1)
    }

    pub fn indicator(&self) -> Option<String> {
        if self.deck.is_empty() {
            return None;
        }

        let mut text = format!("{} / {}", self.state.position + 1, self.deck.len());
        if self.state.direction.is_reverse() {
            text.push_str(&format!(" ({})", self.reversed_marker));
        }
        Some(text)
    }

    pub fn previous_enabled(&self) -> bool {
        !self.deck.is_empty()
            && !(self.state.position == 0 && self.state.direction == Direction::Forward)
    }

    pub fn next_enabled(&self) -> bool {
        match self.last_index() {
            Some(last) => {
                !(self.state.position == last && self.state.direction == Direction::Reverse)
            }
            None => false,
        }
    }

    pub fn view(&self) -> Option<CardView<'_>> {
        let entry = self.deck.get(self.state.position)?;

        Some(CardView {
            entry,
            position: self.state.position,
            total: self.deck.len(),
            direction: self.state.direction,
            flipped: self.state.flipped,
            indicator: self.indicator()?,
            previous_enabled: self.previous_enabled(),
            next_enabled: self.next_enabled(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::recording::{
            PlaybackEvent,
            RecordingPlayback,
        },
        core::{
            AssetBase,
            Entry,
        },
    };

    fn two_card_deck() -> Deck {
        Deck::new(vec![
            Entry::new("Olá", "Hello", "a1.mp3", "i1.png"),
            Entry::new("Sim", "Yes", "a2.mp3", "i2.png"),
        ])
    }

    fn deck_of(n: usize) -> Deck {
        Deck::new(
            (0..n)
                .map(|i| Entry::new(format!("c{i}"), format!("m{i}"), format!("a{i}.mp3"), ""))
                .collect(),
        )
    }

    fn loaded(deck: Deck) -> Controller<RecordingPlayback> {
        let mut controller = Controller::new(RecordingPlayback::default());
        controller.dispatch(Command::Load(deck));
        controller.player_mut().clear();
        controller
    }

    #[test]
    fn test_two_card_walkthrough() {
        let mut controller = loaded(two_card_deck());

        let view = controller.view().unwrap();
        assert_eq!(view.entry.caption, "Olá");
        assert!(!view.flipped);
        assert_eq!(view.indicator, "1 / 2");
        assert!(!view.previous_enabled);
        assert!(view.next_enabled);

        assert!(controller.dispatch(Command::Advance).changed());
        let view = controller.view().unwrap();
        assert_eq!(view.entry.caption, "Sim");
        assert!(!view.flipped);
        assert_eq!(view.indicator, "2 / 2");
        assert!(view.previous_enabled);
        assert!(view.next_enabled);
        assert!(controller.player().played().is_empty());

        assert!(controller.dispatch(Command::Advance).changed());
        let view = controller.view().unwrap();
        assert_eq!(view.position, 0);
        assert_eq!(view.direction, Direction::Reverse);
        assert!(view.flipped);
        assert_eq!(view.indicator, "1 / 2 (Reversed)");
        assert!(view.previous_enabled);
        assert!(view.next_enabled);
        assert_eq!(controller.player().played(), vec!["a1.mp3".to_string()]);
    }

    #[test]
    fn test_forward_pass_rolls_into_reverse() {
        let n = 5;
        let mut controller = loaded(deck_of(n));
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Forward, false));

        for _ in 0..n - 1 {
            controller.dispatch(Command::Advance);
        }
        assert_eq!(controller.state(), TraversalState::new(n - 1, Direction::Forward, false));
        assert!(controller.player().played().is_empty());

        controller.dispatch(Command::Advance);
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Reverse, true));
        assert_eq!(controller.player().played(), vec!["a0.mp3".to_string()]);
    }

    #[test]
    fn test_reverse_pass_plays_every_card() {
        let mut controller = loaded(deck_of(3));
        for _ in 0..3 {
            controller.dispatch(Command::Advance);
        }
        controller.dispatch(Command::Advance);
        controller.dispatch(Command::Advance);

        assert_eq!(controller.state(), TraversalState::new(2, Direction::Reverse, true));
        assert_eq!(controller.player().played(), vec!["a0.mp3", "a1.mp3", "a2.mp3"]);
    }

    #[test]
    fn test_advance_at_reverse_end_is_noop() {
        let mut controller = loaded(deck_of(3));
        for _ in 0..5 {
            controller.dispatch(Command::Advance);
        }
        let before = controller.state();
        assert_eq!(before, TraversalState::new(2, Direction::Reverse, true));
        assert!(!controller.next_enabled());

        controller.player_mut().clear();
        assert_eq!(controller.dispatch(Command::Advance), Transition::Ignored);
        assert_eq!(controller.state(), before);
        assert!(controller.player().events.is_empty());
    }

    #[test]
    fn test_retreat_at_forward_start_is_noop() {
        let mut controller = loaded(deck_of(3));

        assert!(!controller.previous_enabled());
        assert_eq!(controller.dispatch(Command::Retreat), Transition::Ignored);
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Forward, false));
    }

    #[test]
    fn test_retreat_from_reverse_start_wraps_to_forward_end() {
        let mut controller = loaded(deck_of(4));
        for _ in 0..4 {
            controller.dispatch(Command::Advance);
        }
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Reverse, true));
        assert!(controller.previous_enabled());

        controller.player_mut().clear();
        assert!(controller.dispatch(Command::Retreat).changed());
        assert_eq!(controller.state(), TraversalState::new(3, Direction::Forward, false));
        assert!(controller.player().played().is_empty());
        assert_eq!(controller.indicator().unwrap(), "4 / 4");
    }

    #[test]
    fn test_retreat_within_reverse_pass_plays_clip() {
        let mut controller = loaded(deck_of(3));
        for _ in 0..4 {
            controller.dispatch(Command::Advance);
        }
        controller.player_mut().clear();

        controller.dispatch(Command::Retreat);
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Reverse, true));
        assert_eq!(controller.player().played(), vec!["a0.mp3"]);
    }

    #[test]
    fn test_flip_only_touches_flip_axis() {
        let mut controller = loaded(deck_of(3));
        controller.dispatch(Command::Advance);

        assert!(controller.dispatch(Command::Flip).changed());
        assert_eq!(controller.state(), TraversalState::new(1, Direction::Forward, true));
        assert_eq!(controller.player().played(), vec!["a1.mp3"]);

        controller.dispatch(Command::Flip);
        assert_eq!(controller.state(), TraversalState::new(1, Direction::Forward, false));
        assert_eq!(controller.player().last_event(), Some(&PlaybackEvent::Stop));

        controller.dispatch(Command::Flip);
        assert_eq!(controller.player().played(), vec!["a1.mp3", "a1.mp3"]);
    }

    #[test]
    fn test_flip_in_reverse_pass_stops_then_restarts() {
        let mut controller = loaded(deck_of(2));
        controller.dispatch(Command::Advance);
        controller.dispatch(Command::Advance);
        controller.player_mut().clear();

        // Reverse cards open on the back, so the first flip goes to the front
        controller.dispatch(Command::Flip);
        assert!(!controller.state().flipped);
        assert_eq!(controller.player().events, vec![PlaybackEvent::Stop]);

        controller.dispatch(Command::Flip);
        assert!(controller.state().flipped);
        assert_eq!(
            controller.player().events,
            vec![
                PlaybackEvent::Stop,
                PlaybackEvent::Stop,
                PlaybackEvent::Load("a0.mp3".to_string()),
                PlaybackEvent::Play,
            ]
        );
    }

    #[test]
    fn test_new_clip_stops_previous_first() {
        let mut controller = loaded(deck_of(3));
        controller.dispatch(Command::Flip);
        controller.player_mut().clear();

        controller.dispatch(Command::Flip);
        controller.dispatch(Command::Flip);
        controller.dispatch(Command::Advance);
        controller.dispatch(Command::Flip);

        let events = &controller.player().events;
        for (i, event) in events.iter().enumerate() {
            if *event == PlaybackEvent::Play {
                assert_eq!(events[i - 2], PlaybackEvent::Stop);
            }
        }
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let mut controller = Controller::new(RecordingPlayback::default());

        assert_eq!(controller.dispatch(Command::Advance), Transition::Ignored);
        assert_eq!(controller.dispatch(Command::Retreat), Transition::Ignored);
        assert_eq!(controller.dispatch(Command::Flip), Transition::Ignored);
        assert!(controller.view().is_none());
        assert!(!controller.previous_enabled());
        assert!(!controller.next_enabled());

        controller.dispatch(Command::Load(Deck::default()));
        assert!(controller.view().is_none());
        assert_eq!(controller.state(), TraversalState::default());
        assert!(controller.player().played().is_empty());
    }

    #[test]
    fn test_single_card_deck() {
        let mut controller = loaded(deck_of(1));
        assert!(!controller.previous_enabled());
        assert!(controller.next_enabled());

        controller.dispatch(Command::Advance);
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Reverse, true));
        assert!(controller.previous_enabled());
        assert!(!controller.next_enabled());

        controller.dispatch(Command::Retreat);
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Forward, false));
    }

    #[test]
    fn test_playback_failure_does_not_block_navigation() {
        let mut controller = Controller::new(RecordingPlayback { fail_play: true, ..Default::default() });
        controller.dispatch(Command::Load(deck_of(2)));

        controller.dispatch(Command::Flip);
        assert!(controller.state().flipped);
        controller.dispatch(Command::Advance);
        controller.dispatch(Command::Advance);
        assert_eq!(controller.state(), TraversalState::new(0, Direction::Reverse, true));
    }

    #[test]
    fn test_entry_without_clip_plays_nothing() {
        let deck = Deck::new(vec![Entry::new("Olá", "Hello", "", "i1.png")]);
        let mut controller = loaded(deck);

        controller.dispatch(Command::Flip);
        assert!(controller.state().flipped);
        assert!(controller.player().events.is_empty());
    }

    #[test]
    fn test_entry_without_clip_keeps_previous_clip_playing() {
        let deck = Deck::new(vec![
            Entry::new("Olá", "Hello", "a0.mp3", "i0.png"),
            Entry::new("Sim", "Yes", "", "i1.png"),
        ]);
        let mut controller = loaded(deck);
        controller.dispatch(Command::Advance);
        controller.dispatch(Command::Advance);
        assert_eq!(controller.player().played(), vec!["a0.mp3"]);

        controller.player_mut().clear();
        assert!(controller.dispatch(Command::Advance).changed());
        assert_eq!(controller.state(), TraversalState::new(1, Direction::Reverse, true));
        assert!(controller.player().events.is_empty());

        // Flipping to the front still silences whatever is playing
        controller.dispatch(Command::Flip);
        assert_eq!(controller.player().events, vec![PlaybackEvent::Stop]);
    }

    #[test]
    fn test_load_resets_state_and_forwards_asset_base() {
        let mut controller = loaded(deck_of(3));
        for _ in 0..4 {
            controller.dispatch(Command::Advance);
        }

        let base = AssetBase::Directory("decks/verbs".into());
        controller.dispatch(Command::Load(deck_of(2).with_asset_base(base.clone())));

        assert_eq!(controller.state(), TraversalState::default());
        assert_eq!(controller.player().asset_base, Some(base));
        assert_eq!(controller.player().last_event(), Some(&PlaybackEvent::Stop));
        assert_eq!(controller.indicator().unwrap(), "1 / 2");
    }

    #[test]
    fn test_custom_reversed_marker() {
        let mut controller =
            Controller::new(RecordingPlayback::default()).with_reversed_marker("Inverso");
        controller.dispatch(Command::Load(deck_of(1)));
        controller.dispatch(Command::Advance);

        assert_eq!(controller.indicator().unwrap(), "1 / 1 (Inverso)");
    }
}
