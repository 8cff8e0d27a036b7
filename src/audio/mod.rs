pub mod clip_loader;
pub mod rodio_player;

pub use rodio_player::RodioPlayback;

use crate::core::{
    AssetBase,
    FlipdeckError,
};

/// The single reusable audio handle the traversal controller drives.
///
/// `load` only selects the clip; nothing is heard until `play`. `stop` pauses and rewinds,
/// so the next `play` starts from the beginning.
pub trait PlaybackPort {
    /// Called whenever a new deck is loaded so relative clip paths can be resolved.
    fn set_asset_base(&mut self, _base: &AssetBase) {}

    fn load(&mut self, path: &str);

    fn play(&mut self) -> Result<(), FlipdeckError>;

    fn stop(&mut self);

    /// Finishes background work such as clip downloads; called once per frame. Returns true
    /// while a requested clip is still on its way.
    fn poll(&mut self) -> bool {
        false
    }
}

/// Used when no output device is available or playback is muted.
#[derive(Debug, Default)]
pub struct SilentPlayback;

impl PlaybackPort for SilentPlayback {
    fn load(&mut self, _path: &str) {}

    fn play(&mut self) -> Result<(), FlipdeckError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

impl<P: PlaybackPort + ?Sized> PlaybackPort for Box<P> {
    fn set_asset_base(&mut self, base: &AssetBase) {
        (**self).set_asset_base(base);
    }

    fn load(&mut self, path: &str) {
        (**self).load(path);
    }

    fn play(&mut self) -> Result<(), FlipdeckError> {
        (**self).play()
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn poll(&mut self) -> bool {
        (**self).poll()
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PlaybackEvent {
        Load(String),
        Play,
        Stop,
    }

    /// Records every call so tests can assert on the exact playback sequence.
    #[derive(Debug, Default)]
    pub struct RecordingPlayback {
        pub events: Vec<PlaybackEvent>,
        pub fail_play: bool,
        pub asset_base: Option<AssetBase>,
    }

    impl RecordingPlayback {
        /// Clip paths that were actually started, in order.
        pub fn played(&self) -> Vec<String> {
            let mut loaded: Option<&String> = None;
            let mut played = Vec::new();
            for event in &self.events {
                match event {
                    PlaybackEvent::Load(path) => loaded = Some(path),
                    PlaybackEvent::Play => {
                        if let Some(path) = loaded {
                            played.push(path.clone());
                        }
                    }
                    PlaybackEvent::Stop => {}
                }
            }
            played
        }

        pub fn last_event(&self) -> Option<&PlaybackEvent> {
            self.events.last()
        }

        pub fn clear(&mut self) {
            self.events.clear();
        }
    }

    impl PlaybackPort for RecordingPlayback {
        fn set_asset_base(&mut self, base: &AssetBase) {
            self.asset_base = Some(base.clone());
        }

        fn load(&mut self, path: &str) {
            self.events.push(PlaybackEvent::Load(path.to_string()));
        }

        fn play(&mut self) -> Result<(), FlipdeckError> {
            self.events.push(PlaybackEvent::Play);
            if self.fail_play {
                return Err(FlipdeckError::Audio("blocked".to_string()));
            }
            Ok(())
        }

        fn stop(&mut self) {
            self.events.push(PlaybackEvent::Stop);
        }
    }
}
