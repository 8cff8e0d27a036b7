use rodio::{
    Decoder,
    OutputStream,
    OutputStreamHandle,
    Sink,
};
use tracing::{
    debug,
    warn,
};

use super::{
    clip_loader::{
        ClipData,
        ClipLoader,
    },
    PlaybackPort,
};
use crate::core::{
    AssetBase,
    FlipdeckError,
};

pub struct RodioPlayback {
    // Dropping the stream silences every sink created from its handle
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    asset_base: AssetBase,
    source: Option<String>,
    volume: f32,
    loader: ClipLoader,
}

impl RodioPlayback {
    pub fn try_new(volume: f32) -> Result<Self, FlipdeckError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
            asset_base: AssetBase::default(),
            source: None,
            volume: volume.clamp(0.0, 1.0),
            loader: ClipLoader::new(),
        })
    }

    fn start(&self, data: ClipData) -> Result<Sink, FlipdeckError> {
        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(self.volume);

        match data {
            ClipData::File(reader) => sink.append(Decoder::new(reader)?),
            ClipData::Bytes(cursor) => sink.append(Decoder::new(cursor)?),
        }

        Ok(sink)
    }
}

impl PlaybackPort for RodioPlayback {
    fn set_asset_base(&mut self, base: &AssetBase) {
        self.asset_base = base.clone();
    }

    fn load(&mut self, path: &str) {
        self.source = Some(path.to_string());
    }

    fn play(&mut self) -> Result<(), FlipdeckError> {
        self.stop();

        let source = self
            .source
            .as_deref()
            .ok_or_else(|| FlipdeckError::Audio("no clip loaded".to_string()))?;
        let location = self
            .asset_base
            .resolve(source)
            .ok_or_else(|| FlipdeckError::Audio(format!("cannot resolve clip {source:?}")))?;

        debug!(clip = %location.to_uri(), "Starting clip");
        match self.loader.begin(&location)? {
            Some(data) => self.sink = Some(self.start(data)?),
            None => debug!(clip = %location.to_uri(), "Clip download started"),
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.loader.cancel();
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn poll(&mut self) -> bool {
        if let Some(result) = self.loader.poll() {
            match result.and_then(|data| self.start(data)) {
                Ok(sink) => self.sink = Some(sink),
                Err(e) => warn!("Audio not loaded or blocked: {e}"),
            }
        }
        self.loader.is_pending()
    }
}
