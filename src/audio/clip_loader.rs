use std::{
    fs::File,
    io::{
        BufReader,
        Cursor,
    },
    sync::mpsc,
    thread,
};

use reqwest::Url;

use crate::core::{
    http,
    AssetLocation,
    FlipdeckError,
};

/// Decodable clip contents, either straight from disk or downloaded into memory.
pub enum ClipData {
    File(BufReader<File>),
    Bytes(Cursor<Vec<u8>>),
}

type FetchMessage = (u64, Result<Vec<u8>, FlipdeckError>);

/// Opens clips for the player without ever waiting on the network.
///
/// Local files open immediately. Remote clips are downloaded on a worker thread and picked up by
/// `poll`; every new request or `cancel` bumps a generation counter, so only the most recent
/// request can ever be delivered.
pub struct ClipLoader {
    generation: u64,
    pending: bool,
    client: Option<reqwest::blocking::Client>,
    sender: mpsc::Sender<FetchMessage>,
    receiver: mpsc::Receiver<FetchMessage>,
}

impl Default for ClipLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipLoader {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { generation: 0, pending: false, client: None, sender, receiver }
    }

    /// Returns the clip when it is local; `None` means a download was started.
    pub fn begin(&mut self, location: &AssetLocation) -> Result<Option<ClipData>, FlipdeckError> {
        self.cancel();
        match location {
            AssetLocation::Path(path) => {
                Ok(Some(ClipData::File(BufReader::new(File::open(path)?))))
            }
            AssetLocation::Url(url) => {
                self.fetch(url.clone())?;
                Ok(None)
            }
        }
    }

    fn fetch(&mut self, url: Url) -> Result<(), FlipdeckError> {
        if self.client.is_none() {
            self.client = Some(http::blocking_http_client()?);
        }
        let client = self
            .client
            .clone()
            .ok_or_else(|| FlipdeckError::Custom("HTTP client unavailable".to_string()))?;

        let generation = self.generation;
        let sender = self.sender.clone();
        self.pending = true;

        thread::spawn(move || {
            let result = http::fetch_bytes(&client, &url);
            let _ = sender.send((generation, result));
        });
        Ok(())
    }

    /// Forgets any download in flight; its result will be discarded when it arrives.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The latest requested clip once its download has finished.
    pub fn poll(&mut self) -> Option<Result<ClipData, FlipdeckError>> {
        let mut ready = None;
        while let Ok((generation, result)) = self.receiver.try_recv() {
            if self.pending && generation == self.generation {
                self.pending = false;
                ready = Some(result.map(|bytes| ClipData::Bytes(Cursor::new(bytes))));
            }
        }
        ready
    }
}
