use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::error;

use super::TaskResult;
use crate::{
    core::FlipdeckError,
    deck::{
        self,
        DeckSource,
    },
};

/// Runs blocking or async work off the UI thread and hands results back through a channel
/// that the UI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, FlipdeckError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_deck(&self, source: DeckSource) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage(format!(
                "Loading {}...",
                source.display_name()
            )));

            let result = runtime.block_on(async { deck::load_deck(&source).await });
            let result = result.map_err(|e| {
                error!(source = %source, "Failed to load deck: {e}");
                e.to_string()
            });

            let _ = sender.send(TaskResult::DeckLoaded { source, result });
        });
    }
}
