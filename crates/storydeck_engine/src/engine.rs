use std::sync::{mpsc, Arc};
use std::thread;

use deck_logging::deck_info;

use crate::fetch::{Fetcher, ReqwestFetcher, SearchSettings};
use crate::{EngineEvent, Generation};

enum EngineCommand {
    Search { generation: Generation, url: String },
}

/// Handle to the fetch thread. Commands go in over a channel; completions
/// come back as [`EngineEvent`]s polled with [`try_recv`](Self::try_recv).
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Requests a search; the completion event echoes `generation` back.
    pub fn search(&self, generation: Generation, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            generation,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { generation, url } => {
            deck_info!("search generation={} url={}", generation, url);
            let result = fetcher.search(&url).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { generation, result });
        }
    }
}
