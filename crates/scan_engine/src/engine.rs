use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scan_core::{Cursor, ValidFile};
use scan_logging::{scan_debug, scan_warn};

use crate::paginate::{JobSearch, PaginationCoordinator, ReqwestJobSearch};
use crate::upload::{ReqwestUploader, UploadCoordinator, Uploader};
use crate::{ClientSettings, EngineError, EngineEvent};

enum EngineCommand {
    Upload(ValidFile),
    FetchPage { skills: Vec<String>, cursor: Cursor },
}

struct Coordinators {
    upload: UploadCoordinator<Box<dyn Uploader>>,
    pagination: PaginationCoordinator<Box<dyn JobSearch>>,
}

/// Runs collaborator transactions on a background tokio runtime and reports
/// completions as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, EngineError> {
        let uploader = ReqwestUploader::new(settings)?;
        let search = ReqwestJobSearch::new(settings)?;
        Self::with_collaborators(Box::new(uploader), Box::new(search))
    }

    pub fn with_collaborators(
        uploader: Box<dyn Uploader>,
        search: Box<dyn JobSearch>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let coordinators = Arc::new(Coordinators {
            upload: UploadCoordinator::new(uploader),
            pagination: PaginationCoordinator::new(search),
        });

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let coordinators = coordinators.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&coordinators, command, event_tx).await;
                });
            }
            scan_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn upload(&self, file: ValidFile) {
        self.send(EngineCommand::Upload(file));
    }

    pub fn fetch_page(&self, skills: Vec<String>, cursor: Cursor) {
        self.send(EngineCommand::FetchPage { skills, cursor });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            scan_warn!("Engine worker has stopped; command dropped");
        }
    }
}

async fn handle_command(
    coordinators: &Coordinators,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Upload(file) => {
            EngineEvent::UploadCompleted(coordinators.upload.submit(&file).await)
        }
        EngineCommand::FetchPage { skills, cursor } => {
            match coordinators.pagination.fetch_next(&skills, &cursor).await {
                Some(result) => EngineEvent::PageCompleted(result),
                None => EngineEvent::PageRejected,
            }
        }
    };
    let _ = event_tx.send(event);
}
