use std::time::Duration;

use scan_core::{Effect, Msg};
use scan_engine::{EngineEvent, EngineHandle};
use scan_logging::{scan_info, scan_warn};

/// Executes effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Upload { file } => {
                    scan_info!("Upload file={:?} bytes={}", file.name(), file.size());
                    self.engine.upload(file);
                }
                Effect::FetchPage { skills, cursor } => {
                    scan_info!("FetchPage skills={} cursor={}", skills.len(), cursor);
                    self.engine.fetch_page(skills, cursor);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadCompleted(result) => Msg::UploadFinished(result),
        EngineEvent::PageCompleted(result) => Msg::PageFetched(result),
        EngineEvent::PageRejected => {
            scan_warn!("Engine rejected an overlapping page request");
            Msg::NoOp
        }
    }
}
