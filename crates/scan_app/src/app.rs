use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use scan_core::{update, AppState, Msg, Phase};
use scan_engine::EngineHandle;
use scan_logging::scan_debug;

use crate::cli::{self, Args};
use crate::effects::EffectRunner;
use crate::render;

/// Slack on top of the client timeouts before the driver gives up on the engine.
const ENGINE_GRACE: Duration = Duration::from_secs(5);

pub fn run(args: &Args) -> Result<ExitCode> {
    let settings = args.client_settings();
    let engine = EngineHandle::new(&settings).context("failed to start engine")?;
    let wait = settings.connect_timeout + settings.request_timeout + ENGINE_GRACE;

    let mut driver = Driver {
        state: AppState::new(),
        runner: EffectRunner::new(engine),
        out: io::stdout(),
        wait,
    };

    let file = cli::load_candidate(&args.file, args.media_type.as_deref())?;
    driver.dispatch(Msg::FileChosen(file))?;
    driver.dispatch(Msg::ScanClicked)?;
    driver.settle()?;

    for page in 0..args.pages {
        if !driver.state.view().can_load_more {
            scan_debug!("No further pages after {} extra", page);
            break;
        }
        driver.dispatch(Msg::LoadMoreClicked)?;
        driver.settle()?;
    }

    driver.show()?;
    Ok(match driver.state.view().phase {
        Phase::Failed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

struct Driver<W> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    wait: Duration,
}

impl<W: Write> Driver<W> {
    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty && self.state.view().busy {
            self.show()?;
        }
        Ok(())
    }

    /// Feeds engine completions back until no transaction is outstanding.
    fn settle(&mut self) -> Result<()> {
        while self.state.workflow().is_busy() {
            let Some(msg) = self.runner.next_msg(self.wait) else {
                bail!("no response from the engine within {:?}", self.wait);
            };
            self.dispatch(msg)?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        render::render(&self.state.view(), &mut self.out).context("failed to write output")?;
        self.out.flush().context("failed to flush output")
    }
}
