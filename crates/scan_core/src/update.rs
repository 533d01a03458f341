use scan_logging::{scan_debug, scan_warn};

use crate::{
    validate, AppState, CandidateFile, Effect, FailureStage, Msg, ScanResult, ValidFile,
    WorkflowState, NO_FILE_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let current = state.take_workflow();
    let from = current.phase();

    let (next, effects, changed) = match (current, msg) {
        (current, Msg::FileChosen(file)) if current.is_busy() => {
            // No cancellation: the outstanding transaction owns the state until it resolves.
            scan_warn!(
                "Ignoring file {:?} while {:?} is in flight",
                file.name,
                current.phase()
            );
            (current, Vec::new(), false)
        }
        (current, Msg::FileChosen(file)) => (select_file(current, file), Vec::new(), true),

        (WorkflowState::FileSelected(file), Msg::ScanClicked) => start_upload(file),
        (WorkflowState::Failed { file: Some(file), .. }, Msg::ScanClicked) => {
            scan_debug!("Rescanning {:?} after failure", file.name());
            start_upload(file)
        }
        (WorkflowState::Idle, Msg::ScanClicked) => (
            WorkflowState::Failed {
                stage: FailureStage::Selection,
                message: NO_FILE_MESSAGE.to_string(),
                prior: None,
                file: None,
            },
            Vec::new(),
            true,
        ),
        (current, Msg::ScanClicked) => (current, Vec::new(), false),

        (WorkflowState::ScanReady(result), Msg::LoadMoreClicked) => match request_more(result) {
            Ok((next, effect)) => (next, vec![effect], true),
            Err(result) => (WorkflowState::ScanReady(result), Vec::new(), false),
        },
        (
            WorkflowState::Failed {
                stage,
                message,
                prior: Some(result),
                file,
            },
            Msg::LoadMoreClicked,
        ) => match request_more(result) {
            Ok((next, effect)) => (next, vec![effect], true),
            Err(result) => (
                WorkflowState::Failed {
                    stage,
                    message,
                    prior: Some(result),
                    file,
                },
                Vec::new(),
                false,
            ),
        },
        (current, Msg::LoadMoreClicked) => (current, Vec::new(), false),

        (WorkflowState::Uploading(_), Msg::UploadFinished(Ok(result))) => {
            (WorkflowState::ScanReady(result), Vec::new(), true)
        }
        (WorkflowState::Uploading(file), Msg::UploadFinished(Err(err))) => {
            scan_warn!("Upload of {:?} failed: {}", file.name(), err);
            (
                WorkflowState::Failed {
                    stage: FailureStage::Upload,
                    message: err.user_message(),
                    prior: None,
                    file: Some(file),
                },
                Vec::new(),
                true,
            )
        }
        (current, Msg::UploadFinished(_)) => {
            scan_warn!("Dropping stale upload completion in {:?}", current.phase());
            (current, Vec::new(), false)
        }

        (WorkflowState::PaginatingMore(mut result), Msg::PageFetched(Ok(page))) => {
            scan_debug!(
                "Appending {} jobs to {} (more: {})",
                page.jobs.len(),
                result.jobs().len(),
                page.next_cursor.is_some()
            );
            result.append_page(page);
            (WorkflowState::ScanReady(result), Vec::new(), true)
        }
        (WorkflowState::PaginatingMore(result), Msg::PageFetched(Err(err))) => {
            scan_warn!(
                "Page request failed after {} jobs: {}",
                result.jobs().len(),
                err
            );
            (
                WorkflowState::Failed {
                    stage: FailureStage::Pagination,
                    message: err.user_message(),
                    prior: Some(result),
                    file: None,
                },
                Vec::new(),
                true,
            )
        }
        (current, Msg::PageFetched(_)) => {
            scan_warn!("Dropping stale page completion in {:?}", current.phase());
            (current, Vec::new(), false)
        }

        (current, Msg::NoOp) => (current, Vec::new(), false),
    };

    if changed {
        scan_debug!("Workflow {:?} -> {:?}", from, next.phase());
    }
    state.set_workflow(next, changed);
    (state, effects)
}

fn start_upload(file: ValidFile) -> (WorkflowState, Vec<Effect>, bool) {
    let effect = Effect::Upload { file: file.clone() };
    (WorkflowState::Uploading(file), vec![effect], true)
}

/// A valid pick replaces whatever was shown before; an invalid one keeps the
/// last result and the last valid file alongside the error.
fn select_file(current: WorkflowState, file: CandidateFile) -> WorkflowState {
    match validate(file) {
        Ok(valid) => {
            scan_debug!(
                "Selected {:?} ({} bytes, {})",
                valid.name(),
                valid.size(),
                valid.media_type()
            );
            WorkflowState::FileSelected(valid)
        }
        Err(err) => {
            scan_warn!("Rejected file: {}", err);
            let (prior, file) = current.into_retained();
            WorkflowState::Failed {
                stage: FailureStage::Validation,
                message: err.user_message(),
                prior,
                file,
            }
        }
    }
}

/// Moves to `PaginatingMore` when another page exists; hands the result back otherwise.
fn request_more(result: ScanResult) -> Result<(WorkflowState, Effect), ScanResult> {
    if !result.has_more() {
        return Err(result);
    }
    let Some(cursor) = result.cursor().cloned() else {
        return Err(result);
    };
    let effect = Effect::FetchPage {
        skills: result.skills().to_vec(),
        cursor,
    };
    Ok((WorkflowState::PaginatingMore(result), effect))
}
