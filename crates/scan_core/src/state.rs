use crate::view_model::{JobRowView, WorkflowView};
use crate::{ScanResult, ValidFile};

/// Which transaction a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Scan requested with no file selected.
    Selection,
    Validation,
    Upload,
    Pagination,
}

/// Coarse phase of the workflow, as shown to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    ScanReady,
    PaginatingMore,
    Failed,
}

/// The workflow state machine.
///
/// Only one variant is live at a time, so an upload and a page request can
/// never be outstanding together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    FileSelected(ValidFile),
    /// Holds the document being sent so a failed upload can be retried.
    Uploading(ValidFile),
    ScanReady(ScanResult),
    PaginatingMore(ScanResult),
    Failed {
        stage: FailureStage,
        message: String,
        /// Last good result, kept so a late failure never loses fetched jobs.
        prior: Option<ScanResult>,
        /// Last valid selection; scanning again re-uploads it.
        file: Option<ValidFile>,
    },
}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Idle => Phase::Idle,
            WorkflowState::FileSelected(_) => Phase::FileSelected,
            WorkflowState::Uploading(_) => Phase::Uploading,
            WorkflowState::ScanReady(_) => Phase::ScanReady,
            WorkflowState::PaginatingMore(_) => Phase::PaginatingMore,
            WorkflowState::Failed { .. } => Phase::Failed,
        }
    }

    /// The scan result visible in this state, if any.
    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            WorkflowState::ScanReady(result) | WorkflowState::PaginatingMore(result) => {
                Some(result)
            }
            WorkflowState::Failed { prior, .. } => prior.as_ref(),
            WorkflowState::Idle | WorkflowState::FileSelected(_) | WorkflowState::Uploading(_) => {
                None
            }
        }
    }

    /// The valid file a scan would upload (or is uploading), if any.
    pub fn selected_file(&self) -> Option<&ValidFile> {
        match self {
            WorkflowState::FileSelected(file) | WorkflowState::Uploading(file) => Some(file),
            WorkflowState::Failed { file, .. } => file.as_ref(),
            WorkflowState::Idle | WorkflowState::ScanReady(_) | WorkflowState::PaginatingMore(_) => {
                None
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            WorkflowState::Uploading(_) | WorkflowState::PaginatingMore(_)
        )
    }

    /// Splits into the result and the selection that outlive a failure.
    pub(crate) fn into_retained(self) -> (Option<ScanResult>, Option<ValidFile>) {
        match self {
            WorkflowState::ScanReady(result) | WorkflowState::PaginatingMore(result) => {
                (Some(result), None)
            }
            WorkflowState::FileSelected(file) | WorkflowState::Uploading(file) => {
                (None, Some(file))
            }
            WorkflowState::Failed { prior, file, .. } => (prior, file),
            WorkflowState::Idle => (None, None),
        }
    }
}

/// Aggregate owned by the driver: the workflow plus a render-coalescing flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    workflow: WorkflowState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn view(&self) -> WorkflowView {
        let workflow = &self.workflow;
        let result = workflow.result();
        let error = match workflow {
            WorkflowState::Failed { message, .. } => Some(message.clone()),
            _ => None,
        };
        let selected_file = workflow.selected_file().map(|file| file.name().to_string());

        WorkflowView {
            phase: workflow.phase(),
            selected_file,
            error,
            email: result.and_then(|r| r.contact().email.clone()),
            phone: result.and_then(|r| r.contact().phone.clone()),
            skills: result.map(|r| r.skills().to_vec()).unwrap_or_default(),
            jobs: result
                .map(|r| r.jobs().iter().map(JobRowView::from).collect())
                .unwrap_or_default(),
            has_result: result.is_some(),
            can_scan: !workflow.is_busy() && workflow.selected_file().is_some(),
            can_load_more: !workflow.is_busy() && result.is_some_and(ScanResult::has_more),
            busy: workflow.is_busy(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn take_workflow(&mut self) -> WorkflowState {
        std::mem::take(&mut self.workflow)
    }

    pub(crate) fn set_workflow(&mut self, workflow: WorkflowState, changed: bool) {
        self.workflow = workflow;
        if changed {
            self.dirty = true;
        }
    }
}
