use scan_core::{JobPage, PaginationError, ScanResult, UploadError};
use thiserror::Error;

/// Set-up failures; transaction failures travel as [`UploadError`] / [`PaginationError`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid service url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted(Result<ScanResult, UploadError>),
    PageCompleted(Result<JobPage, PaginationError>),
    /// A page request arrived while another was still outstanding; nothing was sent.
    PageRejected,
}

/// Failure of a single collaborator call, before it is tagged with its transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CallError {
    Transport(String),
    Rejected { status: u16, message: Option<String> },
    InvalidPayload(String),
}

impl From<CallError> for UploadError {
    fn from(err: CallError) -> Self {
        match err {
            CallError::Transport(message) => UploadError::Transport(message),
            CallError::Rejected { status, message } => {
                UploadError::CollaboratorRejected { status, message }
            }
            CallError::InvalidPayload(message) => UploadError::InvalidPayload(message),
        }
    }
}

impl From<CallError> for PaginationError {
    fn from(err: CallError) -> Self {
        match err {
            CallError::Transport(message) => PaginationError::Transport(message),
            CallError::Rejected { status, message } => {
                PaginationError::CollaboratorRejected { status, message }
            }
            CallError::InvalidPayload(message) => PaginationError::InvalidPayload(message),
        }
    }
}
