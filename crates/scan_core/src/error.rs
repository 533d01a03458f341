use thiserror::Error;

pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Please upload a PDF or DOCX file";
pub const TOO_LARGE_MESSAGE: &str = "File size exceeds 5MB limit";
pub const NO_FILE_MESSAGE: &str = "Please select a file first";
pub const UPLOAD_FALLBACK_MESSAGE: &str = "Failed to process resume";
pub const PAGINATION_FALLBACK_MESSAGE: &str = "Failed to load more jobs";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unsupported media type {media_type:?}")]
    UnsupportedType { media_type: String },
    #[error("file is {size} bytes, limit is {max}")]
    TooLarge { size: u64, max: u64 },
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::UnsupportedType { .. } => UNSUPPORTED_TYPE_MESSAGE.to_string(),
            ValidationError::TooLarge { .. } => TOO_LARGE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("collaborator rejected upload (status {status}): {message:?}")]
    CollaboratorRejected { status: u16, message: Option<String> },
    #[error("invalid upload payload: {0}")]
    InvalidPayload(String),
}

impl UploadError {
    /// Human-readable message; the collaborator's own wording wins when it sent one.
    pub fn user_message(&self) -> String {
        user_message(self.collaborator_message(), UPLOAD_FALLBACK_MESSAGE)
    }

    pub fn collaborator_message(&self) -> Option<&str> {
        match self {
            UploadError::CollaboratorRejected { message, .. } => message.as_deref(),
            UploadError::Transport(_) | UploadError::InvalidPayload(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("collaborator rejected page request (status {status}): {message:?}")]
    CollaboratorRejected { status: u16, message: Option<String> },
    #[error("invalid jobs payload: {0}")]
    InvalidPayload(String),
}

impl PaginationError {
    pub fn user_message(&self) -> String {
        user_message(self.collaborator_message(), PAGINATION_FALLBACK_MESSAGE)
    }

    pub fn collaborator_message(&self) -> Option<&str> {
        match self {
            PaginationError::CollaboratorRejected { message, .. } => message.as_deref(),
            PaginationError::Transport(_) | PaginationError::InvalidPayload(_) => None,
        }
    }
}

fn user_message(collaborator: Option<&str>, fallback: &str) -> String {
    collaborator
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
