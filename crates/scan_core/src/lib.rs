//! Resume scan core: pure workflow state machine, validation and view-model helpers.
mod effect;
mod error;
mod model;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use error::{
    PaginationError, UploadError, ValidationError, NO_FILE_MESSAGE, PAGINATION_FALLBACK_MESSAGE,
    TOO_LARGE_MESSAGE, UNSUPPORTED_TYPE_MESSAGE, UPLOAD_FALLBACK_MESSAGE,
};
pub use model::{Contact, Cursor, Job, JobPage, ScanResult};
pub use msg::Msg;
pub use state::{AppState, FailureStage, Phase, WorkflowState};
pub use update::update;
pub use validate::{
    validate, CandidateFile, ValidFile, DOCX_MEDIA_TYPE, MAX_FILE_BYTES, PDF_MEDIA_TYPE,
};
pub use view_model::{
    JobRowView, WorkflowView, MISSING_CONTACT_TEXT, NO_JOBS_TEXT, NO_SKILLS_TEXT,
};
