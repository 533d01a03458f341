//! Resume scan engine: collaborator transactions and effect execution.
mod engine;
mod paginate;
mod settings;
mod transport;
mod types;
mod upload;
mod wire;

pub use engine::EngineHandle;
pub use paginate::{JobSearch, PaginationCoordinator, ReqwestJobSearch};
pub use settings::{ClientSettings, DEFAULT_BASE_URL, DEFAULT_UPLOAD_FIELD};
pub use types::{EngineError, EngineEvent};
pub use upload::{ReqwestUploader, UploadCoordinator, Uploader};
