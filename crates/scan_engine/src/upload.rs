use reqwest::multipart::{Form, Part};
use scan_core::{ScanResult, UploadError, ValidFile};
use scan_logging::{scan_info, scan_warn};
use url::Url;

use crate::types::CallError;
use crate::wire::UploadResponse;
use crate::{transport, ClientSettings, EngineError};

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, file: &ValidFile) -> Result<ScanResult, UploadError>;
}

#[async_trait::async_trait]
impl Uploader for Box<dyn Uploader> {
    async fn upload(&self, file: &ValidFile) -> Result<ScanResult, UploadError> {
        (**self).upload(file).await
    }
}

/// Posts the document as multipart form data to `{base}/upload`.
#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    client: reqwest::Client,
    endpoint: Url,
    field: String,
    max_response_bytes: u64,
}

impl ReqwestUploader {
    pub fn new(settings: &ClientSettings) -> Result<Self, EngineError> {
        Ok(Self {
            client: settings.build_client()?,
            endpoint: settings.upload_url()?,
            field: settings.upload_field.clone(),
            max_response_bytes: settings.max_response_bytes,
        })
    }

    fn form(&self, file: &ValidFile) -> Result<Form, CallError> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())
            .map_err(|err| CallError::Transport(format!("invalid media type: {err}")))?;
        Ok(Form::new().part(self.field.clone(), part))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(&self, file: &ValidFile) -> Result<ScanResult, UploadError> {
        let form = self.form(file)?;
        let request = self.client.post(self.endpoint.clone()).multipart(form);
        let response: UploadResponse = transport::execute(request, self.max_response_bytes).await?;
        Ok(ScanResult::from(response))
    }
}

/// Owns the "submit resume" transaction: exactly one collaborator call per
/// [`UploadCoordinator::submit`], no retries.
///
/// Overlapping submits are the caller's concern; the workflow state machine
/// only issues one upload at a time.
pub struct UploadCoordinator<U> {
    uploader: U,
}

impl<U: Uploader> UploadCoordinator<U> {
    pub fn new(uploader: U) -> Self {
        Self { uploader }
    }

    pub async fn submit(&self, file: &ValidFile) -> Result<ScanResult, UploadError> {
        scan_info!(
            "Uploading {:?} ({} bytes, {})",
            file.name(),
            file.size(),
            file.media_type()
        );
        let result = self.uploader.upload(file).await;
        match &result {
            Ok(scan) => scan_info!(
                "Upload of {:?} parsed: {} skills, {} jobs, more pages: {}",
                file.name(),
                scan.skills().len(),
                scan.jobs().len(),
                scan.cursor().is_some()
            ),
            Err(err) => scan_warn!("Upload of {:?} failed: {}", file.name(), err),
        }
        result
    }
}
