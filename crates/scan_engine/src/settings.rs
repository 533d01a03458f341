use std::time::Duration;

use url::Url;

use crate::EngineError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";
pub const DEFAULT_UPLOAD_FIELD: &str = "resume";

const UPLOAD_PATH: &str = "upload";
const JOBS_PATH: &str = "jobs";

/// Connection settings for the resume-matching service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Service root; `upload` and `jobs` are resolved relative to it.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Ceiling on any response body the client will buffer.
    pub max_response_bytes: u64,
    /// Multipart field carrying the document.
    pub upload_field: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_response_bytes: 2 * 1024 * 1024,
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn upload_url(&self) -> Result<Url, EngineError> {
        self.endpoint(UPLOAD_PATH)
    }

    pub fn jobs_url(&self) -> Result<Url, EngineError> {
        self.endpoint(JOBS_PATH)
    }

    fn endpoint(&self, path: &str) -> Result<Url, EngineError> {
        let invalid = |source| EngineError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        };
        let mut base = Url::parse(&self.base_url).map_err(invalid)?;
        if base.cannot_be_a_base() {
            return Err(EngineError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }
        // Without a trailing slash `join` would replace the last path segment.
        if !base.path().ends_with('/') {
            let path_with_slash = format!("{}/", base.path());
            base.set_path(&path_with_slash);
        }
        base.join(path).map_err(invalid)
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client, EngineError> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
            .map_err(|err| EngineError::Client(err.to_string()))
    }
}
