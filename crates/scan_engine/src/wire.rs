//! JSON shapes exchanged with the resume-matching service.

use scan_core::{Contact, Cursor, Job, JobPage, ScanResult};
use scan_logging::scan_warn;
use serde::Deserialize;

use crate::types::CallError;

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    contact: ContactDto,
    skills: Vec<String>,
    jobs: Vec<JobDto>,
    #[serde(default)]
    next_page: Option<CursorDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobsResponse {
    jobs: Vec<JobDto>,
    #[serde(default)]
    next_page: Option<CursorDto>,
}

#[derive(Debug, Default, Deserialize)]
struct ContactDto {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobDto {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    location: String,
    url: String,
}

/// Page tokens are opaque; the service has been seen sending both strings and numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CursorDto {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl From<CursorDto> for Cursor {
    fn from(dto: CursorDto) -> Self {
        match dto {
            CursorDto::Text(token) => Cursor::new(token),
            CursorDto::Number(number) => Cursor::new(number.to_string()),
        }
    }
}

impl From<UploadResponse> for ScanResult {
    fn from(response: UploadResponse) -> Self {
        let contact = Contact {
            email: non_empty(response.contact.email),
            phone: non_empty(response.contact.phone),
        };
        let first_page = into_page(response.jobs, response.next_page);
        ScanResult::new(contact, response.skills, first_page)
    }
}

impl From<JobsResponse> for JobPage {
    fn from(response: JobsResponse) -> Self {
        into_page(response.jobs, response.next_page)
    }
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, CallError> {
    serde_json::from_slice(body).map_err(|err| CallError::InvalidPayload(err.to_string()))
}

/// Extracts `{ "error": "..." }` from a failure body; anything else yields `None`.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| non_empty(body.error))
}

fn into_page(jobs: Vec<JobDto>, next_page: Option<CursorDto>) -> JobPage {
    let jobs = jobs
        .into_iter()
        .map(|dto| Job {
            title: dto.title,
            company: dto.company,
            location: dto.location,
            url: dto.url,
        })
        .filter(|job| {
            let keep = job.has_absolute_url();
            if !keep {
                scan_warn!("Dropping job {:?} with non-absolute url {:?}", job.title, job.url);
            }
            keep
        })
        .collect();
    JobPage {
        jobs,
        next_cursor: next_page.map(Cursor::from),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
