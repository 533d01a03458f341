use crate::{Job, Phase};

pub const MISSING_CONTACT_TEXT: &str = "Not found";
pub const NO_SKILLS_TEXT: &str = "No skills detected";
pub const NO_JOBS_TEXT: &str = "No jobs found for your skills";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowView {
    pub phase: Phase,
    pub selected_file: Option<String>,
    pub error: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub jobs: Vec<JobRowView>,
    pub has_result: bool,
    pub can_scan: bool,
    pub can_load_more: bool,
    pub busy: bool,
    pub dirty: bool,
}

impl WorkflowView {
    pub fn email_text(&self) -> &str {
        self.email.as_deref().unwrap_or(MISSING_CONTACT_TEXT)
    }

    pub fn phone_text(&self) -> &str {
        self.phone.as_deref().unwrap_or(MISSING_CONTACT_TEXT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}

impl From<&Job> for JobRowView {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            url: job.url.clone(),
        }
    }
}
