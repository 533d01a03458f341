use std::fmt;

/// Contact details extracted from a resume by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A single job listing. `url` is always an absolute link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}

impl Job {
    pub fn has_absolute_url(&self) -> bool {
        // `Url::parse` only accepts absolute URLs; relative input fails with
        // `RelativeUrlWithoutBase`.
        url::Url::parse(&self.url).is_ok()
    }
}

/// Opaque page token handed out by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One batch of jobs plus the token for the batch after it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    /// `None` once the collaborator has no further pages.
    pub next_cursor: Option<Cursor>,
}

/// Accumulated record of one resume scan.
///
/// Jobs are append-only: [`ScanResult::append_page`] is the only mutation and
/// it never reorders what is already there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    contact: Contact,
    skills: Vec<String>,
    jobs: Vec<Job>,
    cursor: Option<Cursor>,
}

impl ScanResult {
    /// Builds a result from the upload response; `first_page` becomes the
    /// initial job list and its cursor the pagination starting point.
    pub fn new(contact: Contact, skills: Vec<String>, first_page: JobPage) -> Self {
        Self {
            contact,
            skills,
            jobs: first_page.jobs,
            cursor: first_page.next_cursor,
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// True when a further page can be requested.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some() && !self.skills.is_empty()
    }

    /// Appends the whole page and replaces the cursor.
    pub fn append_page(&mut self, page: JobPage) {
        self.jobs.extend(page.jobs);
        self.cursor = page.next_cursor;
    }
}
