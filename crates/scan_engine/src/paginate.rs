use std::sync::atomic::{AtomicBool, Ordering};

use scan_core::{Cursor, JobPage, PaginationError};
use scan_logging::{scan_debug, scan_info, scan_warn};
use url::Url;

use crate::wire::JobsResponse;
use crate::{transport, ClientSettings, EngineError};

#[async_trait::async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(&self, skills: &[String], cursor: &Cursor) -> Result<JobPage, PaginationError>;
}

#[async_trait::async_trait]
impl JobSearch for Box<dyn JobSearch> {
    async fn search(&self, skills: &[String], cursor: &Cursor) -> Result<JobPage, PaginationError> {
        (**self).search(skills, cursor).await
    }
}

/// Reads `{base}/jobs?skills=a,b&page=<cursor>`.
#[derive(Debug, Clone)]
pub struct ReqwestJobSearch {
    client: reqwest::Client,
    endpoint: Url,
    max_response_bytes: u64,
}

impl ReqwestJobSearch {
    pub fn new(settings: &ClientSettings) -> Result<Self, EngineError> {
        Ok(Self {
            client: settings.build_client()?,
            endpoint: settings.jobs_url()?,
            max_response_bytes: settings.max_response_bytes,
        })
    }

    /// Skill order is preserved; it carries relevance.
    pub fn request_url(&self, skills: &[String], cursor: &Cursor) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("skills", &skills.join(","))
            .append_pair("page", cursor.as_str());
        url
    }
}

#[async_trait::async_trait]
impl JobSearch for ReqwestJobSearch {
    async fn search(&self, skills: &[String], cursor: &Cursor) -> Result<JobPage, PaginationError> {
        let request = self.client.get(self.request_url(skills, cursor));
        let response: JobsResponse = transport::execute(request, self.max_response_bytes).await?;
        Ok(JobPage::from(response))
    }
}

/// Owns the "fetch next page" transaction and allows at most one at a time.
pub struct PaginationCoordinator<S> {
    search: S,
    in_flight: AtomicBool,
}

impl<S: JobSearch> PaginationCoordinator<S> {
    pub fn new(search: S) -> Self {
        Self {
            search,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Fetches the page after `cursor`.
    ///
    /// Returns `None` without touching the network when another call on this
    /// coordinator is still outstanding. Callers must only ask for a page
    /// when skills are known and a cursor exists.
    pub async fn fetch_next(
        &self,
        skills: &[String],
        cursor: &Cursor,
    ) -> Option<Result<JobPage, PaginationError>> {
        debug_assert!(!skills.is_empty(), "page requested without skills");
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            scan_warn!("Page request for cursor {} rejected: another is in flight", cursor);
            return None;
        };

        scan_debug!("Requesting page {} for {} skills", cursor, skills.len());
        let result = self.search.search(skills, cursor).await;
        match &result {
            Ok(page) => scan_info!(
                "Page {} returned {} jobs, more pages: {}",
                cursor,
                page.jobs.len(),
                page.next_cursor.is_some()
            ),
            Err(err) => scan_warn!("Page {} failed: {}", cursor, err),
        }
        Some(result)
    }
}

/// Clears the in-flight flag on drop, including when the future is dropped mid-request.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
