#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a document.
    FileChosen(crate::CandidateFile),
    /// User clicked Scan Resume.
    ScanClicked,
    /// User clicked Load More Jobs.
    LoadMoreClicked,
    /// Engine completion for the upload transaction.
    UploadFinished(Result<crate::ScanResult, crate::UploadError>),
    /// Engine completion for a page request.
    PageFetched(Result<crate::JobPage, crate::PaginationError>),
    /// Fallback for placeholder wiring.
    NoOp,
}
