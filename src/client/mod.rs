//! Access to the analysis service
//! The controller talks to the backend only through [`AnalysisService`].

pub mod http;

use crate::error::Result;
use crate::input::AnalysisUpload;
use crate::model::{AnalysisResult, JobSearchRequest, JobSearchResponse};

pub use http::HttpAnalysisService;

pub const ANALYZE_ENDPOINT: &str = "/analyze";
pub const SEARCH_JOBS_ENDPOINT: &str = "/search_jobs";

/// Fallback shown when an `/analyze` failure carries no usable message.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed";

pub trait AnalysisService {
    /// Post the resume and role. Non-success statuses come back as
    /// [`crate::MatchClientError::Service`] carrying the server's message.
    fn analyze(&self, upload: &AnalysisUpload) -> impl std::future::Future<Output = Result<AnalysisResult>> + Send;

    /// Non-success statuses come back as
    /// [`crate::MatchClientError::JobSearchFailed`].
    fn search_jobs(&self, request: &JobSearchRequest) -> impl std::future::Future<Output = Result<JobSearchResponse>> + Send;
}
