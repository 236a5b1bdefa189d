//! Page controller: analysis submission and job search flows

use crate::client::AnalysisService;
use crate::input::{SelectedFile, UploadState};
use crate::session::SessionContext;
use crate::view::page::PageSnapshot;
use crate::view::{JobResultsView, PageView, ResultsPanel};
use log::{error, info, warn};
use std::time::Duration;

pub const MISSING_INPUT_ALERT: &str = "Please select a job role and upload a resume.";
pub const NO_ANALYSIS_ALERT: &str = "Please analyze a resume first to set the target job role.";

/// How a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// A precondition failed; no request was sent.
    Blocked,
    Completed,
    /// The request failed and the error was shown to the user.
    Failed,
}

/// Owns the upload form, the session and the page view. Flows take
/// `&mut self`, so a second submission cannot start while one is in flight.
pub struct PageController<S: AnalysisService> {
    service: S,
    upload: UploadState,
    session: SessionContext,
    view: PageView,
    location: String,
    roles: Vec<String>,
}

impl<S: AnalysisService> PageController<S> {
    pub fn new(service: S, counter_step: Duration) -> Self {
        Self {
            service,
            upload: UploadState::default(),
            session: SessionContext::new(),
            view: PageView::new(counter_step),
            location: String::new(),
            roles: Vec::new(),
        }
    }

    /// Roles offered by the job role selector.
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Files picked from the browse dialog.
    pub fn browse_files(&mut self, files: Vec<SelectedFile>) -> bool {
        self.view.drop_zone.browse(&mut self.upload.file_input, files)
    }

    pub fn drag_over(&mut self) {
        self.view.drop_zone.drag_over();
    }

    pub fn drag_leave(&mut self) {
        self.view.drop_zone.drag_leave();
    }

    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> bool {
        self.view.drop_zone.drop(&mut self.upload.file_input, files)
    }

    pub fn select_job_role(&mut self, role: &str) {
        self.upload.select_job_role(role);
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Submit the upload form to the analysis service.
    pub async fn submit(&mut self) -> FlowOutcome {
        let Some(upload) = self.upload.submission() else {
            warn!("Submission blocked: file or job role missing");
            self.view.alert(MISSING_INPUT_ALERT);
            return FlowOutcome::Blocked;
        };

        self.view.set_analysis_loading(true);

        let outcome = match self.service.analyze(&upload).await {
            Ok(result) => {
                self.session.record_analysis(&result, &upload.job_role);
                info!(
                    "Analysis complete: {}% match for '{}'",
                    result.match_percentage,
                    self.session.job_role().unwrap_or_default()
                );
                self.view.show_results(ResultsPanel::from_result(&result));
                FlowOutcome::Completed
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                self.view.alert(e.to_string());
                FlowOutcome::Failed
            }
        };

        self.view.set_analysis_loading(false);
        outcome
    }

    /// Search jobs for the role of the last successful analysis.
    pub async fn search_jobs(&mut self) -> FlowOutcome {
        let Some(request) = self.session.job_search_request(&self.location) else {
            warn!("Job search blocked: no analyzed role yet");
            self.view.alert(NO_ANALYSIS_ALERT);
            return FlowOutcome::Blocked;
        };

        self.view.set_job_search_loading(true);

        let outcome = match self.service.search_jobs(&request).await {
            Ok(response) => {
                let jobs = JobResultsView::from_jobs(response.jobs.as_deref());
                info!("Job search returned {} listings", jobs.cards().len());
                self.view.show_jobs(jobs);
                FlowOutcome::Completed
            }
            Err(e) => {
                error!("Job search failed: {}", e);
                self.view.show_jobs(JobResultsView::error(&e.to_string()));
                FlowOutcome::Failed
            }
        };

        self.view.set_job_search_loading(false);
        outcome
    }

    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PageView {
        &mut self.view
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot {
            view: &self.view,
            roles: &self.roles,
            selected_role: self.upload.job_role(),
            location: &self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MatchClientError, Result};
    use crate::input::AnalysisUpload;
    use crate::model::{AnalysisResult, JobListing, JobSearchRequest, JobSearchResponse};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeService {
        analyze_calls: Mutex<Vec<String>>,
        search_calls: Mutex<Vec<JobSearchRequest>>,
        fail_analysis: bool,
        fail_search: bool,
    }

    impl AnalysisService for FakeService {
        async fn analyze(&self, upload: &AnalysisUpload) -> Result<AnalysisResult> {
            self.analyze_calls.lock().unwrap().push(upload.job_role.clone());
            if self.fail_analysis {
                return Err(MatchClientError::Service {
                    status: 400,
                    message: "Invalid job role.".to_string(),
                });
            }
            Ok(AnalysisResult {
                resume_text: "python sql git".to_string(),
                job_role: None,
                match_percentage: 33.3,
                missing_skills: vec![],
                matched_skills: vec!["python".to_string()],
                candidate_info: None,
                tips: Some(vec!["Great job!".to_string()]),
                recommendations: None,
            })
        }

        async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobSearchResponse> {
            self.search_calls.lock().unwrap().push(request.clone());
            if self.fail_search {
                return Err(MatchClientError::JobSearchFailed { status: 500 });
            }
            Ok(JobSearchResponse {
                jobs: Some(vec![JobListing {
                    title: "Junior Software Engineer".to_string(),
                    company: "StartUp Hero".to_string(),
                    match_score: 55.0,
                    location: "Lyon".to_string(),
                    description_snippet: "Entry level position.".to_string(),
                    job_url: "#".to_string(),
                }]),
            })
        }
    }

    fn controller(service: FakeService) -> PageController<FakeService> {
        PageController::new(service, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_submit_without_file_is_blocked() {
        let mut page = controller(FakeService::default());
        page.select_job_role("Software Engineer");

        assert_eq!(page.submit().await, FlowOutcome::Blocked);
        assert_eq!(page.view_mut().take_alert().as_deref(), Some(MISSING_INPUT_ALERT));
        assert!(page.service().analyze_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_role_is_blocked() {
        let mut page = controller(FakeService::default());
        page.browse_files(vec![SelectedFile::new("cv.pdf", vec![0])]);

        assert_eq!(page.submit().await, FlowOutcome::Blocked);
        assert!(page.view().pending_alert().is_some());
        assert!(page.service().analyze_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_analysis_then_search() {
        let mut page = controller(FakeService::default());
        page.drop_files(vec![SelectedFile::new("cv.docx", vec![0])]);
        page.select_job_role("Software Engineer");
        page.set_location("Lyon");

        assert_eq!(page.submit().await, FlowOutcome::Completed);
        assert!(page.view().results_visible());
        assert!(!page.view().analyze_button().disabled);
        assert_eq!(page.session().job_role(), Some("Software Engineer"));

        assert_eq!(page.search_jobs().await, FlowOutcome::Completed);
        let calls = page.service().search_calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].resume_text, "python sql git");
        assert_eq!(calls[0].location, "Lyon");
        assert_eq!(page.view().job_results().cards().len(), 1);
        assert!(!page.view().search_button_disabled());
        assert!(!page.view().job_loader_visible());
    }

    #[tokio::test]
    async fn test_failed_analysis_alerts_and_keeps_session_empty() {
        let mut page = controller(FakeService {
            fail_analysis: true,
            ..Default::default()
        });
        page.browse_files(vec![SelectedFile::new("cv.pdf", vec![0])]);
        page.select_job_role("Astronaut");

        assert_eq!(page.submit().await, FlowOutcome::Failed);
        assert_eq!(page.view_mut().take_alert().as_deref(), Some("Invalid job role."));
        assert!(!page.view().results_visible());
        assert!(!page.view().analyze_button().disabled);
        assert!(page.session().job_role().is_none());
    }

    #[tokio::test]
    async fn test_search_before_analysis_is_blocked() {
        let mut page = controller(FakeService::default());
        assert_eq!(page.search_jobs().await, FlowOutcome::Blocked);
        assert_eq!(page.view_mut().take_alert().as_deref(), Some(NO_ANALYSIS_ALERT));
        assert!(page.service().search_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_search_renders_inline_error() {
        let mut page = controller(FakeService {
            fail_search: true,
            ..Default::default()
        });
        page.browse_files(vec![SelectedFile::new("cv.pdf", vec![0])]);
        page.select_job_role("Data Scientist");
        page.submit().await;

        assert_eq!(page.search_jobs().await, FlowOutcome::Failed);
        assert_eq!(
            page.view().job_results(),
            &JobResultsView::Error("Error searching jobs: Failed to fetch jobs".to_string())
        );
        assert!(page.view().pending_alert().is_none());
        assert!(!page.view().search_button_disabled());
    }
}
