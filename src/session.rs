//! Session context shared between the analysis and job search flows

use crate::model::{AnalysisResult, JobSearchRequest};

/// State carried from a successful analysis to later job searches.
///
/// Only [`crate::controller::PageController`] writes it, and only after the
/// analysis service answered successfully.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    current_resume_text: String,
    current_job_role: String,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful analysis. The role falls back to the one the
    /// user selected when the server leaves it out.
    pub fn record_analysis(&mut self, result: &AnalysisResult, selected_role: &str) {
        self.current_resume_text = result.resume_text.clone();
        self.current_job_role = match result.job_role.as_deref() {
            Some(role) if !role.is_empty() => role.to_string(),
            _ => selected_role.to_string(),
        };
    }

    pub fn resume_text(&self) -> &str {
        &self.current_resume_text
    }

    /// `None` until an analysis has set a non-empty role.
    pub fn job_role(&self) -> Option<&str> {
        if self.current_job_role.is_empty() {
            None
        } else {
            Some(&self.current_job_role)
        }
    }

    /// Build the job search body, or `None` while no role is known.
    pub fn job_search_request(&self, location: &str) -> Option<JobSearchRequest> {
        self.job_role().map(|role| JobSearchRequest {
            job_role: role.to_string(),
            location: location.to_string(),
            resume_text: self.current_resume_text.clone(),
        })
    }
}
