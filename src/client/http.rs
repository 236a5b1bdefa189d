//! HTTP implementation of the analysis service client

use crate::client::{AnalysisService, ANALYSIS_FAILED_MESSAGE, ANALYZE_ENDPOINT, SEARCH_JOBS_ENDPOINT};
use crate::config::ServerConfig;
use crate::error::{MatchClientError, Result};
use crate::input::AnalysisUpload;
use crate::model::{AnalysisResult, ErrorBody, JobSearchRequest, JobSearchResponse};
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct HttpAnalysisService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisService {
    /// Without a timeout the client waits until the connection itself
    /// resolves or fails.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), config.timeout_secs.map(Duration::from_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

/// Pull `error` out of a failure body, falling back to the generic message
/// when the body is not JSON or the field is missing or empty.
fn analysis_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string())
}

/// Decode a success body. The service may answer 200 with `{"error": ...}`;
/// that message is surfaced instead of a decode failure.
fn decode_analysis(status: u16, body: &str) -> Result<AnalysisResult> {
    match serde_json::from_str::<AnalysisResult>(body) {
        Ok(result) => Ok(result),
        Err(e) => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .filter(|message| !message.is_empty());
            match message {
                Some(message) => {
                    warn!("Analysis answered {} with error: {}", status, message);
                    Err(MatchClientError::Service { status, message })
                }
                None => Err(MatchClientError::Serialization(e)),
            }
        }
    }
}

impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, upload: &AnalysisUpload) -> Result<AnalysisResult> {
        let url = self.url(ANALYZE_ENDPOINT);

        let resume = Part::bytes(upload.file.bytes.clone())
            .file_name(upload.file.name.clone())
            .mime_str(&upload.file.content_type)?;
        let form = Form::new()
            .part("resume", resume)
            .text("job_role", upload.job_role.clone());

        info!("Submitting {} for '{}' to {}", upload.file.name, upload.job_role, url);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        debug!("Analysis response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = analysis_error_message(&body);
            warn!("Analysis rejected with {}: {}", status, message);
            return Err(MatchClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        decode_analysis(status.as_u16(), &body)
    }

    async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobSearchResponse> {
        let url = self.url(SEARCH_JOBS_ENDPOINT);
        info!("Searching jobs for '{}' in '{}'", request.job_role, request.location);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Job search failed with {}", status);
            return Err(MatchClientError::JobSearchFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<JobSearchResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(analysis_error_message(r#"{"error":"Unsupported file type"}"#), "Unsupported file type");
        assert_eq!(analysis_error_message(r#"{"error":""}"#), "Analysis failed");
        assert_eq!(analysis_error_message(r#"{"detail":"x"}"#), "Analysis failed");
        assert_eq!(analysis_error_message("<html>502 Bad Gateway</html>"), "Analysis failed");
    }

    #[test]
    fn test_success_status_with_error_body() {
        let err = decode_analysis(200, r#"{"error":"Invalid job role."}"#).unwrap_err();
        assert!(matches!(err, MatchClientError::Service { status: 200, .. }));
        assert_eq!(err.to_string(), "Invalid job role.");
    }

    #[test]
    fn test_malformed_success_body_is_serialization_error() {
        let err = decode_analysis(200, "not json").unwrap_err();
        assert!(matches!(err, MatchClientError::Serialization(_)));

        let err = decode_analysis(200, r#"{"error":""}"#).unwrap_err();
        assert!(matches!(err, MatchClientError::Serialization(_)));
    }

    #[test]
    fn test_decodes_analysis_body() {
        let result = decode_analysis(200, r#"{"match_percentage": 55.5, "matched_skills": ["Go"]}"#).unwrap();
        assert_eq!(result.match_percentage, 55.5);
        assert_eq!(result.matched_skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_base_url_normalized() {
        let service = HttpAnalysisService::new("http://localhost:5000/", None).unwrap();
        assert_eq!(service.base_url(), "http://localhost:5000");
        assert_eq!(service.url(ANALYZE_ENDPOINT), "http://localhost:5000/analyze");
    }
}
