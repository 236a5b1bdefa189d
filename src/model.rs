//! Wire types exchanged with the analysis service

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Raw resume text, kept for the job search.
    #[serde(default)]
    pub resume_text: String,

    #[serde(default)]
    pub job_role: Option<String>,

    /// Match score (0-100), possibly fractional.
    pub match_percentage: f64,

    #[serde(default)]
    pub missing_skills: Vec<MissingSkill>,

    #[serde(default)]
    pub matched_skills: Vec<String>,

    #[serde(default)]
    pub candidate_info: Option<CandidateInfo>,

    #[serde(default)]
    pub tips: Option<Vec<String>>,

    #[serde(default)]
    pub recommendations: Option<Vec<RoleRecommendation>>,
}

/// A required skill absent from the resume, with a learning resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInfo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

/// The service sends `null` for contact details it could not find.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecommendation {
    pub role: String,
    pub percentage: f64,
}

/// Body of `POST /search_jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub job_role: String,
    pub location: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub jobs: Option<Vec<JobListing>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default = "unknown_title")]
    pub title: String,

    #[serde(default = "unknown_company")]
    pub company: String,

    #[serde(default)]
    pub match_score: f64,

    #[serde(default = "unknown_location")]
    pub location: String,

    #[serde(default)]
    pub description_snippet: String,

    #[serde(default = "placeholder_url")]
    pub job_url: String,
}

fn unknown_title() -> String {
    "Unknown Role".to_string()
}

fn unknown_company() -> String {
    "Unknown Company".to_string()
}

fn unknown_location() -> String {
    "Unknown Location".to_string()
}

fn placeholder_url() -> String {
    "#".to_string()
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
